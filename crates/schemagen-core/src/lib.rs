//! SchemaGen Core - Entity manifests to ORM schemas.
//!
//! This crate turns declarative entity manifests into the entity schemas an
//! ORM runtime needs to create tables, columns and foreign-key relations.

pub mod builder;
pub mod catalog;
pub mod error;
pub mod manifest;

pub use builder::{BuilderConfig, EntitySchemaBuilder, TypeMap};
pub use catalog::{
    Cardinality, ColumnDef, ColumnType, EntitySchema, Generated, RelationDef, SchemaSet,
};
pub use error::{Error, Result};
pub use manifest::{
    EntityManifest, ManifestProvider, PropType, PropertyManifest, RelationshipManifest,
    StaticManifest, YamlManifest,
};
