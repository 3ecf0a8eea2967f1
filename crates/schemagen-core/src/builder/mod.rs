//! Schema generation from entity manifests.

mod builder;
mod builtins;
mod config;
mod type_map;

pub use builder::EntitySchemaBuilder;
pub use builtins::{
    base_columns, builtin_entities, ADMIN_ENTITY, CREATED_AT_COLUMN, ID_COLUMN, UPDATED_AT_COLUMN,
};
pub use config::BuilderConfig;
pub use type_map::TypeMap;
