//! Entity manifests: the declarative input to schema generation.

mod entity;
mod provider;
mod yaml;

pub use entity::{
    EntityManifest, PropType, PropertyManifest, RelationshipManifest, UnknownPropType,
};
pub use provider::{ManifestProvider, StaticManifest};
pub use yaml::YamlManifest;
