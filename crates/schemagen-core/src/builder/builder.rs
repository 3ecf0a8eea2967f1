//! Entity schema builder.

use super::builtins::builtin_entities;
use super::BuilderConfig;
use crate::catalog::{ColumnDef, EntitySchema, RelationDef, SchemaSet};
use crate::error::{Error, Result};
use crate::manifest::{EntityManifest, ManifestProvider};

/// Converts entity manifests into ORM schemas.
///
/// The builder holds no state between calls: every call to
/// [`build_schemas`](Self::build_schemas) reads the provider afresh and
/// returns a newly constructed [`SchemaSet`].
pub struct EntitySchemaBuilder<P> {
    provider: P,
    config: BuilderConfig,
}

impl<P: ManifestProvider> EntitySchemaBuilder<P> {
    /// Create a builder with the default configuration.
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, BuilderConfig::default())
    }

    /// Create a builder with a custom configuration.
    pub fn with_config(provider: P, config: BuilderConfig) -> Self {
        Self { provider, config }
    }

    /// Build the built-in schemas followed by one schema per manifest entity.
    ///
    /// Fails on the first property whose type has no storage mapping.
    pub fn build_schemas(&self) -> Result<SchemaSet> {
        let manifests = self.provider.entity_manifests();
        let mut schemas: SchemaSet = builtin_entities().into_iter().collect();
        for manifest in manifests {
            schemas.push(self.build_entity(manifest)?);
        }

        tracing::info!(
            entities = schemas.len(),
            manifest_entities = manifests.len(),
            "built entity schemas"
        );

        Ok(schemas)
    }

    /// Build the schema for a single entity manifest.
    pub fn build_entity(&self, manifest: &EntityManifest) -> Result<EntitySchema> {
        let mut schema = EntitySchema::new(manifest.class_name.as_str())
            .with_columns(self.config.base_columns.iter().cloned());

        // Properties are layered over the base columns and win on collision.
        // Every property column is nullable for now.
        for property in &manifest.properties {
            let column_type = self.config.type_map.get(&property.prop_type).ok_or_else(|| {
                Error::UnmappedPropertyType {
                    entity: manifest.class_name.clone(),
                    property: property.name.clone(),
                    prop_type: property.prop_type.clone(),
                }
            })?;
            schema = schema.with_column(property.name.as_str(), ColumnDef::nullable(column_type));
        }

        for relationship in &manifest.belongs_to {
            schema = schema.with_relation(
                relationship.name.as_str(),
                RelationDef::many_to_one(relationship.entity.as_str(), relationship.is_eager()),
            );
        }

        tracing::debug!(
            entity = %schema.name,
            columns = schema.columns.len(),
            relations = schema.relations.len(),
            "built entity schema"
        );

        Ok(schema)
    }
}
