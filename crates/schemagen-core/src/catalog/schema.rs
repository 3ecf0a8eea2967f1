//! Schema set - the ordered collection of entity schemas handed to the ORM.

use super::{EntitySchema, RelationDef};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// An ordered collection of entity schemas.
///
/// Order is significant: built-in entities come first, then manifest
/// entities in the order they were declared.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaSet {
    entities: Vec<EntitySchema>,
}

impl SchemaSet {
    /// Create an empty schema set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity schema.
    pub fn push(&mut self, entity: EntitySchema) {
        self.entities.push(entity);
    }

    /// Number of entity schemas.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over entity schemas in order.
    pub fn iter(&self) -> std::slice::Iter<'_, EntitySchema> {
        self.entities.iter()
    }

    /// Get an entity by name.
    pub fn get_entity(&self, name: &str) -> Option<&EntitySchema> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// List entity names in order.
    pub fn entity_names(&self) -> Vec<&str> {
        self.entities.iter().map(|e| e.name.as_str()).collect()
    }

    /// Get all relations pointing at an entity, as `(owner, relation name, relation)`.
    pub fn relations_to(&self, entity: &str) -> Vec<(&str, &str, &RelationDef)> {
        self.entities
            .iter()
            .flat_map(move |owner| {
                owner
                    .relations
                    .iter()
                    .filter(move |(_, r)| r.targets(entity))
                    .map(move |(name, r)| (owner.name.as_str(), name.as_str(), r))
            })
            .collect()
    }

    /// Serialize the schema set to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize the schema set to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a schema set from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<Vec<EntitySchema>> for SchemaSet {
    fn from(entities: Vec<EntitySchema>) -> Self {
        Self { entities }
    }
}

impl FromIterator<EntitySchema> for SchemaSet {
    fn from_iter<I: IntoIterator<Item = EntitySchema>>(iter: I) -> Self {
        Self {
            entities: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SchemaSet {
    type Item = EntitySchema;
    type IntoIter = std::vec::IntoIter<EntitySchema>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.into_iter()
    }
}

impl<'a> IntoIterator for &'a SchemaSet {
    type Item = &'a EntitySchema;
    type IntoIter = std::slice::Iter<'a, EntitySchema>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
