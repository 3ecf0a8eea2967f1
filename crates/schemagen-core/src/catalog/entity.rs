//! Entity schema definitions.

use super::column::ColumnDef;
use super::relation::RelationDef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ORM-ready entity schema (table plus its foreign-key relations).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySchema {
    /// Entity name (unique within a schema set).
    pub name: String,
    /// Column definitions keyed by column name.
    pub columns: BTreeMap<String, ColumnDef>,
    /// Relation definitions keyed by relation name.
    pub relations: BTreeMap<String, RelationDef>,
}

impl EntitySchema {
    /// Create an entity schema with no columns or relations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: BTreeMap::new(),
            relations: BTreeMap::new(),
        }
    }

    /// Add a column, replacing any column with the same name.
    pub fn with_column(mut self, name: impl Into<String>, column: ColumnDef) -> Self {
        self.columns.insert(name.into(), column);
        self
    }

    /// Add multiple columns.
    pub fn with_columns<I, N>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = (N, ColumnDef)>,
        N: Into<String>,
    {
        self.columns
            .extend(columns.into_iter().map(|(name, column)| (name.into(), column)));
        self
    }

    /// Add a relation, replacing any relation with the same name.
    pub fn with_relation(mut self, name: impl Into<String>, relation: RelationDef) -> Self {
        self.relations.insert(name.into(), relation);
        self
    }

    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.get(name)
    }

    /// Get a relation by name.
    pub fn get_relation(&self, name: &str) -> Option<&RelationDef> {
        self.relations.get(name)
    }

    /// Column names in sorted order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }
}
