//! Builder configuration.

use super::builtins::base_columns;
use super::TypeMap;
use crate::catalog::ColumnDef;

/// Read-only configuration for [`EntitySchemaBuilder`](super::EntitySchemaBuilder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Semantic type to storage type lookup.
    pub type_map: TypeMap,
    /// Columns every manifest entity starts from.
    pub base_columns: Vec<(String, ColumnDef)>,
}

impl BuilderConfig {
    /// Create a configuration with the standard type map and base columns.
    pub fn new() -> Self {
        Self {
            type_map: TypeMap::standard(),
            base_columns: base_columns(),
        }
    }

    /// Set the type map.
    pub fn with_type_map(mut self, type_map: TypeMap) -> Self {
        self.type_map = type_map;
        self
    }

    /// Set the base columns.
    pub fn with_base_columns(mut self, columns: Vec<(String, ColumnDef)>) -> Self {
        self.base_columns = columns;
        self
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::new()
    }
}
