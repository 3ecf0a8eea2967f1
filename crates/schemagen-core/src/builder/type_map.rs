//! Semantic property type to storage column type mapping.

use crate::catalog::ColumnType;
use crate::manifest::PropType;
use std::collections::HashMap;

/// Lookup table from semantic property type names to storage types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMap {
    mappings: HashMap<String, ColumnType>,
}

impl TypeMap {
    /// The standard mapping for every [`PropType`].
    pub fn standard() -> Self {
        PropType::ALL
            .into_iter()
            .fold(Self::empty(), |map, prop_type| {
                map.with_mapping(prop_type.as_str(), standard_column_type(prop_type))
            })
    }

    /// A map with no entries.
    pub fn empty() -> Self {
        Self {
            mappings: HashMap::new(),
        }
    }

    /// Add or replace a mapping.
    pub fn with_mapping(mut self, prop_type: impl Into<String>, column_type: ColumnType) -> Self {
        self.mappings.insert(prop_type.into(), column_type);
        self
    }

    /// Remove a mapping.
    pub fn without(mut self, prop_type: &str) -> Self {
        self.mappings.remove(prop_type);
        self
    }

    /// Look up the storage type for a semantic type name.
    pub fn get(&self, prop_type: &str) -> Option<ColumnType> {
        self.mappings.get(prop_type).copied()
    }

    /// Check if a semantic type has a mapping.
    pub fn contains(&self, prop_type: &str) -> bool {
        self.mappings.contains_key(prop_type)
    }

    /// Number of mapped types.
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl Default for TypeMap {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_column_type(prop_type: PropType) -> ColumnType {
    match prop_type {
        PropType::String | PropType::Link | PropType::Email | PropType::Password => {
            ColumnType::Varchar
        }
        PropType::Text => ColumnType::Text,
        PropType::Number | PropType::Money => ColumnType::Decimal,
        PropType::Date => ColumnType::Date,
        PropType::Boolean => ColumnType::Boolean,
        PropType::Choice => ColumnType::SimpleEnum,
        PropType::Location => ColumnType::Json,
    }
}
