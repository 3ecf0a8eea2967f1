//! Column definitions for entity schemas.

use super::types::{ColumnType, Generated};
use serde::{Deserialize, Serialize};

/// A column definition within an entity schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Storage type.
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Whether the column accepts null.
    pub nullable: bool,
    /// Whether this column is the primary key.
    #[serde(default, skip_serializing_if = "is_false")]
    pub primary: bool,
    /// Whether values must be unique across rows.
    #[serde(default, skip_serializing_if = "is_false")]
    pub unique: bool,
    /// Whether the column is included in default selects.
    #[serde(default = "default_select")]
    pub select: bool,
    /// System value generation, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated: Option<Generated>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn default_select() -> bool {
    true
}

impl ColumnDef {
    /// Create a new non-nullable column.
    pub fn new(column_type: ColumnType) -> Self {
        Self {
            column_type,
            nullable: false,
            primary: false,
            unique: false,
            select: true,
            generated: None,
        }
    }

    /// Create a nullable column.
    pub fn nullable(column_type: ColumnType) -> Self {
        Self {
            nullable: true,
            ..Self::new(column_type)
        }
    }

    /// Mark as primary key.
    pub fn with_primary(mut self) -> Self {
        self.primary = true;
        self
    }

    /// Mark as unique.
    pub fn with_unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Exclude from default selects.
    pub fn hidden(mut self) -> Self {
        self.select = false;
        self
    }

    /// Set system value generation.
    pub fn with_generated(mut self, generated: Generated) -> Self {
        self.generated = Some(generated);
        self
    }

    /// Check if the column value is managed by the ORM.
    pub fn is_generated(&self) -> bool {
        self.generated.is_some()
    }
}
