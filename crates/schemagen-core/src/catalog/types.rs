//! Storage-level type definitions for generated columns.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Column storage types understood by the ORM runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnType {
    /// Variable-length string.
    Varchar,
    /// Unbounded text.
    Text,
    /// Fixed-precision decimal.
    Decimal,
    /// Signed integer.
    Integer,
    /// Boolean value.
    Boolean,
    /// Calendar date without time.
    Date,
    /// Date and time.
    Datetime,
    /// Enumeration stored as its string value.
    SimpleEnum,
    /// JSON document.
    Json,
}

/// How a system column gets its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Generated {
    /// Auto-incrementing identifier.
    Increment,
    /// Set once when the row is inserted.
    CreateDate,
    /// Refreshed whenever the row is updated.
    UpdateDate,
}

impl ColumnType {
    /// The type name the ORM runtime expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Varchar => "varchar",
            ColumnType::Text => "text",
            ColumnType::Decimal => "decimal",
            ColumnType::Integer => "integer",
            ColumnType::Boolean => "boolean",
            ColumnType::Date => "date",
            ColumnType::Datetime => "datetime",
            ColumnType::SimpleEnum => "simple-enum",
            ColumnType::Json => "json",
        }
    }
}

impl Generated {
    /// The generation strategy name the ORM runtime expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Generated::Increment => "increment",
            Generated::CreateDate => "create-date",
            Generated::UpdateDate => "update-date",
        }
    }
}

/// Returned when a string names no known [`ColumnType`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown column type: {0}")]
pub struct UnknownColumnType(pub String);

impl ColumnType {
    /// Every storage type.
    pub const ALL: [ColumnType; 9] = [
        ColumnType::Varchar,
        ColumnType::Text,
        ColumnType::Decimal,
        ColumnType::Integer,
        ColumnType::Boolean,
        ColumnType::Date,
        ColumnType::Datetime,
        ColumnType::SimpleEnum,
        ColumnType::Json,
    ];
}

impl FromStr for ColumnType {
    type Err = UnknownColumnType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownColumnType(s.to_string()))
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
