//! Relation definitions between entities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cardinality of a relation, seen from the owning entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cardinality {
    /// One-to-one relation (unique foreign key).
    OneToOne,
    /// One-to-many relation (foreign key on the target side).
    OneToMany,
    /// Many-to-one relation (foreign key on the owning side).
    ManyToOne,
    /// Many-to-many relation (requires a join table).
    ManyToMany,
}

impl Cardinality {
    /// The relation type name the ORM runtime expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinality::OneToOne => "one-to-one",
            Cardinality::OneToMany => "one-to-many",
            Cardinality::ManyToOne => "many-to-one",
            Cardinality::ManyToMany => "many-to-many",
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A relation from the owning entity to a target entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationDef {
    /// Target entity name.
    pub target: String,
    /// Relation cardinality.
    #[serde(rename = "type")]
    pub cardinality: Cardinality,
    /// Load the related entity together with the owner.
    pub eager: bool,
}

impl RelationDef {
    /// Create a many-to-one relation.
    pub fn many_to_one(target: impl Into<String>, eager: bool) -> Self {
        Self {
            target: target.into(),
            cardinality: Cardinality::ManyToOne,
            eager,
        }
    }

    /// Check if this relation points at the given entity.
    pub fn targets(&self, entity: &str) -> bool {
        self.target == entity
    }
}
