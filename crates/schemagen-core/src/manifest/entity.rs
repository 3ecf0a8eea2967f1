//! Entity manifest definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Declarative description of one domain entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityManifest {
    /// Entity class name, used as the schema name.
    pub class_name: String,
    /// Properties in declaration order.
    #[serde(default)]
    pub properties: Vec<PropertyManifest>,
    /// Belongs-to relationships in declaration order.
    #[serde(default)]
    pub belongs_to: Vec<RelationshipManifest>,
}

/// A typed property of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyManifest {
    /// Property name (unique within its entity).
    pub name: String,
    /// Declared semantic type, e.g. `text` or `money`.
    #[serde(rename = "type")]
    pub prop_type: String,
}

/// A belongs-to relationship from an entity to a target entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipManifest {
    /// Relationship name (unique within its entity).
    pub name: String,
    /// Target entity class name.
    pub entity: String,
    /// Load the target together with the owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eager: Option<bool>,
}

/// Semantic property types known to the standard type map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropType {
    String,
    Text,
    Number,
    Link,
    Money,
    Date,
    Email,
    Boolean,
    Password,
    Choice,
    Location,
}

/// Returned when a string names no known [`PropType`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown property type: {0}")]
pub struct UnknownPropType(pub String);

impl EntityManifest {
    /// Create an entity manifest with no properties or relationships.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            properties: Vec::new(),
            belongs_to: Vec::new(),
        }
    }

    /// Add a property.
    pub fn with_property(mut self, property: PropertyManifest) -> Self {
        self.properties.push(property);
        self
    }

    /// Add a belongs-to relationship.
    pub fn with_belongs_to(mut self, relationship: RelationshipManifest) -> Self {
        self.belongs_to.push(relationship);
        self
    }
}

impl PropertyManifest {
    /// Create a property with a free-form semantic type name.
    pub fn new(name: impl Into<String>, prop_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prop_type: prop_type.into(),
        }
    }

    /// Create a property with a known semantic type.
    pub fn typed(name: impl Into<String>, prop_type: PropType) -> Self {
        Self::new(name, prop_type.as_str())
    }
}

impl RelationshipManifest {
    /// Create a lazily loaded relationship.
    pub fn new(name: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entity: entity.into(),
            eager: None,
        }
    }

    /// Create a relationship named after its target, e.g. `User` -> `user`.
    pub fn to_entity(entity: impl Into<String>) -> Self {
        let entity = entity.into();
        Self::new(default_relationship_name(&entity), entity)
    }

    /// Set the eager flag.
    pub fn with_eager(mut self, eager: bool) -> Self {
        self.eager = Some(eager);
        self
    }

    /// Whether the relation loads eagerly; absent means lazy.
    pub fn is_eager(&self) -> bool {
        self.eager.unwrap_or(false)
    }
}

/// Default relationship name for a target: first character lowercased.
pub(crate) fn default_relationship_name(entity: &str) -> String {
    let mut chars = entity.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl PropType {
    /// Every known semantic type.
    pub const ALL: [PropType; 11] = [
        PropType::String,
        PropType::Text,
        PropType::Number,
        PropType::Link,
        PropType::Money,
        PropType::Date,
        PropType::Email,
        PropType::Boolean,
        PropType::Password,
        PropType::Choice,
        PropType::Location,
    ];

    /// The name used in manifests.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropType::String => "string",
            PropType::Text => "text",
            PropType::Number => "number",
            PropType::Link => "link",
            PropType::Money => "money",
            PropType::Date => "date",
            PropType::Email => "email",
            PropType::Boolean => "boolean",
            PropType::Password => "password",
            PropType::Choice => "choice",
            PropType::Location => "location",
        }
    }
}

impl fmt::Display for PropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropType {
    type Err = UnknownPropType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownPropType(s.to_string()))
    }
}
