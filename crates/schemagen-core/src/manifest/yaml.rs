//! YAML manifest loading.
//!
//! A manifest document names the application and maps entity class names to
//! their properties and belongs-to relationships:
//!
//! ```yaml
//! name: blog
//! entities:
//!   Post:
//!     properties:
//!       - title
//!       - { name: body, type: text }
//!     belongsTo:
//!       - User
//!       - { name: editor, entity: User, eager: true }
//! ```
//!
//! Entries may be written in shorthand: a bare property name has type
//! `string`, and a bare relationship target is named after the target with
//! its first character lowercased.
//!
//! Unknown keys are rejected at every level, so a misspelled `type` or
//! `belongsTo` fails the load instead of being dropped. `eager` must be a
//! YAML boolean: `yes`, `1` and other truthy scalars are parse errors.

use super::entity::default_relationship_name;
use super::{EntityManifest, ManifestProvider, PropType, PropertyManifest, RelationshipManifest};
use crate::error::{Error, Result};
use serde::Deserialize;
use serde_yaml::Mapping;
use std::path::Path;
use std::str::FromStr;

/// A manifest loaded from a YAML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YamlManifest {
    name: Option<String>,
    entities: Vec<EntityManifest>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDocument {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    entities: Option<Mapping>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawEntity {
    #[serde(default)]
    properties: Vec<RawProperty>,
    #[serde(default)]
    belongs_to: Vec<RawRelationship>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawProperty {
    Name(String),
    Full(RawPropertyFields),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPropertyFields {
    name: String,
    #[serde(rename = "type", default = "default_prop_type")]
    prop_type: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRelationship {
    Target(String),
    Full(RawRelationshipFields),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRelationshipFields {
    #[serde(default)]
    name: Option<String>,
    entity: String,
    #[serde(default)]
    eager: Option<bool>,
}

fn default_prop_type() -> String {
    PropType::String.as_str().to_string()
}

impl From<RawProperty> for PropertyManifest {
    fn from(raw: RawProperty) -> Self {
        match raw {
            RawProperty::Name(name) => PropertyManifest::new(name, default_prop_type()),
            RawProperty::Full(fields) => PropertyManifest::new(fields.name, fields.prop_type),
        }
    }
}

impl From<RawRelationship> for RelationshipManifest {
    fn from(raw: RawRelationship) -> Self {
        match raw {
            RawRelationship::Target(entity) => RelationshipManifest::to_entity(entity),
            RawRelationship::Full(RawRelationshipFields {
                name,
                entity,
                eager,
            }) => RelationshipManifest {
                name: name.unwrap_or_else(|| default_relationship_name(&entity)),
                entity,
                eager,
            },
        }
    }
}

impl YamlManifest {
    /// Read and parse a manifest file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let manifest: Self = source.parse()?;

        tracing::info!(
            path = %path.display(),
            entities = manifest.entities.len(),
            "manifest loaded"
        );

        Ok(manifest)
    }

    /// Application name declared by the manifest.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl FromStr for YamlManifest {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self> {
        let document: RawDocument = serde_yaml::from_str(source)?;

        let mut entities = Vec::new();
        for (key, value) in document.entities.unwrap_or_default() {
            let class_name: String = serde_yaml::from_value(key)?;
            let raw: RawEntity = if value.is_null() {
                RawEntity::default()
            } else {
                serde_yaml::from_value(value)?
            };

            tracing::debug!(
                entity = %class_name,
                properties = raw.properties.len(),
                belongs_to = raw.belongs_to.len(),
                "parsed entity manifest"
            );

            entities.push(EntityManifest {
                class_name,
                properties: raw.properties.into_iter().map(Into::into).collect(),
                belongs_to: raw.belongs_to.into_iter().map(Into::into).collect(),
            });
        }

        Ok(Self {
            name: document.name,
            entities,
        })
    }
}

impl ManifestProvider for YamlManifest {
    fn entity_manifests(&self) -> &[EntityManifest] {
        &self.entities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOG: &str = r#"
name: blog
entities:
  User:
    properties:
      - name
      - { name: email, type: email }
  Post:
    properties:
      - title
      - name: body
        type: text
    belongsTo:
      - User
      - { name: editor, entity: User, eager: true }
  Tag:
"#;

    #[test]
    fn test_parse_document() {
        let manifest: YamlManifest = BLOG.parse().unwrap();

        assert_eq!(manifest.name(), Some("blog"));
        let names: Vec<_> = manifest
            .entity_manifests()
            .iter()
            .map(|e| e.class_name.as_str())
            .collect();
        assert_eq!(names, vec!["User", "Post", "Tag"]);
    }

    #[test]
    fn test_property_shorthand() {
        let manifest: YamlManifest = BLOG.parse().unwrap();
        let post = &manifest.entity_manifests()[1];

        assert_eq!(post.properties[0], PropertyManifest::new("title", "string"));
        assert_eq!(post.properties[1], PropertyManifest::new("body", "text"));
    }

    #[test]
    fn test_relationship_shorthand() {
        let manifest: YamlManifest = BLOG.parse().unwrap();
        let post = &manifest.entity_manifests()[1];

        assert_eq!(post.belongs_to[0], RelationshipManifest::new("user", "User"));
        assert_eq!(
            post.belongs_to[1],
            RelationshipManifest::new("editor", "User").with_eager(true)
        );
    }

    #[test]
    fn test_empty_entity() {
        let manifest: YamlManifest = BLOG.parse().unwrap();
        let tag = &manifest.entity_manifests()[2];

        assert!(tag.properties.is_empty());
        assert!(tag.belongs_to.is_empty());
    }

    #[test]
    fn test_relationship_name_defaults_from_entity() {
        let source = "entities:\n  Comment:\n    belongsTo:\n      - { entity: BlogPost }\n";
        let manifest: YamlManifest = source.parse().unwrap();

        assert_eq!(
            manifest.entity_manifests()[0].belongs_to[0],
            RelationshipManifest::new("blogPost", "BlogPost")
        );
    }

    #[test]
    fn test_unknown_type_is_kept_verbatim() {
        let source = "entities:\n  Place:\n    properties:\n      - { name: area, type: geojson }\n";
        let manifest: YamlManifest = source.parse().unwrap();

        assert_eq!(manifest.entity_manifests()[0].properties[0].prop_type, "geojson");
    }

    #[test]
    fn test_no_entities() {
        let manifest: YamlManifest = "name: empty\n".parse().unwrap();
        assert!(manifest.entity_manifests().is_empty());
    }

    #[test]
    fn test_malformed_property_rejected() {
        let source = "entities:\n  Post:\n    properties:\n      - { type: text }\n";
        let err = source.parse::<YamlManifest>().unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn test_misspelled_property_key_rejected() {
        let source = "entities:\n  Post:\n    properties:\n      - { name: body, typ: text }\n";
        let err = source.parse::<YamlManifest>().unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn test_misspelled_entity_key_rejected() {
        let source = "entities:\n  Post:\n    belongTo:\n      - User\n";
        let err = source.parse::<YamlManifest>().unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn test_misspelled_relationship_key_rejected() {
        let source = "entities:\n  Post:\n    belongsTo:\n      - { entity: User, eagr: true }\n";
        let err = source.parse::<YamlManifest>().unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn test_misspelled_document_key_rejected() {
        let err = "entites:\n  Post:\n".parse::<YamlManifest>().unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn test_non_boolean_eager_rejected() {
        let source = "entities:\n  Post:\n    belongsTo:\n      - { entity: User, eager: 1 }\n";
        let err = source.parse::<YamlManifest>().unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }
}
