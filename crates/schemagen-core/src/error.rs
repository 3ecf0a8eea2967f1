//! Core error types.

use thiserror::Error;

/// Result alias for schema generation.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Schema generation errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A property declares a semantic type with no storage mapping.
    #[error("unmapped property type '{prop_type}' for {entity}.{property}")]
    UnmappedPropertyType {
        /// Entity declaring the property.
        entity: String,
        /// Property name.
        property: String,
        /// The declared semantic type.
        prop_type: String,
    },

    /// Manifest file could not be read.
    #[error("manifest read error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest document is not valid YAML or has the wrong shape.
    #[error("manifest parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Schema set JSON encoding error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnmappedPropertyType {
            entity: "Place".to_string(),
            property: "area".to_string(),
            prop_type: "geojson".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("Place.area"));
        assert!(message.contains("geojson"));
    }
}
