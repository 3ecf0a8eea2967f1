//! Integration tests for manifest loading and schema generation.

use std::io::Write;

use schemagen_core::builder::{base_columns, builtin_entities, ADMIN_ENTITY};
use schemagen_core::{
    Cardinality, ColumnType, EntitySchemaBuilder, Error, ManifestProvider, SchemaSet,
    YamlManifest,
};

const BLOG_MANIFEST: &str = r#"
name: blog
entities:
  User:
    properties:
      - name
      - { name: email, type: email }
      - { name: isActive, type: boolean }
  Post:
    properties:
      - { name: title, type: text }
      - { name: price, type: money }
      - { name: publishedAt, type: date }
      - { name: status, type: choice }
    belongsTo:
      - { name: author, entity: User, eager: true }
      - { name: reviewer, entity: User }
  Comment:
    properties:
      - { name: body, type: text }
    belongsTo:
      - Post
      - User
"#;

struct TestContext {
    _dir: tempfile::TempDir,
    manifest: YamlManifest,
}

impl TestContext {
    fn new(source: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.yml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(source.as_bytes()).unwrap();

        let manifest = YamlManifest::from_path(&path).unwrap();

        Self {
            _dir: dir,
            manifest,
        }
    }

    fn build(&self) -> Result<SchemaSet, Error> {
        EntitySchemaBuilder::new(&self.manifest).build_schemas()
    }
}

#[test]
fn test_schema_count_and_order() {
    let ctx = TestContext::new(BLOG_MANIFEST);
    let schemas = ctx.build().unwrap();

    let builtin_count = builtin_entities().len();
    assert_eq!(
        schemas.len(),
        builtin_count + ctx.manifest.entity_manifests().len()
    );
    assert_eq!(
        schemas.entity_names(),
        vec![ADMIN_ENTITY, "User", "Post", "Comment"]
    );
}

#[test]
fn test_column_names_are_base_plus_properties() {
    let ctx = TestContext::new(BLOG_MANIFEST);
    let schemas = ctx.build().unwrap();

    for manifest in ctx.manifest.entity_manifests() {
        let schema = schemas.get_entity(&manifest.class_name).unwrap();

        let mut expected: Vec<String> = base_columns().into_iter().map(|(name, _)| name).collect();
        expected.extend(manifest.properties.iter().map(|p| p.name.clone()));
        expected.sort();
        expected.dedup();

        let actual: Vec<String> = schema.column_names().map(String::from).collect();
        assert_eq!(actual, expected, "columns of {}", manifest.class_name);

        for property in &manifest.properties {
            assert!(schema.get_column(&property.name).unwrap().nullable);
        }
    }
}

#[test]
fn test_property_storage_types() {
    let ctx = TestContext::new(BLOG_MANIFEST);
    let schemas = ctx.build().unwrap();

    let user = schemas.get_entity("User").unwrap();
    assert_eq!(user.get_column("name").unwrap().column_type, ColumnType::Varchar);
    assert_eq!(user.get_column("email").unwrap().column_type, ColumnType::Varchar);
    assert_eq!(user.get_column("isActive").unwrap().column_type, ColumnType::Boolean);

    let post = schemas.get_entity("Post").unwrap();
    assert_eq!(post.get_column("title").unwrap().column_type, ColumnType::Text);
    assert_eq!(post.get_column("price").unwrap().column_type, ColumnType::Decimal);
    assert_eq!(post.get_column("publishedAt").unwrap().column_type, ColumnType::Date);
    assert_eq!(post.get_column("status").unwrap().column_type, ColumnType::SimpleEnum);
}

#[test]
fn test_belongs_to_relations() {
    let ctx = TestContext::new(BLOG_MANIFEST);
    let schemas = ctx.build().unwrap();

    for manifest in ctx.manifest.entity_manifests() {
        let schema = schemas.get_entity(&manifest.class_name).unwrap();
        assert_eq!(schema.relations.len(), manifest.belongs_to.len());

        for relationship in &manifest.belongs_to {
            let relation = schema.get_relation(&relationship.name).unwrap();
            assert_eq!(relation.cardinality, Cardinality::ManyToOne);
            assert_eq!(relation.target, relationship.entity);
            assert_eq!(relation.eager, relationship.eager.unwrap_or(false));
        }
    }

    let comment = schemas.get_entity("Comment").unwrap();
    assert_eq!(comment.get_relation("post").unwrap().target, "Post");
    assert_eq!(comment.get_relation("user").unwrap().target, "User");

    let to_user = schemas.relations_to("User");
    assert_eq!(to_user.len(), 3);
}

#[test]
fn test_unmapped_type_fails_build() {
    let source = r#"
entities:
  Place:
    properties:
      - { name: label, type: string }
      - { name: area, type: geojson }
"#;
    let ctx = TestContext::new(source);

    let err = ctx.build().unwrap_err();
    assert!(matches!(
        err,
        Error::UnmappedPropertyType { ref entity, ref prop_type, .. }
            if entity == "Place" && prop_type == "geojson"
    ));
}

#[test]
fn test_deterministic_output() {
    let ctx = TestContext::new(BLOG_MANIFEST);

    let first = ctx.build().unwrap();
    let second = ctx.build().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn test_schema_set_json_handoff() {
    let ctx = TestContext::new(BLOG_MANIFEST);
    let schemas = ctx.build().unwrap();

    let json = schemas.to_json_pretty().unwrap();
    let decoded = SchemaSet::from_json(&json).unwrap();
    assert_eq!(decoded, schemas);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[2]["name"], "Post");
    assert_eq!(value[2]["columns"]["title"]["type"], "text");
    assert_eq!(value[2]["columns"]["title"]["nullable"], true);
    assert_eq!(value[2]["relations"]["author"]["type"], "many-to-one");
    assert_eq!(value[2]["relations"]["author"]["eager"], true);
}

#[test]
fn test_missing_manifest_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = YamlManifest::from_path(dir.path().join("absent.yml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
