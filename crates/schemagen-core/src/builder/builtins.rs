//! System columns and built-in entities.

use crate::catalog::{ColumnDef, ColumnType, EntitySchema, Generated};

/// Name of the identifier column.
pub const ID_COLUMN: &str = "id";

/// Name of the creation timestamp column.
pub const CREATED_AT_COLUMN: &str = "createdAt";

/// Name of the update timestamp column.
pub const UPDATED_AT_COLUMN: &str = "updatedAt";

/// Name of the built-in administrator entity.
pub const ADMIN_ENTITY: &str = "Admin";

/// Columns every entity starts from.
pub fn base_columns() -> Vec<(String, ColumnDef)> {
    vec![
        (
            ID_COLUMN.to_string(),
            ColumnDef::new(ColumnType::Integer)
                .with_primary()
                .with_generated(Generated::Increment),
        ),
        (
            CREATED_AT_COLUMN.to_string(),
            ColumnDef::new(ColumnType::Datetime).with_generated(Generated::CreateDate),
        ),
        (
            UPDATED_AT_COLUMN.to_string(),
            ColumnDef::new(ColumnType::Datetime).with_generated(Generated::UpdateDate),
        ),
    ]
}

/// System-managed entities prepended to every schema set.
pub fn builtin_entities() -> Vec<EntitySchema> {
    vec![admin_entity()]
}

fn admin_entity() -> EntitySchema {
    EntitySchema::new(ADMIN_ENTITY)
        .with_columns(base_columns())
        .with_column("email", ColumnDef::new(ColumnType::Varchar).with_unique())
        .with_column("password", ColumnDef::new(ColumnType::Varchar).hidden())
}
