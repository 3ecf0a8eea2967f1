//! Schema catalog types handed to the ORM runtime.
//!
//! An [`EntitySchema`] describes one table: its columns and the foreign-key
//! relations it owns. A [`SchemaSet`] is the ordered list of those schemas.

mod column;
mod entity;
mod relation;
mod schema;
mod types;

pub use column::ColumnDef;
pub use entity::EntitySchema;
pub use relation::{Cardinality, RelationDef};
pub use schema::SchemaSet;
pub use types::{ColumnType, Generated, UnknownColumnType};
