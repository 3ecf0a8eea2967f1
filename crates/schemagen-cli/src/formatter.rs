//! Output formatters for generated schemas.

use clap::ValueEnum;
use comfy_table::Table;
use schemagen_core::{ColumnDef, EntitySchema, Result, SchemaSet};

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table format
    Table,
    /// JSON format
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Trait for formatting output.
pub trait Formatter {
    /// Format the full schema set.
    fn format_schemas(&self, schemas: &SchemaSet) -> Result<String>;

    /// Format an entity summary.
    fn format_entities(&self, schemas: &SchemaSet) -> Result<String>;
}

/// Create a formatter for the given output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Table formatter using comfy-table.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_schemas(&self, schemas: &SchemaSet) -> Result<String> {
        let blocks: Vec<String> = schemas.iter().map(format_entity_as_table).collect();

        if blocks.is_empty() {
            Ok("No entities".to_string())
        } else {
            Ok(blocks.join("\n\n"))
        }
    }

    fn format_entities(&self, schemas: &SchemaSet) -> Result<String> {
        let mut table = Table::new();
        table.set_header(vec!["Entity", "Columns", "Relations"]);

        for entity in schemas {
            table.add_row(vec![
                entity.name.clone(),
                entity.columns.len().to_string(),
                entity.relations.len().to_string(),
            ]);
        }

        Ok(format!(
            "{}\n{} entit{}",
            table,
            schemas.len(),
            plural_y(schemas.len())
        ))
    }
}

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_schemas(&self, schemas: &SchemaSet) -> Result<String> {
        schemas.to_json_pretty()
    }

    fn format_entities(&self, schemas: &SchemaSet) -> Result<String> {
        let entities: Vec<serde_json::Value> = schemas
            .iter()
            .map(|entity| {
                serde_json::json!({
                    "name": entity.name,
                    "columns": entity.columns.len(),
                    "relations": entity.relations.len(),
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&entities)?)
    }
}

/// Format one entity as a column table followed by a relation table.
fn format_entity_as_table(entity: &EntitySchema) -> String {
    let mut columns = Table::new();
    columns.set_header(vec!["Column", "Type", "Nullable", "Flags"]);
    for (name, column) in &entity.columns {
        columns.add_row(vec![
            name.clone(),
            column.column_type.to_string(),
            column.nullable.to_string(),
            column_flags(column),
        ]);
    }

    let mut output = format!("{}\n{}", entity.name, columns);

    if !entity.relations.is_empty() {
        let mut relations = Table::new();
        relations.set_header(vec!["Relation", "Target", "Type", "Eager"]);
        for (name, relation) in &entity.relations {
            relations.add_row(vec![
                name.clone(),
                relation.target.clone(),
                relation.cardinality.to_string(),
                relation.eager.to_string(),
            ]);
        }
        output.push('\n');
        output.push_str(&relations.to_string());
    }

    output
}

/// Short description of a column's system flags.
fn column_flags(column: &ColumnDef) -> String {
    let mut flags = Vec::new();
    if column.primary {
        flags.push("primary");
    }
    if column.unique {
        flags.push("unique");
    }
    if !column.select {
        flags.push("hidden");
    }
    if let Some(generated) = column.generated {
        flags.push(generated.as_str());
    }
    flags.join(", ")
}

fn plural_y(count: usize) -> &'static str {
    if count == 1 {
        "y"
    } else {
        "ies"
    }
}
