//! Command-line arguments and their conversion to builder configuration.

use crate::formatter::OutputFormat;
use clap::{Parser, Subcommand};
use schemagen_core::{BuilderConfig, ColumnType, TypeMap};
use std::path::{Path, PathBuf};

/// SchemaGen Command-Line Interface
#[derive(Parser, Debug)]
#[command(name = "schemagen")]
#[command(version, about = "Generate ORM entity schemas from a YAML manifest")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(long, global = true, default_value = "table", value_enum)]
    pub format: OutputFormat,

    /// Extra type mapping as `semantic=storage` (e.g. `geojson=json`), repeatable
    #[arg(long = "map", global = true, value_parser = parse_mapping)]
    pub mappings: Vec<(String, ColumnType)>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build entity schemas and print them
    Build {
        /// Path to the manifest file
        manifest: PathBuf,
    },
    /// List entities with their column and relation counts
    Entities {
        /// Path to the manifest file
        manifest: PathBuf,
    },
}

impl Command {
    /// Manifest path for the command.
    pub fn manifest(&self) -> &Path {
        match self {
            Command::Build { manifest } | Command::Entities { manifest } => manifest.as_path(),
        }
    }
}

impl Args {
    /// Convert arguments into builder configuration.
    pub fn builder_config(&self) -> BuilderConfig {
        let type_map = self
            .mappings
            .iter()
            .fold(TypeMap::standard(), |map, (prop_type, column_type)| {
                map.with_mapping(prop_type.as_str(), *column_type)
            });

        BuilderConfig::new().with_type_map(type_map)
    }
}

fn parse_mapping(raw: &str) -> Result<(String, ColumnType), String> {
    let (prop_type, column_type) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected `semantic=storage`, got `{raw}`"))?;

    let prop_type = prop_type.trim();
    if prop_type.is_empty() {
        return Err(format!("missing semantic type in `{raw}`"));
    }

    let column_type = column_type
        .trim()
        .parse::<ColumnType>()
        .map_err(|e| e.to_string())?;

    Ok((prop_type.to_string(), column_type))
}
