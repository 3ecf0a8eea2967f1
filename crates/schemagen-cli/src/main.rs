//! SchemaGen Command-Line Interface
//!
//! Loads a YAML entity manifest and prints the ORM schemas generated from it.

mod config;
mod formatter;

use clap::Parser;
use config::{Args, Command};
use schemagen_core::{EntitySchemaBuilder, SchemaSet, YamlManifest};

fn main() {
    // Logs go to stderr so JSON output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "schemagen=info,schemagen_core=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let manifest_path = args.command.manifest();
    tracing::debug!(
        manifest = %manifest_path.display(),
        format = %args.format,
        extra_mappings = args.mappings.len(),
        "configuration loaded"
    );

    let schemas = build(manifest_path, args)?;
    let formatter = formatter::create_formatter(args.format);

    let output = match &args.command {
        Command::Build { .. } => formatter.format_schemas(&schemas)?,
        Command::Entities { .. } => formatter.format_entities(&schemas)?,
    };

    Ok(output)
}

/// Load the manifest and build its schema set.
fn build(
    manifest_path: &std::path::Path,
    args: &Args,
) -> Result<SchemaSet, Box<dyn std::error::Error>> {
    let manifest = YamlManifest::from_path(manifest_path)?;
    if let Some(name) = manifest.name() {
        tracing::info!(app = name, "generating schemas");
    }

    let builder = EntitySchemaBuilder::with_config(manifest, args.builder_config());
    Ok(builder.build_schemas()?)
}
