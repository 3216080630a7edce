#![deny(missing_docs)]

//! # Convert Command
//!
//! Runs one of the source-metadata converters and emits a minimal OpenAPI
//! document holding the resulting schema.

use std::path::PathBuf;

use schemadoc_core::converters::{MongooseConverter, PrismaConverter, TypeormConverter};
use schemadoc_core::loader::load_spec_file;
use schemadoc_core::{translate, AppResult, SchemaConverter};
use serde_json::{json, Map, Value};

use crate::output::{render, write_document, OutputFormat};

/// Metadata source understood by the convert command.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Document-store schema (`paths`).
    Mongoose,
    /// Relational ORM metadata storage (`tables` / `columns`).
    Typeorm,
    /// Generated-client model (`fields`).
    Prisma,
}

/// Arguments for the convert command.
#[derive(clap::Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Metadata source.
    #[clap(long, value_enum)]
    pub source: Source,

    /// Metadata file (JSON or YAML).
    #[clap(short, long)]
    pub input: PathBuf,

    /// Component name for the generated schema.
    #[clap(long)]
    pub name: String,

    /// Entity to pick from relational metadata (defaults to `--name`).
    #[clap(long)]
    pub entity: Option<String>,

    /// Output file; stdout when omitted.
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Output format.
    #[clap(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

impl ConvertArgs {
    fn converter(&self) -> Box<dyn SchemaConverter> {
        match self.source {
            Source::Mongoose => Box::new(MongooseConverter),
            Source::Typeorm => Box::new(TypeormConverter::new(
                self.entity.clone().unwrap_or_else(|| self.name.clone()),
            )),
            Source::Prisma => Box::new(PrismaConverter),
        }
    }
}

/// Converts `raw` and wraps the schema in a document under `name`.
pub fn convert_document(
    converter: &dyn SchemaConverter,
    raw: &Value,
    name: &str,
) -> AppResult<Value> {
    let schema = converter.to_schema(raw)?;
    tracing::debug!(source = converter.source_name(), schema = name, "converted schema");

    let mut schemas = Map::new();
    schemas.insert(name.to_string(), translate(&schema));

    Ok(json!({
        "openapi": "3.0.0",
        "info": { "title": name, "version": "1.0.0" },
        "paths": {},
        "components": { "schemas": schemas }
    }))
}

/// Executes the convert command.
pub fn execute(args: &ConvertArgs) -> AppResult<()> {
    let raw = load_spec_file(&args.input)?;
    let document = convert_document(args.converter().as_ref(), &raw, &args.name)?;

    match &args.output {
        Some(path) => {
            write_document(path, &document, args.format)?;
            println!("Wrote {} schema to {:?}", args.name, path);
        }
        None => println!("{}", render(&document, args.format)?),
    }

    Ok(())
}
