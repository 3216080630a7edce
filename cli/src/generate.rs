#![deny(missing_docs)]

//! # Generate Command
//!
//! Builds a document from a directory (or file) of specs and writes it out.

use std::path::{Path, PathBuf};

use schemadoc_core::document::rewrite_schema_refs;
use schemadoc_core::{load_specs, AppResult, GeneratorOptions, MergeSpecConfig, SwaggerGenerator};
use serde_json::Value;

use crate::output::{write_document, OutputFormat};

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Spec file, or directory of `.yaml` / `.yml` / `.json` specs, to merge.
    #[clap(short, long)]
    pub input: PathBuf,

    /// Output file.
    #[clap(short, long)]
    pub output: PathBuf,

    /// Output format.
    #[clap(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Emit Swagger 2.0 instead of OpenAPI 3.
    #[clap(long)]
    pub swagger2: bool,

    /// Rewrite `#/components/schemas/` references to `#/definitions/`.
    #[clap(long)]
    pub rewrite_refs: bool,

    /// Generator options file (`.json`, `.yaml` or `.yml`).
    #[clap(long, env = "SCHEMADOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Overrides the document title.
    #[clap(long)]
    pub title: Option<String>,

    /// Overrides the document version.
    #[clap(long)]
    pub version_label: Option<String>,
}

/// Reads the options file (if any) and applies command-line overrides.
pub fn load_options(
    config: Option<&Path>,
    title: Option<&str>,
    version: Option<&str>,
) -> AppResult<GeneratorOptions> {
    let mut options = match config {
        Some(path) => GeneratorOptions::from_file(path)?,
        None => GeneratorOptions::default(),
    };
    if let Some(title) = title {
        options.title = title.to_string();
    }
    if let Some(version) = version {
        options.version = version.to_string();
    }
    Ok(options)
}

/// Merges every spec under `input` into a generated document.
pub fn build_document(input: &Path, options: GeneratorOptions, swagger2: bool) -> AppResult<Value> {
    let options = load_specs(input)?
        .into_iter()
        .fold(options, |opts, doc| opts.with_merge_spec(MergeSpecConfig::preloaded(doc)));

    let generator = SwaggerGenerator::new(options)?;
    Ok(if swagger2 {
        generator.generate_swagger2()
    } else {
        generator.generate_spec()
    })
}

/// Executes the generate command.
pub fn execute(args: &GenerateArgs) -> AppResult<()> {
    let options = load_options(
        args.config.as_deref(),
        args.title.as_deref(),
        args.version_label.as_deref(),
    )?;

    let mut document = build_document(&args.input, options, args.swagger2)?;
    if args.rewrite_refs {
        document = rewrite_schema_refs(&document);
    }

    write_document(&args.output, &document, args.format)?;
    tracing::debug!(output = ?args.output, "document written");
    println!("Generated documentation at {:?}", args.output);

    Ok(())
}
