#![deny(missing_docs)]

//! # Output
//!
//! Serialization and writing of generated documents.

use schemadoc_core::{AppError, AppResult};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Serialization format of a written document.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// YAML.
    Yaml,
}

/// Serializes `document` in `format`.
pub fn render(document: &Value, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(document)
            .map_err(|e| AppError::General(format!("Failed to serialize JSON: {}", e))),
        OutputFormat::Yaml => serde_yaml::to_string(document)
            .map_err(|e| AppError::General(format!("Failed to serialize YAML: {}", e))),
    }
}

/// Writes `document` to `path`, creating parent directories as needed.
pub fn write_document(path: &Path, document: &Value, format: OutputFormat) -> AppResult<()> {
    let content = render(document, format)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::General(format!("Failed to create output dir: {}", e)))?;
        }
    }

    fs::write(path, content)
        .map_err(|e| AppError::General(format!("Failed to write {:?}: {}", path, e)))
}
