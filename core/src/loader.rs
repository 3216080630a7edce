#![deny(missing_docs)]

//! # Spec Loader
//!
//! Reads specification documents from a file or a directory of files.

use crate::error::{AppError, AppResult};
use serde_json::Value;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Extensions recognised as specification files.
pub const SPEC_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// Loads every document at `path`.
///
/// A file yields a single document. A directory yields one document per
/// spec file directly inside it, ordered by file name.
pub fn load_specs(path: &Path) -> AppResult<Vec<Value>> {
    if !path.exists() {
        return Err(AppError::General(format!(
            "Spec path not found: {:?}",
            path
        )));
    }

    if path.is_file() {
        return Ok(vec![load_spec_file(path)?]);
    }

    let mut docs = Vec::new();
    let walker = WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter();

    for entry in walker.filter_map(|e| e.ok()) {
        let file = entry.path();
        if entry.file_type().is_file() && is_spec_file(file) {
            tracing::debug!(file = ?file, "loading spec");
            docs.push(load_spec_file(file)?);
        }
    }

    Ok(docs)
}

fn is_spec_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SPEC_EXTENSIONS.contains(&ext))
}

/// Parses one file, picking the parser from its extension.
///
/// Anything that is not `.json` goes through the YAML parser, which also
/// accepts JSON.
pub fn load_spec_file(path: &Path) -> AppResult<Value> {
    let content = fs::read_to_string(path)?;

    let is_json = path.extension().is_some_and(|ext| ext == "json");
    if is_json {
        serde_json::from_str(&content)
            .map_err(|e| AppError::Parse(format!("Failed to parse JSON {:?}: {}", path, e)))
    } else {
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Parse(format!("Failed to parse YAML {:?}: {}", path, e)))
    }
}
