#![deny(missing_docs)]

//! # Generator Options
//!
//! Document-level settings for the generator, loadable from JSON or YAML.
//! Merge directives are kept in their raw, deserializable form here and
//! validated into [`MergeDirective`] when a generator is built.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Contact information for the `info` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Contact name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Reference to external documentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalDocs {
    /// Target URL.
    pub url: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A root-level tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name, the identity used when merging.
    pub name: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Kind of a merge directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeSpecKind {
    /// A JSON file on disk.
    Json,
    /// A YAML file on disk.
    Yaml,
    /// A document already in memory.
    Preloaded,
}

/// A merge directive as written in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeSpecConfig {
    /// Directive kind.
    #[serde(rename = "type")]
    pub kind: MergeSpecKind,
    /// File path, required for `json` / `yaml`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Document content, required for `preloaded`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
}

impl MergeSpecConfig {
    /// A JSON file directive.
    pub fn json(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: MergeSpecKind::Json,
            path: Some(path.into()),
            content: None,
        }
    }

    /// A YAML file directive.
    pub fn yaml(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: MergeSpecKind::Yaml,
            path: Some(path.into()),
            content: None,
        }
    }

    /// A preloaded document directive.
    pub fn preloaded(content: Value) -> Self {
        Self {
            kind: MergeSpecKind::Preloaded,
            path: None,
            content: Some(content),
        }
    }

    /// Checks the directive carries the field its kind needs.
    pub fn validate(&self) -> AppResult<MergeDirective> {
        match self.kind {
            MergeSpecKind::Json | MergeSpecKind::Yaml => {
                let path = self.path.clone().ok_or_else(|| {
                    AppError::Config(format!(
                        "Missing 'path' for {} merge spec",
                        self.kind.as_str()
                    ))
                })?;
                Ok(MergeDirective::File {
                    format: if self.kind == MergeSpecKind::Json {
                        FileFormat::Json
                    } else {
                        FileFormat::Yaml
                    },
                    path,
                })
            }
            MergeSpecKind::Preloaded => {
                let content = self.content.clone().ok_or_else(|| {
                    AppError::Config("Missing 'content' for preloaded merge spec".to_string())
                })?;
                Ok(MergeDirective::Preloaded(content))
            }
        }
    }
}

impl MergeSpecKind {
    /// Lowercase name as used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            MergeSpecKind::Json => "json",
            MergeSpecKind::Yaml => "yaml",
            MergeSpecKind::Preloaded => "preloaded",
        }
    }
}

/// On-disk format of a file directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Parsed with `serde_json`.
    Json,
    /// Parsed with `serde_yaml`.
    Yaml,
}

/// A validated merge directive.
#[derive(Debug, Clone, PartialEq)]
pub enum MergeDirective {
    /// Read and parse a file at generation time.
    File {
        /// File format.
        format: FileFormat,
        /// File location.
        path: PathBuf,
    },
    /// Merge this document as-is.
    Preloaded(Value),
}

/// Settings for a generator instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorOptions {
    /// API title.
    pub title: String,
    /// API version.
    pub version: String,
    /// API description.
    pub description: Option<String>,
    /// Server base URL, emitted as the single `servers` entry.
    #[serde(alias = "basePath")]
    pub base_url: Option<String>,
    /// Contact block.
    pub contact: Option<Contact>,
    /// Root external documentation.
    pub external_docs: Option<ExternalDocs>,
    /// Pre-seeded components keyed by component type (`schemas`, `securitySchemes`, ...).
    pub components: Map<String, Value>,
    /// Root-level tags.
    pub tags: Vec<Tag>,
    /// Documents merged into every generated spec, in order.
    pub merge_specs: Vec<MergeSpecConfig>,
    /// Never emit `$ref`; inline every schema.
    pub inline_schemas: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            title: "API".to_string(),
            version: "1.0.0".to_string(),
            description: Some("Api Docs".to_string()),
            base_url: None,
            contact: None,
            external_docs: None,
            components: Map::new(),
            tags: Vec::new(),
            merge_specs: Vec::new(),
            inline_schemas: false,
        }
    }
}

impl GeneratorOptions {
    /// Creates options with a title and version, other fields defaulted.
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    /// Loads options from a `.json`, `.yaml` or `.yml` file.
    ///
    /// Keys absent from the file keep their defaults.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read options file {:?}: {}", path, e))
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| AppError::Config(format!("Invalid options JSON {:?}: {}", path, e))),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("Invalid options YAML {:?}: {}", path, e))),
            _ => Err(AppError::Config(format!(
                "Unsupported options file extension: {:?}",
                path
            ))),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the server base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the contact block.
    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contact = Some(contact);
        self
    }

    /// Sets root external documentation.
    pub fn with_external_docs(mut self, url: impl Into<String>, description: Option<String>) -> Self {
        self.external_docs = Some(ExternalDocs {
            url: url.into(),
            description,
        });
        self
    }

    /// Adds a component of `kind` (e.g. `schemas`) named `name`.
    pub fn with_component(mut self, kind: &str, name: impl Into<String>, value: Value) -> Self {
        let entry = self
            .components
            .entry(kind.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(map) = entry {
            map.insert(name.into(), value);
        }
        self
    }

    /// Appends a merge directive.
    pub fn with_merge_spec(mut self, spec: MergeSpecConfig) -> Self {
        self.merge_specs.push(spec);
        self
    }

    /// Switches every schema to inline rendering.
    pub fn with_inline_schemas(mut self, inline: bool) -> Self {
        self.inline_schemas = inline;
        self
    }
}
