#![deny(missing_docs)]

//! # Metadata Extraction
//!
//! Reads description, example and string format hints off a node.

use crate::schema::classify::{classify, Classified, SchemaKind};
use crate::schema::node::{NodeKind, SchemaNode, StringCheck};
use serde_json::{Map, Value};

/// Metadata ready to be spliced into a schema fragment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeMetadata {
    /// Description, if declared.
    pub description: Option<String>,
    /// Example value, if declared.
    pub example: Option<Value>,
    /// Format hint, strings only.
    pub format: Option<&'static str>,
}

impl NodeMetadata {
    /// Inserts the present fields into `target`. Absent fields add no key.
    pub fn apply_to(&self, target: &mut Map<String, Value>) {
        if let Some(description) = &self.description {
            target.insert("description".to_string(), Value::String(description.clone()));
        }
        if let Some(example) = &self.example {
            target.insert("example".to_string(), example.clone());
        }
        if let Some(format) = self.format {
            target.insert("format".to_string(), Value::String(format.to_string()));
        }
    }
}

/// Extracts metadata from `node` (modifier layers included).
pub fn extract(node: &SchemaNode) -> NodeMetadata {
    extract_classified(&classify(node))
}

/// Extracts metadata from an already classified node.
pub fn extract_classified(classified: &Classified<'_>) -> NodeMetadata {
    let format = match (&classified.kind, &classified.node.kind) {
        (SchemaKind::String, NodeKind::String(checks)) => string_format(checks),
        _ => None,
    };

    NodeMetadata {
        description: classified.description.map(str::to_string),
        example: classified.example.cloned(),
        format,
    }
}

/// Picks a format by fixed priority: uuid, then email, then date-time.
fn string_format(checks: &[StringCheck]) -> Option<&'static str> {
    if checks.contains(&StringCheck::Uuid) {
        Some("uuid")
    } else if checks.contains(&StringCheck::Email) {
        Some("email")
    } else if checks.contains(&StringCheck::Datetime) {
        Some("date-time")
    } else {
        None
    }
}
