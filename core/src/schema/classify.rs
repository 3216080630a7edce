#![deny(missing_docs)]

//! # Node Classification
//!
//! Strips `Optional` / `Nullable` / `Default` layers until a non-modifier node
//! is reached, remembering whether any of the stripped layers was `Optional`.

use crate::schema::node::{NodeKind, SchemaNode};
use serde_json::Value;
use std::fmt::Display;

/// Intrinsic kind of a fully unwrapped node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    /// String.
    String,
    /// Number.
    Number,
    /// Boolean.
    Boolean,
    /// Date.
    Date,
    /// Object.
    Object,
    /// Array.
    Array,
    /// Enumeration of strings.
    Enum,
    /// Literal value.
    Literal,
    /// Anything without a dedicated rendering.
    Unrecognized,
}

impl Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SchemaKind::String => "string",
            SchemaKind::Number => "number",
            SchemaKind::Boolean => "boolean",
            SchemaKind::Date => "date",
            SchemaKind::Object => "object",
            SchemaKind::Array => "array",
            SchemaKind::Enum => "enum",
            SchemaKind::Literal => "literal",
            SchemaKind::Unrecognized => "unrecognized",
        };
        write!(f, "{}", name)
    }
}

/// Result of classifying a node.
#[derive(Debug, Clone, PartialEq)]
pub struct Classified<'a> {
    /// Intrinsic kind of `node`.
    pub kind: SchemaKind,
    /// The fully unwrapped node.
    pub node: &'a SchemaNode,
    /// True iff at least one stripped layer was `Optional`.
    pub was_optional: bool,
    /// First description found, outermost layer first.
    pub description: Option<&'a str>,
    /// First example found, outermost layer first.
    pub example: Option<&'a Value>,
}

/// Classifies `node`, unwrapping every modifier layer.
///
/// Terminates after at most `depth` steps, where `depth` is the number of
/// nested modifier layers.
pub fn classify(node: &SchemaNode) -> Classified<'_> {
    let mut current = node;
    let mut was_optional = false;
    let mut description = None;
    let mut example = None;

    loop {
        if description.is_none() {
            description = current.meta.description.as_deref();
        }
        if example.is_none() {
            example = current
                .meta
                .example
                .as_ref()
                .or_else(|| current.meta.examples.first());
        }

        match current.unwrap_layer() {
            Some(inner) => {
                was_optional |= current.is_optional();
                current = inner;
            }
            None => break,
        }
    }

    Classified {
        kind: kind_of(&current.kind),
        node: current,
        was_optional,
        description,
        example,
    }
}

fn kind_of(kind: &NodeKind) -> SchemaKind {
    match kind {
        NodeKind::String(_) => SchemaKind::String,
        NodeKind::Number => SchemaKind::Number,
        NodeKind::Boolean => SchemaKind::Boolean,
        NodeKind::Date => SchemaKind::Date,
        NodeKind::Object(_) => SchemaKind::Object,
        NodeKind::Array(_) => SchemaKind::Array,
        NodeKind::Enum(_) => SchemaKind::Enum,
        NodeKind::Literal(_) => SchemaKind::Literal,
        NodeKind::Opaque(_) => SchemaKind::Unrecognized,
        // `classify` only calls this on unwrapped nodes.
        NodeKind::Optional(_) | NodeKind::Nullable(_) | NodeKind::Default(..) => {
            SchemaKind::Unrecognized
        }
    }
}

/// Type name used in placeholder fragments for unrecognized nodes.
pub(crate) fn opaque_name(node: &SchemaNode) -> &str {
    match &node.kind {
        NodeKind::Opaque(name) => name,
        _ => "Unknown",
    }
}
