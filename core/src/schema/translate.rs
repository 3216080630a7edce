#![deny(missing_docs)]

//! # Schema Translation
//!
//! Renders a schema node into an OpenAPI schema object.
//!
//! The translation is a pure function of the node: it never fails, never
//! mutates its input, and renders unrecognized kinds as a placeholder object.

use crate::schema::classify::{classify, opaque_name, Classified, SchemaKind};
use crate::schema::metadata::extract_classified;
use crate::schema::node::{NodeKind, SchemaNode};
use serde_json::{json, Map, Value};

/// Translates `node` into a schema fragment.
pub fn translate(node: &SchemaNode) -> Value {
    translate_classified(&classify(node))
}

/// Translates an already classified node.
pub fn translate_classified(classified: &Classified<'_>) -> Value {
    let meta = extract_classified(classified);
    let mut out = Map::new();

    match (&classified.kind, &classified.node.kind) {
        (SchemaKind::String, _) => {
            out.insert("type".to_string(), json!("string"));
            meta.apply_to(&mut out);
        }
        (SchemaKind::Number, _) => {
            out.insert("type".to_string(), json!("number"));
            meta.apply_to(&mut out);
        }
        (SchemaKind::Boolean, _) => {
            out.insert("type".to_string(), json!("boolean"));
            meta.apply_to(&mut out);
        }
        (SchemaKind::Date, _) => {
            out.insert("type".to_string(), json!("string"));
            out.insert("format".to_string(), json!("date-time"));
        }
        (SchemaKind::Enum, NodeKind::Enum(options)) => {
            out.insert("type".to_string(), json!("string"));
            if let Some(description) = meta.description {
                out.insert("description".to_string(), json!(description));
            }
            out.insert("enum".to_string(), json!(options));
        }
        (SchemaKind::Literal, NodeKind::Literal(value)) => {
            out.insert("type".to_string(), json!(literal_type(value)));
            out.insert("enum".to_string(), Value::Array(vec![value.clone()]));
        }
        (SchemaKind::Array, NodeKind::Array(element)) => {
            out.insert("type".to_string(), json!("array"));
            meta.apply_to(&mut out);
            out.insert("items".to_string(), translate(element));
        }
        (SchemaKind::Object, NodeKind::Object(fields)) => {
            out.insert("type".to_string(), json!("object"));
            if let Some(description) = meta.description {
                out.insert("description".to_string(), json!(description));
            }

            let mut properties = Map::new();
            let mut required = Vec::new();
            for (name, field) in fields {
                let field = classify(field);
                properties.insert(name.clone(), translate_classified(&field));
                if !field.was_optional {
                    required.push(Value::String(name.clone()));
                }
            }

            out.insert("properties".to_string(), Value::Object(properties));
            if !required.is_empty() {
                out.insert("required".to_string(), Value::Array(required));
            }
        }
        _ => {
            out.insert("type".to_string(), json!("object"));
            out.insert(
                "description".to_string(),
                json!(format!(
                    "Unhandled schema type: {}",
                    opaque_name(classified.node)
                )),
            );
        }
    }

    Value::Object(out)
}

/// The runtime type name of a literal, as a JSON Schema `type`.
fn literal_type(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "boolean",
        Value::Null | Value::Array(_) | Value::Object(_) => "object",
    }
}
