#![deny(missing_docs)]

//! # Prisma Converter
//!
//! Generated-client models (`prisma`).
//!
//! Reads one DMMF model:
//!
//! ```json
//! {"name": "User", "fields": [{"name": "id", "type": "String", "isRequired": true}]}
//! ```

use crate::converters::{parse_entry, require, SchemaConverter};
use crate::error::{AppError, AppResult};
use crate::schema::SchemaNode;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Field {
    #[serde(rename = "type")]
    field_type: String,
    #[serde(default)]
    is_required: bool,
    #[serde(default)]
    is_list: bool,
    #[serde(default)]
    documentation: Option<String>,
}

impl Field {
    fn node(&self) -> SchemaNode {
        let base = match self.field_type.as_str() {
            "String" => SchemaNode::string(),
            "Int" | "Float" | "Decimal" => SchemaNode::number(),
            "Boolean" => SchemaNode::boolean(),
            "DateTime" => SchemaNode::date(),
            "Json" => SchemaNode::any(),
            _ => SchemaNode::unknown(),
        };
        let node = if self.is_list {
            SchemaNode::array(base)
        } else {
            base
        };
        match &self.documentation {
            Some(doc) => node.describe(doc.as_str()),
            None => node,
        }
    }
}

/// Converter for generated-client models.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrismaConverter;

impl SchemaConverter for PrismaConverter {
    fn source_name(&self) -> &'static str {
        "prisma"
    }

    fn to_schema(&self, raw: &Value) -> AppResult<SchemaNode> {
        prisma_to_schema(raw)
    }
}

/// Builds an object schema from a model's `fields`.
pub fn prisma_to_schema(raw: &Value) -> AppResult<SchemaNode> {
    let entries = raw.get("fields").and_then(Value::as_array).ok_or_else(|| {
        AppError::Converter(
            "Invalid Prisma model: expected a `fields` list (run `prisma generate` first)"
                .to_string(),
        )
    })?;

    let mut fields = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let name = entry
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                AppError::Converter(format!("Error processing field #{}: missing `name`", index))
            })?;
        let field: Field = parse_entry("field", &name, entry)?;
        fields.push((name, require(field.node(), field.is_required)));
    }

    Ok(SchemaNode::object(fields))
}
