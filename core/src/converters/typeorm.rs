#![deny(missing_docs)]

//! # TypeORM Converter
//!
//! Relational ORM entities (`typeorm`).
//!
//! Reads the metadata-args storage rendered as JSON, with class targets
//! replaced by their names:
//!
//! ```json
//! {"tables": [{"target": "User"}],
//!  "columns": [{"target": "User", "propertyName": "id", "type": "String",
//!               "options": {"nullable": false}}]}
//! ```

use crate::converters::{parse_entry, require, SchemaConverter, OBJECT_ID_PATTERN};
use crate::error::{AppError, AppResult};
use crate::schema::SchemaNode;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Column {
    property_name: String,
    #[serde(default, rename = "type")]
    column_type: Option<String>,
    #[serde(default)]
    is_array: bool,
    #[serde(default)]
    options: ColumnOptions,
}

#[derive(Debug, Default, Deserialize)]
struct ColumnOptions {
    #[serde(default)]
    nullable: Option<bool>,
}

impl Column {
    /// Nullable unless explicitly declared otherwise.
    fn is_nullable(&self) -> bool {
        self.options.nullable.unwrap_or(true)
    }

    fn node(&self) -> SchemaNode {
        match self.column_type.as_deref() {
            Some("String") => SchemaNode::string(),
            Some("Number") => SchemaNode::number(),
            Some("Boolean") => SchemaNode::boolean(),
            Some("Date") => SchemaNode::date(),
            Some("ObjectID") => SchemaNode::string().regex(OBJECT_ID_PATTERN),
            Some("Json") => SchemaNode::any(),
            _ if self.is_array => SchemaNode::array(SchemaNode::any()),
            _ => SchemaNode::unknown(),
        }
    }
}

fn target_of(entry: &Value) -> Option<&str> {
    entry.get("target").and_then(Value::as_str)
}

/// Converter for one named relational entity.
#[derive(Debug, Clone)]
pub struct TypeormConverter {
    entity: String,
}

impl TypeormConverter {
    /// Converter for the entity class named `entity`.
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
        }
    }
}

impl SchemaConverter for TypeormConverter {
    fn source_name(&self) -> &'static str {
        "typeorm"
    }

    fn to_schema(&self, raw: &Value) -> AppResult<SchemaNode> {
        typeorm_to_schema(raw, &self.entity)
    }
}

/// Builds an object schema from the columns registered for `entity`.
///
/// Columns are optional unless `options.nullable` is explicitly `false`.
pub fn typeorm_to_schema(raw: &Value, entity: &str) -> AppResult<SchemaNode> {
    if entity.trim().is_empty() {
        return Err(AppError::Converter(
            "Invalid TypeORM entity target: an entity name is required".to_string(),
        ));
    }

    let (Some(tables), Some(columns)) = (
        raw.get("tables").and_then(Value::as_array),
        raw.get("columns").and_then(Value::as_array),
    ) else {
        return Err(AppError::Converter(
            "Invalid TypeORM metadata: expected `tables` and `columns` lists".to_string(),
        ));
    };

    if !tables.iter().any(|t| target_of(t) == Some(entity)) {
        return Err(AppError::Converter(format!(
            "No TypeORM metadata found for entity '{}'",
            entity
        )));
    }

    let mut fields = Vec::new();
    for (index, entry) in columns
        .iter()
        .enumerate()
        .filter(|(_, c)| target_of(c) == Some(entity))
    {
        let name = entry
            .get("propertyName")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", index));
        let column: Column = parse_entry("column", &name, entry)?;
        let node = require(column.node(), !column.is_nullable());
        fields.push((column.property_name, node));
    }

    Ok(SchemaNode::object(fields))
}
