#![deny(missing_docs)]

//! # Mongoose Converter
//!
//! Document-store schemas (`mongoose`).
//!
//! Expected input:
//!
//! ```json
//! {"paths": {"email": {"instance": "String", "isRequired": true},
//!            "tags": {"$isMongooseArray": true, "caster": {"instance": "String"}}}}
//! ```

use crate::converters::{parse_entry, require, SchemaConverter, OBJECT_ID_PATTERN};
use crate::error::{AppError, AppResult};
use crate::schema::SchemaNode;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SchemaPath {
    #[serde(default)]
    instance: Option<String>,
    #[serde(default)]
    is_required: bool,
    #[serde(default, rename = "$isMongooseArray")]
    is_array: bool,
    #[serde(default)]
    caster: Option<Caster>,
    #[serde(default)]
    options: Option<PathOptions>,
}

#[derive(Debug, Deserialize)]
struct Caster {
    #[serde(default)]
    instance: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PathOptions {
    #[serde(default, rename = "type")]
    declared: Option<DeclaredType>,
}

/// `type: String` or `type: [String]`, rendered by name.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DeclaredType {
    Single(String),
    List(Vec<String>),
}

impl SchemaPath {
    fn node(&self) -> SchemaNode {
        let declared = self.options.as_ref().and_then(|o| o.declared.as_ref());

        if self.is_array {
            let element = self
                .caster
                .as_ref()
                .and_then(|c| c.instance.clone())
                .or_else(|| match declared {
                    Some(DeclaredType::List(names)) => names.first().cloned(),
                    _ => None,
                })
                .unwrap_or_else(|| "string".to_string());
            return SchemaNode::array(basic_node(&element));
        }

        let name = self.instance.clone().or_else(|| match declared {
            Some(DeclaredType::Single(name)) => Some(name.clone()),
            _ => None,
        });
        basic_node(name.as_deref().unwrap_or_default())
    }
}

fn basic_node(type_name: &str) -> SchemaNode {
    match type_name.to_lowercase().as_str() {
        "string" => SchemaNode::string(),
        "number" => SchemaNode::number(),
        "boolean" => SchemaNode::boolean(),
        "date" => SchemaNode::date(),
        "objectid" => SchemaNode::string().regex(OBJECT_ID_PATTERN),
        "buffer" => SchemaNode::instance_of("Buffer"),
        "map" => SchemaNode::record(),
        _ => SchemaNode::any(),
    }
}

/// Converter for document-store schemas.
#[derive(Debug, Default, Clone, Copy)]
pub struct MongooseConverter;

impl SchemaConverter for MongooseConverter {
    fn source_name(&self) -> &'static str {
        "mongoose"
    }

    fn to_schema(&self, raw: &Value) -> AppResult<SchemaNode> {
        mongoose_to_schema(raw)
    }
}

/// Builds an object schema from a document-store schema's `paths`.
///
/// Paths not marked `isRequired` become optional.
pub fn mongoose_to_schema(raw: &Value) -> AppResult<SchemaNode> {
    let paths = raw.get("paths").and_then(Value::as_object).ok_or_else(|| {
        AppError::Converter(
            "Invalid Mongoose schema: expected a `paths` object describing each field".to_string(),
        )
    })?;

    let mut fields = Vec::with_capacity(paths.len());
    for (name, entry) in paths {
        let path: SchemaPath = parse_entry("path", name, entry)?;
        fields.push((name.clone(), require(path.node(), path.is_required)));
    }

    Ok(SchemaNode::object(fields))
}
