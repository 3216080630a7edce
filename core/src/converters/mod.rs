#![deny(missing_docs)]

//! # Source Metadata Converters
//!
//! Turn reflection metadata from other modelling layers into object schema
//! nodes. Each converter reads the JSON rendering of its source:
//!
//! - **mongoose**: a document-store schema with a `paths` object.
//! - **typeorm**: relational metadata storage with `tables` and `columns`.
//! - **prisma**: a generated-client model with a `fields` list.

use crate::error::{AppError, AppResult};
use crate::schema::SchemaNode;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub mod mongoose;
pub mod prisma;
pub mod typeorm;

pub use mongoose::{mongoose_to_schema, MongooseConverter};
pub use prisma::{prisma_to_schema, PrismaConverter};
pub use typeorm::{typeorm_to_schema, TypeormConverter};

/// Pattern for 24 hex digit object identifiers.
pub const OBJECT_ID_PATTERN: &str = "^[0-9a-fA-F]{24}$";

/// A source of object schemas.
///
/// Implementors validate the raw metadata shape first and fail with a
/// `Converter` error naming what is missing.
pub trait SchemaConverter {
    /// Short name of the metadata source, used in diagnostics.
    fn source_name(&self) -> &'static str;

    /// Builds the object schema described by `raw`.
    fn to_schema(&self, raw: &Value) -> AppResult<SchemaNode>;
}

/// Deserializes one field entry, naming it in the error.
pub(crate) fn parse_entry<T: DeserializeOwned>(label: &str, name: &str, raw: &Value) -> AppResult<T> {
    serde_json::from_value(raw.clone()).map_err(|e| field_error(label, name, e))
}

/// `Error processing <label> <name>: <cause>`.
pub(crate) fn field_error(label: &str, name: &str, cause: impl std::fmt::Display) -> AppError {
    AppError::Converter(format!("Error processing {} {}: {}", label, name, cause))
}

/// Wraps `node` in an optional layer unless `required`.
pub(crate) fn require(node: SchemaNode, required: bool) -> SchemaNode {
    if required {
        node
    } else {
        node.optional()
    }
}
