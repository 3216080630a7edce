#![deny(missing_docs)]

//! # Schemadoc Core
//!
//! Turns typed schema trees and route definitions into OpenAPI 3 / Swagger 2
//! documents, and merges such documents together.

/// Shared error types.
pub mod error;

/// Typed schema nodes and their translation.
pub mod schema;

/// Route assembly and document generation.
pub mod document;

/// Deep merge of specification documents.
pub mod merge;

/// Spec file loading.
pub mod loader;

/// Schemas derived from external model metadata.
pub mod converters;

pub use converters::{mongoose_to_schema, prisma_to_schema, typeorm_to_schema, SchemaConverter};
pub use document::{
    downgrade_to_swagger2, rewrite_schema_refs, GeneratorOptions, HttpMethod, MergeSpecConfig,
    ResponseDefinition, RouteDefinition, SwaggerGenerator,
};
pub use error::{AppError, AppResult};
pub use loader::load_specs;
pub use merge::deep_merge;
pub use schema::{classify, translate, SchemaNode};
