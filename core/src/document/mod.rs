#![deny(missing_docs)]

//! # Document Assembly
//!
//! Route definitions in, OpenAPI 3 (or Swagger 2) documents out.

pub mod assembler;
pub mod generator;
pub mod options;
pub mod registry;
pub mod routes;
pub mod swagger2;

pub use generator::{builtin_schemas, SwaggerGenerator};
pub use options::{
    Contact, ExternalDocs, FileFormat, GeneratorOptions, MergeDirective, MergeSpecConfig,
    MergeSpecKind, Tag,
};
pub use registry::{derive_name, SchemaRegistry};
pub use routes::{HttpMethod, ResponseDefinition, RouteDefinition, SecurityRequirement};
pub use swagger2::{downgrade_to_swagger2, rewrite_schema_refs};
