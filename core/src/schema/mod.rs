#![deny(missing_docs)]

//! # Schema Module
//!
//! - **node**: the typed schema tree and its builders.
//! - **classify**: modifier unwrapping and kind detection.
//! - **metadata**: description / example / format extraction.
//! - **translate**: node -> OpenAPI schema object.
//! - **common**: stock uuid / email schemas.

pub mod classify;
pub mod common;
pub mod metadata;
pub mod node;
pub mod translate;

pub use classify::{classify, Classified, SchemaKind};
pub use metadata::{extract, NodeMetadata};
pub use node::{Metadata, NodeKind, SchemaNode, StringCheck};
pub use translate::translate;
