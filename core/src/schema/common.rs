#![deny(missing_docs)]

//! # Common Schemas
//!
//! Ready-made string schemas for common identifier shapes.

use crate::schema::node::SchemaNode;

const DEFAULT_UUID_EXAMPLE: &str = "550e8400-e29b-41d4-a716-446655440000";
const DEFAULT_EMAIL_EXAMPLE: &str = "user@example.com";

/// A uuid string with description and example.
pub fn uuid(description: Option<&str>, example: Option<&str>) -> SchemaNode {
    SchemaNode::string()
        .uuid()
        .describe(description.unwrap_or("Unique identifier"))
        .example(example.unwrap_or(DEFAULT_UUID_EXAMPLE))
}

/// An email string with description and example.
pub fn email(description: Option<&str>, example: Option<&str>) -> SchemaNode {
    SchemaNode::string()
        .email()
        .describe(description.unwrap_or("Valid email address"))
        .example(example.unwrap_or(DEFAULT_EMAIL_EXAMPLE))
}
