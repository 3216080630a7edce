#![deny(missing_docs)]

//! # Route Definitions
//!
//! The caller-facing description of one documented endpoint.

use crate::schema::SchemaNode;
use indexmap::IndexMap;
use std::fmt::Display;
use std::sync::Arc;

/// HTTP methods a route can be registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
    /// PATCH
    Patch,
}

impl HttpMethod {
    /// Lowercase key used under a path item.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
        }
    }

    /// True for the methods that document a request body.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One documented response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseDefinition {
    /// Required description.
    pub description: String,
    /// Optional body schema.
    pub schema: Option<Arc<SchemaNode>>,
}

impl ResponseDefinition {
    /// A response without a body.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            schema: None,
        }
    }

    /// Sets the body schema.
    pub fn with_schema(mut self, schema: impl Into<Arc<SchemaNode>>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

/// A security requirement: scheme name -> scopes.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// One endpoint to document.
///
/// Schemas are held behind `Arc` so one schema instance can be shared between
/// routes and responses; `schema_name` applies to every use of the exact
/// instance stored in `schema`.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDefinition {
    /// Path template with `{param}` placeholders.
    pub path: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// Request schema: query parameters for GET, body for POST/PUT/PATCH.
    pub schema: Option<Arc<SchemaNode>>,
    /// Explicit component name for `schema`.
    pub schema_name: Option<String>,
    /// Responses keyed by status code, in insertion order.
    pub responses: IndexMap<String, ResponseDefinition>,
    /// Operation summary.
    pub summary: Option<String>,
    /// Operation description.
    pub description: Option<String>,
    /// Operation tags.
    pub tags: Vec<String>,
    /// Operation security requirements.
    pub security: Vec<SecurityRequirement>,
}

impl RouteDefinition {
    /// A route with no schema and no responses.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            schema: None,
            schema_name: None,
            responses: IndexMap::new(),
            summary: None,
            description: None,
            tags: Vec::new(),
            security: Vec::new(),
        }
    }

    /// Sets the request schema.
    pub fn with_schema(mut self, schema: impl Into<Arc<SchemaNode>>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Sets the explicit component name for the request schema.
    pub fn with_schema_name(mut self, name: impl Into<String>) -> Self {
        self.schema_name = Some(name.into());
        self
    }

    /// Adds (or replaces) the response for `status`.
    pub fn with_response(mut self, status: impl ToString, response: ResponseDefinition) -> Self {
        self.responses.insert(status.to_string(), response);
        self
    }

    /// Sets the summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Adds a security requirement.
    pub fn with_security(mut self, requirement: SecurityRequirement) -> Self {
        self.security.push(requirement);
        self
    }
}
