#![deny(missing_docs)]

//! # Schema Registry
//!
//! Decides which schemas become named components, stores them once in
//! `components.schemas`, and hands out `$ref` fragments for them.
//!
//! Naming priority for an (unwrapped) object schema:
//! 1. the `schema_name` of the route holding this exact schema instance;
//! 2. the schema's description collapsed to PascalCase;
//! 3. nothing, in which case the schema is inlined.
//!
//! The first schema registered under a name keeps it. A later, differently
//! shaped schema collapsing to the same name is not stored and a warning is
//! logged.

use crate::document::routes::RouteDefinition;
use crate::schema::{translate, NodeKind, SchemaNode};
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// JSON pointer prefix for component schemas.
pub const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// Naming and registration over a fixed route list.
pub struct SchemaRegistry<'r> {
    routes: &'r [RouteDefinition],
    inline: bool,
}

impl<'r> SchemaRegistry<'r> {
    /// Creates a registry. With `inline` set, no schema is ever named.
    pub fn new(routes: &'r [RouteDefinition], inline: bool) -> Self {
        Self { routes, inline }
    }

    /// Component name for `schema`, or `None` when it should be inlined.
    pub fn name_for(&self, schema: &Arc<SchemaNode>) -> Option<String> {
        if self.inline || !matches!(schema.kind, NodeKind::Object(_)) {
            return None;
        }

        let explicit = self.routes.iter().find_map(|route| {
            let owns = route
                .schema
                .as_ref()
                .is_some_and(|s| Arc::ptr_eq(s, schema));
            if owns {
                route.schema_name.clone()
            } else {
                None
            }
        });

        explicit.or_else(|| schema.meta.description.as_deref().and_then(derive_name))
    }

    /// Stores `schema` under its name if it has one and the name is free.
    ///
    /// Returns the name whether or not this call stored it.
    pub fn register(
        &self,
        schema: &Arc<SchemaNode>,
        pool: &mut Map<String, Value>,
    ) -> Option<String> {
        let name = self.name_for(schema)?;
        let rendered = translate(schema);

        match pool.get(&name) {
            None => {
                tracing::debug!(schema = %name, "registering component schema");
                pool.insert(name.clone(), rendered);
            }
            Some(existing) if *existing != rendered => {
                tracing::warn!(
                    schema = %name,
                    "component schema name already taken by a different schema; keeping the first"
                );
            }
            Some(_) => {}
        }

        Some(name)
    }

    /// `$ref` to the named component, or the inline translation.
    pub fn reference_or_inline(&self, schema: &Arc<SchemaNode>) -> Value {
        match self.name_for(schema) {
            Some(name) => schema_ref(&name),
            None => translate(schema),
        }
    }
}

/// A `{"$ref": "#/components/schemas/<name>"}` fragment.
pub fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("{}{}", SCHEMA_REF_PREFIX, name) })
}

/// Collapses a description into a PascalCase component name.
///
/// Leading non-letters are dropped, the rest is split on anything that is not
/// an ASCII letter or digit, and each word gets an upper-cased first character.
/// Returns `None` when nothing usable remains.
///
/// `"User profile"` -> `"UserProfile"`, `"2fa-code!"` -> `"FaCode"`.
pub fn derive_name(description: &str) -> Option<String> {
    let trimmed = description.trim_start_matches(|c: char| !c.is_ascii_alphabetic());

    let name: String = trimmed
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::routes::{HttpMethod, ResponseDefinition};

    fn user_schema(description: &str) -> Arc<SchemaNode> {
        Arc::new(SchemaNode::object([("name", SchemaNode::string())]).describe(description))
    }

    #[test]
    fn test_derive_name_fixtures() {
        assert_eq!(derive_name("order item").as_deref(), Some("OrderItem"));
        assert_eq!(derive_name("User profile").as_deref(), Some("UserProfile"));
        assert_eq!(derive_name("2fa-code!").as_deref(), Some("FaCode"));
        assert_eq!(derive_name("User").as_deref(), Some("User"));
        assert_eq!(derive_name("already PascalCase").as_deref(), Some("AlreadyPascalCase"));
        assert_eq!(derive_name("item v2 payload").as_deref(), Some("ItemV2Payload"));
        assert_eq!(derive_name("user_profile").as_deref(), Some("UserProfile"));
        assert_eq!(derive_name("123 !!"), None);
        assert_eq!(derive_name(""), None);
    }

    #[test]
    fn test_explicit_name_wins() {
        let schema = user_schema("User profile");
        let routes = vec![RouteDefinition::new(HttpMethod::Post, "/u")
            .with_schema(Arc::clone(&schema))
            .with_schema_name("CreateUser")];
        let registry = SchemaRegistry::new(&routes, false);
        assert_eq!(registry.name_for(&schema).as_deref(), Some("CreateUser"));
    }

    #[test]
    fn test_explicit_name_needs_the_same_instance() {
        let schema = user_schema("User profile");
        let lookalike = user_schema("User profile");
        let routes = vec![RouteDefinition::new(HttpMethod::Post, "/u")
            .with_schema(Arc::clone(&schema))
            .with_schema_name("CreateUser")];
        let registry = SchemaRegistry::new(&routes, false);
        assert_eq!(registry.name_for(&lookalike).as_deref(), Some("UserProfile"));
    }

    #[test]
    fn test_only_plain_objects_are_named() {
        let routes = Vec::new();
        let registry = SchemaRegistry::new(&routes, false);

        let array = Arc::new(SchemaNode::array(SchemaNode::string()).describe("Names"));
        assert_eq!(registry.name_for(&array), None);

        let wrapped = Arc::new(
            SchemaNode::object([("a", SchemaNode::string())])
                .optional()
                .describe("Wrapped"),
        );
        assert_eq!(registry.name_for(&wrapped), None);

        let anonymous = Arc::new(SchemaNode::object([("a", SchemaNode::string())]));
        assert_eq!(registry.name_for(&anonymous), None);
    }

    #[test]
    fn test_inline_mode_never_names() {
        let schema = user_schema("User");
        let routes = vec![RouteDefinition::new(HttpMethod::Post, "/u")
            .with_schema(Arc::clone(&schema))
            .with_schema_name("Named")];
        let registry = SchemaRegistry::new(&routes, true);
        assert_eq!(registry.name_for(&schema), None);
        assert_eq!(registry.reference_or_inline(&schema), translate(&schema));
    }

    #[test]
    fn test_register_first_writer_wins() {
        let routes = Vec::new();
        let registry = SchemaRegistry::new(&routes, false);
        let mut pool = Map::new();

        let first = user_schema("order item");
        let second = Arc::new(
            SchemaNode::object([("sku", SchemaNode::number())]).describe("Order-Item"),
        );

        assert_eq!(registry.register(&first, &mut pool).as_deref(), Some("OrderItem"));
        assert_eq!(registry.register(&second, &mut pool).as_deref(), Some("OrderItem"));
        assert_eq!(pool.len(), 1);
        assert_eq!(pool["OrderItem"], translate(&first));
    }

    #[test]
    fn test_reference_fragment() {
        let schema = user_schema("User");
        let routes = vec![RouteDefinition::new(HttpMethod::Get, "/u")
            .with_response(200, ResponseDefinition::new("ok").with_schema(Arc::clone(&schema)))];
        let registry = SchemaRegistry::new(&routes, false);
        assert_eq!(
            registry.reference_or_inline(&schema),
            json!({"$ref": "#/components/schemas/User"})
        );
    }
}
