#![deny(missing_docs)]

//! # Route Assembly
//!
//! Builds the operation object for one route: parameters, request body and
//! responses. Named schemas are referenced through the registry; everything
//! else is inlined.

use crate::document::registry::SchemaRegistry;
use crate::document::routes::{HttpMethod, RouteDefinition};
use crate::schema::translate::translate_classified;
use crate::schema::{classify, NodeKind, SchemaNode};
use regex::Regex;
use serde_json::{json, Map, Value};
use std::sync::OnceLock;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Placeholder names in a path template, in order of appearance.
pub fn path_placeholders(path: &str) -> Vec<String> {
    static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();
    let re = PLACEHOLDER_RE.get_or_init(|| Regex::new(r"\{([^}]+)\}").expect("Invalid regex"));
    re.captures_iter(path)
        .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Builds the operation object for `route`.
pub fn build_operation(registry: &SchemaRegistry<'_>, route: &RouteDefinition) -> Value {
    let mut op = Map::new();

    if !route.tags.is_empty() {
        op.insert("tags".to_string(), json!(route.tags));
    }
    if let Some(summary) = &route.summary {
        op.insert("summary".to_string(), json!(summary));
    }
    if let Some(desc) = &route.description {
        op.insert("description".to_string(), json!(desc));
    }

    op.insert(
        "parameters".to_string(),
        Value::Array(build_parameters(route)),
    );

    if route.method.has_body() {
        if let Some(body) = build_request_body(registry, route) {
            op.insert("requestBody".to_string(), body);
        }
    }

    op.insert("responses".to_string(), build_responses(registry, route));

    if !route.security.is_empty() {
        op.insert("security".to_string(), json!(route.security));
    }

    Value::Object(op)
}

/// Path parameters for each placeholder, then query parameters for GET
/// routes whose request schema is an object.
pub fn build_parameters(route: &RouteDefinition) -> Vec<Value> {
    let mut params: Vec<Value> = path_placeholders(&route.path)
        .into_iter()
        .map(|name| {
            json!({
                "name": name,
                "in": "path",
                "required": true,
                "schema": { "type": "string" }
            })
        })
        .collect();

    if route.method == HttpMethod::Get {
        if let Some(NodeKind::Object(fields)) = route.schema.as_ref().map(|s| &s.kind) {
            for (name, field) in fields {
                params.push(build_query_parameter(name, field));
            }
        }
    }

    params
}

fn build_query_parameter(name: &str, field: &SchemaNode) -> Value {
    let classified = classify(field);
    let schema = translate_classified(&classified);

    let mut obj = Map::new();
    obj.insert("name".to_string(), json!(name));
    obj.insert("in".to_string(), json!("query"));
    obj.insert("required".to_string(), json!(!classified.was_optional));
    if let Some(desc) = classified.description {
        obj.insert("description".to_string(), json!(desc));
    }
    obj.insert("schema".to_string(), schema);
    Value::Object(obj)
}

/// `{required, content: {"application/json": {schema}}}`, or `None` without a schema.
pub fn build_request_body(registry: &SchemaRegistry<'_>, route: &RouteDefinition) -> Option<Value> {
    let schema = route.schema.as_ref()?;
    Some(json!({
        "required": true,
        "content": {
            JSON_MEDIA_TYPE: { "schema": registry.reference_or_inline(schema) }
        }
    }))
}

/// Status code -> `{description, content?}`.
pub fn build_responses(registry: &SchemaRegistry<'_>, route: &RouteDefinition) -> Value {
    let mut responses = Map::new();
    for (status, response) in &route.responses {
        let mut entry = Map::new();
        entry.insert("description".to_string(), json!(response.description));
        if let Some(schema) = &response.schema {
            entry.insert(
                "content".to_string(),
                json!({ JSON_MEDIA_TYPE: { "schema": registry.reference_or_inline(schema) } }),
            );
        }
        responses.insert(status.clone(), Value::Object(entry));
    }
    Value::Object(responses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::routes::ResponseDefinition;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[test]
    fn test_path_placeholders_in_order() {
        assert_eq!(
            path_placeholders("/orgs/{org}/users/{userId}/items"),
            vec!["org", "userId"]
        );
        assert!(path_placeholders("/plain").is_empty());
    }

    #[test]
    fn test_path_parameters() {
        let route = RouteDefinition::new(HttpMethod::Delete, "/users/{id}");
        assert_eq!(
            build_parameters(&route),
            vec![json!({
                "name": "id",
                "in": "path",
                "required": true,
                "schema": {"type": "string"}
            })]
        );
    }

    #[test]
    fn test_query_parameters_for_get_objects() {
        let route = RouteDefinition::new(HttpMethod::Get, "/users/{org}").with_schema(
            SchemaNode::object([
                ("name", SchemaNode::string().describe("Filter by name")),
                ("age", SchemaNode::number().optional().describe("Filter by age")),
            ]),
        );
        let params = build_parameters(&route);
        assert_eq!(params.len(), 3);
        assert_eq!(params[0]["in"], "path");
        assert_eq!(
            params[1],
            json!({
                "name": "name",
                "in": "query",
                "required": true,
                "description": "Filter by name",
                "schema": {"type": "string", "description": "Filter by name"}
            })
        );
        assert_eq!(
            params[2],
            json!({
                "name": "age",
                "in": "query",
                "required": false,
                "description": "Filter by age",
                "schema": {"type": "number", "description": "Filter by age"}
            })
        );
    }

    #[test]
    fn test_no_query_parameters_for_post_or_non_objects() {
        let post = RouteDefinition::new(HttpMethod::Post, "/u")
            .with_schema(SchemaNode::object([("a", SchemaNode::string())]));
        assert!(build_parameters(&post).is_empty());

        let get = RouteDefinition::new(HttpMethod::Get, "/u")
            .with_schema(SchemaNode::array(SchemaNode::string()));
        assert!(build_parameters(&get).is_empty());
    }

    #[test]
    fn test_request_body_inline_and_ref() {
        let named = Arc::new(SchemaNode::object([("a", SchemaNode::string())]).describe("Thing"));
        let routes = vec![
            RouteDefinition::new(HttpMethod::Post, "/a").with_schema(Arc::clone(&named)),
            RouteDefinition::new(HttpMethod::Put, "/b")
                .with_schema(SchemaNode::object([("b", SchemaNode::number())])),
        ];
        let registry = SchemaRegistry::new(&routes, false);

        let body = build_request_body(&registry, &routes[0]).unwrap();
        assert_eq!(
            body,
            json!({
                "required": true,
                "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Thing"}}}
            })
        );

        let body = build_request_body(&registry, &routes[1]).unwrap();
        assert_eq!(
            body["content"]["application/json"]["schema"],
            json!({"type": "object", "properties": {"b": {"type": "number"}}, "required": ["b"]})
        );
    }

    #[test]
    fn test_operation_skips_body_for_get_and_delete() {
        let routes = vec![RouteDefinition::new(HttpMethod::Delete, "/a")
            .with_schema(SchemaNode::object([("a", SchemaNode::string())]))];
        let registry = SchemaRegistry::new(&routes, false);
        let op = build_operation(&registry, &routes[0]);
        assert!(op.get("requestBody").is_none());
        assert_eq!(op["parameters"], json!([]));
        assert_eq!(op["responses"], json!({}));
    }

    #[test]
    fn test_responses_with_and_without_content() {
        let routes = vec![RouteDefinition::new(HttpMethod::Get, "/a")
            .with_response(200, ResponseDefinition::new("Ok").with_schema(SchemaNode::string()))
            .with_response(404, ResponseDefinition::new("Not found"))];
        let registry = SchemaRegistry::new(&routes, false);
        assert_eq!(
            build_responses(&registry, &routes[0]),
            json!({
                "200": {
                    "description": "Ok",
                    "content": {"application/json": {"schema": {"type": "string"}}}
                },
                "404": {"description": "Not found"}
            })
        );
    }

    #[test]
    fn test_operation_metadata() {
        let mut requirement = indexmap::IndexMap::new();
        requirement.insert("bearer".to_string(), vec![]);
        let routes = vec![RouteDefinition::new(HttpMethod::Get, "/a")
            .with_summary("List")
            .with_description("Lists things")
            .with_tag("Things")
            .with_security(requirement)];
        let registry = SchemaRegistry::new(&routes, false);
        let op = build_operation(&registry, &routes[0]);
        assert_eq!(op["summary"], "List");
        assert_eq!(op["description"], "Lists things");
        assert_eq!(op["tags"], json!(["Things"]));
        assert_eq!(op["security"], json!([{"bearer": []}]));
    }
}
