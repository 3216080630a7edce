#![deny(missing_docs)]

//! # Swagger 2 Downgrade
//!
//! Converts an assembled OpenAPI 3 document into the Swagger 2.0 shape.
//! Only paths, schemas, parameters, request bodies and JSON response content
//! are carried over.

use crate::document::registry::SCHEMA_REF_PREFIX;
use serde_json::{json, Map, Value};
use url::Url;

const DEFAULT_SERVER: &str = "http://localhost";
const DEFINITIONS_REF_PREFIX: &str = "#/definitions/";

/// Builds the Swagger 2 counterpart of `openapi`.
///
/// - `host` is the authority of the first server URL (`localhost` by default);
/// - `basePath` is always `/`;
/// - `definitions` is `components.schemas` verbatim;
/// - request bodies become a trailing `in: body` parameter plus `consumes`;
/// - response `content["application/json"].schema` is lifted to `schema`.
pub fn downgrade_to_swagger2(openapi: &Value) -> Value {
    let mut doc = Map::new();
    doc.insert("swagger".to_string(), json!("2.0"));
    doc.insert(
        "info".to_string(),
        openapi.get("info").cloned().unwrap_or_else(|| json!({})),
    );
    doc.insert("host".to_string(), json!(resolve_host(openapi)));
    doc.insert("basePath".to_string(), json!("/"));

    let mut paths = Map::new();
    if let Some(source_paths) = openapi.get("paths").and_then(Value::as_object) {
        for (path, methods) in source_paths {
            let mut converted = Map::new();
            if let Some(methods) = methods.as_object() {
                for (method, endpoint) in methods {
                    converted.insert(method.clone(), convert_endpoint(endpoint));
                }
            }
            paths.insert(path.clone(), Value::Object(converted));
        }
    }
    doc.insert("paths".to_string(), Value::Object(paths));

    let definitions = openapi
        .pointer("/components/schemas")
        .cloned()
        .unwrap_or_else(|| json!({}));
    doc.insert("definitions".to_string(), definitions);
    doc.insert(
        "tags".to_string(),
        openapi.get("tags").cloned().unwrap_or_else(|| json!([])),
    );

    Value::Object(doc)
}

fn resolve_host(openapi: &Value) -> String {
    let server = openapi
        .pointer("/servers/0/url")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_SERVER);

    match Url::parse(server) {
        Ok(url) => match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            (None, _) => "localhost".to_string(),
        },
        Err(e) => {
            tracing::warn!(server, error = %e, "server URL is not absolute; using localhost");
            "localhost".to_string()
        }
    }
}

fn convert_endpoint(endpoint: &Value) -> Value {
    let Some(source) = endpoint.as_object() else {
        return endpoint.clone();
    };

    let mut out = Map::new();
    for key in ["tags", "summary", "description"] {
        if let Some(v) = source.get(key) {
            out.insert(key.to_string(), v.clone());
        }
    }

    let mut parameters: Option<Vec<Value>> = source
        .get("parameters")
        .and_then(Value::as_array)
        .cloned();

    if let Some(body) = source.get("requestBody") {
        let schema = body
            .pointer("/content/application~1json/schema")
            .cloned()
            .unwrap_or_else(|| json!({}));
        out.insert("consumes".to_string(), json!(["application/json"]));
        parameters.get_or_insert_with(Vec::new).push(json!({
            "in": "body",
            "name": "body",
            "schema": schema
        }));
    }

    if let Some(params) = parameters {
        out.insert("parameters".to_string(), Value::Array(params));
    }

    let mut responses = Map::new();
    if let Some(source_responses) = source.get("responses").and_then(Value::as_object) {
        for (status, response) in source_responses {
            let mut entry = Map::new();
            if let Some(desc) = response.get("description") {
                entry.insert("description".to_string(), desc.clone());
            }
            if let Some(schema) = response.pointer("/content/application~1json/schema") {
                entry.insert("schema".to_string(), schema.clone());
            }
            responses.insert(status.clone(), Value::Object(entry));
        }
    }
    out.insert("responses".to_string(), Value::Object(responses));

    Value::Object(out)
}

/// Rewrites every `#/components/schemas/` reference into `#/definitions/`.
///
/// The downgrade itself passes references through unchanged; apply this to
/// its output when a strictly Swagger 2 resolvable document is needed.
pub fn rewrite_schema_refs(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| {
                    let v = match (k.as_str(), v) {
                        ("$ref", Value::String(r)) => {
                            Value::String(r.replace(SCHEMA_REF_PREFIX, DEFINITIONS_REF_PREFIX))
                        }
                        _ => rewrite_schema_refs(v),
                    };
                    (k.clone(), v)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(rewrite_schema_refs).collect()),
        other => other.clone(),
    }
}
