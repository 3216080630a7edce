#![deny(missing_docs)]

//! # Swagger Generator
//!
//! Collects route definitions and assembles them into an OpenAPI 3 document,
//! applying configured merge directives on top.

use crate::document::assembler::build_operation;
use crate::document::options::{FileFormat, GeneratorOptions, MergeDirective, MergeSpecConfig};
use crate::document::registry::SchemaRegistry;
use crate::document::routes::RouteDefinition;
use crate::document::swagger2::downgrade_to_swagger2;
use crate::error::{AppError, AppResult};
use crate::loader::load_specs;
use crate::merge::deep_merge;
use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;

/// Schemas present in every generated document.
pub fn builtin_schemas() -> Map<String, Value> {
    let mut schemas = Map::new();
    schemas.insert(
        "ErrorResponse".to_string(),
        json!({
            "type": "object",
            "properties": {
                "message": { "type": "string" },
                "code": { "type": "string" }
            }
        }),
    );
    schemas.insert(
        "UserResponse".to_string(),
        json!({
            "type": "object",
            "properties": {
                "id": { "type": "string", "format": "uuid" },
                "name": { "type": "string" }
            }
        }),
    );
    schemas
}

/// Route collection plus document settings.
///
/// Generation reads the routes and options only, so `generate_spec` can be
/// called any number of times with identical results.
#[derive(Debug, Clone)]
pub struct SwaggerGenerator {
    routes: Vec<RouteDefinition>,
    options: GeneratorOptions,
    directives: Vec<MergeDirective>,
}

impl SwaggerGenerator {
    /// Creates a generator, validating every merge directive up front.
    pub fn new(options: GeneratorOptions) -> AppResult<Self> {
        let directives = options
            .merge_specs
            .iter()
            .map(MergeSpecConfig::validate)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self {
            routes: Vec::new(),
            options,
            directives,
        })
    }

    /// Registers a route.
    pub fn add_route(&mut self, route: RouteDefinition) -> &mut Self {
        self.routes.push(route);
        self
    }

    /// Registered routes, in registration order.
    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    /// The options this generator was built with.
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Loads every spec under `path` and queues it as a preloaded directive.
    ///
    /// Loader failures are logged; nothing is queued in that case.
    pub fn merge_external_docs(&mut self, path: &Path) -> &mut Self {
        match load_specs(path) {
            Ok(docs) => {
                tracing::debug!(path = ?path, count = docs.len(), "queued external specs");
                self.directives
                    .extend(docs.into_iter().map(MergeDirective::Preloaded));
            }
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "could not load external specs");
            }
        }
        self
    }

    /// Builds the OpenAPI 3 document.
    pub fn generate_spec(&self) -> Value {
        let mut doc = self.base_document();

        let registry = SchemaRegistry::new(&self.routes, self.options.inline_schemas);
        let mut pool = builtin_schemas();
        if let Some(Value::Object(user)) = self.options.components.get("schemas") {
            for (name, schema) in user {
                pool.insert(name.clone(), schema.clone());
            }
        }

        for route in &self.routes {
            if let Some(schema) = &route.schema {
                registry.register(schema, &mut pool);
            }
            for response in route.responses.values() {
                if let Some(schema) = &response.schema {
                    registry.register(schema, &mut pool);
                }
            }
        }

        let mut paths = Map::new();
        for route in &self.routes {
            let item = paths
                .entry(route.path.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            if let Value::Object(methods) = item {
                methods.insert(
                    route.method.as_str().to_string(),
                    build_operation(&registry, route),
                );
            }
        }
        doc.insert("paths".to_string(), Value::Object(paths));

        let mut components = Map::new();
        components.insert("schemas".to_string(), Value::Object(pool));
        for (kind, value) in &self.options.components {
            if kind != "schemas" {
                components.insert(kind.clone(), value.clone());
            }
        }
        doc.insert("components".to_string(), Value::Object(components));

        let mut spec = Value::Object(doc);
        for directive in &self.directives {
            if let Some(extra) = resolve_directive(directive) {
                spec = deep_merge(&spec, &extra);
            }
        }
        spec
    }

    /// Builds the OpenAPI 3 document and downgrades it to Swagger 2.0.
    pub fn generate_swagger2(&self) -> Value {
        downgrade_to_swagger2(&self.generate_spec())
    }

    fn base_document(&self) -> Map<String, Value> {
        let opts = &self.options;
        let mut doc = Map::new();
        doc.insert("openapi".to_string(), json!("3.0.0"));

        let mut info = Map::new();
        info.insert("title".to_string(), json!(opts.title));
        info.insert("version".to_string(), json!(opts.version));
        if let Some(desc) = &opts.description {
            info.insert("description".to_string(), json!(desc));
        }
        if let Some(contact) = &opts.contact {
            info.insert("contact".to_string(), json!(contact));
        }
        doc.insert("info".to_string(), Value::Object(info));

        if let Some(docs) = &opts.external_docs {
            doc.insert("externalDocs".to_string(), json!(docs));
        }
        if let Some(url) = &opts.base_url {
            doc.insert("servers".to_string(), json!([{ "url": url }]));
        }
        if !opts.tags.is_empty() {
            doc.insert("tags".to_string(), json!(opts.tags));
        }
        doc
    }
}

/// Document contributed by a directive, or `None` when it has to be skipped.
fn resolve_directive(directive: &MergeDirective) -> Option<Value> {
    match directive {
        MergeDirective::Preloaded(content) => {
            tracing::debug!("merging preloaded spec");
            Some(content.clone())
        }
        MergeDirective::File { format, path } => {
            if !path.exists() {
                tracing::warn!(path = ?path, "merge spec file not found; skipping");
                return None;
            }
            match read_directive_file(*format, path) {
                Ok(doc) => {
                    tracing::debug!(path = ?path, "merging spec file");
                    Some(doc)
                }
                Err(e) => {
                    tracing::warn!(path = ?path, error = %e, "failed to merge spec file; skipping");
                    None
                }
            }
        }
    }
}

fn read_directive_file(format: FileFormat, path: &Path) -> AppResult<Value> {
    let content = fs::read_to_string(path)?;
    match format {
        FileFormat::Json => serde_json::from_str(&content)
            .map_err(|e| AppError::Parse(format!("Failed to parse JSON {:?}: {}", path, e))),
        FileFormat::Yaml => serde_yaml::from_str(&content)
            .map_err(|e| AppError::Parse(format!("Failed to parse YAML {:?}: {}", path, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::options::MergeSpecKind;
    use crate::document::routes::{HttpMethod, ResponseDefinition};
    use crate::schema::SchemaNode;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn generator() -> SwaggerGenerator {
        SwaggerGenerator::new(GeneratorOptions::default()).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_directive() {
        let opts = GeneratorOptions::default().with_merge_spec(MergeSpecConfig {
            kind: MergeSpecKind::Json,
            path: None,
            content: None,
        });
        match SwaggerGenerator::new(opts) {
            Err(AppError::Config(msg)) => assert_eq!(msg, "Missing 'path' for json merge spec"),
            other => panic!("expected config error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_empty_document_shape() {
        let spec = generator().generate_spec();
        assert_eq!(spec["openapi"], "3.0.0");
        assert_eq!(
            spec["info"],
            json!({"title": "API", "version": "1.0.0", "description": "Api Docs"})
        );
        assert!(spec.get("servers").is_none());
        assert!(spec.get("tags").is_none());
        assert_eq!(spec["paths"], json!({}));
        assert_eq!(
            spec["components"]["schemas"],
            Value::Object(builtin_schemas())
        );
    }

    #[test]
    fn test_options_flow_into_document() {
        let opts = GeneratorOptions::new("Shop", "2.1.0")
            .with_base_url("https://shop.example.com")
            .with_external_docs("https://docs.example.com", None)
            .with_component("schemas", "Money", json!({"type": "number"}))
            .with_component("securitySchemes", "bearer", json!({"type": "http", "scheme": "bearer"}));
        let spec = SwaggerGenerator::new(opts).unwrap().generate_spec();

        assert_eq!(spec["servers"], json!([{"url": "https://shop.example.com"}]));
        assert_eq!(spec["externalDocs"], json!({"url": "https://docs.example.com"}));
        assert_eq!(spec["components"]["schemas"]["Money"], json!({"type": "number"}));
        assert!(spec["components"]["schemas"].get("ErrorResponse").is_some());
        assert_eq!(
            spec["components"]["securitySchemes"]["bearer"]["scheme"],
            "bearer"
        );
    }

    #[test]
    fn test_user_schema_overrides_builtin_of_same_name() {
        let opts = GeneratorOptions::default()
            .with_component("schemas", "ErrorResponse", json!({"type": "string"}));
        let spec = SwaggerGenerator::new(opts).unwrap().generate_spec();
        assert_eq!(spec["components"]["schemas"]["ErrorResponse"], json!({"type": "string"}));
    }

    #[test]
    fn test_last_registration_wins_per_path_and_method() {
        let mut swagger = generator();
        swagger.add_route(RouteDefinition::new(HttpMethod::Get, "/a").with_summary("first"))
            .add_route(RouteDefinition::new(HttpMethod::Get, "/a").with_summary("second"))
            .add_route(RouteDefinition::new(HttpMethod::Post, "/a"));
        let spec = swagger.generate_spec();
        assert_eq!(spec["paths"]["/a"]["get"]["summary"], "second");
        assert!(spec["paths"]["/a"].get("post").is_some());
        assert_eq!(swagger.routes().len(), 3);
    }

    #[test]
    fn test_generation_is_repeatable() {
        let mut swagger = generator();
        let schema = Arc::new(SchemaNode::object([("id", SchemaNode::string())]).describe("Item"));
        swagger.add_route(
            RouteDefinition::new(HttpMethod::Post, "/items")
                .with_schema(Arc::clone(&schema))
                .with_response(201, ResponseDefinition::new("Created").with_schema(schema)),
        );
        assert_eq!(swagger.generate_spec(), swagger.generate_spec());
    }

    #[test]
    fn test_inline_mode_emits_no_refs() {
        let mut swagger =
            SwaggerGenerator::new(GeneratorOptions::default().with_inline_schemas(true)).unwrap();
        swagger.add_route(
            RouteDefinition::new(HttpMethod::Post, "/items")
                .with_schema(SchemaNode::object([("id", SchemaNode::string())]).describe("Item")),
        );
        let spec = swagger.generate_spec();
        assert!(spec["components"]["schemas"].get("Item").is_none());
        assert_eq!(
            spec["paths"]["/items"]["post"]["requestBody"]["content"]["application/json"]["schema"]
                ["type"],
            "object"
        );
    }

    #[test]
    fn test_file_directives_missing_and_broken_are_skipped() {
        let dir = tempdir().unwrap();
        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{").unwrap();
        let good = dir.path().join("good.yaml");
        fs::write(&good, "tags:\n  - name: Extra\n").unwrap();

        let opts = GeneratorOptions::default()
            .with_merge_spec(MergeSpecConfig::json(dir.path().join("absent.json")))
            .with_merge_spec(MergeSpecConfig::json(&broken))
            .with_merge_spec(MergeSpecConfig::yaml(&good));
        let spec = SwaggerGenerator::new(opts).unwrap().generate_spec();
        assert_eq!(spec["tags"], json!([{"name": "Extra"}]));
    }

    #[test]
    fn test_merge_external_docs() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("extra.yaml"),
            "paths:\n  /health:\n    get:\n      summary: Health\n",
        )
        .unwrap();

        let mut swagger = generator();
        swagger.merge_external_docs(dir.path())
            .merge_external_docs(&dir.path().join("missing"));
        let spec = swagger.generate_spec();
        assert_eq!(spec["paths"]["/health"]["get"]["summary"], "Health");
    }

    #[test]
    fn test_generate_swagger2() {
        let mut swagger = generator();
        swagger.add_route(RouteDefinition::new(HttpMethod::Get, "/ping"));
        let doc = swagger.generate_swagger2();
        assert_eq!(doc["swagger"], "2.0");
        assert_eq!(doc["host"], "localhost");
        assert!(doc["paths"]["/ping"].get("get").is_some());
        assert!(doc["definitions"].get("UserResponse").is_some());
    }
}
