//! Merge behaviour over whole documents.

use pretty_assertions::assert_eq;
use schemadoc_core::deep_merge;
use schemadoc_core::document::{GeneratorOptions, MergeSpecConfig};
use schemadoc_core::SwaggerGenerator;
use serde_json::{json, Value};
use std::fs;
use tempfile::tempdir;

fn document() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {"title": "Pets", "version": "1.0.0"},
        "paths": {
            "/pets": {
                "get": {"summary": "List"},
                "parameters": [{"name": "limit", "in": "query"}]
            }
        },
        "tags": [{"name": "Pets", "description": "Pet operations"}],
        "security": [{"bearer": []}],
        "components": {
            "schemas": {"Pet": {"type": "object"}},
            "securitySchemes": {"bearer": {"type": "http", "scheme": "bearer"}}
        }
    })
}

#[test]
fn merging_empty_document_is_identity() {
    let doc = document();
    assert_eq!(deep_merge(&doc, &json!({})), doc);
}

#[test]
fn merging_a_document_with_itself_adds_nothing() {
    let doc = document();
    assert_eq!(deep_merge(&doc, &doc), doc);
}

#[test]
fn disjoint_paths_union_in_any_order() {
    let a = json!({"paths": {"/a": {"get": {}}}});
    let b = json!({"paths": {"/b": {"get": {}}}});
    let c = json!({"paths": {"/c": {"get": {}}}});

    let left = deep_merge(&deep_merge(&a, &b), &c);
    let right = deep_merge(&a, &deep_merge(&c, &b));
    let reversed = deep_merge(&deep_merge(&c, &a), &b);

    for merged in [&left, &right, &reversed] {
        let mut keys: Vec<_> = merged["paths"].as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["/a", "/b", "/c"]);
    }
}

#[test]
fn methods_on_the_same_path_are_combined() {
    let target = json!({"paths": {"/a": {"get": {"summary": "read"}}}});
    let source = json!({"paths": {"/a": {"post": {"summary": "write"}}}});
    let merged = deep_merge(&target, &source);
    assert_eq!(
        merged["paths"]["/a"],
        json!({"get": {"summary": "read"}, "post": {"summary": "write"}})
    );
}

#[test]
fn generator_applies_directives_in_order() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.json");
    fs::write(
        &first,
        r#"{"info": {"title": "From file"}, "paths": {"/health": {"get": {"summary": "one"}}}}"#,
    )
    .unwrap();

    let opts = GeneratorOptions::default()
        .with_merge_spec(MergeSpecConfig::json(&first))
        .with_merge_spec(MergeSpecConfig::preloaded(json!({
            "paths": {"/health": {"get": {"summary": "two"}}},
            "tags": [{"name": "Ops"}]
        })));

    let spec = SwaggerGenerator::new(opts).unwrap().generate_spec();
    assert_eq!(spec["info"]["title"], "From file");
    assert_eq!(spec["info"]["version"], "1.0.0");
    assert_eq!(spec["paths"]["/health"]["get"]["summary"], "two");
    assert_eq!(spec["tags"], json!([{"name": "Ops"}]));
    assert!(spec["components"]["schemas"].get("ErrorResponse").is_some());
}
