//! End-to-end document generation through the public API.

use pretty_assertions::assert_eq;
use schemadoc_core::document::{HttpMethod, ResponseDefinition, RouteDefinition};
use schemadoc_core::schema::common;
use schemadoc_core::{GeneratorOptions, SchemaNode, SwaggerGenerator};
use serde_json::json;
use std::sync::Arc;

fn user_schema() -> Arc<SchemaNode> {
    Arc::new(
        SchemaNode::object([
            ("name", SchemaNode::string()),
            ("age", SchemaNode::number().optional()),
        ])
        .describe("User"),
    )
}

fn users_generator() -> SwaggerGenerator {
    let mut generator = SwaggerGenerator::new(GeneratorOptions::default()).unwrap();
    generator.add_route(
        RouteDefinition::new(HttpMethod::Get, "/users")
            .with_schema(user_schema())
            .with_response(200, ResponseDefinition::new("List of users")),
    );
    generator
}

#[test]
fn get_route_registers_component_and_query_parameters() {
    let spec = users_generator().generate_spec();

    assert_eq!(
        spec["components"]["schemas"]["User"],
        json!({
            "type": "object",
            "properties": {"name": {"type": "string"}, "age": {"type": "number"}},
            "required": ["name"],
            "description": "User"
        })
    );

    let params = spec["paths"]["/users"]["get"]["parameters"].as_array().unwrap();
    assert_eq!(params.len(), 2);
    assert_eq!(params[0]["name"], "name");
    assert_eq!(params[0]["in"], "query");
    assert_eq!(params[0]["required"], true);
    assert_eq!(params[1]["name"], "age");
    assert_eq!(params[1]["required"], false);
}

#[test]
fn swagger2_keeps_definitions_and_drops_request_body() {
    let generator = users_generator();
    let openapi = generator.generate_spec();
    let swagger = generator.generate_swagger2();

    assert_eq!(
        swagger["definitions"]["User"],
        openapi["components"]["schemas"]["User"]
    );
    assert!(swagger["paths"]["/users"]["get"].get("requestBody").is_none());
    assert_eq!(
        swagger["paths"]["/users"]["get"]["responses"]["200"],
        json!({"description": "List of users"})
    );
}

#[test]
fn post_route_references_named_schemas() {
    let created = Arc::new(
        SchemaNode::object([
            ("id", common::uuid(None, None)),
            ("email", common::email(None, None)),
        ])
        .describe("created user"),
    );

    let mut generator = SwaggerGenerator::new(
        GeneratorOptions::new("Users", "0.2.0").with_base_url("http://localhost:3000"),
    )
    .unwrap();
    generator.add_route(
        RouteDefinition::new(HttpMethod::Post, "/orgs/{orgId}/users")
            .with_schema(user_schema())
            .with_schema_name("CreateUserRequest")
            .with_response(201, ResponseDefinition::new("Created").with_schema(Arc::clone(&created)))
            .with_response(400, ResponseDefinition::new("Bad request")),
    );

    let spec = generator.generate_spec();
    let op = &spec["paths"]["/orgs/{orgId}/users"]["post"];

    assert_eq!(
        op["parameters"],
        json!([{"name": "orgId", "in": "path", "required": true, "schema": {"type": "string"}}])
    );
    assert_eq!(
        op["requestBody"],
        json!({
            "required": true,
            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/CreateUserRequest"}}}
        })
    );
    assert_eq!(
        op["responses"]["201"]["content"]["application/json"]["schema"],
        json!({"$ref": "#/components/schemas/CreatedUser"})
    );
    assert_eq!(op["responses"]["400"], json!({"description": "Bad request"}));

    let schemas = &spec["components"]["schemas"];
    assert!(schemas.get("CreateUserRequest").is_some());
    assert!(schemas.get("User").is_none());
    assert_eq!(
        schemas["CreatedUser"]["properties"]["id"],
        json!({
            "type": "string",
            "description": "Unique identifier",
            "example": "550e8400-e29b-41d4-a716-446655440000",
            "format": "uuid"
        })
    );
    assert_eq!(schemas["CreatedUser"]["properties"]["email"]["format"], "email");

    let swagger = generator.generate_swagger2();
    assert_eq!(swagger["host"], "localhost:3000");
    let body = &swagger["paths"]["/orgs/{orgId}/users"]["post"]["parameters"][1];
    assert_eq!(
        body,
        &json!({"in": "body", "name": "body", "schema": {"$ref": "#/components/schemas/CreateUserRequest"}})
    );
}
