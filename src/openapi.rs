//! OpenAPI fragments shared by the record modules.

use serde_json::{json, Value};

fn json_body(schema: &str) -> Value {
    json!({
        "application/json": {
            "schema": { "$ref": format!("#/components/schemas/{schema}") }
        }
    })
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": json_body("ErrorResponse")
    })
}

/// Paths for the five record operations, relative to the module mount point.
///
/// `entity`, `create`, and `update` name schemas the calling module defines.
pub fn crud_paths(tag: &str, entity: &str, create: &str, update: &str) -> Value {
    let id_parameter = json!({
        "name": "id",
        "in": "path",
        "required": true,
        "description": "24 character hexadecimal record identifier",
        "schema": { "type": "string" }
    });
    let lowercase = entity.to_lowercase();

    json!({
        "": {
            "get": {
                "summary": format!("List {lowercase} records"),
                "tags": [tag],
                "responses": {
                    "200": {
                        "description": format!("Every {lowercase} record"),
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "array",
                                    "items": { "$ref": format!("#/components/schemas/{entity}") }
                                }
                            }
                        }
                    }
                }
            },
            "post": {
                "summary": format!("Create a {lowercase}"),
                "tags": [tag],
                "requestBody": { "required": true, "content": json_body(create) },
                "responses": {
                    "200": { "description": format!("Created {lowercase}"), "content": json_body(entity) },
                    "422": error_response("Body failed validation")
                }
            }
        },
        "/{id}": {
            "get": {
                "summary": format!("Get a {lowercase}"),
                "tags": [tag],
                "parameters": [id_parameter.clone()],
                "responses": {
                    "200": { "description": format!("The {lowercase}"), "content": json_body(entity) },
                    "400": error_response("Malformed identifier"),
                    "404": error_response("No such record")
                }
            },
            "put": {
                "summary": format!("Update fields of a {lowercase}"),
                "tags": [tag],
                "parameters": [id_parameter.clone()],
                "requestBody": { "required": true, "content": json_body(update) },
                "responses": {
                    "200": { "description": format!("Updated {lowercase}"), "content": json_body(entity) },
                    "400": error_response("Malformed identifier or nothing to update"),
                    "404": error_response("No such record"),
                    "422": error_response("Body failed validation")
                }
            },
            "delete": {
                "summary": format!("Delete a {lowercase}"),
                "tags": [tag],
                "parameters": [id_parameter],
                "responses": {
                    "200": {
                        "description": "Deletion confirmation",
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "object",
                                    "properties": { "message": { "type": "string" } },
                                    "required": ["message"]
                                }
                            }
                        }
                    },
                    "400": error_response("Malformed identifier"),
                    "404": error_response("No such record")
                }
            }
        }
    })
}
