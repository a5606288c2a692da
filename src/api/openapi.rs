//! OpenAPI Description
//!
//! Machine-readable description of the cache API, served at `/openapi.json`.

use axum::Json;
use serde_json::{json, Value};

use crate::store::{DEFAULT_LIST_LIMIT, MAX_KEY_LENGTH, MAX_LIST_LIMIT};

/// Handler for GET /openapi.json
pub async fn openapi_handler() -> Json<Value> {
    Json(document())
}

/// Builds the OpenAPI 3.0 document for the cache endpoints.
pub fn document() -> Value {
    let key_param = json!({
        "name": "key",
        "in": "path",
        "required": true,
        "description": "Cache key",
        "schema": { "type": "string", "minLength": 1, "maxLength": MAX_KEY_LENGTH },
        "example": "user-profile-123"
    });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "KV Cache API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION")
        },
        "security": [{ "bearerAuth": [] }],
        "paths": {
            "/api/cache": {
                "get": {
                    "tags": ["Cache"],
                    "summary": "List keys from cache with optional prefix",
                    "parameters": [
                        {
                            "name": "prefix",
                            "in": "query",
                            "required": false,
                            "description": "Optional prefix to filter keys",
                            "schema": { "type": "string" },
                            "example": "user-"
                        },
                        {
                            "name": "limit",
                            "in": "query",
                            "required": false,
                            "description": "Maximum number of keys to return",
                            "schema": {
                                "type": "integer",
                                "minimum": 1,
                                "maximum": MAX_LIST_LIMIT,
                                "default": DEFAULT_LIST_LIMIT
                            }
                        },
                        {
                            "name": "cursor",
                            "in": "query",
                            "required": false,
                            "description": "Cursor for pagination",
                            "schema": { "type": "string" }
                        }
                    ],
                    "responses": {
                        "200": json_response("Returns a list of keys", "#/components/schemas/ListResponse"),
                        "400": error_response("Invalid query parameters"),
                        "401": error_response("Missing or invalid bearer token"),
                        "500": error_response("Store failure")
                    }
                }
            },
            "/api/cache/{key}": {
                "get": {
                    "tags": ["Cache"],
                    "summary": "Get a value from cache by key",
                    "parameters": [key_param.clone()],
                    "responses": {
                        "200": json_response("Returns the cached value", "#/components/schemas/ValueResponse"),
                        "401": error_response("Missing or invalid bearer token"),
                        "404": error_response("Key not found in cache"),
                        "500": error_response("Store failure")
                    }
                },
                "put": {
                    "tags": ["Cache"],
                    "summary": "Store a value in cache with a key",
                    "parameters": [key_param.clone()],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/PutRequest" }
                            }
                        }
                    },
                    "responses": {
                        "200": json_response("Value successfully stored in cache", "#/components/schemas/KeyResponse"),
                        "400": error_response("Invalid request"),
                        "401": error_response("Missing or invalid bearer token"),
                        "500": error_response("Store failure")
                    }
                },
                "delete": {
                    "tags": ["Cache"],
                    "summary": "Delete a value from cache by key",
                    "parameters": [key_param],
                    "responses": {
                        "200": json_response("Value successfully deleted from cache", "#/components/schemas/KeyResponse"),
                        "401": error_response("Missing or invalid bearer token"),
                        "404": error_response("Key not found in cache"),
                        "500": error_response("Store failure")
                    }
                }
            }
        },
        "components": {
            "securitySchemes": {
                "bearerAuth": { "type": "http", "scheme": "bearer" }
            },
            "schemas": {
                "PutRequest": {
                    "type": "object",
                    "required": ["value"],
                    "properties": {
                        "value": { "description": "Any JSON value" },
                        "expirationTtl": { "type": "integer", "minimum": 1 }
                    }
                },
                "ValueResponse": {
                    "type": "object",
                    "required": ["success", "result"],
                    "properties": {
                        "success": { "type": "boolean" },
                        "result": {}
                    }
                },
                "KeyResponse": {
                    "type": "object",
                    "required": ["success", "key"],
                    "properties": {
                        "success": { "type": "boolean" },
                        "key": { "type": "string" }
                    }
                },
                "ListResponse": {
                    "type": "object",
                    "required": ["success", "result"],
                    "properties": {
                        "success": { "type": "boolean" },
                        "result": {
                            "type": "object",
                            "required": ["keys", "list_complete"],
                            "properties": {
                                "keys": {
                                    "type": "array",
                                    "items": {
                                        "type": "object",
                                        "required": ["name"],
                                        "properties": {
                                            "name": { "type": "string" },
                                            "expiration": { "type": "integer" }
                                        }
                                    }
                                },
                                "list_complete": { "type": "boolean" },
                                "cursor": { "type": "string" }
                            }
                        }
                    }
                },
                "ErrorResponse": {
                    "type": "object",
                    "required": ["success", "error"],
                    "properties": {
                        "success": { "type": "boolean" },
                        "error": { "type": "string" }
                    }
                }
            }
        }
    })
}

fn json_response(description: &str, schema_ref: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": { "schema": { "$ref": schema_ref } }
        }
    })
}

fn error_response(description: &str) -> Value {
    json_response(description, "#/components/schemas/ErrorResponse")
}
