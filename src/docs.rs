// OpenAPI document and the interactive documentation page that renders it.

use serde_json::{json, Value};

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Swagger UI page pointing at [`OPENAPI_PATH`]. Assets come from the public CDN.
pub const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Game Catalog API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/api-docs/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/Error" } }
        }
    })
}

fn game_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/Game" } }
        }
    })
}

fn game_body(schema: &str) -> Value {
    json!({
        "required": true,
        "content": {
            "application/json": { "schema": { "$ref": format!("#/components/schemas/{schema}") } }
        }
    })
}

fn components() -> Value {
    json!({
        "schemas": {
            "Game": {
                "type": "object",
                "required": ["id", "title", "platform", "releaseYear", "imageUrl"],
                "properties": {
                    "id": { "type": "integer", "format": "int64" },
                    "title": { "type": "string" },
                    "platform": { "type": "string" },
                    "releaseYear": { "type": "integer", "nullable": true },
                    "imageUrl": { "type": "string", "nullable": true }
                }
            },
            "NewGame": {
                "type": "object",
                "required": ["title", "platform"],
                "properties": {
                    "title": { "type": "string", "minLength": 1 },
                    "platform": { "type": "string", "minLength": 1 },
                    "releaseYear": { "type": "integer", "nullable": true },
                    "imageUrl": { "type": "string", "nullable": true }
                }
            },
            "GamePatch": {
                "type": "object",
                "properties": {
                    "title": { "type": "string" },
                    "platform": { "type": "string" },
                    "releaseYear": { "type": "integer", "nullable": true },
                    "imageUrl": { "type": "string", "nullable": true }
                }
            },
            "Error": {
                "type": "object",
                "required": ["error"],
                "properties": { "error": { "type": "string" } }
            }
        }
    })
}

/// Build the OpenAPI 3 document describing every route.
pub fn openapi() -> Value {
    let id_param = json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "integer", "format": "int64", "minimum": 1 }
    });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Game Catalog API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "In-memory CRUD over game records plus promotional banners."
        },
        "paths": {
            "/games": {
                "get": {
                    "summary": "List all games",
                    "responses": {
                        "200": {
                            "description": "All games in insertion order",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/Game" }
                                    }
                                }
                            }
                        }
                    }
                },
                "post": {
                    "summary": "Create a game",
                    "requestBody": game_body("NewGame"),
                    "responses": {
                        "201": game_response("Created game"),
                        "400": error_response("Title or platform missing")
                    }
                }
            },
            "/games/{id}": {
                "parameters": [id_param],
                "get": {
                    "summary": "Get a game by id",
                    "responses": {
                        "200": game_response("The game"),
                        "404": error_response("Game not found")
                    }
                },
                "put": {
                    "summary": "Update a game; empty or zero fields are ignored",
                    "requestBody": game_body("GamePatch"),
                    "responses": {
                        "200": game_response("Updated game"),
                        "404": error_response("Game not found")
                    }
                },
                "delete": {
                    "summary": "Delete a game",
                    "responses": {
                        "200": game_response("Removed game"),
                        "404": error_response("Game not found")
                    }
                }
            },
            "/banners": {
                "get": {
                    "summary": "List banner image URLs",
                    "responses": {
                        "200": {
                            "description": "Banner URLs",
                            "content": {
                                "application/json": {
                                    "schema": { "type": "array", "items": { "type": "string" } }
                                }
                            }
                        }
                    }
                }
            }
        },
        "components": components()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_game_routes() {
        let doc = openapi();
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/games"));
        assert!(paths.contains_key("/games/{id}"));
        assert!(paths.contains_key("/banners"));
        for method in ["get", "put", "delete"] {
            assert!(doc["paths"]["/games/{id}"][method].is_object(), "{method}");
        }
    }

    #[test]
    fn test_swagger_page_loads_openapi_document() {
        assert!(SWAGGER_UI_HTML.contains(OPENAPI_PATH));
    }
}
