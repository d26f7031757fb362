// LLM-friendly documentation endpoint content.

pub const LLMS_TXT: &str = r#"# Game Catalog API
> A small in-memory catalog of video games plus a list of promotional banners.

## Storage
Records live in memory only and are lost when the server restarts.
Ids start at 1 and are never reused.

## Key Endpoints
- GET /games - List all games in insertion order
- POST /games - Create a game (title and platform required)
- GET /games/{id} - Get a game
- PUT /games/{id} - Update a game (only non-empty fields are applied)
- DELETE /games/{id} - Delete a game, returns the removed record
- GET /banners - List banner image URLs
- GET /images/{path} - Static images
- GET /api-docs - Interactive API documentation
- GET /api-docs/openapi.json - OpenAPI 3 document
- GET /health - Service health
- GET /metrics - Prometheus metrics

## Game Fields
- id (integer, assigned by the server)
- title (string, required)
- platform (string, required)
- releaseYear (integer or null)
- imageUrl (string or null)

## Errors
Failures return `{ "error": "<message>" }` with status 400 (bad input) or 404 (unknown id).
"#;
