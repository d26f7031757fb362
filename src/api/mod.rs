// HTTP API routes (game CRUD, banners, documentation).

mod games;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::banners;
use crate::docs;
use crate::metrics;
use crate::store::{GameStore, StoreError};

// ── Shared application state ─────────────────────────────────────────

/// Shared handle to the game store.
///
/// The service runs one store per process: `gamecat_games_stored` is a
/// process-wide gauge, and it tracks whichever `AppState` last wrote to it.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<GameStore>>,
}

impl AppState {
    pub fn new(store: GameStore) -> Self {
        metrics::GAMES_STORED.set(store.len() as i64);
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Lock the store. Every operation runs to completion under this guard;
    /// never hold it across an `.await`.
    pub fn store(&self) -> MutexGuard<'_, GameStore> {
        // Store methods never leave partial writes behind, so poisoning is ignored.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ── Error helper ──────────────────────────────────────────────────────

fn json_error(status: StatusCode, msg: &str) -> impl IntoResponse {
    (status, Json(json!({ "error": msg })))
}

fn store_error(e: StoreError) -> Response {
    match &e {
        StoreError::Validation(msg) => {
            metrics::VALIDATION_FAILURES_TOTAL.inc();
            tracing::debug!("Rejected game: {msg}");
            json_error(StatusCode::BAD_REQUEST, msg).into_response()
        }
        StoreError::NotFound(id) => {
            tracing::debug!(id = *id, "Game not found");
            json_error(StatusCode::NOT_FOUND, &e.to_string()).into_response()
        }
    }
}

// ── Router ────────────────────────────────────────────────────────────

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Games
        .route("/games", get(games::list_games).post(games::create_game))
        .route(
            "/games/{id}",
            get(games::get_game)
                .put(games::update_game)
                .delete(games::delete_game),
        )
        // Banners
        .route("/banners", get(list_banners))
        // Documentation
        .route("/api-docs", get(get_api_docs))
        .route(docs::OPENAPI_PATH, get(get_openapi))
        .route("/llms.txt", get(get_llms_txt))
        // Metrics
        .route("/metrics", get(get_metrics))
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let games = state.store().len();
    Json(json!({ "status": "ok", "service": "gamecat-backend", "games": games }))
}

async fn list_banners() -> impl IntoResponse {
    (StatusCode::OK, Json(banners::banners()))
}

// ── Documentation handlers ────────────────────────────────────────────

async fn get_api_docs() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/html; charset=utf-8")],
        docs::SWAGGER_UI_HTML,
    )
        .into_response()
}

async fn get_openapi() -> impl IntoResponse {
    (StatusCode::OK, Json(docs::openapi()))
}

async fn get_llms_txt() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        crate::llms_txt::LLMS_TXT,
    )
        .into_response()
}

async fn get_metrics() -> impl IntoResponse {
    match metrics::gather_metrics() {
        Ok(body) => (
            StatusCode::OK,
            [("content-type", "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to encode metrics: {e}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}
