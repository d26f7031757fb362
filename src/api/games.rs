// Game CRUD handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Json, Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{json_error, store_error, AppState};
use crate::metrics;
use crate::store::{GamePatch, NewGame};

/// Unwrap a path id, reporting a non-integer id as 400 with the usual error body.
fn game_id(path: Result<Path<u64>, PathRejection>) -> Result<u64, Response> {
    path.map(|Path(id)| id).map_err(|rejection| {
        json_error(StatusCode::BAD_REQUEST, &rejection.body_text()).into_response()
    })
}

/// Unwrap a JSON body, reporting malformed input as 400 with the usual error body.
fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    body.map(|Json(value)| value).map_err(|rejection| {
        json_error(StatusCode::BAD_REQUEST, &rejection.body_text()).into_response()
    })
}

pub(super) async fn list_games(State(state): State<AppState>) -> impl IntoResponse {
    let games = state.store().list().to_vec();
    (StatusCode::OK, Json(games))
}

pub(super) async fn create_game(
    State(state): State<AppState>,
    body: Result<Json<NewGame>, JsonRejection>,
) -> Response {
    let req = match json_body(body) {
        Ok(req) => req,
        Err(resp) => return resp,
    };

    let result = {
        let mut store = state.store();
        let result = store.create(req);
        metrics::GAMES_STORED.set(store.len() as i64);
        result
    };

    match result {
        Ok(game) => {
            metrics::GAMES_CREATED_TOTAL.inc();
            tracing::info!(id = game.id, title = %game.title, "Game created");
            (StatusCode::CREATED, Json(game)).into_response()
        }
        Err(e) => store_error(e),
    }
}

pub(super) async fn get_game(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Response {
    let id = match game_id(path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let result = state.store().get(id).cloned();
    match result {
        Ok(game) => (StatusCode::OK, Json(game)).into_response(),
        Err(e) => store_error(e),
    }
}

pub(super) async fn update_game(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    body: Result<Json<GamePatch>, JsonRejection>,
) -> Response {
    let id = match game_id(path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let patch = match json_body(body) {
        Ok(patch) => patch,
        Err(resp) => return resp,
    };

    let result = state.store().update(id, patch).cloned();
    match result {
        Ok(game) => {
            metrics::GAMES_UPDATED_TOTAL.inc();
            tracing::info!(id, "Game updated");
            (StatusCode::OK, Json(game)).into_response()
        }
        Err(e) => store_error(e),
    }
}

pub(super) async fn delete_game(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Response {
    let id = match game_id(path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let result = {
        let mut store = state.store();
        let result = store.delete(id);
        metrics::GAMES_STORED.set(store.len() as i64);
        result
    };

    match result {
        Ok(game) => {
            metrics::GAMES_DELETED_TOTAL.inc();
            tracing::info!(id, "Game deleted");
            (StatusCode::OK, Json(game)).into_response()
        }
        Err(e) => store_error(e),
    }
}
