pub mod api;
pub mod banners;
pub mod config;
pub mod docs;
pub mod llms_txt;
pub mod metrics;
pub mod store;

use std::path::Path;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use api::AppState;

/// Build the full application: API routes, static images under `/images`,
/// request metrics and permissive CORS.
pub fn build_app(state: AppState, images_dir: &Path) -> Router {
    metrics::register_metrics();

    api::router(state)
        .nest_service("/images", ServeDir::new(images_dir))
        .layer(axum::middleware::from_fn(metrics::track_requests))
        .layer(CorsLayer::permissive())
}
