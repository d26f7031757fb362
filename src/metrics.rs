// Prometheus metrics definitions for the game catalog.

use std::sync::Once;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use lazy_static::lazy_static;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();

    /// Games currently held in the store.
    pub static ref GAMES_STORED: IntGauge =
        IntGauge::new("gamecat_games_stored", "Games currently in the store").unwrap();

    pub static ref GAMES_CREATED_TOTAL: IntCounter =
        IntCounter::new("gamecat_games_created_total", "Games created").unwrap();

    pub static ref GAMES_UPDATED_TOTAL: IntCounter =
        IntCounter::new("gamecat_games_updated_total", "Games updated").unwrap();

    pub static ref GAMES_DELETED_TOTAL: IntCounter =
        IntCounter::new("gamecat_games_deleted_total", "Games deleted").unwrap();

    /// Create requests rejected for missing title or platform.
    pub static ref VALIDATION_FAILURES_TOTAL: IntCounter = IntCounter::new(
        "gamecat_validation_failures_total",
        "Create requests rejected by validation",
    )
    .unwrap();

    /// Total API requests, by method/endpoint/status.
    pub static ref API_REQUESTS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("gamecat_api_requests_total", "Total API requests"),
        &["method", "endpoint", "status"],
    )
    .unwrap();

    /// API request duration in seconds, by endpoint.
    pub static ref API_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "gamecat_api_request_duration_seconds",
            "API request duration in seconds",
        )
        .buckets(vec![0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.5, 1.0]),
        &["endpoint"],
    )
    .unwrap();
}

static REGISTER: Once = Once::new();

/// Register all metrics with the custom registry. Safe to call more than once.
pub fn register_metrics() {
    REGISTER.call_once(|| {
        let collectors: Vec<Box<dyn prometheus::core::Collector>> = vec![
            Box::new(GAMES_STORED.clone()),
            Box::new(GAMES_CREATED_TOTAL.clone()),
            Box::new(GAMES_UPDATED_TOTAL.clone()),
            Box::new(GAMES_DELETED_TOTAL.clone()),
            Box::new(VALIDATION_FAILURES_TOTAL.clone()),
            Box::new(API_REQUESTS_TOTAL.clone()),
            Box::new(API_REQUEST_DURATION_SECONDS.clone()),
        ];

        for c in collectors {
            if let Err(e) = REGISTRY.register(c) {
                tracing::warn!("Failed to register metric: {e}");
            }
        }
    });
}

/// Serialize all registered metrics to the Prometheus text exposition format.
pub fn gather_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Label used for requests that matched no route.
pub const UNMATCHED_ENDPOINT: &str = "unmatched";

/// Endpoint label for a request: the matched route template (`/games/{id}`),
/// `/images/*` for static files, or [`UNMATCHED_ENDPOINT`]. Raw paths are never
/// used, so the label set stays bounded whatever clients request.
pub fn endpoint_label(path: &str, matched: Option<&str>) -> String {
    if path.starts_with("/images/") {
        return "/images/*".to_string();
    }
    matched.unwrap_or(UNMATCHED_ENDPOINT).to_string()
}

/// Middleware recording request count and latency.
pub async fn track_requests(req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let endpoint = endpoint_label(
        req.uri().path(),
        req.extensions().get::<MatchedPath>().map(MatchedPath::as_str),
    );
    let start = Instant::now();

    let response = next.run(req).await;

    API_REQUEST_DURATION_SECONDS
        .with_label_values(&[endpoint.as_str()])
        .observe(start.elapsed().as_secs_f64());
    API_REQUESTS_TOTAL
        .with_label_values(&[method.as_str(), endpoint.as_str(), response.status().as_str()])
        .inc();
    response
}
