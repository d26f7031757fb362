use tracing_subscriber::EnvFilter;

use gamecat_backend::api::AppState;
use gamecat_backend::config::Config;
use gamecat_backend::store::GameStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load();
    let state = AppState::new(GameStore::new());

    if !config.images_dir.is_dir() {
        tracing::warn!(
            "Images directory {} does not exist; /images will return 404",
            config.images_dir.display()
        );
    }

    let app = gamecat_backend::build_app(state, &config.images_dir);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to {addr}: {e}"));

    tracing::info!("Game catalog listening on {addr}");
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
