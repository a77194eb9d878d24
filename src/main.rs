use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use mcq_backend::{config::Config, middleware::cors::permissive_cors, routes, AppState};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let addr: SocketAddr = config.server_address.parse()?;
    let app_state = AppState::new(config);

    let generate_api = Router::new()
        .route("/topic", post(routes::generate::generate_from_topic))
        .route("/pdf", post(routes::generate::generate_from_pdf));

    let app = Router::new()
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health))
        .route("/ready", get(routes::health::ready))
        .route("/live", get(routes::health::live))
        .nest("/api/v1/generate", generate_api)
        .with_state(app_state)
        .layer(permissive_cors())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(180)))
        .layer(DefaultBodyLimit::max(50 * 1024 * 1024));

    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
