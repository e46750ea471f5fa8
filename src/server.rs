use anyhow::Result;
use axum::{http::StatusCode, routing::get, Router};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    config::Config,
    handlers::{self, AppState},
    signals::shutdown_signal,
    store::{FileLogStore, LogStore},
    viewer::ViewerUseCase,
};

/// Start the log console server
///
/// This function:
/// 1. Wires the file store, viewer and handler together
/// 2. Binds to the configured address
/// 3. Serves requests until SIGINT/SIGTERM, then drains connections
pub async fn start_server(config: Config) -> Result<()> {
    let app = build_app(&config);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting log console on {}", addr);
    info!(
        "Serving {} ({} format), request timeout {}s",
        config.store.path.display(),
        config.store.format,
        config.server.request_timeout_seconds
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    info!("Server stopped gracefully");

    Ok(())
}

/// Compose store -> viewer -> router from configuration
pub fn build_app(config: &Config) -> Router {
    let store: Arc<dyn LogStore> = Arc::new(FileLogStore::new(
        config.store.path.clone(),
        config.store.format,
    ));

    let state = AppState {
        viewer: ViewerUseCase::new(store),
    };

    create_router(
        state,
        Duration::from_secs(config.server.request_timeout_seconds),
    )
}

/// Create the Axum router with all routes and middleware
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/logs/:level", get(handlers::logs::get_logs_by_level))
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}
