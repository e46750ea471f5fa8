use tracing::{error, info};

#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

/// Wait for a shutdown request
///
/// Handles:
/// - SIGTERM/SIGINT on unix
/// - Ctrl+C elsewhere
#[cfg(unix)]
pub async fn shutdown_signal() {
    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to setup SIGTERM handler: {}", e);
            wait_for_ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = sigterm.recv() => {
            info!("SIGTERM received, initiating graceful shutdown");
        }
        _ = wait_for_ctrl_c() => {}
    }
}

#[cfg(not(unix))]
pub async fn shutdown_signal() {
    wait_for_ctrl_c().await;
}

async fn wait_for_ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("SIGINT received, initiating graceful shutdown"),
        Err(e) => {
            // Without a working handler the server can only be stopped by SIGTERM/kill
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
