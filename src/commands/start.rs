use anyhow::Result;
use colored::Colorize;
use log_console::{config, init_tracing_with, server};
use std::path::Path;
use tracing::{info, warn};

/// Execute the start command
///
/// This will:
/// 1. Load configuration
/// 2. Initialize tracing from it
/// 3. Start the server (blocks until shutdown)
pub async fn execute(config_path: &Path) -> Result<()> {
    println!("{}", "Starting log console...".green());

    let cfg = config::load_config(config_path)?;
    init_tracing_with(&cfg.server.log_level, &cfg.server.log_format);

    info!(config = %config_path.display(), "Configuration loaded");

    // The store is read per request, so a missing file is not fatal at startup
    if !cfg.store.path.exists() {
        warn!(
            path = %cfg.store.path.display(),
            "Log store does not exist yet; requests will fail until it is created"
        );
    }

    server::start_server(cfg).await?;

    Ok(())
}
