pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod server;
pub mod signals;
pub mod store;
pub mod viewer;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging with the default level and text output
///
/// Note: This function can only be called once per process.
pub fn init_tracing() {
    init_tracing_with("info", "text");
}

/// Initialize tracing/logging from server settings
///
/// `RUST_LOG` takes precedence over `default_level`. `format` is either
/// `"text"` or `"json"`; anything else falls back to text.
pub fn init_tracing_with(default_level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(filter);

    if format == "json" {
        registry
            .with(fmt::layer().json().with_target(true))
            .init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}
