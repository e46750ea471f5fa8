use anyhow::Result;
use colored::Colorize;
use log_console::config;
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration (defaults, file and environment merged)
pub fn show(config_path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!("Loading configuration for display");

    let cfg = config::load_config(config_path)?;

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(&cfg)?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file");

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Listen: {}:{}", cfg.server.host, cfg.server.port);
    println!(
        "  Log Store: {} ({})",
        cfg.store.path.display(),
        cfg.store.format
    );

    info!("Configuration validation successful");
    Ok(())
}
