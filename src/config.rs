use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use crate::store::StoreFormat;

/// Environment variable prefix, e.g. `LOG_CONSOLE__STORE__PATH=/var/log/app.json`
pub const ENV_PREFIX: &str = "LOG_CONSOLE";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: String,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub format: StoreFormat,
}

/// Load configuration from defaults, the optional file at `path`, and the environment.
///
/// Later sources win. A missing file is not an error.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080_i64)?
        .set_default("server.log_level", "info")?
        .set_default("server.log_format", "text")?
        .set_default("server.request_timeout_seconds", 30_i64)?
        .set_default("store.path", "logs.json")?
        .set_default("store.format", "json")?
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.host.is_empty() {
        anyhow::bail!("Server host cannot be empty");
    }

    if cfg.server.host.parse::<IpAddr>().is_err() {
        anyhow::bail!("Server host '{}' is not a valid IP address", cfg.server.host);
    }

    if cfg.server.port == 0 {
        anyhow::bail!("Server port must be non-zero");
    }

    match cfg.server.log_format.as_str() {
        "text" | "json" => {}
        other => anyhow::bail!("Invalid log format '{}', expected 'text' or 'json'", other),
    }

    if cfg.server.request_timeout_seconds == 0 {
        anyhow::bail!("Request timeout must be at least one second");
    }

    if cfg.store.path.as_os_str().is_empty() {
        anyhow::bail!("Log store path cannot be empty");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(&dir.path().join("config.toml")).unwrap();

        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.log_format, "text");
        assert_eq!(cfg.server.request_timeout_seconds, 30);
        assert_eq!(cfg.store.format, StoreFormat::Json);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
host = "127.0.0.1"
port = 9090
log_format = "json"

[store]
path = "/var/log/app/records.jsonl"
format = "jsonl"
"#
        )
        .unwrap();

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.server.log_format, "json");
        assert_eq!(cfg.server.log_level, "info");
        assert_eq!(cfg.store.path, PathBuf::from("/var/log/app/records.jsonl"));
        assert_eq!(cfg.store.format, StoreFormat::JsonLines);
    }

    #[test]
    fn test_invalid_store_format_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[store]\nformat = \"xml\"").unwrap();

        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_log_format() {
        let mut cfg = create_test_config();
        cfg.server.log_format = "yaml".to_string();

        let result = validate_config(&cfg);
        assert!(result.unwrap_err().to_string().contains("Invalid log format"));
    }

    #[test]
    fn test_validate_rejects_bad_host() {
        let mut cfg = create_test_config();
        cfg.server.host = "not-an-ip".to_string();
        assert!(validate_config(&cfg).is_err());

        cfg.server.host = String::new();
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_port_and_timeout() {
        let mut cfg = create_test_config();
        cfg.server.port = 0;
        assert!(validate_config(&cfg).is_err());

        let mut cfg = create_test_config();
        cfg.server.request_timeout_seconds = 0;
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_store_path() {
        let mut cfg = create_test_config();
        cfg.store.path = PathBuf::new();

        let result = validate_config(&cfg);
        assert!(result.unwrap_err().to_string().contains("Log store path"));
    }

    #[test]
    fn test_validate_accepts_test_config() {
        assert!(validate_config(&create_test_config()).is_ok());
    }

    fn create_test_config() -> Config {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                log_level: "info".to_string(),
                log_format: "text".to_string(),
                request_timeout_seconds: 30,
            },
            store: StoreConfig {
                path: PathBuf::from("logs.json"),
                format: StoreFormat::Json,
            },
        }
    }
}
