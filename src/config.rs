// src/config.rs
use crate::errors::ServerError;
use dotenv::dotenv;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MAX_WORKERS: usize = 8;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the prediction backend, without the `/predict` suffix.
    pub prediction_api_url: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub prediction_timeout: Duration,
    /// Directory holding `regions.json`, `localities.json` and `types.json`.
    /// When unset the bundled lists are used.
    pub reference_data_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ServerError> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let prediction_api_url = lookup("PREDICTION_API_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                ServerError::Config("Missing PREDICTION_API_URL environment variable".into())
            })?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ServerError::Config(format!("Invalid BIND_ADDR: {e}")))?;

        let max_workers = parse_var(&lookup, "MAX_WORKERS", DEFAULT_MAX_WORKERS)?;
        let timeout_secs = parse_var(&lookup, "PREDICTION_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        Ok(Config {
            prediction_api_url,
            bind_addr,
            max_workers,
            prediction_timeout: Duration::from_secs(timeout_secs),
            reference_data_dir: lookup("REFERENCE_DATA_DIR").map(PathBuf::from),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Initialize logging based on configuration.
    /// `RUST_LOG` directives are applied on top of `LOG_LEVEL`.
    pub fn init_logging(&self) {
        let level = parse_level(&self.log_level);

        env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .init();
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, ServerError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| ServerError::Config(format!("Invalid {name}: {e}"))),
        None => Ok(default),
    }
}

fn parse_level(level: &str) -> log::LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        "off" => log::LevelFilter::Off,
        _ => log::LevelFilter::Info,
    }
}
