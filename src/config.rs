//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CATALOG_PATH` - Catalog seed file (default: `books.json`)
//! - `RATE_LIMIT_ENABLED` - Rate limit rent and return (default: `true`)
//! - `RATE_LIMIT_PERIOD_SECONDS` - Seconds to replenish one request (default: 2)
//! - `RATE_LIMIT_BURST` - Requests allowed in a burst (default: 100)
//! - `BEHIND_PROXY` - Take the client IP from forwarding headers (default: `false`)
//!
//! A `.env` file in the working directory is honoured (loaded by `main.rs`).

use anyhow::Result;
use std::env;
use std::path::PathBuf;

use crate::api::middleware::rate_limit::RateLimitSettings;
use crate::routes::RouterOptions;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub catalog_path: PathBuf,
    pub rate_limit_enabled: bool,
    pub rate_limit_period_seconds: u64,
    pub rate_limit_burst: u32,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Config {
    /// Loads configuration from environment variables, applying defaults.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let catalog_path = env::var("CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("books.json"));

        let rate_limit_enabled = env_flag("RATE_LIMIT_ENABLED").unwrap_or(true);

        let rate_limit_period_seconds = env::var("RATE_LIMIT_PERIOD_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2);

        let rate_limit_burst = env::var("RATE_LIMIT_BURST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        let behind_proxy = env_flag("BEHIND_PROXY").unwrap_or(false);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            catalog_path,
            rate_limit_enabled,
            rate_limit_period_seconds,
            rate_limit_burst,
            behind_proxy,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `catalog_path` is empty
    /// - rate limit period is outside 1..=3600 or burst outside 1..=10000
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.catalog_path.as_os_str().is_empty() {
            anyhow::bail!("CATALOG_PATH must not be empty");
        }

        if !(1..=3600).contains(&self.rate_limit_period_seconds) {
            anyhow::bail!(
                "RATE_LIMIT_PERIOD_SECONDS must be between 1 and 3600, got {}",
                self.rate_limit_period_seconds
            );
        }

        if !(1..=10_000).contains(&self.rate_limit_burst) {
            anyhow::bail!(
                "RATE_LIMIT_BURST must be between 1 and 10000, got {}",
                self.rate_limit_burst
            );
        }

        Ok(())
    }

    /// Router options derived from this configuration.
    pub fn router_options(&self) -> RouterOptions {
        let rate_limit = self.rate_limit_enabled.then_some(RateLimitSettings {
            period_seconds: self.rate_limit_period_seconds,
            burst_size: self.rate_limit_burst,
            behind_proxy: self.behind_proxy,
        });

        RouterOptions { rate_limit }
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Catalog: {}", self.catalog_path.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        if self.rate_limit_enabled {
            tracing::info!(
                "  Rate limit: 1 request / {}s, burst {}{}",
                self.rate_limit_period_seconds,
                self.rate_limit_burst,
                if self.behind_proxy { " (behind proxy)" } else { "" }
            );
        } else {
            tracing::info!("  Rate limit: disabled");
        }
    }
}

/// Parses a boolean environment variable (`true`/`1`/`false`/`0`).
///
/// Returns `None` when the variable is unset or unrecognised.
fn env_flag(name: &str) -> Option<bool> {
    let value = env::var(name).ok()?;
    if value.eq_ignore_ascii_case("true") || value == "1" {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") || value == "0" {
        Some(false)
    } else {
        None
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
