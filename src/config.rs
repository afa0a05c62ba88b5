//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

use crate::error::AppError;

/// Application configuration loaded from environment variables.
///
/// Loaded once at startup and never mutated afterwards; handlers receive it
/// through the application state rather than reading the environment again.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Service Metadata ===
    /// Human-readable service name, shown on the root endpoint.
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Deployment environment: development, staging, or production.
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Enable debug behavior (verbose request logs).
    #[serde(default)]
    pub debug: bool,

    // === Server Configuration ===
    /// Interface to bind the HTTP listener on.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind the HTTP listener on.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Credentials ===
    /// API key for downstream integrations. Required in production.
    #[serde(default)]
    pub api_key: Option<String>,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_service_name() -> String {
    "api-starter".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.service_name.is_empty() {
            return Err(AppError::InvalidConfig(
                "SERVICE_NAME must not be empty".to_string(),
            ));
        }

        if self.host.parse::<IpAddr>().is_err() {
            return Err(AppError::InvalidConfig(format!(
                "HOST is not a valid IP address: {}",
                self.host
            )));
        }

        if self.is_production() && self.api_key.is_none() {
            return Err(AppError::InvalidConfig(
                "API_KEY is required when ENVIRONMENT=production".to_string(),
            ));
        }

        Ok(())
    }

    /// The socket address the listener binds to.
    ///
    /// Call [`Config::validate`] first; an unparseable host falls back to
    /// all interfaces here rather than panicking.
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = self
            .host
            .parse::<IpAddr>()
            .unwrap_or_else(|_| IpAddr::from([0, 0, 0, 0]));
        SocketAddr::new(ip, self.port)
    }

    /// Check if running in production.
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            environment: default_environment(),
            debug: false,
            host: default_host(),
            port: default_port(),
            api_key: None,
            rust_log: default_log_level(),
        }
    }
}
