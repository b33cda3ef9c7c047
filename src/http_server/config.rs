//! HTTP Server Configuration
//!
//! Host, port, CORS, logging and seeding settings. Every field has a default,
//! so an empty JSON object is a valid configuration.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::LogFormat;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("port must be > 0")]
    ZeroPort,

    #[error("log_level must not be empty")]
    EmptyLogLevel,

    #[error("Invalid CORS origin: '{0}'")]
    InvalidCorsOrigin(String),
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (default: empty, meaning any origin)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Tracing filter directive (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log line format (default: pretty)
    #[serde(default)]
    pub log_format: LogFormat,

    /// Start with the demo users installed (default: false)
    #[serde(default)]
    pub seed_demo_users: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            seed_demo_users: false,
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check the values serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::ZeroPort);
        }

        if self.log_level.trim().is_empty() {
            return Err(ConfigError::EmptyLogLevel);
        }

        if let Some(bad) = self
            .cors_origins
            .iter()
            .find(|origin| HeaderValue::from_str(origin).is_err())
        {
            return Err(ConfigError::InvalidCorsOrigin(bad.clone()));
        }

        Ok(())
    }
}
