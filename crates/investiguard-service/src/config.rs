//! Service configuration
//!
//! Loaded from a YAML file when it exists, otherwise defaults, then overridden
//! by CLI flags and environment variables.

use crate::cli::Cli;
use axum::http::HeaderValue;
use investiguard_classifiers::SentimentConfig;
use investiguard_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Top-level service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub sentiment: SentimentConfig,

    #[serde(default)]
    pub alerts: AlertConfig,

    #[serde(default)]
    pub deepfake: DeepfakeConfig,
}

impl ServiceConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &str, cli: &Cli) -> anyhow::Result<Self> {
        let mut config = if Path::new(config_path).exists() {
            Self::from_file(config_path)?
        } else {
            tracing::debug!("No config file at {}, using defaults", config_path);
            Self::default()
        };

        if let Some(listen) = &cli.listen {
            config.server.listen = listen.clone();
        }

        if let Some(port) = cli.port {
            config.server.port = port;
        }

        if let Some(backend) = cli.sentiment {
            config.sentiment.backend = backend;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.alerts.capacity == 0 {
            return Err(Error::config("alerts.capacity must be greater than zero"));
        }

        if self.server.request_timeout_secs == 0 {
            return Err(Error::config(
                "server.request_timeout_secs must be greater than zero",
            ));
        }

        for origin in &self.server.cors_origins {
            HeaderValue::from_str(origin).map_err(|_| {
                Error::config(format!("invalid CORS origin '{}'", origin))
            })?;
        }

        self.sentiment.validate()
    }

    /// `listen:port` socket address string
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.listen, self.server.port)
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Requests running longer than this are answered with 408
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            port: default_port(),
            request_timeout_secs: default_request_timeout(),
            max_body_bytes: default_max_body_bytes(),
            cors_origins: Vec::new(),
        }
    }
}

/// Simulated alert feed settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Number of alerts retained
    #[serde(default = "default_alert_capacity")]
    pub capacity: usize,

    /// Minimum age of the newest alert before another is generated
    #[serde(default = "default_alert_interval")]
    pub interval_secs: u64,

    #[serde(default)]
    pub seed: u64,
}

impl AlertConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            capacity: default_alert_capacity(),
            interval_secs: default_alert_interval(),
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeepfakeConfig {
    #[serde(default)]
    pub seed: u64,
}

fn default_listen() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8001
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_body_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_alert_capacity() -> usize {
    50
}

fn default_alert_interval() -> u64 {
    30
}
