//! Application Configuration
//!
//! Layered from an optional TOML file and `AUTOVAULT__SECTION__KEY`
//! environment variables.

use advisor::AdvisorConfig;
use config::{Config, Environment, File};
use data_validator::ValidationConfig;
use fallback::FallbackRules;
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::ApiError;
use crate::rate_limit::RateLimitConfig;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub rate_limit: RateLimitConfig,
    pub validation: ValidationConfig,
    pub advisor: AdvisorConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address
    pub bind_addr: String,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Expose Prometheus metrics on `/metrics`
    pub metrics: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            metrics: true,
        }
    }
}

/// Price model settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// ONNX export of the trained regressor
    pub artifact_path: PathBuf,
    /// Serve heuristic estimates when the artifact cannot be loaded
    pub allow_fallback: bool,
    /// Tunables for the heuristic estimate
    pub fallback: FallbackRules,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            artifact_path: PathBuf::from("models/car_price.onnx"),
            allow_fallback: true,
            fallback: FallbackRules::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration
    ///
    /// An explicit `path` must exist; otherwise `autovault.toml` in the
    /// working directory is read when present.
    pub fn load(path: Option<&str>) -> Result<Self, ApiError> {
        let file = match path {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name("autovault").required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("AUTOVAULT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ApiError::Config(e.to_string()))
    }
}
