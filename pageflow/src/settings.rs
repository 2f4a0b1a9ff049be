use crate::background::data_loader::LoaderOptions;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Which data source backs the list
#[derive(Default, Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Mock,
    Http,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub source: SourceKind,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default = "default_mock_latency_ms")]
    pub mock_latency_ms: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_api_base_url() -> String {
    orders_api::DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_mock_latency_ms() -> u64 {
    1_500
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            api_base_url: default_api_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
            mock_latency_ms: default_mock_latency_ms(),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl Settings {
    /// Load from `$PAGEFLOW_CONFIG` (default `pageflow.toml`) and `PAGEFLOW_*` variables
    pub fn new() -> Result<Self, SettingsError> {
        let config_path =
            std::env::var("PAGEFLOW_CONFIG").unwrap_or_else(|_| "pageflow.toml".to_string());
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &str) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                Environment::with_prefix("PAGEFLOW")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.source == SourceKind::Http && !self.api_base_url.starts_with("http") {
            return Err(SettingsError::Invalid(
                "api_base_url must be a valid HTTP(S) URL".to_string(),
            ));
        }
        if self.request_timeout_ms == 0 {
            return Err(SettingsError::Invalid(
                "request_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn mock_latency(&self) -> Duration {
        Duration::from_millis(self.mock_latency_ms)
    }

    pub fn loader_options(&self) -> LoaderOptions {
        LoaderOptions {
            request_timeout: self.request_timeout(),
            simulated_latency: self.mock_latency(),
        }
    }
}
