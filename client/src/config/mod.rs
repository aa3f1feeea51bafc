//! Configuration management for the BMI calculator client
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: BMI__)

use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use std::env;

/// Default note attached to saves from the quick form
pub const DEFAULT_QUICK_NOTE: &str = "Saved from quick form";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
    #[serde(default)]
    pub forms: FormsConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the site hosting `/api/save_bmi`
    pub base_url: String,
    /// Session cookie forwarded with save requests, e.g. `session=...`
    #[serde(default)]
    pub session_cookie: Option<String>,
}

/// Session state handed over by the host page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub logged_in: bool,
}

/// Form behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormsConfig {
    pub quick_note: String,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            quick_note: DEFAULT_QUICK_NOTE.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://127.0.0.1:5000".to_string(),
                session_cookie: None,
            },
            session: SessionConfig { logged_in: false },
            forms: FormsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with BMI__ prefix
    pub fn load() -> Result<Self, ClientError> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., BMI__API__BASE_URL=https://example.org sets api.base_url
            .add_source(config::Environment::with_prefix("BMI").separator("__"))
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the client cannot work with
    pub fn validate(&self) -> Result<(), ClientError> {
        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            return Err(ClientError::Config("api.base_url must not be empty".to_string()));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::Config(format!(
                "api.base_url must be an http(s) URL, got {}",
                base_url
            )));
        }
        Ok(())
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
