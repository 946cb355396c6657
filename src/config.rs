// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{ClientError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub api: ApiConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base URL without a trailing slash, ready for endpoint paths to be appended.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default_config();
        let mut builder = config::Config::builder()
            .set_default("api.base_url", defaults.api.base_url)
            .and_then(|b| b.set_default("api.timeout_secs", defaults.api.timeout_secs))
            .and_then(|b| {
                b.set_default(
                    "export.output_dir",
                    defaults.export.output_dir.display().to_string(),
                )
            })
            .map_err(|e| ClientError::Config(e.to_string()))?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(
                config::File::from(Path::new("config/default.toml")).required(false),
            );
        }

        builder = builder.add_source(
            config::Environment::with_prefix("SEARCH_CLIENT")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                timeout_secs: 20,
            },
            export: ExportConfig {
                output_dir: PathBuf::from("."),
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        Validator::validate_url(&self.api.base_url)
            .map_err(|e| ClientError::Config(e.to_string()))?;
        Validator::validate_timeout(self.api.timeout_secs)
            .map_err(|e| ClientError::Config(e.to_string()))?;
        Ok(())
    }
}
