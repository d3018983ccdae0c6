//! Configuration loading utilities

use crate::Config;
use std::env;
use std::path::Path;
use thiserror::Error;
use warnclimo_common::Result as ClimoResult;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for warnclimo_common::ClimoError {
    fn from(err: ConfigError) -> Self {
        warnclimo_common::ClimoError::config(err.to_string())
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        Self::apply_env_overrides(&mut config)?;

        config.validate_all().map_err(ConfigError::ValidationError)?;

        Ok(config)
    }

    /// Load configuration from the default locations
    ///
    /// Tries `WARNCLIMO_CONFIG_PATH`, then `climo.yaml` / `climo.yml` in the
    /// working directory, and falls back to defaults with env overrides.
    pub fn load() -> ClimoResult<Config> {
        let config = if let Ok(config_path) = env::var("WARNCLIMO_CONFIG_PATH") {
            Self::load_config(&config_path)?
        } else if Path::new("climo.yaml").exists() {
            Self::load_config("climo.yaml")?
        } else if Path::new("climo.yml").exists() {
            Self::load_config("climo.yml")?
        } else {
            let mut config = Config::default();
            Self::apply_env_overrides(&mut config)?;
            config.validate_all().map_err(ConfigError::ValidationError)?;
            config
        };

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ClimoResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        if let Ok(warnings_file) = env::var("WARNCLIMO_WARNINGS_FILE") {
            config.input.warnings_file = warnings_file;
        }

        if let Ok(office) = env::var("WARNCLIMO_OFFICE") {
            config.office.code = office;
        }

        if let Ok(products) = env::var("WARNCLIMO_PRODUCTS") {
            config.office.products = products
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        if let Ok(output_dir) = env::var("WARNCLIMO_OUTPUT_DIR") {
            config.chart.output_dir = output_dir;
        }

        if let Ok(y_max) = env::var("WARNCLIMO_Y_MAX") {
            config.chart.y_max = y_max.parse().map_err(|e| ConfigError::EnvParseError {
                var: "WARNCLIMO_Y_MAX".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Ok(level) = env::var("WARNCLIMO_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}
