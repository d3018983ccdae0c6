//! Application configuration structures

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Input data configuration
    #[validate]
    pub input: InputConfig,

    /// Forecast office and period-of-record configuration
    #[validate]
    pub office: OfficeConfig,

    /// Chart rendering settings
    #[validate]
    pub chart: ChartConfig,

    /// Logging configuration
    pub logging: LoggingSettings,
}

/// Input data configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct InputConfig {
    /// Path to the warnings CSV (PRODUCT and ISSUANCE columns)
    #[validate(length(min = 1, message = "Warnings file path cannot be empty"))]
    pub warnings_file: String,
}

/// Forecast office configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct OfficeConfig {
    /// WFO identifier (e.g., "FWD")
    #[validate(custom = "crate::validation::validate_office_code")]
    pub code: String,

    /// First year of the period of record (subtitle text only)
    #[validate(custom = "crate::validation::validate_year_label")]
    pub period_start: String,

    /// Last year of the period of record (subtitle text only)
    #[validate(custom = "crate::validation::validate_year_label")]
    pub period_end: String,

    /// Warning product codes to chart; a combined "all" chart is always
    /// rendered in addition to these
    #[validate(custom = "crate::validation::validate_product_codes")]
    pub products: Vec<String>,
}

/// Chart rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ChartConfig {
    /// Chart width in pixels
    #[validate(range(min = 400, max = 4000, message = "Width must be between 400 and 4000 pixels"))]
    pub width: u32,

    /// Chart height in pixels
    #[validate(range(min = 300, max = 4000, message = "Height must be between 300 and 4000 pixels"))]
    pub height: u32,

    /// Fixed y-axis maximum (warnings per calendar date)
    #[validate(range(min = 10, max = 100_000, message = "Y-axis maximum must be between 10 and 100000"))]
    pub y_max: u32,

    /// Directory the chart PNGs are written to
    #[validate(length(min = 1, message = "Output directory cannot be empty"))]
    pub output_dir: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Optional log file path
    pub file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            office: OfficeConfig::default(),
            chart: ChartConfig::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            warnings_file: "warnings.csv".to_string(),
        }
    }
}

impl Default for OfficeConfig {
    fn default() -> Self {
        Self {
            code: "FWD".to_string(),
            period_start: "1987".to_string(),
            period_end: "2016".to_string(),
            products: vec!["SVR".to_string(), "TOR".to_string(), "FFW".to_string()],
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            y_max: 300,
            output_dir: ".".to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Validate the entire configuration, including nested sections
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.validate()
    }
}
