//! Configuration management for the warnclimo warning climatology tool

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader};
pub use settings::{ChartConfig, Config, InputConfig, LoggingSettings, OfficeConfig};
