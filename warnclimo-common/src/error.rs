//! Error types and utilities for warnclimo

use thiserror::Error;

/// Result type alias for warnclimo operations
pub type Result<T> = std::result::Result<T, ClimoError>;

/// Main error type for warnclimo operations
#[derive(Error, Debug)]
pub enum ClimoError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV ingestion errors (missing file, missing columns, bad rows)
    #[error("Ingest error: {message}")]
    Ingest {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Issuance timestamp parsing errors
    #[error("Timestamp error: {message}: {value:?}")]
    Timestamp {
        message: String,
        value: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Calendar slot errors (invalid month or day)
    #[error("Calendar error: {message}")]
    Calendar { message: String },

    /// Chart generation and plotting errors
    #[error("Graph error: {message}")]
    Graph {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for configuration or data
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ClimoError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new ingest error
    pub fn ingest(msg: impl Into<String>) -> Self {
        Self::Ingest {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new ingest error with source
    pub fn ingest_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Ingest {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new timestamp error for an unparseable issuance string
    pub fn timestamp(msg: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Timestamp {
            message: msg.into(),
            value: value.into(),
            source: None,
        }
    }

    /// Create a new timestamp error with source
    pub fn timestamp_with_source(
        msg: impl Into<String>,
        value: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Timestamp {
            message: msg.into(),
            value: value.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new calendar error
    pub fn calendar(msg: impl Into<String>) -> Self {
        Self::Calendar {
            message: msg.into(),
        }
    }

    /// Create a new graph error
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new graph error with source
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }
}

// Error conversion implementations for external types

/// Convert from csv::Error to ClimoError
impl From<csv::Error> for ClimoError {
    fn from(err: csv::Error) -> Self {
        Self::ingest_with_source("CSV read failed", err)
    }
}

/// Convert from serde_yaml::Error to ClimoError
impl From<serde_yaml::Error> for ClimoError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::config_with_source("YAML parsing error", err)
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to ClimoError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for ClimoError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph_with_source("Chart rendering failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let error = ClimoError::new("test message");
        assert!(error.to_string().contains("test message"));

        let config_error = ClimoError::config("config issue");
        assert!(config_error.to_string().contains("Configuration error"));
        assert!(config_error.to_string().contains("config issue"));

        let ingest_error = ClimoError::ingest("missing column");
        assert!(ingest_error.to_string().contains("Ingest error"));
        assert!(ingest_error.to_string().contains("missing column"));

        let ts_error = ClimoError::timestamp("bad issuance", "13/01/15 00:00");
        assert!(ts_error.to_string().contains("Timestamp error"));
        assert!(ts_error.to_string().contains("13/01/15 00:00"));

        let calendar_error = ClimoError::calendar("invalid month: 13");
        assert!(calendar_error.to_string().contains("Calendar error"));
        assert!(calendar_error.to_string().contains("invalid month"));

        let validation_error = ClimoError::validation_field("Invalid input", "office");
        assert!(validation_error.to_string().contains("Validation error"));
        assert!(validation_error.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wrapped_error = ClimoError::with_source("Failed to read file", io_error);

        assert!(wrapped_error.to_string().contains("Failed to read file"));
        assert!(wrapped_error.source().is_some());

        let config_source_error = ClimoError::config_with_source(
            "Config loading failed",
            io::Error::new(io::ErrorKind::PermissionDenied, "Access denied"),
        );

        assert!(config_source_error.to_string().contains("Configuration error"));
        assert!(config_source_error.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let climo_error: ClimoError = io_error.into();

        assert!(climo_error.to_string().contains("I/O error"));
        assert!(climo_error.source().is_some());
    }

    #[test]
    fn test_yaml_error_conversion() {
        let invalid_yaml = "office: [unclosed";
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>(invalid_yaml).unwrap_err();
        let climo_error: ClimoError = yaml_error.into();

        assert!(climo_error.to_string().contains("YAML parsing error"));
    }

    #[test]
    fn test_error_display_formatting() {
        let error = ClimoError::new("test error");
        assert_eq!(format!("{}", error), "test error");

        let config_error = ClimoError::config("missing field");
        assert_eq!(
            format!("{}", config_error),
            "Configuration error: missing field"
        );

        let calendar_error = ClimoError::calendar("invalid month: 0");
        assert_eq!(
            format!("{}", calendar_error),
            "Calendar error: invalid month: 0"
        );
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Ok("success".to_string())
        }

        fn returns_error() -> Result<String> {
            Err(ClimoError::new("failure"))
        }

        assert!(returns_result().is_ok());
        assert!(returns_error().is_err());
    }

    #[test]
    fn test_error_chain_preservation() {
        let root_error = io::Error::new(io::ErrorKind::NotFound, "Root cause");
        let middle_error = ClimoError::config_with_source("Middle layer", root_error);
        let top_error = ClimoError::with_source("Top layer", middle_error);

        assert!(top_error.to_string().contains("Top layer"));

        let mut current_error: &dyn std::error::Error = &top_error;
        let mut error_count = 0;

        while let Some(source) = current_error.source() {
            current_error = source;
            error_count += 1;
        }

        assert!(error_count >= 2);
    }
}
