//! Common utilities and types for the warnclimo warning climatology tool

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{ClimoError, Result};
pub use logging::{init_default_logging, init_logging, init_logging_at, LoggingConfig};
pub use types::WarningRecord;
