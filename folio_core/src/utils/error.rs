//! Centralized error handling for Folio
//!
//! Library code returns these `thiserror` types; the desktop binary wraps
//! them in `anyhow` at its boundary. User-facing contact form failures live
//! in [`crate::contact::ContactError`] instead, since their `Display` text is
//! shown verbatim in the UI.

use thiserror::Error;

/// Core errors that can occur in Folio
#[derive(Error, Debug)]
pub enum FolioError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML (de)serialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Logging subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias for Folio operations
pub type FolioResult<T> = Result<T, FolioError>;

/// Extension trait for adding context to config results
pub trait ResultExt<T> {
    fn with_config_context(self, context: &str) -> FolioResult<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn with_config_context(self, context: &str) -> FolioResult<T> {
        self.map_err(|e| FolioError::Config(format!("{}: {}", context, e)))
    }
}
