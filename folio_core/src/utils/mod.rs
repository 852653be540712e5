//! Utility modules for Folio
//!
//! Configuration, error types, logging setup and the shared HTTP client.

pub mod config;
pub mod error;
pub mod http_client;
pub mod logging;

pub use error::{FolioError, FolioResult};
