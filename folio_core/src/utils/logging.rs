//! Logging setup for Folio binaries
//!
//! Library code emits `tracing` events; binaries call [`init_logging`] once
//! at startup to print them.
//!
//! # Environment Variables
//!
//! - `FOLIO_DEBUG=1` - Enable debug-level output

use std::sync::OnceLock;

use tracing::Level;

use super::error::{FolioError, FolioResult};

/// Cached debug enabled state (checked once at startup)
static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if debug mode is enabled via `FOLIO_DEBUG`
#[inline]
pub fn is_debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| debug_flag(std::env::var("FOLIO_DEBUG").ok().as_deref()))
}

fn debug_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

/// Maximum level for the installed subscriber
pub fn max_level() -> Level {
    if is_debug_enabled() {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Install the global fmt subscriber. Fails if one is already installed.
pub fn init_logging() -> FolioResult<()> {
    tracing_subscriber::fmt()
        .with_max_level(max_level())
        .with_target(false)
        .try_init()
        .map_err(|e| FolioError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag_values() {
        assert!(debug_flag(Some("1")));
        assert!(debug_flag(Some("TRUE")));
        assert!(!debug_flag(Some("0")));
        assert!(!debug_flag(Some("yes")));
        assert!(!debug_flag(None));
    }
}
