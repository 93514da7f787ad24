//! Overlay error type.

use crate::config::ConfigError;
use gridtrace_core::OutlineError;
use std::error::Error;
use std::fmt;

/// Errors surfaced by the overlay service and refresher.
#[derive(Debug, PartialEq)]
pub enum OverlayError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// Tracing a region failed.
    Outline(OutlineError),
    /// The refresh thread could not be spawned.
    ThreadSpawnFailed {
        /// The OS error text.
        reason: String,
    },
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Outline(e) => write!(f, "outline: {e}"),
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "refresh thread spawn failed: {reason}")
            }
        }
    }
}

impl Error for OverlayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Outline(e) => Some(e),
            Self::ThreadSpawnFailed { .. } => None,
        }
    }
}

impl From<ConfigError> for OverlayError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<OutlineError> for OverlayError {
    fn from(e: OutlineError) -> Self {
        Self::Outline(e)
    }
}
