//! Error types for the host-facing configuration path.
//!
//! The simulation itself cannot fail; only config supplied by the page can.

use std::fmt;

/// Errors raised while loading a [`Config`](crate::config::Config).
#[derive(Debug)]
pub enum ConfigError {
    /// The JSON could not be parsed.
    Parse(serde_json::Error),
    /// The JSON parsed but a value is out of range.
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
