//! Configuration loading errors.

use crate::core::StateError;
use thiserror::Error;

/// Errors that can occur while loading tip state
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Input could not be read or parsed as JSON state
    #[error("Failed to parse tip state: {0}")]
    Parse(#[from] serde_json::Error),

    /// Parsed state breaks a structural assumption
    #[error("Invalid tip state: {0}")]
    Invalid(#[from] StateError),
}
