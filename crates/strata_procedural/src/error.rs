//! # Generation Error Types
//!
//! All errors that can occur while configuring or running terrain generation.

use strata_core::GridError;
use thiserror::Error;

/// Errors that can occur in the generation pipeline.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Invalid generation parameters. Rejected before any work starts.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Grid access failed (a contract violation inside a pass).
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for generation operations.
pub type GenerationResult<T> = Result<T, GenerationError>;
