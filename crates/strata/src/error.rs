//! # Facade Error Types

use strata_procedural::GenerationError;
use strata_rendering::MeshError;
use thiserror::Error;

/// Errors from building or loading terrain.
#[derive(Error, Debug)]
pub enum StrataError {
    /// Generation failed or its configuration is invalid.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Meshing failed or its settings are invalid.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// Settings file could not be parsed.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// Settings file could not be read.
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for facade operations.
pub type StrataResult<T> = Result<T, StrataError>;
