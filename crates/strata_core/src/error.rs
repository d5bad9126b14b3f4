//! # Grid Error Types

use thiserror::Error;

use crate::coord::{GridDimensions, VoxelPos};

/// Errors raised by voxel grid access.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Read outside `[0, dimension)` on some axis. A caller contract violation.
    #[error("position {pos} is outside grid ({dimensions})")]
    OutOfRange {
        /// The rejected position.
        pos: VoxelPos,
        /// The grid's dimensions.
        dimensions: GridDimensions,
    },

    /// A grid with a zero-sized axis was requested.
    #[error("grid dimensions must be positive, got ({0})")]
    EmptyDimensions(GridDimensions),

    /// The cell count of the requested grid overflows `usize`.
    #[error("grid ({0}) has more cells than can be addressed")]
    TooLarge(GridDimensions),
}

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;
