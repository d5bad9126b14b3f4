//! # Meshing Error Types

use strata_core::{BlockType, GridError};
use thiserror::Error;

use crate::atlas::AtlasLayout;

/// Errors that can occur while meshing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// The atlas layout cannot hold any tile.
    #[error("invalid atlas: {0}")]
    InvalidAtlas(String),

    /// A block's tile lies outside the atlas.
    #[error("tile of {block} at column {column}, row {row} is outside atlas {layout}")]
    TileOutOfAtlas {
        /// The block being meshed.
        block: BlockType,
        /// Unpacked tile column.
        column: u32,
        /// Unpacked tile row.
        row: u32,
        /// The layout it was unpacked with.
        layout: AtlasLayout,
    },

    /// Block size components must be finite and positive.
    #[error("invalid block size {0:?}")]
    InvalidBlockSize([f32; 3]),

    /// A mesh buffer breaks its own invariants.
    #[error("malformed mesh buffer: {0}")]
    MalformedBuffer(String),

    /// Grid access failed.
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Result type for meshing operations.
pub type MeshResult<T> = Result<T, MeshError>;
