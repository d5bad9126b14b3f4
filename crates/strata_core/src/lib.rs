//! # STRATA Core
//!
//! The voxel data model shared by generation and meshing.
//!
//! ## Core Components
//!
//! - `BlockType`: voxel materials and their packed atlas tiles
//! - `VoxelPos` / `GridDimensions`: signed cell positions and grid size
//! - `VoxelGrid`: dense, bounds-checked storage owning its cells
//!
//! ## Example
//!
//! ```rust
//! use strata_core::{BlockType, GridDimensions, VoxelGrid};
//!
//! let mut grid = VoxelGrid::filled_with_air(GridDimensions::new(4, 4, 4)).unwrap();
//! assert!(grid.set(1, 1, 1, BlockType::Stone));
//! assert!(!grid.set(9, 1, 1, BlockType::Stone));
//! assert_eq!(grid.get(1, 1, 1), Ok(BlockType::Stone));
//! assert!(grid.get(9, 1, 1).is_err());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod block;
pub mod coord;
pub mod error;
pub mod grid;

pub use block::{pack_tile, AtlasTile, BlockType, ATLAS_PACK_COLUMNS};
pub use coord::{GridDimensions, VoxelPos, FACE_OFFSETS};
pub use error::{GridError, GridResult};
pub use grid::VoxelGrid;
