//! # STRATA Rendering
//!
//! Turns a painted voxel grid into one renderable mesh.
//!
//! ## Pipeline
//!
//! ```text
//! VoxelGrid → per-cell cube (CubeTemplate) → atlas UVs (AtlasLayout)
//!           → combined MeshBuffer → MeshRenderer
//! ```
//!
//! ## Example
//!
//! ```rust
//! use strata_core::{BlockType, GridDimensions, VoxelGrid};
//! use strata_rendering::{AtlasLayout, VoxelMesher};
//!
//! let mut grid = VoxelGrid::filled_with_air(GridDimensions::new(2, 2, 2)).unwrap();
//! grid.set(0, 0, 0, BlockType::Stone);
//!
//! let mesher = VoxelMesher::new([1.0; 3], AtlasLayout::default()).unwrap();
//! let mesh = mesher.build(&grid).unwrap();
//! assert_eq!(mesh.vertex_count(), 24);
//! assert_eq!(mesh.triangle_count(), 12);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod atlas;
pub mod error;
pub mod mesh;
pub mod mesher;
pub mod renderer;

pub use atlas::{AtlasLayout, AtlasRect, DEFAULT_ATLAS_ROWS};
pub use error::{MeshError, MeshResult};
pub use mesh::{CubeTemplate, MeshBounds, MeshBuffer, MeshVertex, CUBE_INDICES, CUBE_VERTICES};
pub use mesher::VoxelMesher;
pub use renderer::MeshRenderer;
