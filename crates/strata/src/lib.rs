//! # STRATA
//!
//! Voxel terrain generation and meshing.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  TerrainSettings (TOML)                                  │
//! ├──────────────────────────────────────────────────────────┤
//! │  strata_procedural: HeightMap → carve → paint passes     │
//! │        ↓                                                 │
//! │  strata_core: VoxelGrid                                  │
//! │        ↓                                                 │
//! │  strata_rendering: VoxelMesher → MeshBuffer              │
//! │        ↓                                                 │
//! │  MeshRenderer (yours)                                    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use strata::{build_terrain_seeded, present, TerrainSettings};
//! use strata_core::GridDimensions;
//! use strata_rendering::MeshBuffer;
//!
//! let mut settings = TerrainSettings::default();
//! settings.generation.dimensions = GridDimensions::new(8, 8, 8);
//!
//! let terrain = build_terrain_seeded(&settings).unwrap();
//! assert_eq!(terrain.mesh.vertex_count(), terrain.stats.non_air_cells() * 24);
//!
//! let mut shown: Vec<MeshBuffer> = Vec::new();
//! present(&terrain, &mut shown);
//! assert_eq!(shown.len(), 1);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod settings;
pub mod terrain;

pub use error::{StrataError, StrataResult};
pub use settings::{AtlasSettings, TerrainSettings};
pub use terrain::{build_terrain, build_terrain_seeded, present, Terrain};
