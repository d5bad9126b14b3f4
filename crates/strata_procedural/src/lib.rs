//! # STRATA Procedural Generation
//!
//! Deterministic voxel terrain: a noise height field carved into stone,
//! then painted with grass, liquid, dirt and ore veins.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed always produces the same terrain
//! 2. **Injected randomness**: Every pass takes a [`RandomSource`]
//! 3. **Validated up front**: Bad configuration fails before any work
//!
//! ## Core Components
//!
//! - `SimplexNoise`: 2D coherent noise
//! - `HeightMap`: Column heights sampled from the noise
//! - `TerrainPainter`: Ordered surface / liquid / subsurface / ore passes
//! - `OreClusterGrower`: Self-decaying random frontier walk
//! - `TerrainGenerator`: The full pipeline
//!
//! ## Example
//!
//! ```rust
//! use strata_core::{BlockType, GridDimensions};
//! use strata_procedural::{GenerationConfig, TerrainGenerator};
//!
//! let mut config = GenerationConfig::with_dimensions(GridDimensions::new(16, 12, 16));
//! config.seed = 12345;
//!
//! let generator = TerrainGenerator::new(config).unwrap();
//! let grid = generator.generate_seeded().unwrap();
//!
//! // Same seed, same terrain
//! assert_eq!(grid, generator.generate_seeded().unwrap());
//! assert!(grid.count(BlockType::Stone) > 0);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod heightfield;
pub mod noise;
pub mod ore;
pub mod painter;
pub mod pipeline;
pub mod random;
pub mod stats;

pub use config::{
    ClusterParams, GenerationConfig, LiquidKind, OreRule, MAX_SEED_OFFSET, PROBABILITY_EPSILON,
};
pub use error::{GenerationError, GenerationResult};
pub use heightfield::HeightMap;
pub use noise::{SimplexNoise, WorldSeed};
pub use ore::OreClusterGrower;
pub use painter::TerrainPainter;
pub use pipeline::{TerrainGenerator, SEED_OFFSET_RANGE};
pub use random::{RandomSource, SeededRandom};
pub use stats::GenerationStats;
