//! # Terrain Generation Pipeline
//!
//! `allocate air → draw seed offset → height map → carve stone → paint`.
//!
//! The generator validates its configuration once, up front. After that a
//! generation call can only fail on an internal grid contract violation.

use strata_core::{BlockType, VoxelGrid};

use crate::config::GenerationConfig;
use crate::error::GenerationResult;
use crate::heightfield::HeightMap;
use crate::painter::{carve_stone, TerrainPainter};
use crate::random::{RandomSource, SeededRandom};
use crate::stats::GenerationStats;

/// Noise-space offsets are drawn from `[0, SEED_OFFSET_RANGE)`.
pub const SEED_OFFSET_RANGE: f64 = 100.0;

/// Produces painted voxel terrain from a validated configuration.
#[derive(Clone, Debug)]
pub struct TerrainGenerator {
    config: GenerationConfig,
}

impl TerrainGenerator {
    /// Validates `config` and creates a generator.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GenerationError::Configuration`] for invalid values.
    pub fn new(config: GenerationConfig) -> GenerationResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generates one terrain using `source` for every random decision.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GenerationError::Grid`] on an internal out-of-range
    /// read.
    pub fn generate<R: RandomSource + ?Sized>(&self, source: &mut R) -> GenerationResult<VoxelGrid> {
        let dims = self.config.dimensions;
        tracing::info!(
            dimensions = %dims,
            seed = self.config.seed,
            "generating terrain"
        );

        let mut grid = VoxelGrid::filled_with_air(dims)?;

        let seed_offset = self
            .config
            .seed_offset
            .unwrap_or_else(|| source.uniform() * SEED_OFFSET_RANGE);

        let heights = HeightMap::generate(
            dims.length,
            dims.width,
            self.config.effective_max_height(),
            seed_offset,
            &*source,
        );
        tracing::debug!(
            seed_offset,
            min = heights.min_value(),
            max = heights.max_value(),
            "height map ready"
        );

        carve_stone(&mut grid, &heights);
        TerrainPainter::new(&self.config).paint(&mut grid, source)?;

        let stats = GenerationStats::from_grid(&grid);
        tracing::info!(
            solid = stats.solid_cells(),
            grass = stats.count(BlockType::Grass),
            liquid = stats.count(self.config.liquid.block()),
            "terrain generated"
        );

        Ok(grid)
    }

    /// Generates with a [`SeededRandom`] built from `config.seed`.
    ///
    /// # Errors
    ///
    /// As [`TerrainGenerator::generate`].
    pub fn generate_seeded(&self) -> GenerationResult<VoxelGrid> {
        let mut source = SeededRandom::from_u64(self.config.seed);
        self.generate(&mut source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OreRule;
    use crate::error::GenerationError;
    use strata_core::GridDimensions;

    #[test]
    fn test_invalid_config_rejected_up_front() {
        let mut config = GenerationConfig::default();
        config.liquid_level = 3.0;
        assert!(matches!(
            TerrainGenerator::new(config),
            Err(GenerationError::Configuration(_))
        ));
    }

    #[test]
    fn test_far_seed_offset_rejected_up_front() {
        let mut config = GenerationConfig::with_dimensions(GridDimensions::new(8, 8, 8));
        config.seed_offset = Some(1e10);
        assert!(matches!(
            TerrainGenerator::new(config),
            Err(GenerationError::Configuration(_))
        ));
    }

    #[test]
    fn test_largest_seed_offset_generates() {
        let mut config = GenerationConfig::with_dimensions(GridDimensions::new(8, 8, 8));
        config.seed_offset = Some(crate::config::MAX_SEED_OFFSET);
        let grid = TerrainGenerator::new(config).unwrap().generate_seeded().unwrap();

        for x in 0..8 {
            for z in 0..8 {
                assert_ne!(grid.get(x, 0, z), Ok(BlockType::Air));
            }
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let mut config = GenerationConfig::with_dimensions(GridDimensions::new(12, 10, 12));
        config.seed = 77;
        let generator = TerrainGenerator::new(config).unwrap();

        assert_eq!(generator.generate_seeded().unwrap(), generator.generate_seeded().unwrap());
    }

    #[test]
    fn test_pinned_offset_fixes_height_map() {
        let mut config = GenerationConfig::with_dimensions(GridDimensions::new(8, 8, 8));
        config.seed_offset = Some(12.5);
        config.ores = Vec::new();
        let generator = TerrainGenerator::new(config).unwrap();

        // Same noise field, uniform streams at different positions.
        let field = SeededRandom::from_u64(1);
        let mut fresh = field.clone();
        let mut advanced = field.clone();
        for _ in 0..17 {
            advanced.uniform();
        }

        let grid_a = generator.generate(&mut fresh).unwrap();
        let grid_b = generator.generate(&mut advanced).unwrap();
        assert_eq!(grid_a, grid_b);
    }

    #[test]
    fn test_single_layer_grid() {
        let mut config = GenerationConfig::with_dimensions(GridDimensions::new(4, 1, 4));
        config.ores = vec![OreRule::scattered(BlockType::OreDiamond, 0.0)];
        let grid = TerrainGenerator::new(config).unwrap().generate_seeded().unwrap();

        // Every column is height 0 and its only stone is exposed at the top.
        assert_eq!(grid.count(BlockType::Grass), 16);
    }
}
