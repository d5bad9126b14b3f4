//! # Terrain Painting
//!
//! Turns a stone-carved grid into finished terrain. Passes run in a fixed
//! order and each one reads what the previous one wrote:
//!
//! | Pass | Effect |
//! |------|--------|
//! | Surface | Exposed top stone of each column becomes grass |
//! | Liquid | Air below the liquid level fills; floors solidify to cobblestone |
//! | Subsurface | Dirt beneath the first grass of each column |
//! | Ores | Per-rule stone replacement, optionally grown into clusters |
//!
//! Grass drowned by the liquid pass turns to cobblestone, so the
//! subsurface pass finds no grass in that column and leaves it bare.

use strata_core::{BlockType, VoxelGrid, VoxelPos};

use crate::config::{GenerationConfig, LiquidKind, OreRule};
use crate::error::GenerationResult;
use crate::heightfield::HeightMap;
use crate::ore::OreClusterGrower;
use crate::random::RandomSource;

/// Runs the painting passes configured by a [`GenerationConfig`].
#[derive(Clone, Copy, Debug)]
pub struct TerrainPainter<'a> {
    config: &'a GenerationConfig,
}

impl<'a> TerrainPainter<'a> {
    /// Creates a painter. `config` is expected to be validated.
    #[must_use]
    pub const fn new(config: &'a GenerationConfig) -> Self {
        Self { config }
    }

    /// Runs every pass in order: surface, liquid, subsurface, ores.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GenerationError::Grid`] if a pass reads outside the
    /// grid, which indicates a bug rather than bad input.
    pub fn paint<R: RandomSource + ?Sized>(
        &self,
        grid: &mut VoxelGrid,
        source: &mut R,
    ) -> GenerationResult<()> {
        paint_surface(grid)?;
        paint_liquid(grid, self.config.liquid, self.config.liquid_level)?;
        paint_subsurface(grid, self.config.dirt_depth)?;
        for rule in &self.config.ores {
            seed_ores(grid, rule, source)?;
        }
        Ok(())
    }
}

/// Fills every column with stone from `y = 0` up to its height, inclusive.
///
/// Columns outside the grid and heights above its top are clipped.
pub fn carve_stone(grid: &mut VoxelGrid, heights: &HeightMap) -> usize {
    let mut carved = 0;
    for x in 0..heights.width() {
        for z in 0..heights.depth() {
            let Some(top) = heights.get(x, z) else {
                continue;
            };
            let top = top.min(grid.height().saturating_sub(1));
            for y in 0..=top {
                if grid.set(x as i32, y as i32, z as i32, BlockType::Stone) {
                    carved += 1;
                }
            }
        }
    }
    tracing::debug!(carved, "carved stone columns");
    carved
}

/// Turns the exposed top stone of each column into grass.
///
/// # Errors
///
/// Propagates out-of-range reads (none occur for a well-formed grid).
pub fn paint_surface(grid: &mut VoxelGrid) -> GenerationResult<usize> {
    let top = grid.height() as i32 - 1;
    let mut painted = 0;

    for x in 0..grid.length() as i32 {
        for z in 0..grid.width() as i32 {
            for y in (0..=top).rev() {
                let block = grid.get(x, y, z)?;
                if block != BlockType::Stone {
                    continue;
                }
                if y == top || grid.get(x, y + 1, z)?.is_air() {
                    grid.set(x, y, z, BlockType::Grass);
                    painted += 1;
                    break;
                }
            }
        }
    }

    tracing::debug!(painted, "surface pass");
    Ok(painted)
}

/// Fills air at or below `floor(level × height)` with liquid.
///
/// Every solid cell directly beneath a newly filled cell becomes
/// cobblestone.
///
/// # Errors
///
/// Propagates out-of-range reads (none occur for a well-formed grid).
pub fn paint_liquid(grid: &mut VoxelGrid, liquid: LiquidKind, level: f64) -> GenerationResult<usize> {
    let height = grid.height();
    let surface = ((level * f64::from(height)).floor().max(0.0) as u32).min(height.saturating_sub(1));
    let liquid = liquid.block();
    let mut filled = 0;
    let mut solidified = 0;

    for x in 0..grid.length() as i32 {
        for z in 0..grid.width() as i32 {
            for y in (0..=surface as i32).rev() {
                if !grid.get(x, y, z)?.is_air() {
                    continue;
                }

                grid.set(x, y, z, liquid);
                filled += 1;

                if y == 0 {
                    continue;
                }

                let under = grid.get(x, y - 1, z)?;
                if under.is_air() || under.is_liquid() {
                    continue;
                }
                grid.set(x, y - 1, z, BlockType::Cobblestone);
                solidified += 1;
            }
        }
    }

    tracing::debug!(filled, solidified, surface, "liquid pass");
    Ok(filled + solidified)
}

/// Puts `depth` dirt cells beneath the first grass of each column.
///
/// Cells below the grid bottom are skipped.
///
/// # Errors
///
/// Propagates out-of-range reads (none occur for a well-formed grid).
pub fn paint_subsurface(grid: &mut VoxelGrid, depth: u32) -> GenerationResult<usize> {
    let top = grid.height() as i32 - 1;
    let mut painted = 0;

    for x in 0..grid.length() as i32 {
        for z in 0..grid.width() as i32 {
            for y in (0..=top).rev() {
                if grid.get(x, y, z)? != BlockType::Grass {
                    continue;
                }
                for below in 1..=depth as i32 {
                    if grid.set(x, y - below, z, BlockType::Dirt) {
                        painted += 1;
                    }
                }
                break;
            }
        }
    }

    tracing::debug!(painted, depth, "subsurface pass");
    Ok(painted)
}

/// Runs one ore rule over the whole grid.
///
/// Columns are visited `x` then `z`, each top-down. A cell still holding
/// stone becomes ore when `uniform() < spawn_probability`; clustered rules
/// then grow a vein from it. Returns the number of ore cells placed.
///
/// # Errors
///
/// Propagates out-of-range reads (none occur for a well-formed grid).
pub fn seed_ores<R: RandomSource + ?Sized>(
    grid: &mut VoxelGrid,
    rule: &OreRule,
    source: &mut R,
) -> GenerationResult<usize> {
    let top = grid.height() as i32 - 1;
    let grower = rule.cluster.map(OreClusterGrower::new);
    let mut seeds = 0;
    let mut placed = 0;

    for x in 0..grid.length() as i32 {
        for z in 0..grid.width() as i32 {
            for y in (0..=top).rev() {
                if grid.get(x, y, z)? != BlockType::Stone {
                    continue;
                }
                if source.uniform() >= rule.spawn_probability {
                    continue;
                }

                seeds += 1;
                let pos = VoxelPos::new(x, y, z);
                placed += match &grower {
                    Some(grower) => grower.grow(grid, pos, rule.block, source),
                    None => usize::from(grid.set_at(pos, rule.block)),
                };
            }
        }
    }

    tracing::debug!(ore = %rule.block, seeds, placed, "ore pass");
    Ok(placed)
}
