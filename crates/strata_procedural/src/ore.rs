//! # Ore Cluster Growth
//!
//! Grows an ore vein from a seed block with a self-decaying random walk.
//!
//! ## Algorithm
//!
//! 1. Convert the seed. It counts as the first propagation step, so the
//!    walk starts at `initial_probability - decay_step`.
//! 2. Put the seed's face neighbors into the frontier.
//! 3. While the frontier is non-empty and the probability is positive:
//!    pick a frontier cell uniformly at random and remove it. Non-stone
//!    cells are discarded. Stone converts with the current probability;
//!    a conversion pushes the cell's neighbors and lowers the probability
//!    by `decay_step`. A failed draw only discards the cell.
//!
//! Cluster size is bounded by `ceil(initial_probability / decay_step)`.
//! Counting the seed as a step is what makes `decay_step >=
//! initial_probability` place the seed alone. It also costs one cell per
//! vein against a walk that starts at the full `initial_probability`: the
//! default 0.5 / 0.1 veins top out at 5 cells rather than 6.
//!
//! The frontier must be picked uniformly, not in queue order: an ordered
//! worklist grows compact blobs instead of veins.

use strata_core::{BlockType, VoxelGrid, VoxelPos};

use crate::config::{ClusterParams, PROBABILITY_EPSILON};
use crate::random::RandomSource;

/// Candidate cells of one growing cluster.
#[derive(Debug, Default)]
struct Frontier {
    cells: Vec<VoxelPos>,
}

impl Frontier {
    fn push_neighbors(&mut self, grid: &VoxelGrid, pos: VoxelPos) {
        self.cells.extend(grid.neighbors6(pos));
    }

    /// Removes and returns a uniformly chosen cell.
    fn take_random<R: RandomSource + ?Sized>(&mut self, source: &mut R) -> Option<VoxelPos> {
        if self.cells.is_empty() {
            return None;
        }
        let idx = source.index(self.cells.len());
        // Order of the remaining cells is irrelevant under uniform picks.
        Some(self.cells.swap_remove(idx))
    }
}

/// Grows ore clusters through stone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OreClusterGrower {
    params: ClusterParams,
}

impl OreClusterGrower {
    /// Creates a grower. `params` are expected to be validated.
    #[must_use]
    pub const fn new(params: ClusterParams) -> Self {
        Self { params }
    }

    /// Creates a grower from raw parameters.
    #[must_use]
    pub const fn with_probabilities(initial_probability: f64, decay_step: f64) -> Self {
        Self::new(ClusterParams::new(initial_probability, decay_step))
    }

    /// The walk parameters.
    #[inline]
    #[must_use]
    pub const fn params(&self) -> ClusterParams {
        self.params
    }

    /// Grows a cluster of `ore` from `seed`.
    ///
    /// Returns the number of cells converted, seed included. A seed outside
    /// the grid converts nothing.
    pub fn grow<R: RandomSource + ?Sized>(
        &self,
        grid: &mut VoxelGrid,
        seed: VoxelPos,
        ore: BlockType,
        source: &mut R,
    ) -> usize {
        if !grid.set_at(seed, ore) {
            return 0;
        }

        let mut converted = 1usize;
        let mut frontier = Frontier::default();
        frontier.push_neighbors(grid, seed);

        loop {
            let probability = self.probability_after(converted);
            if probability <= PROBABILITY_EPSILON {
                break;
            }

            let Some(pos) = frontier.take_random(source) else {
                break;
            };

            if grid.get_at(pos) != Ok(BlockType::Stone) {
                continue;
            }

            if source.uniform() >= probability {
                continue;
            }

            grid.set_at(pos, ore);
            converted += 1;
            frontier.push_neighbors(grid, pos);
        }

        converted
    }

    /// Propagation probability once `converted` cells have been placed.
    #[inline]
    fn probability_after(&self, converted: usize) -> f64 {
        self.params.initial_probability - self.params.decay_step * converted as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;
    use strata_core::GridDimensions;

    /// Always draws the same value; picks the first frontier cell.
    struct FixedDraw(f64);

    impl RandomSource for FixedDraw {
        fn uniform(&mut self) -> f64 {
            self.0
        }

        fn noise_2d(&self, _x: f64, _y: f64) -> f64 {
            0.5
        }
    }

    fn stone_grid(size: u32) -> VoxelGrid {
        VoxelGrid::new(GridDimensions::new(size, size, size), BlockType::Stone).unwrap()
    }

    #[test]
    fn test_decay_at_least_initial_places_only_seed() {
        for (initial, decay) in [(0.5, 0.5), (0.3, 0.9), (1.0, 1.0)] {
            let mut grid = stone_grid(5);
            let grower = OreClusterGrower::with_probabilities(initial, decay);
            let placed = grower.grow(&mut grid, VoxelPos::new(2, 2, 2), BlockType::OreIron, &mut FixedDraw(0.0));

            assert_eq!(placed, 1);
            assert_eq!(grid.count(BlockType::OreIron), 1);
            assert_eq!(grid.get(2, 2, 2), Ok(BlockType::OreIron));
        }
    }

    #[test]
    fn test_certain_draws_reach_size_bound() {
        let mut grid = stone_grid(9);
        let grower = OreClusterGrower::with_probabilities(0.5, 0.1);
        let placed = grower.grow(&mut grid, VoxelPos::new(4, 4, 4), BlockType::OreIron, &mut FixedDraw(0.0));

        assert_eq!(placed, 5);
        assert_eq!(placed, grower.params().max_cluster_size());
        assert_eq!(grid.count(BlockType::OreIron), 5);
    }

    #[test]
    fn test_failed_draws_keep_seed_only() {
        let mut grid = stone_grid(5);
        let grower = OreClusterGrower::with_probabilities(0.5, 0.1);
        let placed = grower.grow(&mut grid, VoxelPos::new(2, 2, 2), BlockType::OreIron, &mut FixedDraw(0.99));
        assert_eq!(placed, 1);
    }

    #[test]
    fn test_growth_only_replaces_stone() {
        let mut grid = VoxelGrid::filled_with_air(GridDimensions::new(5, 5, 5)).unwrap();
        let grower = OreClusterGrower::with_probabilities(1.0, 0.01);
        let placed = grower.grow(&mut grid, VoxelPos::new(2, 2, 2), BlockType::OreIron, &mut FixedDraw(0.0));

        assert_eq!(placed, 1);
        assert_eq!(grid.count(BlockType::Air), 124);
    }

    #[test]
    fn test_cluster_is_connected() {
        let mut grid = stone_grid(12);
        let grower = OreClusterGrower::with_probabilities(0.9, 0.05);
        let seed = VoxelPos::new(6, 6, 6);
        grower.grow(&mut grid, seed, BlockType::OreIron, &mut SeededRandom::from_u64(11));

        // Flood fill from the seed must reach every ore cell.
        let mut seen = vec![seed];
        let mut stack = vec![seed];
        while let Some(pos) = stack.pop() {
            for n in grid.neighbors6(pos) {
                if grid.get_at(n) == Ok(BlockType::OreIron) && !seen.contains(&n) {
                    seen.push(n);
                    stack.push(n);
                }
            }
        }
        assert_eq!(seen.len(), grid.count(BlockType::OreIron));
    }

    #[test]
    fn test_seed_outside_grid_is_noop() {
        let mut grid = stone_grid(3);
        let grower = OreClusterGrower::with_probabilities(0.5, 0.1);
        let placed = grower.grow(&mut grid, VoxelPos::new(-1, 0, 0), BlockType::OreIron, &mut FixedDraw(0.0));
        assert_eq!(placed, 0);
        assert_eq!(grid.count(BlockType::Stone), 27);
    }

    #[test]
    fn test_sizes_respect_bound_over_many_seeds() {
        let grower = OreClusterGrower::with_probabilities(0.5, 0.1);
        let mut source = SeededRandom::from_u64(2024);
        for _ in 0..200 {
            let mut grid = stone_grid(7);
            let placed = grower.grow(&mut grid, VoxelPos::new(3, 3, 3), BlockType::OreIron, &mut source);
            assert!((1..=5).contains(&placed));
        }
    }
}
