//! Block statistics of a generated grid.

use std::fmt;

use strata_core::{BlockType, VoxelGrid};

/// Per-block cell counts of a finished grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    counts: [usize; BlockType::ALL.len()],
}

impl GenerationStats {
    /// Counts every cell of `grid`.
    #[must_use]
    pub fn from_grid(grid: &VoxelGrid) -> Self {
        let mut counts = [0; BlockType::ALL.len()];
        for (_, block) in grid.iter() {
            counts[block as usize] += 1;
        }
        Self { counts }
    }

    /// Cells holding `block`.
    #[inline]
    #[must_use]
    pub fn count(&self, block: BlockType) -> usize {
        self.counts[block as usize]
    }

    /// Cells holding neither air nor liquid.
    #[must_use]
    pub fn solid_cells(&self) -> usize {
        self.iter()
            .filter(|(block, _)| block.is_solid())
            .map(|(_, count)| count)
            .sum()
    }

    /// Cells holding anything but air.
    #[must_use]
    pub fn non_air_cells(&self) -> usize {
        self.total() - self.count(BlockType::Air)
    }

    /// Total cells counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(block, count)` for every block type, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockType, usize)> + '_ {
        BlockType::ALL.iter().map(|block| (*block, self.count(*block)))
    }
}

impl fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total().max(1) as f64;
        for (block, count) in self.iter().filter(|(_, count)| *count > 0) {
            writeln!(
                f,
                "  {:<14} {:>8}  {:>6.2}%",
                block.name(),
                count,
                count as f64 * 100.0 / total
            )?;
        }
        write!(f, "  {:<14} {:>8}", "solid", self.solid_cells())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::GridDimensions;

    #[test]
    fn test_counts_match_grid() {
        let mut grid = VoxelGrid::filled_with_air(GridDimensions::new(2, 3, 2)).unwrap();
        grid.set(0, 0, 0, BlockType::Stone);
        grid.set(1, 0, 0, BlockType::Stone);
        grid.set(0, 1, 0, BlockType::Water);

        let stats = GenerationStats::from_grid(&grid);

        assert_eq!(stats.count(BlockType::Stone), 2);
        assert_eq!(stats.count(BlockType::Water), 1);
        assert_eq!(stats.count(BlockType::Air), 9);
        assert_eq!(stats.solid_cells(), 2);
        assert_eq!(stats.total(), 12);
        assert_eq!(stats.non_air_cells(), 3);
    }

    #[test]
    fn test_display_lists_present_blocks() {
        let grid = VoxelGrid::new(GridDimensions::new(2, 2, 2), BlockType::Dirt).unwrap();
        let text = GenerationStats::from_grid(&grid).to_string();
        assert!(text.contains(BlockType::Dirt.name()));
        assert!(!text.contains(BlockType::Lava.name()));
    }
}
