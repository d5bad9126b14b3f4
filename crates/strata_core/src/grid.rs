//! # Voxel Grid
//!
//! A dense 3D array of [`BlockType`] with fixed dimensions.
//!
//! ## Contract
//!
//! - Reads outside the grid fail with [`GridError::OutOfRange`].
//! - Writes outside the grid return `false` and change nothing. Propagation
//!   algorithms routinely produce candidates past the edge, so this is not
//!   an error.
//!
//! ## Layout
//!
//! Storage is height-major (`[y][x][z]`), the same order the mesher walks.

use crate::block::BlockType;
use crate::coord::{GridDimensions, VoxelPos};
use crate::error::{GridError, GridResult};

/// Dense, bounds-checked voxel storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid {
    dimensions: GridDimensions,
    cells: Vec<BlockType>,
}

impl VoxelGrid {
    /// Allocates a grid with every cell set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyDimensions`] if any axis is zero and
    /// [`GridError::TooLarge`] if the cell count overflows `usize`.
    pub fn new(dimensions: GridDimensions, fill: BlockType) -> GridResult<Self> {
        if dimensions.is_empty() {
            return Err(GridError::EmptyDimensions(dimensions));
        }
        let volume = dimensions
            .volume()
            .ok_or(GridError::TooLarge(dimensions))?;

        Ok(Self {
            dimensions,
            cells: vec![fill; volume],
        })
    }

    /// Allocates an all-air grid.
    ///
    /// # Errors
    ///
    /// As [`VoxelGrid::new`].
    pub fn filled_with_air(dimensions: GridDimensions) -> GridResult<Self> {
        Self::new(dimensions, BlockType::Air)
    }

    /// Returns the grid size.
    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Cells along X.
    #[inline]
    #[must_use]
    pub const fn length(&self) -> u32 {
        self.dimensions.length
    }

    /// Cells along Y.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.dimensions.height
    }

    /// Cells along Z.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.dimensions.width
    }

    /// Returns true if the position is inside the grid.
    #[inline]
    #[must_use]
    pub const fn contains(&self, pos: VoxelPos) -> bool {
        self.dimensions.contains(pos)
    }

    #[inline]
    fn index(&self, pos: VoxelPos) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }

        let length = self.dimensions.length as usize;
        let width = self.dimensions.width as usize;
        Some((pos.y as usize * length + pos.x as usize) * width + pos.z as usize)
    }

    /// Reads the block at `(x, y, z)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] if any coordinate is outside the grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32) -> GridResult<BlockType> {
        self.get_at(VoxelPos::new(x, y, z))
    }

    /// Reads the block at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] if `pos` is outside the grid.
    #[inline]
    pub fn get_at(&self, pos: VoxelPos) -> GridResult<BlockType> {
        self.index(pos)
            .map(|idx| self.cells[idx])
            .ok_or(GridError::OutOfRange {
                pos,
                dimensions: self.dimensions,
            })
    }

    /// Writes `block` at `(x, y, z)`.
    ///
    /// Returns `false` without mutating anything when out of bounds.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, z: i32, block: BlockType) -> bool {
        self.set_at(VoxelPos::new(x, y, z), block)
    }

    /// Writes `block` at `pos`.
    ///
    /// Returns `false` without mutating anything when out of bounds.
    #[inline]
    pub fn set_at(&mut self, pos: VoxelPos, block: BlockType) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = block;
                true
            }
            None => false,
        }
    }

    /// Face-adjacent in-bounds neighbors of `pos` (at most six, no diagonals).
    pub fn neighbors6(&self, pos: VoxelPos) -> impl Iterator<Item = VoxelPos> + '_ {
        pos.faces().filter(move |n| self.contains(*n))
    }

    /// Overwrites every cell.
    pub fn fill(&mut self, block: BlockType) {
        self.cells.fill(block);
    }

    /// Number of cells holding `block`.
    #[must_use]
    pub fn count(&self, block: BlockType) -> usize {
        self.cells.iter().filter(|b| **b == block).count()
    }

    /// Topmost non-air `y` in the column, if any.
    #[must_use]
    pub fn column_top(&self, x: i32, z: i32) -> Option<i32> {
        (0..self.dimensions.height as i32)
            .rev()
            .find(|&y| matches!(self.get(x, y, z), Ok(b) if !b.is_air()))
    }

    /// Iterates over every cell in storage order (`y`, then `x`, then `z`).
    pub fn iter(&self) -> impl Iterator<Item = (VoxelPos, BlockType)> + '_ {
        let length = self.dimensions.length as usize;
        let width = self.dimensions.width as usize;
        self.cells.iter().enumerate().map(move |(idx, block)| {
            let z = idx % width;
            let x = (idx / width) % length;
            let y = idx / (width * length);
            (VoxelPos::new(x as i32, y as i32, z as i32), *block)
        })
    }
}
