//! # Grid Coordinates
//!
//! Positions are signed so that neighbor candidates just outside the grid
//! (x = -1, y = height, ...) can be represented and rejected by bounds checks.

use serde::{Deserialize, Serialize};

/// The six axis-aligned face offsets: -X, +X, -Y, +Y, -Z, +Z.
pub const FACE_OFFSETS: [(i32, i32, i32); 6] = [
    (-1, 0, 0),
    (1, 0, 0),
    (0, -1, 0),
    (0, 1, 0),
    (0, 0, -1),
    (0, 0, 1),
];

/// A cell position inside a voxel grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VoxelPos {
    /// Length axis.
    pub x: i32,
    /// Height axis.
    pub y: i32,
    /// Width axis.
    pub z: i32,
}

impl VoxelPos {
    /// Creates a new position.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns this position moved by the given offset.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Iterates over the six face-adjacent positions, ignoring grid bounds.
    pub fn faces(self) -> impl Iterator<Item = Self> {
        FACE_OFFSETS
            .into_iter()
            .map(move |(dx, dy, dz)| self.offset(dx, dy, dz))
    }
}

impl std::fmt::Display for VoxelPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Grid size in cells: length (X), height (Y), width (Z).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDimensions {
    /// Cells along X.
    pub length: u32,
    /// Cells along Y.
    pub height: u32,
    /// Cells along Z.
    pub width: u32,
}

impl GridDimensions {
    /// Creates a new set of dimensions.
    #[inline]
    #[must_use]
    pub const fn new(length: u32, height: u32, width: u32) -> Self {
        Self {
            length,
            height,
            width,
        }
    }

    /// Total number of cells, or `None` if it does not fit in `usize`.
    #[inline]
    #[must_use]
    pub const fn volume(self) -> Option<usize> {
        match (self.length as usize).checked_mul(self.height as usize) {
            Some(area) => area.checked_mul(self.width as usize),
            None => None,
        }
    }

    /// Returns true when any axis is zero.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.length == 0 || self.height == 0 || self.width == 0
    }

    /// Returns true if the position lies inside `[0, dimension)` on every axis.
    #[inline]
    #[must_use]
    pub const fn contains(self, pos: VoxelPos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && pos.z >= 0
            && (pos.x as u32) < self.length
            && (pos.y as u32) < self.height
            && (pos.z as u32) < self.width
    }
}

impl Default for GridDimensions {
    fn default() -> Self {
        Self::new(32, 24, 32)
    }
}

impl std::fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}; {}; {}", self.length, self.height, self.width)
    }
}
