//! # Height Field
//!
//! One integer per `(x, z)` column: the topmost stone layer before painting.
//!
//! Every column samples the noise at `seed_offset + (x / width, z / depth)`.
//! The offset is drawn once per generation, so adjacent columns read
//! adjacent noise-space points and the surface stays continuous, while
//! separate generations land on different regions of the field.

use crate::random::RandomSource;

/// Column heights derived from 2D coherent noise. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeightMap {
    width: u32,
    depth: u32,
    max_height: u32,
    /// Indexed as `[x * depth + z]`.
    values: Vec<u32>,
}

impl HeightMap {
    /// Builds a height map of `width × depth` columns with values in
    /// `[0, max_height)`.
    ///
    /// `max_height` must be non-zero; configuration validation guarantees it.
    #[must_use]
    pub fn generate<R: RandomSource + ?Sized>(
        width: u32,
        depth: u32,
        max_height: u32,
        seed_offset: f64,
        source: &R,
    ) -> Self {
        let ceiling = max_height.saturating_sub(1);
        let mut values = Vec::with_capacity(width as usize * depth as usize);

        for x in 0..width {
            for z in 0..depth {
                let nx = seed_offset + f64::from(x) / f64::from(width);
                let nz = seed_offset + f64::from(z) / f64::from(depth);
                let sample = source.noise_2d(nx, nz);
                let level = (sample * f64::from(max_height)).floor().max(0.0) as u32;
                values.push(level.min(ceiling));
            }
        }

        Self {
            width,
            depth,
            max_height,
            values,
        }
    }

    /// Columns along X.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Columns along Z.
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    /// Exclusive upper bound of every value.
    #[inline]
    #[must_use]
    pub const fn max_height(&self) -> u32 {
        self.max_height
    }

    /// Height of column `(x, z)`, or `None` outside the map.
    #[inline]
    #[must_use]
    pub fn get(&self, x: u32, z: u32) -> Option<u32> {
        if x >= self.width || z >= self.depth {
            return None;
        }
        self.values
            .get(x as usize * self.depth as usize + z as usize)
            .copied()
    }

    /// Highest column.
    #[must_use]
    pub fn max_value(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// Lowest column.
    #[must_use]
    pub fn min_value(&self) -> u32 {
        self.values.iter().copied().min().unwrap_or(0)
    }
}
