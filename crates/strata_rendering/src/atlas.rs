//! # Texture Atlas
//!
//! Every block samples one tile of a single atlas texture. A block's packed
//! atlas index is unpacked with the layout's column count into a tile, and
//! the tile into a UV rectangle:
//!
//! ```text
//! u ∈ [column / columns, (column + 1) / columns]
//! v ∈ [row / rows,       (row + 1) / rows]
//! ```

use std::fmt;

use strata_core::{AtlasTile, BlockType, ATLAS_PACK_COLUMNS};

use crate::error::{MeshError, MeshResult};

/// Rows of the stock block atlas.
pub const DEFAULT_ATLAS_ROWS: u32 = 34;

/// Tile grid of an atlas texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AtlasLayout {
    columns: u32,
    rows: u32,
}

impl AtlasLayout {
    /// Creates a layout of `columns × rows` tiles.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidAtlas`] if either count is zero.
    pub fn new(columns: u32, rows: u32) -> MeshResult<Self> {
        if columns == 0 || rows == 0 {
            return Err(MeshError::InvalidAtlas(format!(
                "atlas needs at least one tile, got {columns}x{rows}"
            )));
        }
        Ok(Self { columns, rows })
    }

    /// Derives the tile grid from pixel sizes (`[width, height]`).
    ///
    /// Partial tiles at the right or bottom edge are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidAtlas`] for a zero-sized tile or an
    /// atlas smaller than one tile.
    pub fn from_pixels(tile_px: [u32; 2], atlas_px: [u32; 2]) -> MeshResult<Self> {
        if tile_px[0] == 0 || tile_px[1] == 0 {
            return Err(MeshError::InvalidAtlas(format!(
                "tile size must be positive, got {}x{} px",
                tile_px[0], tile_px[1]
            )));
        }
        Self::new(atlas_px[0] / tile_px[0], atlas_px[1] / tile_px[1])
    }

    /// Tiles per row.
    #[inline]
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Tiles per column.
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Tile of `block` under this layout.
    #[inline]
    #[must_use]
    pub const fn tile(&self, block: BlockType) -> AtlasTile {
        AtlasTile::unpack(block.atlas_index(), self.columns)
    }

    /// UV rectangle sampled by `block`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::TileOutOfAtlas`] if the block's row does not
    /// exist in this layout.
    pub fn tile_rect(&self, block: BlockType) -> MeshResult<AtlasRect> {
        let tile = self.tile(block);
        if tile.row >= self.rows {
            return Err(MeshError::TileOutOfAtlas {
                block,
                column: tile.column,
                row: tile.row,
                layout: *self,
            });
        }

        let columns = self.columns as f32;
        let rows = self.rows as f32;
        Ok(AtlasRect {
            u_min: tile.column as f32 / columns,
            v_min: tile.row as f32 / rows,
            u_max: (tile.column + 1) as f32 / columns,
            v_max: (tile.row + 1) as f32 / rows,
        })
    }
}

impl Default for AtlasLayout {
    fn default() -> Self {
        Self {
            columns: ATLAS_PACK_COLUMNS,
            rows: DEFAULT_ATLAS_ROWS,
        }
    }
}

impl fmt::Display for AtlasLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

/// Sub-rectangle of the atlas in normalized texture coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtlasRect {
    /// Left edge.
    pub u_min: f32,
    /// Edge at the lower row index.
    pub v_min: f32,
    /// Right edge.
    pub u_max: f32,
    /// Edge at the higher row index.
    pub v_max: f32,
}

impl AtlasRect {
    /// Maps a template UV in `[0, 1]²` into this rectangle.
    #[inline]
    #[must_use]
    pub fn lerp(&self, uv: [f32; 2]) -> [f32; 2] {
        [
            self.u_min + (self.u_max - self.u_min) * uv[0],
            self.v_min + (self.v_max - self.v_min) * uv[1],
        ]
    }

    /// Returns true if `uv` lies inside the rectangle, edges included.
    #[must_use]
    pub fn contains(&self, uv: [f32; 2]) -> bool {
        (self.u_min..=self.u_max).contains(&uv[0]) && (self.v_min..=self.v_max).contains(&uv[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = AtlasLayout::default();
        assert_eq!(layout.columns(), 24);
        assert_eq!(layout.rows(), 34);
        for block in BlockType::ALL {
            layout.tile_rect(block).unwrap();
        }
    }

    #[test]
    fn test_grass_rect() {
        let rect = AtlasLayout::default().tile_rect(BlockType::Grass).unwrap();
        assert_eq!(rect.u_min, 0.0);
        assert_eq!(rect.u_max, 1.0 / 24.0);
        assert_eq!(rect.v_min, 33.0 / 34.0);
        assert_eq!(rect.v_max, 1.0);
    }

    #[test]
    fn test_from_pixels() {
        let layout = AtlasLayout::from_pixels([16, 16], [384, 544]).unwrap();
        assert_eq!(layout, AtlasLayout::default());

        assert!(matches!(
            AtlasLayout::from_pixels([0, 16], [384, 544]),
            Err(MeshError::InvalidAtlas(_))
        ));
        assert!(matches!(
            AtlasLayout::from_pixels([32, 32], [16, 16]),
            Err(MeshError::InvalidAtlas(_))
        ));
    }

    #[test]
    fn test_short_atlas_rejects_low_rows() {
        let layout = AtlasLayout::new(24, 16).unwrap();
        assert!(matches!(
            layout.tile_rect(BlockType::Stone),
            Err(MeshError::TileOutOfAtlas { row: 33, .. })
        ));
        layout.tile_rect(BlockType::Lava).unwrap();
    }

    #[test]
    fn test_lerp_corners() {
        let rect = AtlasRect {
            u_min: 0.25,
            v_min: 0.5,
            u_max: 0.5,
            v_max: 0.75,
        };
        assert_eq!(rect.lerp([0.0, 0.0]), [0.25, 0.5]);
        assert_eq!(rect.lerp([1.0, 1.0]), [0.5, 0.75]);
        assert!(rect.contains(rect.lerp([0.5, 0.5])));
    }
}
