//! # Block Types
//!
//! Every voxel holds exactly one [`BlockType`].
//!
//! ## Atlas Packing
//!
//! Each block maps to one tile of the terrain texture atlas. The tile is
//! stored as a single packed integer:
//!
//! ```text
//! packed = tile_x + ATLAS_PACK_COLUMNS * tile_y
//! ```
//!
//! The renderer-side atlas layout depends on this exact packing, so the
//! mapping is a fixed lookup table and never derived from the enum ordinal.

use serde::{Deserialize, Serialize};

/// Number of tile columns used when packing atlas coordinates.
pub const ATLAS_PACK_COLUMNS: u32 = 24;

/// Packs a tile coordinate into a single atlas index.
#[inline]
#[must_use]
pub const fn pack_tile(tile_x: u32, tile_y: u32) -> u32 {
    tile_x + ATLAS_PACK_COLUMNS * tile_y
}

/// A voxel material.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BlockType {
    /// Empty space. Never rendered.
    #[default]
    Air = 0,
    /// Indestructible floor.
    Bedrock = 1,
    /// Surface layer, one per column.
    Grass = 2,
    /// Subsurface layer beneath grass.
    Dirt = 3,
    /// Base terrain material.
    Stone = 4,
    /// Rock solidified by liquid contact.
    Cobblestone = 5,
    /// Clustered ore.
    OreIron = 6,
    /// Rare single-block ore.
    OreDiamond = 7,
    /// Transparent special block.
    Glass = 8,
    /// Monster spawner special block.
    Spawner = 9,
    /// Liquid.
    Water = 10,
    /// Liquid.
    Lava = 11,
}

impl BlockType {
    /// Every block type, in discriminant order.
    pub const ALL: [Self; 12] = [
        Self::Air,
        Self::Bedrock,
        Self::Grass,
        Self::Dirt,
        Self::Stone,
        Self::Cobblestone,
        Self::OreIron,
        Self::OreDiamond,
        Self::Glass,
        Self::Spawner,
        Self::Water,
        Self::Lava,
    ];

    /// Returns the packed atlas index (`tile_x + 24 * tile_y`).
    #[must_use]
    pub const fn atlas_index(self) -> u32 {
        match self {
            Self::Air => pack_tile(23, 0),
            Self::Bedrock => pack_tile(1, 32),
            Self::Grass => pack_tile(0, 33),
            Self::Dirt => pack_tile(2, 33),
            Self::Stone => pack_tile(1, 33),
            Self::Cobblestone => pack_tile(0, 32),
            Self::OreIron => pack_tile(1, 31),
            Self::OreDiamond => pack_tile(2, 30),
            Self::Glass => pack_tile(1, 30),
            Self::Spawner => pack_tile(1, 29),
            Self::Water => pack_tile(10, 15),
            Self::Lava => pack_tile(10, 14),
        }
    }

    /// Returns true for empty space.
    #[inline]
    #[must_use]
    pub const fn is_air(self) -> bool {
        matches!(self, Self::Air)
    }

    /// Returns true for water and lava.
    #[inline]
    #[must_use]
    pub const fn is_liquid(self) -> bool {
        matches!(self, Self::Water | Self::Lava)
    }

    /// Returns true for anything that is neither air nor liquid.
    #[inline]
    #[must_use]
    pub const fn is_solid(self) -> bool {
        !self.is_air() && !self.is_liquid()
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Air => "air",
            Self::Bedrock => "bedrock",
            Self::Grass => "grass",
            Self::Dirt => "dirt",
            Self::Stone => "stone",
            Self::Cobblestone => "cobblestone",
            Self::OreIron => "ore_iron",
            Self::OreDiamond => "ore_diamond",
            Self::Glass => "glass",
            Self::Spawner => "spawner",
            Self::Water => "water",
            Self::Lava => "lava",
        }
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A tile coordinate inside a texture atlas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AtlasTile {
    /// Column (horizontal tile index).
    pub column: u32,
    /// Row (vertical tile index).
    pub row: u32,
}

impl AtlasTile {
    /// Recovers a tile from a packed index using the given column count.
    ///
    /// `columns` must be non-zero.
    #[inline]
    #[must_use]
    pub const fn unpack(index: u32, columns: u32) -> Self {
        Self {
            column: index % columns,
            row: index / columns,
        }
    }

    /// Tile of a block under the standard packing.
    #[inline]
    #[must_use]
    pub const fn of(block: BlockType) -> Self {
        Self::unpack(block.atlas_index(), ATLAS_PACK_COLUMNS)
    }
}
