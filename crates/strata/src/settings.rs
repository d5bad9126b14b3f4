//! # Terrain Settings
//!
//! One TOML document drives the whole pipeline:
//!
//! ```toml
//! block_size = [1.0, 1.0, 1.0]
//!
//! [generation]
//! seed = 7
//! liquid = "water"
//!
//! [generation.dimensions]
//! length = 32
//! height = 24
//! width = 32
//!
//! [atlas]
//! columns = 24
//! rows = 34
//! ```
//!
//! Every table and key is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};
use strata_core::ATLAS_PACK_COLUMNS;
use strata_procedural::GenerationConfig;
use strata_rendering::{AtlasLayout, VoxelMesher, DEFAULT_ATLAS_ROWS};

use crate::error::StrataResult;

/// Tile grid of the block atlas texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasSettings {
    /// Tiles per row.
    pub columns: u32,
    /// Tiles per column.
    pub rows: u32,
}

impl Default for AtlasSettings {
    fn default() -> Self {
        Self {
            columns: ATLAS_PACK_COLUMNS,
            rows: DEFAULT_ATLAS_ROWS,
        }
    }
}

/// Generation and meshing parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainSettings {
    /// Terrain generation.
    pub generation: GenerationConfig,
    /// Side lengths of one block in mesh units.
    pub block_size: [f32; 3],
    /// Atlas the block UVs map into.
    pub atlas: AtlasSettings,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            block_size: [1.0; 3],
            atlas: AtlasSettings::default(),
        }
    }
}

impl TerrainSettings {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StrataError::Parse`] for malformed TOML, otherwise
    /// as [`TerrainSettings::validate`].
    pub fn from_toml_str(source: &str) -> StrataResult<Self> {
        let settings: Self = toml::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StrataError::Io`] if the file cannot be read,
    /// otherwise as [`TerrainSettings::from_toml_str`].
    pub fn from_file(path: &Path) -> StrataResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Checks generation and meshing parameters.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StrataError::Generation`] or
    /// [`crate::StrataError::Mesh`] for the first invalid value.
    pub fn validate(&self) -> StrataResult<()> {
        self.generation.validate()?;
        self.mesher()?;
        Ok(())
    }

    /// Atlas layout described by these settings.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StrataError::Mesh`] for an empty atlas.
    pub fn atlas_layout(&self) -> StrataResult<AtlasLayout> {
        Ok(AtlasLayout::new(self.atlas.columns, self.atlas.rows)?)
    }

    /// Mesher described by these settings.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StrataError::Mesh`] for an empty atlas or a
    /// non-positive block size.
    pub fn mesher(&self) -> StrataResult<VoxelMesher> {
        Ok(VoxelMesher::new(self.block_size, self.atlas_layout()?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StrataError;
    use strata_core::GridDimensions;
    use strata_procedural::LiquidKind;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(TerrainSettings::from_toml_str("").unwrap(), TerrainSettings::default());
    }

    #[test]
    fn test_nested_tables() {
        let settings = TerrainSettings::from_toml_str(
            r#"
            block_size = [0.5, 0.5, 0.5]

            [generation]
            seed = 7
            liquid = "lava"

            [generation.dimensions]
            length = 8
            height = 6
            width = 10

            [atlas]
            rows = 40
            "#,
        )
        .unwrap();

        assert_eq!(settings.block_size, [0.5; 3]);
        assert_eq!(settings.generation.seed, 7);
        assert_eq!(settings.generation.liquid, LiquidKind::Lava);
        assert_eq!(settings.generation.dimensions, GridDimensions::new(8, 6, 10));
        assert_eq!(settings.atlas, AtlasSettings { columns: 24, rows: 40 });
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            TerrainSettings::from_toml_str("block_size = [1.0, 0.0, 1.0]"),
            Err(StrataError::Mesh(_))
        ));
        assert!(matches!(
            TerrainSettings::from_toml_str("[atlas]\ncolumns = 0"),
            Err(StrataError::Mesh(_))
        ));
        assert!(matches!(
            TerrainSettings::from_toml_str("[generation]\ndirt_depth = -1"),
            Err(StrataError::Parse(_))
        ));
        assert!(matches!(
            TerrainSettings::from_toml_str("[generation]\nliquid_level = 1.5"),
            Err(StrataError::Generation(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = TerrainSettings::from_file(Path::new("/nonexistent/strata.toml"));
        assert!(matches!(result, Err(StrataError::Io(_))));
    }
}
