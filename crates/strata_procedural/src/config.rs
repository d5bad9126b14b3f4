//! # Generation Configuration
//!
//! Every tunable of the pipeline, loadable from TOML:
//!
//! ```toml
//! seed = 1337
//! liquid = "lava"
//! liquid_level = 0.4
//! dirt_depth = 3
//!
//! [dimensions]
//! length = 48
//! height = 32
//! width = 48
//!
//! [[ores]]
//! block = "ore_diamond"
//! spawn_probability = 0.01
//!
//! [[ores]]
//! block = "ore_iron"
//! spawn_probability = 0.01
//! cluster = { initial_probability = 0.5, decay_step = 0.1 }
//! ```
//!
//! Invalid values are rejected by [`GenerationConfig::validate`] before any
//! generation work starts. Nothing is clamped silently.

use std::path::Path;

use serde::{Deserialize, Serialize};
use strata_core::{BlockType, GridDimensions};

use crate::error::{GenerationError, GenerationResult};

/// Cluster walks stop once the propagation probability falls to this value.
pub const PROBABILITY_EPSILON: f64 = 1e-9;

/// Largest accepted magnitude of a pinned noise-space offset.
pub const MAX_SEED_OFFSET: f64 = 1e6;

/// Liquid placed by the liquid pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiquidKind {
    /// Fill low terrain with water.
    #[default]
    Water,
    /// Fill low terrain with lava.
    Lava,
}

impl LiquidKind {
    /// The block this liquid paints.
    #[inline]
    #[must_use]
    pub const fn block(self) -> BlockType {
        match self {
            Self::Water => BlockType::Water,
            Self::Lava => BlockType::Lava,
        }
    }
}

/// Parameters of the self-decaying ore cluster walk.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClusterParams {
    /// Probability of the first propagation step, in `[0, 1]`.
    pub initial_probability: f64,
    /// Amount subtracted after each conversion. Must be positive.
    pub decay_step: f64,
}

impl ClusterParams {
    /// Creates cluster parameters.
    #[must_use]
    pub const fn new(initial_probability: f64, decay_step: f64) -> Self {
        Self {
            initial_probability,
            decay_step,
        }
    }

    /// Checks ranges.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Configuration`] for a probability outside
    /// `[0, 1]` or a non-positive decay step (which would never terminate).
    pub fn validate(&self) -> GenerationResult<()> {
        check_probability("cluster initial_probability", self.initial_probability)?;
        if !self.decay_step.is_finite() || self.decay_step <= 0.0 {
            return Err(GenerationError::Configuration(format!(
                "cluster decay_step must be positive, got {}",
                self.decay_step
            )));
        }
        Ok(())
    }

    /// Upper bound on cluster size, seed included.
    #[must_use]
    pub fn max_cluster_size(&self) -> usize {
        ((self.initial_probability - PROBABILITY_EPSILON) / self.decay_step)
            .ceil()
            .max(1.0) as usize
    }
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self::new(0.5, 0.1)
    }
}

/// One ore seeding pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OreRule {
    /// Ore placed on success.
    pub block: BlockType,
    /// Per-stone-cell chance of seeding, in `[0, 1]`.
    pub spawn_probability: f64,
    /// When present, each seed grows into a cluster.
    #[serde(default)]
    pub cluster: Option<ClusterParams>,
}

impl OreRule {
    /// An ore placed as isolated single blocks.
    #[must_use]
    pub const fn scattered(block: BlockType, spawn_probability: f64) -> Self {
        Self {
            block,
            spawn_probability,
            cluster: None,
        }
    }

    /// An ore whose seeds grow into clusters.
    #[must_use]
    pub const fn clustered(block: BlockType, spawn_probability: f64, cluster: ClusterParams) -> Self {
        Self {
            block,
            spawn_probability,
            cluster: Some(cluster),
        }
    }

    /// Default rule list: scattered diamond, then clustered iron.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::scattered(BlockType::OreDiamond, 0.01),
            Self::clustered(BlockType::OreIron, 0.01, ClusterParams::default()),
        ]
    }

    fn validate(&self) -> GenerationResult<()> {
        if self.block.is_air() || self.block.is_liquid() {
            return Err(GenerationError::Configuration(format!(
                "ore block must be solid, got {}",
                self.block
            )));
        }
        check_probability("ore spawn_probability", self.spawn_probability)?;
        if let Some(cluster) = &self.cluster {
            cluster.validate()?;
        }
        Ok(())
    }
}

/// Full parameter set of one terrain generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Grid size in cells.
    pub dimensions: GridDimensions,
    /// Exclusive bound on stone column height. Defaults to the grid height.
    pub max_height: Option<u32>,
    /// Liquid used by the liquid pass.
    pub liquid: LiquidKind,
    /// Liquid surface as a fraction of grid height, in `[0, 1]`.
    pub liquid_level: f64,
    /// Dirt cells placed beneath each grass block.
    pub dirt_depth: u32,
    /// Ore passes, run in order.
    pub ores: Vec<OreRule>,
    /// Seed for [`crate::SeededRandom`].
    pub seed: u64,
    /// Noise-space offset. Drawn from the random source when absent.
    pub seed_offset: Option<f64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            dimensions: GridDimensions::default(),
            max_height: None,
            liquid: LiquidKind::Water,
            liquid_level: 0.3,
            dirt_depth: 2,
            ores: OreRule::defaults(),
            seed: 0,
            seed_offset: None,
        }
    }
}

impl GenerationConfig {
    /// Default configuration for the given grid size.
    #[must_use]
    pub fn with_dimensions(dimensions: GridDimensions) -> Self {
        Self {
            dimensions,
            ..Self::default()
        }
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Parse`] for malformed TOML and
    /// [`GenerationError::Configuration`] for out-of-range values.
    pub fn from_toml_str(source: &str) -> GenerationResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Io`] if the file cannot be read, otherwise
    /// as [`GenerationConfig::from_toml_str`].
    pub fn from_file(path: &Path) -> GenerationResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Effective height bound for the height field.
    #[inline]
    #[must_use]
    pub fn effective_max_height(&self) -> u32 {
        self.max_height.unwrap_or(self.dimensions.height)
    }

    /// Checks every parameter.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Configuration`] describing the first
    /// invalid value.
    pub fn validate(&self) -> GenerationResult<()> {
        if self.dimensions.is_empty() {
            return Err(GenerationError::Configuration(format!(
                "grid dimensions must be positive, got ({})",
                self.dimensions
            )));
        }
        if self.dimensions.volume().is_none() {
            return Err(GenerationError::Configuration(format!(
                "grid ({}) has more cells than can be addressed",
                self.dimensions
            )));
        }

        let max_height = self.effective_max_height();
        if max_height == 0 || max_height > self.dimensions.height {
            return Err(GenerationError::Configuration(format!(
                "max_height must be in [1, {}], got {max_height}",
                self.dimensions.height
            )));
        }

        check_probability("liquid_level", self.liquid_level)?;

        if let Some(offset) = self.seed_offset {
            if !offset.is_finite() || offset.abs() > MAX_SEED_OFFSET {
                return Err(GenerationError::Configuration(format!(
                    "seed_offset must be within ±{MAX_SEED_OFFSET}, got {offset}"
                )));
            }
        }

        for rule in &self.ores {
            rule.validate()?;
        }

        Ok(())
    }
}

fn check_probability(name: &str, value: f64) -> GenerationResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GenerationError::Configuration(format!(
            "{name} must be in [0, 1], got {value}"
        )))
    }
}
