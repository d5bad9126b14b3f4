//! # Terrain Assembly
//!
//! Generation and meshing in one call, plus the hand-off to a renderer.

use strata_core::VoxelGrid;
use strata_procedural::{GenerationStats, RandomSource, SeededRandom, TerrainGenerator};
use strata_rendering::{MeshBuffer, MeshRenderer};

use crate::error::StrataResult;
use crate::settings::TerrainSettings;

/// A generated terrain and its mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct Terrain {
    /// Painted voxel grid.
    pub grid: VoxelGrid,
    /// Combined cube mesh of the grid.
    pub mesh: MeshBuffer,
    /// Block counts of the grid.
    pub stats: GenerationStats,
}

/// Generates and meshes terrain with `source` supplying all randomness.
///
/// Settings are validated before any generation work.
///
/// # Errors
///
/// Returns [`crate::StrataError::Generation`] or
/// [`crate::StrataError::Mesh`] for invalid settings or a failed stage.
pub fn build_terrain<R: RandomSource + ?Sized>(
    settings: &TerrainSettings,
    source: &mut R,
) -> StrataResult<Terrain> {
    let mesher = settings.mesher()?;
    let generator = TerrainGenerator::new(settings.generation.clone())?;

    let grid = generator.generate(source)?;
    let mesh = mesher.build(&grid)?;
    let stats = GenerationStats::from_grid(&grid);

    tracing::info!(
        mesh = %mesh.name,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "terrain ready"
    );

    Ok(Terrain { grid, mesh, stats })
}

/// [`build_terrain`] with a [`SeededRandom`] from `settings.generation.seed`.
///
/// # Errors
///
/// As [`build_terrain`].
pub fn build_terrain_seeded(settings: &TerrainSettings) -> StrataResult<Terrain> {
    let mut source = SeededRandom::from_u64(settings.generation.seed);
    build_terrain(settings, &mut source)
}

/// Hands a copy of the terrain mesh to `renderer`.
pub fn present<M: MeshRenderer + ?Sized>(terrain: &Terrain, renderer: &mut M) {
    renderer.present(terrain.mesh.clone());
}
