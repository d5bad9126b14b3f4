//! # Voxel Mesher
//!
//! Emits one textured cube per non-air cell and merges every cube into a
//! single mesh.
//!
//! Hidden faces between neighbors are kept: every instance is a full
//! 24-vertex cube, translated to `(x, y, z) × block_size` with its UVs
//! remapped into the block's atlas tile. Cells are visited `y`, then `x`,
//! then `z`, so vertex order is stable for a given grid.

use strata_core::{BlockType, VoxelGrid};

use crate::atlas::{AtlasLayout, AtlasRect};
use crate::error::{MeshError, MeshResult};
use crate::mesh::{CubeTemplate, MeshBuffer, CUBE_INDICES, CUBE_VERTICES};

/// Builds combined cube meshes from voxel grids.
#[derive(Clone, Debug)]
pub struct VoxelMesher {
    block_size: [f32; 3],
    atlas: AtlasLayout,
    template: CubeTemplate,
}

impl VoxelMesher {
    /// Creates a mesher for cubes of `block_size` textured from `atlas`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidBlockSize`] unless every component is
    /// finite and positive.
    pub fn new(block_size: [f32; 3], atlas: AtlasLayout) -> MeshResult<Self> {
        if block_size.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(MeshError::InvalidBlockSize(block_size));
        }

        Ok(Self {
            block_size,
            atlas,
            template: CubeTemplate::scaled(block_size),
        })
    }

    /// Side lengths of one block.
    #[inline]
    #[must_use]
    pub const fn block_size(&self) -> [f32; 3] {
        self.block_size
    }

    /// Atlas the UVs are mapped into.
    #[inline]
    #[must_use]
    pub const fn atlas(&self) -> AtlasLayout {
        self.atlas
    }

    /// Meshes `grid`.
    ///
    /// An all-air grid yields an empty mesh.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::TileOutOfAtlas`] if a block present in the grid
    /// has no tile in the atlas.
    pub fn build(&self, grid: &VoxelGrid) -> MeshResult<MeshBuffer> {
        let solid = grid.iter().filter(|(_, block)| !block.is_air()).count();
        let mut mesh = MeshBuffer::with_capacity(
            format!("Combined mesh ({})", grid.dimensions()),
            solid * CUBE_VERTICES,
            solid * CUBE_INDICES,
        );

        let mut rects: [Option<AtlasRect>; BlockType::ALL.len()] = [None; BlockType::ALL.len()];

        // Storage order is y, x, z.
        for (pos, block) in grid.iter() {
            if block.is_air() {
                continue;
            }

            let rect = match rects[block as usize] {
                Some(rect) => rect,
                None => {
                    let rect = self.atlas.tile_rect(block)?;
                    rects[block as usize] = Some(rect);
                    rect
                }
            };

            let offset = [
                pos.x as f32 * self.block_size[0],
                pos.y as f32 * self.block_size[1],
                pos.z as f32 * self.block_size[2],
            ];
            self.push_cube(&mut mesh, offset, &rect);
        }

        tracing::debug!(
            name = %mesh.name,
            cubes = solid,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "mesh built"
        );

        Ok(mesh)
    }

    fn push_cube(&self, mesh: &mut MeshBuffer, offset: [f32; 3], rect: &AtlasRect) {
        let base = mesh.vertex_count() as u32;
        let t = &self.template;

        for v in 0..CUBE_VERTICES {
            let p = t.positions[v];
            mesh.push_vertex(
                [p[0] + offset[0], p[1] + offset[1], p[2] + offset[2]],
                t.normals[v],
                rect.lerp(t.uvs[v]),
            );
        }
        mesh.indices.extend(t.indices.iter().map(|i| i + base));
    }
}

impl Default for VoxelMesher {
    fn default() -> Self {
        Self {
            block_size: [1.0; 3],
            atlas: AtlasLayout::default(),
            template: CubeTemplate::unit(),
        }
    }
}
