//! # Mesh Buffers
//!
//! Vertex attributes stored as parallel arrays plus a `u32` index buffer.
//! [`MeshBuffer::vertices`] interleaves them into [`MeshVertex`] for upload.

use bytemuck::{Pod, Zeroable};

use crate::error::{MeshError, MeshResult};

// =============================================================================
// VERTEX FORMAT
// =============================================================================

/// Interleaved vertex for upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Position [x, y, z]
    pub position: [f32; 3],
    /// Normal direction [nx, ny, nz]
    pub normal: [f32; 3],
    /// Atlas texture coordinates [u, v]
    pub uv: [f32; 2],
}

// =============================================================================
// MESH BUFFER
// =============================================================================

/// Axis-aligned bounds of a mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshBounds {
    /// Smallest coordinate on each axis.
    pub min: [f32; 3],
    /// Largest coordinate on each axis.
    pub max: [f32; 3],
}

impl MeshBounds {
    /// Extent on each axis.
    #[must_use]
    pub fn size(&self) -> [f32; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }
}

/// Renderable triangle mesh.
///
/// `positions`, `normals` and `uvs` always have equal length; every index
/// is below that length and the index count is a multiple of three.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffer {
    /// Human-readable label.
    pub name: String,
    /// Vertex positions.
    pub positions: Vec<[f32; 3]>,
    /// Per-vertex normals.
    pub normals: Vec<[f32; 3]>,
    /// Per-vertex atlas coordinates.
    pub uvs: Vec<[f32; 2]>,
    /// Triangle list indices.
    pub indices: Vec<u32>,
}

impl MeshBuffer {
    /// Creates an empty mesh.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates an empty mesh with room for `vertices` and `indices`.
    #[must_use]
    pub fn with_capacity(name: impl Into<String>, vertices: usize, indices: usize) -> Self {
        Self {
            name: name.into(),
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            uvs: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Appends one vertex and returns its index.
    #[inline]
    pub fn push_vertex(&mut self, position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
        index
    }

    /// Concatenates `other` into this mesh.
    ///
    /// Its indices are offset by this mesh's vertex count.
    pub fn append(&mut self, other: &Self) {
        let base = self.vertex_count() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }

    /// Interleaved vertices.
    #[must_use]
    pub fn vertices(&self) -> Vec<MeshVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((position, normal), uv)| MeshVertex {
                position: *position,
                normal: *normal,
                uv: *uv,
            })
            .collect()
    }

    /// Axis-aligned bounds, or `None` for an empty mesh.
    #[must_use]
    pub fn bounds(&self) -> Option<MeshBounds> {
        let first = *self.positions.first()?;
        let bounds = self.positions.iter().fold(
            MeshBounds {
                min: first,
                max: first,
            },
            |mut acc, p| {
                for axis in 0..3 {
                    acc.min[axis] = acc.min[axis].min(p[axis]);
                    acc.max[axis] = acc.max[axis].max(p[axis]);
                }
                acc
            },
        );
        Some(bounds)
    }

    /// Checks the buffer invariants.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::MalformedBuffer`] describing the first violation.
    pub fn validate(&self) -> MeshResult<()> {
        let vertices = self.vertex_count();
        if self.normals.len() != vertices || self.uvs.len() != vertices {
            return Err(MeshError::MalformedBuffer(format!(
                "attribute lengths differ: {} positions, {} normals, {} uvs",
                vertices,
                self.normals.len(),
                self.uvs.len()
            )));
        }
        if self.indices.len() % 3 != 0 {
            return Err(MeshError::MalformedBuffer(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }
        if let Some(bad) = self.indices.iter().find(|i| **i as usize >= vertices) {
            return Err(MeshError::MalformedBuffer(format!(
                "index {bad} out of range for {vertices} vertices"
            )));
        }
        Ok(())
    }
}

// =============================================================================
// CUBE TEMPLATE
// =============================================================================

/// Vertices of the cube template (4 per face).
pub const CUBE_VERTICES: usize = 24;
/// Indices of the cube template (2 triangles per face).
pub const CUBE_INDICES: usize = 36;

/// Face order of the cube template.
const FACES: [([usize; 4], [f32; 3]); 6] = [
    // Bottom
    ([0, 1, 2, 3], [0.0, -1.0, 0.0]),
    // Left
    ([7, 4, 0, 3], [-1.0, 0.0, 0.0]),
    // Front
    ([4, 5, 1, 0], [0.0, 0.0, 1.0]),
    // Back
    ([6, 7, 3, 2], [0.0, 0.0, -1.0]),
    // Right
    ([5, 6, 2, 1], [1.0, 0.0, 0.0]),
    // Top
    ([7, 6, 5, 4], [0.0, 1.0, 0.0]),
];

/// Unit cube corners. Bottom ring then top ring.
const CORNERS: [[f32; 3]; 8] = [
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [1.0, 0.0, 0.0],
    [0.0, 0.0, 0.0],
    [0.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
];

/// Template UVs, identical on every face.
const FACE_UVS: [[f32; 2]; 4] = [[1.0, 1.0], [0.0, 1.0], [0.0, 0.0], [1.0, 0.0]];

/// A cube of one block, spanning `[0, block_size]` on each axis.
///
/// Faces do not share vertices so each keeps a flat normal. Triangles wind
/// clockwise seen from outside in a left-handed, Y-up frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CubeTemplate {
    /// Corner positions.
    pub positions: [[f32; 3]; CUBE_VERTICES],
    /// Flat face normals.
    pub normals: [[f32; 3]; CUBE_VERTICES],
    /// UVs in `[0, 1]²`, remapped per block by the atlas.
    pub uvs: [[f32; 2]; CUBE_VERTICES],
    /// Triangle list into the 24 vertices.
    pub indices: [u32; CUBE_INDICES],
}

impl CubeTemplate {
    /// Template with sides of `block_size`.
    #[must_use]
    pub fn scaled(block_size: [f32; 3]) -> Self {
        let mut positions = [[0.0; 3]; CUBE_VERTICES];
        let mut normals = [[0.0; 3]; CUBE_VERTICES];
        let mut uvs = [[0.0; 2]; CUBE_VERTICES];
        let mut indices = [0; CUBE_INDICES];

        for (face, (corners, normal)) in FACES.iter().enumerate() {
            let base = face * 4;
            for (i, corner) in corners.iter().enumerate() {
                let c = CORNERS[*corner];
                positions[base + i] = [c[0] * block_size[0], c[1] * block_size[1], c[2] * block_size[2]];
                normals[base + i] = *normal;
                uvs[base + i] = FACE_UVS[i];
            }

            let b = base as u32;
            indices[face * 6..face * 6 + 6].copy_from_slice(&[b + 3, b + 1, b, b + 3, b + 2, b + 1]);
        }

        Self {
            positions,
            normals,
            uvs,
            indices,
        }
    }

    /// Unit cube.
    #[must_use]
    pub fn unit() -> Self {
        Self::scaled([1.0; 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    #[test]
    fn test_template_sizes() {
        let cube = CubeTemplate::unit();
        assert!(cube.indices.iter().all(|i| (*i as usize) < CUBE_VERTICES));
        assert!(cube.uvs.iter().flatten().all(|t| *t == 0.0 || *t == 1.0));
    }

    #[test]
    fn test_faces_lie_on_their_plane() {
        let cube = CubeTemplate::unit();
        for v in 0..CUBE_VERTICES {
            let n = cube.normals[v];
            let p = cube.positions[v];
            for axis in 0..3 {
                if n[axis] > 0.0 {
                    assert_eq!(p[axis], 1.0);
                } else if n[axis] < 0.0 {
                    assert_eq!(p[axis], 0.0);
                }
            }
        }
    }

    #[test]
    fn test_winding_is_clockwise_from_outside() {
        // (b - a) x (c - a) of a triangle that is clockwise from outside in a
        // left-handed frame points along the outward normal.
        let cube = CubeTemplate::unit();
        for tri in cube.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| cube.positions[i as usize]);
            let n = cross(sub(b, a), sub(c, a));
            let face_normal = cube.normals[tri[0] as usize];
            let dot: f32 = (0..3).map(|k| n[k] * face_normal[k]).sum();
            assert!(dot > 0.0, "triangle {tri:?} faces the wrong way");
        }
    }

    #[test]
    fn test_scaled_template() {
        let cube = CubeTemplate::scaled([2.0, 0.5, 1.0]);
        let max = cube.positions.iter().fold([0.0f32; 3], |m, p| {
            [m[0].max(p[0]), m[1].max(p[1]), m[2].max(p[2])]
        });
        assert_eq!(max, [2.0, 0.5, 1.0]);
    }

    #[test]
    fn test_append_offsets_indices() {
        let mut a = MeshBuffer::new("a");
        a.push_vertex([0.0; 3], [0.0, 1.0, 0.0], [0.0; 2]);
        a.push_vertex([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0]);
        a.push_vertex([0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [0.0, 1.0]);
        a.indices.extend([0, 1, 2]);

        let b = a.clone();
        a.append(&b);

        assert_eq!(a.vertex_count(), 6);
        assert_eq!(a.indices, vec![0, 1, 2, 3, 4, 5]);
        a.validate().unwrap();
    }

    #[test]
    fn test_validate_catches_bad_buffers() {
        let mut mesh = MeshBuffer::new("bad");
        mesh.push_vertex([0.0; 3], [0.0; 3], [0.0; 2]);
        mesh.indices.extend([0, 0]);
        assert!(matches!(mesh.validate(), Err(MeshError::MalformedBuffer(_))));

        mesh.indices.push(1);
        assert!(matches!(mesh.validate(), Err(MeshError::MalformedBuffer(_))));

        mesh.indices = vec![0, 0, 0];
        mesh.uvs.clear();
        assert!(matches!(mesh.validate(), Err(MeshError::MalformedBuffer(_))));
    }

    #[test]
    fn test_vertices_are_pod() {
        let mut mesh = MeshBuffer::new("pod");
        mesh.push_vertex([1.0, 2.0, 3.0], [0.0, 1.0, 0.0], [0.5, 0.5]);
        let vertices = mesh.vertices();
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), std::mem::size_of::<MeshVertex>());
        assert_eq!(std::mem::size_of::<MeshVertex>(), 32);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(MeshBuffer::new("empty").bounds(), None);

        let mut mesh = MeshBuffer::new("b");
        mesh.push_vertex([1.0, -2.0, 3.0], [0.0; 3], [0.0; 2]);
        mesh.push_vertex([-1.0, 4.0, 0.0], [0.0; 3], [0.0; 2]);
        let bounds = mesh.bounds().unwrap();
        assert_eq!(bounds.min, [-1.0, -2.0, 0.0]);
        assert_eq!(bounds.max, [1.0, 4.0, 3.0]);
        assert_eq!(bounds.size(), [2.0, 6.0, 3.0]);
    }
}
