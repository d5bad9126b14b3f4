//! Renderer seam.
//!
//! Meshing stops at a finished [`MeshBuffer`]. Whatever draws it (a GPU
//! backend, an exporter, a test double) implements [`MeshRenderer`].

use crate::mesh::MeshBuffer;

/// Consumer of finished meshes.
pub trait MeshRenderer {
    /// Takes ownership of a mesh for display.
    fn present(&mut self, mesh: MeshBuffer);
}

impl<T: MeshRenderer + ?Sized> MeshRenderer for &mut T {
    fn present(&mut self, mesh: MeshBuffer) {
        (**self).present(mesh);
    }
}

impl MeshRenderer for Vec<MeshBuffer> {
    fn present(&mut self, mesh: MeshBuffer) {
        self.push(mesh);
    }
}
