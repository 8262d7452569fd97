//! The GPU calls issued by draw dispatch.
//!
//! [`Scene::draw`](crate::scene::Scene::draw) only talks to this trait, so the
//! dispatch order can be checked in tests without an OpenGL context. The glow
//! implementation lives in [`render`](crate::render).

use glam::Mat4;

use crate::types::Mesh;

/// Immediate-style draw interface for textured triangle lists.
pub trait DrawBackend {
    /// Opaque texture handle.
    type Texture;

    /// Clear the color buffer.
    fn clear(&mut self);

    /// Upload positions and texture coordinates to the two attribute slots
    /// and enable them.
    fn upload_vertices(&mut self, mesh: &Mesh);

    /// Set the program's model matrix.
    fn set_model_matrix(&mut self, model: &Mat4);

    /// Bind `texture` to the sampled unit.
    fn bind_texture(&mut self, texture: &Self::Texture);

    /// Draw `vertex_count` vertices as a triangle list.
    fn draw_triangles(&mut self, vertex_count: usize);

    /// Disable both attribute slots.
    fn disable_vertex_attributes(&mut self);
}
