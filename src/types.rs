//! Vertex data for the two hardcoded shapes.
//!
//! Positions and texture coordinates live in separate arrays, each bound to
//! its own attribute slot with two floats per vertex.

use bytemuck::{Pod, Zeroable};

/// A 2D vertex position in model space.
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Position {
    /// `[x, y]`.
    pub xy: [f32; 2],
}

/// A texture coordinate. `v = 0` is the first row of the decoded image.
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct TexCoord {
    /// `[u, v]`.
    pub uv: [f32; 2],
}

const fn p(x: f32, y: f32) -> Position {
    Position { xy: [x, y] }
}

const fn t(u: f32, v: f32) -> TexCoord {
    TexCoord { uv: [u, v] }
}

/// Triangle-list geometry with one texture coordinate per vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mesh {
    /// One position per vertex.
    pub positions: &'static [Position],
    /// One texture coordinate per vertex, parallel to `positions`.
    pub tex_coords: &'static [TexCoord],
}

impl Mesh {
    /// Unit quad centred on the origin, as two triangles.
    pub const QUAD: Self = Self {
        positions: &[
            p(-0.5, -0.5),
            p(0.5, -0.5),
            p(0.5, 0.5),
            p(-0.5, -0.5),
            p(0.5, 0.5),
            p(-0.5, 0.5),
        ],
        tex_coords: &[
            t(0.0, 1.0),
            t(1.0, 1.0),
            t(1.0, 0.0),
            t(0.0, 1.0),
            t(1.0, 0.0),
            t(0.0, 0.0),
        ],
    };

    /// Small triangle sitting right of the origin.
    pub const TRIANGLE: Self = Self {
        positions: &[p(0.0, -0.25), p(0.5, -0.25), p(0.25, 0.25)],
        tex_coords: &[t(0.0, 1.0), t(1.0, 1.0), t(0.5, 0.0)],
    };

    /// Number of vertices passed to the draw call.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}
