//! Fixed demo parameters.
//!
//! The demo is not user-configurable; [`DemoConfig::default`] is the one
//! configuration the binary runs with. Keeping the constants in one struct lets
//! tests build a scene without touching the window layer.

use std::path::PathBuf;

use crate::camera::OrthoBounds;

/// Everything the window layer needs to set the demo up.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Window title.
    pub title: String,
    /// Window width in physical pixels. Also the viewport width.
    pub width: u32,
    /// Window height in physical pixels. Also the viewport height.
    pub height: u32,
    /// Background clear color, RGBA.
    pub clear_color: [f32; 4],
    /// Vertex-stage shader source.
    pub vertex_shader: PathBuf,
    /// Fragment-stage shader source.
    pub fragment_shader: PathBuf,
    /// Texture for the rotating quad.
    pub square_texture: PathBuf,
    /// Texture for the sliding triangle.
    pub triangle_texture: PathBuf,
    /// Orthographic camera bounds.
    pub ortho: OrthoBounds,
    /// Upper bound on the first frame's delta time, in seconds.
    pub max_frame_delta: Option<f32>,
    /// Request a swap interval of one (vsync).
    pub vsync: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Hello, Delta Time!".to_owned(),
            width: 640,
            height: 480,
            clear_color: [0.0, 0.75, 0.85, 1.0],
            vertex_shader: PathBuf::from("shaders/vertex_textured.glsl"),
            fragment_shader: PathBuf::from("shaders/fragment_textured.glsl"),
            square_texture: PathBuf::from("assets/square.png"),
            triangle_texture: PathBuf::from("assets/triangle.png"),
            ortho: OrthoBounds::DEFAULT,
            max_frame_delta: Some(0.25),
            vsync: true,
        }
    }
}
