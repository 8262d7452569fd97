//! Application state: everything the render loop touches, in one place.

use std::sync::Arc;

use crate::{
    config::DemoConfig,
    error::{Error, Result},
    render::GlRenderer,
    scene::Scene,
    shaders::ShaderSources,
    texture,
    time::FrameClock,
};

/// Scene, clock, and renderer for the running demo.
///
/// Created once the GL context is current; torn down with
/// [`destroy`](Self::destroy) while the context is still alive.
pub struct Demo {
    scene: Scene<glow::Texture>,
    clock: FrameClock,
    renderer: GlRenderer,
}

impl Demo {
    /// Load shaders and textures and build the fixed scene.
    ///
    /// # Safety
    ///
    /// `gl` must be current on this thread.
    ///
    /// # Errors
    ///
    /// Fails on the first asset that cannot be read, decoded, or compiled.
    pub unsafe fn new(gl: Arc<glow::Context>, config: &DemoConfig) -> Result<Self> {
        let sources = ShaderSources::load(&config.vertex_shader, &config.fragment_shader)?;

        let square = unsafe { texture::load_texture(&gl, &config.square_texture) }?;
        let triangle = unsafe { texture::load_texture(&gl, &config.triangle_texture) }?;
        let scene = Scene::demo(square, triangle, config.ortho);

        let viewport = [gl_dimension(config.width)?, gl_dimension(config.height)?];
        let renderer = unsafe {
            GlRenderer::new(gl, &sources, scene.camera(), viewport, config.clear_color)
        }?;

        Ok(Self {
            scene,
            clock: FrameClock::new(config.max_frame_delta),
            renderer,
        })
    }

    /// One iteration: read the clock, advance the shapes, draw them.
    pub fn frame(&mut self) {
        let time = self.clock.tick();
        if time.frame_index % 600 == 0 {
            log::debug!("frame {} dt={:.4}s", time.frame_index, time.dt);
        }
        self.scene.update(time.dt);
        self.scene.draw(&mut self.renderer);
    }

    /// Release every GL object the demo created.
    ///
    /// # Safety
    ///
    /// The context used in [`new`](Self::new) must still be current.
    pub unsafe fn destroy(self) {
        let Self {
            scene, renderer, ..
        } = self;
        unsafe { renderer.destroy(scene.into_textures()) };
        log::debug!("GL resources released");
    }
}

fn gl_dimension(value: u32) -> Result<i32> {
    i32::try_from(value).map_err(|_| Error::Config(format!("window dimension {value} too large")))
}
