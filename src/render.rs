//! The OpenGL renderer: owns the textured program and vertex buffers, and
//! implements [`DrawBackend`] with raw glow calls.

use std::sync::Arc;

use glam::Mat4;
use glow::HasContext;

use crate::{
    backend::DrawBackend,
    camera::Camera,
    error::{Error, Result},
    shaders::{self, ShaderSources},
    types::Mesh,
};

/// Cached attribute and uniform locations for the textured program.
struct ProgramInputs {
    /// `position`: model-space vec2.
    position: u32,
    /// `texCoord`: vec2 texture coordinate.
    tex_coord: u32,
    /// `modelMatrix`: per-shape transform.
    model: glow::UniformLocation,
    /// `viewMatrix`: camera view.
    view: glow::UniformLocation,
    /// `projectionMatrix`: camera projection.
    projection: glow::UniformLocation,
    /// `diffuse`: texture unit index (always 0).
    diffuse: glow::UniformLocation,
}

impl ProgramInputs {
    unsafe fn locate(gl: &glow::Context, program: glow::Program) -> Result<Self> {
        let attrib = |name: &'static str| {
            unsafe { gl.get_attrib_location(program, name) }.ok_or(Error::MissingShaderInput(name))
        };
        let uniform = |name: &'static str| {
            unsafe { gl.get_uniform_location(program, name) }
                .ok_or(Error::MissingShaderInput(name))
        };

        Ok(Self {
            position: attrib("position")?,
            tex_coord: attrib("texCoord")?,
            model: uniform("modelMatrix")?,
            view: uniform("viewMatrix")?,
            projection: uniform("projectionMatrix")?,
            diffuse: uniform("diffuse")?,
        })
    }
}

/// Draws textured triangle lists with a single shader program.
///
/// Positions and texture coordinates are streamed into two separate buffers,
/// one per attribute slot, each time a shape is drawn.
///
/// # Safety
///
/// Every method issues raw GL calls and requires the context passed to
/// [`new`](Self::new) to be current. Call [`destroy`](Self::destroy) before
/// the context is dropped.
pub struct GlRenderer {
    /// The OpenGL context.
    gl: Arc<glow::Context>,

    /// Linked textured program.
    program: glow::Program,
    /// Cached locations for [`program`](Self::program).
    inputs: ProgramInputs,

    /// Vertex array holding the two attribute bindings.
    vao: glow::VertexArray,
    /// Position stream.
    position_vbo: glow::Buffer,
    /// Texture coordinate stream.
    tex_coord_vbo: glow::Buffer,
}

impl GlRenderer {
    /// Compile the program, create buffers, and set fixed pipeline state:
    /// viewport, clear color, alpha blending, and the camera uniforms.
    ///
    /// # Safety
    ///
    /// The `gl` context must be current and valid.
    ///
    /// # Errors
    ///
    /// Fails if shader compilation or linking fails, if the program lacks an
    /// expected input, or if a GL object cannot be created.
    pub unsafe fn new(
        gl: Arc<glow::Context>,
        sources: &ShaderSources,
        camera: &Camera,
        viewport: [i32; 2],
        clear_color: [f32; 4],
    ) -> Result<Self> {
        let program = unsafe { shaders::compile_program(&gl, sources) }?;
        let inputs = match unsafe { ProgramInputs::locate(&gl, program) } {
            Ok(inputs) => inputs,
            Err(e) => {
                unsafe { gl.delete_program(program) };
                return Err(e);
            }
        };

        let (vao, position_vbo, tex_coord_vbo) = unsafe {
            let vao = gl.create_vertex_array().map_err(Error::Gl)?;
            let position_vbo = gl.create_buffer().map_err(Error::Gl)?;
            let tex_coord_vbo = gl.create_buffer().map_err(Error::Gl)?;
            (vao, position_vbo, tex_coord_vbo)
        };

        unsafe {
            gl.viewport(0, 0, viewport[0], viewport[1]);
            gl.clear_color(clear_color[0], clear_color[1], clear_color[2], clear_color[3]);
            gl.enable(glow::BLEND);
            gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);

            gl.use_program(Some(program));
            gl.uniform_matrix_4_f32_slice(
                Some(&inputs.projection),
                false,
                &camera.projection().to_cols_array(),
            );
            gl.uniform_matrix_4_f32_slice(Some(&inputs.view), false, &camera.view().to_cols_array());
            gl.uniform_1_i32(Some(&inputs.diffuse), 0);

            gl.bind_vertex_array(Some(vao));
            gl.active_texture(glow::TEXTURE0);
        }

        log::debug!(
            "textured program ready (position={}, texCoord={})",
            inputs.position,
            inputs.tex_coord
        );

        Ok(Self {
            gl,
            program,
            inputs,
            vao,
            position_vbo,
            tex_coord_vbo,
        })
    }

    /// Stream `data` into `buffer` and point attribute `slot` at it.
    unsafe fn stream_attribute(&self, slot: u32, buffer: glow::Buffer, data: &[u8]) {
        let gl = &self.gl;
        unsafe {
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, data, glow::STREAM_DRAW);
            gl.vertex_attrib_pointer_f32(slot, 2, glow::FLOAT, false, 0, 0);
            gl.enable_vertex_attrib_array(slot);
        }
    }

    /// Delete the program, buffers, vertex array, and the given textures.
    ///
    /// # Safety
    ///
    /// Must be called with the same GL context that was used to create the
    /// renderer, and must be called exactly once.
    pub unsafe fn destroy(&self, textures: impl IntoIterator<Item = glow::Texture>) {
        let gl = &self.gl;
        unsafe {
            gl.bind_vertex_array(None);
            gl.use_program(None);
            for texture in textures {
                gl.delete_texture(texture);
            }
            gl.delete_buffer(self.position_vbo);
            gl.delete_buffer(self.tex_coord_vbo);
            gl.delete_vertex_array(self.vao);
            gl.delete_program(self.program);
        }
    }
}

impl DrawBackend for GlRenderer {
    type Texture = glow::Texture;

    fn clear(&mut self) {
        unsafe { self.gl.clear(glow::COLOR_BUFFER_BIT) };
    }

    fn upload_vertices(&mut self, mesh: &Mesh) {
        unsafe {
            self.stream_attribute(
                self.inputs.position,
                self.position_vbo,
                bytemuck::cast_slice(mesh.positions),
            );
            self.stream_attribute(
                self.inputs.tex_coord,
                self.tex_coord_vbo,
                bytemuck::cast_slice(mesh.tex_coords),
            );
        }
    }

    fn set_model_matrix(&mut self, model: &Mat4) {
        unsafe {
            self.gl
                .uniform_matrix_4_f32_slice(Some(&self.inputs.model), false, &model.to_cols_array());
        }
    }

    fn bind_texture(&mut self, texture: &Self::Texture) {
        unsafe { self.gl.bind_texture(glow::TEXTURE_2D, Some(*texture)) };
    }

    /// # Panics
    ///
    /// Panics if the vertex count exceeds `i32::MAX`.
    fn draw_triangles(&mut self, vertex_count: usize) {
        let count = i32::try_from(vertex_count).expect("vertex count exceeds i32::MAX");
        unsafe { self.gl.draw_arrays(glow::TRIANGLES, 0, count) };
    }

    fn disable_vertex_attributes(&mut self) {
        unsafe {
            self.gl.disable_vertex_attrib_array(self.inputs.position);
            self.gl.disable_vertex_attrib_array(self.inputs.tex_coord);
        }
    }
}
