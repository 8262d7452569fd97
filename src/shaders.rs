//! Textured shader program: source loading and compilation helpers.
//!
//! The sources live on disk under `shaders/` and target GLSL 1.40
//! (OpenGL 3.1).
//!
//! # Program interface
//!
//! | Name               | Kind      | Type        | Description                    |
//! |--------------------|-----------|-------------|--------------------------------|
//! | `position`         | attribute | `vec2`      | Model-space vertex position    |
//! | `texCoord`         | attribute | `vec2`      | Texture coordinate             |
//! | `modelMatrix`      | uniform   | `mat4`      | Per-shape transform            |
//! | `viewMatrix`       | uniform   | `mat4`      | Camera view (identity)         |
//! | `projectionMatrix` | uniform   | `mat4`      | Orthographic projection        |
//! | `diffuse`          | uniform   | `sampler2D` | Texture unit (always 0)        |

use std::path::{Path, PathBuf};

use glow::HasContext;

use crate::error::{Error, Result};

/// Vertex and fragment stage sources, read from disk.
#[derive(Debug, Clone)]
pub struct ShaderSources {
    /// Vertex stage GLSL.
    pub vertex: String,
    /// Fragment stage GLSL.
    pub fragment: String,
}

impl ShaderSources {
    /// Read both stages.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShaderRead`] naming whichever file could not be read.
    pub fn load(vertex_path: &Path, fragment_path: &Path) -> Result<Self> {
        Ok(Self {
            vertex: read_source(vertex_path)?,
            fragment: read_source(fragment_path)?,
        })
    }
}

fn read_source(path: &Path) -> Result<String> {
    let source = std::fs::read_to_string(path).map_err(|source| Error::ShaderRead {
        path: PathBuf::from(path),
        source,
    })?;
    log::debug!("read shader {} ({} bytes)", path.display(), source.len());
    Ok(source)
}

/// Compile a shader program from vertex and fragment source strings.
///
/// The compiled shader objects are detached and deleted after successful
/// linking, so only the program handle needs to be cleaned up by the caller.
///
/// # Safety
///
/// Requires a valid, current OpenGL context.
///
/// # Errors
///
/// Returns [`Error::ShaderCompile`] or [`Error::ProgramLink`] carrying the
/// driver's info log.
pub unsafe fn compile_program(gl: &glow::Context, sources: &ShaderSources) -> Result<glow::Program> {
    let program = unsafe { gl.create_program() }.map_err(Error::Gl)?;

    let vs = or_cleanup(
        unsafe { compile_shader(gl, glow::VERTEX_SHADER, &sources.vertex) },
        || unsafe { gl.delete_program(program) },
    )?;
    let fs = or_cleanup(
        unsafe { compile_shader(gl, glow::FRAGMENT_SHADER, &sources.fragment) },
        || unsafe {
            gl.delete_shader(vs);
            gl.delete_program(program);
        },
    )?;

    unsafe {
        gl.attach_shader(program, vs);
        gl.attach_shader(program, fs);
        gl.link_program(program);

        if !gl.get_program_link_status(program) {
            let log = gl.get_program_info_log(program);
            gl.delete_program(program);
            gl.delete_shader(vs);
            gl.delete_shader(fs);
            return Err(Error::ProgramLink(log));
        }

        gl.detach_shader(program, vs);
        gl.detach_shader(program, fs);
        gl.delete_shader(vs);
        gl.delete_shader(fs);
    }

    Ok(program)
}

/// Run `cleanup` when `result` is an error, then pass it through.
fn or_cleanup<T>(result: Result<T>, cleanup: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        cleanup();
    }
    result
}

/// Compile a single shader stage (vertex or fragment) from source.
///
/// # Safety
///
/// Requires a valid, current OpenGL context.
unsafe fn compile_shader(gl: &glow::Context, shader_type: u32, source: &str) -> Result<glow::Shader> {
    unsafe {
        let shader = gl.create_shader(shader_type).map_err(Error::Gl)?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(Error::ShaderCompile(log));
        }

        Ok(shader)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn repo_path(relative: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
    }

    #[test]
    fn bundled_sources_load_and_declare_the_program_interface() {
        let sources = ShaderSources::load(
            &repo_path("shaders/vertex_textured.glsl"),
            &repo_path("shaders/fragment_textured.glsl"),
        )
        .unwrap();

        for name in ["position", "texCoord", "modelMatrix", "viewMatrix", "projectionMatrix"] {
            assert!(sources.vertex.contains(name), "vertex stage lacks {name}");
        }
        assert!(sources.fragment.contains("diffuse"));
        assert!(sources.vertex.starts_with("#version 140"));
        assert!(sources.fragment.starts_with("#version 140"));
    }

    #[test]
    fn failed_stage_releases_what_was_created() {
        let mut released = 0;
        let result: Result<()> = or_cleanup(Err(Error::ShaderCompile("bad".into())), || {
            released += 1;
        });
        assert!(matches!(result, Err(Error::ShaderCompile(_))));
        assert_eq!(released, 1);
    }

    #[test]
    fn successful_stage_keeps_its_objects() {
        let mut released = 0;
        let result = or_cleanup(Ok(7), || released += 1);
        assert_eq!(result.unwrap(), 7);
        assert_eq!(released, 0);
    }

    #[test]
    fn missing_source_names_the_file() {
        let err = ShaderSources::load(
            &repo_path("shaders/vertex_textured.glsl"),
            &repo_path("shaders/does_not_exist.glsl"),
        )
        .unwrap_err();

        match err {
            Error::ShaderRead { path, .. } => assert!(path.ends_with("does_not_exist.glsl")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
