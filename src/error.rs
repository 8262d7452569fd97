//! Error type shared by the setup path.
//!
//! Only setup can fail in a checked way. Per-frame GL calls are fire-and-forget.

use std::path::PathBuf;

/// Errors raised while building the window, GL context, shaders, or textures.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An image asset could not be opened or decoded.
    #[error("unable to load image {path}: {source}")]
    ImageDecode {
        /// Path of the offending asset.
        path: PathBuf,
        /// Underlying decoder error.
        #[source]
        source: image::ImageError,
    },

    /// An image decoded fine but its dimensions do not fit a GL size.
    #[error("image {path} is too large ({width}x{height})")]
    ImageTooLarge {
        /// Path of the offending asset.
        path: PathBuf,
        /// Decoded width in pixels.
        width: u32,
        /// Decoded height in pixels.
        height: u32,
    },

    /// A shader source file could not be read.
    #[error("unable to read shader {path}: {source}")]
    ShaderRead {
        /// Path of the shader source.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A shader stage failed to compile.
    #[error("shader compile error: {0}")]
    ShaderCompile(String),

    /// The program failed to link.
    #[error("program link error: {0}")]
    ProgramLink(String),

    /// The linked program does not expose an attribute or uniform we rely on.
    #[error("`{0}` missing from textured shader program")]
    MissingShaderInput(&'static str),

    /// A fixed demo parameter is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A GL object could not be created.
    #[error("GL object creation failed: {0}")]
    Gl(String),

    /// Window, display, surface, or context creation failed.
    #[error("{0}")]
    Context(String),
}

/// Convenience alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
