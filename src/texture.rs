//! Image decoding and GL texture upload.

use std::path::{Path, PathBuf};

use glow::{HasContext, PixelUnpackData};

use crate::error::{Error, Result};

/// GL internal format for RGBA8 textures, pre-cast to the `i32` that
/// `tex_image_2d` expects.
#[expect(clippy::cast_possible_wrap)]
const RGBA8_INTERNAL_FORMAT: i32 = glow::RGBA8 as i32;

/// Decoded RGBA8 pixels, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Tightly packed RGBA8 bytes, `width * height * 4` long.
    pub pixels: Vec<u8>,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

/// Decode an image file into RGBA8, whatever its source channel layout.
///
/// # Errors
///
/// Returns [`Error::ImageDecode`] when the file is missing or not a
/// supported image, and [`Error::ImageTooLarge`] when a dimension exceeds
/// `i32::MAX`.
pub fn decode_rgba(path: &Path) -> Result<DecodedImage> {
    let rgba = image::open(path)
        .map_err(|source| Error::ImageDecode {
            path: PathBuf::from(path),
            source,
        })?
        .into_rgba8();

    let (w, h) = rgba.dimensions();
    let (Ok(width), Ok(height)) = (i32::try_from(w), i32::try_from(h)) else {
        return Err(Error::ImageTooLarge {
            path: PathBuf::from(path),
            width: w,
            height: h,
        });
    };

    Ok(DecodedImage {
        pixels: rgba.into_raw(),
        width,
        height,
    })
}

/// Upload decoded pixels into a new 2D texture with nearest filtering.
///
/// Leaves texture unit 0 unbound afterwards.
///
/// # Safety
///
/// Requires a valid, current OpenGL context.
///
/// # Errors
///
/// Returns [`Error::Gl`] if the texture object cannot be created.
pub unsafe fn upload(gl: &glow::Context, image: &DecodedImage) -> Result<glow::Texture> {
    let texture = unsafe { gl.create_texture() }.map_err(Error::Gl)?;

    // GL constant values are small enough that the cast is always safe.
    #[expect(clippy::cast_possible_wrap)]
    unsafe {
        gl.bind_texture(glow::TEXTURE_2D, Some(texture));
        gl.tex_image_2d(
            glow::TEXTURE_2D,
            0,
            RGBA8_INTERNAL_FORMAT,
            image.width,
            image.height,
            0,
            glow::RGBA,
            glow::UNSIGNED_BYTE,
            PixelUnpackData::Slice(Some(&image.pixels)),
        );
        gl.tex_parameter_i32(
            glow::TEXTURE_2D,
            glow::TEXTURE_MIN_FILTER,
            glow::NEAREST as i32,
        );
        gl.tex_parameter_i32(
            glow::TEXTURE_2D,
            glow::TEXTURE_MAG_FILTER,
            glow::NEAREST as i32,
        );
        gl.bind_texture(glow::TEXTURE_2D, None);
    }

    Ok(texture)
}

/// Decode `path` and upload it. The CPU copy is dropped before returning.
///
/// # Safety
///
/// Requires a valid, current OpenGL context.
///
/// # Errors
///
/// See [`decode_rgba`] and [`upload`].
pub unsafe fn load_texture(gl: &glow::Context, path: &Path) -> Result<glow::Texture> {
    let image = decode_rgba(path)?;
    let texture = unsafe { upload(gl, &image) }?;
    log::info!(
        "loaded texture {} ({}x{})",
        path.display(),
        image.width,
        image.height
    );
    Ok(texture)
}
