//! Fixed orthographic camera.

use glam::Mat4;

/// Clip-volume bounds for an orthographic projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoBounds {
    /// Left clip plane.
    pub left: f32,
    /// Right clip plane.
    pub right: f32,
    /// Bottom clip plane.
    pub bottom: f32,
    /// Top clip plane.
    pub top: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
}

impl OrthoBounds {
    /// A 10 × 7.5 world-unit view centred on the origin (4:3, like the window).
    pub const DEFAULT: Self = Self {
        left: -5.0,
        right: 5.0,
        bottom: -3.75,
        top: 3.75,
        near: -1.0,
        far: 1.0,
    };
}

impl Default for OrthoBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Projection and view matrices. Built once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    projection: Mat4,
    view: Mat4,
}

impl Camera {
    /// Orthographic projection with an identity view.
    ///
    /// Uses the GL clip-space convention (z in `[-1, 1]`), matching
    /// `glm::ortho`.
    #[must_use]
    pub fn orthographic(bounds: OrthoBounds) -> Self {
        Self {
            projection: Mat4::orthographic_rh_gl(
                bounds.left,
                bounds.right,
                bounds.bottom,
                bounds.top,
                bounds.near,
                bounds.far,
            ),
            view: Mat4::IDENTITY,
        }
    }

    /// The projection matrix.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// The view matrix.
    #[must_use]
    pub fn view(&self) -> Mat4 {
        self.view
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::orthographic(OrthoBounds::DEFAULT)
    }
}
