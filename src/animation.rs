//! Time-based transform update.
//!
//! Each shape carries scalar state that advances at a fixed rate per second.
//! The model matrix is rebuilt from that state every frame; nothing is
//! accumulated into the matrix itself.

use glam::{Mat4, Vec3};

/// How a shape's scalar state becomes its model matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    /// Translate along x by `position`.
    Translate,
    /// Rotate about z by `rotation_degrees`.
    Rotate,
}

/// Fixed per-second rates and matrix construction for one shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// World units per second added to `position`.
    pub linear_rate: f32,
    /// Degrees per second added to `rotation_degrees`.
    pub angular_rate: f32,
    /// Which scalar drives the model matrix.
    pub kind: TransformKind,
}

impl Motion {
    /// Build the model matrix for `state` from the identity.
    #[must_use]
    pub fn model_matrix(&self, state: &AnimationState) -> Mat4 {
        match self.kind {
            TransformKind::Translate => {
                Mat4::from_translation(Vec3::new(state.position, 0.0, 0.0))
            }
            TransformKind::Rotate => Mat4::from_rotation_z(state.rotation_degrees.to_radians()),
        }
    }
}

/// Per-shape scalar animation state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationState {
    /// Offset along x, in world units.
    pub position: f32,
    /// Rotation about z, in degrees.
    pub rotation_degrees: f32,
}

impl AnimationState {
    /// State with the given starting values.
    #[must_use]
    pub const fn new(position: f32, rotation_degrees: f32) -> Self {
        Self {
            position,
            rotation_degrees,
        }
    }

    /// Advance both scalars by `rate * dt`.
    pub fn advance(&mut self, motion: &Motion, dt: f32) {
        self.position += motion.linear_rate * dt;
        self.rotation_degrees += motion.angular_rate * dt;
    }
}

/// Pure step: `(previous state, dt) -> (new state, new model matrix)`.
#[must_use]
pub fn step(state: AnimationState, motion: &Motion, dt: f32) -> (AnimationState, Mat4) {
    let mut next = state;
    next.advance(motion, dt);
    (next, motion.model_matrix(&next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    const SLIDE: Motion = Motion {
        linear_rate: 1.0,
        angular_rate: 0.0,
        kind: TransformKind::Translate,
    };

    const SPIN: Motion = Motion {
        linear_rate: 1.0,
        angular_rate: 90.0,
        kind: TransformKind::Rotate,
    };

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "expected {expected}, got {actual}",
        );
    }

    #[test]
    fn position_advances_by_rate_times_dt() {
        let (state, _) = step(AnimationState::new(0.0, 0.0), &SLIDE, 0.5);
        assert_close(state.position, 0.5);
    }

    #[test]
    fn consecutive_updates_accumulate() {
        let start = AnimationState::new(0.0, 0.0);
        let (once, _) = step(start, &SLIDE, 0.25);
        let (twice, _) = step(once, &SLIDE, 0.25);
        assert_close(twice.position, 0.5);
    }

    #[test]
    fn rotation_advances_in_degrees() {
        let (state, _) = step(AnimationState::new(0.5, 0.5), &SPIN, 1.0);
        assert_close(state.rotation_degrees, 90.5);
    }

    #[test]
    fn zero_dt_leaves_state_unchanged() {
        let start = AnimationState::new(1.25, 33.0);
        let (state, _) = step(start, &SPIN, 0.0);
        assert_eq!(state, start);
    }

    #[test]
    fn arbitrary_dt_is_linear() {
        for dt in [0.0_f32, 0.001, 0.016, 0.1, 0.75, 2.0] {
            let start = AnimationState::new(-1.0, 10.0);
            let (state, _) = step(start, &SPIN, dt);
            assert_close(state.position, -1.0 + SPIN.linear_rate * dt);
            assert_close(state.rotation_degrees, 10.0 + SPIN.angular_rate * dt);
        }
    }

    #[test]
    fn translate_matrix_moves_along_x_only() {
        let (_, m) = step(AnimationState::new(0.0, 0.0), &SLIDE, 0.5);
        let p = m * Vec4::new(1.0, 2.0, 0.0, 1.0);
        assert!(p.abs_diff_eq(Vec4::new(1.5, 2.0, 0.0, 1.0), 1e-6), "{p:?}");
    }

    #[test]
    fn rotate_matrix_is_z_rotation_by_radians() {
        let (state, m) = step(AnimationState::new(0.5, 0.5), &SPIN, 1.0);
        let theta = state.rotation_degrees.to_radians();
        let (sin, cos) = theta.sin_cos();
        let expected = Mat4::from_cols(
            Vec4::new(cos, sin, 0.0, 0.0),
            Vec4::new(-sin, cos, 0.0, 0.0),
            Vec4::Z,
            Vec4::W,
        );
        assert!(m.abs_diff_eq(expected, 1e-6), "{m:?}");
        // Orthonormal with unit determinant.
        assert_close(m.determinant(), 1.0);
        // Rotation ignores position, so the translation column stays at the origin.
        assert_eq!(m.w_axis, Vec4::W);
    }

    #[test]
    fn matrix_is_rebuilt_not_accumulated() {
        let state = AnimationState::new(2.0, 45.0);
        assert_eq!(SLIDE.model_matrix(&state), SLIDE.model_matrix(&state));
        let (_, a) = step(AnimationState::new(0.0, 0.0), &SLIDE, 1.0);
        let (_, b) = step(AnimationState::new(0.0, 0.0), &SLIDE, 1.0);
        assert_eq!(a, b);
    }
}
