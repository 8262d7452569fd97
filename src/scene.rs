//! The two animated shapes and the per-frame update/draw passes.
//!
//! There is no scene graph: a [`Scene`] is a fixed, ordered list of
//! [`Shape`]s plus the camera. Each shape owns its own model matrix, so a
//! transform computed for one shape is never drawn with another.

use glam::Mat4;

use crate::{
    animation::{AnimationState, Motion, TransformKind},
    backend::DrawBackend,
    camera::{Camera, OrthoBounds},
    types::Mesh,
};

/// Quad: starts half a unit along and half a degree in, spins at 90°/s.
const SQUARE_MOTION: Motion = Motion {
    linear_rate: 1.0,
    angular_rate: 90.0,
    kind: TransformKind::Rotate,
};
const SQUARE_START: AnimationState = AnimationState::new(0.5, 0.5);

/// Triangle: starts at the origin, slides right at one unit per second.
const TRIANGLE_MOTION: Motion = Motion {
    linear_rate: 1.0,
    angular_rate: 0.0,
    kind: TransformKind::Translate,
};
const TRIANGLE_START: AnimationState = AnimationState::new(0.0, 0.0);

/// A drawable unit: geometry, texture, and animation.
#[derive(Debug, Clone)]
pub struct Shape<T> {
    name: &'static str,
    mesh: Mesh,
    texture: T,
    motion: Motion,
    state: AnimationState,
    model: Mat4,
}

impl<T> Shape<T> {
    /// Create a shape with its model matrix built from `state`.
    pub fn new(
        name: &'static str,
        mesh: Mesh,
        texture: T,
        motion: Motion,
        state: AnimationState,
    ) -> Self {
        Self {
            name,
            mesh,
            texture,
            motion,
            state,
            model: motion.model_matrix(&state),
        }
    }

    /// Advance the animation by `dt` seconds and rebuild the model matrix.
    pub fn update(&mut self, dt: f32) {
        self.state.advance(&self.motion, dt);
        self.model = self.motion.model_matrix(&self.state);
    }

    /// Upload, set matrix, bind, draw. Leaves the attribute slots enabled.
    fn draw<B>(&self, backend: &mut B)
    where
        B: DrawBackend<Texture = T>,
    {
        backend.upload_vertices(&self.mesh);
        backend.set_model_matrix(&self.model);
        backend.bind_texture(&self.texture);
        backend.draw_triangles(self.mesh.vertex_count());
    }

    /// Debug name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Current animation state.
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Model matrix for the current frame.
    pub fn model_matrix(&self) -> Mat4 {
        self.model
    }
}

/// Camera plus shapes, drawn in insertion order.
#[derive(Debug, Clone)]
pub struct Scene<T> {
    camera: Camera,
    shapes: Vec<Shape<T>>,
}

impl<T> Scene<T> {
    fn new(camera: Camera) -> Self {
        Self {
            camera,
            shapes: Vec::new(),
        }
    }

    /// The demo layout: the spinning quad first, then the sliding triangle.
    pub fn demo(square_texture: T, triangle_texture: T, ortho: OrthoBounds) -> Self {
        let mut scene = Self::new(Camera::orthographic(ortho));
        scene.push(Shape::new(
            "square",
            Mesh::QUAD,
            square_texture,
            SQUARE_MOTION,
            SQUARE_START,
        ));
        scene.push(Shape::new(
            "triangle",
            Mesh::TRIANGLE,
            triangle_texture,
            TRIANGLE_MOTION,
            TRIANGLE_START,
        ));
        scene
    }

    fn push(&mut self, shape: Shape<T>) {
        self.shapes.push(shape);
    }

    /// Advance every shape by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        for shape in &mut self.shapes {
            shape.update(dt);
        }
        log::trace!("scene advanced by {dt:.4}s");
    }

    /// Clear, draw each shape in order, then disable the attribute slots.
    pub fn draw<B>(&self, backend: &mut B)
    where
        B: DrawBackend<Texture = T>,
    {
        backend.clear();
        for shape in &self.shapes {
            shape.draw(backend);
        }
        backend.disable_vertex_attributes();
    }

    /// The fixed camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Shapes in draw order.
    pub fn shapes(&self) -> &[Shape<T>] {
        &self.shapes
    }

    /// Consume the scene, yielding its texture handles for cleanup.
    pub fn into_textures(self) -> impl Iterator<Item = T> {
        self.shapes.into_iter().map(|shape| shape.texture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One recorded backend call.
    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear,
        Upload(usize),
        Model(Mat4),
        Bind(&'static str),
        Draw(usize),
        Disable,
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl DrawBackend for Recorder {
        type Texture = &'static str;

        fn clear(&mut self) {
            self.calls.push(Call::Clear);
        }

        fn upload_vertices(&mut self, mesh: &Mesh) {
            self.calls.push(Call::Upload(mesh.vertex_count()));
        }

        fn set_model_matrix(&mut self, model: &Mat4) {
            self.calls.push(Call::Model(*model));
        }

        fn bind_texture(&mut self, texture: &Self::Texture) {
            self.calls.push(Call::Bind(*texture));
        }

        fn draw_triangles(&mut self, vertex_count: usize) {
            self.calls.push(Call::Draw(vertex_count));
        }

        fn disable_vertex_attributes(&mut self) {
            self.calls.push(Call::Disable);
        }
    }

    fn demo() -> Scene<&'static str> {
        Scene::demo("square.png", "triangle.png", OrthoBounds::DEFAULT)
    }

    fn draws(recorder: &Recorder) -> Vec<usize> {
        recorder
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Draw(n) => Some(*n),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn quad_draws_six_and_triangle_draws_three() {
        let mut recorder = Recorder::default();
        demo().draw(&mut recorder);
        assert_eq!(draws(&recorder), vec![6, 3]);
    }

    #[test]
    fn draw_sizes_do_not_depend_on_texture() {
        let mut recorder = Recorder::default();
        Scene::demo("triangle.png", "square.png", OrthoBounds::DEFAULT).draw(&mut recorder);
        assert_eq!(draws(&recorder), vec![6, 3]);
    }

    #[test]
    fn dispatch_order_per_shape_then_single_disable() {
        let scene = demo();
        let mut recorder = Recorder::default();
        scene.draw(&mut recorder);

        let square = scene.shapes()[0].model_matrix();
        let triangle = scene.shapes()[1].model_matrix();
        assert_eq!(
            recorder.calls,
            vec![
                Call::Clear,
                Call::Upload(6),
                Call::Model(square),
                Call::Bind("square.png"),
                Call::Draw(6),
                Call::Upload(3),
                Call::Model(triangle),
                Call::Bind("triangle.png"),
                Call::Draw(3),
                Call::Disable,
            ]
        );
    }

    #[test]
    fn each_shape_keeps_its_own_transform() {
        let mut scene = demo();
        scene.update(0.5);

        let square = &scene.shapes()[0];
        let triangle = &scene.shapes()[1];
        assert_ne!(square.model_matrix(), triangle.model_matrix());

        // Triangle only slides.
        let expected = Mat4::from_translation(glam::Vec3::new(0.5, 0.0, 0.0));
        assert!(triangle.model_matrix().abs_diff_eq(expected, 1e-6));

        // Square only spins: 0.5° + 90°/s * 0.5s.
        let expected = Mat4::from_rotation_z(45.5_f32.to_radians());
        assert!(square.model_matrix().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn demo_starting_state() {
        let scene = demo();
        assert_eq!(scene.shapes()[0].name(), "square");
        assert_eq!(scene.shapes()[0].state(), AnimationState::new(0.5, 0.5));
        assert_eq!(scene.shapes()[1].name(), "triangle");
        assert_eq!(scene.shapes()[1].state(), AnimationState::new(0.0, 0.0));
    }

    #[test]
    fn square_reaches_ninety_and_a_half_degrees_after_one_second() {
        let mut scene = demo();
        scene.update(1.0);
        let rotation = scene.shapes()[0].state().rotation_degrees;
        assert!((rotation - 90.5).abs() < 1e-5, "{rotation}");
    }

    #[test]
    fn triangle_position_accumulates_over_frames() {
        let mut scene = demo();
        scene.update(0.25);
        scene.update(0.25);
        let position = scene.shapes()[1].state().position;
        assert!((position - 0.5).abs() < 1e-6, "{position}");
    }

    #[test]
    fn camera_is_unchanged_by_updates() {
        let mut scene = demo();
        let before = *scene.camera();
        for _ in 0..10 {
            scene.update(0.016);
        }
        assert_eq!(*scene.camera(), before);
        assert_eq!(before, Camera::orthographic(OrthoBounds::DEFAULT));
    }

    #[test]
    fn textures_come_back_in_draw_order() {
        let textures: Vec<_> = demo().into_textures().collect();
        assert_eq!(textures, vec!["square.png", "triangle.png"]);
    }
}
