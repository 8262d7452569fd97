//! Two textured shapes animated by frame delta time, drawn with OpenGL via
//! [glow].
//!
//! A quad spins at 90°/s and a triangle slides right at one unit per second.
//! Both are drawn each frame through one textured shader program under a fixed
//! orthographic camera.
//!
//! # Layout
//!
//! - [`time`] turns a monotonic clock into per-frame delta time.
//! - [`animation`] advances each shape's scalar state and rebuilds its model
//!   matrix from scratch.
//! - [`scene`] holds the shapes in draw order and dispatches draws through
//!   the [`DrawBackend`] trait.
//! - [`render`] is the glow implementation of that trait; [`texture`] and
//!   [`shaders`] load the assets it needs.
//! - [`window`] owns the winit event loop and the glutin context.
//!
//! # Safety
//!
//! Everything touching GL is `unsafe` and needs the context created by
//! [`window::run`] to be current. The update path ([`time`], [`animation`],
//! [`scene`]) is plain safe code and runs without a context.
//!
//! [glow]: https://docs.rs/glow

pub mod animation;
mod app;
pub mod backend;
pub mod camera;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod scene;
pub mod shaders;
pub mod texture;
pub mod time;
pub mod types;
pub mod window;

pub use app::Demo;
pub use backend::DrawBackend;
pub use config::DemoConfig;
pub use error::{Error, Result};
