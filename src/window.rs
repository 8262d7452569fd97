//! Window, GL context, and the event loop.
//!
//! The context is created on the first `resumed` event. Each
//! `RedrawRequested` runs one frame, swaps, and asks for the next redraw, so
//! frame pacing comes from the swap interval.

use std::{fmt::Display, num::NonZeroU32, sync::Arc};

use glow::HasContext;
use glutin::{
    config::ConfigTemplateBuilder,
    context::{
        ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext,
        PossiblyCurrentContext, Version,
    },
    display::{GetGlDisplay, GlDisplay},
    surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface},
};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use crate::{
    app::Demo,
    config::DemoConfig,
    error::{Error, Result},
};

fn context_error(e: impl Display) -> Error {
    Error::Context(e.to_string())
}

/// Open the window and run until the user quits.
///
/// # Errors
///
/// Returns the setup error that stopped the demo, or an event loop failure.
pub fn run(config: DemoConfig) -> Result<()> {
    let event_loop = EventLoop::new().map_err(context_error)?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut handler = DemoWindow::new(config);
    event_loop.run_app(&mut handler).map_err(context_error)?;

    handler.error.map_or(Ok(()), Err)
}

/// Live window plus everything bound to its context.
///
/// Fields drop in declaration order: GL state first, the window last.
struct GlWindowState {
    demo: Demo,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
}

impl GlWindowState {
    /// Build the window, a current GL context, and the demo on top of it.
    fn create(event_loop: &ActiveEventLoop, config: &DemoConfig) -> Result<Self> {
        let attributes = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(PhysicalSize::new(config.width, config.height))
            .with_resizable(false);

        let template = ConfigTemplateBuilder::new().with_alpha_size(8);
        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(attributes))
            .build(event_loop, template, |mut configs| {
                // glutin only calls the picker with at least one candidate.
                configs.next().expect("no GL config offered")
            })
            .map_err(context_error)?;
        let window = window.ok_or_else(|| context_error("display builder created no window"))?;

        let raw_handle = window.window_handle().map_err(context_error)?.as_raw();
        let display = gl_config.display();
        let core = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .with_profile(GlProfile::Core)
            .build(Some(raw_handle));
        let fallback = ContextAttributesBuilder::new().build(Some(raw_handle));

        let not_current = unsafe {
            display
                .create_context(&gl_config, &core)
                .or_else(|_| display.create_context(&gl_config, &fallback))
        }
        .map_err(context_error)?;

        let surface_attributes = window
            .build_surface_attributes(SurfaceAttributesBuilder::default())
            .map_err(context_error)?;
        let surface = unsafe { display.create_window_surface(&gl_config, &surface_attributes) }
            .map_err(context_error)?;
        let context = not_current.make_current(&surface).map_err(context_error)?;

        if config.vsync {
            if let Err(e) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
                log::warn!("vsync unavailable: {e}");
            }
        }

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|symbol| display.get_proc_address(symbol))
        };
        log::info!(
            "created {}x{} window with OpenGL {:?}",
            config.width,
            config.height,
            gl.version()
        );

        let demo = unsafe { Demo::new(Arc::new(gl), config) }?;

        Ok(Self {
            demo,
            surface,
            context,
            window,
        })
    }

    fn redraw(&mut self) {
        self.demo.frame();
        self.window.pre_present_notify();
        if let Err(e) = self.surface.swap_buffers(&self.context) {
            log::error!("swap failed: {e}");
        }
        self.window.request_redraw();
    }
}

/// winit handler owning the demo for the lifetime of the event loop.
struct DemoWindow {
    config: DemoConfig,
    state: Option<GlWindowState>,
    error: Option<Error>,
}

impl DemoWindow {
    fn new(config: DemoConfig) -> Self {
        Self {
            config,
            state: None,
            error: None,
        }
    }
}

impl ApplicationHandler for DemoWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        match GlWindowState::create(event_loop, &self.config) {
            Ok(state) => {
                state.window.request_redraw();
                self.state = Some(state);
            }
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                log::info!("quit requested");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                if let Some(state) = self.state.as_mut() {
                    state.redraw();
                }
            }
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = self.state.take() {
            let GlWindowState { demo, .. } = state;
            // The context is still current: `state`'s remaining fields are
            // only dropped at the end of this scope.
            unsafe { demo.destroy() };
        }
    }
}
