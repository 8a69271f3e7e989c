use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::config::Diagnostics;
use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{GlContext, GlInit};
use crate::input::platform::winit::translate_input_event;
use crate::input::{InputFrame, InputState};
use crate::time::{FrameClock, FramerateMeter};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub gl: GlInit,
    pub diagnostics: Diagnostics,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "glint".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            gl: GlInit::default(),
            diagnostics: Diagnostics::default(),
        }
    }
}

/// Entry point for the runtime.
///
/// Drives one window with a continuous poll-and-draw loop: events are polled
/// without blocking and a redraw is requested every iteration. The loop runs
/// until the window's close request arrives.
pub struct Runtime;

impl Runtime {
    pub fn run<A>(config: RuntimeConfig, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut state = AppState::new(config, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        if let Some(e) = state.fatal.take() {
            return Err(e);
        }

        Ok(())
    }
}

struct WindowEntry {
    window: Window,
    gl_ctx: GlContext,

    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,
    framerate: Option<FramerateMeter>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    app: A,

    entry: Option<WindowEntry>,

    /// Startup error carried out of the event loop.
    fatal: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, app: A) -> Self {
        Self {
            config,
            app,
            entry: None,
            fatal: None,
        }
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let (window, gl_ctx) = GlContext::create(event_loop, attrs, &self.config.gl)?;

        self.app
            .on_start(gl_ctx.gl())
            .context("application startup failed")?;

        let framerate = self
            .config
            .diagnostics
            .log_framerate
            .then(FramerateMeter::new);

        self.entry = Some(WindowEntry {
            window,
            gl_ctx,
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            framerate,
        });

        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        let ft = entry.clock.tick();

        if let Some(meter) = entry.framerate.as_mut() {
            log::info!("framerate: {:.1}", meter.tick(ft.dt));
        }

        let control = {
            let mut ctx = FrameCtx {
                window: WindowCtx {
                    id: entry.window.id(),
                    window: &entry.window,
                },
                gl_ctx: &entry.gl_ctx,
                input: &entry.input_state,
                input_frame: &entry.input_frame,
                time: ft,
            };

            self.app.on_frame(&mut ctx)
        };

        // Clear per-frame deltas after the frame is consumed.
        entry.input_frame.clear();

        if control == AppControl::Exit {
            event_loop.exit();
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            log::error!("failed to create window: {e:#}");
            self.fatal = Some(e);
            event_loop.exit();
            return;
        }

        if let Some(entry) = &self.entry {
            entry.window.request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Poll);

        // Continuous redraw: this loop draws every iteration rather than on
        // invalidation.
        if let Some(entry) = &self.entry {
            entry.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };
        if entry.window.id() != window_id {
            return;
        }

        if let Some(ev) = translate_input_event(&event) {
            entry.input_state.apply_event(&mut entry.input_frame, ev);
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.gl_ctx.resize(new_size);
                    entry.window.request_redraw();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.entry.as_mut() {
                    let new_size = entry.window.inner_size();
                    entry.gl_ctx.resize(new_size);
                    entry.window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }
}
