use anyhow::Result;
use winit::event::WindowEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by binaries.
pub trait App {
    /// Called once after the GL context exists, before the first frame.
    ///
    /// GPU resources (programs, buffers) are created here. An error is fatal
    /// and terminates the runtime.
    fn on_start(&mut self, gl: &glow::Context) -> Result<()> {
        let _ = gl;
        Ok(())
    }

    /// Called for window events the runtime does not consume itself.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}
