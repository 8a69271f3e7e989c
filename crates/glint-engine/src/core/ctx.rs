use winit::window::{Window, WindowId};

use crate::device::GlContext;
use crate::input::{InputFrame, InputState};
use crate::time::FrameTime;

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

/// Per-frame context passed to `core::App::on_frame`.
pub struct FrameCtx<'a> {
    pub window: WindowCtx<'a>,
    pub gl_ctx: &'a GlContext,
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time: FrameTime,
}

impl<'a> FrameCtx<'a> {
    /// Returns the GL function table.
    pub fn gl(&self) -> &glow::Context {
        self.gl_ctx.gl()
    }

    /// Clears the color buffer to `clear`, calls `draw` with the GL handle,
    /// then presents the frame.
    pub fn render<F>(&mut self, clear: [f32; 4], draw: F)
    where
        F: FnOnce(&glow::Context),
    {
        self.gl_ctx.clear(clear);
        draw(self.gl_ctx.gl());

        self.window.window.pre_present_notify();
        self.gl_ctx.swap_buffers();
    }
}
