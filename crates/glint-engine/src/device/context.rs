use std::num::NonZeroU32;

use anyhow::{Context, Result};
use glow::HasContext;
use glutin::config::{ConfigTemplateBuilder, GlConfig};
use glutin::context::{ContextApi, ContextAttributesBuilder, PossiblyCurrentContext, Version};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::prelude::*;
use glutin::surface::{Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use super::GlInit;

/// Owns the GL context, the swapchain surface, and the function-pointer
/// table.
///
/// This type is the low-level rendering context:
/// - selects a GL config and creates the window bound to it
/// - creates the context + window surface and makes them current
/// - presents frames and keeps the viewport matched to the drawable size
pub struct GlContext {
    gl: glow::Context,
    context: PossiblyCurrentContext,
    surface: Surface<WindowSurface>,
    size: PhysicalSize<u32>,
}

impl GlContext {
    /// Creates the window and a current GL context bound to it.
    ///
    /// Window creation and config selection are entangled on some platforms
    /// (the config constrains the window visual), so both happen here.
    pub fn create(
        event_loop: &ActiveEventLoop,
        attrs: WindowAttributes,
        init: &GlInit,
    ) -> Result<(Window, Self)> {
        let template = ConfigTemplateBuilder::new();
        let display_builder = DisplayBuilder::new().with_window_attributes(Some(attrs));

        let (window, gl_config) = display_builder
            .build(event_loop, template, |configs| {
                // Prefer the config with the most coverage samples; ties go
                // to the first offered.
                configs
                    .reduce(|best, c| {
                        if c.num_samples() > best.num_samples() {
                            c
                        } else {
                            best
                        }
                    })
                    .expect("display offered no GL configs")
            })
            .map_err(|e| anyhow::anyhow!("failed to create GL display: {e}"))?;

        let window = window.context("display builder returned no window")?;

        let raw_window_handle = window
            .window_handle()
            .context("window has no native handle")?
            .as_raw();

        let display = gl_config.display();

        let (major, minor) = init.version;
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .build(Some(raw_window_handle));

        let not_current = unsafe { display.create_context(&gl_config, &context_attributes) }
            .context("failed to create GL context")?;

        let surface_attrs = window
            .build_surface_attributes(Default::default())
            .context("window has no drawable size")?;
        let surface = unsafe { display.create_window_surface(&gl_config, &surface_attrs) }
            .context("failed to create window surface")?;

        let context = not_current
            .make_current(&surface)
            .context("failed to make GL context current")?;

        if init.vsync {
            if let Err(e) = surface.set_swap_interval(
                &context,
                SwapInterval::Wait(NonZeroU32::new(1).expect("1 is non-zero")),
            ) {
                log::warn!("vsync unavailable: {e}");
            }
        }

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|s| display.get_proc_address(s))
        };

        let size = window.inner_size();
        unsafe { gl.viewport(0, 0, size.width as i32, size.height as i32) };

        log::info!(
            "GL context created: requested {major}.{minor}, drawable {}x{}",
            size.width,
            size.height
        );

        Ok((window, Self {
            gl,
            context,
            surface,
            size,
        }))
    }

    /// Returns the GL function table.
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// Current drawable size in physical pixels.
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Resizes the swapchain surface and re-specifies the viewport to cover
    /// the full drawable.
    ///
    /// A zero-sized drawable (minimized window) only updates internal state;
    /// surface resize is deferred until a real size arrives.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.size = new_size;

        let (Some(w), Some(h)) = (
            NonZeroU32::new(new_size.width),
            NonZeroU32::new(new_size.height),
        ) else {
            return;
        };

        self.surface.resize(&self.context, w, h);
        unsafe {
            self.gl
                .viewport(0, 0, new_size.width as i32, new_size.height as i32)
        };
    }

    /// Clears the color buffer to `[r, g, b, a]`.
    pub fn clear(&self, color: [f32; 4]) {
        unsafe {
            self.gl.clear_color(color[0], color[1], color[2], color[3]);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    /// Presents the frame.
    ///
    /// Swap failures are transient (surface lost during teardown or resize);
    /// the frame is dropped and rendering resumes next iteration.
    pub fn swap_buffers(&self) {
        if let Err(e) = self.surface.swap_buffers(&self.context) {
            log::warn!("swap_buffers failed, frame skipped: {e}");
        }
    }
}
