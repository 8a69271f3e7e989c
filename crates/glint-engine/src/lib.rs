//! Glint engine crate.
//!
//! This crate owns the platform + OpenGL runtime pieces used by demo binaries:
//! window/event loop, GL context and swapchain surface, input, shader
//! pipeline, vertex buffers.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod config;
pub mod logging;
pub mod mesh;
pub mod shader;
