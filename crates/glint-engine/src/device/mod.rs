//! GL context + surface management.
//!
//! This module is responsible for:
//! - selecting a GL config and creating the window alongside it
//! - creating the context and swapchain surface, making them current
//! - presenting frames and tracking the drawable size

mod context;
mod init;

pub use context::GlContext;
pub use init::GlInit;
