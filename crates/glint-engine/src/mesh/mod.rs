//! GPU vertex buffers.
//!
//! Geometry is uploaded once as static content; there is no resize or update
//! path after the initial upload.

mod points;

pub use points::PointBuffer;
