//! Time subsystem.
//!
//! Provides stable, testable frame timing utilities without coupling to the
//! runtime. Intended usage:
//! - one `FrameClock` per render loop, ticked once per presented frame
//! - one `FramerateMeter` when framerate logging is enabled

mod frame_clock;
mod framerate;

pub use frame_clock::{FrameClock, FrameTime};
pub use framerate::FramerateMeter;
