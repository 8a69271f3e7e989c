//! Shader pipeline: source loading, stage compilation, program linking.
//!
//! Compile and link failures are never fatal. Failure reports (offending
//! source plus a bounded compiler log) go to a caller-supplied diagnostic
//! sink; a broken stage yields an unusable program, not an abort.

mod program;
mod source;

pub use program::{ShaderPaths, ShaderProgram, StageKind};
pub use source::load_shader_source;
