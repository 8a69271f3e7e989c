//! Runtime diagnostics configuration.
//!
//! The flags here replace build-time instrumentation switches: everything is
//! compiled in and enabled (or not) at startup.

/// Diagnostic switches checked at runtime.
#[derive(Debug, Copy, Clone)]
pub struct Diagnostics {
    /// Write shader compile/link failure reports (offending source plus a
    /// bounded compiler log) to the diagnostic sink.
    pub shader_diagnostics: bool,

    /// Log a decaying-average framerate once per frame.
    pub log_framerate: bool,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self {
            shader_diagnostics: true,
            log_framerate: false,
        }
    }
}
