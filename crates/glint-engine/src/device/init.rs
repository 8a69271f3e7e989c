/// Initialization parameters for the GL layer.
///
/// Keep this structure stable and minimal. Add configuration flags only when
/// a concrete platform or backend requirement exists.
#[derive(Debug, Clone)]
pub struct GlInit {
    /// Requested context version as (major, minor).
    ///
    /// Geometry shaders require at least 3.2; the default asks for 3.3 core.
    pub version: (u8, u8),

    /// Synchronize presentation with the display refresh.
    ///
    /// Best-effort: platforms that reject the swap interval still render,
    /// just untied from vblank.
    pub vsync: bool,
}

impl Default for GlInit {
    fn default() -> Self {
        Self {
            version: (3, 3),
            vsync: true,
        }
    }
}
