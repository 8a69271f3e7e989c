mod app;
mod params;

use anyhow::Result;
use winit::dpi::LogicalSize;

use glint_engine::config::Diagnostics;
use glint_engine::logging::{init_logging, LoggingConfig};
use glint_engine::window::{Runtime, RuntimeConfig};

use crate::app::CirclesApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let diagnostics = Diagnostics {
        shader_diagnostics: true,
        log_framerate: false,
    };

    let config = RuntimeConfig {
        title: "glint".to_string(),
        initial_size: LogicalSize::new(700.0, 700.0),
        diagnostics,
        ..RuntimeConfig::default()
    };

    Runtime::run(config, CirclesApp::new(diagnostics))
}
