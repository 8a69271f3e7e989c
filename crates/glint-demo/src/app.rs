use std::io;
use std::path::Path;

use anyhow::Result;

use glint_engine::config::Diagnostics;
use glint_engine::core::{App, AppControl, FrameCtx};
use glint_engine::mesh::PointBuffer;
use glint_engine::shader::{ShaderPaths, ShaderProgram};

use crate::params::RenderParams;

/// Five 3-D points: four corners and the center. The geometry stage expands
/// each into a circle outline; host code never interprets them.
const POINTS: [f32; 15] = [
    -0.5, 0.5, 0.5, //
    -0.5, -0.5, 0.5, //
    0.5, 0.5, 0.5, //
    0.5, -0.5, 0.5, //
    0.0, 0.0, 0.0,
];

const CLEAR_BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// GL-resident scene state, created once the context exists.
struct Scene {
    program: ShaderProgram,
    points: PointBuffer,
    radius_loc: Option<glow::NativeUniformLocation>,
    segments_loc: Option<glow::NativeUniformLocation>,
}

/// The circles demo: a static point set drawn as point primitives, with the
/// circle radius and segment count steered by held keys.
pub struct CirclesApp {
    diagnostics: Diagnostics,
    params: RenderParams,
    scene: Option<Scene>,
}

impl CirclesApp {
    pub fn new(diagnostics: Diagnostics) -> Self {
        Self {
            diagnostics,
            params: RenderParams::default(),
            scene: None,
        }
    }

    fn shader_paths() -> ShaderPaths {
        let base = Path::new(env!("CARGO_MANIFEST_DIR")).join("shaders");
        ShaderPaths {
            vertex: base.join("circle.vert"),
            geometry: base.join("circle.geom"),
            fragment: base.join("circle.frag"),
        }
    }
}

impl App for CirclesApp {
    fn on_start(&mut self, gl: &glow::Context) -> Result<()> {
        let program = ShaderProgram::from_paths(
            gl,
            &Self::shader_paths(),
            self.diagnostics.shader_diagnostics,
            &mut io::stderr(),
        )?;

        let radius_loc = program.uniform_location(gl, "radius");
        let segments_loc = program.uniform_location(gl, "segments");

        let points = PointBuffer::new(gl, &POINTS)?;

        log::info!("scene ready: {} points", points.point_count());

        self.scene = Some(Scene {
            program,
            points,
            radius_loc,
            segments_loc,
        });

        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        self.params.apply_input(ctx.input);

        let Some(scene) = &self.scene else {
            return AppControl::Continue;
        };
        let params = self.params;

        ctx.render(CLEAR_BLACK, |gl| {
            scene.program.bind(gl);
            scene
                .program
                .set_f32(gl, scene.radius_loc.as_ref(), params.radius);
            scene
                .program
                .set_i32(gl, scene.segments_loc.as_ref(), params.segment_count());

            scene.points.draw(gl);
        });

        AppControl::Continue
    }
}
