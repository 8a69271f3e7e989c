use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use glow::HasContext;

use super::source::load_shader_source;

/// Compiler/linker logs are bounded to this many bytes in failure reports.
const MAX_LOG_BYTES: usize = 512;

/// One stage of the pipeline.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StageKind {
    Vertex,
    Geometry,
    Fragment,
}

impl StageKind {
    fn gl_type(self) -> u32 {
        match self {
            StageKind::Vertex => glow::VERTEX_SHADER,
            StageKind::Geometry => glow::GEOMETRY_SHADER,
            StageKind::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    fn label(self) -> &'static str {
        match self {
            StageKind::Vertex => "VERTEX",
            StageKind::Geometry => "GEOMETRY",
            StageKind::Fragment => "FRAGMENT",
        }
    }
}

/// Source file paths for a vertex/geometry/fragment pipeline.
#[derive(Debug, Clone)]
pub struct ShaderPaths {
    pub vertex: PathBuf,
    pub geometry: PathBuf,
    pub fragment: PathBuf,
}

/// A linked shader program.
///
/// The handle lives until process exit; there is no destruction path beyond
/// context teardown.
pub struct ShaderProgram {
    program: glow::NativeProgram,
}

impl ShaderProgram {
    /// Loads, compiles, and links the three pipeline stages.
    ///
    /// Stage compile status is checked independently; a failed stage writes
    /// its source and a bounded compiler log to `sink` (when `diagnostics` is
    /// set) and compilation of the remaining stages continues. Link status is
    /// checked and reported the same way. Neither failure is fatal: the
    /// returned program is simply unusable for drawing.
    ///
    /// Only GL object creation itself is an error, since it indicates a dead
    /// or lost context rather than bad shader source.
    pub fn from_paths<W: Write>(
        gl: &glow::Context,
        paths: &ShaderPaths,
        diagnostics: bool,
        sink: &mut W,
    ) -> Result<Self> {
        let program = unsafe { gl.create_program() }
            .map_err(|e| anyhow::anyhow!(e))
            .context("failed to create GL program object")?;

        let stages = [
            (StageKind::Vertex, &paths.vertex),
            (StageKind::Geometry, &paths.geometry),
            (StageKind::Fragment, &paths.fragment),
        ];

        let mut handles = Vec::with_capacity(stages.len());

        for (kind, path) in stages {
            let source = load_shader_source(path);
            let shader = compile_stage(gl, kind, &source, diagnostics, sink)?;
            unsafe { gl.attach_shader(program, shader) };
            handles.push(shader);
        }

        unsafe { gl.link_program(program) };

        if !unsafe { gl.get_program_link_status(program) } {
            let log = unsafe { gl.get_program_info_log(program) };
            log::error!("shader program link failed");
            if diagnostics {
                let _ = sink.write_all(link_failure_report(&log).as_bytes());
            }
        }

        // Stage objects are no longer needed once the program is linked.
        for shader in handles {
            unsafe {
                gl.detach_shader(program, shader);
                gl.delete_shader(shader);
            }
        }

        Ok(Self { program })
    }

    /// Makes this program current.
    pub fn bind(&self, gl: &glow::Context) {
        unsafe { gl.use_program(Some(self.program)) };
    }

    /// Resolves a uniform location by name.
    ///
    /// `None` for unknown names; writes through `None` are silent no-ops per
    /// GL convention.
    pub fn uniform_location(
        &self,
        gl: &glow::Context,
        name: &str,
    ) -> Option<glow::NativeUniformLocation> {
        unsafe { gl.get_uniform_location(self.program, name) }
    }

    /// Pushes a float uniform. The program must be bound.
    pub fn set_f32(
        &self,
        gl: &glow::Context,
        location: Option<&glow::NativeUniformLocation>,
        value: f32,
    ) {
        unsafe { gl.uniform_1_f32(location, value) };
    }

    /// Pushes an int uniform. The program must be bound.
    pub fn set_i32(
        &self,
        gl: &glow::Context,
        location: Option<&glow::NativeUniformLocation>,
        value: i32,
    ) {
        unsafe { gl.uniform_1_i32(location, value) };
    }
}

fn compile_stage<W: Write>(
    gl: &glow::Context,
    kind: StageKind,
    source: &str,
    diagnostics: bool,
    sink: &mut W,
) -> Result<glow::NativeShader> {
    let shader = unsafe { gl.create_shader(kind.gl_type()) }
        .map_err(|e| anyhow::anyhow!(e))
        .with_context(|| format!("failed to create {} shader object", kind.label()))?;

    // The loader's trailing NUL sentinel stays host-side; GL receives counted
    // bytes and an interior NUL is not valid GLSL.
    let source = source.trim_end_matches('\0');

    unsafe {
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
    }

    if !unsafe { gl.get_shader_compile_status(shader) } {
        let log = unsafe { gl.get_shader_info_log(shader) };
        log::error!("{} shader compilation failed", kind.label());
        if diagnostics {
            let _ = sink.write_all(compile_failure_report(kind, source, &log).as_bytes());
        }
    }

    Ok(shader)
}

/// Formats a stage compile failure: the offending source followed by the
/// compiler log, bounded to [`MAX_LOG_BYTES`].
fn compile_failure_report(kind: StageKind, source: &str, log: &str) -> String {
    format!(
        "{source}\n\nERROR {} SHADER COMPILATION FAILED\n{}\n",
        kind.label(),
        truncate_log(log)
    )
}

/// Formats a program link failure with a bounded linker log.
fn link_failure_report(log: &str) -> String {
    format!("ERROR SHADER PROGRAM LINK FAILED\n{}\n", truncate_log(log))
}

/// Bounds `log` to [`MAX_LOG_BYTES`], respecting char boundaries.
fn truncate_log(log: &str) -> &str {
    if log.len() <= MAX_LOG_BYTES {
        return log;
    }

    let mut end = MAX_LOG_BYTES;
    while !log.is_char_boundary(end) {
        end -= 1;
    }
    &log[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_report_names_the_stage() {
        let report = compile_failure_report(StageKind::Vertex, "void main() {}", "0:1 bad");
        assert!(report.contains("VERTEX SHADER COMPILATION FAILED"));
        assert!(report.contains("void main() {}"));
        assert!(report.contains("0:1 bad"));

        let report = compile_failure_report(StageKind::Geometry, "", "");
        assert!(report.contains("GEOMETRY SHADER COMPILATION FAILED"));

        let report = compile_failure_report(StageKind::Fragment, "", "");
        assert!(report.contains("FRAGMENT SHADER COMPILATION FAILED"));
    }

    #[test]
    fn link_report_is_labelled() {
        let report = link_failure_report("undefined reference");
        assert!(report.contains("SHADER PROGRAM LINK FAILED"));
        assert!(report.contains("undefined reference"));
    }

    #[test]
    fn long_logs_are_bounded() {
        let log = "e".repeat(4096);
        assert_eq!(truncate_log(&log).len(), MAX_LOG_BYTES);
    }

    #[test]
    fn short_logs_pass_through() {
        assert_eq!(truncate_log("short"), "short");
    }

    #[test]
    fn truncation_lands_on_a_char_boundary() {
        // Multi-byte characters straddling the limit must not split.
        let log = "é".repeat(MAX_LOG_BYTES);
        let truncated = truncate_log(&log);
        assert!(truncated.len() <= MAX_LOG_BYTES);
        assert!(log.is_char_boundary(truncated.len()));
    }
}
