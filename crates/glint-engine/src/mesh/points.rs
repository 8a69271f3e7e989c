use anyhow::{Context, Result};
use glow::HasContext;

/// Components per point: x, y, z.
const COMPONENTS_PER_POINT: usize = 3;

/// A GPU-resident buffer of 3-D points with its attribute layout.
///
/// The vertex array records a single binding: location 0, three floats per
/// point, tightly packed, no offset. Contents are immutable after upload.
pub struct PointBuffer {
    vao: glow::NativeVertexArray,
    count: i32,
}

impl PointBuffer {
    /// Uploads `points` (stride 3, one 3-D position each) as static draw
    /// content and records the attribute layout.
    pub fn new(gl: &glow::Context, points: &[f32]) -> Result<Self> {
        debug_assert!(points.len() % COMPONENTS_PER_POINT == 0);

        unsafe {
            let vao = gl
                .create_vertex_array()
                .map_err(|e| anyhow::anyhow!(e))
                .context("failed to create vertex array")?;
            gl.bind_vertex_array(Some(vao));

            let vbo = gl
                .create_buffer()
                .map_err(|e| anyhow::anyhow!(e))
                .context("failed to create vertex buffer")?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(points),
                glow::STATIC_DRAW,
            );

            gl.vertex_attrib_pointer_f32(
                0,
                COMPONENTS_PER_POINT as i32,
                glow::FLOAT,
                false,
                (COMPONENTS_PER_POINT * size_of::<f32>()) as i32,
                0,
            );
            gl.enable_vertex_attrib_array(0);

            Ok(Self {
                vao,
                count: point_count(points),
            })
        }
    }

    /// Number of points in the buffer.
    pub fn point_count(&self) -> i32 {
        self.count
    }

    /// Binds the vertex array and draws all points as discrete point
    /// primitives.
    pub fn draw(&self, gl: &glow::Context) {
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            gl.draw_arrays(glow::POINTS, 0, self.count);
        }
    }
}

fn point_count(points: &[f32]) -> i32 {
    (points.len() / COMPONENTS_PER_POINT) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_is_floats_over_stride() {
        assert_eq!(point_count(&[0.0; 15]), 5);
        assert_eq!(point_count(&[]), 0);
        assert_eq!(point_count(&[1.0, 2.0, 3.0]), 1);
    }
}
