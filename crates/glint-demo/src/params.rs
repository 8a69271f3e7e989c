use glint_engine::input::{InputState, Key};

/// Per-frame radius delta while W/S is held.
pub const RADIUS_STEP: f32 = 0.0003;

/// Per-frame segment-count delta while D/A is held.
pub const SEGMENT_STEP: f32 = 0.01;

/// The two live render parameters, owned by the app and pushed as uniforms
/// every frame.
///
/// Neither value is validated or clamped: out-of-range values degrade the
/// picture, not the program. `segments` accumulates as a float so a held key
/// sweeps smoothly; it truncates to an integer at upload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderParams {
    pub radius: f32,
    pub segments: f32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            radius: 0.3,
            segments: 10.0,
        }
    }
}

impl RenderParams {
    /// Applies one frame of held-key adjustments.
    ///
    /// Each held key contributes its fixed delta unconditionally: no
    /// debounce, no acceleration, no decay when released.
    pub fn apply_input(&mut self, input: &InputState) {
        if input.key_down(Key::W) {
            self.radius += RADIUS_STEP;
        }
        if input.key_down(Key::S) {
            self.radius -= RADIUS_STEP;
        }
        if input.key_down(Key::D) {
            self.segments += SEGMENT_STEP;
        }
        if input.key_down(Key::A) {
            self.segments -= SEGMENT_STEP;
        }
    }

    /// Segment count as uploaded: truncated toward zero.
    pub fn segment_count(&self) -> i32 {
        self.segments as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_engine::input::InputState;

    fn holding(keys: &[Key]) -> InputState {
        let mut input = InputState::default();
        for k in keys {
            let _ = input.keys_down.insert(*k);
        }
        input
    }

    #[test]
    fn held_radius_key_accumulates_linearly() {
        let mut params = RenderParams::default();
        let input = holding(&[Key::W]);

        let frames = 200;
        let mut expected = 0.3f32;
        for _ in 0..frames {
            params.apply_input(&input);
            expected += RADIUS_STEP;
        }

        assert_eq!(params.radius, expected);
        assert_eq!(params.segments, 10.0);
    }

    #[test]
    fn opposing_keys_cancel_per_frame() {
        let mut params = RenderParams::default();
        let input = holding(&[Key::W, Key::S]);

        for _ in 0..50 {
            params.apply_input(&input);
        }

        assert_eq!(params.radius, 0.3);
    }

    #[test]
    fn released_keys_leave_params_unchanged() {
        let mut params = RenderParams::default();
        let input = InputState::default();

        for _ in 0..100 {
            params.apply_input(&input);
        }

        assert_eq!(params, RenderParams::default());
    }

    #[test]
    fn segments_adjust_on_d_and_a() {
        let mut params = RenderParams::default();

        params.apply_input(&holding(&[Key::D]));
        assert_eq!(params.segments, 10.0 + SEGMENT_STEP);

        params.apply_input(&holding(&[Key::A]));
        assert_eq!(params.segments, 10.0);
    }

    #[test]
    fn segment_count_truncates_toward_zero() {
        let mut params = RenderParams::default();

        params.segments = 10.99;
        assert_eq!(params.segment_count(), 10);

        params.segments = -3.7;
        assert_eq!(params.segment_count(), -3);
    }

    #[test]
    fn no_clamping_below_zero() {
        let mut params = RenderParams {
            radius: 0.0001,
            segments: 0.0,
        };
        let input = holding(&[Key::S, Key::A]);

        for _ in 0..10 {
            params.apply_input(&input);
        }

        assert!(params.radius < 0.0);
        assert!(params.segments < 0.0);
    }
}
