/// Decaying-average framerate meter.
///
/// Accumulates instantaneous framerates (`1 / dt`) and reports the running
/// average. Both accumulators reset after a fixed window so the average tracks
/// recent behavior rather than the whole process lifetime.
#[derive(Debug, Clone)]
pub struct FramerateMeter {
    sum: f64,
    count: f64,
    window: u64,
}

/// Frames accumulated before the average resets.
const DEFAULT_WINDOW: u64 = 3500;

impl FramerateMeter {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_WINDOW)
    }

    pub fn with_window(window: u64) -> Self {
        debug_assert!(window > 0);
        Self {
            sum: 0.0,
            count: 0.0,
            window,
        }
    }

    /// Records one frame of duration `dt` seconds and returns the current
    /// average framerate.
    pub fn tick(&mut self, dt: f32) -> f64 {
        self.sum += 1.0 / f64::from(dt);
        self.count += 1.0;
        let average = self.sum / self.count;

        if self.count as u64 == self.window {
            self.sum = 0.0;
            self.count = 0.0;
        }

        average
    }
}

impl Default for FramerateMeter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_constant_rate_is_that_rate() {
        let mut meter = FramerateMeter::new();
        let mut avg = 0.0;
        for _ in 0..10 {
            avg = meter.tick(0.01); // 100 fps
        }
        assert!((avg - 100.0).abs() < 1e-6);
    }

    #[test]
    fn average_blends_mixed_rates() {
        let mut meter = FramerateMeter::new();
        let _ = meter.tick(0.01); // 100 fps
        let avg = meter.tick(0.005); // 200 fps
        assert!((avg - 150.0).abs() < 1e-6);
    }

    #[test]
    fn accumulators_reset_at_window_boundary() {
        let mut meter = FramerateMeter::with_window(4);
        for _ in 0..4 {
            let _ = meter.tick(0.01);
        }
        // Window elapsed: the next tick starts a fresh average.
        let avg = meter.tick(0.005);
        assert!((avg - 200.0).abs() < 1e-6);
    }
}
