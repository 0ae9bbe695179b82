//! Frame clock adapter
//!
//! Turns absolute animation timestamps into per-frame elapsed time.

use crate::consts::MAX_FRAME_MS;

#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous call, 0 on the first
    ///
    /// Clamped to `[0, MAX_FRAME_MS]` so a stalled tab or a clock going
    /// backwards can't fast-forward timed steps.
    pub fn elapsed_ms(&mut self, now_ms: f64) -> f64 {
        let elapsed = match self.last_ms {
            Some(last) => (now_ms - last).clamp(0.0, MAX_FRAME_MS),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        elapsed
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_between_frames() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.elapsed_ms(1000.0), 0.0);
        assert_eq!(clock.elapsed_ms(1016.0), 16.0);
        assert_eq!(clock.elapsed_ms(5000.0), MAX_FRAME_MS);
        assert_eq!(clock.elapsed_ms(4000.0), 0.0);
        clock.reset();
        assert_eq!(clock.elapsed_ms(9000.0), 0.0);
    }
}
