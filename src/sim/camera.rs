//! Upward-only camera and height score

use serde::{Deserialize, Serialize};

use crate::consts::CAMERA_FOLLOW_RATIO;

/// Vertical scroll position and the score derived from it
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraTracker {
    /// Top of the viewport in world space (decreases while climbing)
    pub y: f32,
    /// floor(|y|) of the highest camera position reached
    pub score: u64,
}

impl CameraTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow the actor upward; never scrolls back down
    ///
    /// Returns true if the camera moved.
    pub fn update(&mut self, actor_y: f32, viewport_height: f32) -> bool {
        let target = actor_y - viewport_height * CAMERA_FOLLOW_RATIO;
        if target < self.y {
            self.y = target;
            self.score = self.y.abs().floor() as u64;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_follows_upward_only() {
        let mut camera = CameraTracker::new();
        assert!(!camera.update(650.0, 800.0));
        assert_eq!(camera.y, 0.0);

        assert!(camera.update(-20.5, 800.0));
        assert!((camera.y - -500.5).abs() < 1e-3);
        assert_eq!(camera.score, 500);

        // Falling back down leaves camera and score alone
        let held = camera.y;
        assert!(!camera.update(300.0, 800.0));
        assert_eq!(camera.y, held);
        assert_eq!(camera.score, 500);
    }

    #[test]
    fn test_score_never_decreases() {
        let mut camera = CameraTracker::new();
        let mut last = 0;
        for actor_y in [400.0, -100.0, 200.0, -900.0, -850.0, 1000.0, -2000.0] {
            camera.update(actor_y, 800.0);
            assert!(camera.score >= last);
            last = camera.score;
        }
        assert_eq!(last, 2480);
    }
}
