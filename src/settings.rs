//! Game settings
//!
//! Everything a session needs to know up front. Validated once when a
//! session is built; nothing downstream re-checks or clamps.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Maximum live particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 50,
            QualityPreset::Medium => 500,
            QualityPreset::High => 2000,
        }
    }

    /// Whether the actor leaves a speed trail
    pub fn trails_enabled(&self) -> bool {
        !matches!(self, QualityPreset::Low)
    }
}

impl FromStr for QualityPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(QualityPreset::Low),
            "medium" | "med" => Ok(QualityPreset::Medium),
            "high" => Ok(QualityPreset::High),
            other => Err(format!("unknown quality preset: {other}")),
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Playfield width (also the horizontal wrap distance)
    pub field_width: f32,
    /// Visible height; drives camera follow, culling and the fall check
    pub viewport_height: f32,

    pub actor_width: f32,
    pub actor_height: f32,

    /// Ground jump plus air jumps
    pub max_jumps: u32,
    pub coyote_frames: u32,
    pub jump_buffer_frames: u32,

    /// Extra distance below the viewport the actor may fall before game over
    #[serde(default)]
    pub game_over_margin: f32,

    /// Graphics quality preset
    #[serde(default)]
    pub quality: QualityPreset,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            actor_width: ACTOR_SIZE,
            actor_height: ACTOR_SIZE,
            max_jumps: MAX_JUMPS,
            coyote_frames: COYOTE_FRAMES,
            jump_buffer_frames: JUMP_BUFFER_FRAMES,
            game_over_margin: 0.0,
            quality: QualityPreset::Medium,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Reject anything the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.field_width.is_finite() && self.field_width > 0.0) {
            return Err(ConfigError::FieldWidth(self.field_width));
        }
        if !(self.viewport_height.is_finite() && self.viewport_height > 0.0) {
            return Err(ConfigError::ViewportHeight(self.viewport_height));
        }
        let actor_ok = |v: f32| v.is_finite() && v > 0.0;
        if !actor_ok(self.actor_width) || !actor_ok(self.actor_height) {
            return Err(ConfigError::ActorSize {
                width: self.actor_width,
                height: self.actor_height,
            });
        }
        if self.max_jumps == 0 {
            return Err(ConfigError::ZeroMaxJumps);
        }
        if self.coyote_frames == 0 {
            return Err(ConfigError::ZeroWindow("coyote"));
        }
        if self.jump_buffer_frames == 0 {
            return Err(ConfigError::ZeroWindow("jump buffer"));
        }
        if !(self.game_over_margin.is_finite() && self.game_over_margin >= 0.0) {
            return Err(ConfigError::GameOverMargin(self.game_over_margin));
        }
        Ok(())
    }

    /// Effective particle cap
    pub fn max_particles(&self) -> usize {
        self.quality.max_particles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert_eq!(Settings::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_non_positive_viewport() {
        let settings = Settings {
            viewport_height: 0.0,
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(ConfigError::ViewportHeight(0.0)));

        let settings = Settings {
            field_width: -10.0,
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(ConfigError::FieldWidth(-10.0)));
    }

    #[test]
    fn test_rejects_zero_max_jumps() {
        let settings = Settings {
            max_jumps: 0,
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(ConfigError::ZeroMaxJumps));
    }

    #[test]
    fn test_rejects_nan_actor() {
        let settings = Settings {
            actor_width: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::ActorSize { .. })
        ));
    }

    #[test]
    fn test_quality_from_str() {
        assert_eq!("HIGH".parse::<QualityPreset>(), Ok(QualityPreset::High));
        assert_eq!("med".parse::<QualityPreset>(), Ok(QualityPreset::Medium));
        assert!("ultra".parse::<QualityPreset>().is_err());
        assert_eq!(QualityPreset::Low.as_str().parse(), Ok(QualityPreset::Low));
        assert_eq!(Settings::from_preset(QualityPreset::Low).max_particles(), 50);
    }
}
