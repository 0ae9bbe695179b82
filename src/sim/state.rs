//! World state for a single attempt
//!
//! Everything the per-frame tick mutates lives here. A new attempt gets a new
//! `World`; nothing carries over except through the session.

use super::actor::Actor;
use super::camera::CameraTracker;
use super::field::PlatformField;
use super::particles::ParticleSystem;
use super::rng::{EFFECTS_STREAM, LEVEL_STREAM, RandomSource};
use crate::settings::Settings;

/// Why an attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    /// Landed on a Breakable platform
    Breakable,
    /// Dropped below the bottom of the viewport
    Fell,
}

/// Complete simulation state for one attempt
#[derive(Debug, Clone)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    pub settings: Settings,
    /// Drives platform generation
    pub level_rng: RandomSource,
    /// Drives particles (never touches the level)
    pub effects_rng: RandomSource,
    pub field: PlatformField,
    pub actor: Actor,
    pub camera: CameraTracker,
    /// Visual particles (not gameplay-affecting)
    pub particles: ParticleSystem,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl World {
    /// Fresh attempt: ground platform, first screen of platforms, actor at spawn
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let mut level_rng = RandomSource::new(seed, LEVEL_STREAM);
        let field = PlatformField::new(settings.field_width, settings.viewport_height, &mut level_rng);
        Self {
            seed,
            settings: settings.clone(),
            level_rng,
            effects_rng: RandomSource::new(seed, EFFECTS_STREAM),
            field,
            actor: Actor::spawn(settings),
            camera: CameraTracker::new(),
            particles: ParticleSystem::new(settings.max_particles()),
            time_ticks: 0,
        }
    }

    /// Height score of this attempt
    pub fn score(&self) -> u64 {
        self.camera.score
    }

    /// Whether the actor has dropped out of the bottom of the play area
    pub fn actor_fell_off(&self) -> bool {
        self.actor.pos.y
            > self.camera.y + self.settings.viewport_height + self.settings.game_over_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_new_world_layout() {
        let world = World::new(&Settings::default(), 12345);
        assert_eq!(world.score(), 0);
        assert_eq!(world.camera.y, 0.0);
        assert_eq!(world.actor.pos.x, FIELD_WIDTH / 2.0);
        assert_eq!(world.actor.pos.y, VIEWPORT_HEIGHT - ACTOR_SPAWN_OFFSET);
        assert!(world.particles.is_empty());
        assert!(!world.actor_fell_off());
    }

    #[test]
    fn test_fall_check_respects_margin() {
        let settings = Settings {
            game_over_margin: 50.0,
            ..Default::default()
        };
        let mut world = World::new(&settings, 1);
        world.actor.pos.y = VIEWPORT_HEIGHT + 40.0;
        assert!(!world.actor_fell_off());
        world.actor.pos.y = VIEWPORT_HEIGHT + 51.0;
        assert!(world.actor_fell_off());
    }
}
