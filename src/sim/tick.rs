//! Per-frame simulation tick
//!
//! Fixed order: actor, camera, platform field, particles, collision, fall
//! check. One call per rendered frame.

use super::actor::JumpKind;
use super::collision::{Landing, resolve_landing};
use super::platform::PlatformKind;
use super::state::{GameOverCause, World};
use crate::consts::*;
use crate::input::InputState;

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickOutcome {
    pub jump: Option<JumpKind>,
    pub landing: Option<Landing>,
    /// Set when the attempt ended this tick
    pub game_over: Option<GameOverCause>,
}

/// Advance the world by one frame
///
/// `input` is the already-filtered snapshot for this tick.
pub fn tick(world: &mut World, input: &InputState) -> TickOutcome {
    world.time_ticks += 1;
    let jump = world.actor.update(input, world.settings.field_width);
    let mut outcome = TickOutcome {
        jump,
        ..Default::default()
    };

    world
        .camera
        .update(world.actor.pos.y, world.settings.viewport_height);

    world.field.update(world.camera.y, &mut world.level_rng);

    world.particles.update();

    if let Some(landing) = resolve_landing(&mut world.actor, &world.field.platforms) {
        outcome.landing = Some(landing);
        match landing.kind {
            PlatformKind::Breakable => {
                world.field.platforms[landing.index].broken = true;
                log::debug!("landed on breakable platform at y={}", landing.contact.y);
                outcome.game_over = Some(GameOverCause::Breakable);
                return outcome;
            }
            _ => {
                if landing.impact_speed > LANDING_PARTICLE_SPEED {
                    world.particles.spawn(
                        &mut world.effects_rng,
                        landing.contact,
                        LANDING_PARTICLE_COLOR,
                        LANDING_PARTICLE_COUNT,
                    );
                }
            }
        }
    }

    if world.actor_fell_off() {
        outcome.game_over = Some(GameOverCause::Fell);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::platform::Platform;
    use glam::Vec2;

    /// World with a single full-width platform under a resting actor
    fn resting_world(kind: PlatformKind) -> World {
        let mut world = World::new(&Settings::default(), 7);
        world.field.platforms = vec![Platform::new(0.0, 700.0, FIELD_WIDTH, kind)];
        world.actor.pos = Vec2::new(300.0, 700.0 - ACTOR_SIZE);
        world
    }

    #[test]
    fn test_resting_actor_stays_grounded() {
        let mut world = resting_world(PlatformKind::Standard);
        for _ in 0..30 {
            let outcome = tick(&mut world, &InputState::default());
            assert!(outcome.game_over.is_none());
            assert!(world.actor.on_ground);
            assert_eq!(world.actor.bottom(), 700.0);
        }
        assert!(world.particles.is_empty());
    }

    #[test]
    fn test_breakable_ends_attempt_same_tick() {
        let mut world = resting_world(PlatformKind::Breakable);
        let outcome = tick(&mut world, &InputState::default());
        assert_eq!(outcome.game_over, Some(GameOverCause::Breakable));
        assert!(world.field.platforms[0].broken);
    }

    #[test]
    fn test_hard_landing_throws_dust() {
        let mut world = resting_world(PlatformKind::Standard);
        world.actor.pos.y = 700.0 - ACTOR_SIZE - 6.0;
        world.actor.vel.y = 6.0;
        let outcome = tick(&mut world, &InputState::default());
        let landing = outcome.landing.expect("should land");
        assert!(landing.impact_speed > LANDING_PARTICLE_SPEED);
        assert_eq!(world.particles.len(), LANDING_PARTICLE_COUNT);
    }

    #[test]
    fn test_ice_landing_sets_friction() {
        let mut world = resting_world(PlatformKind::Ice);
        tick(&mut world, &InputState::default());
        assert_eq!(world.actor.friction, ICE_FRICTION);
    }

    #[test]
    fn test_falling_off_screen_ends_attempt() {
        let mut world = World::new(&Settings::default(), 3);
        world.field.platforms.retain(|p| p.top() < 0.0);
        let mut ended = None;
        for _ in 0..200 {
            let outcome = tick(&mut world, &InputState::default());
            if outcome.game_over.is_some() {
                ended = outcome.game_over;
                break;
            }
        }
        assert_eq!(ended, Some(GameOverCause::Fell));
    }

    #[test]
    fn test_determinism() {
        let settings = Settings::default();
        let mut a = World::new(&settings, 99999);
        let mut b = World::new(&settings, 99999);

        let inputs = [
            InputState {
                right: true,
                ..Default::default()
            },
            InputState {
                jump: true,
                right: true,
                ..Default::default()
            },
            InputState::default(),
            InputState {
                jump: true,
                left: true,
                ..Default::default()
            },
        ];

        for input in inputs.iter().cycle().take(400) {
            tick(&mut a, input);
            tick(&mut b, input);
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.actor.pos, b.actor.pos);
        assert_eq!(a.camera, b.camera);
        assert_eq!(a.field.platforms, b.field.platforms);
    }
}
