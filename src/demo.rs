//! Attract-mode autopilot
//!
//! Plays the game by itself for demos and the headless binary. It reads the
//! world like a player would and answers with plain input; it never touches
//! simulation state.

use crate::input::{Action, InputSource, InputState};
use crate::sim::{PlatformKind, World};

/// How far above the actor's feet a platform may be to count as a target
const REACH: f32 = 260.0;
/// Horizontal slack before steering kicks in
const DEADZONE: f32 = 12.0;

/// Simple climbing AI
#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot {
    input: InputState,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide this frame's input from the world
    pub fn think(&mut self, world: &World) -> InputState {
        let actor = &world.actor;
        let feet = actor.bottom();

        // Nearest safe platform above within reach
        let target = world
            .field
            .platforms
            .iter()
            .filter(|p| !p.broken && p.kind != PlatformKind::Breakable)
            .filter(|p| p.top() < feet - 1.0 && p.top() > feet - REACH)
            .max_by(|a, b| a.top().total_cmp(&b.top()));

        let mut next = InputState::default();
        if let Some(platform) = target {
            let goal = platform.left() + platform.width / 2.0;
            let dx = goal - actor.center_x();
            next.left = dx < -DEADZONE;
            next.right = dx > DEADZONE;

            let falling_short = actor.vel.y > 0.0 && feet > platform.top();
            let wants_jump = actor.on_ground || actor.coyote.is_active() || falling_short;
            // Release for a frame after each press so air jumps see a fresh edge
            next.jump = wants_jump && !self.input.jump;
        }

        self.input = next;
        next
    }
}

impl InputSource for Autopilot {
    fn is_down(&self, action: Action) -> bool {
        self.input.is_down(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::session::{Session, SessionState};
    use crate::consts::FIELD_WIDTH;
    use crate::settings::Settings;
    use crate::sim::Platform;

    #[test]
    fn test_autopilot_climbs_a_ladder() {
        let mut session = Session::new(Settings::default(), MemoryStore::new(), 31337).unwrap();
        session.start();
        // Full-width rungs 100 apart, well within one jump of each other
        session.world_mut().field.platforms = (0..30)
            .map(|i| {
                let top = 750.0 - 100.0 * i as f32;
                Platform::new(0.0, top, FIELD_WIDTH, PlatformKind::Standard)
            })
            .collect();

        let mut pilot = Autopilot::new();
        for _ in 0..120 {
            let input = pilot.think(session.world());
            session.tick(1000.0 / 60.0, &input);
        }
        assert_eq!(session.state(), SessionState::Playing);
        assert!(session.score() > 300, "score {}", session.score());
    }

    #[test]
    fn test_steers_toward_target() {
        let mut world = World::new(&Settings::default(), 1);
        world.actor.pos.x = 0.0;
        let mut pilot = Autopilot::new();
        let input = pilot.think(&world);
        assert!(!input.left);
    }
}
