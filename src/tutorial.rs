//! Scripted tutorial
//!
//! Walks the player through moving, jumping and double jumping. Each step
//! gates input (see [`InputFilter`](crate::InputFilter)) until the previous
//! skill has been shown. Timers run on elapsed milliseconds from the clock.

use serde::{Deserialize, Serialize};

use crate::sim::Actor;

/// Welcome screen duration before movement unlocks
pub const WELCOME_MS: f64 = 2000.0;
/// Delay between completion and returning to the start screen
pub const COMPLETION_MS: f64 = 3000.0;
/// Horizontal speed that counts as "moved"
const MOVE_SPEED: f32 = 1.0;
/// Upward speed that counts as "jumped"
const JUMP_SPEED: f32 = 5.0;

/// Tutorial steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TutorialStep {
    Welcome,
    Move,
    Jump,
    DoubleJump,
    Completed,
}

impl TutorialStep {
    /// Overlay text for this step
    pub fn prompt(&self) -> &'static str {
        match self {
            TutorialStep::Welcome => "Welcome to Neon Tower! Let's learn to climb.",
            TutorialStep::Move => "Use Arrow Keys (\u{2190} \u{2192}) to move left and right.",
            TutorialStep::Jump => "Great! Now press SPACE to Jump.",
            TutorialStep::DoubleJump => "Awesome! Jump again in mid-air to DOUBLE JUMP!",
            TutorialStep::Completed => "You're ready! Reach the top!",
        }
    }
}

/// Tutorial progress
#[derive(Debug, Clone, PartialEq)]
pub struct Tutorial {
    step: TutorialStep,
    /// Milliseconds spent in the current timed phase
    timer_ms: f64,
    finished: bool,
}

impl Default for Tutorial {
    fn default() -> Self {
        Self::new()
    }
}

impl Tutorial {
    pub fn new() -> Self {
        Self {
            step: TutorialStep::Welcome,
            timer_ms: 0.0,
            finished: false,
        }
    }

    pub fn step(&self) -> TutorialStep {
        self.step
    }

    /// True once the completion delay has run out
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance the script with this frame's elapsed time and the actor as it
    /// stood at the end of the previous tick
    pub fn update(&mut self, elapsed_ms: f64, actor: &Actor) {
        if self.finished {
            return;
        }
        self.timer_ms += elapsed_ms;

        let next = match self.step {
            TutorialStep::Welcome if self.timer_ms > WELCOME_MS => Some(TutorialStep::Move),
            TutorialStep::Move if actor.vel.x.abs() > MOVE_SPEED => Some(TutorialStep::Jump),
            TutorialStep::Jump if actor.vel.y < -JUMP_SPEED => Some(TutorialStep::DoubleJump),
            TutorialStep::DoubleJump if actor.jump_count > 1 => Some(TutorialStep::Completed),
            TutorialStep::Completed if self.timer_ms >= COMPLETION_MS => {
                self.finished = true;
                None
            }
            _ => None,
        };

        if let Some(step) = next {
            log::debug!("tutorial: {:?} -> {:?}", self.step, step);
            self.step = step;
            self.timer_ms = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use glam::Vec2;

    fn actor() -> Actor {
        Actor::new(Vec2::new(300.0, 400.0), &Settings::default())
    }

    #[test]
    fn test_full_script() {
        let mut tutorial = Tutorial::new();
        let mut a = actor();

        tutorial.update(1000.0, &a);
        assert_eq!(tutorial.step(), TutorialStep::Welcome);
        tutorial.update(1001.0, &a);
        assert_eq!(tutorial.step(), TutorialStep::Move);

        a.vel.x = 0.5;
        tutorial.update(16.0, &a);
        assert_eq!(tutorial.step(), TutorialStep::Move);
        a.vel.x = -2.0;
        tutorial.update(16.0, &a);
        assert_eq!(tutorial.step(), TutorialStep::Jump);

        a.vel.y = -10.0;
        tutorial.update(16.0, &a);
        assert_eq!(tutorial.step(), TutorialStep::DoubleJump);

        a.jump_count = 2;
        tutorial.update(16.0, &a);
        assert_eq!(tutorial.step(), TutorialStep::Completed);
        assert!(!tutorial.is_finished());

        tutorial.update(2999.0, &a);
        assert!(!tutorial.is_finished());
        tutorial.update(1.0, &a);
        assert!(tutorial.is_finished());
    }

    #[test]
    fn test_prompts_differ_per_step() {
        assert_ne!(TutorialStep::Welcome.prompt(), TutorialStep::Move.prompt());
        assert!(TutorialStep::Completed.prompt().contains("ready"));
    }
}
