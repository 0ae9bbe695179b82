//! Input port and per-tick snapshots
//!
//! The core never sees device events. Collaborators expose `InputSource`;
//! the session samples it once per tick into an `InputState` so the actor
//! reads a consistent snapshot even if the device state changes mid-frame.

use serde::{Deserialize, Serialize};

use crate::tutorial::TutorialStep;

/// Gameplay actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
}

/// Anything that can report whether an action is held
pub trait InputSource {
    fn is_down(&self, action: Action) -> bool;
}

/// Plain held-action snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputState {
    /// Read every action from `source` once
    pub fn sample(source: &impl InputSource) -> Self {
        Self {
            left: source.is_down(Action::MoveLeft),
            right: source.is_down(Action::MoveRight),
            jump: source.is_down(Action::Jump),
        }
    }

    pub fn set(&mut self, action: Action, down: bool) {
        match action {
            Action::MoveLeft => self.left = down,
            Action::MoveRight => self.right = down,
            Action::Jump => self.jump = down,
        }
    }
}

impl InputSource for InputState {
    fn is_down(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.left,
            Action::MoveRight => self.right,
            Action::Jump => self.jump,
        }
    }
}

/// How the session passes input to the actor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFilter {
    /// Everything passes through
    Raw,
    /// Tutorial gating for the given step
    Restricted(TutorialStep),
}

impl InputFilter {
    /// Apply the filter to a sampled snapshot
    ///
    /// `jump_count` is the actor's jump count before this tick.
    pub fn apply(&self, raw: InputState, jump_count: u32) -> InputState {
        let step = match self {
            InputFilter::Raw => return raw,
            InputFilter::Restricted(step) => *step,
        };
        match step {
            TutorialStep::Welcome => InputState::default(),
            TutorialStep::Move => InputState { jump: false, ..raw },
            TutorialStep::Jump => InputState {
                jump: raw.jump && jump_count == 0,
                ..raw
            },
            TutorialStep::DoubleJump | TutorialStep::Completed => raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: InputState = InputState {
        left: true,
        right: true,
        jump: true,
    };

    #[test]
    fn test_sample_and_set() {
        let mut state = InputState::default();
        state.set(Action::Jump, true);
        state.set(Action::MoveLeft, true);
        let copy = InputState::sample(&state);
        assert_eq!(copy, state);
        assert!(copy.is_down(Action::Jump));
        assert!(!copy.is_down(Action::MoveRight));
    }

    #[test]
    fn test_raw_passes_everything() {
        assert_eq!(InputFilter::Raw.apply(ALL, 1), ALL);
    }

    #[test]
    fn test_tutorial_gating() {
        let welcome = InputFilter::Restricted(TutorialStep::Welcome);
        assert_eq!(welcome.apply(ALL, 0), InputState::default());

        let moving = InputFilter::Restricted(TutorialStep::Move).apply(ALL, 0);
        assert!(moving.left && moving.right && !moving.jump);

        let jump = InputFilter::Restricted(TutorialStep::Jump);
        assert!(jump.apply(ALL, 0).jump);
        assert!(!jump.apply(ALL, 1).jump, "no double jump yet");

        let double = InputFilter::Restricted(TutorialStep::DoubleJump);
        assert_eq!(double.apply(ALL, 1), ALL);
    }
}
