//! Session state machine
//!
//! Idle -> Playing -> GameOver -> Idle, with TutorialActive as a scripted
//! variant of Playing. The session owns the world, picks the input filter,
//! and is the only place the high score is read or written.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::highscores::HighScore;
use crate::input::{InputFilter, InputSource, InputState};
use crate::persistence::HighScoreStore;
use crate::render::RenderSnapshot;
use crate::settings::Settings;
use crate::sim::{GameOverCause, TickOutcome, World, tick};
use crate::tutorial::{Tutorial, TutorialStep};

/// Top-level mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Start screen
    Idle,
    /// Normal run
    Playing,
    /// Scripted tutorial run
    TutorialActive,
    /// Run ended; final score on display
    GameOver,
}

/// A play session: one world at a time plus the persisted high score
pub struct Session<S: HighScoreStore> {
    settings: Settings,
    store: S,
    state: SessionState,
    world: World,
    tutorial: Option<Tutorial>,
    high_score: HighScore,
    /// Score of the most recently finished attempt
    last_score: Option<u64>,
    base_seed: u64,
    attempts: u64,
}

impl<S: HighScoreStore> Session<S> {
    /// Validate settings and load the high score
    ///
    /// Storage failures are not fatal: the session starts from a high score of 0.
    pub fn new(settings: Settings, mut store: S, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;
        let high_score = HighScore::load(&mut store);
        let world = World::new(&settings, seed);
        log::info!(
            "Session ready ({}x{}, seed {})",
            settings.field_width,
            settings.viewport_height,
            seed
        );
        Ok(Self {
            settings,
            store,
            state: SessionState::Idle,
            world,
            tutorial: None,
            high_score,
            last_score: None,
            base_seed: seed,
            attempts: 0,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct world access for collaborators that stage scenes (and tests)
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best
    }

    pub fn last_score(&self) -> Option<u64> {
        self.last_score
    }

    pub fn score(&self) -> u64 {
        self.world.score()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn tutorial_step(&self) -> Option<TutorialStep> {
        self.tutorial.as_ref().map(Tutorial::step)
    }

    /// Filter applied to input in the current state
    pub fn input_filter(&self) -> InputFilter {
        match (&self.tutorial, self.state) {
            (Some(tutorial), SessionState::TutorialActive) => {
                InputFilter::Restricted(tutorial.step())
            }
            _ => InputFilter::Raw,
        }
    }

    /// Begin a normal run with a fresh world
    pub fn start(&mut self) {
        let seed = self.next_seed();
        self.world = World::new(&self.settings, seed);
        self.tutorial = None;
        self.state = SessionState::Playing;
        log::info!("Run started (seed {})", self.world.seed);
    }

    /// Begin the tutorial with a fresh world
    pub fn start_tutorial(&mut self) {
        let seed = self.next_seed();
        self.world = World::new(&self.settings, seed);
        self.tutorial = Some(Tutorial::new());
        self.state = SessionState::TutorialActive;
        log::info!("Tutorial started");
    }

    /// Leave the game-over screen; returns false if not on it
    pub fn return_to_idle(&mut self) -> bool {
        if self.state != SessionState::GameOver {
            return false;
        }
        self.state = SessionState::Idle;
        true
    }

    /// Advance one frame
    ///
    /// `input` is sampled exactly once. Returns the tick outcome, or `None`
    /// if nothing was simulated (idle, game over, or the tutorial just ended).
    pub fn tick(&mut self, elapsed_ms: f64, input: &impl InputSource) -> Option<TickOutcome> {
        if !matches!(
            self.state,
            SessionState::Playing | SessionState::TutorialActive
        ) {
            return None;
        }

        let raw = InputState::sample(input);

        if let Some(tutorial) = self.tutorial.as_mut() {
            tutorial.update(elapsed_ms, &self.world.actor);
            if tutorial.is_finished() {
                self.end_tutorial();
                return None;
            }
        }

        let filtered = self.input_filter().apply(raw, self.world.actor.jump_count);
        let outcome = tick(&mut self.world, &filtered);

        if let Some(cause) = outcome.game_over {
            self.end_attempt(cause);
        }

        Some(outcome)
    }

    /// Snapshot for the render collaborator
    pub fn snapshot(&self) -> RenderSnapshot {
        let prompt = match self.state {
            SessionState::TutorialActive => self.tutorial.as_ref().map(|t| t.step().prompt()),
            _ => None,
        };
        RenderSnapshot::capture(&self.world, self.state, self.high_score.best, prompt)
    }

    fn end_attempt(&mut self, cause: GameOverCause) {
        let score = self.world.score();
        self.settle_high_score(score);

        if self.state == SessionState::TutorialActive {
            log::info!("Tutorial attempt ended ({:?}), restarting", cause);
            self.start_tutorial();
            return;
        }

        self.last_score = Some(score);
        self.state = SessionState::GameOver;
        log::info!(
            "Game over ({:?}): score {}, high score {}",
            cause,
            score,
            self.high_score.best
        );
    }

    fn end_tutorial(&mut self) {
        let score = self.world.score();
        self.settle_high_score(score);
        self.tutorial = None;
        self.state = SessionState::Idle;
        log::info!("Tutorial complete");
    }

    fn settle_high_score(&mut self, score: u64) {
        if self.high_score.record(score) {
            self.high_score.save(&mut self.store);
        }
    }

    fn next_seed(&mut self) -> u64 {
        let seed = self.base_seed ^ self.attempts.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        self.attempts += 1;
        seed
    }
}
