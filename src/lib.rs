//! Neon Tower - an endless vertical platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (platform generation, actor physics, collisions)
//! - `session`: Top-level mode machine (idle / playing / tutorial / game over)
//! - `input`: Input port and per-tick snapshots
//! - `persistence`: High score storage port and adapters
//! - `render`: Read-only snapshots handed to the render collaborator

pub mod clock;
pub mod demo;
pub mod error;
pub mod highscores;
pub mod input;
pub mod persistence;
pub mod render;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tutorial;

pub use error::{ConfigError, PersistenceError};
pub use highscores::HighScore;
pub use input::{Action, InputFilter, InputSource, InputState};
pub use session::{Session, SessionState};
pub use settings::{QualityPreset, Settings};

/// Game configuration constants
///
/// Physics runs in whole frames: velocities are units per frame and
/// accelerations are units per frame squared.
pub mod consts {
    /// Default playfield dimensions
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const VIEWPORT_HEIGHT: f32 = 800.0;

    /// Actor bounding box
    pub const ACTOR_SIZE: f32 = 30.0;
    /// Actor spawns this far above the bottom of the viewport
    pub const ACTOR_SPAWN_OFFSET: f32 = 150.0;

    /// Horizontal acceleration per held direction
    pub const ACTOR_ACCELERATION: f32 = 1.2;
    pub const ACTOR_MAX_SPEED: f32 = 8.0;
    pub const GRAVITY: f32 = 0.7;
    /// Upward impulse of a ground jump (before the speed bonus)
    pub const JUMP_FORCE: f32 = 17.0;
    /// Share of horizontal speed added to a ground jump
    pub const JUMP_SPEED_BONUS: f32 = 0.2;
    /// Air jumps are slightly weaker
    pub const DOUBLE_JUMP_FACTOR: f32 = 0.9;
    pub const MAX_JUMPS: u32 = 2;
    pub const COYOTE_FRAMES: u32 = 6;
    pub const JUMP_BUFFER_FRAMES: u32 = 6;

    /// Friction multipliers applied to vx every frame
    pub const DEFAULT_FRICTION: f32 = 0.8;
    pub const ICE_FRICTION: f32 = 0.98;

    /// Trail (cosmetic)
    pub const TRAIL_LENGTH: usize = 5;
    pub const TRAIL_SPEED_THRESHOLD: f32 = 5.0;
    pub const TRAIL_START_ALPHA: f32 = 0.5;
    pub const TRAIL_FADE: f32 = 0.05;

    /// Platform geometry
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    pub const MOVING_PLATFORM_SPEED: f32 = 2.0;
    /// Ground platform sits this far above the bottom of the viewport
    pub const GROUND_OFFSET: f32 = 50.0;

    /// Generation keeps at least one platform above camera_y - LOOKAHEAD_MARGIN
    pub const LOOKAHEAD_MARGIN: f32 = 100.0;
    /// Platforms further than this below the viewport are culled
    pub const CULL_MARGIN: f32 = 200.0;

    pub const MIN_GAP: f32 = 80.0;
    pub const BASE_MAX_GAP: f32 = 120.0;
    pub const GAP_DIFFICULTY_SPAN: f32 = 50.0;
    pub const MIN_PLATFORM_WIDTH: f32 = 80.0;
    pub const BASE_MAX_PLATFORM_WIDTH: f32 = 200.0;
    pub const WIDTH_DIFFICULTY_SPAN: f32 = 50.0;
    /// Floors until difficulty saturates at 1.0
    pub const DIFFICULTY_FLOORS: f32 = 500.0;
    /// Special platform kinds only appear past this floor
    pub const SPECIAL_PLATFORM_FLOOR: u32 = 10;

    /// Collision landing band extends this far around the platform
    pub const LANDING_TOLERANCE: f32 = 10.0;
    /// Landings faster than this throw up dust
    pub const LANDING_PARTICLE_SPEED: f32 = 2.0;
    pub const LANDING_PARTICLE_COUNT: usize = 5;
    pub const LANDING_PARTICLE_COLOR: u32 = 0xFF_FF_FF;

    /// Camera keeps the actor this far down the viewport (fraction of height)
    pub const CAMERA_FOLLOW_RATIO: f32 = 0.6;

    /// Particles
    pub const PARTICLE_MAX_SPEED: f32 = 2.0;
    pub const PARTICLE_MIN_LIFE: u32 = 20;
    pub const PARTICLE_MAX_LIFE: u32 = 40;
    pub const PARTICLE_MIN_SIZE: u32 = 2;
    pub const PARTICLE_MAX_SIZE: u32 = 5;
    pub const PARTICLE_SHRINK: f32 = 0.95;

    /// Longest frame the clock will report (ms)
    pub const MAX_FRAME_MS: f64 = 100.0;
}

/// Normalized difficulty in [0, 1] for a given generated floor count
#[inline]
pub fn difficulty_for_floor(floor_count: u32) -> f32 {
    (floor_count as f32 / consts::DIFFICULTY_FLOORS).clamp(0.0, 1.0)
}
