//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, frame-counted timers only
//! - Seeded RNG only
//! - Stable iteration order (platforms in generation order)
//! - No rendering, storage or input-device dependencies

pub mod actor;
pub mod camera;
pub mod collision;
pub mod field;
pub mod particles;
pub mod platform;
pub mod rng;
pub mod state;
pub mod tick;

pub use actor::{Actor, Countdown, JumpKind, TrailPoint};
pub use camera::CameraTracker;
pub use collision::{Landing, overlaps_landing_band, resolve_landing};
pub use field::PlatformField;
pub use particles::{Particle, ParticleSystem};
pub use platform::{Platform, PlatformKind};
pub use rng::RandomSource;
pub use state::{GameOverCause, World};
pub use tick::{TickOutcome, tick};
