//! The player-controlled actor
//!
//! Horizontal control, gravity, screen wrap, and the jump state machine with
//! coyote time and jump buffering. Ground contact is never decided here:
//! `on_ground` is cleared at the end of every update and only collision
//! resolution sets it again.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::platform::PlatformKind;
use crate::consts::*;
use crate::input::{Action, InputSource};
use crate::settings::Settings;

/// Fixed-length frame countdown that saturates at zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    remaining: u32,
    duration: u32,
}

impl Countdown {
    /// An expired countdown of the given length
    pub fn new(duration: u32) -> Self {
        Self {
            remaining: 0,
            duration,
        }
    }

    pub fn refill(&mut self) {
        self.remaining = self.duration;
    }

    pub fn clear(&mut self) {
        self.remaining = 0;
    }

    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

/// Trail point for actor rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub alpha: f32,
}

/// What kind of jump fired this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    /// From the ground or within coyote time
    Ground,
    /// Mid-air (double jump)
    Air,
}

/// The player's actor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub on_ground: bool,
    /// Multiplier applied to vx every frame (set by the last platform landed on)
    pub friction: f32,
    pub jump_count: u32,
    pub max_jumps: u32,
    pub coyote: Countdown,
    pub jump_buffer: Countdown,
    /// Jump input as seen last frame (edge detection)
    pub jump_was_down: bool,
    /// Whether to record a speed trail
    pub trail_enabled: bool,
    /// Trail history for rendering (oldest first)
    #[serde(skip)]
    pub trail: Vec<TrailPoint>,
}

impl Actor {
    pub fn new(pos: Vec2, settings: &Settings) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size: Vec2::new(settings.actor_width, settings.actor_height),
            on_ground: false,
            friction: DEFAULT_FRICTION,
            jump_count: 0,
            max_jumps: settings.max_jumps,
            coyote: Countdown::new(settings.coyote_frames),
            jump_buffer: Countdown::new(settings.jump_buffer_frames),
            jump_was_down: false,
            trail_enabled: settings.quality.trails_enabled(),
            trail: Vec::with_capacity(TRAIL_LENGTH + 1),
        }
    }

    /// Actor placed at its spawn point for the given settings
    pub fn spawn(settings: &Settings) -> Self {
        let pos = Vec2::new(
            settings.field_width / 2.0,
            settings.viewport_height - ACTOR_SPAWN_OFFSET,
        );
        Self::new(pos, settings)
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Advance one frame
    ///
    /// Returns the jump performed this frame, if any.
    pub fn update(&mut self, input: &impl InputSource, field_width: f32) -> Option<JumpKind> {
        // Horizontal control
        if input.is_down(Action::MoveLeft) {
            self.vel.x -= ACTOR_ACCELERATION;
        }
        if input.is_down(Action::MoveRight) {
            self.vel.x += ACTOR_ACCELERATION;
        }
        self.vel.x *= self.friction;
        self.vel.x = self.vel.x.clamp(-ACTOR_MAX_SPEED, ACTOR_MAX_SPEED);

        // Integrate, then gravity
        self.pos += self.vel;
        self.vel.y += GRAVITY;

        // Screen wrap once fully off an edge
        if self.pos.x + self.size.x < 0.0 {
            self.pos.x = field_width;
        } else if self.pos.x > field_width {
            self.pos.x = -self.size.x;
        }

        if self.on_ground {
            self.coyote.refill();
            self.jump_count = 0;
        } else {
            self.coyote.tick();
        }

        let jump_down = input.is_down(Action::Jump);
        if jump_down && !self.jump_was_down {
            self.jump_buffer.refill();
        } else {
            self.jump_buffer.tick();
        }

        // Ground jump accepts a held key (bunny hop); air jumps need a fresh press
        let jumped = if self.coyote.is_active() && (self.jump_buffer.is_active() || jump_down) {
            self.ground_jump();
            Some(JumpKind::Ground)
        } else if self.jump_buffer.is_active() && self.jump_count < self.max_jumps {
            self.air_jump();
            Some(JumpKind::Air)
        } else {
            None
        };

        self.jump_was_down = jump_down;
        self.record_trail();
        self.on_ground = false;
        jumped
    }

    fn ground_jump(&mut self) {
        self.vel.y = -(JUMP_FORCE + self.vel.x.abs() * JUMP_SPEED_BONUS);
        self.jump_buffer.clear();
        self.coyote.clear();
        self.jump_count = 1;
    }

    fn air_jump(&mut self) {
        self.vel.y = -JUMP_FORCE * DOUBLE_JUMP_FACTOR;
        self.jump_buffer.clear();
        self.jump_count += 1;
    }

    /// Settle on a platform whose top edge is at `top`
    pub fn land_on(&mut self, top: f32, kind: PlatformKind) {
        self.pos.y = top - self.size.y;
        self.vel.y = 0.0;
        self.on_ground = true;
        self.reset_jumps();
        self.friction = kind.friction();
    }

    pub fn reset_jumps(&mut self) {
        self.jump_count = 0;
        self.coyote.refill();
    }

    fn record_trail(&mut self) {
        if self.trail_enabled
            && (self.vel.x.abs() > TRAIL_SPEED_THRESHOLD || self.vel.y.abs() > TRAIL_SPEED_THRESHOLD)
        {
            self.trail.push(TrailPoint {
                pos: self.pos,
                alpha: TRAIL_START_ALPHA,
            });
        }
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.remove(0);
        }
        for point in &mut self.trail {
            point.alpha = (point.alpha - TRAIL_FADE).max(0.0);
        }
    }
}
