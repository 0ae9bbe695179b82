//! Platform entities

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Platform types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlatformKind {
    #[default]
    Standard,
    /// Slippery: landing raises actor friction
    Ice,
    /// Slides horizontally, bouncing off the field edges
    Moving,
    /// Landing on it ends the run
    Breakable,
}

impl PlatformKind {
    /// Friction the actor adopts after landing
    pub fn friction(&self) -> f32 {
        match self {
            PlatformKind::Ice => ICE_FRICTION,
            _ => DEFAULT_FRICTION,
        }
    }

    /// Palette color (0xRRGGBB)
    pub fn color(&self) -> u32 {
        match self {
            PlatformKind::Standard => 0x00_FF_00,
            PlatformKind::Ice => 0x00_FF_FF,
            PlatformKind::Moving => 0xFF_00_FF,
            PlatformKind::Breakable => 0xFF_44_44,
        }
    }
}

/// A platform (axis-aligned, top edge at `pos.y`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub kind: PlatformKind,
    /// Horizontal velocity (nonzero only for Moving)
    pub vx: f32,
    /// Broken platforms are ignored by collision and rendering
    pub broken: bool,
}

impl Platform {
    /// A stationary platform of the given kind
    pub fn new(x: f32, y: f32, width: f32, kind: PlatformKind) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width,
            height: PLATFORM_HEIGHT,
            kind,
            vx: 0.0,
            broken: false,
        }
    }

    /// A Moving platform with the given initial velocity
    pub fn moving(x: f32, y: f32, width: f32, vx: f32) -> Self {
        Self {
            vx,
            ..Self::new(x, y, width, PlatformKind::Moving)
        }
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    /// Advance a Moving platform and bounce it off the field edges
    pub fn update(&mut self, field_width: f32) {
        if self.kind != PlatformKind::Moving {
            return;
        }
        self.pos.x += self.vx;
        if self.pos.x <= 0.0 {
            self.vx = self.vx.abs();
        } else if self.right() >= field_width {
            self.vx = -self.vx.abs();
        }
    }
}
