//! Cosmetic particle bursts
//!
//! Nothing in here feeds back into gameplay.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::consts::*;

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 0xRRGGBB
    pub color: u32,
    /// Frames left
    pub life: u32,
    pub max_life: u32,
    pub size: f32,
}

impl Particle {
    /// Remaining life as a 0-1 fraction (used for fading)
    pub fn alpha(&self) -> f32 {
        if self.max_life == 0 {
            0.0
        } else {
            self.life as f32 / self.max_life as f32
        }
    }
}

/// Fire-and-forget particle emitter
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    pub particles: Vec<Particle>,
    /// Live particle cap (from the quality preset)
    pub max_particles: usize,
}

impl ParticleSystem {
    pub fn new(max_particles: usize) -> Self {
        Self {
            particles: Vec::new(),
            max_particles,
        }
    }

    /// Emit up to `count` particles at `pos`
    ///
    /// Returns how many were actually spawned (the cap may cut a burst short).
    pub fn spawn(&mut self, rng: &mut RandomSource, pos: Vec2, color: u32, count: usize) -> usize {
        let room = self.max_particles.saturating_sub(self.particles.len());
        let count = count.min(room);
        for _ in 0..count {
            let vel = Vec2::new(
                rng.range(-PARTICLE_MAX_SPEED, PARTICLE_MAX_SPEED),
                rng.range(-PARTICLE_MAX_SPEED, PARTICLE_MAX_SPEED),
            );
            let life = rng.range_inclusive_u32(PARTICLE_MIN_LIFE, PARTICLE_MAX_LIFE);
            let size = rng.range_inclusive_u32(PARTICLE_MIN_SIZE, PARTICLE_MAX_SIZE) as f32;
            self.particles.push(Particle {
                pos,
                vel,
                color,
                life,
                max_life: life,
                size,
            });
        }
        count
    }

    /// Advance every particle one frame and drop the dead ones
    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.pos += particle.vel;
            particle.life = particle.life.saturating_sub(1);
            particle.size *= PARTICLE_SHRINK;
        }
        self.particles.retain(|p| p.life > 0);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
