//! Read-only render snapshots
//!
//! The core never draws. Each frame the render collaborator asks the session
//! for a snapshot and draws it however it likes (world coordinates; subtract
//! `camera_y` for screen space).

use glam::Vec2;
use serde::Serialize;

use crate::session::SessionState;
use crate::sim::{PlatformKind, TrailPoint, World};

/// Which way the actor is looking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Facing {
    Left,
    Forward,
    Right,
}

impl Facing {
    pub fn from_velocity(vx: f32) -> Self {
        if vx > 0.0 {
            Facing::Right
        } else if vx < 0.0 {
            Facing::Left
        } else {
            Facing::Forward
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformView {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub kind: PlatformKind,
    pub color: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorView {
    pub pos: Vec2,
    pub size: Vec2,
    pub facing: Facing,
    pub trail: Vec<TrailPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleView {
    pub pos: Vec2,
    pub color: u32,
    pub size: f32,
    /// Fades out with remaining life
    pub alpha: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub state: SessionState,
    pub camera_y: f32,
    pub score: u64,
    pub high_score: u64,
    /// Drives the background hue
    pub floor_count: u32,
    pub biome: u32,
    pub tutorial_prompt: Option<&'static str>,
    /// Visible platforms only (broken ones are left out)
    pub platforms: Vec<PlatformView>,
    pub actor: ActorView,
    pub particles: Vec<ParticleView>,
}

impl RenderSnapshot {
    pub fn capture(
        world: &World,
        state: SessionState,
        high_score: u64,
        tutorial_prompt: Option<&'static str>,
    ) -> Self {
        let platforms = world
            .field
            .platforms
            .iter()
            .filter(|p| !p.broken)
            .map(|p| PlatformView {
                pos: p.pos,
                width: p.width,
                height: p.height,
                kind: p.kind,
                color: p.kind.color(),
            })
            .collect();

        let particles = world
            .particles
            .particles
            .iter()
            .map(|p| ParticleView {
                pos: p.pos,
                color: p.color,
                size: p.size,
                alpha: p.alpha(),
            })
            .collect();

        Self {
            state,
            camera_y: world.camera.y,
            score: world.score(),
            high_score,
            floor_count: world.field.floor_count,
            biome: world.field.biome,
            tutorial_prompt,
            platforms,
            actor: ActorView {
                pos: world.actor.pos,
                size: world.actor.size,
                facing: Facing::from_velocity(world.actor.vel.x),
                trail: world.actor.trail.clone(),
            },
            particles,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_broken_platforms_are_hidden() {
        let mut world = World::new(&Settings::default(), 11);
        let total = world.field.platforms.len();
        world.field.platforms[2].broken = true;

        let snapshot = RenderSnapshot::capture(&world, SessionState::Playing, 42, None);
        assert_eq!(snapshot.platforms.len(), total - 1);
        assert_eq!(snapshot.high_score, 42);
        assert_eq!(snapshot.actor.facing, Facing::Forward);
    }

    #[test]
    fn test_snapshot_serializes() {
        let world = World::new(&Settings::default(), 11);
        let snapshot = RenderSnapshot::capture(
            &world,
            SessionState::TutorialActive,
            0,
            Some("Welcome"),
        );
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"TutorialActive\""));
        assert!(json.contains("Welcome"));
    }
}
