//! Actor-vs-platform landing resolution
//!
//! Platforms are one-way: the actor passes through them on the way up and
//! only lands while falling. The first matching platform in field order wins,
//! so with overlapping candidates the earliest generated (lowest) one is used.

use glam::Vec2;

use super::actor::Actor;
use super::platform::{Platform, PlatformKind};
use crate::consts::LANDING_TOLERANCE;

/// A resolved landing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    /// Index into the platform list
    pub index: usize,
    pub kind: PlatformKind,
    /// Downward speed just before the landing zeroed it
    pub impact_speed: f32,
    /// Where the actor's feet touched (horizontal centre, platform top)
    pub contact: Vec2,
}

/// Whether `actor` is in landing position over `platform`
///
/// The landing band starts `LANDING_TOLERANCE` above the platform top and ends
/// `LANDING_TOLERANCE` below its underside, so a fast fall that sank into the
/// platform within a single frame still counts.
pub fn overlaps_landing_band(actor: &Actor, platform: &Platform) -> bool {
    let horizontal = actor.pos.x < platform.right() && actor.pos.x + actor.size.x > platform.left();
    if !horizontal {
        return false;
    }
    let bottom = actor.bottom();
    let top = platform.top();
    bottom >= top - LANDING_TOLERANCE && bottom <= top + platform.height + LANDING_TOLERANCE
}

/// Land the actor on the first eligible platform, if any
///
/// Never resolves while the actor is rising.
pub fn resolve_landing(actor: &mut Actor, platforms: &[Platform]) -> Option<Landing> {
    if actor.vel.y < 0.0 {
        return None;
    }

    let (index, platform) = platforms
        .iter()
        .enumerate()
        .find(|(_, p)| !p.broken && overlaps_landing_band(actor, p))?;

    let impact_speed = actor.vel.y;
    actor.land_on(platform.top(), platform.kind);

    Some(Landing {
        index,
        kind: platform.kind,
        impact_speed,
        contact: Vec2::new(actor.center_x(), platform.top()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Settings;

    fn actor_at(x: f32, bottom: f32, vy: f32) -> Actor {
        let mut actor = Actor::new(Vec2::new(x, bottom - ACTOR_SIZE), &Settings::default());
        actor.vel.y = vy;
        actor.jump_count = 2;
        actor
    }

    #[test]
    fn test_lands_on_standard_platform() {
        let platforms = vec![Platform::new(200.0, 500.0, 200.0, PlatformKind::Standard)];
        let mut actor = actor_at(250.0, 495.0, 0.0);

        let landing = resolve_landing(&mut actor, &platforms).expect("should land");
        assert_eq!(landing.index, 0);
        assert_eq!(landing.kind, PlatformKind::Standard);
        assert!(actor.on_ground);
        assert_eq!(actor.vel.y, 0.0);
        assert_eq!(actor.jump_count, 0);
        assert!(actor.coyote.is_active());
        assert_eq!(actor.bottom(), 500.0);
        assert_eq!(actor.friction, DEFAULT_FRICTION);
    }

    #[test]
    fn test_penetrating_fall_still_lands() {
        let platforms = vec![Platform::new(200.0, 500.0, 200.0, PlatformKind::Ice)];
        let mut actor = actor_at(250.0, 515.0, 12.0);

        let landing = resolve_landing(&mut actor, &platforms).unwrap();
        assert_eq!(landing.impact_speed, 12.0);
        assert_eq!(landing.contact, Vec2::new(250.0 + ACTOR_SIZE / 2.0, 500.0));
        assert_eq!(actor.bottom(), 500.0);
        assert_eq!(actor.friction, ICE_FRICTION);
    }

    #[test]
    fn test_rising_actor_passes_through() {
        let platforms = vec![Platform::new(200.0, 500.0, 200.0, PlatformKind::Standard)];
        let mut actor = actor_at(250.0, 505.0, -3.0);
        assert!(resolve_landing(&mut actor, &platforms).is_none());
        assert!(!actor.on_ground);
    }

    #[test]
    fn test_outside_band_misses() {
        let platforms = vec![Platform::new(200.0, 500.0, 200.0, PlatformKind::Standard)];

        let mut above = actor_at(250.0, 500.0 - LANDING_TOLERANCE - 1.0, 1.0);
        assert!(resolve_landing(&mut above, &platforms).is_none());

        let mut below =
            actor_at(250.0, 500.0 + PLATFORM_HEIGHT + LANDING_TOLERANCE + 1.0, 1.0);
        assert!(resolve_landing(&mut below, &platforms).is_none());

        // Edge-touching horizontally is not an overlap
        let mut beside = actor_at(400.0, 500.0, 1.0);
        assert!(resolve_landing(&mut beside, &platforms).is_none());
    }

    #[test]
    fn test_broken_platforms_are_ignored() {
        let mut broken = Platform::new(200.0, 500.0, 200.0, PlatformKind::Breakable);
        broken.broken = true;
        let mut actor = actor_at(250.0, 500.0, 1.0);
        assert!(resolve_landing(&mut actor, &[broken]).is_none());
    }

    #[test]
    fn test_first_platform_in_order_wins() {
        let platforms = vec![
            Platform::new(200.0, 505.0, 200.0, PlatformKind::Ice),
            Platform::new(200.0, 498.0, 200.0, PlatformKind::Standard),
        ];
        let mut actor = actor_at(250.0, 500.0, 1.0);
        let landing = resolve_landing(&mut actor, &platforms).unwrap();
        assert_eq!(landing.index, 0);
        assert_eq!(actor.bottom(), 505.0);
        assert_eq!(actor.friction, ICE_FRICTION);
    }
}
