//! Procedural platform field
//!
//! Platforms are generated upward ahead of the camera and culled once they
//! drop far enough below it. The backing list stays in generation order,
//! which is also decreasing-y order.

use super::platform::{Platform, PlatformKind};
use super::rng::RandomSource;
use crate::consts::*;
use crate::difficulty_for_floor;

/// The platform store plus generation bookkeeping
#[derive(Debug, Clone)]
pub struct PlatformField {
    pub field_width: f32,
    pub viewport_height: f32,
    /// Generation order (decreasing y)
    pub platforms: Vec<Platform>,
    /// Platforms generated so far this attempt
    pub floor_count: u32,
    /// Reserved for visual theming, never advanced
    pub biome: u32,
    last_kind: Option<PlatformKind>,
}

impl PlatformField {
    /// Build a field with its ground platform and the first screen of platforms
    pub fn new(field_width: f32, viewport_height: f32, rng: &mut RandomSource) -> Self {
        let mut field = Self {
            field_width,
            viewport_height,
            platforms: Vec::new(),
            floor_count: 0,
            biome: 0,
            last_kind: None,
        };
        field.reset(rng);
        field
    }

    /// Back to a single ground platform, then generate up to the starting camera
    pub fn reset(&mut self, rng: &mut RandomSource) {
        self.platforms.clear();
        self.floor_count = 0;
        self.biome = 0;
        self.last_kind = None;
        self.platforms.push(Platform::new(
            0.0,
            self.viewport_height - GROUND_OFFSET,
            self.field_width,
            PlatformKind::Standard,
        ));
        self.generate(0.0, rng);
    }

    /// Current difficulty in [0, 1]
    pub fn difficulty(&self) -> f32 {
        difficulty_for_floor(self.floor_count)
    }

    /// Make sure some platform sits above `camera_y - LOOKAHEAD_MARGIN`
    ///
    /// Returns the number of platforms added.
    pub fn generate(&mut self, camera_y: f32, rng: &mut RandomSource) -> usize {
        let mut last_y = match self.platforms.last() {
            Some(p) => p.top(),
            None => panic!("platform field is empty; the newest platform is never culled"),
        };

        let mut added = 0;
        while last_y > camera_y - LOOKAHEAD_MARGIN {
            let platform = self.next_platform(last_y, rng);
            last_y = platform.top();
            self.platforms.push(platform);
            added += 1;
        }

        if added > 0 {
            log::trace!(
                "generated {} platforms (floor {}, difficulty {:.2})",
                added,
                self.floor_count,
                self.difficulty()
            );
        }
        added
    }

    /// Roll the platform that follows one at `last_y`
    fn next_platform(&mut self, last_y: f32, rng: &mut RandomSource) -> Platform {
        self.floor_count += 1;
        let difficulty = self.difficulty();

        let max_gap = BASE_MAX_GAP + GAP_DIFFICULTY_SPAN * difficulty;
        let gap = rng.range(MIN_GAP, max_gap).floor();
        let y = last_y - gap;

        let (x, width) = if self.field_width < MIN_PLATFORM_WIDTH {
            // Too narrow for a regular platform: span the whole field
            (0.0, self.field_width)
        } else {
            let max_width =
                (BASE_MAX_PLATFORM_WIDTH - WIDTH_DIFFICULTY_SPAN * difficulty).min(self.field_width);
            let width = rng.range(MIN_PLATFORM_WIDTH, max_width).floor();
            let x = rng.range(0.0, self.field_width - width).floor();
            (x, width)
        };

        let mut kind = self.roll_kind(difficulty, rng);
        if kind == PlatformKind::Breakable && self.last_kind == Some(PlatformKind::Breakable) {
            kind = PlatformKind::Standard;
        }
        self.last_kind = Some(kind);

        match kind {
            PlatformKind::Moving => Platform::moving(x, y, width, MOVING_PLATFORM_SPEED * rng.sign()),
            _ => Platform::new(x, y, width, kind),
        }
    }

    /// Cumulative-threshold draw; special kinds only past the opening floors
    fn roll_kind(&self, difficulty: f32, rng: &mut RandomSource) -> PlatformKind {
        if self.floor_count <= SPECIAL_PLATFORM_FLOOR {
            return PlatformKind::Standard;
        }

        let roll = rng.unit();
        let bias = 0.2 * difficulty;
        if roll < 0.10 + bias {
            PlatformKind::Moving
        } else if roll < 0.20 + bias {
            PlatformKind::Ice
        } else if roll < 0.25 + bias {
            PlatformKind::Breakable
        } else {
            PlatformKind::Standard
        }
    }

    /// Drop every platform more than `CULL_MARGIN` below the viewport
    ///
    /// Returns the number of platforms removed.
    pub fn cull(&mut self, camera_y: f32) -> usize {
        let limit = camera_y + self.viewport_height + CULL_MARGIN;
        let before = self.platforms.len();
        self.platforms.retain(|p| p.top() <= limit);
        before - self.platforms.len()
    }

    /// Advance Moving platforms
    pub fn tick(&mut self) {
        let field_width = self.field_width;
        for platform in &mut self.platforms {
            platform.update(field_width);
        }
    }

    /// Per-frame maintenance: extend, prune, move
    pub fn update(&mut self, camera_y: f32, rng: &mut RandomSource) {
        self.generate(camera_y, rng);
        self.cull(camera_y);
        self.tick();
    }

    /// The most recently generated (highest) platform
    pub fn highest(&self) -> Option<&Platform> {
        self.platforms.last()
    }
}
