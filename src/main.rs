//! Neon Tower headless demo
//!
//! Runs the autopilot through one attempt with logging, persisting the high
//! score to a JSON file. Real frontends drive `Session` themselves.
//!
//! Environment:
//! - `NEON_TOWER_SEED`: run seed (random if unset)
//! - `NEON_TOWER_QUALITY`: low / medium / high
//! - `NEON_TOWER_SAVE`: high score file (default `neon_tower_highscore.json`)

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use neon_tower::clock::FrameClock;
    use neon_tower::demo::Autopilot;
    use neon_tower::persistence::JsonFileStore;
    use neon_tower::{QualityPreset, Session, SessionState, Settings};

    /// Ten minutes at 60 fps
    const MAX_FRAMES: u64 = 60 * 60 * 10;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    env_logger::init();
    log::info!("Neon Tower (headless demo) starting...");

    let seed = std::env::var("NEON_TOWER_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random::<u64>);

    let quality = match std::env::var("NEON_TOWER_QUALITY") {
        Ok(value) => value.parse().unwrap_or_else(|e| {
            log::warn!("{}; using default quality", e);
            QualityPreset::default()
        }),
        Err(_) => QualityPreset::default(),
    };

    let save_path = std::env::var("NEON_TOWER_SAVE")
        .unwrap_or_else(|_| "neon_tower_highscore.json".to_string());

    log::info!("Seed {}, quality {}", seed, quality.as_str());
    let settings = Settings::from_preset(quality);
    let mut session = match Session::new(settings, JsonFileStore::new(save_path), seed) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Invalid settings: {}", e);
            std::process::exit(1);
        }
    };

    session.start();
    let mut clock = FrameClock::new();
    let mut pilot = Autopilot::new();

    for frame in 0..MAX_FRAMES {
        let elapsed = clock.elapsed_ms(frame as f64 * FRAME_MS);
        let input = pilot.think(session.world());
        session.tick(elapsed, &input);

        if session.state() == SessionState::GameOver {
            break;
        }
        if frame % 600 == 0 {
            let snapshot = session.snapshot();
            log::info!(
                "frame {}: score {}, floor {}, {} platforms, {} particles",
                frame,
                snapshot.score,
                snapshot.floor_count,
                snapshot.platforms.len(),
                snapshot.particles.len()
            );
        }
    }

    println!(
        "Final score: {} (high score {})",
        session.last_score().unwrap_or_else(|| session.score()),
        session.high_score()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser frontends drive `neon_tower::Session` directly
}
