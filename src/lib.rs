//! Jewel Raid - a vertical drag-to-move arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (waves, motion, collision resolution, clock)
//! - `host`: Headless stand-in for the engine scheduler, overlap checks and effect playback
//! - `tuning`: Data-driven game balance

pub mod host;
pub mod sim;
pub mod tuning;

pub use host::{Host, RunSummary};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Display frame length the per-frame deltas are tuned for (60 Hz)
    pub const FRAME_DT: Duration = Duration::from_micros(16_667);
    /// Clock tick period, fixed by the game rules (not tunable)
    pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);

    /// Play area dimensions (pixels, origin top-left, y grows downward)
    pub const PLAY_WIDTH: f32 = 800.0;
    pub const PLAY_HEIGHT: f32 = 600.0;

    /// Player ship defaults
    pub const PLAYER_START_X: f32 = 400.0;
    pub const PLAYER_Y: f32 = 550.0;
    /// Projectiles leave the ship this far above its center
    pub const MUZZLE_OFFSET: f32 = 20.0;

    /// Per-frame speeds
    pub const PROJECTILE_SPEED: f32 = 7.5;
    pub const ENEMY_SPEED: f32 = 2.0;
    /// Treasures fall slightly faster than enemies
    pub const TREASURE_SPEED_RATIO: f32 = 1.1;

    /// Wave scaling: floor(BASE * GROWTH^(wave - 1))
    pub const BASE_ENEMY_COUNT: u32 = 5;
    pub const ENEMY_GROWTH: f64 = 1.2;

    /// Wave formation layout
    pub const ROW_CAPACITY: u32 = 8;
    pub const ROW_LEFT_MARGIN: f32 = 50.0;
    pub const ROW_RIGHT_BOUND: f32 = 750.0;
    pub const MIN_SPACING: f32 = 60.0;
    pub const SPACING_JITTER: u32 = 40;
    pub const ROW_SPACING: f32 = 60.0;

    /// Score awarded per enemy destroyed
    pub const SCORE_PER_KILL: u64 = 10;
    /// Round length in seconds
    pub const GAME_SECONDS: u32 = 300;

    /// Chance that a fire-timer tick actually spawns a projectile
    pub const FIRE_CHANCE: f64 = 0.4;
    pub const BOOSTED_FIRE_CHANCE: f64 = 0.6;

    /// Treasure drop range and label placement
    pub const TREASURE_MIN_X: f32 = 50.0;
    pub const TREASURE_MAX_X: f32 = 750.0;
    pub const LABEL_OFFSET: f32 = 20.0;

    /// Sprite sizes used for hit boxes (bodies are 80% of the sprite)
    pub const PLAYER_SIZE: (f32, f32) = (64.0, 64.0);
    pub const ENEMY_SIZE: (f32, f32) = (51.2, 51.2);
    pub const PROJECTILE_SIZE: (f32, f32) = (8.0, 24.0);
    pub const TREASURE_SIZE: (f32, f32) = (25.6, 25.6);
    pub const HITBOX_SCALE: f32 = 0.8;

    /// Explosion sheet: 9 frames at 20 fps
    pub const EXPLOSION_FRAMES: u32 = 9;
    pub const EXPLOSION_FPS: u32 = 20;
}
