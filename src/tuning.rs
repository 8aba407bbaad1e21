//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. Defaults reproduce the
//! reference scene; a JSON file may override any subset of fields.

use std::path::Path;
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a tuning file
#[derive(Error, Debug)]
pub enum TuningError {
    /// The file could not be read
    #[error("Failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid tuning JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value is out of its allowed range
    #[error("Invalid tuning: {0}")]
    Invalid(String),
}

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Play area ===
    pub play_width: f32,
    /// Bottom culling bound for enemies and treasures
    pub play_height: f32,
    pub player_start_x: f32,
    pub player_y: f32,
    pub muzzle_offset: f32,

    // === Motion (pixels per frame) ===
    pub projectile_speed: f32,
    pub enemy_speed: f32,
    pub treasure_speed_ratio: f32,

    // === Waves ===
    pub base_enemy_count: u32,
    pub enemy_growth: f64,
    pub row_capacity: u32,
    pub row_left_margin: f32,
    pub row_right_bound: f32,
    pub min_spacing: f32,
    pub spacing_jitter: u32,
    pub row_spacing: f32,

    // === Scoring and clock ===
    pub score_per_kill: u64,
    pub game_seconds: u32,

    // === Timers (milliseconds) ===
    pub wave_interval_ms: u64,
    pub fire_interval_ms: u64,
    pub treasure_interval_ms: u64,

    // === Fire control ===
    pub fire_chance: f64,
    pub boosted_fire_chance: f64,

    // === Treasures ===
    pub treasure_min_x: f32,
    pub treasure_max_x: f32,
    pub label_offset: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            play_width: PLAY_WIDTH,
            play_height: PLAY_HEIGHT,
            player_start_x: PLAYER_START_X,
            player_y: PLAYER_Y,
            muzzle_offset: MUZZLE_OFFSET,

            projectile_speed: PROJECTILE_SPEED,
            enemy_speed: ENEMY_SPEED,
            treasure_speed_ratio: TREASURE_SPEED_RATIO,

            base_enemy_count: BASE_ENEMY_COUNT,
            enemy_growth: ENEMY_GROWTH,
            row_capacity: ROW_CAPACITY,
            row_left_margin: ROW_LEFT_MARGIN,
            row_right_bound: ROW_RIGHT_BOUND,
            min_spacing: MIN_SPACING,
            spacing_jitter: SPACING_JITTER,
            row_spacing: ROW_SPACING,

            score_per_kill: SCORE_PER_KILL,
            game_seconds: GAME_SECONDS,

            wave_interval_ms: 7_000,
            fire_interval_ms: 200,
            treasure_interval_ms: 5_000,

            fire_chance: FIRE_CHANCE,
            boosted_fire_chance: BOOSTED_FIRE_CHANCE,

            treasure_min_x: TREASURE_MIN_X,
            treasure_max_x: TREASURE_MAX_X,
            label_offset: LABEL_OFFSET,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json_str(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(msg: impl Into<String>) -> Result<(), TuningError> {
            Err(TuningError::Invalid(msg.into()))
        }

        if !(self.play_width > 0.0 && self.play_height > 0.0) {
            return invalid("play area must have positive size");
        }
        if !(self.enemy_growth > 1.0) {
            return invalid(format!("enemy_growth must be > 1, got {}", self.enemy_growth));
        }
        if self.row_capacity == 0 {
            return invalid("row_capacity must be at least 1");
        }
        if self.row_right_bound <= self.row_left_margin {
            return invalid("row_right_bound must exceed row_left_margin");
        }
        if self.treasure_max_x < self.treasure_min_x {
            return invalid("treasure_max_x must not be below treasure_min_x");
        }
        if !(self.projectile_speed > 0.0
            && self.enemy_speed > 0.0
            && self.treasure_speed_ratio > 0.0)
        {
            return invalid("speeds must be positive");
        }
        if !(self.min_spacing > 0.0 && self.row_spacing > 0.0) {
            return invalid("min_spacing and row_spacing must be positive");
        }
        for (name, p) in [
            ("fire_chance", self.fire_chance),
            ("boosted_fire_chance", self.boosted_fire_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return invalid(format!("{name} must be within [0, 1], got {p}"));
            }
        }
        if self.wave_interval_ms == 0
            || self.fire_interval_ms == 0
            || self.treasure_interval_ms == 0
        {
            return invalid("timer intervals must be non-zero");
        }
        if self.game_seconds == 0 {
            return invalid("game_seconds must be at least 1");
        }
        Ok(())
    }

    /// Downward treasure speed per frame
    #[inline]
    pub fn treasure_speed(&self) -> f32 {
        self.enemy_speed * self.treasure_speed_ratio
    }

    pub fn player_start(&self) -> Vec2 {
        Vec2::new(self.player_start_x, self.player_y)
    }

    pub fn wave_interval(&self) -> Duration {
        Duration::from_millis(self.wave_interval_ms)
    }

    pub fn fire_interval(&self) -> Duration {
        Duration::from_millis(self.fire_interval_ms)
    }

    pub fn treasure_interval(&self) -> Duration {
        Duration::from_millis(self.treasure_interval_ms)
    }
}
