//! Headless host
//!
//! Plays the engine's role around the simulation: repeating timers, the
//! per-frame callback, overlap detection and effect playback. Used by the
//! binary and by integration tests to drive complete runs.

pub mod effects;
pub mod overlap;
pub mod timer;

pub use effects::EffectPlayer;
pub use overlap::{Contact, HitBox, detect_contacts};
pub use timer::RepeatingTimer;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{CLOCK_PERIOD, FRAME_DT};
use crate::sim::{self, FrameInput, GameEvent, GameOverCause, GamePhase, SimulationState};
use crate::tuning::{Tuning, TuningError};

/// Result of a finished (or capped) run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: u64,
    pub phase: GamePhase,
    pub cause: Option<GameOverCause>,
    pub score: u64,
    pub waves: u32,
    pub kills: u32,
    pub treasures: u32,
    pub boosted: bool,
    pub seconds_remaining: u32,
    pub frames: u64,
    pub elapsed_ms: u128,
}

/// Engine stand-in owning one simulation
#[derive(Debug, Clone)]
pub struct Host {
    pub state: SimulationState,
    clock_timer: RepeatingTimer,
    wave_timer: RepeatingTimer,
    fire_timer: RepeatingTimer,
    treasure_timer: RepeatingTimer,
    effects: EffectPlayer,
    elapsed: Duration,
    kills: u32,
    treasures: u32,
    cause: Option<GameOverCause>,
}

impl Host {
    /// Validate `tuning`, create a run and spawn its first wave immediately
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        let mut host = Self {
            clock_timer: RepeatingTimer::new(CLOCK_PERIOD),
            wave_timer: RepeatingTimer::new(tuning.wave_interval()),
            fire_timer: RepeatingTimer::new(tuning.fire_interval()),
            treasure_timer: RepeatingTimer::new(tuning.treasure_interval()),
            state: SimulationState::new(seed, tuning),
            effects: EffectPlayer::new(),
            elapsed: Duration::ZERO,
            kills: 0,
            treasures: 0,
            cause: None,
        };
        sim::spawn_wave(&mut host.state);
        log::info!("Run started with seed {}", seed);
        Ok(host)
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_paused(&self) -> bool {
        self.state.phase == GamePhase::Paused
    }

    /// Run one display frame of length `dt` and return the events it produced
    pub fn step(&mut self, dt: Duration, input: &FrameInput) -> Vec<GameEvent> {
        if self.is_paused() {
            return Vec::new();
        }
        self.elapsed += dt;

        // Timer callbacks (independent cadences)
        for _ in 0..self.clock_timer.advance(dt) {
            sim::clock_tick(&mut self.state);
        }
        for _ in 0..self.wave_timer.advance(dt) {
            sim::spawn_wave(&mut self.state);
        }
        for _ in 0..self.fire_timer.advance(dt) {
            sim::fire_projectile(&mut self.state);
        }
        for _ in 0..self.treasure_timer.advance(dt) {
            sim::spawn_treasure(&mut self.state);
        }

        // Per-frame update
        sim::frame(&mut self.state, input);

        // Overlap callbacks
        for contact in detect_contacts(&self.state) {
            match contact {
                Contact::ProjectileEnemy { projectile, enemy } => {
                    sim::on_projectile_hits_enemy(&mut self.state, projectile, enemy);
                }
                Contact::PlayerEnemy { enemy } => {
                    sim::on_player_hits_enemy(&mut self.state, enemy);
                }
                Contact::PlayerTreasure { treasure } => {
                    sim::on_player_hits_treasure(&mut self.state, treasure);
                }
            }
        }

        // Effect playback
        self.effects.sync(&self.state);
        for effect_id in self.effects.advance(dt) {
            sim::on_effect_complete(&mut self.state, effect_id);
        }

        let events = self.state.drain_events();
        for event in &events {
            match event {
                GameEvent::EnemyDestroyed { .. } => self.kills += 1,
                GameEvent::TreasureCollected { .. } => self.treasures += 1,
                GameEvent::GameOver { cause } => self.cause = Some(*cause),
                _ => {}
            }
        }
        events
    }

    /// Drive frames until the run pauses or `max_time` of game time passes.
    ///
    /// `driver` produces each frame's input from the current state.
    pub fn run_until_paused<F>(&mut self, max_time: Duration, mut driver: F) -> RunSummary
    where
        F: FnMut(&SimulationState) -> FrameInput,
    {
        while !self.is_paused() && self.elapsed < max_time {
            let input = driver(&self.state);
            self.step(FRAME_DT, &input);
        }
        if !self.is_paused() {
            log::warn!(
                "Run capped at {:.1}s before game over",
                self.elapsed.as_secs_f32()
            );
        }
        self.summary()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            seed: self.state.seed,
            phase: self.state.phase,
            cause: self.cause,
            score: self.state.score,
            waves: self.state.waves.wave,
            kills: self.kills,
            treasures: self.treasures,
            boosted: self.state.player.boost,
            seconds_remaining: self.state.clock.remaining,
            frames: self.state.frames,
            elapsed_ms: self.elapsed.as_millis(),
        }
    }
}

/// Input driver that leaves the ship where it is
pub fn idle(_state: &SimulationState) -> FrameInput {
    FrameInput::default()
}

/// Input driver that sweeps the ship back and forth across the play area
pub fn sweep(state: &SimulationState) -> FrameInput {
    let width = state.tuning.play_width;
    let period = 240.0; // frames per full left-right-left cycle
    let phase = (state.frames as f32 % period) / period;
    let t = if phase < 0.5 { phase * 2.0 } else { 2.0 - phase * 2.0 };
    FrameInput {
        drag_x: Some(width * 0.1 + t * width * 0.8),
    }
}
