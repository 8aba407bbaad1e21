//! Game state and core simulation types
//!
//! Everything the scene mutates lives in [`SimulationState`], passed
//! explicitly to each operation.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Player explosion playing; timers and input are frozen
    Exploding,
    /// Loop halted, final score shown
    Paused,
}

/// Why the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    ClockExpired,
    EnemyCollision,
}

/// Fire-rate tier shown on the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedTier {
    Low,
    Mid,
}

impl SpeedTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedTier::Low => "LOW",
            SpeedTier::Mid => "MID",
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Cleared when the ship explodes (the ship is never removed)
    pub visible: bool,
    /// Fire-rate boost from the boost treasure
    pub boost: bool,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            visible: true,
            boost: false,
        }
    }

    pub fn speed_tier(&self) -> SpeedTier {
        if self.boost { SpeedTier::Mid } else { SpeedTier::Low }
    }
}

/// A player shot travelling upward
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
}

/// A descending enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Wave this enemy was spawned in (1-based)
    pub wave: u32,
}

/// Treasure types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreasureKind {
    CRun,
    CStat,
    /// Grants the fire-rate boost
    Ew,
    Bx,
    FuSa,
    ETrust,
    Vs,
}

impl TreasureKind {
    pub const ALL: [TreasureKind; 7] = [
        TreasureKind::CRun,
        TreasureKind::CStat,
        TreasureKind::Ew,
        TreasureKind::Bx,
        TreasureKind::FuSa,
        TreasureKind::ETrust,
        TreasureKind::Vs,
    ];

    /// Text of the floating label
    pub fn label(&self) -> &'static str {
        match self {
            TreasureKind::CRun => "C-RUN",
            TreasureKind::CStat => "C-STAT",
            TreasureKind::Ew => "EW",
            TreasureKind::Bx => "BX",
            TreasureKind::FuSa => "FuSa",
            TreasureKind::ETrust => "eTrust",
            TreasureKind::Vs => "VS",
        }
    }

    pub fn is_boost(&self) -> bool {
        *self == TreasureKind::Ew
    }
}

/// Floating text attached to a treasure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub pos: Vec2,
}

/// A falling bonus item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Treasure {
    pub id: u32,
    pub kind: TreasureKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub label: Label,
}

/// One-shot effect kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    EnemyExplosion,
    PlayerExplosion,
}

/// A one-shot destruction effect awaiting its completion callback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Effect {
    pub id: u32,
    pub kind: EffectKind,
    pub pos: Vec2,
}

/// Outbound notifications for the host (HUD, audio, logs)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WaveSpawned { wave: u32, requested: u64, placed: u32 },
    EnemyDestroyed { enemy_id: u32, pos: Vec2, score: u64 },
    TreasureCollected { kind: TreasureKind },
    BoostActivated { tier: SpeedTier },
    ClockTicked { remaining: u32 },
    GameOver { cause: GameOverCause },
    FinalScore { score: u64 },
}

/// Wave counter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveState {
    /// Number of waves spawned so far (the last spawned wave's index)
    pub wave: u32,
}

/// Countdown in whole seconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameClock {
    pub remaining: u32,
}

impl GameClock {
    pub fn new(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    pub fn expired(&self) -> bool {
        self.remaining == 0
    }
}

/// Complete scene state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub player: Player,
    /// Live entities (sorted by id)
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub treasures: Vec<Treasure>,
    /// Effects whose completion has not been reported yet
    pub effects: Vec<Effect>,
    pub waves: WaveState,
    pub score: u64,
    pub clock: GameClock,
    /// Display frames advanced
    pub frames: u64,
    /// Pending events. Nothing in `sim` clears this queue: whoever drives
    /// the simulation must call [`SimulationState::drain_events`] every
    /// frame (as `Host::step` does) or it grows for the whole run.
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl SimulationState {
    /// Create a fresh run with the given seed and tuning
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            player: Player::new(tuning.player_start()),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            treasures: Vec::new(),
            effects: Vec::new(),
            waves: WaveState::default(),
            score: 0,
            clock: GameClock::new(tuning.game_seconds),
            frames: 0,
            events: Vec::new(),
            next_id: 1,
            tuning,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Spawn a one-shot effect and return its id
    pub fn spawn_effect(&mut self, kind: EffectKind, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.effects.push(Effect { id, kind, pos });
        id
    }

    /// Ensure entity lists are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.projectiles.sort_by_key(|p| p.id);
        self.enemies.sort_by_key(|e| e.id);
        self.treasures.sort_by_key(|t| t.id);
        self.effects.sort_by_key(|e| e.id);
    }
}
