//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame deltas only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, input or overlap detection

pub mod clock;
pub mod collision;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod terminal;
pub mod tick;
pub mod wave;

pub use clock::clock_tick;
pub use collision::{
    Pickup, on_player_hits_enemy, on_player_hits_treasure, on_projectile_hits_enemy,
};
pub use motion::{Culled, advance};
pub use spawn::{fire_chance, fire_projectile, spawn_treasure};
pub use state::{
    Effect, EffectKind, Enemy, GameClock, GameEvent, GameOverCause, GamePhase, Label, Player,
    Projectile, SimulationState, SpeedTier, Treasure, TreasureKind, WaveState,
};
pub use terminal::{begin_game_over, on_effect_complete};
pub use tick::{FrameInput, frame};
pub use wave::{WaveLayout, enemy_count_for_wave, layout_wave, spawn_wave};
