//! Collision resolution
//!
//! The engine's overlap detector decides *which* entities touch; these
//! handlers decide what happens. Handlers take entity ids, and a stale id
//! (entity already destroyed this frame) is silently ignored. Nothing is
//! resolved once the run has left `Running`.

use super::state::{EffectKind, GameEvent, GameOverCause, SimulationState};
use super::terminal::begin_game_over;

/// Outcome of a treasure pickup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pickup {
    /// Treasure id no longer exists (or the run is over)
    Ignored,
    /// Treasure removed, no gameplay effect
    Collected,
    /// Treasure removed and the fire-rate boost switched on
    Boosted,
}

/// A projectile overlapped an enemy: both die, the enemy explodes and the
/// score grows by `score_per_kill`. Returns whether the hit was applied.
pub fn on_projectile_hits_enemy(
    state: &mut SimulationState,
    projectile_id: u32,
    enemy_id: u32,
) -> bool {
    if !state.is_running() {
        return false;
    }
    let Some(p_idx) = state.projectiles.iter().position(|p| p.id == projectile_id) else {
        return false;
    };
    let Some(e_idx) = state.enemies.iter().position(|e| e.id == enemy_id) else {
        return false;
    };

    state.projectiles.remove(p_idx);
    let enemy = state.enemies.remove(e_idx);
    state.spawn_effect(EffectKind::EnemyExplosion, enemy.pos);
    state.score += state.tuning.score_per_kill;

    state.events.push(GameEvent::EnemyDestroyed {
        enemy_id,
        pos: enemy.pos,
        score: state.score,
    });
    true
}

/// The player touched an enemy: start the terminal sequence. The enemy is
/// left in place; the sequence freezes the scene.
pub fn on_player_hits_enemy(state: &mut SimulationState, enemy_id: u32) -> bool {
    if !state.enemies.iter().any(|e| e.id == enemy_id) {
        return false;
    }
    begin_game_over(state, GameOverCause::EnemyCollision).is_some()
}

/// The player touched a treasure: remove it with its label and apply the
/// boost if it is the boost kind and no boost is active yet.
pub fn on_player_hits_treasure(state: &mut SimulationState, treasure_id: u32) -> Pickup {
    if !state.is_running() {
        return Pickup::Ignored;
    }
    let Some(idx) = state.treasures.iter().position(|t| t.id == treasure_id) else {
        return Pickup::Ignored;
    };

    let treasure = state.treasures.remove(idx);
    log::debug!("Treasure collected: {}", treasure.kind.label());
    state.events.push(GameEvent::TreasureCollected {
        kind: treasure.kind,
    });

    if treasure.kind.is_boost() && !state.player.boost {
        state.player.boost = true;
        let tier = state.player.speed_tier();
        log::info!("Boost active, speed {}", tier.as_str());
        state.events.push(GameEvent::BoostActivated { tier });
        return Pickup::Boosted;
    }
    Pickup::Collected
}
