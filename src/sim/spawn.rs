//! Timer-driven spawns: auto-fire and treasure drops

use glam::Vec2;
use rand::Rng;

use super::state::{Label, Projectile, SimulationState, Treasure, TreasureKind};

/// Probability that a fire tick produces a projectile
pub fn fire_chance(state: &SimulationState) -> f64 {
    if state.player.boost {
        state.tuning.boosted_fire_chance
    } else {
        state.tuning.fire_chance
    }
}

/// Fire timer callback. Rolls against the current fire chance and spawns a
/// projectile just above the ship. Returns the new projectile id, if any.
pub fn fire_projectile(state: &mut SimulationState) -> Option<u32> {
    if !state.is_running() {
        return None;
    }
    let chance = fire_chance(state);
    if !state.rng.random_bool(chance) {
        return None;
    }

    let id = state.next_entity_id();
    let pos = state.player.pos - Vec2::new(0.0, state.tuning.muzzle_offset);
    state.projectiles.push(Projectile {
        id,
        pos,
        vel: Vec2::new(0.0, -state.tuning.projectile_speed),
    });
    Some(id)
}

/// Treasure timer callback. Drops a random treasure kind at the top edge
/// with its label floating above it.
pub fn spawn_treasure(state: &mut SimulationState) -> Option<u32> {
    if !state.is_running() {
        return None;
    }

    let (min_x, max_x) = (state.tuning.treasure_min_x, state.tuning.treasure_max_x);
    let x = if max_x > min_x {
        state.rng.random_range(min_x..=max_x)
    } else {
        min_x
    };
    let kind = TreasureKind::ALL[state.rng.random_range(0..TreasureKind::ALL.len())];

    let id = state.next_entity_id();
    let pos = Vec2::new(x, 0.0);
    state.treasures.push(Treasure {
        id,
        kind,
        pos,
        vel: Vec2::new(0.0, state.tuning.treasure_speed()),
        label: Label {
            text: kind.label().to_string(),
            pos: Vec2::new(x, -state.tuning.label_offset),
        },
    });
    log::debug!("Treasure {} dropped at x={:.0}", kind.label(), x);
    Some(id)
}
