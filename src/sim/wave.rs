//! Enemy wave generation
//!
//! Waves grow exponentially and are laid out in rows from the top of the
//! play area, with jittered horizontal spacing.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, GameEvent, SimulationState};
use crate::tuning::Tuning;

/// Enemy count for a 1-based wave index: floor(base * growth^(wave - 1)).
///
/// Computed in `u64`; counts past `u64::MAX` saturate. Only the first
/// `max_rows * row_capacity` of them can ever be placed.
pub fn enemy_count_for_wave(base: u32, growth: f64, wave: u32) -> u64 {
    if wave == 0 {
        return 0;
    }
    let exponent = i32::try_from(wave - 1).unwrap_or(i32::MAX);
    (f64::from(base) * growth.powi(exponent)).floor() as u64
}

/// Row layout parameters for a formation
#[derive(Debug, Clone, Copy)]
pub struct WaveLayout {
    pub row_capacity: u32,
    pub left_margin: f32,
    pub right_bound: f32,
    pub min_spacing: f32,
    pub spacing_jitter: u32,
    pub row_spacing: f32,
    /// Rows that start inside the play area
    pub max_rows: u32,
}

impl From<&Tuning> for WaveLayout {
    fn from(t: &Tuning) -> Self {
        Self {
            row_capacity: t.row_capacity.max(1),
            left_margin: t.row_left_margin,
            right_bound: t.row_right_bound,
            min_spacing: t.min_spacing,
            spacing_jitter: t.spacing_jitter,
            row_spacing: t.row_spacing,
            max_rows: (t.play_height / t.row_spacing).ceil() as u32,
        }
    }
}

/// Compute start positions for `count` enemies.
///
/// Each row starts at the left margin and advances by `min_spacing` plus
/// jitter. A slot landing at or past the right bound is dropped and the
/// cursor stays put, so crowded rows may hold fewer than `row_capacity`.
/// Rows past `max_rows` would start below the play area and are never laid
/// out.
pub fn layout_wave(count: u64, layout: &WaveLayout, rng: &mut impl Rng) -> Vec<Vec2> {
    let capacity = u64::from(layout.row_capacity);
    let rows = count.div_ceil(capacity).min(u64::from(layout.max_rows));
    let row_fit = ((layout.right_bound - layout.left_margin) / layout.min_spacing).max(0.0) as u64;
    let slots = count.min(rows * capacity.min(row_fit.saturating_add(1)));
    let mut positions = Vec::with_capacity(usize::try_from(slots).unwrap_or(0));

    for row in 0..rows {
        let in_row = capacity.min(count - row * capacity);
        let y = row as f32 * layout.row_spacing;
        let mut last_x = layout.left_margin;

        for _ in 0..in_row {
            if last_x + layout.min_spacing >= layout.right_bound {
                break;
            }
            let spacing = layout.min_spacing + rng.random_range(0..=layout.spacing_jitter) as f32;
            let x = last_x + spacing;
            if x < layout.right_bound {
                positions.push(Vec2::new(x, y));
                last_x = x;
            }
        }
    }

    positions
}

/// Spawn the next wave. Returns the number of enemies actually placed.
pub fn spawn_wave(state: &mut SimulationState) -> u32 {
    if !state.is_running() {
        return 0;
    }

    state.waves.wave += 1;
    let wave = state.waves.wave;
    let requested =
        enemy_count_for_wave(state.tuning.base_enemy_count, state.tuning.enemy_growth, wave);
    let layout = WaveLayout::from(&state.tuning);
    let vel = Vec2::new(0.0, state.tuning.enemy_speed);

    let positions = layout_wave(requested, &layout, &mut state.rng);
    let placed = u32::try_from(positions.len()).unwrap_or(u32::MAX);
    for pos in positions {
        let id = state.next_entity_id();
        state.enemies.push(Enemy { id, pos, vel, wave });
    }

    log::info!("Wave {}: {} enemies requested, {} placed", wave, requested, placed);
    state.events.push(GameEvent::WaveSpawned {
        wave,
        requested,
        placed,
    });
    placed
}
