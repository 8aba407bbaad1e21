//! One-second countdown

use super::state::{GameEvent, GameOverCause, SimulationState};
use super::terminal::begin_game_over;

/// Clock timer callback. Decrements the countdown while running and starts
/// the terminal sequence when it reaches zero.
pub fn clock_tick(state: &mut SimulationState) {
    if !state.is_running() {
        return;
    }

    state.clock.remaining = state.clock.remaining.saturating_sub(1);
    state.events.push(GameEvent::ClockTicked {
        remaining: state.clock.remaining,
    });

    if state.clock.expired() {
        begin_game_over(state, GameOverCause::ClockExpired);
    }
}
