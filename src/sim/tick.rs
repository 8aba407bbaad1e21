//! Per-frame simulation step
//!
//! The engine calls [`frame`] once per display frame. Timer callbacks
//! (waves, fire, clock, treasures) are separate entry points.

use super::motion::{Culled, advance};
use super::state::{GamePhase, SimulationState};

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Horizontal drag target for the ship (the ship's y is fixed)
    pub drag_x: Option<f32>,
}

/// Advance the scene by one display frame
pub fn frame(state: &mut SimulationState, input: &FrameInput) -> Culled {
    // Halted loop: nothing moves
    if state.phase == GamePhase::Paused {
        return Culled::default();
    }

    // Input is frozen once the ship has exploded
    if state.phase == GamePhase::Running
        && let Some(x) = input.drag_x
    {
        state.player.pos.x = x.clamp(0.0, state.tuning.play_width);
    }

    state.frames += 1;
    let culled = advance(state);

    // Ensure deterministic ordering
    state.normalize_order();
    culled
}
