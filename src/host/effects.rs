//! One-shot effect playback
//!
//! Tracks how long each explosion has been playing and reports the ids
//! whose animation finished.

use std::time::Duration;

use crate::consts::{EXPLOSION_FPS, EXPLOSION_FRAMES};
use crate::sim::SimulationState;

/// Length of one explosion animation
pub fn explosion_duration() -> Duration {
    Duration::from_millis(u64::from(EXPLOSION_FRAMES) * 1000 / u64::from(EXPLOSION_FPS))
}

#[derive(Debug, Clone, Default)]
pub struct EffectPlayer {
    playing: Vec<(u32, Duration)>,
}

impl EffectPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start playing any effect the simulation spawned since the last sync
    pub fn sync(&mut self, state: &SimulationState) {
        for effect in &state.effects {
            if !self.playing.iter().any(|(id, _)| *id == effect.id) {
                self.playing.push((effect.id, Duration::ZERO));
            }
        }
    }

    /// Advance playback and return the ids that completed
    pub fn advance(&mut self, dt: Duration) -> Vec<u32> {
        let length = explosion_duration();
        let mut finished = Vec::new();
        self.playing.retain_mut(|(id, elapsed)| {
            *elapsed += dt;
            if *elapsed >= length {
                finished.push(*id);
                false
            } else {
                true
            }
        });
        finished
    }

    pub fn len(&self) -> usize {
        self.playing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playing.is_empty()
    }
}
