//! Game-over sequence: Running -> Exploding -> Paused

use super::state::{EffectKind, GameEvent, GameOverCause, GamePhase, SimulationState};

/// Start the terminal sequence. Only the first call has any effect.
///
/// Spawns the player explosion, hides the ship and freezes timers and input.
/// Returns the explosion effect id when the sequence actually started.
pub fn begin_game_over(state: &mut SimulationState, cause: GameOverCause) -> Option<u32> {
    if state.phase != GamePhase::Running {
        return None;
    }

    state.phase = GamePhase::Exploding;
    state.player.visible = false;
    let effect_id = state.spawn_effect(EffectKind::PlayerExplosion, state.player.pos);

    log::info!("Game over ({:?}) at score {}", cause, state.score);
    state.events.push(GameEvent::GameOver { cause });
    Some(effect_id)
}

/// Engine callback: a one-shot effect finished playing.
///
/// Completing the player explosion pauses the run and publishes the final
/// score. Unknown ids are ignored.
pub fn on_effect_complete(state: &mut SimulationState, effect_id: u32) {
    let Some(idx) = state.effects.iter().position(|e| e.id == effect_id) else {
        return;
    };
    let effect = state.effects.remove(idx);

    if effect.kind == EffectKind::PlayerExplosion && state.phase == GamePhase::Exploding {
        state.phase = GamePhase::Paused;
        log::info!("Final Score: {}", state.score);
        state.events.push(GameEvent::FinalScore { score: state.score });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_sequence_runs_once() {
        let mut state = SimulationState::new(3, Tuning::default());
        let effect = begin_game_over(&mut state, GameOverCause::EnemyCollision).unwrap();

        assert_eq!(state.phase, GamePhase::Exploding);
        assert!(!state.player.visible);
        assert_eq!(state.effects.len(), 1);
        assert_eq!(state.effects[0].pos, state.player.pos);

        // A second trigger while exploding changes nothing
        assert!(begin_game_over(&mut state, GameOverCause::ClockExpired).is_none());
        assert_eq!(state.effects.len(), 1);

        on_effect_complete(&mut state, effect);
        assert_eq!(state.phase, GamePhase::Paused);
        assert!(state.effects.is_empty());

        let events = state.drain_events();
        assert_eq!(
            events,
            vec![
                GameEvent::GameOver {
                    cause: GameOverCause::EnemyCollision
                },
                GameEvent::FinalScore { score: 0 },
            ]
        );
    }

    #[test]
    fn test_enemy_explosion_does_not_pause() {
        let mut state = SimulationState::new(3, Tuning::default());
        let id = state.spawn_effect(EffectKind::EnemyExplosion, state.player.pos);
        on_effect_complete(&mut state, id);
        assert_eq!(state.phase, GamePhase::Running);
        assert!(state.effects.is_empty());

        // Unknown id is a no-op
        on_effect_complete(&mut state, 9999);
        assert_eq!(state.phase, GamePhase::Running);
    }
}
