//! Per-frame entity kinematics with boundary culling
//!
//! Every entity moves by its own fixed velocity each frame. No overlap
//! checks happen here.

use super::state::SimulationState;

/// Counts of entities removed by one [`advance`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Culled {
    pub projectiles: usize,
    pub enemies: usize,
    pub treasures: usize,
}

/// Move every live projectile, enemy and treasure one frame, then drop the
/// ones that left the play area. Treasure labels travel with their treasure.
pub fn advance(state: &mut SimulationState) -> Culled {
    let bottom = state.tuning.play_height;
    let label_offset = state.tuning.label_offset;

    for projectile in &mut state.projectiles {
        projectile.pos += projectile.vel;
    }
    for enemy in &mut state.enemies {
        enemy.pos += enemy.vel;
    }
    for treasure in &mut state.treasures {
        treasure.pos += treasure.vel;
        treasure.label.pos.x = treasure.pos.x;
        treasure.label.pos.y = treasure.pos.y - label_offset;
    }

    let before = (
        state.projectiles.len(),
        state.enemies.len(),
        state.treasures.len(),
    );
    state.projectiles.retain(|p| p.pos.y >= 0.0);
    state.enemies.retain(|e| e.pos.y <= bottom);
    state.treasures.retain(|t| t.pos.y <= bottom);

    let culled = Culled {
        projectiles: before.0 - state.projectiles.len(),
        enemies: before.1 - state.enemies.len(),
        treasures: before.2 - state.treasures.len(),
    };
    if culled != Culled::default() {
        log::debug!(
            "Culled {} projectiles, {} enemies, {} treasures",
            culled.projectiles,
            culled.enemies,
            culled.treasures
        );
    }
    culled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Enemy, Label, Projectile, Treasure, TreasureKind};
    use crate::tuning::Tuning;
    use glam::Vec2;
    use proptest::prelude::*;

    fn state_with(projectile_y: f32, enemy_y: f32, treasure_y: f32) -> SimulationState {
        let mut state = SimulationState::new(1, Tuning::default());
        let id = state.next_entity_id();
        state.projectiles.push(Projectile {
            id,
            pos: Vec2::new(100.0, projectile_y),
            vel: Vec2::new(0.0, -7.5),
        });
        let id = state.next_entity_id();
        state.enemies.push(Enemy {
            id,
            pos: Vec2::new(200.0, enemy_y),
            vel: Vec2::new(0.0, 2.0),
            wave: 1,
        });
        let id = state.next_entity_id();
        state.treasures.push(Treasure {
            id,
            kind: TreasureKind::Bx,
            pos: Vec2::new(300.0, treasure_y),
            vel: Vec2::new(0.0, 2.2),
            label: Label {
                text: "BX".to_string(),
                pos: Vec2::new(300.0, treasure_y - 20.0),
            },
        });
        state
    }

    #[test]
    fn test_advance_moves_each_kind() {
        let mut state = state_with(300.0, 100.0, 50.0);
        let culled = advance(&mut state);

        assert_eq!(culled, Culled::default());
        assert_eq!(state.projectiles[0].pos.y, 292.5);
        assert_eq!(state.enemies[0].pos.y, 102.0);
        assert!((state.treasures[0].pos.y - 52.2).abs() < 1e-4);
        assert_eq!(state.treasures[0].label.pos.x, 300.0);
        assert!((state.treasures[0].label.pos.y - 32.2).abs() < 1e-4);
    }

    #[test]
    fn test_advance_culls_at_bounds() {
        let mut state = state_with(5.0, 599.0, 598.0);
        let culled = advance(&mut state);

        assert_eq!(
            culled,
            Culled {
                projectiles: 1,
                enemies: 1,
                treasures: 1
            }
        );
        assert!(state.projectiles.is_empty());
        assert!(state.enemies.is_empty());
        assert!(state.treasures.is_empty());
    }

    #[test]
    fn test_entity_exactly_on_bound_survives() {
        let mut state = state_with(7.5, 598.0, 0.0);
        advance(&mut state);
        assert_eq!(state.projectiles.len(), 1); // y == 0
        assert_eq!(state.enemies.len(), 1); // y == 600
    }

    proptest! {
        #[test]
        fn prop_culled_entities_never_return(frames in 1usize..400) {
            let mut state = state_with(300.0, 300.0, 300.0);
            let mut gone = (false, false, false);
            for _ in 0..frames {
                advance(&mut state);
                gone.0 |= state.projectiles.is_empty();
                gone.1 |= state.enemies.is_empty();
                gone.2 |= state.treasures.is_empty();
                prop_assert!(!(gone.0 && !state.projectiles.is_empty()));
                prop_assert!(!(gone.1 && !state.enemies.is_empty()));
                prop_assert!(!(gone.2 && !state.treasures.is_empty()));
            }
        }

        #[test]
        fn prop_enemy_moves_by_exact_delta(y in 0.0f32..500.0) {
            let mut state = state_with(300.0, y, 0.0);
            advance(&mut state);
            prop_assert_eq!(state.enemies[0].pos.y, y + 2.0);
        }
    }
}
