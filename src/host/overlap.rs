//! Axis-aligned overlap checks between entity groups
//!
//! Stand-in for the engine's arcade physics bodies. Each body is the
//! sprite rectangle scaled by `HITBOX_SCALE`, centered on the entity.

use glam::Vec2;

use crate::consts::*;
use crate::sim::SimulationState;

/// Axis-aligned hit box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    pub center: Vec2,
    pub half: Vec2,
}

impl HitBox {
    /// Body for a sprite of the given size
    pub fn for_sprite(center: Vec2, size: (f32, f32)) -> Self {
        Self {
            center,
            half: Vec2::new(size.0, size.1) * HITBOX_SCALE * 0.5,
        }
    }

    pub fn overlaps(&self, other: &HitBox) -> bool {
        let d = (self.center - other.center).abs();
        let reach = self.half + other.half;
        d.x < reach.x && d.y < reach.y
    }
}

/// A matched pair reported to the collision resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    ProjectileEnemy { projectile: u32, enemy: u32 },
    PlayerEnemy { enemy: u32 },
    PlayerTreasure { treasure: u32 },
}

/// Find all contacts this frame, in resolver registration order:
/// projectile x enemy, then player x enemy, then player x treasure.
///
/// A projectile claims at most one enemy and an enemy is claimed by at
/// most one projectile.
pub fn detect_contacts(state: &SimulationState) -> Vec<Contact> {
    let mut contacts = Vec::new();

    let enemy_boxes: Vec<(u32, HitBox)> = state
        .enemies
        .iter()
        .map(|e| (e.id, HitBox::for_sprite(e.pos, ENEMY_SIZE)))
        .collect();
    let mut claimed = vec![false; enemy_boxes.len()];

    for projectile in &state.projectiles {
        let body = HitBox::for_sprite(projectile.pos, PROJECTILE_SIZE);
        let hit = enemy_boxes
            .iter()
            .enumerate()
            .find(|(i, (_, enemy))| !claimed[*i] && body.overlaps(enemy));
        if let Some((i, (enemy_id, _))) = hit {
            claimed[i] = true;
            contacts.push(Contact::ProjectileEnemy {
                projectile: projectile.id,
                enemy: *enemy_id,
            });
        }
    }

    let player = HitBox::for_sprite(state.player.pos, PLAYER_SIZE);
    contacts.extend(
        enemy_boxes
            .iter()
            .enumerate()
            .filter(|(i, (_, enemy))| !claimed[*i] && player.overlaps(enemy))
            .map(|(_, (id, _))| Contact::PlayerEnemy { enemy: *id }),
    );
    contacts.extend(
        state
            .treasures
            .iter()
            .filter(|t| player.overlaps(&HitBox::for_sprite(t.pos, TREASURE_SIZE)))
            .map(|t| Contact::PlayerTreasure { treasure: t.id }),
    );

    contacts
}
