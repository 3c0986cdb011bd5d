//! Collision detection and resolution between projectiles and entities
//!
//! Purely geometric: every live projectile is tested against the rectangle
//! of the entity it can hurt, using the positions after this tick's motion.

use super::entity::{Opponent, Player};
use super::projectile::{Projectile, ProjectileKind};
use super::rect::Rect;
use super::state::GameEvent;
use crate::tuning::Tuning;

/// Tally of one resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Player shots that landed on the opponent
    pub opponent_hits: u32,
    /// Opponent shots that landed on the player
    pub player_hits: u32,
    /// Opponent shots consumed by the defensive field
    pub absorbed: u32,
}

impl CollisionReport {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Resolve every live projectile exactly once.
///
/// Hits clear the projectile's `active` flag as they are found; both shot
/// lists are then filtered in place, which also drops anything the motion
/// step already culled.
pub fn resolve(
    player: &mut Player,
    opponent: &mut Opponent,
    player_shots: &mut Vec<Projectile>,
    opponent_shots: &mut Vec<Projectile>,
    zone: &Rect,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) -> CollisionReport {
    let mut report = CollisionReport::default();

    let opponent_rect = opponent.rect();
    for shot in player_shots.iter_mut().filter(|s| s.active) {
        if shot.rect().overlaps(&opponent_rect) {
            shot.active = false;
            opponent.receive_damage(tuning.opponent_hit_damage);
            player.gain_resource(tuning.hit_sp_reward);
            report.opponent_hits += 1;
            events.push(GameEvent::OpponentHit);
        }
    }

    let player_rect = player.rect();
    let field_active = player.ability_active();
    for shot in opponent_shots.iter_mut().filter(|s| s.active) {
        let in_zone = zone.contains(shot.pos);
        let touching = shot.rect().overlaps(&player_rect);

        if field_active && in_zone && (touching || shot.kind == ProjectileKind::SpecialBounce) {
            shot.active = false;
            report.absorbed += 1;
            events.push(GameEvent::ShotAbsorbed);
        } else if touching {
            shot.active = false;
            player.receive_damage(tuning.player_hit_damage);
            report.player_hits += 1;
            events.push(GameEvent::PlayerHit);
        }
    }

    player_shots.retain(|s| s.active);
    opponent_shots.retain(|s| s.active);

    report
}
