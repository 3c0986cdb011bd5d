//! Idle/demo mode - synthesizes player input from the current match state

use glam::Vec2;

use super::arena::Arena;
use super::entity::{Opponent, Player};
use super::projectile::{Projectile, ProjectileKind};
use super::tick::TickInput;
use crate::tuning::Tuning;

/// Shots closer than this (px, center to center) are treated as threats
const DANGER_RADIUS: f32 = 120.0;
/// A special shot this close makes the field worth raising
const FIELD_TRIGGER_RADIUS: f32 = 80.0;
/// Horizontal slack when lining up under the opponent
const ALIGN_SLACK: f32 = 6.0;

/// Pick this tick's input for the player
pub fn drive(
    player: &Player,
    opponent: &Opponent,
    opponent_shots: &[Projectile],
    arena: &Arena,
    tuning: &Tuning,
) -> TickInput {
    let me = player.center();
    let mut input = TickInput {
        fire: true,
        ..Default::default()
    };

    // Most dangerous shot: nearest one that is still closing in
    let threat = opponent_shots
        .iter()
        .filter(|s| s.vel.dot(me - s.pos) > 0.0 || s.kind == ProjectileKind::SpecialBounce)
        .map(|s| (s, s.pos.distance(me)))
        .filter(|(_, d)| *d < DANGER_RADIUS)
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let steer = if let Some((shot, dist)) = threat {
        let special_close =
            shot.kind == ProjectileKind::SpecialBounce && dist < FIELD_TRIGGER_RADIUS;
        if special_close && !player.ability_active() && player.sp >= tuning.field_cost {
            input.field = true;
        }

        // Sidestep perpendicular to the shot's path, away from it
        let away = me - shot.pos;
        let perp = Vec2::new(-shot.vel.y, shot.vel.x).normalize_or_zero();
        let dodge = if perp.dot(away) >= 0.0 { perp } else { -perp };
        // Lean toward the zone center so dodges do not pin us in a corner
        dodge + (arena.inner_center() - me).normalize_or_zero() * 0.3
    } else {
        // Safe: line up under the opponent
        let dx = opponent.center().x - me.x;
        if dx.abs() > ALIGN_SLACK {
            Vec2::new(dx.signum(), 0.0)
        } else {
            Vec2::ZERO
        }
    };

    input.left = steer.x < -0.3;
    input.right = steer.x > 0.3;
    input.up = steer.y < -0.3;
    input.down = steer.y > 0.3;

    // Spend surplus sp on bursts, keeping enough for one field
    if player.sp >= tuning.burst_cost + tuning.field_cost {
        input.special = true;
    }

    input
}
