//! Frame-driven enemy projectile generators

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::projectile::Projectile;
use crate::tuning::{AimTarget, Tuning};

/// Spawner timers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Spawner {
    /// Ticks since the last special shot
    pub special_counter: u32,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run both generators for one tick, pushing new shots into `out`.
    ///
    /// `player_center` is only consulted when tuning aims at the player.
    pub fn run(
        &mut self,
        arena: &Arena,
        tuning: &Tuning,
        player_center: Vec2,
        rng: &mut impl Rng,
        out: &mut Vec<Projectile>,
    ) {
        let target = match tuning.aim_target {
            AimTarget::ZoneCenter => arena.inner_center(),
            AimTarget::Player => player_center,
        };

        if rng.random_bool(tuning.aimed_shot_chance) {
            let spawn = arena.random_edge_point(rng);
            log::trace!("aimed shot from ({:.1}, {:.1})", spawn.x, spawn.y);
            out.push(Projectile::aimed(
                spawn,
                target,
                tuning.aimed_shot_speed,
                tuning.shot_size,
            ));
        }

        self.special_counter += 1;
        if self.special_counter >= tuning.special_interval_ticks {
            self.special_counter = 0;
            let spawn = arena.random_edge_point(rng);
            log::debug!("special shot from ({:.1}, {:.1})", spawn.x, spawn.y);
            out.push(Projectile::special(
                spawn,
                target,
                tuning.special_shot_speed,
                tuning.special_shot_size,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::projectile::ProjectileKind;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn quiet_tuning() -> Tuning {
        Tuning {
            aimed_shot_chance: 0.0,
            special_interval_ticks: 5,
            ..Default::default()
        }
    }

    #[test]
    fn test_special_every_interval() {
        let tuning = quiet_tuning();
        let arena = Arena::from_tuning(&tuning);
        let mut rng = Pcg32::seed_from_u64(42);
        let mut spawner = Spawner::new();
        let mut out = Vec::new();

        for tick in 1..=12 {
            spawner.run(&arena, &tuning, Vec2::ZERO, &mut rng, &mut out);
            let expected = tick / 5;
            assert_eq!(out.len(), expected as usize, "after tick {tick}");
        }
        assert!(out.iter().all(|p| p.kind == ProjectileKind::SpecialBounce));
        assert_eq!(spawner.special_counter, 2);
    }

    #[test]
    fn test_aimed_shots_point_at_zone_center() {
        let tuning = Tuning {
            aimed_shot_chance: 1.0,
            special_interval_ticks: u32::MAX,
            ..Default::default()
        };
        let arena = Arena::from_tuning(&tuning);
        let mut rng = Pcg32::seed_from_u64(8);
        let mut spawner = Spawner::new();
        let mut out = Vec::new();

        for _ in 0..50 {
            spawner.run(&arena, &tuning, Vec2::ZERO, &mut rng, &mut out);
        }
        assert_eq!(out.len(), 50);
        for shot in &out {
            assert_eq!(shot.kind, ProjectileKind::Aimed);
            assert!((shot.vel.length() - tuning.aimed_shot_speed).abs() < 1e-4);
            let to_center = (arena.inner_center() - shot.pos).normalize();
            assert!(shot.vel.normalize().dot(to_center) > 0.9999);
        }
    }

    #[test]
    fn test_aim_at_player() {
        let tuning = Tuning {
            aimed_shot_chance: 1.0,
            special_interval_ticks: u32::MAX,
            aim_target: AimTarget::Player,
            ..Default::default()
        };
        let arena = Arena::from_tuning(&tuning);
        let mut rng = Pcg32::seed_from_u64(17);
        let mut spawner = Spawner::new();
        let mut out = Vec::new();
        let player_center = Vec2::new(500.0, 300.0);

        spawner.run(&arena, &tuning, player_center, &mut rng, &mut out);
        let shot = &out[0];
        let to_player = (player_center - shot.pos).normalize();
        assert!(shot.vel.normalize().dot(to_player) > 0.9999);
    }
}
