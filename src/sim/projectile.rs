//! Projectile construction, motion and inner-zone bounce

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::SPOKE_COUNT;
use crate::polar_to_cartesian;

/// Direction used when an aim vector has zero length (straight down)
pub const FALLBACK_AIM: Vec2 = Vec2::new(0.0, 1.0);

/// Which side fired the projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Opponent,
}

/// Projectile category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Straight shot toward the top of the screen
    Directed,
    /// Aimed once at spawn, never re-tracks
    Aimed,
    /// One of an 8-way burst
    OmniSpoke,
    /// Heavy shot that bounces around inside the inner zone
    SpecialBounce,
}

/// A projectile entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    /// Center
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub owner: Owner,
    pub kind: ProjectileKind,
    /// SpecialBounce only: set on first entry into the inner zone
    pub entered_zone: bool,
    /// Cleared when the projectile hits something or leaves the arena
    pub active: bool,
}

impl Projectile {
    pub fn new(pos: Vec2, vel: Vec2, size: f32, owner: Owner, kind: ProjectileKind) -> Self {
        Self {
            pos,
            vel,
            size: Vec2::splat(size),
            owner,
            kind,
            entered_zone: false,
            active: true,
        }
    }

    /// Player shot travelling straight up
    pub fn directed(origin: Vec2, speed: f32, size: f32, owner: Owner) -> Self {
        Self::new(
            origin,
            Vec2::new(0.0, -speed),
            size,
            owner,
            ProjectileKind::Directed,
        )
    }

    /// Enemy shot aimed from `spawn` toward `target`
    pub fn aimed(spawn: Vec2, target: Vec2, speed: f32, size: f32) -> Self {
        Self::new(
            spawn,
            aim_velocity(spawn, target, speed),
            size,
            Owner::Opponent,
            ProjectileKind::Aimed,
        )
    }

    /// Heavy enemy shot; aimed like [`Projectile::aimed`] but bounces once captured
    pub fn special(spawn: Vec2, target: Vec2, speed: f32, size: f32) -> Self {
        Self::new(
            spawn,
            aim_velocity(spawn, target, speed),
            size,
            Owner::Opponent,
            ProjectileKind::SpecialBounce,
        )
    }

    /// Eight shots fanned out at 45 degree intervals, starting along +x
    pub fn omni_spokes(
        origin: Vec2,
        speed: f32,
        size: f32,
        owner: Owner,
    ) -> [Projectile; SPOKE_COUNT] {
        std::array::from_fn(|i| {
            let theta = i as f32 * TAU / SPOKE_COUNT as f32;
            Self::new(
                origin,
                polar_to_cartesian(speed, theta),
                size,
                owner,
                ProjectileKind::OmniSpoke,
            )
        })
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.pos, self.size)
    }

    #[inline]
    pub fn is_bouncing(&self) -> bool {
        self.kind == ProjectileKind::SpecialBounce && self.entered_zone
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Inner-zone capture for SpecialBounce shots; no-op for other kinds.
    ///
    /// Travels straight until it first enters `zone`, then re-rolls its
    /// heading. From then on, any tick that ends outside the zone re-rolls the
    /// heading again and snaps the position back onto the zone boundary.
    pub fn bounce(&mut self, zone: &Rect, rng: &mut impl Rng) {
        if self.kind != ProjectileKind::SpecialBounce {
            return;
        }

        if !self.entered_zone {
            if zone.contains(self.pos) {
                self.entered_zone = true;
                self.randomize_heading(rng);
            }
        } else if !zone.contains(self.pos) {
            self.randomize_heading(rng);
            self.pos = zone.clamp_point(self.pos);
        }
    }

    /// Keeps speed, picks a uniform heading in [0, 2π)
    fn randomize_heading(&mut self, rng: &mut impl Rng) {
        let speed = self.vel.length();
        let theta = rng.random_range(0.0..TAU);
        self.vel = polar_to_cartesian(speed, theta);
    }
}

/// Unit vector from `from` toward `to`, times `speed`
pub fn aim_velocity(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    (to - from).normalize_or(FALLBACK_AIM) * speed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian_to_polar;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_aimed_velocity_magnitude_and_direction() {
        let spawn = Vec2::new(0.0, 0.0);
        let target = Vec2::new(30.0, 40.0);
        let p = Projectile::aimed(spawn, target, 4.0, 10.0);
        assert!((p.vel.length() - 4.0).abs() < 1e-5);
        assert!((p.vel - Vec2::new(2.4, 3.2)).length() < 1e-5);
        assert_eq!(p.owner, Owner::Opponent);
        assert_eq!(p.kind, ProjectileKind::Aimed);
    }

    #[test]
    fn test_zero_length_aim_falls_back() {
        let p = Projectile::aimed(Vec2::splat(5.0), Vec2::splat(5.0), 3.0, 10.0);
        assert!(p.vel.is_finite());
        assert_eq!(p.vel, FALLBACK_AIM * 3.0);
    }

    #[test]
    fn test_directed_goes_up() {
        let mut p = Projectile::directed(Vec2::new(10.0, 100.0), 10.0, 10.0, Owner::Player);
        p.advance();
        assert_eq!(p.pos, Vec2::new(10.0, 90.0));
        assert_eq!(p.kind, ProjectileKind::Directed);
    }

    #[test]
    fn test_omni_spokes_evenly_spaced() {
        let spokes = Projectile::omni_spokes(Vec2::ZERO, 7.0, 10.0, Owner::Player);
        assert_eq!(spokes.len(), 8);
        for (i, spoke) in spokes.iter().enumerate() {
            let (r, theta) = cartesian_to_polar(spoke.vel);
            assert!((r - 7.0).abs() < 1e-4);
            let expected = (i as f32 * 45.0).to_radians();
            let diff = (theta - expected).rem_euclid(TAU);
            assert!(diff < 1e-4 || TAU - diff < 1e-4, "spoke {i}: {theta}");
        }
    }

    #[test]
    fn test_special_captured_on_zone_entry() {
        let zone = Rect::new(Vec2::splat(100.0), Vec2::splat(200.0));
        let mut rng = Pcg32::seed_from_u64(3);
        let mut p = Projectile::special(Vec2::new(95.0, 150.0), Vec2::new(150.0, 150.0), 3.0, 20.0);

        p.advance();
        p.bounce(&zone, &mut rng);
        assert!(!p.entered_zone);
        assert_eq!(p.vel, Vec2::new(3.0, 0.0));

        p.advance();
        p.bounce(&zone, &mut rng);
        assert!(p.entered_zone);
        assert!((p.vel.length() - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_special_snapped_back_to_boundary() {
        let zone = Rect::new(Vec2::splat(100.0), Vec2::splat(200.0));
        let mut rng = Pcg32::seed_from_u64(11);
        let mut p = Projectile::special(Vec2::new(199.0, 150.0), Vec2::ZERO, 3.0, 20.0);
        p.entered_zone = true;
        p.vel = Vec2::new(3.0, 0.0);

        p.advance();
        p.bounce(&zone, &mut rng);
        assert_eq!(p.pos, Vec2::new(200.0, 150.0));
        assert!((p.vel.length() - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_bounce_ignores_other_kinds() {
        let zone = Rect::new(Vec2::splat(100.0), Vec2::splat(200.0));
        let mut rng = Pcg32::seed_from_u64(1);
        let mut p = Projectile::aimed(Vec2::splat(150.0), Vec2::splat(300.0), 3.0, 10.0);
        let before = p.clone();
        p.bounce(&zone, &mut rng);
        assert_eq!(p, before);
    }
}
