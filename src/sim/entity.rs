//! Player and opponent entity state

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::rect::Rect;
use crate::tuning::Tuning;

/// The controllable entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    /// Health; no floor, reaching <= 0 loses the match
    pub hp: i32,
    /// Skill points, earned by landing hits and spent on abilities
    pub sp: u32,
    /// Remaining ticks of the active ability (0 = inactive)
    pub ability_ticks: u32,
    /// Ticks until primary fire is available again
    pub fire_cooldown: u32,
    /// Optional sp ceiling
    #[serde(default)]
    pub sp_cap: Option<u32>,
}

impl Player {
    /// Create a player centered in the arena's inner zone
    pub fn new(arena: &Arena, tuning: &Tuning) -> Self {
        let size = Vec2::splat(tuning.player_size);
        Self {
            pos: arena.inner_center() - size * 0.5,
            size,
            speed: tuning.player_speed,
            hp: tuning.player_hp,
            sp: 0,
            ability_ticks: 0,
            fire_cooldown: 0,
            sp_cap: tuning.sp_cap,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Move by `dir * speed`; `dir` components are expected in {-1, 0, 1}.
    /// The displacement is dropped whole if it would leave the inner zone.
    pub fn apply_input(&mut self, dir: Vec2, arena: &Arena) {
        if dir == Vec2::ZERO {
            return;
        }
        let proposed = self.pos + dir * self.speed;
        self.pos = arena.clamp(self.rect(), proposed);
    }

    pub fn receive_damage(&mut self, amount: i32) {
        self.hp -= amount;
    }

    pub fn gain_resource(&mut self, amount: u32) {
        self.sp = self.sp.saturating_add(amount);
        if let Some(cap) = self.sp_cap {
            self.sp = self.sp.min(cap);
        }
    }

    /// Spend `cost` sp if available. A non-zero `duration` starts the ability
    /// countdown; instant abilities pass 0 and leave any running one alone.
    pub fn try_activate_ability(&mut self, cost: u32, duration: u32) -> bool {
        if self.sp < cost {
            return false;
        }
        self.sp -= cost;
        if duration > 0 {
            self.ability_ticks = duration;
        }
        true
    }

    #[inline]
    pub fn ability_active(&self) -> bool {
        self.ability_ticks > 0
    }

    /// Per-tick countdown of the ability and fire cooldown
    pub fn tick_timers(&mut self) {
        self.ability_ticks = self.ability_ticks.saturating_sub(1);
        self.fire_cooldown = self.fire_cooldown.saturating_sub(1);
    }
}

/// The autonomous opponent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opponent {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub hp: i32,
    /// Horizontal direction, +1 (right) or -1 (left)
    pub direction: f32,
    /// Ticks since the last re-roll
    pub patience: u32,
    /// Re-roll once `patience` reaches this
    pub patience_threshold: u32,
}

impl Opponent {
    /// Create an opponent at a random horizontal offset along `opponent_y`
    pub fn new(arena: &Arena, tuning: &Tuning, rng: &mut impl Rng) -> Self {
        let size = Vec2::splat(tuning.opponent_size);
        let max_x = (arena.outer.max.x - size.x).max(arena.outer.min.x);
        let x = rng.random_range(arena.outer.min.x..=max_x);
        Self {
            pos: Vec2::new(x, tuning.opponent_y),
            size,
            speed: rng.random_range(tuning.opponent_speed_range()),
            hp: tuning.opponent_hp,
            direction: random_direction(rng),
            patience: 0,
            patience_threshold: rng.random_range(tuning.patience_range()),
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// One tick of segment-wise random drift along x
    pub fn advance(&mut self, arena: &Arena, tuning: &Tuning, rng: &mut impl Rng) {
        self.patience += 1;
        if self.patience >= self.patience_threshold {
            self.direction = random_direction(rng);
            self.speed = rng.random_range(tuning.opponent_speed_range());
            self.patience_threshold = rng.random_range(tuning.patience_range());
            self.patience = 0;
        }

        // Erratic evasive flip, independent of bounds
        if rng.random_bool(tuning.opponent_flip_chance) {
            self.direction = -self.direction;
        }

        self.pos.x += self.speed * self.direction;

        let min_x = arena.outer.min.x;
        let max_x = arena.outer.max.x - self.size.x;
        if self.pos.x < min_x {
            self.pos.x = min_x;
            self.direction = 1.0;
        } else if self.pos.x > max_x {
            self.pos.x = max_x;
            self.direction = -1.0;
        }
    }

    pub fn receive_damage(&mut self, amount: i32) {
        self.hp -= amount;
    }
}

fn random_direction(rng: &mut impl Rng) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup() -> (Arena, Tuning) {
        let tuning = Tuning::default();
        (Arena::from_tuning(&tuning), tuning)
    }

    #[test]
    fn test_player_starts_centered() {
        let (arena, tuning) = setup();
        let player = Player::new(&arena, &tuning);
        assert_eq!(player.center(), arena.inner_center());
        assert_eq!(player.hp, 100);
        assert_eq!(player.sp, 0);
        assert!(!player.ability_active());
    }

    #[test]
    fn test_player_cannot_leave_zone() {
        let (arena, tuning) = setup();
        let mut player = Player::new(&arena, &tuning);
        for _ in 0..500 {
            player.apply_input(Vec2::new(-1.0, -1.0), &arena);
        }
        assert!(arena.inner.contains_rect(&player.rect()));
        // Stops short of the corner: the last step that would cross is discarded
        assert!(player.pos.x >= arena.inner.min.x);
        assert!(player.pos.x < arena.inner.min.x + player.speed);
    }

    #[test]
    fn test_damage_has_no_floor() {
        let (arena, tuning) = setup();
        let mut player = Player::new(&arena, &tuning);
        player.receive_damage(150);
        assert_eq!(player.hp, -50);
    }

    #[test]
    fn test_ability_gate() {
        let (arena, tuning) = setup();
        let mut player = Player::new(&arena, &tuning);
        player.sp = 5;
        assert!(!player.try_activate_ability(10, 600));
        assert_eq!(player.sp, 5);
        assert!(!player.ability_active());

        player.gain_resource(5);
        assert!(player.try_activate_ability(10, 600));
        assert_eq!(player.sp, 0);
        assert_eq!(player.ability_ticks, 600);
    }

    #[test]
    fn test_ability_countdown_clears() {
        let (arena, tuning) = setup();
        let mut player = Player::new(&arena, &tuning);
        player.sp = 10;
        assert!(player.try_activate_ability(10, 2));
        player.tick_timers();
        assert!(player.ability_active());
        player.tick_timers();
        assert!(!player.ability_active());
        player.tick_timers();
        assert_eq!(player.ability_ticks, 0);
    }

    #[test]
    fn test_instant_ability_keeps_running_countdown() {
        let (arena, tuning) = setup();
        let mut player = Player::new(&arena, &tuning);
        player.sp = 30;
        assert!(player.try_activate_ability(10, 50));
        assert!(player.try_activate_ability(20, 0));
        assert_eq!(player.ability_ticks, 50);
        assert_eq!(player.sp, 0);
    }

    #[test]
    fn test_sp_cap() {
        let (arena, mut tuning) = setup();
        tuning.sp_cap = Some(12);
        let mut player = Player::new(&arena, &tuning);
        player.gain_resource(5);
        player.gain_resource(5);
        player.gain_resource(5);
        assert_eq!(player.sp, 12);
    }

    #[test]
    fn test_opponent_stays_on_screen() {
        let (arena, tuning) = setup();
        let mut rng = Pcg32::seed_from_u64(1234);
        let mut opponent = Opponent::new(&arena, &tuning, &mut rng);
        assert!(opponent.size.x > tuning.player_size);
        for _ in 0..5_000 {
            opponent.advance(&arena, &tuning, &mut rng);
            assert!(opponent.pos.x >= arena.outer.min.x);
            assert!(opponent.pos.x + opponent.size.x <= arena.outer.max.x);
            assert!(opponent.direction == 1.0 || opponent.direction == -1.0);
        }
    }

    #[test]
    fn test_opponent_bounces_off_right_edge() {
        let (arena, mut tuning) = setup();
        tuning.opponent_flip_chance = 0.0;
        let mut rng = Pcg32::seed_from_u64(5);
        let mut opponent = Opponent::new(&arena, &tuning, &mut rng);
        opponent.pos.x = arena.outer.max.x - opponent.size.x - 1.0;
        opponent.direction = 1.0;
        opponent.speed = 4.0;
        opponent.patience_threshold = u32::MAX;

        opponent.advance(&arena, &tuning, &mut rng);
        assert_eq!(opponent.direction, -1.0);
        assert_eq!(opponent.pos.x, arena.outer.max.x - opponent.size.x);
    }

    #[test]
    fn test_opponent_bounces_off_left_edge() {
        let (arena, mut tuning) = setup();
        tuning.opponent_flip_chance = 0.0;
        let mut rng = Pcg32::seed_from_u64(6);
        let mut opponent = Opponent::new(&arena, &tuning, &mut rng);
        opponent.pos.x = arena.outer.min.x + 1.0;
        opponent.direction = -1.0;
        opponent.speed = 4.0;
        opponent.patience_threshold = u32::MAX;

        opponent.advance(&arena, &tuning, &mut rng);
        assert_eq!(opponent.direction, 1.0);
        assert_eq!(opponent.pos.x, arena.outer.min.x);
    }

    #[test]
    fn test_erratic_flip_every_tick() {
        let (arena, mut tuning) = setup();
        tuning.opponent_flip_chance = 1.0;
        let mut rng = Pcg32::seed_from_u64(11);
        let mut opponent = Opponent::new(&arena, &tuning, &mut rng);
        let start = arena.outer.center().x - opponent.size.x * 0.5;
        opponent.pos.x = start;
        opponent.direction = 1.0;
        opponent.speed = 2.0;
        opponent.patience_threshold = u32::MAX;

        for _ in 0..20 {
            let before = opponent.direction;
            opponent.advance(&arena, &tuning, &mut rng);
            assert_eq!(opponent.direction, -before);
            // Far from both edges, so only the flip changes direction
            assert!((opponent.pos.x - start).abs() <= 2.0);
        }
    }

    #[test]
    fn test_patience_rerolls() {
        let (arena, mut tuning) = setup();
        tuning.opponent_flip_chance = 0.0;
        let mut rng = Pcg32::seed_from_u64(99);
        let mut opponent = Opponent::new(&arena, &tuning, &mut rng);
        opponent.patience = 0;
        opponent.patience_threshold = 3;

        opponent.advance(&arena, &tuning, &mut rng);
        opponent.advance(&arena, &tuning, &mut rng);
        assert_eq!(opponent.patience, 2);
        opponent.advance(&arena, &tuning, &mut rng);
        assert_eq!(opponent.patience, 0);
        assert!(tuning.patience_range().contains(&opponent.patience_threshold));
        assert!(tuning.opponent_speed_range().contains(&opponent.speed));
    }
}
