//! Data-driven game balance
//!
//! Every number the simulation uses comes from here so a match can be
//! rebalanced from a JSON file without recompiling. Missing fields fall back
//! to the defaults in [`crate::consts`].

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::Error;

/// Where enemy spawners point their shots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AimTarget {
    /// Center of the inner zone
    #[default]
    ZoneCenter,
    /// Player's center at the moment of spawning
    Player,
}

impl AimTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            AimTarget::ZoneCenter => "ZoneCenter",
            AimTarget::Player => "Player",
        }
    }
}

/// Match balance and arena configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Inner zone side as a fraction of the shorter screen dimension
    pub inner_zone_fraction: f32,

    // === Player ===
    pub player_size: f32,
    pub player_speed: f32,
    pub player_hp: i32,
    /// Ticks between primary shots while fire is held
    pub fire_cooldown_ticks: u32,
    /// Optional upper bound for sp; `None` leaves it unbounded
    pub sp_cap: Option<u32>,

    // === Opponent ===
    pub opponent_size: f32,
    pub opponent_hp: i32,
    pub opponent_y: f32,
    pub opponent_speed_min: f32,
    pub opponent_speed_max: f32,
    /// Per-tick chance of an erratic direction flip
    pub opponent_flip_chance: f64,
    pub patience_min_ticks: u32,
    pub patience_max_ticks: u32,

    // === Projectiles ===
    pub shot_size: f32,
    pub special_shot_size: f32,
    pub player_shot_speed: f32,
    pub aimed_shot_speed: f32,
    pub special_shot_speed: f32,
    pub spoke_shot_speed: f32,

    // === Spawner ===
    pub aimed_shot_chance: f64,
    pub special_interval_ticks: u32,
    pub aim_target: AimTarget,

    // === Combat ===
    pub player_hit_damage: i32,
    pub opponent_hit_damage: i32,
    pub hit_sp_reward: u32,

    // === Abilities ===
    pub burst_cost: u32,
    pub field_cost: u32,
    pub field_duration_ticks: u32,

    // === Match flow ===
    pub end_delay_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            inner_zone_fraction: INNER_ZONE_FRACTION,

            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            player_hp: PLAYER_START_HP,
            fire_cooldown_ticks: PLAYER_FIRE_COOLDOWN_TICKS,
            sp_cap: None,

            opponent_size: OPPONENT_SIZE,
            opponent_hp: OPPONENT_START_HP,
            opponent_y: OPPONENT_Y,
            opponent_speed_min: OPPONENT_SPEED_MIN,
            opponent_speed_max: OPPONENT_SPEED_MAX,
            opponent_flip_chance: OPPONENT_FLIP_CHANCE,
            patience_min_ticks: PATIENCE_MIN_TICKS,
            patience_max_ticks: PATIENCE_MAX_TICKS,

            shot_size: SHOT_SIZE,
            special_shot_size: SPECIAL_SHOT_SIZE,
            player_shot_speed: PLAYER_SHOT_SPEED,
            aimed_shot_speed: AIMED_SHOT_SPEED,
            special_shot_speed: SPECIAL_SHOT_SPEED,
            spoke_shot_speed: SPOKE_SHOT_SPEED,

            aimed_shot_chance: AIMED_SHOT_CHANCE,
            special_interval_ticks: SPECIAL_INTERVAL_TICKS,
            aim_target: AimTarget::ZoneCenter,

            player_hit_damage: PLAYER_HIT_DAMAGE,
            opponent_hit_damage: OPPONENT_HIT_DAMAGE,
            hit_sp_reward: HIT_SP_REWARD,

            burst_cost: BURST_COST,
            field_cost: FIELD_COST,
            field_duration_ticks: FIELD_DURATION_TICKS,

            end_delay_ticks: END_DELAY_TICKS,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Serialize to pretty JSON (for writing a starter config)
    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Opponent speed re-roll range
    pub fn opponent_speed_range(&self) -> RangeInclusive<f32> {
        self.opponent_speed_min..=self.opponent_speed_max
    }

    /// Patience threshold re-roll range
    pub fn patience_range(&self) -> RangeInclusive<u32> {
        self.patience_min_ticks..=self.patience_max_ticks
    }

    /// Side of the inner zone square
    pub fn inner_zone_side(&self) -> f32 {
        self.screen_width.min(self.screen_height) * self.inner_zone_fraction
    }

    /// Check every value the simulation relies on
    pub fn validate(&self) -> Result<(), Error> {
        fn invalid(field: &'static str, reason: &str) -> Result<(), Error> {
            Err(Error::InvalidTuning {
                field,
                reason: reason.to_string(),
            })
        }

        let floats = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("inner_zone_fraction", self.inner_zone_fraction),
            ("player_size", self.player_size),
            ("player_speed", self.player_speed),
            ("opponent_size", self.opponent_size),
            ("opponent_y", self.opponent_y),
            ("opponent_speed_min", self.opponent_speed_min),
            ("opponent_speed_max", self.opponent_speed_max),
            ("shot_size", self.shot_size),
            ("special_shot_size", self.special_shot_size),
            ("player_shot_speed", self.player_shot_speed),
            ("aimed_shot_speed", self.aimed_shot_speed),
            ("special_shot_speed", self.special_shot_speed),
            ("spoke_shot_speed", self.spoke_shot_speed),
        ];
        if let Some((field, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return invalid(*field, "must be a finite number");
        }

        // A still shot is never culled
        let speeds = [
            ("player_speed", self.player_speed),
            ("player_shot_speed", self.player_shot_speed),
            ("aimed_shot_speed", self.aimed_shot_speed),
            ("special_shot_speed", self.special_shot_speed),
            ("spoke_shot_speed", self.spoke_shot_speed),
        ];
        if let Some((field, _)) = speeds.iter().find(|(_, v)| *v <= 0.0) {
            return invalid(*field, "speed must be positive");
        }

        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return invalid("screen_width", "screen dimensions must be positive");
        }
        if !(self.inner_zone_fraction > 0.0 && self.inner_zone_fraction <= 1.0) {
            return invalid("inner_zone_fraction", "must be within (0, 1]");
        }
        if !(self.player_size > 0.0 && self.player_size <= self.inner_zone_side()) {
            return invalid("player_size", "player must fit inside the inner zone");
        }
        if !(self.opponent_size > 0.0 && self.opponent_size <= self.screen_width) {
            return invalid("opponent_size", "opponent must fit across the screen");
        }
        if !(self.opponent_speed_min >= 0.0 && self.opponent_speed_min <= self.opponent_speed_max)
        {
            return invalid("opponent_speed_min", "speed range is empty or negative");
        }
        if self.patience_min_ticks == 0 || self.patience_min_ticks > self.patience_max_ticks {
            return invalid("patience_min_ticks", "patience range is empty or zero");
        }
        if !(0.0..=1.0).contains(&self.opponent_flip_chance) {
            return invalid("opponent_flip_chance", "must be within [0, 1]");
        }
        if !(0.0..=1.0).contains(&self.aimed_shot_chance) {
            return invalid("aimed_shot_chance", "must be within [0, 1]");
        }
        if self.special_interval_ticks == 0 {
            return invalid("special_interval_ticks", "must be at least one tick");
        }
        if !(self.shot_size > 0.0 && self.special_shot_size > 0.0) {
            return invalid("shot_size", "projectile sizes must be positive");
        }

        Ok(())
    }
}
