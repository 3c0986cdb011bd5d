//! Arena Duel - a fixed-timestep arena shooter combat core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawners, collisions, match state)
//! - `tuning`: Data-driven game balance
//! - `error`: Error type shared by the simulation and tuning loader

pub mod error;
pub mod sim;
pub mod tuning;

pub use error::Error;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds (used by the frame pump only)
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum ticks per rendered frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default screen dimensions
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;
    /// Inner zone side as a fraction of the shorter screen dimension
    pub const INNER_ZONE_FRACTION: f32 = 0.6;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_START_HP: i32 = 100;
    pub const PLAYER_FIRE_COOLDOWN_TICKS: u32 = 8;

    /// Opponent defaults (larger than the player)
    pub const OPPONENT_SIZE: f32 = 80.0;
    pub const OPPONENT_START_HP: i32 = 100;
    pub const OPPONENT_Y: f32 = 40.0;
    pub const OPPONENT_SPEED_MIN: f32 = 2.0;
    pub const OPPONENT_SPEED_MAX: f32 = 6.0;
    pub const OPPONENT_FLIP_CHANCE: f64 = 0.02;
    pub const PATIENCE_MIN_TICKS: u32 = 60;
    pub const PATIENCE_MAX_TICKS: u32 = 180;

    /// Projectile defaults
    pub const SHOT_SIZE: f32 = 10.0;
    pub const SPECIAL_SHOT_SIZE: f32 = 20.0;
    pub const PLAYER_SHOT_SPEED: f32 = 10.0;
    pub const AIMED_SHOT_SPEED: f32 = 4.0;
    pub const SPECIAL_SHOT_SPEED: f32 = 3.0;
    pub const SPOKE_SHOT_SPEED: f32 = 7.0;
    /// Number of shots in an omni-directional burst
    pub const SPOKE_COUNT: usize = 8;

    /// Spawner defaults
    pub const AIMED_SHOT_CHANCE: f64 = 0.02;
    /// 10 seconds at 60 Hz
    pub const SPECIAL_INTERVAL_TICKS: u32 = 600;

    /// Combat rewards
    pub const PLAYER_HIT_DAMAGE: i32 = 1;
    pub const OPPONENT_HIT_DAMAGE: i32 = 10;
    pub const HIT_SP_REWARD: u32 = 5;

    /// Abilities
    pub const BURST_COST: u32 = 20;
    pub const FIELD_COST: u32 = 10;
    pub const FIELD_DURATION_TICKS: u32 = 600;

    /// Delay between the end of combat and termination (3 seconds at 60 Hz)
    pub const END_DELAY_TICKS: u32 = 3 * TICK_RATE;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}
