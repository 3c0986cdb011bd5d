//! Deterministic simulation module
//!
//! All combat logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `Match::tick` = one frame)
//! - Injected, seedable RNG only
//! - Stable iteration order (insertion order of the shot lists)
//! - No rendering, audio or platform dependencies

pub mod ability;
pub mod arena;
pub mod autopilot;
pub mod collision;
pub mod entity;
pub mod projectile;
pub mod rect;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use ability::Ability;
pub use arena::{Arena, Edge};
pub use collision::CollisionReport;
pub use entity::{Opponent, Player};
pub use projectile::{FALLBACK_AIM, Owner, Projectile, ProjectileKind, aim_velocity};
pub use rect::Rect;
pub use snapshot::{EntityView, FrameSnapshot, ProjectileView};
pub use spawner::Spawner;
pub use state::{GameEvent, Match, MatchState, Outcome};
pub use tick::TickInput;
