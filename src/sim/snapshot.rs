//! Read-only per-frame view of a match for the presentation layer

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Opponent, Player};
use super::projectile::{Owner, Projectile, ProjectileKind};
use super::state::{GameEvent, Match, MatchState};

/// Position and size of an entity (top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub pos: Vec2,
    pub size: Vec2,
}

impl From<&Player> for EntityView {
    fn from(p: &Player) -> Self {
        Self {
            pos: p.pos,
            size: p.size,
        }
    }
}

impl From<&Opponent> for EntityView {
    fn from(o: &Opponent) -> Self {
        Self {
            pos: o.pos,
            size: o.size,
        }
    }
}

/// A live projectile (center position)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub pos: Vec2,
    pub size: Vec2,
    pub owner: Owner,
    pub kind: ProjectileKind,
}

impl From<&Projectile> for ProjectileView {
    fn from(p: &Projectile) -> Self {
        Self {
            pos: p.pos,
            size: p.size,
            owner: p.owner,
            kind: p.kind,
        }
    }
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub state: MatchState,
    pub player: EntityView,
    pub opponent: EntityView,
    pub projectiles: Vec<ProjectileView>,
    pub player_hp: i32,
    pub player_sp: u32,
    pub opponent_hp: i32,
    /// Remaining ticks of the player's defensive field
    pub field_ticks: u32,
    pub events: Vec<GameEvent>,
}

impl FrameSnapshot {
    pub fn capture<R>(m: &Match<R>) -> Self {
        Self {
            tick: m.tick,
            state: m.state,
            player: EntityView::from(&m.player),
            opponent: EntityView::from(&m.opponent),
            projectiles: m.projectiles().map(ProjectileView::from).collect(),
            player_hp: m.player.hp,
            player_sp: m.player.sp,
            opponent_hp: m.opponent.hp,
            field_ticks: m.player.ability_ticks,
            events: m.events.clone(),
        }
    }
}
