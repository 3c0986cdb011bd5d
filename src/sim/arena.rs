//! Arena bounds: the playable screen and the inner restricted zone

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

/// One side of the outer bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];
}

/// Static play area shared by every movement and collision check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    /// The whole playable screen
    pub outer: Rect,
    /// Centered square the player is confined to
    pub inner: Rect,
}

impl Arena {
    /// Build an arena of `width` x `height` with a centered inner square whose
    /// side is `fraction` of the shorter dimension. `fraction` is clamped to
    /// `(0, 1]` so the inner zone always lies inside the outer bounds.
    pub fn new(width: f32, height: f32, fraction: f32) -> Self {
        let outer = Rect::new(Vec2::ZERO, Vec2::new(width, height));
        let fraction = fraction.clamp(f32::EPSILON, 1.0);
        let side = width.min(height) * fraction;
        let inner = Rect::from_center_size(outer.center(), Vec2::splat(side));
        Self { outer, inner }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(
            tuning.screen_width,
            tuning.screen_height,
            tuning.inner_zone_fraction,
        )
    }

    pub fn inner_center(&self) -> Vec2 {
        self.inner.center()
    }

    /// Movement gate for the player: the whole box at `proposed` must lie
    /// inside the inner zone, otherwise the move is discarded entirely.
    pub fn clamp(&self, current: Rect, proposed: Vec2) -> Vec2 {
        let moved = Rect::from_pos_size(proposed, current.size());
        if self.inner.contains_rect(&moved) {
            proposed
        } else {
            current.min
        }
    }

    /// Uniform point on a given outer edge
    pub fn edge_point(&self, edge: Edge, rng: &mut impl Rng) -> Vec2 {
        let Rect { min, max } = self.outer;
        match edge {
            Edge::Top => Vec2::new(rng.random_range(min.x..=max.x), min.y),
            Edge::Bottom => Vec2::new(rng.random_range(min.x..=max.x), max.y),
            Edge::Left => Vec2::new(min.x, rng.random_range(min.y..=max.y)),
            Edge::Right => Vec2::new(max.x, rng.random_range(min.y..=max.y)),
        }
    }

    /// Uniform edge, then uniform point along it
    pub fn random_edge_point(&self, rng: &mut impl Rng) -> Vec2 {
        let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
        self.edge_point(edge, rng)
    }
}
