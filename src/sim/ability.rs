//! Resource-gated player abilities

use serde::{Deserialize, Serialize};

use super::entity::Player;
use super::projectile::{Owner, Projectile};
use crate::tuning::Tuning;

/// Special actions the player can spend sp on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ability {
    /// Eight-way omni-directional volley from the player's center
    Burst,
    /// Temporary field that consumes incoming shots inside the inner zone
    Field,
}

impl Ability {
    pub fn cost(&self, tuning: &Tuning) -> u32 {
        match self {
            Ability::Burst => tuning.burst_cost,
            Ability::Field => tuning.field_cost,
        }
    }

    /// Active duration in ticks (0 for instant abilities)
    pub fn duration(&self, tuning: &Tuning) -> u32 {
        match self {
            Ability::Burst => 0,
            Ability::Field => tuning.field_duration_ticks,
        }
    }
}

/// Try to activate `ability`. On success the player's sp is spent and any
/// projectiles it creates are pushed to `player_shots`; on failure nothing
/// changes.
pub fn try_activate(
    ability: Ability,
    player: &mut Player,
    tuning: &Tuning,
    player_shots: &mut Vec<Projectile>,
) -> bool {
    let cost = ability.cost(tuning);
    if !player.try_activate_ability(cost, ability.duration(tuning)) {
        log::debug!("{ability:?} denied: sp {} < cost {cost}", player.sp);
        return false;
    }

    if ability == Ability::Burst {
        player_shots.extend(Projectile::omni_spokes(
            player.center(),
            tuning.spoke_shot_speed,
            tuning.shot_size,
            Owner::Player,
        ));
    }

    log::info!("{ability:?} activated, sp left {}", player.sp);
    true
}
