//! Match state and core simulation types
//!
//! Everything one match owns lives here; the per-tick pipeline is in `tick`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ability::Ability;
use super::arena::Arena;
use super::entity::{Opponent, Player};
use super::projectile::Projectile;
use super::spawner::Spawner;
use crate::error::Error;
use crate::tuning::Tuning;

/// How a finished match went for the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
}

/// Match controller state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    /// Combat is being simulated
    Running,
    /// Combat over; counting down before termination
    Ended { outcome: Outcome, ticks_left: u32 },
    /// Match loop should exit; further ticks are an error
    Terminated,
}

impl MatchState {
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            MatchState::Ended { outcome, .. } => Some(*outcome),
            _ => None,
        }
    }
}

/// Things that happened during a tick, for audio/visual feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player fired a primary shot
    ShotFired,
    /// An ability was activated
    AbilityUsed(Ability),
    /// An ability was requested without enough sp
    AbilityDenied(Ability),
    /// An opponent shot damaged the player
    PlayerHit,
    /// A player shot damaged the opponent
    OpponentHit,
    /// The defensive field consumed an opponent shot
    ShotAbsorbed,
    /// A heavy bouncing shot entered play
    SpecialSpawned,
    /// Combat finished
    MatchEnded(Outcome),
}

/// Complete state of one match
#[derive(Debug, Clone)]
pub struct Match<R = Pcg32> {
    pub tuning: Tuning,
    pub arena: Arena,
    pub state: MatchState,
    /// Simulation tick counter
    pub tick: u64,
    pub player: Player,
    pub opponent: Opponent,
    /// Live projectiles fired by the player
    pub player_shots: Vec<Projectile>,
    /// Live projectiles fired at the player
    pub opponent_shots: Vec<Projectile>,
    pub spawner: Spawner,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
    pub(crate) rng: R,
}

impl Match<Pcg32> {
    /// New match with a seeded PCG generator
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, Error> {
        Self::with_rng(tuning, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Match<R> {
    /// New match drawing all randomness from `rng`
    pub fn with_rng(tuning: Tuning, mut rng: R) -> Result<Self, Error> {
        tuning.validate()?;

        let arena = Arena::from_tuning(&tuning);
        let player = Player::new(&arena, &tuning);
        let opponent = Opponent::new(&arena, &tuning, &mut rng);

        log::info!(
            "match started: arena {}x{}, inner zone {:.0}px, opponent at x={:.1}",
            tuning.screen_width,
            tuning.screen_height,
            arena.inner.size().x,
            opponent.pos.x
        );

        Ok(Self {
            tuning,
            arena,
            state: MatchState::Running,
            tick: 0,
            player,
            opponent,
            player_shots: Vec::new(),
            opponent_shots: Vec::new(),
            spawner: Spawner::new(),
            events: Vec::new(),
            rng,
        })
    }
}

impl<R> Match<R> {
    pub fn is_running(&self) -> bool {
        self.state == MatchState::Running
    }

    pub fn is_terminated(&self) -> bool {
        self.state == MatchState::Terminated
    }

    /// Quit request from the outer driver; honoured between ticks
    pub fn terminate(&mut self) {
        if self.state != MatchState::Terminated {
            log::info!("match terminated at tick {}", self.tick);
            self.state = MatchState::Terminated;
        }
    }

    /// All live projectiles, player shots first
    pub fn projectiles(&self) -> impl Iterator<Item = &Projectile> {
        self.player_shots.iter().chain(self.opponent_shots.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_defaults() {
        let m = Match::new(Tuning::default(), 1).expect("valid tuning");
        assert!(m.is_running());
        assert_eq!(m.tick, 0);
        assert_eq!(m.player.hp, 100);
        assert_eq!(m.player.sp, 0);
        assert_eq!(m.opponent.hp, 100);
        assert_eq!(m.projectiles().count(), 0);
        assert!(m.arena.outer.contains_rect(&m.opponent.rect()));
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        let tuning = Tuning {
            inner_zone_fraction: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            Match::new(tuning, 1),
            Err(Error::InvalidTuning { .. })
        ));
    }

    #[test]
    fn test_terminate_is_idempotent() {
        let mut m = Match::new(Tuning::default(), 1).expect("valid tuning");
        m.terminate();
        m.terminate();
        assert!(m.is_terminated());
        assert_eq!(m.state.outcome(), None);
    }

    #[test]
    fn test_seed_determines_opponent_start() {
        let a = Match::new(Tuning::default(), 77).expect("valid tuning");
        let b = Match::new(Tuning::default(), 77).expect("valid tuning");
        assert_eq!(a.opponent.pos, b.opponent.pos);
        assert_eq!(a.opponent.patience_threshold, b.opponent.patience_threshold);
    }
}
