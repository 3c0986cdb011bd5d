//! Fixed timestep simulation tick
//!
//! Core game loop that advances a match deterministically, one frame per call.

use glam::Vec2;
use rand::Rng;

use super::ability::{self, Ability};
use super::autopilot;
use super::collision;
use super::projectile::{Owner, Projectile, ProjectileKind};
use super::snapshot::FrameSnapshot;
use super::state::{GameEvent, Match, MatchState, Outcome};
use crate::error::Error;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Primary fire (held)
    pub fire: bool,
    /// Omni-directional burst
    pub special: bool,
    /// Defensive field
    pub field: bool,
    /// Quit request from the outer driver
    pub quit: bool,
    /// Idle/demo mode - autopilot plays the match
    pub idle_mode: bool,
}

impl TickInput {
    /// Movement vector with components in {-1, 0, 1}
    pub fn move_vector(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

impl<R: Rng> Match<R> {
    /// Advance the match by one tick and return what a renderer needs.
    ///
    /// Running: timers, player input, opponent drift, spawners, projectile
    /// motion, collisions, then the end check. Ended: only the termination
    /// countdown runs. Terminated: returns [`Error::MatchTerminated`].
    pub fn tick(&mut self, input: &TickInput) -> Result<FrameSnapshot, Error> {
        if self.state == MatchState::Terminated {
            return Err(Error::MatchTerminated { tick: self.tick });
        }
        self.events.clear();

        if input.quit {
            self.terminate();
            return Ok(FrameSnapshot::capture(self));
        }

        self.tick += 1;

        let state = self.state;
        match state {
            MatchState::Running => self.run_combat(input),
            MatchState::Ended {
                outcome,
                ticks_left,
            } => {
                let ticks_left = ticks_left.saturating_sub(1);
                self.state = if ticks_left == 0 {
                    log::info!("match terminated after end delay ({outcome:?})");
                    MatchState::Terminated
                } else {
                    MatchState::Ended {
                        outcome,
                        ticks_left,
                    }
                };
            }
            MatchState::Terminated => {}
        }

        log::trace!(
            "tick {}: {} player shots, {} opponent shots",
            self.tick,
            self.player_shots.len(),
            self.opponent_shots.len()
        );

        Ok(FrameSnapshot::capture(self))
    }

    fn run_combat(&mut self, input: &TickInput) {
        let input = if input.idle_mode {
            autopilot::drive(
                &self.player,
                &self.opponent,
                &self.opponent_shots,
                &self.arena,
                &self.tuning,
            )
        } else {
            *input
        };

        // 1. Timers
        self.player.tick_timers();

        // 2. Player input
        self.player.apply_input(input.move_vector(), &self.arena);

        if input.fire && self.player.fire_cooldown == 0 {
            let rect = self.player.rect();
            let muzzle = Vec2::new(rect.center().x, rect.min.y);
            self.player_shots.push(Projectile::directed(
                muzzle,
                self.tuning.player_shot_speed,
                self.tuning.shot_size,
                Owner::Player,
            ));
            self.player.fire_cooldown = self.tuning.fire_cooldown_ticks;
            self.events.push(GameEvent::ShotFired);
        }

        for (requested, ability) in [(input.special, Ability::Burst), (input.field, Ability::Field)] {
            if !requested {
                continue;
            }
            let used = ability::try_activate(
                ability,
                &mut self.player,
                &self.tuning,
                &mut self.player_shots,
            );
            self.events.push(if used {
                GameEvent::AbilityUsed(ability)
            } else {
                GameEvent::AbilityDenied(ability)
            });
        }

        // 3. Opponent
        self.opponent.advance(&self.arena, &self.tuning, &mut self.rng);

        // 4. Spawners
        let before = self.opponent_shots.len();
        self.spawner.run(
            &self.arena,
            &self.tuning,
            self.player.center(),
            &mut self.rng,
            &mut self.opponent_shots,
        );
        if self.opponent_shots[before..]
            .iter()
            .any(|s| s.kind == ProjectileKind::SpecialBounce)
        {
            self.events.push(GameEvent::SpecialSpawned);
        }

        // 5. Projectile motion, bounce and culling
        let outer = self.arena.outer;
        let inner = self.arena.inner;
        for shot in self.player_shots.iter_mut() {
            shot.advance();
            if !outer.contains(shot.pos) {
                shot.active = false;
            }
        }
        for shot in self.opponent_shots.iter_mut() {
            shot.advance();
            shot.bounce(&inner, &mut self.rng);
            if !shot.is_bouncing() && !outer.contains(shot.pos) {
                shot.active = false;
            }
        }

        // 6. Collisions
        let report = collision::resolve(
            &mut self.player,
            &mut self.opponent,
            &mut self.player_shots,
            &mut self.opponent_shots,
            &inner,
            &self.tuning,
            &mut self.events,
        );
        if !report.is_empty() {
            log::debug!(
                "tick {}: {} on opponent (hp {}), {} on player (hp {}), {} absorbed",
                self.tick,
                report.opponent_hits,
                self.opponent.hp,
                report.player_hits,
                self.player.hp,
                report.absorbed
            );
        }

        // 7. End condition (a double KO counts as a loss)
        let outcome = if self.player.hp <= 0 {
            Some(Outcome::Loss)
        } else if self.opponent.hp <= 0 {
            Some(Outcome::Win)
        } else {
            None
        };

        if let Some(outcome) = outcome {
            log::info!(
                "match ended at tick {}: {outcome:?} (player hp {}, opponent hp {})",
                self.tick,
                self.player.hp,
                self.opponent.hp
            );
            self.events.push(GameEvent::MatchEnded(outcome));
            self.state = if self.tuning.end_delay_ticks == 0 {
                MatchState::Terminated
            } else {
                MatchState::Ended {
                    outcome,
                    ticks_left: self.tuning.end_delay_ticks,
                }
            };
        }
    }
}
