//! Arena Duel headless driver
//!
//! Pumps the simulation at a fixed cadence with the autopilot playing, and
//! reports the outcome. Rendering, audio and keyboard input belong to a
//! presentation layer that is not part of this crate.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use arena_duel::consts::*;
use arena_duel::sim::{FrameSnapshot, GameEvent, Match, MatchState, Outcome, TickInput};
use arena_duel::tuning::AimTarget;
use arena_duel::{Error, Tuning};
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "arena-duel")]
#[command(about = "Run a headless Arena Duel match with the autopilot playing")]
struct Cli {
    /// RNG seed (defaults to the current unix time)
    #[arg(long)]
    seed: Option<u64>,
    /// Tuning JSON; absent fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Pace ticks against the wall clock instead of running flat out
    #[arg(long)]
    realtime: bool,
    /// Stop after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,
    /// Override where enemy spawners aim
    #[arg(long, value_enum)]
    aim: Option<CliAim>,
    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
    /// Print the effective tuning as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliAim {
    Zone,
    Player,
}

impl From<CliAim> for AimTarget {
    fn from(value: CliAim) -> Self {
        match value {
            CliAim::Zone => AimTarget::ZoneCenter,
            CliAim::Player => AimTarget::Player,
        }
    }
}

fn load_tuning(path: Option<&Path>) -> Result<Tuning, String> {
    let Some(path) = path else {
        return Ok(Tuning::default());
    };
    let json =
        std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    let tuning =
        Tuning::from_json(&json).map_err(|e: Error| format!("{}: {e}", path.display()))?;
    log::info!("Loaded tuning from {}", path.display());
    Ok(tuning)
}

/// Fixed-timestep pump: accumulate wall time, run whole ticks
fn run(mut game: Match, opts: &Cli) -> Result<(FrameSnapshot, Option<Outcome>), Error> {
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    let max_ticks = opts.max_ticks.unwrap_or(u64::MAX);

    let mut last = game.tick(&input)?;
    let mut outcome = report_events(&last);
    let mut accumulator = 0.0_f32;
    let mut last_time = Instant::now();

    while last.state != MatchState::Terminated {
        if game.tick >= max_ticks {
            log::warn!("tick limit {max_ticks} reached, stopping");
            game.terminate();
            break;
        }

        let mut substeps = 1;
        if opts.realtime {
            let now = Instant::now();
            accumulator += (now - last_time).as_secs_f32().min(0.1);
            last_time = now;
            substeps = 0;
            while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                accumulator -= SIM_DT;
                substeps += 1;
            }
        }

        for _ in 0..substeps {
            let snapshot = game.tick(&input)?;
            outcome = outcome.or(report_events(&snapshot));
            let done = snapshot.state == MatchState::Terminated;
            last = snapshot;
            if done {
                break;
            }
        }

        if opts.realtime {
            std::thread::sleep(Duration::from_secs_f32(SIM_DT / 2.0));
        }
    }

    Ok((last, outcome))
}

/// Log a tick's events; returns the outcome if the match ended this tick
fn report_events(snapshot: &FrameSnapshot) -> Option<Outcome> {
    let mut ended = None;
    for event in &snapshot.events {
        match event {
            GameEvent::MatchEnded(outcome) => {
                log::info!("tick {}: {outcome:?}", snapshot.tick);
                ended = Some(*outcome);
            }
            GameEvent::SpecialSpawned => log::debug!("tick {}: special shot", snapshot.tick),
            other => log::trace!("tick {}: {other:?}", snapshot.tick),
        }
    }
    ended
}

fn main() -> ExitCode {
    env_logger::init();

    let opts = Cli::parse();

    let mut tuning = match load_tuning(opts.config.as_deref()) {
        Ok(tuning) => tuning,
        Err(msg) => {
            log::error!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(aim) = opts.aim.map(AimTarget::from) {
        log::info!("Spawners aim at {}", aim.as_str());
        tuning.aim_target = aim;
    }

    if opts.dump_config {
        println!("{}", tuning.to_json());
        return ExitCode::SUCCESS;
    }

    let seed = opts.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });
    log::info!("Arena Duel (headless) starting with seed {seed}");

    let game = match Match::new(tuning, seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match run(game, &opts) {
        Ok((last, outcome)) => {
            if opts.json {
                match serde_json::to_string_pretty(&last) {
                    Ok(json) => println!("{json}"),
                    Err(e) => log::error!("snapshot serialization failed: {e}"),
                }
            } else {
                let outcome = outcome
                    .map(|o| format!("{o:?}"))
                    .unwrap_or_else(|| "stopped".to_string());
                println!(
                    "seed {seed}: {} after {} ticks (player hp {}, sp {}; opponent hp {})",
                    outcome, last.tick, last.player_hp, last.player_sp, last.opponent_hp
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
