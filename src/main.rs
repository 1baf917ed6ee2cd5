//! Drift Miner headless runner
//!
//! Flies the autopilot through a seeded session without a window. Useful
//! for soak testing the simulation and for checking tuning files.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use serde::Serialize;

use drift_miner::highscores::{HighScores, RunRecord};
use drift_miner::consts::SIM_DT;
use drift_miner::sim::{GameEvent, Simulation, TickInput, tick};
use drift_miner::stepper::FixedStepper;
use drift_miner::tuning::Tuning;

#[derive(Parser, Debug)]
#[command(name = "drift-miner")]
#[command(about = "Run a headless Drift Miner session flown by the autopilot")]
struct Cli {
    /// RNG seed for level layouts
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Number of simulation ticks to run
    #[arg(long, default_value_t = 60 * 60 * 3)]
    ticks: u64,
    /// Arena width
    #[arg(long, default_value_t = 1080.0)]
    width: f32,
    /// Arena height
    #[arg(long, default_value_t = 1920.0)]
    height: f32,
    /// JSON tuning overrides
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
    /// Print the default tuning as JSON and exit
    #[arg(long)]
    dump_tuning: bool,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    ticks: u64,
    final_score: u64,
    final_level: u32,
    best_score: u64,
    crystals: u32,
    hunter_hits: u32,
    levels_cleared: u32,
    gate_bounces: u32,
}

fn load_tuning(path: Option<&PathBuf>) -> Result<Tuning> {
    let Some(path) = path else {
        return Ok(Tuning::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read tuning file {}", path.display()))?;
    Tuning::from_json(&json).with_context(|| format!("invalid tuning file {}", path.display()))
}

fn run(cli: &Cli) -> Result<RunSummary> {
    if cli.ticks == 0 {
        return Err(anyhow!("ticks must be > 0"));
    }

    let tuning = load_tuning(cli.tuning.as_ref())?;
    let mut sim = Simulation::with_tuning(cli.seed, tuning);
    sim.resize(cli.width, cli.height);
    if !sim.is_active() {
        return Err(anyhow!("arena {}x{} is too small to play", cli.width, cli.height));
    }

    let mut summary = RunSummary {
        seed: cli.seed,
        ticks: 0,
        final_score: 0,
        final_level: 1,
        best_score: 0,
        crystals: 0,
        hunter_hits: 0,
        levels_cleared: 0,
        gate_bounces: 0,
    };
    let mut high_scores = HighScores::new();
    let mut last_snapshot = None;

    // Pretend frames arrive at a steady 60 fps
    let mut stepper = FixedStepper::default();
    let input = TickInput::autopilot();

    while summary.ticks < cli.ticks {
        for _ in 0..stepper.advance(SIM_DT) {
            if summary.ticks >= cli.ticks {
                break;
            }
            let Some(snap) = tick(&mut sim, &input) else {
                continue;
            };
            summary.ticks += 1;
            summary.best_score = summary.best_score.max(snap.score);

            for event in &snap.events {
                match event {
                    GameEvent::ObjectiveCollected { .. } => summary.crystals += 1,
                    GameEvent::ThreatHit { .. } => summary.hunter_hits += 1,
                    GameEvent::GateCrossed { .. } => summary.levels_cleared += 1,
                    GameEvent::GateBounced => summary.gate_bounces += 1,
                    GameEvent::LevelStarted { .. } => {}
                }
            }

            summary.final_score = snap.score;
            summary.final_level = snap.level;
            last_snapshot = Some(snap);
        }
    }

    if let Some(snap) = &last_snapshot {
        if let Some(rank) = high_scores.record(RunRecord::from_snapshot(snap)) {
            log::info!("Run placed #{rank} on the session board");
        }
    }
    if let Some(best) = high_scores.best() {
        log::info!("Session best {} on level {}", best.score, best.level);
    }

    Ok(summary)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.dump_tuning {
        println!("{}", Tuning::default().to_json());
        return Ok(());
    }

    log::info!("Drift Miner (headless) starting, seed {}", cli.seed);
    let summary = run(&cli)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "seed {}: score {} (best {}), level {}, {} crystals, {} levels cleared, {} hunter hits, {} gate bounces over {} ticks",
            summary.seed,
            summary.final_score,
            summary.best_score,
            summary.final_level,
            summary.crystals,
            summary.levels_cleared,
            summary.hunter_hits,
            summary.gate_bounces,
            summary.ticks
        );
    }

    Ok(())
}
