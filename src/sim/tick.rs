//! Fixed-order simulation tick
//!
//! The host owns the cadence (see [`crate::stepper`]) and calls [`tick`] once
//! per step. Each tick runs to completion: craft, then hunters, then the
//! collision pass, then a snapshot.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::resolve;
use super::craft::Craft;
use super::snapshot::Snapshot;
use super::state::{Arena, Bounds, GameEvent};
use crate::tuning::Tuning;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Stick vector, each component in [-1, 1], magnitude at most 1
    pub steer: Vec2,
    /// Idle/demo mode - the autopilot flies the craft
    pub autopilot: bool,
}

impl TickInput {
    /// Stick input, clamped into the unit disk
    pub fn steer(x: f32, y: f32) -> Self {
        Self {
            steer: crate::clamp_to_unit_disk(Vec2::new(x, y)),
            autopilot: false,
        }
    }

    pub fn autopilot() -> Self {
        Self {
            steer: Vec2::ZERO,
            autopilot: true,
        }
    }
}

/// A running game: the craft plus the arena it flies in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub craft: Craft,
    pub arena: Arena,
    /// Ticks simulated since the arena was established
    pub tick: u64,
}

/// Whether the arena size is known yet
#[derive(Debug, Clone)]
pub enum Phase {
    /// Waiting for the first size event
    Idle,
    /// Playing
    Active(World),
}

/// Simulation root: tuning, seeded RNG and the current phase
#[derive(Debug, Clone)]
pub struct Simulation {
    tuning: Tuning,
    rng: Pcg32,
    phase: Phase,
}

impl Simulation {
    /// New idle simulation with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            phase: Phase::Idle,
        }
    }

    pub fn world(&self) -> Option<&World> {
        match &self.phase {
            Phase::Active(world) => Some(world),
            Phase::Idle => None,
        }
    }

    pub fn world_mut(&mut self) -> Option<&mut World> {
        match &mut self.phase {
            Phase::Active(world) => Some(world),
            Phase::Idle => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active(_))
    }

    /// Arena size event
    ///
    /// A real size re-centers the craft at rest and restarts at level 1,
    /// keeping the session score. A degenerate size drops back to idle.
    pub fn resize(&mut self, width: f32, height: f32) {
        let bounds = Bounds::new(width, height);
        if !bounds.is_established() {
            if self.is_active() {
                log::warn!("Arena collapsed to {width}x{height}, going idle");
            }
            self.phase = Phase::Idle;
            return;
        }

        let (craft, score) = match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Active(World { mut craft, arena, .. }) => {
                craft.set_bounds(bounds);
                craft.teleport_to(bounds.center());
                craft.vel = Vec2::ZERO;
                (craft, arena.score)
            }
            Phase::Idle => (Craft::centered(bounds, self.tuning.craft), 0),
        };

        let mut arena = Arena::new(bounds, self.tuning);
        arena.score = score;
        arena.start_level(1, &mut self.rng);

        log::info!("Arena established at {width}x{height}");
        self.phase = Phase::Active(World {
            craft,
            arena,
            tick: 0,
        });
    }

    /// Snapshot of the current state without advancing
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.world().map(|world| Snapshot::capture(world, Vec::new()))
    }
}

/// Advance the simulation by one tick
///
/// Returns `None` while idle.
pub fn tick(sim: &mut Simulation, input: &TickInput) -> Option<Snapshot> {
    let Phase::Active(world) = &mut sim.phase else {
        return None;
    };

    let steer = if input.autopilot {
        crate::autopilot::steer(world)
    } else {
        input.steer
    };

    world.craft.update(steer);

    let target = world.craft.pos;
    for threat in &mut world.arena.threats {
        threat.update(target);
    }

    let events = resolve(&mut world.craft, &mut world.arena, &mut sim.rng);
    world.tick += 1;

    for event in &events {
        match event {
            GameEvent::ObjectiveCollected { id } => {
                log::debug!("Crystal {id} collected, score {}", world.arena.score)
            }
            GameEvent::ThreatHit { id } => log::info!(
                "Hunter {id} caught the craft on level {}, score {}",
                world.arena.level,
                world.arena.score
            ),
            GameEvent::GateCrossed { level } => {
                log::info!("Level {level} cleared, score {}", world.arena.score)
            }
            GameEvent::GateBounced => log::debug!("Gate closed, bounced"),
            GameEvent::LevelStarted { .. } => {}
        }
    }

    Some(Snapshot::capture(world, events))
}
