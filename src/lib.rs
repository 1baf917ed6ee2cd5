//! Drift Miner - a drifting-craft arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (craft physics, threats, collisions, levels)
//! - `tuning`: Data-driven game balance
//! - `input`: Virtual joystick normalization for hosts
//! - `autopilot`: Demo mode that plays the game
//! - `stepper`: Fixed timestep accumulator for host loops
//! - `highscores`: Session leaderboard

pub mod autopilot;
pub mod highscores;
pub mod input;
pub mod sim;
pub mod stepper;
pub mod tuning;

pub use highscores::HighScores;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
///
/// Movement values are per tick, tuned for a 60 Hz cadence.
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Craft defaults
    pub const CRAFT_RADIUS: f32 = 40.0;
    pub const CRAFT_ACCELERATION: f32 = 1.5;
    /// Drift factor: 1.0 = infinite slide, 0.0 = instant stop
    pub const CRAFT_FRICTION: f32 = 0.95;
    pub const CRAFT_MAX_SPEED: f32 = 25.0;
    pub const WALL_BOUNCE: f32 = 0.5;
    pub const GATE_BOUNCE: f32 = 0.8;

    /// Objective (crystal) defaults
    pub const OBJECTIVE_RADIUS: f32 = 25.0;

    /// Threat (hunter) defaults - slower than the craft's top speed
    pub const THREAT_RADIUS: f32 = 35.0;
    pub const THREAT_SPEED: f32 = 4.0;

    /// Level layout
    pub const BASE_OBJECTIVES: u32 = 5;
    pub const SPAWN_MARGIN: f32 = 100.0;
    pub const GATE_WIDTH: f32 = 300.0;
    pub const GATE_HEIGHT: f32 = 60.0;

    /// Scoring
    pub const OBJECTIVE_SCORE: u64 = 100;
    pub const GATE_SCORE: u64 = 1000;
    pub const THREAT_PENALTY: u64 = 500;

    /// Virtual joystick throw distance (pointer units)
    pub const STICK_MAX_THROW: f32 = 150.0;
}

/// True if two circles overlap (strictly), compared in squared space
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a.distance_squared(b) < reach * reach
}

/// Unit direction from `from` toward `to`, or `None` when they coincide
#[inline]
pub fn seek_direction(from: Vec2, to: Vec2) -> Option<Vec2> {
    let delta = to - from;
    let distance = delta.length();
    if distance > 0.0 {
        Some(delta / distance)
    } else {
        None
    }
}

/// Clamp a vector into the unit disk, keeping its direction
#[inline]
pub fn clamp_to_unit_disk(v: Vec2) -> Vec2 {
    v.clamp_length_max(1.0)
}
