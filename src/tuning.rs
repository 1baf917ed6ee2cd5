//! Data-driven game balance
//!
//! Every gameplay number lives here so a host can load a JSON override
//! without recompiling. Missing fields fall back to the defaults in
//! [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Craft handling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CraftTuning {
    /// Velocity added per tick at full stick deflection
    pub acceleration: f32,
    /// Velocity multiplier applied every tick (the drift)
    pub friction: f32,
    /// Per-axis speed cap
    pub max_speed: f32,
    /// Velocity retained (and reversed) on wall contact
    pub wall_bounce: f32,
    /// Velocity retained (and reversed) on closed-gate contact
    pub gate_bounce: f32,
    pub radius: f32,
}

impl Default for CraftTuning {
    fn default() -> Self {
        Self {
            acceleration: CRAFT_ACCELERATION,
            friction: CRAFT_FRICTION,
            max_speed: CRAFT_MAX_SPEED,
            wall_bounce: WALL_BOUNCE,
            gate_bounce: GATE_BOUNCE,
            radius: CRAFT_RADIUS,
        }
    }
}

/// Objective and threat sizes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityTuning {
    pub objective_radius: f32,
    pub threat_radius: f32,
    /// Distance a threat closes per tick
    pub threat_speed: f32,
}

impl Default for EntityTuning {
    fn default() -> Self {
        Self {
            objective_radius: OBJECTIVE_RADIUS,
            threat_radius: THREAT_RADIUS,
            threat_speed: THREAT_SPEED,
        }
    }
}

/// Level layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelTuning {
    /// Objectives spawned on level N = base_objectives + N
    pub base_objectives: u32,
    /// Objectives never spawn closer than this to an arena edge
    pub spawn_margin: f32,
    pub gate_width: f32,
    pub gate_height: f32,
}

impl Default for LevelTuning {
    fn default() -> Self {
        Self {
            base_objectives: BASE_OBJECTIVES,
            spawn_margin: SPAWN_MARGIN,
            gate_width: GATE_WIDTH,
            gate_height: GATE_HEIGHT,
        }
    }
}

/// Score deltas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scoring {
    pub objective: u64,
    pub gate: u64,
    pub threat_penalty: u64,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            objective: OBJECTIVE_SCORE,
            gate: GATE_SCORE,
            threat_penalty: THREAT_PENALTY,
        }
    }
}

/// Complete balance sheet
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub craft: CraftTuning,
    pub entities: EntityTuning,
    pub level: LevelTuning,
    pub scoring: Scoring,
}

impl Tuning {
    /// Parse tuning from JSON (missing fields use defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Parse tuning from JSON, falling back to defaults on malformed input
    pub fn load_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(err) => {
                log::warn!("Ignoring malformed tuning ({err}), using defaults");
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON (for writing a starter override file)
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Clamp values that would break the simulation
    pub fn sanitized(mut self) -> Self {
        let craft = &mut self.craft;
        craft.friction = craft.friction.clamp(0.0, 1.0);
        craft.wall_bounce = craft.wall_bounce.clamp(0.0, 1.0);
        craft.gate_bounce = craft.gate_bounce.clamp(0.0, 1.0);
        craft.acceleration = craft.acceleration.max(0.0);
        craft.max_speed = craft.max_speed.max(0.0);
        craft.radius = craft.radius.max(0.0);

        let entities = &mut self.entities;
        entities.objective_radius = entities.objective_radius.max(0.0);
        entities.threat_radius = entities.threat_radius.max(0.0);
        entities.threat_speed = entities.threat_speed.max(0.0);

        let level = &mut self.level;
        level.spawn_margin = level.spawn_margin.max(0.0);
        level.gate_width = level.gate_width.max(0.0);
        level.gate_height = level.gate_height.max(0.0);

        self
    }
}
