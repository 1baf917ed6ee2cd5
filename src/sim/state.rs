//! Arena state and entity types
//!
//! Entities are plain data records. Visual state belongs to whoever renders
//! the [`super::Snapshot`].

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Arena dimensions, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// False until the host has reported a real size
    pub fn is_established(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A collectible crystal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Objective {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
}

/// A hunter that homes in on the craft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Threat {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    /// Distance covered per tick
    pub speed: f32,
}

impl Threat {
    /// Step straight toward `target`
    ///
    /// No momentum: a threat can overshoot when closer than one step, which
    /// makes it jitter around a stationary target.
    pub fn update(&mut self, target: Vec2) {
        if let Some(dir) = crate::seek_direction(self.pos, target) {
            self.pos += dir * self.speed;
        }
    }
}

/// The exit gate: a rectangle centered on the bottom edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Gate {
    pub fn for_bounds(bounds: Bounds, width: f32, height: f32) -> Self {
        Self {
            left: (bounds.width - width) / 2.0,
            top: bounds.height - height,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Strictly inside the gate's horizontal band
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        x > self.left && x < self.right()
    }
}

/// Things that happened during a tick (for audio/UI collaborators)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Crystal picked up
    ObjectiveCollected { id: u32 },
    /// Craft touched a hunter; the level restarts
    ThreatHit { id: u32 },
    /// Craft flew through the open gate out of `level`
    GateCrossed { level: u32 },
    /// Craft hit the closed gate and was pushed back
    GateBounced,
    /// A fresh layout was spawned
    LevelStarted { level: u32 },
}

/// Objectives, threats and level progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena {
    pub bounds: Bounds,
    pub objectives: Vec<Objective>,
    pub threats: Vec<Threat>,
    /// Current level (1-based)
    pub level: u32,
    /// Score, never below zero
    pub score: u64,
    tuning: Tuning,
    next_id: u32,
}

impl Arena {
    /// Empty arena at level 1; call [`Arena::start_level`] to populate it
    pub fn new(bounds: Bounds, tuning: Tuning) -> Self {
        Self {
            bounds,
            objectives: Vec::new(),
            threats: Vec::new(),
            level: 1,
            score: 0,
            tuning,
            next_id: 1,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// The gate opens exactly when every crystal is collected
    #[inline]
    pub fn gate_open(&self) -> bool {
        self.objectives.is_empty()
    }

    pub fn gate(&self) -> Gate {
        let level = &self.tuning.level;
        Gate::for_bounds(self.bounds, level.gate_width, level.gate_height)
    }

    /// Replace the layout with a fresh one for `level`
    ///
    /// Score and craft are left alone. Does nothing until the arena has a
    /// real size.
    pub fn start_level<R: Rng>(&mut self, level: u32, rng: &mut R) {
        if !self.bounds.is_established() {
            log::debug!("start_level({level}) ignored: arena has no size yet");
            return;
        }

        self.objectives.clear();
        self.threats.clear();

        let layout = self.tuning.level;
        let entities = self.tuning.entities;
        let margin = layout.spawn_margin;
        let span_x = self.bounds.width - 2.0 * margin;
        let span_y = self.bounds.height - 2.0 * margin;

        for _ in 0..layout.base_objectives + level {
            let x = rng.random::<f32>() * span_x + margin;
            let y = rng.random::<f32>() * span_y + margin;
            let id = self.next_entity_id();
            self.objectives.push(Objective {
                id,
                pos: Vec2::new(x, y),
                radius: entities.objective_radius,
            });
        }

        // Hunters start in the top-left corner so the player gets a head start
        for _ in 0..level {
            let id = self.next_entity_id();
            self.threats.push(Threat {
                id,
                pos: Vec2::ZERO,
                radius: entities.threat_radius,
                speed: entities.threat_speed,
            });
        }

        self.level = level;
        log::info!(
            "Level {}: {} crystals, {} hunters",
            level,
            self.objectives.len(),
            self.threats.len()
        );
    }

    /// Add to the score
    pub fn award(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    /// Subtract from the score, stopping at zero
    pub fn penalize(&mut self, points: u64) {
        self.score = self.score.saturating_sub(points);
    }
}
