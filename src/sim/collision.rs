//! Collision detection and game-state resolution
//!
//! Runs once per tick after everything has moved. Checks happen in a fixed
//! order and a level reset ends the pass:
//!
//! 1. Crystal pickups (any number per tick)
//! 2. Hunter contact (first hunter in set order wins, level restarts)
//! 3. Gate contact (advance if open, bounce if closed)
//!
//! Distances are compared squared; nothing on this path takes a square root.

use glam::Vec2;
use rand::Rng;

use super::craft::Craft;
use super::state::{Arena, GameEvent, Gate};
use crate::circles_overlap;

/// Resolve every interaction for this tick, returning what happened
pub fn resolve<R: Rng>(craft: &mut Craft, arena: &mut Arena, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();

    collect_objectives(craft, arena, &mut events);

    if let Some(id) = first_threat_contact(craft, arena) {
        let scoring = arena.tuning().scoring;
        arena.penalize(scoring.threat_penalty);
        let level = arena.level;
        arena.start_level(level, rng);
        events.push(GameEvent::ThreatHit { id });
        events.push(GameEvent::LevelStarted { level });
        return events;
    }

    let gate = arena.gate();
    if craft_reaches_gate(craft, &gate) {
        if arena.gate_open() {
            let cleared = arena.level;
            let gate_score = arena.tuning().scoring.gate;
            arena.award(gate_score);
            craft.teleport_to(arena.bounds.center());
            arena.start_level(cleared + 1, rng);
            events.push(GameEvent::GateCrossed { level: cleared });
            events.push(GameEvent::LevelStarted { level: cleared + 1 });
        } else {
            // Pin the hull against the gate so it cannot tunnel through
            craft.teleport_to(Vec2::new(craft.pos.x, gate.top - craft.radius));
            craft.bounce_vertical();
            events.push(GameEvent::GateBounced);
        }
    }

    events
}

/// Remove every crystal the craft overlaps, scoring each one
fn collect_objectives(craft: &Craft, arena: &mut Arena, events: &mut Vec<GameEvent>) {
    let before = arena.objectives.len();
    arena.objectives.retain(|objective| {
        if circles_overlap(craft.pos, craft.radius, objective.pos, objective.radius) {
            events.push(GameEvent::ObjectiveCollected { id: objective.id });
            false
        } else {
            true
        }
    });

    let collected = (before - arena.objectives.len()) as u64;
    if collected > 0 {
        let per_objective = arena.tuning().scoring.objective;
        arena.award(per_objective * collected);
    }
}

/// ID of the first hunter touching the craft, if any
fn first_threat_contact(craft: &Craft, arena: &Arena) -> Option<u32> {
    arena
        .threats
        .iter()
        .find(|threat| circles_overlap(craft.pos, craft.radius, threat.pos, threat.radius))
        .map(|threat| threat.id)
}

/// Craft center inside the gate band with its hull touching the gate top
pub fn craft_reaches_gate(craft: &Craft, gate: &Gate) -> bool {
    gate.spans_x(craft.pos.x) && craft.bottom() >= gate.top
}
