//! Render snapshot
//!
//! A read-only projection of the simulation, produced every tick. Renderers
//! and audio hosts consume this instead of reaching into simulation state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::GameEvent;
use super::tick::World;

/// A circle to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleView {
    pub pos: Vec2,
    pub radius: f32,
}

/// A tracked entity to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
}

/// The exit gate rectangle and whether it lets the craft through
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateView {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub open: bool,
}

/// Everything a frame needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub craft: CircleView,
    pub objectives: Vec<EntityView>,
    pub threats: Vec<EntityView>,
    pub gate: GateView,
    pub score: u64,
    pub level: u32,
    /// Events raised by the tick that produced this snapshot
    pub events: Vec<GameEvent>,
}

impl Snapshot {
    pub fn capture(world: &World, events: Vec<GameEvent>) -> Self {
        let arena = &world.arena;
        let gate = arena.gate();

        Self {
            tick: world.tick,
            craft: CircleView {
                pos: world.craft.pos,
                radius: world.craft.radius,
            },
            objectives: arena
                .objectives
                .iter()
                .map(|o| EntityView {
                    id: o.id,
                    pos: o.pos,
                    radius: o.radius,
                })
                .collect(),
            threats: arena
                .threats
                .iter()
                .map(|t| EntityView {
                    id: t.id,
                    pos: t.pos,
                    radius: t.radius,
                })
                .collect(),
            gate: GateView {
                left: gate.left,
                top: gate.top,
                width: gate.width,
                height: gate.height,
                open: arena.gate_open(),
            },
            score: arena.score,
            level: arena.level,
            events,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
