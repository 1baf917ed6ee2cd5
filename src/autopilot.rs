//! Idle/demo mode - the game plays itself
//!
//! Greedy steering: fly at the nearest crystal (or the gate mouth once it is
//! open) while being pushed away from any hunter that gets too close. Good
//! enough for attract screens and soak runs, not meant to be clever.

use glam::Vec2;

use crate::sim::World;

/// Hunters closer than this (center to center) start repelling the craft
pub const DANGER_RADIUS: f32 = 220.0;
/// How hard a hunter at point-blank range pushes compared to the goal pull
const AVOID_WEIGHT: f32 = 2.5;
/// Ticks of current velocity to look ahead when aiming
const LOOKAHEAD_TICKS: f32 = 12.0;

/// Where the autopilot wants to go next
pub fn goal(world: &World) -> Vec2 {
    let arena = &world.arena;
    let craft = &world.craft;

    if arena.gate_open() {
        // The hull reaches the gate top before the center does
        let gate = arena.gate();
        return Vec2::new((gate.left + gate.right()) / 2.0, gate.top);
    }

    arena
        .objectives
        .iter()
        .min_by(|a, b| {
            craft
                .pos
                .distance_squared(a.pos)
                .partial_cmp(&craft.pos.distance_squared(b.pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|o| o.pos)
        .unwrap_or_else(|| arena.bounds.center())
}

/// Stick vector for this tick, inside the unit disk
pub fn steer(world: &World) -> Vec2 {
    let craft = &world.craft;
    let target = goal(world);

    // Lead with current velocity so the craft does not orbit its target
    let predicted = craft.pos + craft.vel * LOOKAHEAD_TICKS;
    let mut desired = crate::seek_direction(predicted, target).unwrap_or(Vec2::ZERO);

    for threat in &world.arena.threats {
        let away = craft.pos - threat.pos;
        let distance = away.length();
        if distance < DANGER_RADIUS && distance > 0.0 {
            let urgency = 1.0 - distance / DANGER_RADIUS;
            desired += away / distance * urgency * AVOID_WEIGHT;
        }
    }

    crate::clamp_to_unit_disk(desired)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Objective, Threat};
    use crate::sim::{Simulation, TickInput, tick};

    fn world() -> World {
        let mut sim = Simulation::new(11);
        sim.resize(1000.0, 2000.0);
        let mut world = sim.world().cloned().unwrap();
        world.arena.objectives.clear();
        world.arena.threats.clear();
        world
    }

    #[test]
    fn test_heads_for_nearest_objective() {
        let mut world = world();
        world.arena.objectives.push(Objective {
            id: 1,
            pos: Vec2::new(900.0, 1000.0),
            radius: 25.0,
        });
        world.arena.objectives.push(Objective {
            id: 2,
            pos: Vec2::new(100.0, 100.0),
            radius: 25.0,
        });

        assert_eq!(goal(&world), Vec2::new(900.0, 1000.0));
        let stick = steer(&world);
        assert!(stick.x > 0.99);
        assert!(stick.length() <= 1.0 + 1e-6);
    }

    #[test]
    fn test_heads_for_gate_when_open() {
        let world = world();
        let gate = world.arena.gate();
        assert_eq!(goal(&world), Vec2::new(500.0, gate.top));
        assert!(steer(&world).y > 0.99);
    }

    #[test]
    fn test_avoids_close_threat() {
        let mut world = world();
        world.arena.objectives.push(Objective {
            id: 1,
            pos: Vec2::new(500.0, 200.0),
            radius: 25.0,
        });
        // Hunter sitting between the craft and its crystal
        world.arena.threats.push(Threat {
            id: 2,
            pos: Vec2::new(500.0, 920.0),
            radius: 35.0,
            speed: 4.0,
        });
        // Net push is away from the hunter even though the goal is beyond it
        assert!(steer(&world).y > 0.0);
    }

    #[test]
    fn test_ignores_distant_threat() {
        let mut world = world();
        world.arena.objectives.push(Objective {
            id: 1,
            pos: Vec2::new(100.0, 1000.0),
            radius: 25.0,
        });
        world.arena.threats.push(Threat {
            id: 2,
            pos: Vec2::new(900.0, 100.0),
            radius: 35.0,
            speed: 4.0,
        });
        let stick = steer(&world);
        assert!(stick.x < -0.99);
    }

    #[test]
    fn test_autopilot_collects_crystals() {
        let mut sim = Simulation::new(2024);
        sim.resize(1000.0, 2000.0);
        let world = sim.world_mut().unwrap();
        world.arena.threats.clear();

        let mut best = 0;
        for _ in 0..3000 {
            if let Some(snap) = tick(&mut sim, &TickInput::autopilot()) {
                best = best.max(snap.score);
            }
        }
        assert!(best > 0, "autopilot never scored");
    }
}
