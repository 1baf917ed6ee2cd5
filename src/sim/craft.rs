//! The player's craft
//!
//! Drift handling: input accelerates, friction bleeds speed off every tick,
//! each axis is capped independently, and arena walls bounce the craft back
//! with some energy lost.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Bounds;
use crate::tuning::CraftTuning;

/// The player-controlled craft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Craft {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    tuning: CraftTuning,
    bounds: Bounds,
}

impl Craft {
    /// Create a resting craft at `pos` inside `bounds`
    pub fn new(pos: Vec2, bounds: Bounds, tuning: CraftTuning) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius: tuning.radius,
            tuning,
            bounds,
        }
    }

    /// Create a resting craft at the center of `bounds`
    pub fn centered(bounds: Bounds, tuning: CraftTuning) -> Self {
        Self::new(bounds.center(), bounds, tuning)
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Re-establish the walls (arena resized)
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Advance one tick with the given stick vector
    ///
    /// `input` is expected inside the unit disk. Larger vectors are not
    /// rejected; they simply accelerate proportionally harder.
    pub fn update(&mut self, input: Vec2) {
        let t = &self.tuning;

        self.vel += input * t.acceleration;
        self.vel *= t.friction;
        self.vel = self
            .vel
            .clamp(Vec2::splat(-t.max_speed), Vec2::splat(t.max_speed));

        self.pos += self.vel;

        self.bounce_off_walls();
    }

    /// Reflect off the arena edges, each axis on its own (corners bounce both)
    fn bounce_off_walls(&mut self) {
        let factor = self.tuning.wall_bounce;
        let Bounds { width, height } = self.bounds;

        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.vel.x = -self.vel.x * factor;
        } else if self.pos.x > width {
            self.pos.x = width;
            self.vel.x = -self.vel.x * factor;
        }

        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel.y = -self.vel.y * factor;
        } else if self.pos.y > height {
            self.pos.y = height;
            self.vel.y = -self.vel.y * factor;
        }
    }

    /// Bounce off a horizontal surface (the closed gate)
    pub fn bounce_vertical(&mut self) {
        self.vel.y = -self.vel.y * self.tuning.gate_bounce;
    }

    /// Move without touching velocity
    pub fn teleport_to(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    /// Lowest point of the craft's hull
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arena() -> Bounds {
        Bounds::new(1000.0, 2000.0)
    }

    fn craft_at(pos: Vec2) -> Craft {
        Craft::new(pos, arena(), CraftTuning::default())
    }

    #[test]
    fn test_resting_craft_stays_put() {
        let mut craft = Craft::centered(arena(), CraftTuning::default());
        craft.update(Vec2::ZERO);
        assert_eq!(craft.pos, Vec2::new(500.0, 1000.0));
        assert_eq!(craft.vel, Vec2::ZERO);
    }

    #[test]
    fn test_acceleration_then_friction() {
        let mut craft = craft_at(Vec2::new(500.0, 1000.0));
        craft.update(Vec2::new(1.0, 0.0));
        // (0 + 1.5) * 0.95
        assert!((craft.vel.x - 1.425).abs() < 1e-6);
        assert_eq!(craft.vel.y, 0.0);
        assert!((craft.pos.x - 501.425).abs() < 1e-4);
    }

    #[test]
    fn test_friction_convergence() {
        let mut craft = craft_at(Vec2::new(500.0, 1000.0));
        craft.vel = Vec2::new(10.0, -6.0);
        let initial = craft.vel;

        for n in 1..=40 {
            craft.update(Vec2::ZERO);
            let expected = initial * 0.95f32.powi(n);
            assert!((craft.vel - expected).length() < 1e-3, "tick {n}");
            // Decays toward zero without flipping sign
            assert!(craft.vel.x > 0.0);
            assert!(craft.vel.y < 0.0);
        }
    }

    #[test]
    fn test_speed_clamp_per_axis() {
        let mut craft = craft_at(Vec2::new(500.0, 1000.0));
        for _ in 0..200 {
            craft.update(Vec2::new(1.0, 0.0));
            craft.teleport_to(Vec2::new(500.0, 1000.0));
        }
        // Terminal velocity (1.5 * 0.95 / 0.05 = 28.5) exceeds the cap
        assert_eq!(craft.vel.x, 25.0);
    }

    #[test]
    fn test_wall_bounce_loses_half() {
        let mut craft = craft_at(Vec2::new(5.0, 1000.0));
        craft.vel = Vec2::new(-20.0, 0.0);
        craft.update(Vec2::ZERO);
        // -20 * 0.95 = -19, lands at -14 -> clamped, reflected at half
        assert_eq!(craft.pos.x, 0.0);
        assert!((craft.vel.x - 9.5).abs() < 1e-5);
    }

    #[test]
    fn test_corner_bounces_both_axes() {
        let mut craft = craft_at(Vec2::new(995.0, 1995.0));
        craft.vel = Vec2::new(20.0, 20.0);
        craft.update(Vec2::ZERO);
        assert_eq!(craft.pos, Vec2::new(1000.0, 2000.0));
        assert!((craft.vel.x + 9.5).abs() < 1e-5);
        assert!((craft.vel.y + 9.5).abs() < 1e-5);
    }

    #[test]
    fn test_bounce_vertical() {
        let mut craft = craft_at(Vec2::new(500.0, 1000.0));
        craft.vel = Vec2::new(3.0, 10.0);
        craft.bounce_vertical();
        assert_eq!(craft.vel.x, 3.0);
        assert!((craft.vel.y + 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_teleport_keeps_velocity() {
        let mut craft = craft_at(Vec2::new(500.0, 1000.0));
        craft.vel = Vec2::new(4.0, 2.0);
        craft.teleport_to(Vec2::new(10.0, 20.0));
        assert_eq!(craft.pos, Vec2::new(10.0, 20.0));
        assert_eq!(craft.vel, Vec2::new(4.0, 2.0));
    }

    fn stick() -> impl Strategy<Value = Vec2> {
        (-1.0f32..=1.0, -1.0f32..=1.0)
            .prop_map(|(x, y)| crate::clamp_to_unit_disk(Vec2::new(x, y)))
    }

    proptest! {
        #[test]
        fn prop_speed_never_exceeds_cap(inputs in prop::collection::vec(stick(), 1..300)) {
            let mut craft = craft_at(Vec2::new(500.0, 1000.0));
            for input in inputs {
                craft.update(input);
                prop_assert!(craft.vel.x.abs() <= 25.0);
                prop_assert!(craft.vel.y.abs() <= 25.0);
            }
        }

        #[test]
        fn prop_craft_stays_inside_walls(
            start_x in 0.0f32..=1000.0,
            start_y in 0.0f32..=2000.0,
            inputs in prop::collection::vec(stick(), 1..300),
        ) {
            let mut craft = craft_at(Vec2::new(start_x, start_y));
            for input in inputs {
                craft.update(input);
                prop_assert!((0.0..=1000.0).contains(&craft.pos.x));
                prop_assert!((0.0..=2000.0).contains(&craft.pos.y));
            }
        }
    }
}
