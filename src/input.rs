//! Virtual joystick
//!
//! Turns raw pointer/touch drags into the unit-disk stick vector the
//! simulation expects. The stick anchors where the finger lands; dragging
//! `STICK_MAX_THROW` units away is full deflection.

use glam::Vec2;

use crate::consts::STICK_MAX_THROW;

/// Floating thumbstick driven by press/drag/release events
#[derive(Debug, Clone)]
pub struct VirtualStick {
    anchor: Option<Vec2>,
    vector: Vec2,
    max_throw: f32,
}

impl Default for VirtualStick {
    fn default() -> Self {
        Self::new(STICK_MAX_THROW)
    }
}

impl VirtualStick {
    pub fn new(max_throw: f32) -> Self {
        Self {
            anchor: None,
            vector: Vec2::ZERO,
            max_throw,
        }
    }

    /// Finger down: anchor the stick here
    pub fn press(&mut self, point: Vec2) {
        self.anchor = Some(point);
    }

    /// Finger moved
    ///
    /// A drag back onto the anchor keeps the previous vector.
    pub fn drag(&mut self, point: Vec2) {
        let Some(anchor) = self.anchor else {
            return;
        };
        let delta = point - anchor;
        let distance = delta.length();
        if distance > 0.0 && self.max_throw > 0.0 {
            let throw = distance.min(self.max_throw);
            self.vector = delta / distance * (throw / self.max_throw);
        }
    }

    /// Finger up: no more thrust (the craft keeps drifting)
    pub fn release(&mut self) {
        self.anchor = None;
        self.vector = Vec2::ZERO;
    }

    pub fn is_pressed(&self) -> bool {
        self.anchor.is_some()
    }

    /// Anchor point, for drawing the stick ring
    pub fn anchor(&self) -> Option<Vec2> {
        self.anchor
    }

    /// Current stick vector, magnitude at most 1
    pub fn vector(&self) -> Vec2 {
        self.vector
    }
}
