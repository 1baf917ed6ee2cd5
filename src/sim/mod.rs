//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, cadence owned by the host
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod craft;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{craft_reaches_gate, resolve};
pub use craft::Craft;
pub use snapshot::{CircleView, EntityView, GateView, Snapshot};
pub use state::{Arena, Bounds, GameEvent, Gate, Objective, Threat};
pub use tick::{Phase, Simulation, TickInput, World, tick};
