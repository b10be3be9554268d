//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Variable timestep, but the driver clamps every delta before stepping
//! - No randomness anywhere
//! - No rendering or platform dependencies

pub mod camera;
pub mod detect;
pub mod physics;
pub mod rider;
pub mod state;
pub mod terrain;
pub mod tick;

pub use camera::{Camera, Viewport};
pub use detect::{Outcome, check};
pub use physics::step;
pub use rider::Rider;
pub use state::{GameState, Phase, Snapshot};
pub use terrain::{Hazard, Segment, Terrain, TerrainError};
pub use tick::tick;
