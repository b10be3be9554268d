//! Rider physical state
//!
//! Position is the body center; foot and head are derived from orientation
//! and the fixed body proportions. Only the physics integrator mutates a
//! rider; resets replace it wholesale.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{HEAD_OFFSET, LEG_LENGTH};
use crate::leg_axis;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rider {
    /// Body center (y grows downward)
    pub pos: Vec2,
    pub vel: Vec2,
    /// Orientation in radians, kept normalized to (-π, π]; zero is upright
    pub angle: f32,
    pub angular_vel: f32,
}

impl Rider {
    /// Fresh rider at a spawn point: at rest, upright
    pub fn spawn(at: Vec2) -> Self {
        Self {
            pos: at,
            vel: Vec2::ZERO,
            angle: 0.0,
            angular_vel: 0.0,
        }
    }

    /// Terrain-contact end of the pogo leg
    #[inline]
    pub fn foot_point(&self) -> Vec2 {
        self.pos + leg_axis(self.angle) * LEG_LENGTH
    }

    /// Center of the helmet, opposite the leg
    #[inline]
    pub fn head_point(&self) -> Vec2 {
        self.pos - leg_axis(self.angle) * HEAD_OFFSET
    }

    /// Velocity magnitude, for the HUD speed readout
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}
