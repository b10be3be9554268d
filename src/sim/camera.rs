//! Follow camera
//!
//! Trails the rider horizontally with exponential smoothing, keeping the
//! rider left-of-center so more upcoming course is visible. Vertical is
//! fixed; the course is authored to fit the view height.

use serde::{Deserialize, Serialize};

use crate::consts::{CAMERA_LEAD, CAMERA_RATE, CAMERA_TAIL};

/// Visible play area, fed by the external resize observer
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when there is nothing to show (e.g. a collapsed canvas)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Horizontal scroll offset of the view into the world
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Camera {
    pub x: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self { x: 0.0 }
    }

    /// Smooth toward the rider. The blend factor is clamped to one full
    /// step per frame so a large delta can never overshoot the target, and
    /// the track is clamped so the view neither precedes the course start
    /// nor scrolls uselessly far past the finish.
    pub fn update(&mut self, rider_x: f32, viewport: &Viewport, finish_x: f32, dt: f32) {
        if viewport.is_empty() {
            return;
        }
        let target = rider_x - viewport.width * CAMERA_LEAD;
        let blend = (CAMERA_RATE * dt).clamp(0.0, 1.0);
        self.x += (target - self.x) * blend;

        let max_x = (finish_x - viewport.width * CAMERA_TAIL).max(0.0);
        self.x = self.x.clamp(0.0, max_x);
    }
}
