//! Derived HUD stats
//!
//! Read-only scalars for the overlay, broadcast at a bounded cadence
//! (~10 Hz) so downstream DOM writes never track the physics frame rate.
//! Throttling is display-only; it must not and does not touch the sim.

use serde::{Deserialize, Serialize};

use crate::consts::HUD_INTERVAL;
use crate::sim::GameState;

/// One HUD broadcast
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HudStats {
    /// Run seconds
    pub elapsed: f32,
    /// Course completion, 0-100
    pub progress: f32,
    /// Velocity magnitude (px/s)
    pub speed: f32,
    /// Session best, if any run has finished
    pub best: Option<f32>,
}

impl HudStats {
    fn of(state: &GameState) -> Self {
        Self {
            elapsed: state.elapsed,
            progress: state.progress_percent(),
            speed: state.rider.speed(),
            best: state.best.get(),
        }
    }
}

/// Rate limiter for HUD broadcasts
#[derive(Debug, Clone, Default)]
pub struct HudTicker {
    since_emit: f32,
}

impl HudTicker {
    /// Ready to emit on the first update
    pub fn new() -> Self {
        Self {
            since_emit: HUD_INTERVAL,
        }
    }

    /// Accumulate a frame delta; emits a stats snapshot at most once per
    /// `HUD_INTERVAL`
    pub fn update(&mut self, state: &GameState, dt: f32) -> Option<HudStats> {
        self.since_emit += dt.max(0.0);
        if self.since_emit < HUD_INTERVAL {
            return None;
        }
        self.since_emit = 0.0;
        Some(HudStats::of(state))
    }
}

/// Seconds as the HUD shows them
pub fn format_time(seconds: Option<f32>) -> String {
    match seconds {
        Some(s) => format!("{s:.2}s"),
        None => "--".to_string(),
    }
}
