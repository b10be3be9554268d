//! Hazard and failure detection
//!
//! Pure per-frame checks over the freshly integrated rider. Crash checks
//! run before the finish check, so a frame that somehow satisfies both
//! resolves as a crash; the state machine guard makes the loser a no-op
//! anyway.

use super::camera::Viewport;
use super::rider::Rider;
use super::terrain::Terrain;
use crate::consts::{BODY_CLEARANCE, FALL_MARGIN, GROUND_TOLERANCE, HEAD_RADIUS, MIN_WORLD_DEPTH};

/// Terminal result of a detector pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Crashed,
    Won,
}

/// Inspect the rider against hazards, ground and the finish line.
/// Returns `None` while the run continues.
pub fn check(rider: &Rider, terrain: &Terrain, viewport: &Viewport) -> Option<Outcome> {
    let head = rider.head_point();
    let head_reach = head.y + HEAD_RADIUS;
    let body_reach = rider.pos.y + BODY_CLEARANCE;

    // Spike strips: helmet against the tips, lower body against the base.
    // Either contact ends the run.
    for hazard in terrain.hazards() {
        let top = terrain.hazard_top(hazard);
        if hazard.spans(head.x) && head_reach >= top {
            return Some(Outcome::Crashed);
        }
        if hazard.spans(rider.pos.x) && body_reach >= top {
            return Some(Outcome::Crashed);
        }
    }

    // Helmet buried in terrain (hard crash or backward fall)
    if head_reach >= terrain.height_at(head.x) {
        return Some(Outcome::Crashed);
    }

    // Body dragged into the ground
    if body_reach >= terrain.height_at(rider.pos.x) + GROUND_TOLERANCE {
        return Some(Outcome::Crashed);
    }

    // Fell off-world. A zero-height viewport must not turn the whole
    // world into a pit, hence the floor on the reference depth.
    if rider.pos.y > viewport.height.max(MIN_WORLD_DEPTH) + FALL_MARGIN {
        return Some(Outcome::Crashed);
    }

    if rider.pos.x >= terrain.finish_x {
        return Some(Outcome::Won);
    }

    None
}
