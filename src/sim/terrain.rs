//! Terrain height field and hazard layout
//!
//! The ground is a piecewise-linear height profile over x. Y grows downward,
//! so a smaller ground y is higher terrain. Segments are authored
//! contiguous and validated at construction; queries never fail.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tolerance for segment joint checks (authoring data is exact, this only
/// absorbs float literal noise)
const JOINT_EPSILON: f32 = 1e-3;

/// One linear piece of the ground profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Segment {
    pub start_x: f32,
    pub end_x: f32,
    pub start_y: f32,
    pub end_y: f32,
}

impl Segment {
    pub const fn new(start_x: f32, end_x: f32, start_y: f32, end_y: f32) -> Self {
        Self {
            start_x,
            end_x,
            start_y,
            end_y,
        }
    }

    /// Interpolated ground height at x, which must lie within the segment
    fn height_at(&self, x: f32) -> f32 {
        let t = (x - self.start_x) / (self.end_x - self.start_x);
        self.start_y + (self.end_y - self.start_y) * t
    }
}

/// A spike strip anchored to the ground at its horizontal center
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hazard {
    /// Horizontal center
    pub x: f32,
    /// Full horizontal extent
    pub width: f32,
    /// Tip height above the ground line
    pub height: f32,
}

impl Hazard {
    pub const fn new(x: f32, width: f32, height: f32) -> Self {
        Self { x, width, height }
    }

    /// Whether a horizontal coordinate falls inside the strip
    #[inline]
    pub fn spans(&self, x: f32) -> bool {
        (x - self.x).abs() <= self.width / 2.0
    }
}

/// Authoring defects rejected at construction
#[derive(Debug, Error, PartialEq)]
pub enum TerrainError {
    #[error("terrain has no segments")]
    Empty,
    #[error("segment {0} has non-positive length")]
    DegenerateSegment(usize),
    #[error("gap or overlap between segments {0} and {1}")]
    Discontiguous(usize, usize),
    #[error("height mismatch at joint between segments {0} and {1}")]
    HeightMismatch(usize, usize),
    #[error("non-finite coordinate in segment {0}")]
    NonFinite(usize),
    #[error("hazard {0} lies outside the terrain span")]
    HazardOutOfSpan(usize),
    #[error("hazard {0} has non-positive size")]
    DegenerateHazard(usize),
    #[error("finish line lies outside the terrain span")]
    FinishOutOfSpan,
}

/// Static course description: ground profile, spike strips, start and finish
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terrain {
    segments: Vec<Segment>,
    hazards: Vec<Hazard>,
    /// Crossing this x wins the run
    pub finish_x: f32,
    /// Rider spawn position
    pub start: Vec2,
}

impl Terrain {
    /// Build a course, rejecting degenerate authoring data
    pub fn new(
        segments: Vec<Segment>,
        hazards: Vec<Hazard>,
        finish_x: f32,
        start: Vec2,
    ) -> Result<Self, TerrainError> {
        if segments.is_empty() {
            return Err(TerrainError::Empty);
        }
        for (i, seg) in segments.iter().enumerate() {
            if ![seg.start_x, seg.end_x, seg.start_y, seg.end_y]
                .iter()
                .all(|v| v.is_finite())
            {
                return Err(TerrainError::NonFinite(i));
            }
            if seg.end_x <= seg.start_x {
                return Err(TerrainError::DegenerateSegment(i));
            }
        }
        for i in 1..segments.len() {
            let prev = &segments[i - 1];
            let next = &segments[i];
            if (next.start_x - prev.end_x).abs() > JOINT_EPSILON {
                return Err(TerrainError::Discontiguous(i - 1, i));
            }
            if (next.start_y - prev.end_y).abs() > JOINT_EPSILON {
                return Err(TerrainError::HeightMismatch(i - 1, i));
            }
        }

        let span_start = segments[0].start_x;
        let span_end = segments[segments.len() - 1].end_x;
        for (i, hazard) in hazards.iter().enumerate() {
            if hazard.width <= 0.0 || hazard.height <= 0.0 {
                return Err(TerrainError::DegenerateHazard(i));
            }
            if hazard.x < span_start || hazard.x > span_end {
                return Err(TerrainError::HazardOutOfSpan(i));
            }
        }
        if finish_x <= span_start || finish_x > span_end {
            return Err(TerrainError::FinishOutOfSpan);
        }

        Ok(Self {
            segments,
            hazards,
            finish_x,
            start,
        })
    }

    /// Ground height at any x. Total over all reals: clamps to the first
    /// segment's start height before the span and the last segment's end
    /// height past it, interpolates linearly inside.
    pub fn height_at(&self, x: f32) -> f32 {
        let first = &self.segments[0];
        if x <= first.start_x {
            return first.start_y;
        }
        let last = &self.segments[self.segments.len() - 1];
        if x >= last.end_x {
            return last.end_y;
        }
        // Segment count is small and fixed; linear scan beats bookkeeping
        for seg in &self.segments {
            if x >= seg.start_x && x <= seg.end_x {
                return seg.height_at(x);
            }
        }
        last.end_y
    }

    /// Horizontal extent of the authored profile
    pub fn span(&self) -> (f32, f32) {
        (
            self.segments[0].start_x,
            self.segments[self.segments.len() - 1].end_x,
        )
    }

    pub fn hazards(&self) -> &[Hazard] {
        &self.hazards
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// World y of a hazard's tip line (its top edge, anchored to the ground
    /// at the strip's center)
    pub fn hazard_top(&self, hazard: &Hazard) -> f32 {
        self.height_at(hazard.x) - hazard.height
    }

    /// The shipped course: a run of ramps, plateaus and dips with three
    /// spike strips, finishing at x = 4200
    pub fn default_course() -> Self {
        let segments = vec![
            Segment::new(0.0, 400.0, 520.0, 520.0),
            Segment::new(400.0, 700.0, 520.0, 460.0),
            Segment::new(700.0, 950.0, 460.0, 460.0),
            Segment::new(950.0, 1200.0, 460.0, 540.0),
            Segment::new(1200.0, 1550.0, 540.0, 540.0),
            Segment::new(1550.0, 1850.0, 540.0, 470.0),
            Segment::new(1850.0, 2150.0, 470.0, 470.0),
            Segment::new(2150.0, 2400.0, 470.0, 560.0),
            Segment::new(2400.0, 2750.0, 560.0, 560.0),
            Segment::new(2750.0, 3050.0, 560.0, 480.0),
            Segment::new(3050.0, 3350.0, 480.0, 480.0),
            Segment::new(3350.0, 3650.0, 480.0, 430.0),
            Segment::new(3650.0, 3950.0, 430.0, 500.0),
            Segment::new(3950.0, 4400.0, 500.0, 500.0),
        ];
        let hazards = vec![
            Hazard::new(1380.0, 70.0, 40.0),
            Hazard::new(2000.0, 60.0, 45.0),
            Hazard::new(2580.0, 80.0, 40.0),
        ];
        Self::new(segments, hazards, 4200.0, Vec2::new(120.0, 440.0))
            .expect("default course must validate")
    }
}
