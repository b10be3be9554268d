//! Pogo Dash - a side-scrolling pogo stick time attack
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain, spring-leg physics, hazards, run state)
//! - `input`: Logical input intents mapped from physical keys
//! - `hud`: Throttled derived stats for display
//! - `records`: Session best-time record

pub mod hud;
pub mod input;
pub mod records;
pub mod sim;

pub use input::InputState;
pub use records::BestTime;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Largest frame delta fed to the integrator; the driver clamps to this
    /// before stepping (protects against tab-background hitches)
    pub const MAX_FRAME_DT: f32 = 0.040;
    /// Delta assumed for the very first frame, before two timestamps exist
    pub const NOMINAL_DT: f32 = 1.0 / 60.0;

    /// Gravitational acceleration (px/s², y grows downward)
    pub const GRAVITY: f32 = 2200.0;
    /// Per-frame multiplicative decay on linear velocity
    pub const LINEAR_DAMPING: f32 = 0.996;
    /// Per-frame multiplicative decay on angular velocity
    pub const ANGULAR_DAMPING: f32 = 0.97;

    /// Horizontal acceleration from lean input (px/s²)
    pub const LEAN_ACCEL: f32 = 820.0;
    /// Angular acceleration from lean input with ground contact (rad/s²)
    pub const GROUND_TORQUE: f32 = 6.0;
    /// Angular acceleration from lean input while airborne (rad/s²)
    pub const AIR_TORQUE: f32 = 2.6;

    /// Pogo leg length from body center to foot (px)
    pub const LEG_LENGTH: f32 = 54.0;
    /// Spring restoring gain on compression depth (1/s²)
    pub const SPRING_STIFFNESS: f32 = 170.0;
    /// Spring damping gain on separation velocity (1/s)
    pub const SPRING_DAMPING: f32 = 9.0;
    /// Compression depth cap used for spring force and jump bonus (px)
    pub const MAX_COMPRESSION: f32 = 26.0;
    /// Tangential friction gain at the foot (1/s)
    pub const FRICTION: f32 = 3.2;
    /// Fraction of foot friction converted into body spin
    pub const FRICTION_SPIN: f32 = 0.0012;

    /// Base launch impulse on a jump press (px/s)
    pub const JUMP_BASE: f32 = 620.0;
    /// Extra launch impulse per px of spring compression at press time (1/s)
    pub const JUMP_COMPRESSION_GAIN: f32 = 34.0;
    /// Scale on the horizontal component of the launch impulse (tuned, not derived)
    pub const JUMP_SIDE_FRACTION: f32 = 0.45;
    /// Angular impulse per px/s of tangential foot speed at press time
    pub const JUMP_SPIN: f32 = 0.0006;

    /// Helmet collision radius (px)
    pub const HEAD_RADIUS: f32 = 12.0;
    /// Body center to head center distance, opposite the leg (px)
    pub const HEAD_OFFSET: f32 = 38.0;
    /// Body center to lower-body collision bound (px)
    pub const BODY_CLEARANCE: f32 = 16.0;
    /// Slack below ground level before the body counts as buried (px)
    pub const GROUND_TOLERANCE: f32 = 6.0;

    /// Floor for the off-world line when the viewport reports zero height (px)
    pub const MIN_WORLD_DEPTH: f32 = 720.0;
    /// Distance past the bottom of the view that counts as falling off-world (px)
    pub const FALL_MARGIN: f32 = 320.0;

    /// Rider sits this fraction of the view width from the left edge
    pub const CAMERA_LEAD: f32 = 0.35;
    /// View-width fraction kept visible past the finish line
    pub const CAMERA_TAIL: f32 = 0.4;
    /// Camera smoothing rate (1/s)
    pub const CAMERA_RATE: f32 = 4.5;

    /// Minimum seconds between HUD stat broadcasts (~10 Hz)
    pub const HUD_INTERVAL: f32 = 0.1;
}

/// Normalize angle to (-π, π]
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    while angle > PI {
        angle -= TAU;
    }
    while angle <= -PI {
        angle += TAU;
    }
    angle
}

/// Unit vector from body center toward the foot for a given orientation.
/// Zero angle points straight down (+y); a positive angle is a rightward
/// lean - the head tips toward +x and the foot swings back toward -x.
#[inline]
pub fn leg_axis(angle: f32) -> Vec2 {
    Vec2::new(-angle.sin(), angle.cos())
}
