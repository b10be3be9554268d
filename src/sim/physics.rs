//! Spring-leg physics integrator
//!
//! One explicit Euler step per frame: lean control, gravity, integration,
//! then foot/ground resolution against the height field. Ground penetration
//! is corrected positionally (the foot is pinned to the surface, never
//! allowed to sink) and a spring-damper acts on the velocity along the leg
//! axis. The constants are tuned for stability at frame deltas up to
//! `MAX_FRAME_DT`; deeper analysis buys nothing at this step size.

use glam::Vec2;

use super::rider::Rider;
use super::terrain::Terrain;
use crate::consts::*;
use crate::input::InputState;
use crate::{leg_axis, normalize_angle};

/// Advance the rider by one frame. Returns whether the foot had ground
/// contact this step.
///
/// `dt` must be positive, finite, and pre-clamped by the caller to
/// `MAX_FRAME_DT`; a non-positive or non-finite delta is rejected without
/// touching the rider. Consumes the jump edge flag whether or not a jump
/// fired.
pub fn step(rider: &mut Rider, input: &mut InputState, terrain: &Terrain, dt: f32) -> bool {
    if !dt.is_finite() || dt <= 0.0 {
        return false;
    }
    debug_assert!(dt <= MAX_FRAME_DT + 1e-6, "caller must clamp dt");

    let intent = input.lean_intent();

    // Lean: horizontal push. The matching torque is applied per contact
    // branch below, so exactly one torque lands per frame.
    rider.vel.x += LEAN_ACCEL * intent * dt;

    // Gravity, plus a light multiplicative bleed that keeps numerical
    // energy bounded over long runs
    rider.vel.y += GRAVITY * dt;
    rider.vel *= LINEAR_DAMPING;
    rider.angular_vel *= ANGULAR_DAMPING;

    // Integrate
    rider.pos += rider.vel * dt;
    rider.angle = normalize_angle(rider.angle + rider.angular_vel * dt);

    // Foot/ground resolution
    let axis = leg_axis(rider.angle);
    let foot = rider.foot_point();
    let penetration = foot.y - terrain.height_at(foot.x);
    let on_ground = penetration >= 0.0;

    if on_ground {
        rider.angular_vel += GROUND_TORQUE * intent * dt;

        // Pin the foot to the surface along the leg direction
        rider.pos -= axis * penetration;

        let up = -axis;
        // Perpendicular to the leg; +x-ish when upright
        let tangent = Vec2::new(axis.y, -axis.x);

        let separation = rider.vel.dot(up);
        // Foot sweep: body velocity plus the rotational contribution (a
        // rightward lean rate swings the foot backward)
        let tangential = rider.vel.dot(tangent) - rider.angular_vel * LEG_LENGTH;

        let compression = penetration.min(MAX_COMPRESSION);

        // Spring-damper along the leg axis
        let spring = compression * SPRING_STIFFNESS - separation * SPRING_DAMPING;
        rider.vel += up * spring * dt;

        // Foot friction opposes the sweep; a slice of it turns the body
        let friction = tangential * FRICTION;
        rider.vel -= tangent * friction * dt;
        rider.angular_vel += friction * FRICTION_SPIN * dt;

        if input.jump_pressed {
            // Launch along the leg, stronger the deeper the spring sat at
            // press time; the horizontal share is a gameplay tunable
            let impulse = JUMP_BASE + compression * JUMP_COMPRESSION_GAIN;
            rider.vel.x += up.x * impulse * JUMP_SIDE_FRACTION;
            rider.vel.y += up.y * impulse;
            rider.angular_vel += tangential * JUMP_SPIN;
        }
    } else {
        // Reduced steering authority in the air
        rider.angular_vel += AIR_TORQUE * intent * dt;
    }

    // The jump edge is spent either way; a press on an airborne frame
    // does not buffer until landing
    input.jump_pressed = false;

    on_ground
}
