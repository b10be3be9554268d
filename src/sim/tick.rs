//! Per-frame simulation advance
//!
//! The driver calls `tick` once per animation frame, in a fixed order:
//! start edge, integrator (gated on `Playing`), hazard detection, camera,
//! timer. Input edges are one-frame signals and are cleared on the way
//! out, whatever phase the frame ended in.

use super::camera::Viewport;
use super::detect::{Outcome, check};
use super::physics::step;
use super::state::{GameState, Phase};
use crate::consts::MAX_FRAME_DT;
use crate::input::InputState;

/// Advance the session by one frame. `now_ms` is the driver clock reading
/// for this frame (used only to stamp run starts); `dt` is the raw frame
/// delta in seconds and is clamped here before it reaches the integrator.
pub fn tick(
    state: &mut GameState,
    input: &mut InputState,
    viewport: &Viewport,
    now_ms: f64,
    dt: f32,
) {
    let dt = if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_DT)
    } else {
        0.0
    };

    // Start/restart edge. While a run is live the edge is swallowed; a
    // duplicate press is a no-op, not an error.
    if input.take_start() && state.phase != Phase::Playing {
        input.reset();
        state.start(now_ms);
    }

    if state.phase != Phase::Playing {
        input.clear_edges();
        return;
    }

    state.elapsed += dt;
    state.on_ground = step(&mut state.rider, input, &state.terrain, dt);

    if let Some(outcome) = check(&state.rider, &state.terrain, viewport) {
        match outcome {
            Outcome::Crashed => state.handle_crash(),
            Outcome::Won => state.handle_win(),
        }
    }

    state
        .camera
        .update(state.rider.pos.x, viewport, state.terrain.finish_x, dt);

    input.clear_edges();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::terrain::{Hazard, Segment, Terrain};
    use glam::Vec2;
    use std::f32::consts::PI;

    const DT: f32 = 1.0 / 60.0;

    fn view() -> Viewport {
        Viewport::new(1280.0, 720.0)
    }

    fn flat_run() -> GameState {
        let terrain = Terrain::new(
            vec![Segment::new(0.0, 2000.0, 500.0, 500.0)],
            vec![],
            1500.0,
            Vec2::new(80.0, 440.0),
        )
        .unwrap();
        GameState::new(terrain)
    }

    fn spiked_run() -> GameState {
        let terrain = Terrain::new(
            vec![Segment::new(0.0, 1200.0, 500.0, 500.0)],
            vec![Hazard::new(200.0, 60.0, 40.0)],
            1000.0,
            Vec2::new(50.0, 440.0),
        )
        .unwrap();
        GameState::new(terrain)
    }

    fn start(state: &mut GameState, input: &mut InputState) {
        input.key_down("Enter");
        tick(state, input, &view(), 0.0, DT);
        input.key_up("Enter");
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn test_intro_gates_integrator() {
        let mut state = flat_run();
        let mut input = InputState::new();
        let spawn = state.rider.pos;

        for _ in 0..10 {
            tick(&mut state, &mut input, &view(), 0.0, DT);
        }
        assert_eq!(state.phase, Phase::Intro);
        assert_eq!(state.rider.pos, spawn);
        assert_eq!(state.elapsed, 0.0);
    }

    #[test]
    fn test_start_edge_begins_run_once() {
        let mut state = flat_run();
        let mut input = InputState::new();
        start(&mut state, &mut input);

        for _ in 0..30 {
            tick(&mut state, &mut input, &view(), 0.0, DT);
        }
        let elapsed = state.elapsed;
        assert!(elapsed > 0.0);

        // A second start press mid-run is swallowed, not a reset
        input.key_down("Enter");
        tick(&mut state, &mut input, &view(), 0.0, DT);
        assert_eq!(state.phase, Phase::Playing);
        assert!(state.elapsed > elapsed);
    }

    #[test]
    fn test_settles_near_ground_with_no_input() {
        let mut state = GameState::new(Terrain::default_course());
        let mut input = InputState::new();
        start(&mut state, &mut input);

        let rest_y = 520.0 - crate::consts::LEG_LENGTH;
        for _ in 0..600 {
            tick(&mut state, &mut input, &view(), 0.0, DT);
        }
        // Ten seconds idle: still alive, parked just above the ground line
        assert_eq!(state.phase, Phase::Playing);
        assert!((state.rider.pos.y - rest_y).abs() < 10.0);
        assert!(state.rider.pos.is_finite());
        assert!((state.elapsed - 10.0).abs() < 0.05);
    }

    #[test]
    fn test_course_completable_under_nominal_play() {
        let mut state = flat_run();
        let mut input = InputState::new();
        start(&mut state, &mut input);

        let mut won_transitions = 0;
        for frame in 0..3600 {
            if state.phase == Phase::Playing {
                // Nominal play: hold lean-right, feathered to keep a
                // modest forward lean, plus a periodic grounded jump
                input.lean_right = state.rider.angle < 0.20;
                input.lean_left = state.rider.angle > 0.32;
                if frame % 45 == 0 && state.on_ground {
                    input.jump_pressed = true;
                }
            }
            let before = state.phase;
            tick(&mut state, &mut input, &view(), 0.0, DT);
            if before == Phase::Playing && state.phase == Phase::Won {
                won_transitions += 1;
            }
        }

        // Reaches the line within a minute of simulated time, exactly once
        assert_eq!(state.phase, Phase::Won);
        assert_eq!(won_transitions, 1);
        assert!(state.best.is_set());
        assert!(state.camera.x > 0.0);
        assert_eq!(state.progress_percent(), 100.0);
    }

    #[test]
    fn test_won_freezes_rider_and_clock() {
        let mut state = flat_run();
        let mut input = InputState::new();
        start(&mut state, &mut input);

        // Teleport to the line; next frame wins
        state.rider.pos.x = state.terrain.finish_x + 1.0;
        tick(&mut state, &mut input, &view(), 0.0, DT);
        assert_eq!(state.phase, Phase::Won);

        let rider = state.rider;
        let elapsed = state.elapsed;
        input.key_down("ArrowRight");
        for _ in 0..60 {
            tick(&mut state, &mut input, &view(), 0.0, DT);
        }
        // Integrator never runs outside Playing
        assert_eq!(state.rider.pos, rider.pos);
        assert_eq!(state.rider.vel, rider.vel);
        assert_eq!(state.elapsed, elapsed);
    }

    #[test]
    fn test_spike_overlap_crashes_once() {
        let mut state = spiked_run();
        let mut input = InputState::new();
        start(&mut state, &mut input);

        // Hang the rider upside down over the strip: the helmet dangles
        // below the tip line on the next detector pass
        state.rider.pos = Vec2::new(200.0, 440.0);
        state.rider.angle = PI;
        state.rider.vel = Vec2::ZERO;

        let mut crash_transitions = 0;
        for _ in 0..30 {
            let before = state.phase;
            tick(&mut state, &mut input, &view(), 0.0, DT);
            if before == Phase::Playing && state.phase == Phase::Crashed {
                crash_transitions += 1;
            }
        }
        assert_eq!(state.phase, Phase::Crashed);
        assert_eq!(crash_transitions, 1);
        assert!(!state.best.is_set());
    }

    #[test]
    fn test_restart_from_crash_resets_session_defaults() {
        let mut state = spiked_run();
        let mut input = InputState::new();
        start(&mut state, &mut input);

        state.rider.pos = Vec2::new(200.0, 454.0);
        tick(&mut state, &mut input, &view(), 0.0, DT);
        assert_eq!(state.phase, Phase::Crashed);
        let crash_elapsed = state.elapsed;
        assert!(crash_elapsed > 0.0);

        // Stale edges at restart time must not leak into the new run
        input.key_down("w");
        input.key_down("Enter");
        tick(&mut state, &mut input, &view(), 5000.0, DT);

        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.started_at, Some(5000.0));
        assert!(state.elapsed < crash_elapsed);
        // Rider back to spawn, at rest, upright (one frame of fall at most)
        assert!((state.rider.pos - state.terrain.start).length() < 2.0);
        assert!(state.rider.angle.abs() < 0.01);
        assert_eq!(state.camera.x, 0.0);
        assert!(!input.jump_pressed);
        assert!(!input.start_pressed);
    }

    #[test]
    fn test_oversized_and_invalid_deltas_are_tamed() {
        let mut state = flat_run();
        let mut input = InputState::new();
        start(&mut state, &mut input);
        let base = state.elapsed;

        // A five-second hitch advances the sim by at most one clamped step
        tick(&mut state, &mut input, &view(), 0.0, 5.0);
        assert!((state.elapsed - base - MAX_FRAME_DT).abs() < 1e-6);
        assert!(state.rider.pos.is_finite());

        let elapsed = state.elapsed;
        tick(&mut state, &mut input, &view(), 0.0, f32::NAN);
        assert_eq!(state.elapsed, elapsed);
        tick(&mut state, &mut input, &view(), 0.0, -1.0);
        assert_eq!(state.elapsed, elapsed);
    }

    #[test]
    fn test_zero_viewport_frame_is_harmless() {
        let mut state = flat_run();
        let mut input = InputState::new();
        start(&mut state, &mut input);

        let empty = Viewport::new(0.0, 0.0);
        for _ in 0..120 {
            tick(&mut state, &mut input, &empty, 0.0, DT);
        }
        // Sim keeps running, camera untouched, no spurious off-world crash
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.camera.x, 0.0);
    }
}
