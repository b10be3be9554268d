//! Run state and transitions
//!
//! One `GameState` owns the whole simulation: course, rider, camera, run
//! phase and timing. Transitions go through the handful of methods here;
//! all of them are idempotent, so a duplicate input edge or a frame that
//! satisfies two terminal conditions resolves to a single transition.

use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::rider::Rider;
use super::terrain::Terrain;
use crate::records::BestTime;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Title screen, waiting for the first start
    Intro,
    /// Live run, the only phase in which the integrator steps
    Playing,
    /// Crossed the finish line
    Won,
    /// Hit a hazard, buried, or fell off-world
    Crashed,
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: Phase,
    pub terrain: Terrain,
    pub rider: Rider,
    pub camera: Camera,
    /// Driver timestamp (ms) when the current run started
    pub started_at: Option<f64>,
    /// Run seconds, accumulated from the same clamped deltas the
    /// integrator consumes; frozen the instant the run ends
    pub elapsed: f32,
    /// Session-lifetime fastest completion
    pub best: BestTime,
    /// Ground-contact flag from the latest step (animation/diagnostics)
    pub on_ground: bool,
}

impl GameState {
    /// Fresh session on the given course, sitting at the title screen
    pub fn new(terrain: Terrain) -> Self {
        let rider = Rider::spawn(terrain.start);
        Self {
            phase: Phase::Intro,
            terrain,
            rider,
            camera: Camera::new(),
            started_at: None,
            elapsed: 0.0,
            best: BestTime::new(),
            on_ground: false,
        }
    }

    /// Start or restart a run: rider, camera and timer go back to session
    /// defaults wholesale. Valid from every phase; calling it while
    /// `Playing` is the caller's bug but still just restarts cleanly.
    pub fn start(&mut self, now_ms: f64) {
        self.rider = Rider::spawn(self.terrain.start);
        self.camera = Camera::new();
        self.started_at = Some(now_ms);
        self.elapsed = 0.0;
        self.on_ground = false;
        self.phase = Phase::Playing;
        log::info!("run started");
    }

    /// Terminal failure transition; no-op unless `Playing`
    pub fn handle_crash(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        self.phase = Phase::Crashed;
        log::info!(
            "crashed at {:.0}px after {:.2}s",
            self.rider.pos.x,
            self.elapsed
        );
    }

    /// Terminal success transition; no-op unless `Playing`. Records the
    /// run into the session best.
    pub fn handle_win(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        self.phase = Phase::Won;
        if self.best.record(self.elapsed) {
            log::info!("finished in {:.2}s - new best", self.elapsed);
        } else {
            log::info!("finished in {:.2}s", self.elapsed);
        }
    }

    /// Course completion in percent, clamped to [0, 100] and monotone in
    /// the rider's horizontal position
    pub fn progress_percent(&self) -> f32 {
        (self.rider.pos.x / self.terrain.finish_x * 100.0).clamp(0.0, 100.0)
    }

    /// Read-only view for the renderer; carries no references back into
    /// the simulation
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            rider: self.rider,
            camera_x: self.camera.x,
            elapsed: self.elapsed,
            progress: self.progress_percent(),
            speed: self.rider.speed(),
            best: self.best.get(),
            on_ground: self.on_ground,
        }
    }
}

/// Per-frame view handed to render/HUD consumers
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub rider: Rider,
    pub camera_x: f32,
    pub elapsed: f32,
    pub progress: f32,
    pub speed: f32,
    pub best: Option<f32>,
    pub on_ground: bool,
}
