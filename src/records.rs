//! Session best-time record
//!
//! Lives for the lifetime of the process only; nothing is persisted. The
//! record is a monotonic minimum over completed runs, so it can improve or
//! hold, never regress.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BestTime {
    best: Option<f32>,
}

impl BestTime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a completed run time. Returns true when it set a new record
    /// (a first completion always does).
    pub fn record(&mut self, elapsed: f32) -> bool {
        match self.best {
            Some(best) if best <= elapsed => false,
            _ => {
                self.best = Some(elapsed);
                true
            }
        }
    }

    pub fn get(&self) -> Option<f32> {
        self.best
    }

    pub fn is_set(&self) -> bool {
        self.best.is_some()
    }
}
