//! Logical input intents
//!
//! Physical keys map onto a small set of intents; several keys can share an
//! intent. Edge flags arm only on the released→held transition, so browser
//! key-repeat never re-triggers them. The simulation consumes edges; held
//! booleans last as long as the key does.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputState {
    pub lean_left: bool,
    pub lean_right: bool,
    pub jump_held: bool,
    /// One-shot, set on jump released→held, consumed by the integrator
    pub jump_pressed: bool,
    /// One-shot, set on start released→held, consumed by the tick
    pub start_pressed: bool,
    start_held: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a physical key-down. Safe to call on auto-repeat; edges only
    /// arm on a genuine transition.
    pub fn key_down(&mut self, key: &str) {
        match key {
            "ArrowLeft" | "a" | "A" => self.lean_left = true,
            "ArrowRight" | "d" | "D" => self.lean_right = true,
            "ArrowUp" | "w" | "W" | " " => {
                if !self.jump_held {
                    self.jump_pressed = true;
                }
                self.jump_held = true;
            }
            _ => {}
        }
        // Space doubles as the start key on the intro/end screens; the tick
        // ignores the start edge while a run is live
        if matches!(key, "Enter" | "r" | "R" | " ") {
            if !self.start_held {
                self.start_pressed = true;
            }
            self.start_held = true;
        }
    }

    /// Feed a physical key-up
    pub fn key_up(&mut self, key: &str) {
        match key {
            "ArrowLeft" | "a" | "A" => self.lean_left = false,
            "ArrowRight" | "d" | "D" => self.lean_right = false,
            "ArrowUp" | "w" | "W" | " " => self.jump_held = false,
            _ => {}
        }
        if matches!(key, "Enter" | "r" | "R" | " ") {
            self.start_held = false;
        }
    }

    /// Net lean signal in {-1, 0, +1}; both or neither cancel out
    #[inline]
    pub fn lean_intent(&self) -> f32 {
        match (self.lean_left, self.lean_right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }

    /// Take the start edge, clearing it
    pub fn take_start(&mut self) -> bool {
        std::mem::take(&mut self.start_pressed)
    }

    /// Drop all one-shot flags (end of frame, and on restart)
    pub fn clear_edges(&mut self) {
        self.jump_pressed = false;
        self.start_pressed = false;
    }

    /// Back to session defaults (restart). Keys physically held across the
    /// restart re-arm themselves through auto-repeat.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lean_intent_cancels() {
        let mut input = InputState::new();
        assert_eq!(input.lean_intent(), 0.0);
        input.key_down("ArrowRight");
        assert_eq!(input.lean_intent(), 1.0);
        input.key_down("a");
        assert_eq!(input.lean_intent(), 0.0);
        input.key_up("ArrowRight");
        assert_eq!(input.lean_intent(), -1.0);
    }

    #[test]
    fn test_jump_edge_fires_once_per_press() {
        let mut input = InputState::new();
        input.key_down("ArrowUp");
        assert!(input.jump_pressed);
        input.jump_pressed = false; // integrator consumed it

        // Auto-repeat keydowns while held must not re-arm
        input.key_down("ArrowUp");
        input.key_down("ArrowUp");
        assert!(!input.jump_pressed);

        input.key_up("ArrowUp");
        input.key_down("ArrowUp");
        assert!(input.jump_pressed);
    }

    #[test]
    fn test_multiple_keys_map_to_same_intent() {
        let mut input = InputState::new();
        input.key_down("w");
        assert!(input.jump_held && input.jump_pressed);
        input.key_up("w");
        assert!(!input.jump_held);

        input.key_down("d");
        assert!(input.lean_right);
        input.key_up("d");
        input.key_down("ArrowRight");
        assert!(input.lean_right);
    }

    #[test]
    fn test_start_edge_and_take() {
        let mut input = InputState::new();
        input.key_down("Enter");
        assert!(input.take_start());
        assert!(!input.take_start());
        input.key_down("Enter"); // still held, no new edge
        assert!(!input.take_start());
        input.key_up("Enter");
        input.key_down("r");
        assert!(input.take_start());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut input = InputState::new();
        input.key_down("Escape");
        input.key_down("x");
        assert_eq!(input.lean_intent(), 0.0);
        assert!(!input.jump_held && !input.jump_pressed && !input.start_pressed);
    }
}
