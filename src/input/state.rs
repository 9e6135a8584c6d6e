//! Input state management
//!
//! Polls keyboard (macroquad) and gamepad (gilrs) once per frame and answers
//! action queries from that snapshot.

use macroquad::prelude::*;
use super::{button, Action, Gamepad};

/// What the update loop needs to know about this frame's input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Jump went down this frame (edge, not level)
    pub jump_pressed: bool,
}

/// Unified input state for keyboard and gamepad
pub struct InputState {
    gamepad: Gamepad,
}

impl InputState {
    pub fn new() -> Self {
        let gamepad = Gamepad::new();
        if gamepad.has_gamepad() {
            log::info!("Gamepad connected");
        }
        Self { gamepad }
    }

    /// Call once per frame before checking actions
    pub fn poll(&mut self) {
        self.gamepad.poll();
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        self.keyboard_pressed(action) || self.gamepad_pressed(action)
    }

    /// Snapshot for `GameState::tick`
    pub fn frame(&self) -> FrameInput {
        FrameInput {
            jump_pressed: self.action_pressed(Action::Jump),
        }
    }

    /// Window close or quit action
    ///
    /// Needs `prevent_quit()` at startup so the close request reaches us
    /// instead of tearing the window down.
    pub fn should_exit(&self) -> bool {
        is_quit_requested() || self.action_pressed(Action::Quit)
    }

    fn keyboard_pressed(&self, action: Action) -> bool {
        match action {
            Action::Jump => is_key_pressed(KeyCode::Space),
            Action::Quit => is_key_pressed(KeyCode::Escape),
        }
    }

    fn gamepad_pressed(&self, action: Action) -> bool {
        match action {
            Action::Jump => self.gamepad.is_button_pressed(button::A),
            Action::Quit => self.gamepad.is_button_pressed(button::START),
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
