//! Input handling with gamepad support
//!
//! Keyboard comes from macroquad, gamepads from gilrs (native only). Both are
//! folded into actions and sampled once per frame into a `FrameInput`.

mod actions;
mod gamepad;
mod state;

pub use actions::Action;
pub use gamepad::{Gamepad, button};
pub use state::{FrameInput, InputState};
