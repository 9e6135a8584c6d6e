//! Game Module
//!
//! The whole run as plain data: sprites, the player, the obstacle wave and
//! the background layers, advanced one frame at a time by
//! `GameState::tick`. Nothing in here touches the window; drawing goes
//! through the `Canvas` seam in `renderer`.
//!
//! Frame order:
//! 1. Scroll background layers
//! 2. Ground check, gravity, jump
//! 3. Move obstacles, player and finish marker
//! 4. Step animations (player only when grounded)
//! 5. Collision (latched) and win check
//! 6. Emit draw commands for the outcome

pub mod rect;
pub mod anim;
pub mod tuning;
pub mod state;
pub mod renderer;

// Re-export main types
pub use tuning::{Tuning, TUNING_FILE};
pub use state::{GameState, SheetSizes, TextureSize};
pub use renderer::{MacroquadCanvas, TextureId, execute};
