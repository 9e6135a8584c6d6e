//! Game action definitions

/// Everything the player can ask of the game
///
/// Keyboard / gamepad:
/// - Space / A (South) = Jump
/// - Escape / Start = Quit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Jump,
    Quit,
}
