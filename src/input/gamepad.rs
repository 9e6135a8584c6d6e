//! Gamepad support
//!
//! Native: gilrs, first connected pad wins.
//! WASM: no gamepad backend, keyboard only.

// Button indices in the standard (Xbox-layout) mapping
pub mod button {
    pub const A: u32 = 0;           // ActionDown / South
    pub const START: u32 = 9;       // Start/Options
}

/// Buttons that went down between two polls
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn just_pressed(previous: u32, current: u32, button: u32) -> bool {
    let bit = 1 << button;
    current & bit != 0 && previous & bit == 0
}

// ============================================================================
// WASM Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    pub struct Gamepad;

    impl Gamepad {
        pub fn new() -> Self {
            Self
        }

        pub fn poll(&mut self) {}

        pub fn has_gamepad(&self) -> bool {
            false
        }

        pub fn is_button_pressed(&self, _button: u32) -> bool {
            false
        }
    }

    impl Default for Gamepad {
        fn default() -> Self {
            Self::new()
        }
    }
}

// ============================================================================
// Native Implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use gilrs::{Button as GilrsButton, Gilrs};

    pub struct Gamepad {
        /// None when the platform backend failed to start
        gilrs: Option<Gilrs>,
        buttons: u32,
        last_buttons: u32,
    }

    impl Gamepad {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(gilrs) => Some(gilrs),
                Err(e) => {
                    log::warn!("Gamepad support unavailable: {}", e);
                    None
                }
            };
            Self {
                gilrs,
                buttons: 0,
                last_buttons: 0,
            }
        }

        /// Drain gilrs events and snapshot the button state
        pub fn poll(&mut self) {
            let Some(gilrs) = self.gilrs.as_mut() else { return };
            while gilrs.next_event().is_some() {}

            self.last_buttons = self.buttons;
            self.buttons = self.button_mask();
        }

        pub fn has_gamepad(&self) -> bool {
            self.gilrs
                .as_ref()
                .is_some_and(|gilrs| gilrs.gamepads().next().is_some())
        }

        fn button_mask(&self) -> u32 {
            let Some(gilrs) = self.gilrs.as_ref() else { return 0 };
            let Some((_, gp)) = gilrs.gamepads().next() else { return 0 };
            let mut mask = 0u32;

            if gp.is_pressed(GilrsButton::South) { mask |= 1 << super::button::A; }
            if gp.is_pressed(GilrsButton::Start) { mask |= 1 << super::button::START; }

            mask
        }

        /// Went down since the previous poll
        pub fn is_button_pressed(&self, button: u32) -> bool {
            super::just_pressed(self.last_buttons, self.buttons, button)
        }
    }

    impl Default for Gamepad {
        fn default() -> Self {
            Self::new()
        }
    }
}

pub use platform::Gamepad;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_just_pressed_edges() {
        let a = 1 << button::A;
        assert!(just_pressed(0, a, button::A));
        // Held from the previous poll
        assert!(!just_pressed(a, a, button::A));
        assert!(!just_pressed(a, 0, button::A));
        assert!(!just_pressed(0, a, button::START));
    }
}
