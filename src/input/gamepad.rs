//! Platform gamepad layer
//!
//! Native: gilrs, polled once per frame into a plain snapshot.
//! WASM: no backend; compiles to an empty snapshot (keyboard still works).

/// Devices are polled by index; slots past this are ignored.
pub const MAX_GAMEPADS: usize = 4;

/// Per-frame snapshot of one connected gamepad.
#[derive(Debug, Clone, Default)]
pub struct PadState {
    /// Slot index, in device enumeration order
    pub index: usize,
    pub name: String,
    /// Left stick X, raw value in [-1, 1]
    pub stick_x: f32,
    /// South face button went down this frame
    pub south_pressed: bool,
}

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use super::{PadState, MAX_GAMEPADS};
    use gilrs::{Axis, Button, EventType, Gilrs};

    pub struct Gamepads {
        gilrs: Option<Gilrs>,
        pads: Vec<PadState>,
        /// South button state from the previous frame, per slot
        south_was_down: [bool; MAX_GAMEPADS],
    }

    impl Gamepads {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(gilrs) => Some(gilrs),
                Err(err) => {
                    log::warn!("gamepad backend unavailable, keyboard only: {err}");
                    None
                }
            };
            Self {
                gilrs,
                pads: Vec::new(),
                south_was_down: [false; MAX_GAMEPADS],
            }
        }

        /// Drain pending device events and snapshot pad state for this frame.
        pub fn poll(&mut self) {
            let Some(gilrs) = self.gilrs.as_mut() else {
                return;
            };

            while let Some(event) = gilrs.next_event() {
                match event.event {
                    EventType::Connected => {
                        log::info!("gamepad connected: {}", gilrs.gamepad(event.id).name());
                    }
                    EventType::Disconnected => {
                        log::info!("gamepad disconnected: {}", event.id);
                    }
                    _ => {}
                }
            }

            self.pads.clear();
            for (index, (_, pad)) in gilrs.gamepads().take(MAX_GAMEPADS).enumerate() {
                let south_down = pad.is_pressed(Button::South);
                self.pads.push(PadState {
                    index,
                    name: pad.name().to_string(),
                    stick_x: pad.value(Axis::LeftStickX),
                    south_pressed: south_down && !self.south_was_down[index],
                });
                self.south_was_down[index] = south_down;
            }
            for slot in self.pads.len()..MAX_GAMEPADS {
                self.south_was_down[slot] = false;
            }
        }

        /// Connected pads in index order.
        pub fn pads(&self) -> &[PadState] {
            &self.pads
        }
    }

    impl Default for Gamepads {
        fn default() -> Self {
            Self::new()
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod platform {
    use super::PadState;

    #[derive(Default)]
    pub struct Gamepads;

    impl Gamepads {
        pub fn new() -> Self {
            Self
        }

        pub fn poll(&mut self) {}

        pub fn pads(&self) -> &[PadState] {
            &[]
        }
    }
}

pub use platform::Gamepads;
