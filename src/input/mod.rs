//! Input Mapper
//!
//! Combines keyboard and gamepad into two per-frame values: a horizontal
//! movement axis in [-1, 1] and an edge-triggered jump. Devices are
//! re-sampled every frame with no buffering beyond key/button edge
//! detection.
//!
//! Axis rules: Right/D and Left/A sum (opposite keys cancel); the first
//! gamepad in index order whose left-stick X is past the deadzone
//! overrides the keyboard with its raw stick value.

mod gamepad;

use macroquad::prelude::*;

use crate::config::STICK_DEADZONE;
use gamepad::Gamepads;

pub struct InputState {
    gamepads: Gamepads,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            gamepads: Gamepads::new(),
        }
    }

    /// Call once per frame before reading axis/jump state.
    pub fn poll(&mut self) {
        self.gamepads.poll();
    }

    /// Horizontal movement axis in [-1, 1].
    pub fn horizontal_axis(&self) -> f32 {
        let keyboard = keyboard_axis(
            is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
            is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
        );
        resolve_axis(keyboard, self.gamepads.pads().iter().map(|pad| pad.stick_x))
    }

    /// True on the frame a jump input goes down: Space/Up/W, or the south
    /// face button on any connected gamepad.
    pub fn jump_pressed(&self) -> bool {
        if is_key_pressed(KeyCode::Space)
            || is_key_pressed(KeyCode::Up)
            || is_key_pressed(KeyCode::W)
        {
            return true;
        }
        self.gamepads.pads().iter().any(|pad| pad.south_pressed)
    }

    /// One-line control hint for the debug overlay.
    pub fn status_line(&self) -> String {
        match self.gamepads.pads().first() {
            Some(pad) => format!(
                "Gamepad {}: {} | Move: A/D or Left Stick | Jump: Space/W or A button",
                pad.index, pad.name
            ),
            None => {
                "No gamepad detected | Move: A/D | Jump: Space/W (Press any gamepad button to connect)"
                    .to_string()
            }
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn keyboard_axis(right_down: bool, left_down: bool) -> f32 {
    let mut axis = 0.0;
    if right_down {
        axis += 1.0;
    }
    if left_down {
        axis -= 1.0;
    }
    axis
}

/// The first stick past the deadzone overrides the keyboard with its raw
/// value; otherwise the keyboard axis stands.
fn resolve_axis(keyboard: f32, sticks: impl IntoIterator<Item = f32>) -> f32 {
    for stick_x in sticks {
        if stick_x.abs() > STICK_DEADZONE {
            return stick_x;
        }
    }
    keyboard
}
