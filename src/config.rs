//! Tuning constants for the demo.

// Screen
pub const SCREEN_WIDTH: f32 = 960.0;
pub const SCREEN_HEIGHT: f32 = 540.0;
pub const TARGET_FRAME_TIME: f64 = 1.0 / 60.0;

// Physics (pixels, y-down)
pub const GRAVITY: f32 = 900.0;
pub const PLAYER_SPEED: f32 = 260.0;
pub const JUMP_VELOCITY: f32 = -420.0;

/// Frame delta clamp; larger spikes would tunnel through platforms.
pub const MAX_FRAME_DT: f32 = 0.05;

// Entity system
pub const MAX_ENTITIES: usize = 256;

// Input
pub const STICK_DEADZONE: f32 = 0.2;
