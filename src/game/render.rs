//! Frame drawing
//!
//! Every active entity is a filled rectangle in its assigned color, drawn
//! under a camera that follows the player horizontally. A single status
//! line with control hints is overlaid in screen space.

use macroquad::prelude::*;

use super::entity::Registry;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

const BACKGROUND: Color = Color::new(28.0 / 255.0, 27.0 / 255.0, 34.0 / 255.0, 1.0);
const STATUS_COLOR: Color = Color::new(245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0, 1.0);
const STATUS_FONT_SIZE: f32 = 18.0;

/// Camera tracking the player's horizontal center, vertically fixed at
/// half screen height, no rotation, unit zoom.
pub fn follow_camera(player_bounds: Rect) -> Camera2D {
    Camera2D {
        target: vec2(player_bounds.x + player_bounds.w * 0.5, SCREEN_HEIGHT * 0.5),
        // Unit zoom in a y-down world; Camera2D zoom is in NDC units
        zoom: vec2(2.0 / SCREEN_WIDTH, -2.0 / SCREEN_HEIGHT),
        ..Default::default()
    }
}

/// Draw one frame: world entities under the camera, then the status line
/// in screen space.
pub fn draw_frame(registry: &Registry, camera: &Camera2D, status: &str) {
    clear_background(BACKGROUND);

    set_camera(camera);
    for entity in registry.iter() {
        if !entity.active {
            continue;
        }
        let bounds = entity.bounds();
        draw_rectangle(bounds.x, bounds.y, bounds.w, bounds.h, entity.color);
    }
    set_default_camera();

    // draw_text positions the baseline; this puts the top of the line at y=10
    draw_text(
        status,
        10.0,
        10.0 + STATUS_FONT_SIZE * 0.75,
        STATUS_FONT_SIZE,
        STATUS_COLOR,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_tracks_player_center() {
        let camera = follow_camera(Rect::new(100.0, 400.0, 40.0, 60.0));
        assert_eq!(camera.target, vec2(120.0, SCREEN_HEIGHT * 0.5));
        assert_eq!(camera.rotation, 0.0);
        // y-down world: vertical zoom is negated
        assert!(camera.zoom.y < 0.0);
    }
}
