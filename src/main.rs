//! FZJAM25 - 2D Platformer
//!
//! A player-controlled rectangle that moves, jumps, and lands on a static
//! ground platform. One logical tick per rendered frame: poll input,
//! apply it to the player, run the physics step, recompute the follow
//! camera, draw. All entity state lives in a fixed-capacity registry
//! owned by this loop.

mod config;
mod game;
mod input;

use macroquad::prelude::*;

use config::{MAX_FRAME_DT, SCREEN_HEIGHT, SCREEN_WIDTH, TARGET_FRAME_TIME};
use game::{physics, render, Registry, Tags};
use input::InputState;

fn window_conf() -> Conf {
    Conf {
        window_title: "FZJAM25 - 2D Platformer".to_string(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let mut registry = Registry::new();

    let Some(ground_id) = registry.spawn(
        "Ground",
        Tags::PLATFORM | Tags::SOLID,
        vec2(0.0, 460.0),
        vec2(960.0, 80.0),
        Color::from_rgba(70, 65, 90, 255),
    ) else {
        log::error!("entity registry full during setup");
        return;
    };
    let ground_top = registry.get(ground_id).map(|e| e.position.y).unwrap_or(460.0);

    let Some(player_id) = registry.spawn(
        "Player",
        Tags::PLAYER | Tags::PHYSICS | Tags::SOLID,
        vec2(100.0, ground_top - 60.0),
        vec2(40.0, 60.0),
        Color::from_rgba(220, 220, 255, 255),
    ) else {
        log::error!("entity registry full during setup");
        return;
    };
    if let Some(player) = registry.get_mut(player_id) {
        player.on_ground = true;
    }

    log::info!("starting with {} entities", registry.len());
    for entity in registry.iter() {
        log::debug!("entity #{}: {}", entity.id, entity.name);
    }

    let mut input = InputState::new();

    loop {
        #[cfg(not(target_arch = "wasm32"))]
        let frame_start = get_time();

        // Clamp large frame spikes so integration can't tunnel
        let dt = get_frame_time().min(MAX_FRAME_DT);

        input.poll();
        physics::apply_player_input(&mut registry, input.horizontal_axis(), input.jump_pressed());
        physics::physics_step(&mut registry, dt);

        let camera = registry
            .get(player_id)
            .map(|player| render::follow_camera(player.bounds()))
            .unwrap_or_default();
        render::draw_frame(&registry, &camera, &input.status_line());

        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        // Hold to the 60 FPS target: sleep for the bulk, spin for precision
        #[cfg(not(target_arch = "wasm32"))]
        {
            let spin_margin = 0.002; // 2ms
            while get_time() - frame_start + spin_margin < TARGET_FRAME_TIME {
                std::thread::sleep(std::time::Duration::from_millis(1));
            }
            while get_time() - frame_start < TARGET_FRAME_TIME {
                std::hint::spin_loop();
            }
        }

        next_frame().await;
    }

    registry.clear();
    log::info!("shut down");
}
