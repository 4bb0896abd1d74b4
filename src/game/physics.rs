//! Physics Step
//!
//! Gravity, velocity integration, and platform collision for every
//! PHYSICS-tagged entity. Horizontal movement and jump impulses are
//! applied from resolved input by [`apply_player_input`]; the step itself
//! only handles gravity and vertical collision resolution.
//!
//! Callers clamp the frame delta (see `config::MAX_FRAME_DT`) before
//! passing it in.

use macroquad::prelude::Rect;

use super::entity::Registry;
use crate::config::{GRAVITY, JUMP_VELOCITY, PLAYER_SPEED};

/// Write resolved input onto every player entity: horizontal velocity from
/// the axis, a jump impulse if the entity has ground under it.
pub fn apply_player_input(registry: &mut Registry, axis: f32, jump_pressed: bool) {
    for entity in registry.iter_mut() {
        if !entity.tags.is_player() {
            continue;
        }

        entity.velocity.x = axis * PLAYER_SPEED;

        if jump_pressed && entity.on_ground {
            entity.velocity.y = JUMP_VELOCITY;
            entity.on_ground = false;
        }
    }
}

/// Advance every PHYSICS-tagged entity by `dt` seconds and resolve
/// collisions against PLATFORM-tagged entities.
///
/// On overlap the entity is snapped on top of the platform and its
/// vertical velocity zeroed. Platforms are tested in registry order; when
/// several overlap at once the last one wins.
pub fn physics_step(registry: &mut Registry, dt: f32) {
    // Platform rects snapshotted up front so the mutable pass below can't
    // observe platforms mid-move.
    let platforms: Vec<(u32, Rect)> = registry
        .iter()
        .filter(|e| e.tags.is_platform())
        .map(|e| (e.id, e.bounds()))
        .collect();

    for entity in registry.iter_mut() {
        if !entity.tags.is_physics() {
            continue;
        }

        entity.velocity.y += GRAVITY * dt;
        entity.position += entity.velocity * dt;
        entity.on_ground = false;

        for &(platform_id, platform) in &platforms {
            if platform_id == entity.id {
                continue;
            }
            if entity.bounds().overlaps(&platform) {
                // Snap to the platform top
                entity.position.y = platform.y - entity.size.y;
                entity.velocity.y = 0.0;
                entity.on_ground = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entity::Tags;
    use macroquad::prelude::{vec2, Vec2, WHITE};

    const DT: f32 = 1.0 / 60.0;
    const EPS: f32 = 1e-4;

    fn spawn_ground(registry: &mut Registry) -> u32 {
        registry
            .spawn("Ground", Tags::PLATFORM | Tags::SOLID, vec2(0.0, 460.0), vec2(960.0, 80.0), WHITE)
            .unwrap()
    }

    fn spawn_player(registry: &mut Registry, position: Vec2) -> u32 {
        registry
            .spawn("Player", Tags::PLAYER | Tags::PHYSICS | Tags::SOLID, position, vec2(40.0, 60.0), WHITE)
            .unwrap()
    }

    #[test]
    fn test_gravity_accelerates_free_fall() {
        let mut registry = Registry::new();
        let player = spawn_player(&mut registry, vec2(100.0, 0.0));

        physics_step(&mut registry, DT);

        let entity = registry.get(player).unwrap();
        assert!((entity.velocity.y - GRAVITY * DT).abs() < EPS);
        assert!((entity.position.y - GRAVITY * DT * DT).abs() < EPS);
        assert!(!entity.on_ground);
    }

    #[test]
    fn test_non_physics_entities_do_not_move() {
        let mut registry = Registry::new();
        let ground = spawn_ground(&mut registry);

        physics_step(&mut registry, DT);

        let entity = registry.get(ground).unwrap();
        assert_eq!(entity.position, vec2(0.0, 460.0));
        assert_eq!(entity.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_collision_snaps_to_platform_top() {
        let mut registry = Registry::new();
        spawn_ground(&mut registry);
        // Already intersecting the ground; the step must resolve it
        let player = spawn_player(&mut registry, vec2(100.0, 420.0));

        physics_step(&mut registry, DT);

        let entity = registry.get(player).unwrap();
        assert!((entity.position.y - 400.0).abs() < EPS);
        assert_eq!(entity.velocity.y, 0.0);
        assert!(entity.on_ground);
    }

    #[test]
    fn test_last_overlapping_platform_wins() {
        let mut registry = Registry::new();
        registry
            .spawn("PlatformA", Tags::PLATFORM, vec2(0.0, 460.0), vec2(960.0, 80.0), WHITE)
            .unwrap();
        registry
            .spawn("PlatformB", Tags::PLATFORM, vec2(0.0, 450.0), vec2(960.0, 80.0), WHITE)
            .unwrap();
        let player = spawn_player(&mut registry, vec2(100.0, 420.0));

        physics_step(&mut registry, DT);

        // Both platforms overlap; the later one in registry order decides
        let entity = registry.get(player).unwrap();
        assert!((entity.position.y - (450.0 - 60.0)).abs() < EPS);
        assert!(entity.on_ground);
    }

    #[test]
    fn test_resting_player_stays_on_ground() {
        let mut registry = Registry::new();
        spawn_ground(&mut registry);
        let player = spawn_player(&mut registry, vec2(100.0, 400.0));
        registry.get_mut(player).unwrap().on_ground = true;

        // One frame with no input: gravity pulls into the ground, the snap
        // restores rest within the same step
        apply_player_input(&mut registry, 0.0, false);
        physics_step(&mut registry, DT);

        let entity = registry.get(player).unwrap();
        assert!((entity.position.y - 400.0).abs() < EPS);
        assert_eq!(entity.velocity.y, 0.0);
        assert!(entity.on_ground);
    }

    #[test]
    fn test_axis_drives_horizontal_velocity() {
        let mut registry = Registry::new();
        let player = spawn_player(&mut registry, vec2(100.0, 400.0));

        apply_player_input(&mut registry, -1.0, false);
        let entity = registry.get(player).unwrap();
        assert!((entity.velocity.x + PLAYER_SPEED).abs() < EPS);

        apply_player_input(&mut registry, 0.5, false);
        let entity = registry.get(player).unwrap();
        assert!((entity.velocity.x - 0.5 * PLAYER_SPEED).abs() < EPS);
    }

    #[test]
    fn test_jump_from_ground() {
        let mut registry = Registry::new();
        let player = spawn_player(&mut registry, vec2(100.0, 400.0));
        registry.get_mut(player).unwrap().on_ground = true;

        apply_player_input(&mut registry, 0.0, true);

        let entity = registry.get(player).unwrap();
        assert_eq!(entity.velocity.y, JUMP_VELOCITY);
        assert!(!entity.on_ground);
    }

    #[test]
    fn test_jump_requires_ground() {
        let mut registry = Registry::new();
        let player = spawn_player(&mut registry, vec2(100.0, 200.0));

        apply_player_input(&mut registry, 0.0, true);

        let entity = registry.get(player).unwrap();
        assert_eq!(entity.velocity.y, 0.0);
    }
}
