//! Game core: the entity registry and the per-frame simulation systems.
//!
//! All entity state lives in a single `Registry` owned by the main loop
//! and passed by reference to each system. Per frame:
//! 1. Input is resolved into player velocity (`physics::apply_player_input`)
//! 2. Gravity, integration, and platform collision run (`physics::physics_step`)
//! 3. The follow camera and the frame are drawn (`render`)

// Allow unused code - despawn and some tag predicates are exercised only by tests
#![allow(dead_code)]

pub mod entity;
pub mod physics;
pub mod render;

pub use entity::{Entity, Registry, Tags};
