//! Entity Registry
//!
//! Entities are plain records in a dense, capacity-bounded array. Ids are
//! assigned monotonically and never reused while an entity is live, so a
//! stored id stays valid until the entity is despawned. Removal swaps the
//! last live entity into the freed slot (O(1), order not preserved).
//!
//! Tags classify entities for the systems: physics only moves
//! PHYSICS-tagged entities, collision only tests against PLATFORM-tagged
//! ones, and input only drives PLAYER-tagged ones.

use std::ops::{BitOr, BitOrAssign};

use macroquad::prelude::{Color, Rect, Vec2};

use crate::config::MAX_ENTITIES;

/// A set of behavior flags for an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tags(u32);

impl Tags {
    pub const NONE: Tags = Tags(0);
    pub const PLATFORM: Tags = Tags(1);
    pub const PLAYER: Tags = Tags(1 << 1);
    pub const ENEMY: Tags = Tags(1 << 2);
    /// Affected by gravity and integration
    pub const PHYSICS: Tags = Tags(1 << 3);
    /// Participates in collision
    pub const SOLID: Tags = Tags(1 << 4);

    pub fn contains(self, other: Tags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_platform(self) -> bool {
        self.contains(Self::PLATFORM)
    }

    pub fn is_player(self) -> bool {
        self.contains(Self::PLAYER)
    }

    pub fn is_enemy(self) -> bool {
        self.contains(Self::ENEMY)
    }

    pub fn is_physics(self) -> bool {
        self.contains(Self::PHYSICS)
    }

    pub fn is_solid(self) -> bool {
        self.contains(Self::SOLID)
    }
}

impl BitOr for Tags {
    type Output = Tags;

    fn bitor(self, rhs: Tags) -> Tags {
        Tags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Tags {
    fn bitor_assign(&mut self, rhs: Tags) {
        self.0 |= rhs.0;
    }
}

/// A game object: a colored rectangle with velocity and tags.
///
/// `position` is the single source of truth for where the entity is;
/// the collision/render rectangle is derived from it via [`Entity::bounds`].
#[derive(Debug, Clone)]
pub struct Entity {
    /// Stable id, unique among live entities
    pub id: u32,
    /// Drawn by the renderer?
    pub active: bool,
    pub tags: Tags,
    /// Short display label
    pub name: String,
    /// Top-left corner in world space (y-down)
    pub position: Vec2,
    /// Rectangle dimensions
    pub size: Vec2,
    pub velocity: Vec2,
    /// Did the last physics step find a platform under this entity?
    pub on_ground: bool,
    pub color: Color,
}

impl Entity {
    /// The collision/render rectangle, derived from position and size.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }
}

/// Dense storage for all game entities.
///
/// Owned by the main loop and passed `&mut` to each system; nothing else
/// holds entity memory. Single-threaded by design.
pub struct Registry {
    entities: Vec<Entity>,
    next_id: u32,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(MAX_ENTITIES),
            next_id: 0,
        }
    }

    /// Create a new entity. Returns `None` when the registry is full.
    ///
    /// The entity starts active, with zero velocity and not on the ground.
    pub fn spawn(
        &mut self,
        name: &str,
        tags: Tags,
        position: Vec2,
        size: Vec2,
        color: Color,
    ) -> Option<u32> {
        if self.entities.len() >= MAX_ENTITIES {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.entities.push(Entity {
            id,
            active: true,
            tags,
            name: name.to_string(),
            position,
            size,
            velocity: Vec2::ZERO,
            on_ground: false,
            color,
        });
        Some(id)
    }

    /// Remove an entity by id, swapping the last live entity into its slot.
    /// No-op if the id is not found.
    pub fn despawn(&mut self, id: u32) {
        if let Some(slot) = self.entities.iter().position(|e| e.id == id) {
            self.entities.swap_remove(slot);
        }
    }

    /// Look up an entity by id (linear scan).
    pub fn get(&self, id: u32) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Remove all entities and restart id assignment from 0.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.next_id = 0;
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
