//=========================================================================
// Scene Entities
//=========================================================================
//
// Positioned nodes of the scene hierarchy.
//
// Architecture:
//   EntityArena
//     ├─ slots: Vec<Slot>     (generation + Option<Entity>)
//     └─ free:  Vec<u32>      (recycled slot indices)
//
//   EntityId { index, generation }  ──→  non-owning handle
//
// Parent links are handles, never references. A handle whose slot was
// freed (or freed and reused) fails the generation check and reads as
// absent, so a child of a despawned parent simply becomes a root.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use glam::Vec2;

//=== Module Declarations =================================================

mod arena;

//=== Public API ==========================================================

pub use arena::EntityArena;

//=== EntityId ============================================================

/// Generational handle to an entity stored in an [`EntityArena`].
///
/// Handles are `Copy` and never keep an entity alive. Owning components
/// hold the handles they spawned and release them explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId {
    index: u32,
    generation: u32,
}

impl EntityId {
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index inside the arena.
    #[inline]
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Generation of the slot when this handle was issued.
    #[inline]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({}v{})", self.index, self.generation)
    }
}

//=== Space ===============================================================

/// Coordinate space for position queries and translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Space {
    /// Relative to the parent (or the world, for roots).
    Local,

    /// Screen space after composing the whole parent chain.
    #[default]
    World,
}

//=== Entity ==============================================================

/// A positioned node with an optional parent.
///
/// `local_position` and `local_rotation` are expressed in the parent's
/// frame. Rotation is in degrees, clockwise on a y-down screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub local_position: Vec2,
    pub local_rotation: f32,
    pub active: bool,
    pub visible: bool,
    pub(crate) parent: Option<EntityId>,
}

impl Entity {
    /// Creates an active, visible root entity at the origin.
    pub fn new() -> Self {
        Self {
            local_position: Vec2::ZERO,
            local_rotation: 0.0,
            active: true,
            visible: true,
            parent: None,
        }
    }

    /// Creates an active, visible root entity at `position`.
    pub fn at(position: Vec2) -> Self {
        Self {
            local_position: position,
            ..Self::new()
        }
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.local_rotation = degrees;
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Parent handle as stored. May be stale; resolve through the arena.
    pub fn parent(&self) -> Option<EntityId> {
        self.parent
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::new()
    }
}

//=== Math Helpers ========================================================

/// Rotates `v` by `degrees` (same convention as the entity rotation).
#[inline]
pub(crate) fn rotate(v: Vec2, degrees: f32) -> Vec2 {
    if degrees == 0.0 {
        return v;
    }
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

//=== Tests ===============================================================
