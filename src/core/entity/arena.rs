//=========================================================================
// Entity Arena
//=========================================================================
//
// Slot storage for scene entities with generational handles.
//
// Lifecycle:
//   spawn()  → slot filled, handle issued
//   despawn() → slot emptied, generation bumped, index recycled
//
// Every query takes a handle and returns Option / bool. Dead handles are
// never an error, only an absence.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::warn;

//=== Internal Dependencies ===============================================

use super::{rotate, Entity, EntityId, Space};

//=== Slot ================================================================

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    entity: Option<Entity>,
}

//=== EntityArena =========================================================

/// Owns every entity of one scene.
#[derive(Debug, Default)]
pub struct EntityArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl EntityArena {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Lifecycle ---------------------------------------------------------

    /// Stores `entity` and returns its handle.
    ///
    /// A parent set on `entity` is kept only if it is alive.
    pub fn spawn(&mut self, mut entity: Entity) -> EntityId {
        if let Some(parent) = entity.parent {
            if !self.contains(parent) {
                entity.parent = None;
            }
        }

        self.live += 1;

        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.entity = Some(entity);
            return EntityId::new(index, slot.generation);
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            entity: Some(entity),
        });
        EntityId::new(index, 0)
    }

    /// Spawns `entity` as a child of `parent`, keeping its local position
    /// as the offset from the parent.
    pub fn spawn_child(&mut self, parent: EntityId, mut entity: Entity) -> EntityId {
        entity.parent = Some(parent);
        self.spawn(entity)
    }

    /// Frees the entity. Children are not touched and become roots.
    pub fn despawn(&mut self, id: EntityId) -> bool {
        let Some(slot) = self.slots.get_mut(id.index() as usize) else {
            return false;
        };
        if slot.generation != id.generation() || slot.entity.is_none() {
            return false;
        }

        slot.entity = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index());
        self.live -= 1;
        true
    }

    /// Frees the entity and every entity below it.
    pub fn despawn_recursive(&mut self, id: EntityId) {
        let mut pending = vec![id];

        while let Some(current) = pending.pop() {
            if !self.contains(current) {
                continue;
            }
            pending.extend(self.children_of(current));
            self.despawn(current);
        }
    }

    //--- Access ------------------------------------------------------------

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.slots
            .get(id.index() as usize)
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.entity.as_ref())
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.slots
            .get_mut(id.index() as usize)
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.entity.as_mut())
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Live parent of `id`. Stale parent handles resolve to `None`.
    pub fn parent_of(&self, id: EntityId) -> Option<EntityId> {
        self.get(id)?.parent.filter(|parent| self.contains(*parent))
    }

    /// Live direct children of `id`.
    pub fn children_of(&self, id: EntityId) -> Vec<EntityId> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                let entity = slot.entity.as_ref()?;
                (entity.parent == Some(id)).then(|| EntityId::new(index as u32, slot.generation))
            })
            .collect()
    }

    //--- Hierarchy ---------------------------------------------------------

    /// Links `child` under `parent` (or detaches it with `None`).
    ///
    /// Returns false when either handle is dead or when the link would
    /// make an entity its own ancestor.
    pub fn set_parent(&mut self, child: EntityId, parent: Option<EntityId>) -> bool {
        if !self.contains(child) {
            return false;
        }

        if let Some(parent) = parent {
            if !self.contains(parent) {
                warn!("set_parent: parent {} is not alive", parent);
                return false;
            }

            let mut ancestor = Some(parent);
            while let Some(current) = ancestor {
                if current == child {
                    warn!("set_parent: linking {} under {} would form a cycle", child, parent);
                    return false;
                }
                ancestor = self.parent_of(current);
            }
        }

        if let Some(entity) = self.get_mut(child) {
            entity.parent = parent;
        }
        true
    }

    //--- Transform ---------------------------------------------------------

    /// Position of `id` in screen space.
    pub fn world_position(&self, id: EntityId) -> Option<Vec2> {
        let entity = self.get(id)?;
        let mut position = entity.local_position;
        let mut current = self.parent_of(id);

        while let Some(parent_id) = current {
            let Some(parent) = self.get(parent_id) else {
                break;
            };
            position = parent.local_position + rotate(position, parent.local_rotation);
            current = self.parent_of(parent_id);
        }

        Some(position)
    }

    /// Sum of rotations (degrees) from `id` up to its root.
    pub fn world_rotation(&self, id: EntityId) -> Option<f32> {
        let mut rotation = self.get(id)?.local_rotation;
        let mut current = self.parent_of(id);

        while let Some(parent_id) = current {
            let Some(parent) = self.get(parent_id) else {
                break;
            };
            rotation += parent.local_rotation;
            current = self.parent_of(parent_id);
        }

        Some(rotation)
    }

    pub fn position(&self, id: EntityId, space: Space) -> Option<Vec2> {
        match space {
            Space::Local => self.get(id).map(|e| e.local_position),
            Space::World => self.world_position(id),
        }
    }

    pub fn set_position(&mut self, id: EntityId, position: Vec2, space: Space) {
        let local = match space {
            Space::Local => position,
            Space::World => self.world_to_parent_frame(id, position, true),
        };

        if let Some(entity) = self.get_mut(id) {
            entity.local_position = local;
        }
    }

    /// Moves `id` by `delta`.
    ///
    /// `Local` deltas are expressed along the entity's own (world) heading;
    /// `World` deltas are along screen axes.
    pub fn translate(&mut self, id: EntityId, delta: Vec2, space: Space) {
        let Some(heading) = self.world_rotation(id) else {
            return;
        };

        let world_delta = match space {
            Space::Local => rotate(delta, heading),
            Space::World => delta,
        };
        let local_delta = self.world_to_parent_frame(id, world_delta, false);

        if let Some(entity) = self.get_mut(id) {
            entity.local_position += local_delta;
        }
    }

    /// Converts a world point (or direction) into the frame of the parent
    /// of `id`.
    fn world_to_parent_frame(&self, id: EntityId, value: Vec2, is_point: bool) -> Vec2 {
        let Some(parent) = self.parent_of(id) else {
            return value;
        };

        let origin = if is_point {
            self.world_position(parent).unwrap_or(Vec2::ZERO)
        } else {
            Vec2::ZERO
        };
        let parent_rotation = self.world_rotation(parent).unwrap_or(0.0);

        rotate(value - origin, -parent_rotation)
    }

    //--- Flags -------------------------------------------------------------

    pub fn is_active(&self, id: EntityId) -> bool {
        self.get(id).is_some_and(|e| e.active)
    }

    pub fn set_active(&mut self, id: EntityId, active: bool) {
        if let Some(entity) = self.get_mut(id) {
            entity.active = active;
        }
    }

    pub fn is_visible(&self, id: EntityId) -> bool {
        self.get(id).is_some_and(|e| e.visible)
    }

    pub fn set_visible(&mut self, id: EntityId, visible: bool) {
        if let Some(entity) = self.get_mut(id) {
            entity.visible = visible;
        }
    }

    /// True when `id` and every live ancestor are visible.
    pub fn is_visible_in_hierarchy(&self, id: EntityId) -> bool {
        let mut current = Some(id);

        while let Some(entity_id) = current {
            match self.get(entity_id) {
                Some(entity) if entity.visible => current = self.parent_of(entity_id),
                _ => return false,
            }
        }

        true
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=== Helpers ===

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    fn root_at(arena: &mut EntityArena, x: f32, y: f32) -> EntityId {
        arena.spawn(Entity::at(Vec2::new(x, y)))
    }

    //=== Lifecycle ===

    #[test]
    fn spawn_and_get() {
        let mut arena = EntityArena::new();
        let id = root_at(&mut arena, 1.0, 2.0);

        assert!(arena.contains(id));
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get(id).map(|e| e.local_position), Some(Vec2::new(1.0, 2.0)));
    }

    #[test]
    fn despawned_handle_is_stale_after_reuse() {
        let mut arena = EntityArena::new();
        let first = root_at(&mut arena, 0.0, 0.0);
        assert!(arena.despawn(first));

        let second = root_at(&mut arena, 5.0, 5.0);

        assert_eq!(first.index(), second.index(), "slot should be recycled");
        assert_ne!(first.generation(), second.generation());
        assert!(!arena.contains(first));
        assert!(arena.contains(second));
        assert!(!arena.despawn(first), "stale handle must not free the new entity");
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn despawn_recursive_frees_subtree_only() {
        let mut arena = EntityArena::new();
        let root = root_at(&mut arena, 0.0, 0.0);
        let child = arena.spawn_child(root, Entity::new());
        let grandchild = arena.spawn_child(child, Entity::new());
        let other = root_at(&mut arena, 0.0, 0.0);

        arena.despawn_recursive(root);

        assert!(!arena.contains(root));
        assert!(!arena.contains(child));
        assert!(!arena.contains(grandchild));
        assert!(arena.contains(other));
        assert_eq!(arena.len(), 1);
    }

    //=== Hierarchy ===

    #[test]
    fn child_of_despawned_parent_becomes_root() {
        let mut arena = EntityArena::new();
        let parent = root_at(&mut arena, 100.0, 100.0);
        let child = arena.spawn_child(parent, Entity::at(Vec2::new(10.0, 0.0)));

        assert!(approx(arena.world_position(child).unwrap(), Vec2::new(110.0, 100.0)));

        arena.despawn(parent);
        // Reuse the slot so the stale handle points at a live, unrelated entity.
        let _ = root_at(&mut arena, 500.0, 500.0);

        assert_eq!(arena.parent_of(child), None);
        assert!(approx(arena.world_position(child).unwrap(), Vec2::new(10.0, 0.0)));
    }

    #[test]
    fn set_parent_rejects_self_and_cycles() {
        let mut arena = EntityArena::new();
        let a = root_at(&mut arena, 0.0, 0.0);
        let b = arena.spawn_child(a, Entity::new());
        let c = arena.spawn_child(b, Entity::new());

        assert!(!arena.set_parent(a, Some(a)));
        assert!(!arena.set_parent(a, Some(c)));
        assert_eq!(arena.parent_of(a), None);

        assert!(arena.set_parent(c, None));
        assert_eq!(arena.parent_of(c), None);
    }

    #[test]
    fn world_position_composes_parent_rotation() {
        let mut arena = EntityArena::new();
        let parent = arena.spawn(Entity::at(Vec2::new(100.0, 50.0)).with_rotation(90.0));
        let child = arena.spawn_child(parent, Entity::at(Vec2::new(0.0, -10.0)));

        assert!(approx(arena.world_position(child).unwrap(), Vec2::new(110.0, 50.0)));
        assert_eq!(arena.world_rotation(child), Some(90.0));
    }

    #[test]
    fn visibility_follows_ancestors() {
        let mut arena = EntityArena::new();
        let root = root_at(&mut arena, 0.0, 0.0);
        let child = arena.spawn_child(root, Entity::new());

        assert!(arena.is_visible_in_hierarchy(child));

        arena.set_visible(root, false);
        assert!(!arena.is_visible_in_hierarchy(child));
        assert!(arena.is_visible(child));
    }

    //=== Transform ===

    #[test]
    fn translate_local_follows_heading() {
        let mut arena = EntityArena::new();
        let id = arena.spawn(Entity::at(Vec2::new(10.0, 10.0)).with_rotation(90.0));

        arena.translate(id, Vec2::new(0.0, -25.0), Space::Local);

        assert!(approx(arena.world_position(id).unwrap(), Vec2::new(35.0, 10.0)));
    }

    #[test]
    fn translate_world_ignores_heading() {
        let mut arena = EntityArena::new();
        let id = arena.spawn(Entity::at(Vec2::new(10.0, 10.0)).with_rotation(90.0));

        arena.translate(id, Vec2::new(0.0, -25.0), Space::World);

        assert!(approx(arena.world_position(id).unwrap(), Vec2::new(10.0, -15.0)));
    }

    #[test]
    fn set_world_position_under_rotated_parent() {
        let mut arena = EntityArena::new();
        let parent = arena.spawn(Entity::at(Vec2::new(100.0, 100.0)).with_rotation(90.0));
        let child = arena.spawn_child(parent, Entity::new());

        arena.set_position(child, Vec2::new(120.0, 100.0), Space::World);

        assert!(approx(arena.world_position(child).unwrap(), Vec2::new(120.0, 100.0)));
        assert!(approx(arena.position(child, Space::Local).unwrap(), Vec2::new(0.0, -20.0)));
    }

    #[test]
    fn dead_handle_queries_are_absent() {
        let mut arena = EntityArena::new();
        let id = root_at(&mut arena, 0.0, 0.0);
        arena.despawn(id);

        assert_eq!(arena.world_position(id), None);
        assert_eq!(arena.world_rotation(id), None);
        assert!(!arena.is_active(id));
        assert!(!arena.is_visible_in_hierarchy(id));

        arena.translate(id, Vec2::ONE, Space::World);
        arena.set_position(id, Vec2::ONE, Space::Local);
        assert!(!arena.set_parent(id, None));
    }
}
