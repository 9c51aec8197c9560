//=========================================================================
// Bullets
//=========================================================================
//
// Projectiles and the fixed-size pool the player fires from.
//
// A bullet is an entity turned 90° so its "up" points along +x. It
// flies straight ahead while active and reloads itself once it leaves
// the screen (plus a small margin).
//
// Pool:
//   fire() → first inactive slot in index order, or None when all are
//   in flight. Slots are created once and reused forever.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::config::{BulletConfig, ScreenConfig};
use crate::core::entity::{Entity, EntityArena, EntityId, Space};
use crate::core::render::{Asset, Renderer, Texture};

//=== Constants ===========================================================

/// Bullets a player can have in flight at once.
pub const MAX_BULLETS: usize = 2;

const BULLET_SPRITE: &str = "bullet.png";

//=== Bullet ==============================================================

#[derive(Debug, Clone)]
pub struct Bullet {
    entity: EntityId,
    texture: Texture,
    speed: f32,
    offscreen_buffer: f32,
}

impl Bullet {
    /// Spawns an inactive bullet.
    pub fn spawn(arena: &mut EntityArena, config: &BulletConfig) -> Self {
        let entity = arena.spawn(
            Entity::new()
                .with_rotation(config.rotation)
                .with_active(false),
        );
        let texture = Texture::spawn(arena, Asset::Image(BULLET_SPRITE), Some(entity), Vec2::ZERO);

        Self {
            entity,
            texture,
            speed: config.speed,
            offscreen_buffer: config.offscreen_buffer,
        }
    }

    pub fn entity(&self) -> EntityId {
        self.entity
    }

    /// Places the bullet at `position` (world space) and activates it.
    pub fn fire(&self, arena: &mut EntityArena, position: Vec2) {
        arena.set_position(self.entity, position, Space::World);
        arena.set_active(self.entity, true);
    }

    pub fn reload(&self, arena: &mut EntityArena) {
        arena.set_active(self.entity, false);
    }

    pub fn is_active(&self, arena: &EntityArena) -> bool {
        arena.is_active(self.entity)
    }

    pub fn position(&self, arena: &EntityArena) -> Option<Vec2> {
        arena.world_position(self.entity)
    }

    pub fn update(&self, arena: &mut EntityArena, dt: f32, screen: &ScreenConfig) {
        if !self.is_active(arena) {
            return;
        }

        arena.translate(self.entity, Vec2::new(0.0, -self.speed * dt), Space::Local);

        let Some(pos) = arena.world_position(self.entity) else {
            return;
        };
        let margin = self.offscreen_buffer;
        let offscreen = pos.x < -margin
            || pos.x > screen.width + margin
            || pos.y < -margin
            || pos.y > screen.height + margin;

        if offscreen {
            trace!("Bullet {} left the screen at ({:.1}, {:.1})", self.entity, pos.x, pos.y);
            self.reload(arena);
        }
    }

    pub fn render(&self, arena: &EntityArena, renderer: &mut dyn Renderer) {
        if self.is_active(arena) {
            self.texture.render(arena, renderer);
        }
    }

    pub fn release(self, arena: &mut EntityArena) {
        arena.despawn_recursive(self.entity);
    }
}

//=== BulletPool ==========================================================

#[derive(Debug, Clone)]
pub struct BulletPool {
    bullets: [Bullet; MAX_BULLETS],
}

impl BulletPool {
    pub fn spawn(arena: &mut EntityArena, config: &BulletConfig) -> Self {
        Self {
            bullets: std::array::from_fn(|_| Bullet::spawn(arena, config)),
        }
    }

    /// Fires the first inactive bullet from `position`.
    ///
    /// Returns the slot used, or `None` when every bullet is in flight.
    pub fn fire(&self, arena: &mut EntityArena, position: Vec2) -> Option<usize> {
        let slot = self.bullets.iter().position(|b| !b.is_active(arena))?;
        self.bullets[slot].fire(arena, position);
        Some(slot)
    }

    pub fn update(&self, arena: &mut EntityArena, dt: f32, screen: &ScreenConfig) {
        for bullet in &self.bullets {
            bullet.update(arena, dt, screen);
        }
    }

    pub fn render(&self, arena: &EntityArena, renderer: &mut dyn Renderer) {
        for bullet in &self.bullets {
            bullet.render(arena, renderer);
        }
    }

    pub fn active_count(&self, arena: &EntityArena) -> usize {
        self.bullets.iter().filter(|b| b.is_active(arena)).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bullet> {
        self.bullets.iter()
    }

    pub fn release(self, arena: &mut EntityArena) {
        for bullet in self.bullets {
            bullet.release(arena);
        }
    }
}

//=== Tests ===============================================================
