//=========================================================================
// Render Service
//=========================================================================
//
// Draw-command boundary between the game and whatever rasterizes it.
//
// The core never touches pixels. Every visible texture produces one
// DrawCommand per frame, already resolved to world space:
//
//   Texture { entity, asset }
//     └─ render(arena, renderer)
//          ├─ hidden in hierarchy? → skip
//          └─ renderer.draw(DrawCommand { asset, position, rotation, frame })
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::trace;

//=== Internal Dependencies ===============================================

use super::entity::{Entity, EntityArena, EntityId};

//=== Asset ===============================================================

/// What a texture draws.
#[derive(Debug, Clone, PartialEq)]
pub enum Asset {
    /// Sprite or sprite sheet, by file name.
    Image(&'static str),

    /// Rendered text.
    Text {
        text: String,
        font: &'static str,
        size: u16,
        color: [u8; 3],
    },
}

impl Asset {
    pub fn text(text: impl Into<String>, font: &'static str, size: u16, color: [u8; 3]) -> Self {
        Self::Text {
            text: text.into(),
            font,
            size,
            color,
        }
    }

    /// File name for images, the string itself for text.
    pub fn name(&self) -> &str {
        match self {
            Self::Image(name) => name,
            Self::Text { text, .. } => text,
        }
    }
}

//=== DrawCommand =========================================================

/// One resolved draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand<'a> {
    pub asset: &'a Asset,
    pub position: Vec2,
    pub rotation: f32,
    pub frame: u32,
}

//=== Renderer ============================================================

pub trait Renderer {
    fn draw(&mut self, command: DrawCommand<'_>);
}

/// Renderer that only traces what it would draw.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn draw(&mut self, command: DrawCommand<'_>) {
        trace!(
            target: "render",
            "draw {} frame {} at ({:.1}, {:.1}) rot {:.1}",
            command.asset.name(),
            command.frame,
            command.position.x,
            command.position.y,
            command.rotation
        );
    }
}

//=== Texture =============================================================

/// An asset attached to its own entity in the scene hierarchy.
#[derive(Debug, Clone)]
pub struct Texture {
    entity: EntityId,
    asset: Asset,
}

impl Texture {
    /// Spawns the texture entity at `offset` from `parent` (or at `offset`
    /// in world space for a root).
    pub fn spawn(
        arena: &mut EntityArena,
        asset: Asset,
        parent: Option<EntityId>,
        offset: Vec2,
    ) -> Self {
        let entity = match parent {
            Some(parent) => arena.spawn_child(parent, Entity::at(offset)),
            None => arena.spawn(Entity::at(offset)),
        };
        Self { entity, asset }
    }

    pub fn entity(&self) -> EntityId {
        self.entity
    }

    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    pub fn render(&self, arena: &EntityArena, renderer: &mut dyn Renderer) {
        self.render_frame(arena, renderer, 0);
    }

    pub fn render_frame(&self, arena: &EntityArena, renderer: &mut dyn Renderer, frame: u32) {
        if !arena.is_visible_in_hierarchy(self.entity) {
            return;
        }

        let (Some(position), Some(rotation)) = (
            arena.world_position(self.entity),
            arena.world_rotation(self.entity),
        ) else {
            return;
        };

        renderer.draw(DrawCommand {
            asset: &self.asset,
            position,
            rotation,
            frame,
        });
    }

    /// Frees the texture entity and anything parented to it.
    pub fn release(self, arena: &mut EntityArena) {
        arena.despawn_recursive(self.entity);
    }
}

//=== Tests ===============================================================
