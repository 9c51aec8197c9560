//=========================================================================
// Sprite-Sheet Animation
//=========================================================================
//
// Frame timing for sprite sheets, plus a textured wrapper that draws the
// current frame.
//
// Timing:
//   time_per_frame = duration / frame_count
//   frame          = floor(timer / time_per_frame)
//
//   Once → stops on the last frame, is_animating() turns false
//   Loop → timer wraps, never finishes
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::entity::{EntityArena, EntityId};
use super::render::{Asset, Renderer, Texture};

//=== WrapMode ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    Once,
    Loop,
}

//=== Animation ===========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    frame_count: u32,
    duration: f32,
    time_per_frame: f32,
    timer: f32,
    wrap: WrapMode,
    done: bool,
}

impl Animation {
    /// `frame_count` is raised to 1 and a non-positive `duration` makes
    /// the animation finish on its first update.
    pub fn new(frame_count: u32, duration: f32, wrap: WrapMode) -> Self {
        let frame_count = frame_count.max(1);
        let duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 };

        Self {
            frame_count,
            duration,
            time_per_frame: duration / frame_count as f32,
            timer: 0.0,
            wrap,
            done: false,
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.done {
            return;
        }

        self.timer += dt.max(0.0);

        if self.timer >= self.duration {
            match self.wrap {
                WrapMode::Loop if self.duration > 0.0 => self.timer %= self.duration,
                _ => {
                    self.done = true;
                    self.timer = (self.duration - self.time_per_frame).max(0.0);
                }
            }
        }
    }

    /// Rewinds to the first frame and resumes playback.
    pub fn reset(&mut self) {
        self.timer = 0.0;
        self.done = false;
    }

    pub fn is_animating(&self) -> bool {
        !self.done
    }

    pub fn current_frame(&self) -> u32 {
        if self.done || self.time_per_frame <= 0.0 {
            return self.frame_count - 1;
        }
        ((self.timer / self.time_per_frame) as u32).min(self.frame_count - 1)
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }
}

//=== AnimatedTexture =====================================================

/// A [`Texture`] drawn at the current frame of an [`Animation`].
#[derive(Debug, Clone)]
pub struct AnimatedTexture {
    texture: Texture,
    animation: Animation,
}

impl AnimatedTexture {
    pub fn spawn(
        arena: &mut EntityArena,
        asset: Asset,
        parent: Option<EntityId>,
        offset: Vec2,
        animation: Animation,
    ) -> Self {
        Self {
            texture: Texture::spawn(arena, asset, parent, offset),
            animation,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.animation.update(dt);
    }

    pub fn reset(&mut self) {
        self.animation.reset();
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn entity(&self) -> EntityId {
        self.texture.entity()
    }

    pub fn render(&self, arena: &EntityArena, renderer: &mut dyn Renderer) {
        self.texture
            .render_frame(arena, renderer, self.animation.current_frame());
    }

    pub fn release(self, arena: &mut EntityArena) {
        self.texture.release(arena);
    }
}

//=== Tests ===============================================================
