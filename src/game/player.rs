//=========================================================================
// Player
//=========================================================================
//
// The player's avatar: grid movement, firing, lives and the two
// animations that gate them.
//
// Structure:
//   root entity (position, active, visible)
//     ├─ idle sprite
//     ├─ leave-tile animation   (plays after every move)
//     └─ death animation        (plays after a hit, blocks input)
//   BulletPool                  (roots of their own; fly independently)
//
// Update order per frame:
//   leave anim → death anim | (movement → firing) → bullets
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::bullet::BulletPool;
use crate::core::animation::{AnimatedTexture, Animation, WrapMode};
use crate::core::config::{GameConfig, PlayerConfig, ScreenConfig};
use crate::core::entity::{Entity, EntityArena, EntityId, Space};
use crate::core::globals::GlobalContext;
use crate::core::input::action::GameAction;
use crate::core::render::{Asset, Renderer, Texture};

//=== Assets ==============================================================

const IDLE_SPRITE: &str = "megaman.png";
const LEAVE_SHEET: &str = "transition.png";
const DEATH_SHEET: &str = "mmDeath.png";
const FIRE_SFX: &str = "fire.wav";
const DEATH_SFX: &str = "death.wav";

//=== Player ==============================================================

#[derive(Debug, Clone)]
pub struct Player {
    root: EntityId,
    idle: Texture,
    leave: AnimatedTexture,
    death: AnimatedTexture,
    leave_moving: bool,
    animating: bool,
    lives: u32,
    score: u32,
    config: PlayerConfig,
    screen: ScreenConfig,
    bullets: BulletPool,
}

impl Player {
    /// Spawns the player at its start tile, inactive and hidden, with
    /// full lives and no score.
    pub fn spawn(arena: &mut EntityArena, config: &GameConfig) -> Self {
        let player = config.player;
        let start = config.screen.at(player.spawn.x, player.spawn.y);

        let root = arena.spawn(Entity::at(start).with_active(false).with_visible(false));
        let idle = Texture::spawn(arena, Asset::Image(IDLE_SPRITE), Some(root), Vec2::ZERO);
        let leave = AnimatedTexture::spawn(
            arena,
            Asset::Image(LEAVE_SHEET),
            Some(root),
            Vec2::ZERO,
            Animation::new(player.leave_frames, player.leave_duration, WrapMode::Once),
        );
        let death = AnimatedTexture::spawn(
            arena,
            Asset::Image(DEATH_SHEET),
            Some(root),
            Vec2::ZERO,
            Animation::new(player.death_frames, player.death_duration, WrapMode::Once),
        );

        let bullets = BulletPool::spawn(arena, &config.bullet);

        Self {
            root,
            idle,
            leave,
            death,
            leave_moving: true,
            animating: false,
            lives: player.starting_lives,
            score: 0,
            config: player,
            screen: config.screen,
            bullets,
        }
    }

    //--- State ------------------------------------------------------------

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// True while the death animation plays.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// True while the leave-tile animation plays.
    pub fn is_leave_moving(&self) -> bool {
        self.leave_moving
    }

    pub fn is_active(&self, arena: &EntityArena) -> bool {
        arena.is_active(self.root)
    }

    pub fn set_active(&self, arena: &mut EntityArena, active: bool) {
        arena.set_active(self.root, active);
    }

    pub fn is_visible(&self, arena: &EntityArena) -> bool {
        arena.is_visible(self.root)
    }

    pub fn set_visible(&self, arena: &mut EntityArena, visible: bool) {
        arena.set_visible(self.root, visible);
    }

    pub fn position(&self, arena: &EntityArena) -> Option<Vec2> {
        arena.world_position(self.root)
    }

    pub fn bullets(&self) -> &BulletPool {
        &self.bullets
    }

    pub fn entity(&self) -> EntityId {
        self.root
    }

    //--- Events -----------------------------------------------------------

    /// Takes one life and starts the death animation.
    pub fn was_hit(&mut self, context: &mut GlobalContext) {
        self.lives = self.lives.saturating_sub(1);
        self.death.reset();
        self.animating = true;
        context.audio.play_sfx(DEATH_SFX);
        debug!("Player hit, {} lives left", self.lives);
    }

    //--- Update -----------------------------------------------------------

    pub fn update(&mut self, context: &mut GlobalContext, arena: &mut EntityArena) {
        let dt = context.delta_time();

        if self.leave_moving {
            self.leave.update(dt);
            self.leave_moving = self.leave.is_animating();
        }

        if self.animating {
            self.death.update(dt);
            self.animating = self.death.is_animating();
        } else if self.is_active(arena) {
            self.handle_movement(context, arena);
            self.handle_firing(context, arena);
        }

        self.bullets.update(arena, dt, &self.screen);
    }

    fn handle_movement(&mut self, context: &GlobalContext, arena: &mut EntityArena) {
        let step = self.config.step;

        let horizontal = if context.is_action_pressed(GameAction::MoveRight) {
            Some(Vec2::new(step.x, 0.0))
        } else if context.is_action_pressed(GameAction::MoveLeft) {
            Some(Vec2::new(-step.x, 0.0))
        } else {
            None
        };

        let vertical = if context.is_action_pressed(GameAction::MoveUp) {
            Some(Vec2::new(0.0, -step.y))
        } else if context.is_action_pressed(GameAction::MoveDown) {
            Some(Vec2::new(0.0, step.y))
        } else {
            None
        };

        for delta in [horizontal, vertical].into_iter().flatten() {
            arena.translate(self.root, delta, Space::World);
            self.leave.reset();
            self.leave_moving = true;
        }

        let Some(pos) = arena.position(self.root, Space::Local) else {
            return;
        };
        let (min_x, max_x) = self.config.bounds_x;
        let (min_y, max_y) = self.config.bounds_y;
        let clamped = Vec2::new(pos.x.max(min_x).min(max_x), pos.y.max(min_y).min(max_y));

        if clamped != pos {
            arena.set_position(self.root, clamped, Space::Local);
        }
    }

    fn handle_firing(&mut self, context: &mut GlobalContext, arena: &mut EntityArena) {
        if !context.is_action_pressed(GameAction::Fire) {
            return;
        }
        let Some(origin) = self.position(arena) else {
            return;
        };

        if let Some(slot) = self.bullets.fire(arena, origin) {
            trace!("Fired bullet slot {}", slot);
            context.audio.play_sfx(FIRE_SFX);
        }
    }

    //--- Render -----------------------------------------------------------

    pub fn render(&self, arena: &EntityArena, renderer: &mut dyn Renderer) {
        if self.is_visible(arena) {
            if self.animating {
                self.death.render(arena, renderer);
            } else if self.leave_moving {
                self.leave.render(arena, renderer);
            } else {
                self.idle.render(arena, renderer);
            }
        }

        self.bullets.render(arena, renderer);
    }

    /// Frees the player's entities, bullets included.
    pub fn release(self, arena: &mut EntityArena) {
        self.bullets.release(arena);
        arena.despawn_recursive(self.root);
    }
}

//=== Tests ===============================================================
