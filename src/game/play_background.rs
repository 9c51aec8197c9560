//=========================================================================
// Play Background
//=========================================================================
//
// Stage backdrop and HUD: animated background, status panel, life icons
// and the stage flags.
//
// Flags are dealt out one per interval after `set_level(n)`, largest
// first (3, then 2, then 1) until their values sum to n.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::animation::{AnimatedTexture, Animation, WrapMode};
use crate::core::config::GameConfig;
use crate::core::entity::{Entity, EntityArena, EntityId};
use crate::core::globals::GlobalContext;
use crate::core::render::{Asset, Renderer, Texture};

//=== Assets ==============================================================

const BACKGROUND_SHEET: &str = "bgAnimated.png";
const STAGE_SPRITE: &str = "Stage.png";
const STATUS_SPRITE: &str = "Status.png";
const LIFE_SPRITE: &str = "Life.png";
const FLAG_SFX: &str = "StageSE.wav";

const BACKGROUND_FRAMES: u32 = 10;
const BACKGROUND_DURATION: f32 = 1.25;

/// Life icons on the HUD. Extra lives are not drawn.
const MAX_LIFE_ICONS: usize = 2;

//=== PlayBackground ======================================================

#[derive(Debug, Clone)]
pub struct PlayBackground {
    root: EntityId,
    backdrop: AnimatedTexture,
    stage: Texture,
    status: Texture,

    life_icons: Vec<Texture>,
    lives: u32,

    flags_root: EntityId,
    flags: Vec<Texture>,
    remaining: u32,
    flag_offset: f32,
    flag_timer: f32,
    flag_interval: f32,
    flag_width: f32,
}

impl PlayBackground {
    pub fn spawn(arena: &mut EntityArena, config: &GameConfig) -> Self {
        let screen = config.screen;
        let root = arena.spawn(Entity::new());

        let backdrop = AnimatedTexture::spawn(
            arena,
            Asset::Image(BACKGROUND_SHEET),
            Some(root),
            screen.at(0.5, 0.5),
            Animation::new(BACKGROUND_FRAMES, BACKGROUND_DURATION, WrapMode::Loop),
        );
        let stage = Texture::spawn(arena, Asset::Image(STAGE_SPRITE), Some(root), Vec2::new(480.0, 450.0));
        let status = Texture::spawn(arena, Asset::Image(STATUS_SPRITE), Some(root), Vec2::new(250.0, 75.0));

        let lives_root = arena.spawn_child(root, Entity::at(Vec2::new(110.0, 90.0)));
        let life_icons = (0..MAX_LIFE_ICONS)
            .map(|i| {
                let offset = Vec2::new(130.0 * (i % 3) as f32, 70.0 * (i / 3) as f32);
                Texture::spawn(arena, Asset::Image(LIFE_SPRITE), Some(lives_root), offset)
            })
            .collect();

        let flags_root = arena.spawn_child(root, Entity::at(Vec2::new(350.0, 100.0)));

        Self {
            root,
            backdrop,
            stage,
            status,
            life_icons,
            lives: 0,
            flags_root,
            flags: Vec::new(),
            remaining: 0,
            flag_offset: 0.0,
            flag_timer: 0.0,
            flag_interval: config.play.flag_interval,
            flag_width: config.play.flag_width,
        }
    }

    //--- HUD State --------------------------------------------------------

    pub fn set_lives(&mut self, lives: u32) {
        self.lives = lives;
    }

    /// Life icons that will be drawn.
    pub fn lives_shown(&self) -> usize {
        (self.lives as usize).min(self.life_icons.len())
    }

    /// Clears the flags and starts dealing out flags for `level`.
    pub fn set_level(&mut self, arena: &mut EntityArena, level: u32) {
        for flag in self.flags.drain(..) {
            flag.release(arena);
        }
        self.remaining = level;
        self.flag_offset = 0.0;
        self.flag_timer = 0.0;
    }

    pub fn flag_count(&self) -> usize {
        self.flags.len()
    }

    /// Sprite names of the flags shown so far, in order.
    pub fn flag_names(&self) -> Vec<&str> {
        self.flags.iter().map(|f| f.asset().name()).collect()
    }

    //--- Update -----------------------------------------------------------

    pub fn update(&mut self, context: &mut GlobalContext, arena: &mut EntityArena) {
        let dt = context.delta_time();
        self.backdrop.update(dt);

        if self.remaining == 0 {
            return;
        }

        self.flag_timer += dt;
        if self.flag_timer >= self.flag_interval {
            self.add_next_flag(context, arena);
            self.flag_timer = 0.0;
        }
    }

    fn add_next_flag(&mut self, context: &mut GlobalContext, arena: &mut EntityArena) {
        let (sprite, value) = match self.remaining {
            0 => return,
            1 => ("1.png", 1),
            2 => ("2.png", 2),
            _ => ("3.png", 3),
        };

        if !self.flags.is_empty() {
            self.flag_offset += self.flag_width * 0.5;
        }
        let flag = Texture::spawn(
            arena,
            Asset::Image(sprite),
            Some(self.flags_root),
            Vec2::new(self.flag_offset, 0.0),
        );
        self.flag_offset += self.flag_width * 0.5;

        self.flags.push(flag);
        self.remaining -= value;
        context.audio.play_sfx(FLAG_SFX);
        trace!("Stage flag {} placed, {} left", sprite, self.remaining);
    }

    //--- Render -----------------------------------------------------------

    pub fn render(&self, arena: &EntityArena, renderer: &mut dyn Renderer) {
        self.backdrop.render(arena, renderer);
        self.stage.render(arena, renderer);
        self.status.render(arena, renderer);

        for icon in self.life_icons.iter().take(self.lives_shown()) {
            icon.render(arena, renderer);
        }
        for flag in &self.flags {
            flag.render(arena, renderer);
        }
    }

    pub fn release(self, arena: &mut EntityArena) {
        arena.despawn_recursive(self.root);
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::RecordingRenderer;
    use crate::game::test_support::{frame, recording_context};

    fn setup() -> (GlobalContext, crate::core::testing::AudioProbe, EntityArena, PlayBackground) {
        let (ctx, probe) = recording_context();
        let mut arena = EntityArena::new();
        let background = PlayBackground::spawn(&mut arena, &ctx.config);
        (ctx, probe, arena, background)
    }

    #[test]
    fn flags_appear_one_per_interval() {
        let (mut ctx, probe, mut arena, mut bg) = setup();
        bg.set_level(&mut arena, 1);

        frame(&mut ctx, 0.25, &[]);
        bg.update(&mut ctx, &mut arena);
        assert_eq!(bg.flag_count(), 0);

        frame(&mut ctx, 0.25, &[]);
        bg.update(&mut ctx, &mut arena);
        assert_eq!(bg.flag_names(), vec!["1.png"]);
        assert_eq!(probe.sfx_count(FLAG_SFX), 1);

        for _ in 0..10 {
            bg.update(&mut ctx, &mut arena);
        }
        assert_eq!(bg.flag_count(), 1);
    }

    #[test]
    fn flags_are_dealt_largest_first() {
        let (mut ctx, _probe, mut arena, mut bg) = setup();
        bg.set_level(&mut arena, 6);

        for _ in 0..10 {
            frame(&mut ctx, 0.5, &[]);
            bg.update(&mut ctx, &mut arena);
        }

        assert_eq!(bg.flag_names(), vec!["3.png", "3.png"]);

        bg.set_level(&mut arena, 4);
        for _ in 0..10 {
            bg.update(&mut ctx, &mut arena);
        }
        assert_eq!(bg.flag_names(), vec!["3.png", "1.png"]);
    }

    #[test]
    fn set_level_clears_previous_flags() {
        let (mut ctx, _probe, mut arena, mut bg) = setup();
        bg.set_level(&mut arena, 2);
        frame(&mut ctx, 0.5, &[]);
        bg.update(&mut ctx, &mut arena);
        let populated = arena.len();

        bg.set_level(&mut arena, 0);

        assert_eq!(bg.flag_count(), 0);
        assert_eq!(arena.len(), populated - 1);
    }

    #[test]
    fn life_icons_follow_lives_up_to_two() {
        let (_ctx, _probe, arena, mut bg) = setup();
        let mut renderer = RecordingRenderer::default();

        bg.set_lives(1);
        bg.render(&arena, &mut renderer);
        assert_eq!(renderer.count(LIFE_SPRITE), 1);

        renderer.clear();
        bg.set_lives(5);
        bg.render(&arena, &mut renderer);
        assert_eq!(renderer.count(LIFE_SPRITE), 2);

        renderer.clear();
        bg.set_lives(0);
        bg.render(&arena, &mut renderer);
        assert_eq!(renderer.count(LIFE_SPRITE), 0);
        assert!(renderer.contains(STATUS_SPRITE));
    }

    #[test]
    fn release_frees_everything() {
        let (mut ctx, _probe, mut arena, mut bg) = setup();
        bg.set_level(&mut arena, 3);
        frame(&mut ctx, 0.5, &[]);
        bg.update(&mut ctx, &mut arena);

        bg.release(&mut arena);

        assert!(arena.is_empty());
    }
}
