//=========================================================================
// Start Screen
//=========================================================================
//
// Title screen: logo, the two menu entries, a blinking cursor and the
// copyright line.
//
// Hierarchy:
// ```text
// root (slides in from below)
//   ├─ logo / animated logo
//   ├─ menu
//   │    ├─ NEW GAME
//   │    ├─ CONTROLS
//   │    └─ cursor      (start + spacing × selection index)
//   └─ bottom bar
//        └─ rights
// ```
//
// The slide restarts on every entry and is cut short by any menu
// selection.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::trace;

//=== Internal Dependencies ===============================================

use super::screen_manager::MenuMode;
use super::{FONT, TEXT_COLOR};
use crate::core::animation::{AnimatedTexture, Animation, WrapMode};
use crate::core::config::{GameConfig, TitleConfig};
use crate::core::entity::{Entity, EntityArena, EntityId, Space};
use crate::core::globals::GlobalContext;
use crate::core::render::{Asset, Renderer, Texture};
use crate::core::scene::Scene;

//=== Assets ==============================================================

const LOGO_SHEET: &str = "TitleScreen.png";
const CURSOR_SHEET: &str = "arrow.png";
const RIGHTS_TEXT: &str = "© CAPCOM CO.,LTD.2005 ALL RIGHTS RESERVED";

const CURSOR_START: Vec2 = Vec2::new(-150.0, 148.0);

//=== StartScreen =========================================================

#[derive(Debug)]
pub struct StartScreen {
    arena: EntityArena,
    root: EntityId,
    config: TitleConfig,

    logo: Texture,
    animated_logo: AnimatedTexture,
    new_game: Texture,
    controls: Texture,
    cursor: AnimatedTexture,
    rights: Texture,

    slide_from: Vec2,
    slide_timer: f32,
    slide_done: bool,
}

impl StartScreen {
    pub fn new(config: &GameConfig) -> Self {
        let screen = config.screen;
        let mut arena = EntityArena::new();
        let slide_from = Vec2::new(0.0, screen.height);

        let root = arena.spawn(Entity::at(slide_from));

        let logo = Texture::spawn(&mut arena, Asset::Image(LOGO_SHEET), Some(root), screen.at(0.5, 0.32));
        let animated_logo = AnimatedTexture::spawn(
            &mut arena,
            Asset::Image(LOGO_SHEET),
            Some(root),
            screen.at(0.5, 0.5),
            Animation::new(10, 1.25, WrapMode::Loop),
        );

        let menu = arena.spawn_child(root, Entity::at(screen.at(0.5, 0.55)));
        let new_game = Texture::spawn(
            &mut arena,
            Asset::text("NEW GAME", FONT, 60, TEXT_COLOR),
            Some(menu),
            Vec2::new(0.0, 150.0),
        );
        let controls = Texture::spawn(
            &mut arena,
            Asset::text("CONTROLS", FONT, 60, TEXT_COLOR),
            Some(menu),
            Vec2::new(0.0, 210.0),
        );
        let cursor = AnimatedTexture::spawn(
            &mut arena,
            Asset::Image(CURSOR_SHEET),
            Some(menu),
            CURSOR_START,
            Animation::new(3, 0.25, WrapMode::Loop),
        );

        let bottom_bar = arena.spawn_child(root, Entity::at(screen.at(0.5, 0.7)));
        let rights = Texture::spawn(
            &mut arena,
            Asset::text(RIGHTS_TEXT, FONT, 45, TEXT_COLOR),
            Some(bottom_bar),
            Vec2::new(0.0, 170.0),
        );

        Self {
            arena,
            root,
            config: config.title,
            logo,
            animated_logo,
            new_game,
            controls,
            cursor,
            rights,
            slide_from,
            slide_timer: 0.0,
            slide_done: false,
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn is_slide_done(&self) -> bool {
        self.slide_done
    }

    /// World position of the whole screen while it slides in.
    pub fn offset(&self) -> Vec2 {
        self.arena.world_position(self.root).unwrap_or(Vec2::ZERO)
    }

    /// Cursor position relative to the menu.
    pub fn cursor_position(&self) -> Vec2 {
        self.arena
            .position(self.cursor.entity(), Space::Local)
            .unwrap_or(CURSOR_START)
    }

    //--- Menu -------------------------------------------------------------

    /// Points the cursor at `mode` and ends the slide.
    pub fn select(&mut self, mode: MenuMode) {
        let target = CURSOR_START + Vec2::new(0.0, self.config.cursor_spacing * mode.index() as f32);
        self.arena.set_position(self.cursor.entity(), target, Space::Local);
        self.finish_slide();
    }

    fn finish_slide(&mut self) {
        self.slide_timer = self.config.slide_duration;
        self.slide_done = true;
        self.arena.set_position(self.root, Vec2::ZERO, Space::Local);
    }

    fn restart_slide(&mut self) {
        self.slide_timer = 0.0;
        self.slide_done = false;
        self.arena.set_position(self.root, self.slide_from, Space::Local);
    }
}

//=== Scene Implementation ================================================

impl Scene for StartScreen {
    fn on_enter(&mut self, _context: &mut GlobalContext) {
        self.restart_slide();
        trace!("Title slide restarted");
    }

    fn update(&mut self, context: &mut GlobalContext) {
        let dt = context.delta_time();

        if self.slide_done {
            self.animated_logo.update(dt);
            self.cursor.update(dt);
            return;
        }

        self.slide_timer += dt;
        let duration = self.config.slide_duration;
        let t = if duration > 0.0 { (self.slide_timer / duration).min(1.0) } else { 1.0 };
        let position = self.slide_from.lerp(Vec2::ZERO, t);
        self.arena.set_position(self.root, position, Space::Local);

        if self.slide_timer >= duration {
            self.slide_done = true;
        }
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        let arena = &self.arena;

        if self.slide_done {
            self.animated_logo.render(arena, renderer);
        } else {
            self.logo.render(arena, renderer);
        }

        self.new_game.render(arena, renderer);
        self.controls.render(arena, renderer);
        self.cursor.render(arena, renderer);
        self.rights.render(arena, renderer);
    }
}

//=== Tests ===============================================================
