//=========================================================================
// Play Screen
//=========================================================================
//
// Runs a game: waits for the intro jingle, then plays stage after stage
// until the player runs out of lives.
//
// Flow:
// ```text
//   start_new_game ─→ [jingle playing]  "ARE YOU READY?"
//                          │ music stops
//                          ↓
//                   [between stages] ──level_start_delay──→ Level n+1
//                          ↑                                  │
//                          └────────── Finished ──────────────┤
//                                                             ↓ GameOver
//                                                       is_game_over()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::level::{Level, LevelState};
use super::play_background::PlayBackground;
use super::player::Player;
use super::FONT;
use crate::core::config::GameConfig;
use crate::core::entity::EntityArena;
use crate::core::globals::GlobalContext;
use crate::core::render::{Asset, Renderer, Texture};
use crate::core::scene::Scene;

//=== Assets ==============================================================

const START_MUSIC: &str = "start.wav";
const START_TEXT: &str = "ARE YOU READY?";

//=== PlayScreen ==========================================================

#[derive(Debug)]
pub struct PlayScreen {
    arena: EntityArena,
    config: GameConfig,

    background: PlayBackground,
    start_label: Texture,
    player: Player,
    level: Option<Level>,

    current_stage: u32,
    game_started: bool,
    level_started: bool,
    level_start_timer: f32,
}

impl PlayScreen {
    pub fn new(config: &GameConfig) -> Self {
        let mut arena = EntityArena::new();
        let background = PlayBackground::spawn(&mut arena, config);
        let start_label = Texture::spawn(
            &mut arena,
            Asset::text(START_TEXT, FONT, 60, [0, 0, 0]),
            None,
            config.screen.at(0.5, 0.3),
        );
        let player = Player::spawn(&mut arena, config);

        Self {
            arena,
            config: *config,
            background,
            start_label,
            player,
            level: None,
            current_stage: 0,
            game_started: false,
            level_started: false,
            level_start_timer: 0.0,
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn current_stage(&self) -> u32 {
        self.current_stage
    }

    pub fn is_game_started(&self) -> bool {
        self.game_started
    }

    pub fn is_level_started(&self) -> bool {
        self.level_started
    }

    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn background(&self) -> &PlayBackground {
        &self.background
    }

    pub fn arena(&self) -> &EntityArena {
        &self.arena
    }

    /// True only while a started stage has ended in game over.
    pub fn is_game_over(&self) -> bool {
        self.level_started
            && self
                .level
                .as_ref()
                .is_some_and(|level| level.state() == LevelState::GameOver)
    }

    //--- Game Lifecycle ---------------------------------------------------

    /// Throws away the running game and sets up a fresh one.
    pub fn start_new_game(&mut self, context: &mut GlobalContext) {
        if let Some(level) = self.level.take() {
            level.release(&mut self.arena);
        }

        let fresh = Player::spawn(&mut self.arena, &self.config);
        let old = std::mem::replace(&mut self.player, fresh);
        old.release(&mut self.arena);

        self.background.set_lives(self.player.lives());
        self.background.set_level(&mut self.arena, 0);

        self.current_stage = 0;
        self.game_started = false;
        self.level_started = false;
        self.level_start_timer = 0.0;

        context.audio.play_music(START_MUSIC, 0);
        info!("New game");
    }

    fn start_next_level(&mut self) {
        self.current_stage += 1;
        self.level_start_timer = 0.0;
        self.level_started = true;

        if let Some(level) = self.level.take() {
            level.release(&mut self.arena);
        }
        self.level = Some(Level::new(
            self.current_stage,
            &self.config,
            &mut self.arena,
            &mut self.background,
        ));
    }
}

//=== Scene Implementation ================================================

impl Scene for PlayScreen {
    fn on_enter(&mut self, context: &mut GlobalContext) {
        self.start_new_game(context);
    }

    fn update(&mut self, context: &mut GlobalContext) {
        if !self.game_started {
            if context.audio.is_music_playing() {
                return;
            }
            self.game_started = true;
            debug!("Start jingle over");
        } else if !self.level_started {
            self.level_start_timer += context.delta_time();
            if self.level_start_timer >= self.config.play.level_start_delay {
                self.start_next_level();
            }
        }

        if self.current_stage > 0 {
            self.background.update(context, &mut self.arena);
        }

        if self.level_started {
            if let Some(level) = self.level.as_mut() {
                level.update(context, &mut self.arena, &mut self.player, &mut self.background);
                if level.state() == LevelState::Finished {
                    self.level_started = false;
                }
            }
        }

        self.player.update(context, &mut self.arena);
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        self.background.render(&self.arena, renderer);

        if !self.game_started {
            self.start_label.render(&self.arena, renderer);
            return;
        }

        if self.level_started {
            if let Some(level) = &self.level {
                level.render(&self.arena, renderer);
            }
        }
        self.player.render(&self.arena, renderer);
    }
}

//=== Tests ===============================================================
