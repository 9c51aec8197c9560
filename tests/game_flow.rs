//=========================================================================
// Game Flow Integration Tests
//=========================================================================
//
// Drives the whole game headlessly through CoreSystemsOrchestrator:
// key batches in, fixed deltas, recorded audio and draws out.
//
//=========================================================================

mod common;

use common::{AudioProbe, DrawLog, RecordingAudio};
use gridshot::core::config::GameConfig;
use gridshot::core::input::event::{InputEvent, KeyCode};
use gridshot::core::CoreSystemsOrchestrator;
use gridshot::game::{Level, LevelState, MenuMode, ScreenKey};

//=== Helpers =============================================================

struct Game {
    core: CoreSystemsOrchestrator,
    audio: AudioProbe,
}

impl Game {
    fn new() -> Self {
        let (audio, probe) = RecordingAudio::new();
        Self {
            core: CoreSystemsOrchestrator::new(GameConfig::default(), Box::new(audio)),
            audio: probe,
        }
    }

    /// Presses and releases `key` inside one zero-length tick.
    fn tap(&mut self, key: KeyCode) {
        self.core
            .push_inputs(vec![InputEvent::KeyDown(key), InputEvent::KeyUp(key)]);
        self.core.tick(0.0);
    }

    fn tick(&mut self, dt: f32) {
        self.core.tick(dt);
    }

    fn level(&self) -> &Level {
        self.core
            .screens()
            .play_screen()
            .level()
            .expect("a stage is loaded")
    }

    fn lives(&self) -> u32 {
        self.core.screens().play_screen().player().lives()
    }

    fn drawn(&self) -> DrawLog {
        let mut renderer = DrawLog::default();
        self.core.render(&mut renderer);
        renderer
    }

    /// From the title to the first frame of stage 1 (label timer 1.0 s).
    fn start_stage_one(&mut self) {
        self.tap(KeyCode::Enter);
        self.audio.finish_music();
        self.tick(0.5);
        self.tick(1.0);
        assert_eq!(self.level().stage(), 1);
    }

    fn play_stage_one(&mut self) {
        self.start_stage_one();
        self.tick(3.5);
        assert!(self.level().is_stage_started());
    }
}

//=== Menus ===============================================================

#[test]
fn new_game_from_title() {
    let mut game = Game::new();
    assert_eq!(game.core.screens().current(), ScreenKey::Title);

    game.tap(KeyCode::Enter);

    assert_eq!(game.core.screens().current(), ScreenKey::Play);
    assert_eq!(game.lives(), 2);
    assert_eq!(game.core.screens().play_screen().player().score(), 0);
    assert_eq!(
        game.audio.music(),
        vec![("start.wav".to_owned(), 0)]
    );
}

#[test]
fn controls_round_trip() {
    let mut game = Game::new();
    assert!(!game.core.screens().start_screen().is_slide_done());

    game.tap(KeyCode::ArrowDown);
    assert_eq!(game.core.screens().selection(), MenuMode::Controls);
    let title = game.core.screens().start_screen();
    assert!(title.is_slide_done());
    assert_eq!(title.cursor_position().y, 208.0);
    game.tap(KeyCode::Enter);
    assert_eq!(game.core.screens().current(), ScreenKey::Controls);
    assert!(game.drawn().contains("X Key - Lose a life"));

    game.tap(KeyCode::Enter);
    assert_eq!(game.core.screens().current(), ScreenKey::Title);
    assert!(!game.core.screens().start_screen().is_slide_done());
}

#[test]
fn play_waits_for_the_jingle() {
    let mut game = Game::new();
    game.tap(KeyCode::Enter);

    for _ in 0..5 {
        game.tick(1.0);
    }

    let play = game.core.screens().play_screen();
    assert!(!play.is_game_started());
    assert!(play.level().is_none());
    assert!(game.drawn().contains("ARE YOU READY?"));
}

//=== Stage Intro =========================================================

#[test]
fn stage_one_intro_timeline() {
    let mut game = Game::new();
    game.start_stage_one();
    assert!(game.drawn().contains("STAGE 1"));

    game.tick(0.5);
    assert_eq!(game.level().label_timer(), 1.5);
    assert!(!game.level().is_stage_started());

    game.tick(1.0);
    assert!(game.drawn().contains("battleStart.png"));
    let play = game.core.screens().play_screen();
    assert!(!play.player().is_active(play.arena()));

    game.tick(2.0);
    assert!(game.level().is_stage_started());
    let play = game.core.screens().play_screen();
    assert!(play.player().is_active(play.arena()));
    assert!(play.player().is_visible(play.arena()));
}

//=== Player ==============================================================

#[test]
fn movement_is_clamped_to_the_grid() {
    let mut game = Game::new();
    game.play_stage_one();

    game.tap(KeyCode::ArrowRight);
    game.tap(KeyCode::ArrowRight);
    game.tap(KeyCode::ArrowUp);

    let play = game.core.screens().play_screen();
    let pos = play.player().position(play.arena()).unwrap();
    assert_eq!(pos.x, 413.0);
    assert_eq!(pos.y, 277.0);
}

#[test]
fn firing_with_a_full_pool_is_a_no_op() {
    let mut game = Game::new();
    game.play_stage_one();

    game.tap(KeyCode::Space);
    game.tap(KeyCode::Space);
    game.tap(KeyCode::Space);

    let play = game.core.screens().play_screen();
    assert_eq!(play.player().bullets().active_count(play.arena()), 2);
    assert_eq!(game.audio.sfx_count("fire.wav"), 2);

    // Both leave the screen within a second.
    game.tick(1.0);
    let play = game.core.screens().play_screen();
    assert_eq!(play.player().bullets().active_count(play.arena()), 0);
}

//=== Hits ================================================================

#[test]
fn respawn_after_death_animation_and_delay() {
    let mut game = Game::new();
    game.play_stage_one();

    game.tap(KeyCode::KeyX);
    assert_eq!(game.lives(), 1);
    assert_eq!(game.audio.sfx_count("death.wav"), 1);

    game.tick(2.0);
    game.tick(1.0);
    game.tick(1.0);
    game.tick(0.5);
    assert!(game.level().is_player_hit());

    game.tick(0.5);
    assert!(!game.level().is_player_hit());
    let play = game.core.screens().play_screen();
    assert!(play.player().is_active(play.arena()));
    assert!(play.player().is_visible(play.arena()));
}

#[test]
fn last_life_ends_on_the_title() {
    let mut game = Game::new();
    game.play_stage_one();

    game.tap(KeyCode::KeyX);
    for _ in 0..5 {
        game.tick(1.0);
    }
    assert!(!game.level().is_player_hit());

    game.tap(KeyCode::KeyX);
    assert_eq!(game.lives(), 0);

    game.tick(2.0);
    game.tick(3.0);
    assert!(game.drawn().contains("GAME OVER"));
    game.tick(2.5);
    assert_eq!(game.level().state(), LevelState::Running);
    assert_eq!(game.core.screens().current(), ScreenKey::Play);

    game.tick(0.5);
    assert_eq!(game.core.screens().current(), ScreenKey::Title);

    // A fresh game starts from scratch.
    game.tap(KeyCode::Enter);
    assert_eq!(game.lives(), 2);
    assert!(game.core.screens().play_screen().level().is_none());
}

#[test]
fn extra_hits_never_go_below_zero() {
    let mut game = Game::new();
    game.play_stage_one();

    for _ in 0..4 {
        game.tap(KeyCode::KeyX);
        for _ in 0..7 {
            game.tick(1.0);
        }
    }

    assert_eq!(game.lives(), 0);
    assert_eq!(game.audio.sfx_count("death.wav"), 2);
}

//=== Stages ==============================================================

#[test]
fn skipping_a_stage_loads_the_next() {
    let mut game = Game::new();
    game.play_stage_one();

    game.tap(KeyCode::KeyN);
    assert_eq!(game.level().state(), LevelState::Finished);
    assert!(!game.core.screens().play_screen().is_level_started());

    game.tick(1.0);
    assert!(game.core.screens().play_screen().is_level_started());
    assert_eq!(game.level().stage(), 2);
    assert_eq!(game.core.screens().play_screen().current_stage(), 2);

    game.tick(0.5);
    assert_eq!(game.core.screens().play_screen().background().flag_names(), vec!["2.png"]);
    assert!(game.audio.sfx_count("StageSE.wav") >= 2);
}

#[test]
fn stage_state_is_monotonic() {
    let mut game = Game::new();
    game.play_stage_one();
    game.tap(KeyCode::KeyN);

    for key in [KeyCode::KeyX, KeyCode::KeyN, KeyCode::Space] {
        game.tap(key);
        assert_ne!(game.level().state(), LevelState::Running);
    }
}
