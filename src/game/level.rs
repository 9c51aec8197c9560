//=========================================================================
// Level
//=========================================================================
//
// One stage of play: intro labels, the live phase, hit / respawn and
// the end of the stage.
//
// State machine:
// ```text
//            label_timer ≥ stage_label_off
//            (+ ready_label_off on stage 1)
//   Intro ─────────────────────────────────→ Live ──SkipStage──→ Finished
//                                            │  ↑
//                                   TakeHit  │  │ respawn_timer ≥ respawn_delay
//                                            ↓  │ (lives > 0)
//                                            Hit ──────────────→ GameOver
//                                        game_over_timer ≥ game_over_delay
//                                        (lives == 0)
// ```
//
// Hit timers only start once the death animation has finished. The
// player is hidden on the first frame they run.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::play_background::PlayBackground;
use super::player::Player;
use super::{FONT, TEXT_COLOR};
use crate::core::config::{GameConfig, StageTimings};
use crate::core::entity::EntityArena;
use crate::core::globals::GlobalContext;
use crate::core::input::action::GameAction;
use crate::core::render::{Asset, Renderer, Texture};

//=== Assets ==============================================================

const READY_SPRITE: &str = "battleStart.png";
const GAME_OVER_TEXT: &str = "GAME OVER";
const GAME_OVER_COLOR: [u8; 3] = [150, 0, 0];

//=== LevelState ==========================================================

/// Outcome of a stage. Leaves `Running` at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelState {
    Running,
    Finished,
    GameOver,
}

//=== Level ===============================================================

#[derive(Debug, Clone)]
pub struct Level {
    stage: u32,
    timings: StageTimings,
    state: LevelState,

    stage_started: bool,
    label_timer: f32,
    stage_label: Texture,
    ready_label: Texture,

    player_hit: bool,
    respawn_timer: f32,
    game_over_timer: f32,
    game_over_label: Texture,
}

impl Level {
    /// Builds stage `stage` and shows its number on the background.
    pub fn new(
        stage: u32,
        config: &GameConfig,
        arena: &mut EntityArena,
        background: &mut PlayBackground,
    ) -> Self {
        let screen = config.screen;
        let stage = stage.max(1);

        let stage_label = Texture::spawn(
            arena,
            Asset::text(format!("STAGE {}", stage), FONT, 48, TEXT_COLOR),
            None,
            screen.at(0.5, 0.3),
        );
        let ready_label = Texture::spawn(
            arena,
            Asset::Image(READY_SPRITE),
            None,
            screen.at(0.5, 0.3),
        );
        let game_over_label = Texture::spawn(
            arena,
            Asset::text(GAME_OVER_TEXT, FONT, 75, GAME_OVER_COLOR),
            None,
            screen.at(0.5, 0.5),
        );

        background.set_level(arena, stage);
        info!("Stage {} starting", stage);

        Self {
            stage,
            timings: config.stage,
            state: LevelState::Running,
            stage_started: false,
            label_timer: 0.0,
            stage_label,
            ready_label,
            player_hit: false,
            respawn_timer: 0.0,
            game_over_timer: 0.0,
            game_over_label,
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn stage(&self) -> u32 {
        self.stage
    }

    pub fn state(&self) -> LevelState {
        self.state
    }

    /// True once the intro is over.
    pub fn is_stage_started(&self) -> bool {
        self.stage_started
    }

    pub fn is_player_hit(&self) -> bool {
        self.player_hit
    }

    pub fn label_timer(&self) -> f32 {
        self.label_timer
    }

    pub fn respawn_timer(&self) -> f32 {
        self.respawn_timer
    }

    pub fn game_over_timer(&self) -> f32 {
        self.game_over_timer
    }

    //--- Update -----------------------------------------------------------

    pub fn update(
        &mut self,
        context: &mut GlobalContext,
        arena: &mut EntityArena,
        player: &mut Player,
        background: &mut PlayBackground,
    ) {
        if self.state != LevelState::Running {
            return;
        }
        let dt = context.delta_time();

        if !self.stage_started {
            self.handle_start_labels(dt, arena, player);
            return;
        }

        self.handle_collisions(context, arena, player, background);

        if self.player_hit {
            self.handle_player_death(dt, arena, player);
        } else if context.is_action_pressed(GameAction::SkipStage) {
            self.state = LevelState::Finished;
            debug!("Stage {} finished", self.stage);
        }
    }

    fn handle_start_labels(&mut self, dt: f32, arena: &mut EntityArena, player: &Player) {
        self.label_timer += dt;

        if self.label_timer < self.timings.stage_label_off {
            return;
        }

        if self.stage > 1 || self.label_timer >= self.timings.ready_label_off() {
            self.stage_started = true;
            player.set_active(arena, true);
            player.set_visible(arena, true);
            debug!("Stage {} live", self.stage);
        }
    }

    fn handle_collisions(
        &mut self,
        context: &mut GlobalContext,
        arena: &mut EntityArena,
        player: &mut Player,
        background: &mut PlayBackground,
    ) {
        // A hit at zero lives would leave nothing to take.
        if self.player_hit || player.lives() == 0 {
            return;
        }
        if !context.is_action_pressed(GameAction::TakeHit) {
            return;
        }

        player.was_hit(context);
        background.set_lives(player.lives());
        self.player_hit = true;
        self.respawn_timer = 0.0;
        self.game_over_timer = 0.0;
        player.set_active(arena, false);
    }

    fn handle_player_death(&mut self, dt: f32, arena: &mut EntityArena, player: &Player) {
        if player.is_animating() {
            return;
        }

        if player.lives() > 0 {
            if self.respawn_timer <= 0.0 {
                player.set_visible(arena, false);
            }
            self.respawn_timer += dt;

            if self.respawn_timer >= self.timings.respawn_delay {
                player.set_active(arena, true);
                player.set_visible(arena, true);
                self.player_hit = false;
                debug!("Player respawned on stage {}", self.stage);
            }
        } else {
            if self.game_over_timer <= 0.0 {
                player.set_visible(arena, false);
            }
            self.game_over_timer += dt;

            if self.game_over_timer >= self.timings.game_over_delay {
                self.state = LevelState::GameOver;
                info!("Game over on stage {}", self.stage);
            }
        }
    }

    //--- Render -----------------------------------------------------------

    pub fn render(&self, arena: &EntityArena, renderer: &mut dyn Renderer) {
        let t = &self.timings;

        if !self.stage_started {
            if self.label_timer > t.stage_label_on && self.label_timer < t.stage_label_off {
                self.stage_label.render(arena, renderer);
            } else if self.label_timer > t.ready_label_on() && self.label_timer < t.ready_label_off()
            {
                self.ready_label.render(arena, renderer);
            }
            return;
        }

        if self.player_hit {
            if self.respawn_timer >= t.respawn_label_on {
                self.ready_label.render(arena, renderer);
            }
            if self.game_over_timer >= t.game_over_label_on {
                self.game_over_label.render(arena, renderer);
            }
        }
    }

    pub fn release(self, arena: &mut EntityArena) {
        self.stage_label.release(arena);
        self.ready_label.release(arena);
        self.game_over_label.release(arena);
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::RecordingRenderer;
    use crate::game::test_support::{frame, silent_context};

    //=== Helpers ===

    struct Stage {
        ctx: GlobalContext,
        arena: EntityArena,
        player: Player,
        background: PlayBackground,
        level: Level,
    }

    impl Stage {
        fn new(stage: u32) -> Self {
            let ctx = silent_context();
            let mut arena = EntityArena::new();
            let player = Player::spawn(&mut arena, &ctx.config);
            let mut background = PlayBackground::spawn(&mut arena, &ctx.config);
            let level = Level::new(stage, &ctx.config, &mut arena, &mut background);
            Self { ctx, arena, player, background, level }
        }

        fn step(&mut self, dt: f32, pressed: &[GameAction]) {
            frame(&mut self.ctx, dt, pressed);
            self.level
                .update(&mut self.ctx, &mut self.arena, &mut self.player, &mut self.background);
            self.player.update(&mut self.ctx, &mut self.arena);
        }

        /// Runs idle frames of 0.25 s until `done` or `max` frames pass.
        fn run_until(&mut self, max: usize, done: impl Fn(&Self) -> bool) -> usize {
            for n in 0..max {
                if done(self) {
                    return n;
                }
                self.step(0.25, &[]);
            }
            max
        }

        fn drawn(&self) -> RecordingRenderer {
            let mut renderer = RecordingRenderer::default();
            self.level.render(&self.arena, &mut renderer);
            renderer
        }

        fn live(stage: u32) -> Self {
            let mut s = Self::new(stage);
            s.step(5.0, &[]);
            assert!(s.level.is_stage_started());
            s
        }
    }

    //=== Intro ===

    #[test]
    fn stage_one_intro_timeline() {
        let mut s = Stage::new(1);
        assert!(!s.player.is_active(&s.arena));

        s.step(1.0, &[]);
        assert!(s.drawn().contains("STAGE 1"));

        s.step(0.5, &[]);
        assert!(!s.level.is_stage_started(), "stage 1 waits for the ready label");

        s.step(0.5, &[]);
        assert!(s.drawn().contains(READY_SPRITE));

        s.step(2.5, &[]);
        assert!(s.level.is_stage_started());
        assert!(s.player.is_active(&s.arena));
        assert!(s.player.is_visible(&s.arena));
        assert!(s.drawn().draws().is_empty());
    }

    #[test]
    fn later_stages_skip_the_ready_label() {
        let mut s = Stage::new(2);

        s.step(1.5, &[]);

        assert!(s.level.is_stage_started());
        assert!(s.player.is_active(&s.arena));
    }

    #[test]
    fn label_windows_are_exclusive_at_the_edges() {
        let mut s = Stage::new(1);
        assert!(s.drawn().draws().is_empty(), "nothing at exactly 0.0");

        s.step(1.5, &[]);
        assert!(s.drawn().draws().is_empty(), "nothing at exactly 1.5");
    }

    #[test]
    fn input_is_ignored_during_intro() {
        let mut s = Stage::new(1);

        s.step(0.1, &[GameAction::TakeHit, GameAction::SkipStage]);

        assert_eq!(s.level.state(), LevelState::Running);
        assert!(!s.level.is_player_hit());
        assert_eq!(s.player.lives(), 2);
    }

    //=== Hit & Respawn ===

    #[test]
    fn hit_with_two_lives_respawns_after_delay() {
        let mut s = Stage::live(1);

        s.step(0.0, &[GameAction::TakeHit]);
        assert!(s.level.is_player_hit());
        assert_eq!(s.player.lives(), 1);
        assert!(!s.player.is_active(&s.arena));
        assert_eq!(s.background.lives_shown(), 1);

        // Death animation: 2.0 s.
        s.step(2.0, &[]);
        assert!(!s.player.is_animating());
        assert_eq!(s.level.respawn_timer(), 0.0);

        s.step(1.0, &[]);
        assert!(!s.player.is_visible(&s.arena));
        s.step(1.0, &[]);
        assert!(s.drawn().contains(READY_SPRITE), "respawn label at 2.0 s");
        s.step(0.5, &[]);
        assert!(s.level.is_player_hit());

        s.step(0.5, &[]);
        assert!(!s.level.is_player_hit());
        assert!(s.player.is_active(&s.arena));
        assert!(s.player.is_visible(&s.arena));
        assert_eq!(s.level.state(), LevelState::Running);
    }

    #[test]
    fn repeated_hit_while_hit_is_ignored() {
        let mut s = Stage::live(1);

        s.step(0.0, &[GameAction::TakeHit]);
        s.step(0.5, &[GameAction::TakeHit]);
        s.step(0.5, &[GameAction::TakeHit]);

        assert_eq!(s.player.lives(), 1);
    }

    #[test]
    fn last_life_leads_to_game_over() {
        let mut s = Stage::live(1);

        s.step(0.0, &[GameAction::TakeHit]);
        s.run_until(100, |s| !s.level.is_player_hit());
        s.step(0.0, &[GameAction::TakeHit]);
        assert_eq!(s.player.lives(), 0);

        s.step(2.0, &[]);
        assert!(!s.player.is_animating());

        s.step(1.0, &[]);
        assert!(!s.player.is_visible(&s.arena));
        assert!(s.drawn().contains(GAME_OVER_TEXT));

        s.step(4.5, &[]);
        assert_eq!(s.level.state(), LevelState::Running);

        s.step(0.5, &[]);
        assert_eq!(s.level.state(), LevelState::GameOver);
    }

    #[test]
    fn skip_finishes_only_when_not_hit() {
        let mut s = Stage::live(1);

        s.step(0.0, &[GameAction::TakeHit, GameAction::SkipStage]);
        assert_eq!(s.level.state(), LevelState::Running);

        s.run_until(100, |s| !s.level.is_player_hit());
        s.step(0.0, &[GameAction::SkipStage]);
        assert_eq!(s.level.state(), LevelState::Finished);
    }

    //=== Monotonicity ===

    #[test]
    fn finished_stage_ignores_everything() {
        let mut s = Stage::live(1);
        s.step(0.0, &[GameAction::SkipStage]);

        for _ in 0..10 {
            s.step(1.0, &[GameAction::TakeHit]);
        }

        assert_eq!(s.level.state(), LevelState::Finished);
        assert_eq!(s.player.lives(), 2);
    }

    #[test]
    fn state_never_regresses_under_random_dt() {
        let mut s = Stage::live(1);
        let mut seen_terminal = None;
        let dts = [0.0, 0.3, 1.7, 0.016, 2.5, -1.0, 0.9];
        let inputs: [&[GameAction]; 4] = [
            &[],
            &[GameAction::TakeHit],
            &[],
            &[GameAction::TakeHit],
        ];

        for i in 0..200 {
            s.step(dts[i % dts.len()], inputs[i % inputs.len()]);
            match (seen_terminal, s.level.state()) {
                (None, LevelState::Running) => {}
                (None, terminal) => seen_terminal = Some(terminal),
                (Some(prev), now) => assert_eq!(prev, now),
            }
        }

        assert_eq!(seen_terminal, Some(LevelState::GameOver));
    }

    #[test]
    fn release_frees_labels() {
        let mut s = Stage::new(1);
        let before = s.arena.len();

        s.level.clone().release(&mut s.arena);

        assert_eq!(s.arena.len(), before - 3);
    }
}
