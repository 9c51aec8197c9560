//=========================================================================
// Screen Manager
//=========================================================================
//
// Top-level state machine over the three screens.
//
// ```text
//   Title ──Confirm (NewGame)──→ Play ──game over──→ Title
//     │  ↑
//     │  └──────Confirm──────┐
//     └──Confirm (Controls)──→ Controls
// ```
//
// Only the live screen is updated and drawn. Switches requested during
// an update are queued and applied by `process_transitions()` at the end
// of the tick, calling `on_exit` on the old screen and `on_enter` on the
// new one.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::controls_screen::ControlsScreen;
use super::play_screen::PlayScreen;
use super::start_screen::StartScreen;
use crate::core::config::GameConfig;
use crate::core::globals::GlobalContext;
use crate::core::input::action::GameAction;
use crate::core::render::Renderer;
use crate::core::scene::{Scene, SceneKey, SceneTransition, TransitionQueue};

//=== ScreenKey ===========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKey {
    Title,
    Controls,
    Play,
}

impl SceneKey for ScreenKey {}

//=== MenuMode ============================================================

/// Title menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(i8)]
pub enum MenuMode {
    Controls = -1,
    #[default]
    NewGame = 1,
}

impl MenuMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Controls => Self::NewGame,
            Self::NewGame => Self::Controls,
        }
    }

    pub fn value(self) -> i8 {
        self as i8
    }

    /// Row of the entry in the title menu, top to bottom.
    pub fn index(self) -> usize {
        match self {
            Self::NewGame => 0,
            Self::Controls => 1,
        }
    }

    fn target(self) -> ScreenKey {
        match self {
            Self::NewGame => ScreenKey::Play,
            Self::Controls => ScreenKey::Controls,
        }
    }
}

//=== ScreenManager =======================================================

#[derive(Debug)]
pub struct ScreenManager {
    current: ScreenKey,
    selection: MenuMode,
    transitions: TransitionQueue<ScreenKey>,

    start: StartScreen,
    controls: ControlsScreen,
    play: PlayScreen,
}

impl ScreenManager {
    /// Builds every screen up front and starts on the title.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            current: ScreenKey::Title,
            selection: MenuMode::default(),
            transitions: TransitionQueue::new(),
            start: StartScreen::new(config),
            controls: ControlsScreen::new(config),
            play: PlayScreen::new(config),
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn current(&self) -> ScreenKey {
        self.current
    }

    pub fn selection(&self) -> MenuMode {
        self.selection
    }

    pub fn start_screen(&self) -> &StartScreen {
        &self.start
    }

    pub fn play_screen(&self) -> &PlayScreen {
        &self.play
    }

    fn screen(&self, key: ScreenKey) -> &dyn Scene {
        match key {
            ScreenKey::Title => &self.start,
            ScreenKey::Controls => &self.controls,
            ScreenKey::Play => &self.play,
        }
    }

    fn screen_mut(&mut self, key: ScreenKey) -> &mut dyn Scene {
        match key {
            ScreenKey::Title => &mut self.start,
            ScreenKey::Controls => &mut self.controls,
            ScreenKey::Play => &mut self.play,
        }
    }

    //--- Update -----------------------------------------------------------

    /// Updates the live screen and queues any switch it asks for.
    pub fn update(&mut self, context: &mut GlobalContext) {
        let confirm = context.is_action_pressed(GameAction::Confirm);

        let next = match self.current {
            ScreenKey::Title => {
                if context.is_action_pressed(GameAction::MoveUp)
                    || context.is_action_pressed(GameAction::MoveDown)
                {
                    self.selection = self.selection.toggled();
                    self.start.select(self.selection);
                }
                self.start.update(context);
                confirm.then(|| self.selection.target())
            }
            ScreenKey::Controls => {
                self.controls.update(context);
                confirm.then_some(ScreenKey::Title)
            }
            ScreenKey::Play => {
                self.play.update(context);
                self.play.is_game_over().then_some(ScreenKey::Title)
            }
        };

        if let Some(next) = next {
            self.transitions.push(SceneTransition::Replace(self.current, next));
        }
    }

    /// Applies queued switches in order.
    pub fn process_transitions(&mut self, context: &mut GlobalContext) {
        for transition in self.transitions.take() {
            let SceneTransition::Replace(from, to) = transition else {
                continue;
            };
            if from != self.current {
                warn!("Stale transition {:?} -> {:?} ignored (live: {:?})", from, to, self.current);
                continue;
            }

            self.screen_mut(from).on_exit(context);
            self.current = to;
            self.screen_mut(to).on_enter(context);
            debug!("Screen {:?} -> {:?}", from, to);
        }
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        self.screen(self.current).render(renderer);
    }
}

//=== Tests ===============================================================
