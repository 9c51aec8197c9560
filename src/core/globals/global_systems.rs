//=========================================================================
// Global Systems
//=========================================================================
//
// Container for game-level systems with logic.
//
// Contains systems that process input and drive the screens. Systems
// operate on GlobalContext data.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::GlobalContext;
use crate::core::input::action::GameAction;
use crate::core::input::action_mapper::ActionMapper;
use crate::core::input::InputSystem;
use crate::core::render::Renderer;
use crate::game::ScreenManager;

//=== GlobalSystems =======================================================

/// Container for game-level logic systems.
///
/// # Available Systems
///
/// - `input`: Key edges to actions
/// - `screens`: Title / Controls / Play state machine
#[derive(Debug)]
pub struct GlobalSystems {
    pub input: InputSystem<GameAction>,
    pub screens: ScreenManager,
}

impl GlobalSystems {
    /// Creates the systems with the default key layout, starting on the
    /// title screen.
    pub fn new(context: &GlobalContext) -> Self {
        Self {
            input: InputSystem::new(ActionMapper::with_bindings(GameAction::default_bindings())),
            screens: ScreenManager::new(&context.config),
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one tick.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **Input Processing**: Frame batches → key edges → actions
    /// 2. **Screen Update**: The live screen updates with the context
    /// 3. **Transition Processing**: Queued screen switches are applied
    pub fn update(&mut self, context: &mut GlobalContext) {
        // 1. Process input events into state and actions
        self.input.process_frame(
            &mut context.frame_events,
            &mut context.input_state,
            &mut context.actions,
        );

        // 2. Update the live screen
        self.screens.update(context);

        // 3. Apply screen switches at the tick boundary
        self.screens.process_transitions(context);
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        self.screens.render(renderer);
    }
}
