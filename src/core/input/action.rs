//=========================================================================
// Actions
//=========================================================================
//
// Action trait and the game's action set.
//
// Actions are what the game reacts to; keys are only how the player
// asks for them. Screens never look at KeyCodes directly.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Internal Dependencies ===============================================

use super::event::KeyCode;

//=== Action Trait ========================================================

/// Marker trait for action enums routed by the input system.
///
/// # Requirements
///
/// - `Copy + Eq + Hash`: Efficient passing and deduplication
/// - `Debug`: Logging support
/// - `Send + 'static`: Lives on the logic thread
pub trait Action: 'static + Send + Copy + Eq + Hash + Debug {}

//=== GameAction ==========================================================

/// Every input the game responds to.
///
/// All actions are edge-triggered: they fire on the frame the bound key
/// goes down and never while it is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move one row up; previous menu entry on the title screen.
    MoveUp,

    /// Move one row down; next menu entry on the title screen.
    MoveDown,

    MoveLeft,
    MoveRight,
    Fire,

    /// Select the highlighted menu entry / leave the controls screen.
    Confirm,

    /// Debug: the player takes a hit.
    TakeHit,

    /// Debug: finish the current stage.
    SkipStage,
}

impl Action for GameAction {}

impl GameAction {
    pub const ALL: [GameAction; 8] = [
        GameAction::MoveUp,
        GameAction::MoveDown,
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::Fire,
        GameAction::Confirm,
        GameAction::TakeHit,
        GameAction::SkipStage,
    ];

    /// Keyboard layout the game ships with.
    pub fn default_bindings() -> [(KeyCode, GameAction); 8] {
        [
            (KeyCode::ArrowUp, GameAction::MoveUp),
            (KeyCode::ArrowDown, GameAction::MoveDown),
            (KeyCode::ArrowLeft, GameAction::MoveLeft),
            (KeyCode::ArrowRight, GameAction::MoveRight),
            (KeyCode::Space, GameAction::Fire),
            (KeyCode::Enter, GameAction::Confirm),
            (KeyCode::KeyX, GameAction::TakeHit),
            (KeyCode::KeyN, GameAction::SkipStage),
        ]
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
