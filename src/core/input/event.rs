//=========================================================================
// Keyboard Event Types
//
// Portable representation of the keyboard input the game consumes.
//
// The platform layer translates window-system keys into these types
// before they cross the channel to the logic thread, so nothing below
// this module depends on winit.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (held keys + per-frame edges)
//         ↓
//    ActionMapper → GameAction
// ```
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced, so
/// `KeyX` is the same key on QWERTY and AZERTY layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    /// Grid movement and menu navigation.
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    /// Fire.
    Space,

    /// Menu confirm.
    Enter,

    Escape,
    Tab,
    Backspace,

    /// Any key the input layer does not name.
    Unidentified
}

//=== InputEvent ==========================================================

/// Discrete keyboard event from the platform layer.
///
/// Key repeats are filtered out before events get here: one physical
/// press produces exactly one `KeyDown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),

    /// Unsupported platform input. Ignored by the state tracker.
    Unidentified
}

impl InputEvent {
    /// Key carried by the event, if any.
    pub fn key(&self) -> Option<KeyCode> {
        match self {
            Self::KeyDown(key) | Self::KeyUp(key) => Some(*key),
            Self::Unidentified => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
