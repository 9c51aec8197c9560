//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core interface types (events and errors).
//
// The only things that cross from the window thread into the game.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from the platform thread to the logic thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformEvent {
    /// Key events gathered since the previous flush, in arrival order.
    Inputs(Vec<InputEvent>),

    /// Window close requested. The logic thread stops after this.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
#[derive(Debug)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    EventLoopCreation(String),

    /// Event loop execution error.
    EventLoopExecution(String),

    /// Window creation failed after the event loop started.
    WindowCreation(String),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
            Self::WindowCreation(e) => write!(f, "Window creation failed: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::KeyCode;

    #[test]
    fn platform_error_messages() {
        let err = PlatformError::EventLoopCreation("no display".into());
        assert_eq!(err.to_string(), "Event loop creation failed: no display");

        let err = PlatformError::WindowCreation("denied".into());
        assert_eq!(err.to_string(), "Window creation failed: denied");
    }

    #[test]
    fn inputs_compare_by_content() {
        let a = PlatformEvent::Inputs(vec![InputEvent::KeyDown(KeyCode::Space)]);
        let b = PlatformEvent::Inputs(vec![InputEvent::KeyDown(KeyCode::Space)]);
        assert_eq!(a, b);
        assert_ne!(a, PlatformEvent::WindowClosed);
    }
}
