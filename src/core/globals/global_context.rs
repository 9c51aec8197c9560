//=========================================================================
// Global Context
//=========================================================================
//
// Shared data container for scenes.
//
// Contains state data that scenes read/write:
// - input_state: held keys and this frame's edges
// - actions: game actions triggered this frame
// - audio: playback requests
// - config: every gameplay tunable
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::audio::Audio;
use crate::core::config::GameConfig;
use crate::core::input::action::GameAction;
use crate::core::input::event::InputEvent;
use crate::core::input::state_tracker::StateTracker;
use crate::core::input::ActionSet;
use crate::core::timer::sanitize_delta;

//=== GlobalContext =======================================================

/// Shared context data handed to every scene update.
///
/// Replaces process-wide singletons: anything a scene needs from the
/// outside world arrives through here.
pub struct GlobalContext {
    /// Raw key state for low-level queries.
    pub input_state: StateTracker,

    /// Actions whose key went down this frame.
    pub actions: ActionSet<GameAction>,

    pub audio: Box<dyn Audio>,

    pub config: GameConfig,

    /// Seconds covered by the current tick, never negative.
    delta_time: f32,

    /// Input batches received since the last tick. Consumed by the input
    /// system before scenes run.
    pub(crate) frame_events: Vec<Vec<InputEvent>>,
}

impl GlobalContext {
    pub fn new(config: GameConfig, audio: Box<dyn Audio>) -> Self {
        Self {
            input_state: StateTracker::new(),
            actions: ActionSet::new(),
            audio,
            config,
            delta_time: 0.0,
            frame_events: Vec::new(),
        }
    }

    #[inline]
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Sets the tick length. Negative or non-finite values become 0.
    pub fn set_delta_time(&mut self, dt: f32) {
        self.delta_time = sanitize_delta(dt);
    }

    #[inline]
    pub fn is_action_pressed(&self, action: GameAction) -> bool {
        self.actions.is_pressed(action)
    }
}

impl std::fmt::Debug for GlobalContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalContext")
            .field("input_state", &self.input_state)
            .field("actions", &self.actions)
            .field("delta_time", &self.delta_time)
            .finish_non_exhaustive()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::audio::SilentAudio;

    fn context() -> GlobalContext {
        GlobalContext::new(GameConfig::default(), Box::new(SilentAudio))
    }

    #[test]
    fn delta_time_is_clamped() {
        let mut ctx = context();

        ctx.set_delta_time(-1.0);
        assert_eq!(ctx.delta_time(), 0.0);

        ctx.set_delta_time(0.25);
        assert_eq!(ctx.delta_time(), 0.25);
    }

    #[test]
    fn actions_are_queryable() {
        let mut ctx = context();
        assert!(!ctx.is_action_pressed(GameAction::Fire));

        ctx.actions.press(GameAction::Fire);
        assert!(ctx.is_action_pressed(GameAction::Fire));
    }
}
