//=========================================================================
// Input System
//
// Turns the frame's raw keyboard batches into edge-triggered actions.
//
// Frame lifecycle (driven by GlobalSystems):
// ```text
// frame_events ──→ StateTracker::clear()
//                  StateTracker::process_events(batch...)
//                         ↓
//                  keys pressed this frame ──→ ActionMapper ──→ ActionSet
// ```
//
// Notes:
// Key state lives in GlobalContext (data); the mapper and the per-frame
// action list live here (logic).
//
//=========================================================================

//=== Submodules ==========================================================

pub mod action;
pub mod action_mapper;
pub mod event;
pub mod state_tracker;

//=== External Dependencies ===============================================

use std::collections::HashSet;

use log::trace;

//=== Internal Imports ====================================================

use action::Action;
use action_mapper::ActionMapper;
use event::InputEvent;
use state_tracker::StateTracker;

//=== ActionSet ===========================================================

/// Actions whose key went down this frame.
#[derive(Debug)]
pub struct ActionSet<A: Action> {
    pressed: HashSet<A>,
}

impl<A: Action> ActionSet<A> {
    pub fn new() -> Self {
        Self {
            pressed: HashSet::new(),
        }
    }

    pub fn is_pressed(&self, action: A) -> bool {
        self.pressed.contains(&action)
    }

    pub fn press(&mut self, action: A) {
        self.pressed.insert(action);
    }

    pub fn clear(&mut self) {
        self.pressed.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }
}

impl<A: Action> Default for ActionSet<A> {
    fn default() -> Self {
        Self::new()
    }
}

//=== InputSystem =========================================================

#[derive(Debug)]
pub struct InputSystem<A: Action> {
    mapper: ActionMapper<A>,
}

impl<A: Action> InputSystem<A> {
    pub fn new(mapper: ActionMapper<A>) -> Self {
        Self { mapper }
    }

    /// Consumes the frame's batches, refreshing `state` and `actions`.
    pub fn process_frame(
        &self,
        batches: &mut Vec<Vec<InputEvent>>,
        state: &mut StateTracker,
        actions: &mut ActionSet<A>,
    ) {
        state.clear();
        for batch in batches.drain(..) {
            state.process_events(&batch);
        }

        actions.clear();
        for key in state.keys_pressed() {
            if let Some(action) = self.mapper.map_key(*key) {
                actions.press(action);
            }
        }

        if !actions.is_empty() {
            trace!(target: "input", "Actions this frame: {:?}", actions);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
