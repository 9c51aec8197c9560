//=========================================================================
// Action Mapper
//=========================================================================
//
// Maps raw keys to game actions based on configured bindings.
//
// Architecture:
//   KeyCode → HashMap → Action
//
// One key resolves to at most one action; several keys may share an
// action.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::{action::Action, event::KeyCode};

//=== ActionMapper ========================================================

#[derive(Debug)]
pub struct ActionMapper<A: Action> {
    key_bindings: HashMap<KeyCode, A>,
}

impl<A: Action> ActionMapper<A> {
    /// Creates a mapper from `(key, action)` pairs. A key listed twice
    /// keeps its last action.
    pub fn with_bindings(bindings: impl IntoIterator<Item = (KeyCode, A)>) -> Self {
        Self {
            key_bindings: bindings.into_iter().collect(),
        }
    }

    //--- Lookup -----------------------------------------------------------

    pub fn map_key(&self, key: KeyCode) -> Option<A> {
        self.key_bindings.get(&key).copied()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
