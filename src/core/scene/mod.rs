//=========================================================================
// Scene System
//=========================================================================
//
// Scene lifecycle contract and deferred scene switching.
//
// Architecture:
//   Scene            (on_enter / on_exit / update / render)
//   SceneTransition  (what to switch)
//   TransitionQueue  (switches requested this tick)
//
// Flow:
//   update() → transitions queued → tick boundary → on_exit / on_enter
//
// Exactly one scene is live at a time; switches never happen in the
// middle of an update.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;
use crate::core::render::Renderer;

//=== Module Declarations =================================================

mod transition_queue;

//=== Public API ==========================================================

pub use transition_queue::TransitionQueue;

//=== Scene Key Trait =====================================================

/// Marker trait for scene identifiers.
pub trait SceneKey: Clone + Copy + Eq + Hash + Debug + Send + 'static {}

//=== Scene Transition ====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneTransition<K: SceneKey> {
    /// Leaves the first scene and enters the second.
    Replace(K, K),

    /// No transition occurs.
    #[default]
    Empty,
}

//=== Scene Trait =========================================================

/// A screen of the game with lifecycle hooks, logic and drawing.
///
/// Only `update()` and `render()` are required. Lifecycle hooks default
/// to doing nothing.
pub trait Scene: Send {
    /// Called when the scene becomes the live scene.
    fn on_enter(&mut self, _context: &mut GlobalContext) {}

    /// Called when the scene stops being the live scene.
    fn on_exit(&mut self, _context: &mut GlobalContext) {}

    /// Called every tick while the scene is live.
    fn update(&mut self, context: &mut GlobalContext);

    /// Draws the scene. Called once per tick after all updates.
    fn render(&self, renderer: &mut dyn Renderer);
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestScene {
        A,
        B,
    }

    impl SceneKey for TestScene {}

    #[test]
    fn transition_default_is_empty() {
        let transition: SceneTransition<TestScene> = SceneTransition::default();
        assert_eq!(transition, SceneTransition::Empty);
    }

    #[test]
    fn transition_is_copy_and_eq() {
        let t1 = SceneTransition::Replace(TestScene::A, TestScene::B);
        let t2 = t1;
        assert_eq!(t1, t2);
        assert_ne!(t1, SceneTransition::Replace(TestScene::B, TestScene::A));
    }
}
