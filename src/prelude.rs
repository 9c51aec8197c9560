//=========================================================================
// Prelude
//=========================================================================
//
// Commonly used types in one import.
//
// Usage:
//   use gridshot::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::core::CoreSystemsOrchestrator;

// Configuration
pub use crate::core::config::{ConfigError, GameConfig};

// Context and systems
pub use crate::core::globals::{GlobalContext, GlobalSystems};

// Entities and drawing
pub use crate::core::animation::{AnimatedTexture, Animation, WrapMode};
pub use crate::core::entity::{Entity, EntityArena, EntityId, Space};
pub use crate::core::render::{Asset, DrawCommand, LogRenderer, Renderer, Texture};

// Input
pub use crate::core::input::action::GameAction;
pub use crate::core::input::event::{InputEvent, KeyCode};

// Audio
pub use crate::core::audio::{Audio, AudioBackend, AudioCommand, AudioStatus, ChannelAudio, SilentAudio};

// Scenes
pub use crate::core::scene::{Scene, SceneKey, SceneTransition};

// Game
pub use crate::game::{LevelState, MenuMode, ScreenKey, ScreenManager};
