//=========================================================================
// Game
//=========================================================================
//
// The arcade shooter built on the core services.
//
// Ownership tree (each node owns its children and their entities):
// ```text
// ScreenManager
//   ├─ StartScreen      (logo, menu, cursor)
//   ├─ ControlsScreen   (help labels)
//   └─ PlayScreen
//        ├─ PlayBackground  (HUD: lives, stage flags)
//        ├─ Level           (intro / live / hit / finished / game over)
//        └─ Player
//             └─ BulletPool [Bullet; MAX_BULLETS]
// ```
//
// Each screen keeps its own EntityArena; handles never cross screens.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod bullet;
pub mod controls_screen;
pub mod level;
pub mod play_background;
pub mod play_screen;
pub mod player;
pub mod screen_manager;
pub mod start_screen;

//=== Public API ==========================================================

pub use bullet::{Bullet, BulletPool, MAX_BULLETS};
pub use controls_screen::ControlsScreen;
pub use level::{Level, LevelState};
pub use play_background::PlayBackground;
pub use play_screen::PlayScreen;
pub use player::Player;
pub use screen_manager::{MenuMode, ScreenKey, ScreenManager};
pub use start_screen::StartScreen;

//=== Shared Assets =======================================================

/// Font used by every text label.
pub(crate) const FONT: &str = "BN6FontBold.ttf";

/// White text.
pub(crate) const TEXT_COLOR: [u8; 3] = [230, 230, 230];

//=== Test Support ========================================================
