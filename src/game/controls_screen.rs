//=========================================================================
// Controls Screen
//=========================================================================
//
// Static help text listing the key layout.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::FONT;
use crate::core::config::GameConfig;
use crate::core::entity::EntityArena;
use crate::core::globals::GlobalContext;
use crate::core::render::{Asset, Renderer, Texture};
use crate::core::scene::Scene;

//=== Layout ==============================================================

const LABEL_COLOR: [u8; 3] = [255, 255, 255];

/// Help lines and their height as a fraction of the screen.
const LINES: [(&str, f32); 5] = [
    ("Arrow Keys - Move Up, Down, Left, Right", 0.1),
    ("Spacebar Key - Shoot", 0.2),
    ("X Key - Lose a life", 0.3),
    ("N Key - Skip a level", 0.4),
    ("Press Enter to return to title", 0.6),
];

//=== ControlsScreen ======================================================

#[derive(Debug)]
pub struct ControlsScreen {
    arena: EntityArena,
    labels: Vec<Texture>,
}

impl ControlsScreen {
    pub fn new(config: &GameConfig) -> Self {
        let mut arena = EntityArena::new();
        let labels = LINES
            .iter()
            .map(|(text, fy)| {
                Texture::spawn(
                    &mut arena,
                    Asset::text(*text, FONT, 45, LABEL_COLOR),
                    None,
                    config.screen.at(0.5, *fy),
                )
            })
            .collect();

        Self { arena, labels }
    }
}

impl Scene for ControlsScreen {
    fn update(&mut self, _context: &mut GlobalContext) {}

    fn render(&self, renderer: &mut dyn Renderer) {
        for label in &self.labels {
            label.render(&self.arena, renderer);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::RecordingRenderer;

    #[test]
    fn renders_all_five_lines() {
        let screen = ControlsScreen::new(&GameConfig::default());
        let mut renderer = RecordingRenderer::default();

        screen.render(&mut renderer);

        assert_eq!(renderer.draws().len(), 5);
        assert!(renderer.contains("Press Enter to return to title"));
        assert_eq!(renderer.draws()[0].position.y, 64.0);
    }
}
