//=========================================================================
// Test Doubles
//=========================================================================
//
// Headless stand-ins for the audio and render services used by the
// unit tests. Compiled for tests only.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::{Arc, Mutex, MutexGuard};

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::audio::Audio;
use super::render::{DrawCommand, Renderer};

//=== RecordingAudio ======================================================

/// Everything played through a [`RecordingAudio`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AudioLog {
    pub sfx: Vec<String>,
    pub music: Vec<(String, i32)>,
    pub music_playing: bool,
}

/// Audio double. Music keeps "playing" until [`AudioProbe::finish_music`].
#[derive(Debug, Default)]
pub struct RecordingAudio {
    log: Arc<Mutex<AudioLog>>,
}

/// Test-side handle onto a [`RecordingAudio`] that has been moved into
/// the game.
#[derive(Debug, Clone)]
pub struct AudioProbe {
    log: Arc<Mutex<AudioLog>>,
}

impl RecordingAudio {
    pub fn new() -> (Self, AudioProbe) {
        let log = Arc::new(Mutex::new(AudioLog::default()));
        (Self { log: Arc::clone(&log) }, AudioProbe { log })
    }
}

fn lock(log: &Mutex<AudioLog>) -> MutexGuard<'_, AudioLog> {
    log.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Audio for RecordingAudio {
    fn play_sfx(&mut self, name: &str) {
        lock(&self.log).sfx.push(name.to_owned());
    }

    fn play_music(&mut self, name: &str, loops: i32) {
        let mut log = lock(&self.log);
        log.music.push((name.to_owned(), loops));
        log.music_playing = true;
    }

    fn is_music_playing(&mut self) -> bool {
        lock(&self.log).music_playing
    }
}

impl AudioProbe {
    /// Ends the current track, as the backend would when it runs out.
    pub fn finish_music(&self) {
        lock(&self.log).music_playing = false;
    }

    pub fn snapshot(&self) -> AudioLog {
        lock(&self.log).clone()
    }

    pub fn sfx_count(&self, name: &str) -> usize {
        lock(&self.log).sfx.iter().filter(|s| *s == name).count()
    }
}

//=== RecordingRenderer ===================================================

/// A draw call captured by [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedDraw {
    pub name: String,
    pub position: Vec2,
    pub rotation: f32,
    pub frame: u32,
}

/// Renderer double that keeps every draw call.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    draws: Vec<RecordedDraw>,
}

impl RecordingRenderer {
    pub fn draws(&self) -> &[RecordedDraw] {
        &self.draws
    }

    pub fn contains(&self, name: &str) -> bool {
        self.draws.iter().any(|d| d.name == name)
    }

    pub fn count(&self, name: &str) -> usize {
        self.draws.iter().filter(|d| d.name == name).count()
    }

    pub fn clear(&mut self) {
        self.draws.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, command: DrawCommand<'_>) {
        self.draws.push(RecordedDraw {
            name: command.asset.name().to_owned(),
            position: command.position,
            rotation: command.rotation,
            frame: command.frame,
        });
    }
}
