//=========================================================================
// Integration Test Doubles
//=========================================================================
//
// Audio and render stand-ins built on the public service traits, so the
// game can run headlessly from outside the crate.
//
//=========================================================================

use std::sync::{Arc, Mutex, MutexGuard};

use gridshot::core::audio::Audio;
use gridshot::core::render::{DrawCommand, Renderer};

//=== RecordingAudio ======================================================

#[derive(Debug, Default)]
struct AudioLog {
    sfx: Vec<String>,
    music: Vec<(String, i32)>,
    music_playing: bool,
}

fn lock(log: &Mutex<AudioLog>) -> MutexGuard<'_, AudioLog> {
    log.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Music keeps "playing" until [`AudioProbe::finish_music`].
pub struct RecordingAudio {
    log: Arc<Mutex<AudioLog>>,
}

/// Test-side view of a [`RecordingAudio`] owned by the game.
pub struct AudioProbe {
    log: Arc<Mutex<AudioLog>>,
}

impl RecordingAudio {
    pub fn new() -> (Self, AudioProbe) {
        let log = Arc::new(Mutex::new(AudioLog::default()));
        (Self { log: Arc::clone(&log) }, AudioProbe { log })
    }
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
    pub fn finish_music(&self) {
        lock(&self.log).music_playing = false;
    }

    pub fn music(&self) -> Vec<(String, i32)> {
        lock(&self.log).music.clone()
    }

    pub fn sfx_count(&self, name: &str) -> usize {
        lock(&self.log).sfx.iter().filter(|s| *s == name).count()
    }
}

//=== DrawLog =============================================================

/// Keeps the name of every asset drawn.
#[derive(Debug, Default)]
pub struct DrawLog {
    names: Vec<String>,
}

impl DrawLog {
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

impl Renderer for DrawLog {
    fn draw(&mut self, command: DrawCommand<'_>) {
        self.names.push(command.asset.name().to_owned());
    }
}
