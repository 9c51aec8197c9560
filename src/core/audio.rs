//=========================================================================
// Audio Service
//=========================================================================
//
// Fire-and-forget playback requests leaving the logic thread.
//
// Architecture:
//   ChannelAudio (logic thread)              AudioBackend (mixer thread)
//     ├─ commands: Sender<AudioCommand>  ──→   commands: Receiver
//     └─ status:   Receiver<AudioStatus> ←──   status:   Sender
//
// The core only ever asks "is the music still playing?". The backend
// answers by reporting MusicFinished when a track runs out.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, unbounded, Receiver, Sender, TryRecvError, TrySendError};
use log::{trace, warn};

//=== Audio ===============================================================

pub trait Audio: Send {
    fn play_sfx(&mut self, name: &str);

    /// Starts `name` as the music track. `loops` follows the mixer
    /// convention: 0 plays once, -1 loops forever.
    fn play_music(&mut self, name: &str, loops: i32);

    fn is_music_playing(&mut self) -> bool;
}

//=== Protocol ============================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioCommand {
    PlaySfx(String),
    PlayMusic { name: String, loops: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioStatus {
    MusicFinished,
}

/// Backend end of a [`ChannelAudio`] pair.
#[derive(Debug)]
pub struct AudioBackend {
    pub commands: Receiver<AudioCommand>,
    pub status: Sender<AudioStatus>,
}

//=== ChannelAudio ========================================================

#[derive(Debug)]
pub struct ChannelAudio {
    commands: Sender<AudioCommand>,
    status: Receiver<AudioStatus>,
    music_playing: bool,
}

impl ChannelAudio {
    /// Creates the logic-side handle and the backend end it talks to.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> (Self, AudioBackend) {
        assert!(capacity > 0, "Audio channel capacity must be positive");

        let (command_tx, command_rx) = bounded(capacity);
        let (status_tx, status_rx) = unbounded();

        (
            Self {
                commands: command_tx,
                status: status_rx,
                music_playing: false,
            },
            AudioBackend {
                commands: command_rx,
                status: status_tx,
            },
        )
    }

    fn send(&self, command: AudioCommand) -> bool {
        match self.commands.try_send(command) {
            Ok(()) => true,
            Err(TrySendError::Full(command)) => {
                warn!(target: "audio", "Audio backlog full, dropping {:?}", command);
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                trace!(target: "audio", "Audio backend gone, request ignored");
                false
            }
        }
    }

    /// Applies every status report received so far.
    fn drain_status(&mut self) {
        loop {
            match self.status.try_recv() {
                Ok(AudioStatus::MusicFinished) => self.music_playing = false,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.music_playing = false;
                    break;
                }
            }
        }
    }
}

impl Audio for ChannelAudio {
    fn play_sfx(&mut self, name: &str) {
        self.send(AudioCommand::PlaySfx(name.to_owned()));
    }

    fn play_music(&mut self, name: &str, loops: i32) {
        // Reports queued so far belong to the track being replaced.
        self.drain_status();
        self.music_playing = self.send(AudioCommand::PlayMusic {
            name: name.to_owned(),
            loops,
        });
    }

    fn is_music_playing(&mut self) -> bool {
        self.drain_status();
        self.music_playing
    }
}

//=== SilentAudio =========================================================

/// Plays nothing. Music is never playing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl Audio for SilentAudio {
    fn play_sfx(&mut self, _name: &str) {}

    fn play_music(&mut self, _name: &str, _loops: i32) {}

    fn is_music_playing(&mut self) -> bool {
        false
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
