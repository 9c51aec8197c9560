//=========================================================================
// Event Collector
//=========================================================================
//
// Logic-thread end of the platform channel.
//
// The window thread sends one `Inputs` message per redraw carrying the
// keys pressed and released since the last one. At the top of every tick
// the collector empties the channel into `key_batches`, which the
// orchestrator then hands to the input system in arrival order.
//
//   Platform ── Inputs(keys) / WindowClosed ──→ collect_frame()
//                                                 ├─ key_batches
//                                                 └─ TickControl
//
// A tick reads at most MAX_MESSAGES_PER_TICK messages; anything left
// waits for the next tick, so a burst of redraws cannot stall the game.
// Closing the window or dropping the sender ends the logic loop.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::event::InputEvent;

//=== TickControl =========================================================

/// Whether the logic loop keeps running after this tick's messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    key_batches: Vec<Vec<InputEvent>>,
}

impl EventCollector {
    const MAX_MESSAGES_PER_TICK: usize = 100;

    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            key_batches: Vec::new(),
        }
    }

    /// Reads this tick's messages. Returns `Exit` as soon as the window
    /// is gone; key batches read before that are discarded with it.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.key_batches.clear();

        for read in 0..Self::MAX_MESSAGES_PER_TICK {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Inputs(keys)) if keys.is_empty() => {}
                Ok(PlatformEvent::Inputs(keys)) => self.key_batches.push(keys),
                Ok(PlatformEvent::WindowClosed) => return TickControl::Exit,
                Err(TryRecvError::Empty) => {
                    if read > 0 {
                        debug!("{} key batches this tick", self.key_batches.len());
                    }
                    return TickControl::Continue;
                }
                Err(TryRecvError::Disconnected) => {
                    debug!("Platform channel disconnected");
                    return TickControl::Exit;
                }
            }
        }

        warn!(
            "Platform backlog: {} messages read, the rest wait for the next tick",
            Self::MAX_MESSAGES_PER_TICK
        );
        TickControl::Continue
    }

    /// Hands over this tick's key batches, oldest first.
    pub(crate) fn take_batches(&mut self) -> Vec<Vec<InputEvent>> {
        std::mem::take(&mut self.key_batches)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
