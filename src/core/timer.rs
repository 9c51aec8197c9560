//=========================================================================
// Frame Timer
//=========================================================================
//
// Frame timing for the logic thread.
//
// Each loop iteration calls `tick()` once at the top of the frame; the
// returned delta feeds the game and `remaining()` tells the loop how long
// to sleep before the next frame is due.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::{Duration, Instant};

//=== FrameTimer ==========================================================

/// Measures the time between consecutive ticks of the logic loop.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    last: Instant,
    delta: f32,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            delta: 0.0,
        }
    }

    /// Seconds since the previous tick (or since construction).
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.delta = sanitize_delta(now.saturating_duration_since(self.last).as_secs_f32());
        self.last = now;
        self.delta
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Time left before a frame of length `frame_time`, started at the
    /// last tick, is over. Zero once the frame has overrun.
    pub fn remaining(&self, frame_time: Duration) -> Duration {
        frame_time.saturating_sub(self.last.elapsed())
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

//=== Delta Sanitizing ====================================================

/// Clamps a frame delta to a finite, non-negative value.
#[inline]
pub fn sanitize_delta(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        0.0
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
