//! Frame pacing for the main loop.

use std::thread;
use std::time::{Duration, Instant};

/// Keeps the loop near a target frame rate.
///
/// Each call to [`FrameClock::tick`] sleeps off whatever is left of the current
/// frame and reports the wall time since the previous call. Pacing is
/// best-effort: a slow frame is never made up for later.
pub struct FrameClock {
    frame: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            last: Instant::now(),
        }
    }

    /// Time left in the current frame.
    pub fn remaining(&self) -> Duration {
        self.frame.saturating_sub(self.last.elapsed())
    }

    /// Wait for the frame to finish, returning elapsed milliseconds.
    pub fn tick(&mut self) -> u64 {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed.as_millis() as u64
    }
}
