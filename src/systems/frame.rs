//! Frame timing

use std::time::Instant;

/// Longest frame step handed to the simulation, seconds. Tab-outs and
/// breakpoint pauses produce one capped step instead of a giant jump.
pub const MAX_FRAME_STEP: f32 = 0.25;

/// Produces capped per-frame deltas from wall-clock time.
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous tick, capped at [`MAX_FRAME_STEP`].
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> f32 {
        let raw = (now - self.last).as_secs_f32();
        self.last = now;
        raw.min(MAX_FRAME_STEP)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
