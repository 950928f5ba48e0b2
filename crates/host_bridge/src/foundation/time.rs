//! Time management utilities

use std::sync::OnceLock;
use std::time::{Duration, Instant};

/// Measures the interval between rendered frames
///
/// Engines are paused for arbitrarily long stretches between `deactivate` and
/// `activate`. The step handed out is capped at `max_step` so a resumed
/// simulation does not jump, and [`reset`](Self::reset) forgets the gap.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_tick: Instant,
    step: Duration,
    max_step: Duration,
    ticks: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

impl FrameClock {
    /// Create a clock capping each step at `max_step`
    pub fn new(max_step: Duration) -> Self {
        Self {
            last_tick: Instant::now(),
            step: Duration::ZERO,
            max_step,
            ticks: 0,
        }
    }

    /// Start measuring from now; the next step covers only time after this
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
        self.step = Duration::ZERO;
    }

    /// Advance one frame and return its step in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.step = now.duration_since(self.last_tick).min(self.max_step);
        self.last_tick = now;
        self.ticks += 1;
        self.step.as_secs_f32()
    }

    /// Step of the last tick in seconds
    pub fn step(&self) -> f32 {
        self.step.as_secs_f32()
    }

    /// Frames ticked since creation
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }
}

static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Monotonic time in nanoseconds since the first call in this process
///
/// Platforms report sensor timestamps in nanoseconds; this is the matching
/// clock for hosts that have to synthesize them.
#[allow(clippy::cast_possible_truncation)]
pub fn time_ns() -> u64 {
    let epoch = EPOCH.get_or_init(Instant::now);
    epoch.elapsed().as_nanos() as u64
}
