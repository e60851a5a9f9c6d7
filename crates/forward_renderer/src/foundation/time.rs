//! Frame timing

use std::time::Instant;

/// Source of per-frame deltas for the frame updater
///
/// A fixed clock replays the same step every tick, which keeps animation
/// deterministic; a measured clock reports wall time since the last tick.
pub struct FrameClock {
    fixed_delta: Option<f32>,
    last_tick: Instant,
    total_time: f32,
    ticks: u64,
}

impl FrameClock {
    /// Clock measuring wall time between ticks
    pub fn measured() -> Self {
        Self {
            fixed_delta: None,
            last_tick: Instant::now(),
            total_time: 0.0,
            ticks: 0,
        }
    }

    /// Clock advancing by `delta` seconds every tick
    pub fn fixed(delta: f32) -> Self {
        Self {
            fixed_delta: Some(delta),
            ..Self::measured()
        }
    }

    /// Advance one frame and return its delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = self
            .fixed_delta
            .unwrap_or_else(|| now.duration_since(self.last_tick).as_secs_f32());
        self.last_tick = now;
        self.total_time += delta;
        self.ticks += 1;
        delta
    }

    /// Sum of all deltas handed out
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Number of ticks so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Ticks per second of clock time
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.ticks as f32 / self.total_time
        } else {
            0.0
        }
    }
}

/// Wall-clock time since creation
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    /// Start measuring now
    pub fn start() -> Self {
        Self { started: Instant::now() }
    }

    /// Elapsed wall time in milliseconds
    pub fn elapsed_millis(&self) -> f32 {
        self.started.elapsed().as_secs_f32() * 1000.0
    }
}
