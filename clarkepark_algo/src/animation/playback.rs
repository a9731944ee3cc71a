// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

use std::time::Duration;

/// Maps elapsed wall-clock time onto a frame index. Holds no clock of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Playback {
    frame_count: usize,
    interval: Duration,
    repeat: bool,
}

impl Playback {
    /// 20 ms per frame, 8 s for the default 401-sample grid.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(20);

    /// Bounds applied to the frame interval.
    pub const MIN_INTERVAL: Duration = Duration::from_millis(1);
    pub const MAX_INTERVAL: Duration = Duration::from_secs(60);

    /// `interval` is clamped to `MIN_INTERVAL..=MAX_INTERVAL`.
    pub fn new(frame_count: usize, interval: Duration, repeat: bool) -> Self {
        Self {
            frame_count,
            interval: interval.clamp(Self::MIN_INTERVAL, Self::MAX_INTERVAL),
            repeat,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Frame due after `elapsed`. Loops when repeating, otherwise holds the last frame.
    pub fn frame_at(&self, elapsed: Duration) -> usize {
        if self.frame_count == 0 {
            return 0;
        }
        let ticks = elapsed.as_nanos() / self.interval.as_nanos();
        let count = self.frame_count as u128;
        let index = if self.repeat {
            ticks % count
        } else {
            ticks.min(count - 1)
        };
        index as usize
    }

    /// Time left until the frame after the one due at `elapsed`.
    pub fn until_next(&self, elapsed: Duration) -> Duration {
        let into_frame = elapsed.as_nanos() % self.interval.as_nanos();
        // Below the interval, so it fits in u64 nanoseconds
        self.interval - Duration::from_nanos(into_frame as u64)
    }
}
