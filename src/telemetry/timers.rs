//! Wall-clock timing for a framing run.

use std::time::{Duration, Instant};

/// Started when the run begins, read once when the snapshot is taken.
#[derive(Debug, Clone, Copy)]
pub struct TelemetryTimer {
    started: Instant,
}

impl TelemetryTimer {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
