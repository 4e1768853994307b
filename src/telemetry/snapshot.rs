//! Immutable run summary.
//!
//! Design notes:
//! - Raw counters are copied verbatim; derived figures (ratios, throughput)
//!   are computed once at freeze time so the snapshot is self-contained.
//! - Serde-serializable for report sinks and test assertions.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::TelemetryTimer;

/// Core telemetry snapshot.
/// Captures counters, derived ratios, throughput, and elapsed duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub segments_processed: u64,
    pub messages_recognized: u64,
    pub blocks_emitted: u64,
    pub bytes_payload: u64,
    pub bytes_recognized: u64,
    pub bytes_discarded: u64,
    pub headers_skipped: u64,
    /// Fraction of payload bytes that landed inside a recognized message.
    pub recognition_ratio: f64,
    pub blocks_per_message: f64,
    pub throughput_bytes_per_sec: f64,
    pub elapsed: Duration,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();

        let mut recognition_ratio = if counters.bytes_payload > 0 {
            counters.bytes_recognized as f64 / counters.bytes_payload as f64
        } else {
            0.0
        };
        recognition_ratio = recognition_ratio.min(1.0);

        let blocks_per_message = if counters.messages_recognized > 0 {
            counters.blocks_emitted as f64 / counters.messages_recognized as f64
        } else {
            0.0
        };

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_payload as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            segments_processed: counters.segments_processed,
            messages_recognized: counters.messages_recognized,
            blocks_emitted: counters.blocks_emitted,
            bytes_payload: counters.bytes_payload,
            bytes_recognized: counters.bytes_recognized,
            bytes_discarded: counters.bytes_discarded,
            headers_skipped: counters.headers_skipped,
            recognition_ratio,
            blocks_per_message,
            throughput_bytes_per_sec: throughput,
            elapsed,
        }
    }

    /// Validates internal invariants:
    /// - every payload byte is recognized or discarded
    /// - each recognized message produced at least one block
    /// - recognition_ratio <= 1.0
    pub fn sanity_check(&self) -> bool {
        self.bytes_recognized + self.bytes_discarded == self.bytes_payload
            && self.blocks_emitted >= self.messages_recognized
            && self.recognition_ratio <= 1.0
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
