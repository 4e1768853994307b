//! Unified telemetry module: counters, timer, and immutable snapshots.
//!
//! Counters are mutated while a run is in flight and frozen into an immutable
//! `TelemetrySnapshot` when the stream ends. The snapshot is what callers use
//! for summary reporting.

pub mod counters;
pub mod snapshot;
pub mod timers;

pub use counters::*;
pub use snapshot::*;
pub use timers::*;
