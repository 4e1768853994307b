//! fixbus-core
//!
//! Pure Rust FIX stream framer.
//! Carves complete FIX messages out of transport payloads and repacks them
//! into fixed-width, byte-strobe-annotated blocks for a hardware data bus.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Shared and top level module
pub mod telemetry;

// Stream layers
pub mod framing;
pub mod stream;

pub use framing::{Block, BlockPacketizer, BusConfig, find_message_end};
pub use stream::{pack_stream, OutputSink, PayloadSource, StreamFramer};
pub use telemetry::TelemetrySnapshot;
pub use types::FramerError;
