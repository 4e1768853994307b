//! Message framing for the bus packing pipeline.
//!
//! Responsibilities:
//! - Locate message boundaries in raw payload bytes
//! - Split complete messages into fixed-width, strobe-annotated blocks
//! - Validate bus configuration
//!
//! Non-responsibilities:
//! - Transport/payload acquisition
//! - IO
//! - Telemetry aggregation

pub mod packetize;
pub mod scan;
pub mod types;

pub use packetize::BlockPacketizer;
pub use scan::{find_message_end, scan_next, Scan};
pub use types::{Block, BusConfig, FrameError};
