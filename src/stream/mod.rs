//! Stream driving: payload sources, block sinks, and the framer loop.
//!
//! Internals are strictly layered: `io` normalizes where payloads come from
//! and where block records go, `core` owns the per-payload cursor loop.

pub mod core;
pub mod io;

pub use self::core::{pack_stream, pack_stream_captured, StreamFramer};
pub use io::{BlockLineWriter, OutputSink, PayloadSource};
