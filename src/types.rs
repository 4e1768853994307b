use std::io;

use crate::framing::FrameError;

/// Unified framer error covering I/O, configuration, and frame-level failures.
/// - Ergonomic `From<T>` impls enable `?` across the pipeline.
/// - Messages aim to be stable and contextual for telemetry and logs.
#[derive(Debug)]
pub enum FramerError {
    /// I/O error while reading payloads or writing block records.
    Io(io::Error),

    /// Frame-level error (validation or parse).
    Frame(FrameError),

    /// Generic high-level validation with a descriptive message.
    Validation(String),
}

impl std::fmt::Display for FramerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FramerError::Io(e) => write!(f, "I/O error: {}", e),
            FramerError::Frame(e) => write!(f, "frame error: {}", e),
            FramerError::Validation(msg) => write!(f, "validation error: {}", msg),
        }
    }
}

impl std::error::Error for FramerError {}

impl From<io::Error> for FramerError {
    fn from(e: io::Error) -> Self {
        FramerError::Io(e)
    }
}

impl From<FrameError> for FramerError {
    fn from(e: FrameError) -> Self {
        FramerError::Frame(e)
    }
}
