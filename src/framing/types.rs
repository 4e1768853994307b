use std::fmt;

use crate::constants::{DEFAULT_BUS_WIDTH_BITS, MAX_BUS_WIDTH_BITS};

/// Bus sizing, fixed at startup.
///
/// All fields are in bits; the packetizer works in whole bytes, so the width
/// must be a non-zero multiple of 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusConfig {
    pub bus_width_bits: usize,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            bus_width_bits: DEFAULT_BUS_WIDTH_BITS,
        }
    }
}

impl BusConfig {
    pub fn new(bus_width_bits: usize) -> Self {
        Self { bus_width_bits }
    }

    /// Reject widths the bus cannot express as whole bytes.
    pub fn validate(&self) -> Result<(), FrameError> {
        if self.bus_width_bits == 0
            || self.bus_width_bits % 8 != 0
            || self.bus_width_bits > MAX_BUS_WIDTH_BITS
        {
            return Err(FrameError::InvalidBusWidth(self.bus_width_bits));
        }
        Ok(())
    }

    /// Block size in bytes. Only meaningful after `validate()`.
    #[inline(always)]
    pub const fn block_size(&self) -> usize {
        self.bus_width_bits / 8
    }
}

/// One fixed-width bus beat: `data` padded to the block size, a parallel
/// per-byte `strobe` mask (0xFF valid, 0x00 padding), and the end-of-message
/// flag. Buffers are allocated at exactly the block size and never grown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub data: Box<[u8]>,
    pub strobe: Box<[u8]>,
    pub is_last: bool,
}

impl Block {
    /// Count of real message bytes in this block. Valid bytes are always a
    /// leading run, so the strobe prefix length is the answer.
    pub fn valid_len(&self) -> usize {
        self.strobe.iter().take_while(|b| **b == 0xFF).count()
    }

    /// The non-padding portion of `data`.
    pub fn valid_bytes(&self) -> &[u8] {
        &self.data[..self.valid_len()]
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum FrameError {
    /// Begin-marker found but the length field or its delimiter is missing or
    /// unparseable within the lookahead window.
    MalformedHeader { anchor: usize },

    /// Declared length points past the available bytes.
    IncompleteMessage { expected_end: usize, available: usize },

    /// Trailer shape absent at the computed end offset.
    TrailerMismatch { anchor: usize },

    /// No begin-marker in the remaining buffer.
    NoMessageFound,

    /// Bus width is zero, not a multiple of 8, or over the sanity bound.
    InvalidBusWidth(usize),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use FrameError::*;
        match self {
            MalformedHeader { anchor } =>
                write!(f, "malformed header at offset {}", anchor),
            IncompleteMessage { expected_end, available } =>
                write!(f, "incomplete message: expected end {}, {} bytes available", expected_end, available),
            TrailerMismatch { anchor } =>
                write!(f, "trailer mismatch for message at offset {}", anchor),
            NoMessageFound =>
                write!(f, "no message found"),
            InvalidBusWidth(bits) =>
                write!(f, "invalid bus width: {} bits", bits),
        }
    }
}

impl std::error::Error for FrameError {}
