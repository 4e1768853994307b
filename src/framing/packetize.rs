//! Block packetizing.
//!
//! One complete message in, `ceil(len / block_size)` fixed-width blocks out.
//! The final partial block is zero-padded and its strobe mask marks the
//! padding invalid; only the last block of a message carries `is_last`.

use crate::framing::types::{Block, BusConfig, FrameError};

/// Splits messages into bus-width blocks. Total and deterministic: a
/// well-formed message never fails, an empty message yields no blocks.
#[derive(Debug, Clone, Copy)]
pub struct BlockPacketizer {
    block_size: usize,
}

impl BlockPacketizer {
    pub fn new(config: &BusConfig) -> Result<Self, FrameError> {
        config.validate()?;
        Ok(Self {
            block_size: config.block_size(),
        })
    }

    #[inline(always)]
    pub const fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn packetize(&self, message: &[u8]) -> Vec<Block> {
        let total = message.len().div_ceil(self.block_size);
        let mut out = Vec::with_capacity(total);

        for (index, chunk) in message.chunks(self.block_size).enumerate() {
            out.push(self.build_block(chunk, index + 1 == total));
        }
        out
    }

    fn build_block(&self, chunk: &[u8], is_last: bool) -> Block {
        let mut data = vec![0u8; self.block_size].into_boxed_slice();
        let mut strobe = vec![0u8; self.block_size].into_boxed_slice();

        data[..chunk.len()].copy_from_slice(chunk);
        strobe[..chunk.len()].fill(0xFF);

        Block {
            data,
            strobe,
            is_last,
        }
    }
}
