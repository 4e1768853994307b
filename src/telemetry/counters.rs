//! Mutable counters used while a stream is being framed.
//!
//! Collected per run and converted into an immutable TelemetrySnapshot at the
//! end of the stream.

/// Deterministic counters collected during stream processing
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct TelemetryCounters {
    pub segments_processed: u64,
    pub messages_recognized: u64,
    pub blocks_emitted: u64,
    pub bytes_payload: u64,
    pub bytes_recognized: u64,
    pub bytes_discarded: u64,
    pub headers_skipped: u64,
}

impl TelemetryCounters {
    /// Record one non-empty payload entering the framer.
    pub fn add_segment(&mut self, payload_len: usize) {
        self.segments_processed += 1;
        self.bytes_payload += payload_len as u64;
    }

    /// Record one recognized message and the blocks it produced.
    pub fn add_message(&mut self, message_len: usize, block_count: usize) {
        self.messages_recognized += 1;
        self.blocks_emitted += block_count as u64;
        self.bytes_recognized += message_len as u64;
    }

    /// Record trailing payload bytes dropped without a recognized message.
    pub fn add_discarded(&mut self, dropped_len: usize) {
        self.bytes_discarded += dropped_len as u64;
    }

    /// Record begin-marker anchors rejected as malformed during scanning.
    pub fn add_skipped_anchors(&mut self, count: u64) {
        self.headers_skipped += count;
    }

    /// Every payload byte is either recognized or discarded.
    pub fn is_consistent(&self) -> bool {
        self.bytes_recognized + self.bytes_discarded == self.bytes_payload
    }
}
