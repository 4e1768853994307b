//! Stable public API: the framer driver loop and the stream entry point.

use log::{debug, warn};

use crate::framing::{scan_next, Block, BlockPacketizer, BusConfig, FrameError};
use crate::stream::io::{open_output, open_source, BlockLineWriter, OutputSink, PayloadSource};
use crate::telemetry::{TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::FramerError;

/// Drives the scanner and packetizer over one payload at a time.
///
/// Payloads are independent: only run counters survive between calls, so
/// ordering of emitted blocks follows payload arrival order and, within a
/// payload, message order left to right.
pub struct StreamFramer {
    packetizer: BlockPacketizer,
    counters: TelemetryCounters,
}

impl StreamFramer {
    pub fn new(config: &BusConfig) -> Result<Self, FramerError> {
        let packetizer = BlockPacketizer::new(config)?;
        Ok(Self {
            packetizer,
            counters: TelemetryCounters::default(),
        })
    }

    pub fn counters(&self) -> &TelemetryCounters {
        &self.counters
    }

    /// Frame every complete message in `payload`, emitting blocks in order.
    ///
    /// Trailing bytes that do not form a complete message are discarded; no
    /// partial message is carried into the next payload.
    pub fn process_payload<F>(
        &mut self,
        segment_index: u64,
        payload: &[u8],
        mut emit: F,
    ) -> Result<(), FramerError>
    where
        F: FnMut(&Block) -> Result<(), FramerError>,
    {
        if payload.is_empty() {
            return Ok(());
        }
        self.counters.add_segment(payload.len());

        let mut cursor = 0usize;
        while cursor < payload.len() {
            let scan = scan_next(&payload[cursor..]);
            self.counters.add_skipped_anchors(scan.anchors_skipped);

            match scan.end {
                Ok(end) => {
                    let message = &payload[cursor..cursor + end];
                    let blocks = self.packetizer.packetize(message);
                    self.counters.add_message(message.len(), blocks.len());
                    for block in &blocks {
                        emit(block)?;
                    }
                    cursor += end;
                }
                Err(e) => {
                    let dropped = payload.len() - cursor;
                    match e {
                        FrameError::IncompleteMessage {
                            expected_end,
                            available,
                        } => {
                            // Known limitation: a message split across
                            // segments is lost here, not stitched.
                            warn!(
                                "segment {}: dropping {} trailing bytes of incomplete message (expected end {}, available {})",
                                segment_index, dropped, expected_end, available
                            );
                        }
                        _ => {
                            debug!(
                                "segment {}: no message in remaining {} bytes",
                                segment_index, dropped
                            );
                        }
                    }
                    self.counters.add_discarded(dropped);
                    break;
                }
            }
        }
        Ok(())
    }

    pub fn into_snapshot(self, timer: &TelemetryTimer) -> TelemetrySnapshot {
        TelemetrySnapshot::from(&self.counters, timer)
    }
}

/// Frame an entire stream of payloads into block records.
///
/// Validates the bus configuration, normalizes I/O, drives the framer over
/// every payload in order, and returns the run summary.
pub fn pack_stream(
    source: PayloadSource,
    sink: OutputSink,
    config: &BusConfig,
) -> Result<TelemetrySnapshot, FramerError> {
    let (snapshot, _) = run_pipeline(source, sink, config, false)?;
    Ok(snapshot)
}

/// Same as [`pack_stream`] with `OutputSink::Memory`, returning the captured
/// record bytes alongside the snapshot. Intended for tests and benchmarks.
pub fn pack_stream_captured(
    source: PayloadSource,
    config: &BusConfig,
) -> Result<(TelemetrySnapshot, Vec<u8>), FramerError> {
    let (snapshot, maybe_buf) = run_pipeline(source, OutputSink::Memory, config, true)?;
    let captured = match maybe_buf {
        Some(buf) => {
            let guard = buf
                .lock()
                .map_err(|_| FramerError::Validation("capture buffer poisoned".into()))?;
            guard.clone()
        }
        None => Vec::new(),
    };
    Ok((snapshot, captured))
}

fn run_pipeline(
    source: PayloadSource,
    sink: OutputSink,
    config: &BusConfig,
    with_buf: bool,
) -> Result<
    (
        TelemetrySnapshot,
        Option<std::sync::Arc<std::sync::Mutex<Vec<u8>>>>,
    ),
    FramerError,
> {
    config.validate()?;

    let timer = TelemetryTimer::start();
    let (writer, maybe_buf) = open_output(sink, with_buf)?;
    let mut records = BlockLineWriter::new(writer);
    let mut framer = StreamFramer::new(config)?;

    for (segment_index, payload) in open_source(source) {
        if payload.is_empty() {
            continue;
        }
        framer.process_payload(segment_index, &payload, |block| records.write_block(block))?;
    }
    records.flush()?;

    Ok((framer.into_snapshot(&timer), maybe_buf))
}
