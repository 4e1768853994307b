//! Normalized I/O for the framing pipeline.
//!
//! Payload acquisition (capture parsing, transport reassembly) lives outside
//! this crate; a `PayloadSource` is just an ordered sequence of
//! `(segment_index, bytes)` pairs. On the way out, one text line per block in
//! emission order: `<data_hex>,<strobe_hex>,<is_last>`.

use std::io::{Cursor, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use bytes::Bytes;

use crate::framing::Block;
use crate::types::FramerError;

/// Canonical input abstraction
pub enum PayloadSource {
    /// Payloads already collected in order.
    Memory(Vec<(u64, Bytes)>),
    /// Caller-supplied ordered iterator.
    Iter(Box<dyn Iterator<Item = (u64, Bytes)> + Send>),
}

/// Canonical output abstraction
pub enum OutputSink {
    Writer(Box<dyn Write + Send>),
    File(PathBuf),
    Memory,
}

/// Normalize a payload source into an ordered iterator
pub fn open_source(src: PayloadSource) -> Box<dyn Iterator<Item = (u64, Bytes)> + Send> {
    match src {
        PayloadSource::Memory(v) => Box::new(v.into_iter()),
        PayloadSource::Iter(it) => it,
    }
}

/// Normalize an output sink into a boxed writer
pub fn open_output(
    sink: OutputSink,
    with_buf: bool,
) -> Result<(Box<dyn Write + Send>, Option<Arc<Mutex<Vec<u8>>>>), FramerError> {
    match sink {
        OutputSink::Writer(w) => Ok((w, None)),
        OutputSink::File(p) => Ok((Box::new(std::fs::File::create(p)?), None)),
        OutputSink::Memory => {
            if with_buf {
                let buf = Arc::new(Mutex::new(Vec::new()));
                let writer = SharedBufferWriter { buf: buf.clone() };
                Ok((Box::new(writer), Some(buf)))
            } else {
                let cursor = Cursor::new(Vec::new());
                Ok((Box::new(cursor), None))
            }
        }
    }
}

pub struct SharedBufferWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Write for SharedBufferWriter {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        let mut guard = self
            .buf
            .lock()
            .map_err(|_| std::io::Error::other("capture buffer poisoned"))?;
        guard.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// ================= Block records =================

/// Writes one line per block: lowercase hex data, lowercase hex strobe, and
/// the end-of-message flag as `0`/`1`.
pub struct BlockLineWriter<W: Write> {
    inner: W,
}

impl<W: Write> BlockLineWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_block(&mut self, block: &Block) -> Result<(), FramerError> {
        writeln!(
            self.inner,
            "{},{},{}",
            hex::encode(&block.data),
            hex::encode(&block.strobe),
            u8::from(block.is_last),
        )?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), FramerError> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
