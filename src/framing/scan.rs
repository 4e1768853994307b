//! Message boundary scanning.
//!
//! Length-prefixed framing over a SOH-delimited text protocol: anchor on the
//! begin-marker, read the declared body length, compute where the trailer must
//! sit, and verify its shape. Malformed candidates advance the anchor by one
//! byte and retry; the search cursor is monotonic, so the worst case is a
//! bounded linear rescan, never recursion.

use crate::constants::{
    BEGIN_MARKER, HEADER_LOOKAHEAD, LENGTH_TAG, SOH, TRAILER_LEN, TRAILER_TAG,
};
use crate::framing::types::FrameError;

/// Outcome of one scan pass over a buffer.
#[derive(Debug)]
pub struct Scan {
    /// Offset one past the final trailer delimiter of the first complete
    /// message, or the terminal condition that stopped the pass.
    pub end: Result<usize, FrameError>,
    /// Begin-marker anchors rejected as malformed before the pass ended.
    pub anchors_skipped: u64,
}

/// Offset one past the first complete message in `buffer`, or `None`.
pub fn find_message_end(buffer: &[u8]) -> Option<usize> {
    scan_next(buffer).end.ok()
}

/// Scan `buffer` for the first complete message.
///
/// Terminal errors distinguish "nothing left to find" from "a message has
/// started but its declared end is past the buffer"; callers that only need
/// the boundary can go through [`find_message_end`].
pub fn scan_next(buffer: &[u8]) -> Scan {
    let mut cursor = 0usize;
    let mut anchors_skipped = 0u64;

    loop {
        let anchor = match find_subslice(&buffer[cursor..], BEGIN_MARKER) {
            Some(rel) => cursor + rel,
            None => {
                return Scan {
                    end: Err(FrameError::NoMessageFound),
                    anchors_skipped,
                }
            }
        };

        match evaluate_candidate(buffer, anchor) {
            Ok(end) => {
                return Scan {
                    end: Ok(end),
                    anchors_skipped,
                }
            }
            Err(e @ FrameError::IncompleteMessage { .. }) => {
                // The caller must wait for more bytes or discard the rest;
                // retrying later anchors would reorder messages.
                return Scan {
                    end: Err(e),
                    anchors_skipped,
                };
            }
            Err(_) => {
                anchors_skipped += 1;
                cursor = anchor + 1;
            }
        }
    }
}

/// Evaluate the message candidate anchored at `anchor`.
///
/// Returns the absolute end offset on success. `MalformedHeader` and
/// `TrailerMismatch` mean the anchor is a false start; `IncompleteMessage`
/// means the buffer genuinely ends mid-message.
fn evaluate_candidate(buffer: &[u8], anchor: usize) -> Result<usize, FrameError> {
    let malformed = FrameError::MalformedHeader { anchor };

    // Length tag must sit within the lookahead window after the anchor.
    let window_end = buffer
        .len()
        .min(anchor + HEADER_LOOKAHEAD + LENGTH_TAG.len());
    let len_tag = match find_subslice(&buffer[anchor..window_end], LENGTH_TAG) {
        Some(rel) => anchor + rel,
        None => return Err(malformed),
    };

    // ASCII decimal digits between the tag and the next SOH.
    let value_start = len_tag + LENGTH_TAG.len();
    let soh = match buffer[value_start..].iter().position(|&b| b == SOH) {
        Some(rel) => value_start + rel,
        None => return Err(malformed),
    };
    let digits = &buffer[value_start..soh];
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(malformed);
    }
    let body_len: usize = match std::str::from_utf8(digits)
        .ok()
        .and_then(|s| s.parse().ok())
    {
        Some(n) => n,
        None => return Err(malformed),
    };
    if body_len == 0 {
        return Err(malformed);
    }

    // body starts one past the SOH; the trailer follows the body.
    let expected_end = match (soh + 1)
        .checked_add(body_len)
        .and_then(|n| n.checked_add(TRAILER_LEN))
    {
        Some(n) => n,
        None => return Err(malformed),
    };
    if expected_end > buffer.len() {
        return Err(FrameError::IncompleteMessage {
            expected_end,
            available: buffer.len(),
        });
    }

    // Structural trailer check only; the checksum value is not recomputed.
    let trailer_ok = buffer[expected_end - 1] == SOH
        && &buffer[expected_end - TRAILER_LEN..expected_end - 4] == TRAILER_TAG;
    if !trailer_ok {
        return Err(FrameError::TrailerMismatch { anchor });
    }

    Ok(expected_end)
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
