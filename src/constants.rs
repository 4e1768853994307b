//! Protocol literals and bus sizing defaults.

/// Begin-marker anchoring every FIX message: `8=FIX` (version digits follow).
pub const BEGIN_MARKER: &[u8] = b"8=FIX";

/// BodyLength tag prefix; its value is the byte count between the SOH that
/// terminates this field and the trailer.
pub const LENGTH_TAG: &[u8] = b"9=";

/// CheckSum tag prefix, always the final field of a message.
pub const TRAILER_TAG: &[u8] = b"10=";

/// Field delimiter (SOH).
pub const SOH: u8 = 0x01;

/// Total trailer size on the wire: `10=XXX\x01`.
pub const TRAILER_LEN: usize = 7;

/// The length tag must appear within this many bytes of the begin-marker.
/// Candidates with the tag further out are treated as malformed, not retried
/// indefinitely at the same anchor.
pub const HEADER_LOOKAHEAD: usize = 20;

/// Defaults when Option<T> is None
pub const DEFAULT_BUS_WIDTH_BITS: usize = 512;

/// Max bus width sanity bound (64 KiB blocks).
pub const MAX_BUS_WIDTH_BITS: usize = 64 * 1024 * 8;
