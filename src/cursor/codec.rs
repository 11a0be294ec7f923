//! Cursor encoding and decoding
//!
//! The wire format is base64 (standard alphabet, padded) of the decimal
//! string representation of the offset. `MA==` is offset 0, `MQ==` is
//! offset 1, and so on.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{Error, Result};

/// Encode a zero-based offset as an opaque cursor token
///
/// Encoding is deterministic: the same offset always produces the same
/// token, and distinct offsets produce distinct tokens.
pub fn encode(offset: u64) -> String {
    STANDARD.encode(offset.to_string())
}

/// Decode an opaque cursor token back to its offset
///
/// Fails with [`Error::EmptyCursor`] on an empty token and with
/// [`Error::InvalidCursor`] when the token is not valid base64 or its
/// payload is not a non-negative integer. The offending raw token is
/// echoed in the error message.
pub fn decode(cursor: &str) -> Result<u64> {
    if cursor.is_empty() {
        return Err(Error::EmptyCursor);
    }

    let bytes = STANDARD
        .decode(cursor)
        .map_err(|_| Error::invalid_cursor(cursor))?;
    let payload = String::from_utf8(bytes).map_err(|_| Error::invalid_cursor(cursor))?;

    payload
        .parse::<u64>()
        .map_err(|_| Error::invalid_cursor(cursor))
}
