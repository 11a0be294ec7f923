//! Cursor codec
//!
//! Encodes and decodes opaque pagination cursors. A cursor is the base64
//! representation of a zero-based result-set offset; clients must treat it
//! as an opaque token and hand it back unchanged.

mod codec;

pub use codec::{decode, encode};
