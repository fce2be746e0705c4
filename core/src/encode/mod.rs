//! Encode side of the codec.
//!
//! Responsibilities:
//! - Primitive encoders for strings and unsigned integers
//! - Composite list encoding over already-encoded items
//! - `Encode` dispatch: custom hooks or structural fallback
//!
//! Encoding is a pure transformation with no shared state; independent encodes
//! can run in parallel without coordination.

pub mod primitives;
pub mod sink;
pub mod traits;

use std::io::Write;

pub use primitives::{encode_list, encode_string, encode_uint};
pub use sink::Sink;
pub use traits::Encode;

use crate::types::Result;

/// Encode `value` into a fresh byte vector.
pub fn encode_to_vec<T: Encode + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut sink = Sink::new();
    value.encode(&mut sink)?;
    sink.finish()
}

/// Encode `value` and write it to `w`.
pub fn encode_to_writer<W: Write, T: Encode + ?Sized>(w: &mut W, value: &T) -> Result<()> {
    let mut sink = Sink::new();
    value.encode(&mut sink)?;
    sink.write_to(w)
}

/// Size in bytes of the encoding of `value`.
pub fn encoded_len<T: Encode + ?Sized>(value: &T) -> Result<usize> {
    let mut sink = Sink::new();
    value.encode(&mut sink)?;
    sink.check_closed()?;
    Ok(sink.len())
}
