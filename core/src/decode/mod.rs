//! Decode side of the codec.
//!
//! Responsibilities:
//! - Header validation (canonical prefixes only)
//! - `Stream`: a bounded, depth-limited cursor over one input
//! - `Decode` dispatch: custom hooks or structural fallback
//!
//! Decoding never trusts a declared length: sizes are checked against the
//! configured limits, the enclosing list, and the input before anything is read.

pub mod config;
pub(crate) mod prefix;
pub mod stream;
pub mod traits;

use std::io::Read;

pub use config::{ConfigError, StreamConfig};
pub use stream::Stream;
pub use traits::Decode;

use crate::types::{Result, RlpError};

/// Decode a complete value from `input` with default limits.
///
/// The input must hold exactly one value; anything after it is `TrailingData`.
pub fn decode_bytes<T: Decode>(input: &[u8]) -> Result<T> {
    decode_bytes_with(input, StreamConfig::default())
}

/// Decode a complete value from `input` under `config`.
pub fn decode_bytes_with<T: Decode>(input: &[u8], config: StreamConfig) -> Result<T> {
    let mut stream = Stream::from_slice(input, config);
    let value = T::decode(&mut stream)?;
    finish(&stream, input.len() as u64)?;
    Ok(value)
}

/// Decode a single value from the front of `reader`. Bytes after it are left unread.
pub fn decode_reader<R: Read, T: Decode>(reader: R, config: StreamConfig) -> Result<T> {
    let mut stream = Stream::new(reader, config);
    let value = T::decode(&mut stream)?;
    if stream.depth() != 0 {
        return Err(RlpError::hook("decode routine left a list open"));
    }
    Ok(value)
}

fn finish<R: Read>(stream: &Stream<R>, input_len: u64) -> Result<()> {
    if stream.depth() != 0 {
        return Err(RlpError::hook("decode routine left a list open"));
    }
    if !stream.at_input_end() {
        let cursor = stream.position();
        tracing::debug!(boundary = input_len, cursor, "input continues after value");
        return Err(RlpError::TrailingData {
            boundary: input_len,
            cursor,
        });
    }
    Ok(())
}
