//! raw.rs
//!
//! Pre-encoded values and slice inspection.
//!
//! Design notes:
//! - `Raw` carries one complete encoding. It is written verbatim and read back verbatim,
//!   which lets callers embed child encodings (trie nodes, cached items) without a
//!   decode/encode round trip.
//! - Both constructors validate every nested header, so a `Raw` is always canonical.
//! - The `split*` helpers look at an in-memory encoding without a `Stream`. They check
//!   the header of the value they split off, not its children, and return sub-slices.

use std::fmt;
use std::io::Read;

use crate::decode::prefix::{check_wrapped_byte, classify, long_size, Lead};
use crate::decode::{Decode, Stream, StreamConfig};
use crate::encode::primitives::header_len;
use crate::encode::{encode_to_vec, Encode, Sink};
use crate::types::{Kind, Result, RlpError};
use crate::utils::{fmt_bytes, uint_from_be};

/// One complete, canonical encoding.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Raw(Vec<u8>);

impl Raw {
    /// Wrap `encoded` after checking that it holds exactly one canonical value.
    pub fn from_encoded(encoded: Vec<u8>) -> Result<Self> {
        Self::from_encoded_with(encoded, StreamConfig::default())
    }

    /// Like [`Raw::from_encoded`], with explicit size and depth limits.
    pub fn from_encoded_with(encoded: Vec<u8>, config: StreamConfig) -> Result<Self> {
        {
            let mut stream = Stream::from_slice(&encoded, config);
            stream.skip()?;
            if !stream.at_input_end() {
                return Err(RlpError::TrailingData {
                    boundary: stream.position(),
                    cursor: encoded.len() as u64,
                });
            }
        }
        Ok(Self(encoded))
    }

    /// Encode `value` and keep the result.
    pub fn of<T: Encode + ?Sized>(value: &T) -> Result<Self> {
        encode_to_vec(value).and_then(Self::from_encoded)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }

    pub fn kind(&self) -> Kind {
        match classify(self.0[0]) {
            Lead::Byte(_) => Kind::String,
            Lead::Short { kind, .. } | Lead::Long { kind, .. } => kind,
        }
    }

    /// Decode the wrapped encoding as `T`.
    pub fn decode_as<T: Decode>(&self) -> Result<T> {
        crate::decode::decode_bytes(&self.0)
    }
}

impl fmt::Debug for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Raw({})", fmt_bytes(&self.0))
    }
}

impl AsRef<[u8]> for Raw {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Encode for Raw {
    #[inline]
    fn encode(&self, sink: &mut Sink) -> Result<()> {
        sink.write_raw(&self.0);
        Ok(())
    }
}

impl Decode for Raw {
    #[inline]
    fn decode<R: Read>(stream: &mut Stream<R>) -> Result<Self> {
        stream.raw().map(Self)
    }
}

// -----------------------------------------------------------------------------
// Slice helpers
// -----------------------------------------------------------------------------

/// Split the first value off `b`: its kind, its payload, and whatever follows it.
pub fn split(b: &[u8]) -> Result<(Kind, &[u8], &[u8])> {
    let (kind, offset, size) = read_header(b)?;
    let end = offset + size;
    Ok((kind, &b[offset..end], &b[end..]))
}

/// Like [`split`], but the value must be a string.
pub fn split_string(b: &[u8]) -> Result<(&[u8], &[u8])> {
    match split(b)? {
        (Kind::String, content, rest) => Ok((content, rest)),
        (found, _, _) => Err(RlpError::TypeMismatch {
            expected: Kind::String,
            found,
        }),
    }
}

/// Like [`split`], but the value must be a list.
pub fn split_list(b: &[u8]) -> Result<(&[u8], &[u8])> {
    match split(b)? {
        (Kind::List, content, rest) => Ok((content, rest)),
        (found, _, _) => Err(RlpError::TypeMismatch {
            expected: Kind::List,
            found,
        }),
    }
}

/// Split off a canonical integer of at most eight bytes.
pub fn split_uint(b: &[u8]) -> Result<(u64, &[u8])> {
    let (content, rest) = split_string(b)?;
    if content.len() > 8 {
        return Err(RlpError::IntegerOverflow {
            size: content.len(),
            max: 8,
        });
    }
    if content.first() == Some(&0) {
        return Err(RlpError::NonCanonicalInteger);
    }
    Ok((uint_from_be(content) as u64, rest))
}

/// Number of values in a list payload.
pub fn count_values(mut payload: &[u8]) -> Result<usize> {
    let mut n = 0;
    while !payload.is_empty() {
        let (_, _, rest) = split(payload)?;
        payload = rest;
        n += 1;
    }
    Ok(n)
}

/// Encoded size of a list whose payload is `payload_len` bytes.
#[inline]
pub fn list_size(payload_len: usize) -> usize {
    header_len(payload_len) + payload_len
}

/// Kind, payload offset and payload size of the value at the front of `b`.
fn read_header(b: &[u8]) -> Result<(Kind, usize, usize)> {
    let lead = *b.first().ok_or(RlpError::UnexpectedEof)?;
    let (kind, offset, size) = match classify(lead) {
        Lead::Byte(_) => (Kind::String, 0, 1),
        Lead::Short { kind: Kind::String, size: 1 } => {
            let byte = *b.get(1).ok_or(RlpError::UnexpectedEof)?;
            check_wrapped_byte(byte, 0)?;
            (Kind::String, 1, 1)
        }
        Lead::Short { kind, size } => (kind, 1, size as usize),
        Lead::Long { kind, len_of_len } => {
            let len_bytes = b.get(1..1 + len_of_len).ok_or(RlpError::UnexpectedEof)?;
            let size = long_size(len_bytes, 0)?;
            let size = usize::try_from(size).map_err(|_| RlpError::UnexpectedEof)?;
            (kind, 1 + len_of_len, size)
        }
    };
    if size > b.len() - offset {
        return Err(RlpError::UnexpectedEof);
    }
    Ok((kind, offset, size))
}
