//! decode/prefix.rs
//!
//! Prefix classification shared by the streaming cursor and the slice helpers.
//! Every canonicality rule on headers lives here, so both paths reject the same inputs.

use byteorder::{BigEndian, ByteOrder};

use crate::constants::{
    LIST_LONG_OFFSET, LIST_OFFSET, SHORT_PAYLOAD_MAX, STRING_LONG_OFFSET, STRING_OFFSET,
};
use crate::types::{Kind, PrefixFault, Result, RlpError};

/// What the first byte of an encoding announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lead {
    /// `0x00..=0x7f`: the byte is its own payload.
    Byte(u8),
    /// Short form: payload length is in the prefix byte.
    Short { kind: Kind, size: u64 },
    /// Long form: `len_of_len` big-endian length bytes follow.
    Long { kind: Kind, len_of_len: usize },
}

#[inline]
pub(crate) fn classify(b: u8) -> Lead {
    match b {
        0x00..=0x7f => Lead::Byte(b),
        0x80..=0xb7 => Lead::Short {
            kind: Kind::String,
            size: (b - STRING_OFFSET) as u64,
        },
        0xb8..=0xbf => Lead::Long {
            kind: Kind::String,
            len_of_len: (b - STRING_LONG_OFFSET) as usize,
        },
        0xc0..=0xf7 => Lead::Short {
            kind: Kind::List,
            size: (b - LIST_OFFSET) as u64,
        },
        0xf8..=0xff => Lead::Long {
            kind: Kind::List,
            len_of_len: (b - LIST_LONG_OFFSET) as usize,
        },
    }
}

/// Decode and validate a long-form length. `offset` is the prefix position, for errors.
pub(crate) fn long_size(len_bytes: &[u8], offset: u64) -> Result<u64> {
    debug_assert!((1..=8).contains(&len_bytes.len()));
    if len_bytes[0] == 0 {
        return Err(malformed(offset, PrefixFault::LeadingZeroLength));
    }
    let size = BigEndian::read_uint(len_bytes, len_bytes.len());
    if size <= SHORT_PAYLOAD_MAX as u64 {
        return Err(malformed(offset, PrefixFault::ShortFormRequired));
    }
    Ok(size)
}

/// A `0x81` prefix is only legal in front of a byte that cannot encode itself.
#[inline]
pub(crate) fn check_wrapped_byte(b: u8, offset: u64) -> Result<()> {
    if b < STRING_OFFSET {
        return Err(malformed(offset, PrefixFault::SingleByteWrapped));
    }
    Ok(())
}

fn malformed(offset: u64, fault: PrefixFault) -> RlpError {
    tracing::debug!(offset, %fault, "rejecting non-canonical prefix");
    RlpError::MalformedPrefix { offset, fault }
}
