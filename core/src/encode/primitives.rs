//! encode/primitives.rs
//!
//! Primitive and composite encoders.
//!
//! Design notes:
//! - Total functions: every byte string, integer and item sequence has exactly one output.
//! - String and list prefixes share the same two-tier rule; only the base offset differs,
//!   so the kind is recoverable from the first byte alone.
//! - Long-form lengths are written big-endian with the minimal number of bytes.

use byteorder::{BigEndian, ByteOrder};

use crate::constants::{
    LIST_LONG_OFFSET, LIST_OFFSET, SHORT_PAYLOAD_MAX, STRING_LONG_OFFSET, STRING_OFFSET,
};
use crate::types::Kind;
use crate::utils::{int_size, uint_be_bytes};

/// Size of the header preceding a payload of `payload_len` bytes.
///
/// Does not cover the self-encoded single byte, which has no header.
#[inline]
pub fn header_len(payload_len: usize) -> usize {
    if payload_len <= SHORT_PAYLOAD_MAX {
        1
    } else {
        1 + int_size(payload_len as u64)
    }
}

/// Append the header for a `kind` payload of `payload_len` bytes.
pub fn put_header(out: &mut Vec<u8>, kind: Kind, payload_len: usize) {
    let (short, long) = match kind {
        Kind::String => (STRING_OFFSET, STRING_LONG_OFFSET),
        Kind::List => (LIST_OFFSET, LIST_LONG_OFFSET),
    };

    if payload_len <= SHORT_PAYLOAD_MAX {
        out.push(short + payload_len as u8);
        return;
    }

    let len_of_len = int_size(payload_len as u64);
    out.push(long + len_of_len as u8);

    let mut len_bytes = [0u8; 8];
    BigEndian::write_uint(&mut len_bytes, payload_len as u64, len_of_len);
    out.extend_from_slice(&len_bytes[..len_of_len]);
}

/// Append the canonical encoding of a byte string.
#[inline]
pub fn put_string(out: &mut Vec<u8>, bytes: &[u8]) {
    if bytes.len() == 1 && bytes[0] < STRING_OFFSET {
        out.push(bytes[0]);
    } else {
        put_header(out, Kind::String, bytes.len());
        out.extend_from_slice(bytes);
    }
}

/// Canonical encoding of a byte string.
///
/// # Examples
/// - `""` -> `0x80`
/// - `"dog"` -> `0x83 'd' 'o' 'g'`
/// - `[0x7f]` -> `0x7f`
pub fn encode_string(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(header_len(bytes.len()) + bytes.len());
    put_string(&mut out, bytes);
    out
}

/// Canonical encoding of an unsigned integer: minimal big-endian digits as a string.
///
/// # Examples
/// - `0` -> `0x80`
/// - `127` -> `0x7f`
/// - `128` -> `0x81 0x80`
/// - `1024` -> `0x82 0x04 0x00`
pub fn encode_uint(n: u128) -> Vec<u8> {
    let (buf, start) = uint_be_bytes(n);
    encode_string(&buf[start..])
}

/// Canonical list encoding over already-encoded items, in order.
pub fn encode_list<I: AsRef<[u8]>>(items: &[I]) -> Vec<u8> {
    let payload_len: usize = items.iter().map(|i| i.as_ref().len()).sum();
    let mut out = Vec::with_capacity(header_len(payload_len) + payload_len);
    put_header(&mut out, Kind::List, payload_len);
    for item in items {
        out.extend_from_slice(item.as_ref());
    }
    out
}
