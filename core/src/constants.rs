//! constants.rs
//! Wire constants for the recursive-length-prefix format and default decode limits.
//!
//! Prefix byte ranges (first byte alone determines the kind):
//! - `0x00..=0x7f` single byte, encodes itself
//! - `0x80..=0xb7` string, payload length 0..=55
//! - `0xb8..=0xbf` string, followed by 1..=8 big-endian length bytes
//! - `0xc0..=0xf7` list, payload length 0..=55
//! - `0xf8..=0xff` list, followed by 1..=8 big-endian length bytes

/// Base prefix of a short string (`0x80 + len`).
pub const STRING_OFFSET: u8 = 0x80;
/// Base prefix of a long string (`0xb7 + len_of_len`).
pub const STRING_LONG_OFFSET: u8 = 0xb7;
/// Base prefix of a short list (`0xc0 + len`).
pub const LIST_OFFSET: u8 = 0xc0;
/// Base prefix of a long list (`0xf7 + len_of_len`).
pub const LIST_LONG_OFFSET: u8 = 0xf7;

/// Largest payload that uses the single-byte short form.
pub const SHORT_PAYLOAD_MAX: usize = 55;

/// Encoding of the empty string (also integer zero and `false`).
pub const EMPTY_STRING: u8 = STRING_OFFSET;
/// Encoding of the empty list.
pub const EMPTY_LIST: u8 = LIST_OFFSET;

/// Longest possible header: prefix byte plus 8 length bytes.
pub const MAX_HEADER_LEN: usize = 9;

/// Defaults applied when the caller does not configure a limit.
pub const DEFAULT_MAX_SIZE: usize = 32 * 1024 * 1024; // 32 MiB per declared payload
pub const DEFAULT_MAX_DEPTH: usize = 128;
