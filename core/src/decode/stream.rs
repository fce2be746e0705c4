//! decode/stream.rs
//!
//! Streaming cursor over a single input source.
//!
//! Design notes:
//! - `kind()` reads and validates the next header once and caches it; payload bytes stay
//!   in the reader until the caller asks for them.
//! - Each open list is a plain end offset on `stack`. Children may never extend past it,
//!   and `exit_list` requires the cursor to sit exactly on it.
//! - When the total input length is known (slices), a header that claims more bytes than
//!   remain fails before anything is allocated.
//! - A stream belongs to one decode at a time; it holds no shared state.

use std::io::{self, Read};

use bytes::Bytes;

use crate::constants::STRING_OFFSET;
use crate::decode::config::StreamConfig;
use crate::decode::prefix::{check_wrapped_byte, classify, long_size, Lead};
use crate::decode::traits::Decode;
use crate::encode::primitives::put_header;
use crate::types::{Kind, Result, RlpError};
use crate::utils::uint_from_be;

/// Header read by `kind()` but not yet consumed.
#[derive(Debug, Clone, Copy)]
struct Pending {
    kind: Kind,
    size: u64,
    /// Offset of the prefix byte.
    start: u64,
    /// Offset just past the payload.
    end: u64,
    /// Single-byte payload, already consumed together with the header.
    byte: Option<u8>,
}

pub struct Stream<R> {
    reader: R,
    config: StreamConfig,
    /// Bytes consumed from `reader`.
    pos: u64,
    /// Total input length, when known.
    input_limit: Option<u64>,
    /// End offsets of the open lists, innermost last.
    stack: Vec<u64>,
    pending: Option<Pending>,
}

impl<'a> Stream<&'a [u8]> {
    /// Stream over an in-memory encoding; the input length bounds every header.
    pub fn from_slice(input: &'a [u8], config: StreamConfig) -> Self {
        Stream::with_input_limit(input, input.len() as u64, config)
    }
}

impl<R: Read> Stream<R> {
    /// Stream over a reader of unknown length.
    pub fn new(reader: R, config: StreamConfig) -> Self {
        Self {
            reader,
            config,
            pos: 0,
            input_limit: None,
            stack: Vec::new(),
            pending: None,
        }
    }

    /// Stream over a reader that yields at most `limit` bytes.
    pub fn with_input_limit(reader: R, limit: u64, config: StreamConfig) -> Self {
        Self {
            input_limit: Some(limit),
            ..Self::new(reader, config)
        }
    }

    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// Offset of the next unconsumed value.
    pub fn position(&self) -> u64 {
        self.pending.map(|p| p.start).unwrap_or(self.pos)
    }

    /// Number of open lists.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Kind and declared payload length of the next value, without consuming its payload.
    ///
    /// Fails with `EndOfList` when the enclosing list is exhausted.
    pub fn kind(&mut self) -> Result<(Kind, u64)> {
        let p = self.header()?;
        Ok((p.kind, p.size))
    }

    /// True when the innermost open list has been fully consumed.
    pub fn at_list_end(&self) -> bool {
        self.pending.is_none() && self.stack.last() == Some(&self.pos)
    }

    /// True when a length-bounded input has been fully consumed.
    pub fn at_input_end(&self) -> bool {
        self.pending.is_none() && self.input_limit == Some(self.pos)
    }

    /// Read the next value as a byte string.
    pub fn bytes(&mut self) -> Result<Bytes> {
        let p = self.take_string()?;
        if let Some(b) = p.byte {
            return Ok(Bytes::copy_from_slice(&[b]));
        }
        let mut buf = Vec::new();
        self.read_payload(p.size, &mut buf)?;
        Ok(Bytes::from(buf))
    }

    /// Read the next value as a byte string of exactly `out.len()` bytes.
    pub fn read_bytes_exact(&mut self, out: &mut [u8]) -> Result<()> {
        let p = self.header()?;
        if p.kind != Kind::String {
            return Err(self.mismatch(Kind::String, p.kind));
        }
        if p.size != out.len() as u64 {
            return Err(RlpError::LengthMismatch {
                expected: out.len(),
                actual: p.size as usize,
            });
        }
        self.pending = None;
        match p.byte {
            Some(b) => out[0] = b,
            None => self.read_full(out)?,
        }
        Ok(())
    }

    /// Read the next value as an unsigned integer of at most `max_bytes` bytes.
    ///
    /// Zero must be the empty string; a leading zero byte is rejected as
    /// non-canonical before the width is checked.
    pub fn uint(&mut self, max_bytes: usize) -> Result<u128> {
        let max_bytes = max_bytes.min(16);
        let p = self.take_string()?;
        if p.size == 0 {
            return Ok(0);
        }

        let mut buf = [0u8; 16];
        match p.byte {
            Some(b) => buf[0] = b,
            None => self.read_full(&mut buf[..1])?,
        }
        if buf[0] == 0 {
            tracing::debug!(offset = p.start, "rejecting integer with leading zero");
            return Err(RlpError::NonCanonicalInteger);
        }

        let size = p.size as usize;
        if size > max_bytes {
            tracing::debug!(offset = p.start, size, max = max_bytes, "integer wider than target");
            return Err(RlpError::IntegerOverflow { size, max: max_bytes });
        }
        if p.byte.is_none() {
            self.read_full(&mut buf[1..size])?;
        }
        Ok(uint_from_be(&buf[..size]))
    }

    /// `0x80` is false, `0x01` is true; nothing else is a boolean.
    pub fn boolean(&mut self) -> Result<bool> {
        match self.uint(1)? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(RlpError::InvalidBool),
        }
    }

    /// Step into the next value, which must be a list. Returns its payload length.
    pub fn enter_list(&mut self) -> Result<u64> {
        let p = self.header()?;
        if p.kind != Kind::List {
            return Err(self.mismatch(Kind::List, p.kind));
        }
        if self.stack.len() >= self.config.max_depth {
            tracing::debug!(offset = p.start, max = self.config.max_depth, "list nesting too deep");
            return Err(RlpError::DepthExceeded { max: self.config.max_depth });
        }
        self.pending = None;
        self.stack.push(p.end);
        tracing::trace!(depth = self.stack.len(), end = p.end, "enter list");
        Ok(p.size)
    }

    /// Leave the innermost list. Its payload must be consumed exactly.
    pub fn exit_list(&mut self) -> Result<()> {
        let end = *self.stack.last().ok_or(RlpError::NotInList)?;
        let cursor = self.position();
        if cursor != end {
            tracing::debug!(boundary = end, cursor, "list payload not consumed exactly");
            return Err(RlpError::TrailingData { boundary: end, cursor });
        }
        self.stack.pop();
        tracing::trace!(depth = self.stack.len(), "exit list");
        Ok(())
    }

    /// Consume the next value without materializing it.
    ///
    /// List payloads are walked, so every nested header is validated and
    /// nesting stays within `max_depth`.
    pub fn skip(&mut self) -> Result<()> {
        let p = self.header()?;
        match (p.kind, p.byte) {
            (Kind::List, _) => {
                self.enter_list()?;
                while !self.at_list_end() {
                    self.skip()?;
                }
                self.exit_list()
            }
            (Kind::String, Some(_)) => {
                self.pending = None;
                Ok(())
            }
            (Kind::String, None) => {
                self.pending = None;
                let copied = io::copy(&mut (&mut self.reader).take(p.size), &mut io::sink())?;
                self.pos += copied;
                if copied < p.size {
                    return Err(RlpError::UnexpectedEof);
                }
                Ok(())
            }
        }
    }

    /// The complete encoding (header and payload) of the next value.
    ///
    /// Nested values are validated the same way `skip` does, so the result is
    /// always canonical.
    pub fn raw(&mut self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.copy_value(&mut out)?;
        Ok(out)
    }

    /// Decode the next value as `T`.
    #[inline]
    pub fn decode<T: Decode>(&mut self) -> Result<T> {
        T::decode(self)
    }

    // ---------------------------------------------------------------------
    // internals
    // ---------------------------------------------------------------------

    fn header(&mut self) -> Result<Pending> {
        if let Some(p) = self.pending {
            return Ok(p);
        }
        if let Some(&end) = self.stack.last() {
            if self.pos >= end {
                return Err(RlpError::EndOfList);
            }
        }

        let start = self.pos;
        let lead = self.read_byte()?;
        let (kind, size, byte) = match classify(lead) {
            Lead::Byte(b) => (Kind::String, 1, Some(b)),
            Lead::Short { kind: Kind::String, size: 1 } => {
                let b = self.read_byte()?;
                check_wrapped_byte(b, start)?;
                (Kind::String, 1, Some(b))
            }
            Lead::Short { kind, size } => (kind, size, None),
            Lead::Long { kind, len_of_len } => {
                let mut len_bytes = [0u8; 8];
                self.read_full(&mut len_bytes[..len_of_len])?;
                (kind, long_size(&len_bytes[..len_of_len], start)?, None)
            }
        };

        if size > self.config.max_size as u64 {
            tracing::debug!(offset = start, size, max = self.config.max_size, "declared payload too large");
            return Err(RlpError::SizeExceeded {
                size,
                max: self.config.max_size as u64,
            });
        }

        let value_end = match byte {
            Some(_) => self.pos,
            None => match self.pos.checked_add(size) {
                Some(end) => end,
                None => {
                    tracing::debug!(offset = start, size, "declared payload overflows the offset range");
                    return Err(RlpError::UnexpectedEof);
                }
            },
        };
        if let Some(&end) = self.stack.last() {
            if value_end > end {
                tracing::debug!(offset = start, boundary = end, value_end, "value overruns enclosing list");
                return Err(RlpError::TrailingData {
                    boundary: end,
                    cursor: value_end,
                });
            }
        }
        if let Some(limit) = self.input_limit {
            if value_end > limit {
                tracing::debug!(offset = start, value_end, limit, "value overruns input");
                return Err(RlpError::UnexpectedEof);
            }
        }

        let p = Pending {
            kind,
            size,
            start,
            end: value_end,
            byte,
        };
        self.pending = Some(p);
        Ok(p)
    }

    /// Append the next value to `out`, re-emitting each validated header.
    fn copy_value(&mut self, out: &mut Vec<u8>) -> Result<()> {
        let p = self.header()?;
        match (p.kind, p.byte) {
            (Kind::List, _) => {
                put_header(out, Kind::List, p.size as usize);
                self.enter_list()?;
                while !self.at_list_end() {
                    self.copy_value(out)?;
                }
                self.exit_list()
            }
            (Kind::String, Some(b)) => {
                self.pending = None;
                if b < STRING_OFFSET {
                    out.push(b);
                } else {
                    out.extend_from_slice(&[STRING_OFFSET + 1, b]);
                }
                Ok(())
            }
            (Kind::String, None) => {
                self.pending = None;
                put_header(out, Kind::String, p.size as usize);
                self.read_payload(p.size, out)
            }
        }
    }

    fn take_string(&mut self) -> Result<Pending> {
        let p = self.header()?;
        if p.kind != Kind::String {
            return Err(self.mismatch(Kind::String, p.kind));
        }
        self.pending = None;
        Ok(p)
    }

    fn mismatch(&self, expected: Kind, found: Kind) -> RlpError {
        tracing::debug!(offset = self.position(), %expected, %found, "type mismatch");
        RlpError::TypeMismatch { expected, found }
    }

    fn read_byte(&mut self) -> Result<u8> {
        let mut b = [0u8; 1];
        self.read_full(&mut b)?;
        Ok(b[0])
    }

    fn read_full(&mut self, buf: &mut [u8]) -> Result<()> {
        if let Some(limit) = self.input_limit {
            if self.pos + buf.len() as u64 > limit {
                return Err(RlpError::UnexpectedEof);
            }
        }
        self.reader.read_exact(buf)?;
        self.pos += buf.len() as u64;
        Ok(())
    }

    /// Append `size` payload bytes to `out`, growing it only as data arrives.
    fn read_payload(&mut self, size: u64, out: &mut Vec<u8>) -> Result<()> {
        let n = (&mut self.reader).take(size).read_to_end(out)? as u64;
        self.pos += n;
        if n < size {
            return Err(RlpError::UnexpectedEof);
        }
        Ok(())
    }
}
