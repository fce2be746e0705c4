//! encode/sink.rs
//!
//! Encode buffer handed to every `Encode` implementation.
//!
//! Design notes:
//! - String payloads are appended to a flat buffer as they are produced.
//! - List headers cannot be written until the payload size is known, so each open list
//!   records where its payload starts; headers are spliced in once, on `finish`.
//! - `heads_size` tracks the bytes that closed list headers will add, so nested list
//!   sizes include the headers of their own children.

use std::io::Write;

use crate::encode::primitives::{header_len, put_header, put_string};
use crate::encode::traits::Encode;
use crate::types::{Kind, Result, RlpError};
use crate::utils::uint_be_bytes;

#[derive(Debug, Clone, Copy)]
struct ListHead {
    /// Offset in `buf` where the list payload starts.
    offset: usize,
    /// Header bytes accounted before the list opened; payload size once closed.
    size: usize,
}

/// Accumulates a canonical encoding.
#[derive(Debug, Default)]
pub struct Sink {
    buf: Vec<u8>,
    heads: Vec<ListHead>,
    heads_size: usize,
    /// Handles of the lists not yet closed, innermost last.
    open: Vec<usize>,
}

impl Sink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            ..Default::default()
        }
    }

    /// Encoded size so far, counting headers of closed lists.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len() + self.heads_size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write a byte string.
    #[inline]
    pub fn write_string(&mut self, bytes: &[u8]) {
        put_string(&mut self.buf, bytes);
    }

    /// Write an unsigned integer in minimal big-endian form.
    #[inline]
    pub fn write_uint(&mut self, n: u128) {
        let (digits, start) = uint_be_bytes(n);
        self.write_string(&digits[start..]);
    }

    /// `false` is the empty string, `true` is `0x01`.
    #[inline]
    pub fn write_bool(&mut self, b: bool) {
        self.write_uint(b as u128);
    }

    /// Copy an already-encoded value verbatim. The caller vouches for its canonicality.
    #[inline]
    pub fn write_raw(&mut self, encoded: &[u8]) {
        self.buf.extend_from_slice(encoded);
    }

    /// Open a list; returns the handle to pass to [`Sink::end_list`].
    pub fn begin_list(&mut self) -> usize {
        self.heads.push(ListHead {
            offset: self.buf.len(),
            size: self.heads_size,
        });
        let index = self.heads.len() - 1;
        self.open.push(index);
        index
    }

    /// Close the list opened by `begin_list` returning `index`.
    ///
    /// Lists close innermost first; an unknown, already closed or outer handle
    /// is reported as a hook failure.
    pub fn end_list(&mut self, index: usize) -> Result<()> {
        match self.open.last() {
            Some(&innermost) if innermost == index => {}
            _ => {
                let reason = if index >= self.heads.len() {
                    "unknown list handle"
                } else if !self.open.contains(&index) {
                    "list already closed"
                } else {
                    "list closed before its inner lists"
                };
                tracing::debug!(index, reason, "rejecting end_list");
                return Err(RlpError::hook(format!("end_list({index}): {reason}")));
            }
        }
        self.open.pop();

        let total = self.len();
        let head = &mut self.heads[index];
        head.size = total - head.offset - head.size;
        self.heads_size += header_len(head.size);
        Ok(())
    }

    /// Write a list whose children are produced by `f`.
    pub fn write_list<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Sink) -> Result<()>,
    {
        let index = self.begin_list();
        f(self)?;
        self.end_list(index)
    }

    /// Encode any value into this sink.
    #[inline]
    pub fn append<T: Encode + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.encode(self)
    }

    /// Assemble the final encoding.
    ///
    /// Fails if an encode routine left a list open.
    pub fn finish(self) -> Result<Vec<u8>> {
        self.check_closed()?;
        let mut out = Vec::with_capacity(self.len());
        let mut str_pos = 0usize;
        for head in &self.heads {
            out.extend_from_slice(&self.buf[str_pos..head.offset]);
            str_pos = head.offset;
            put_header(&mut out, Kind::List, head.size);
        }
        out.extend_from_slice(&self.buf[str_pos..]);
        debug_assert_eq!(out.len(), self.len(), "assembled size disagrees with accounting");
        Ok(out)
    }

    /// Stream the final encoding into `w` without building a contiguous copy.
    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<()> {
        self.check_closed()?;
        let mut str_pos = 0usize;
        let mut header = Vec::with_capacity(crate::constants::MAX_HEADER_LEN);
        for head in &self.heads {
            w.write_all(&self.buf[str_pos..head.offset])?;
            str_pos = head.offset;
            header.clear();
            put_header(&mut header, Kind::List, head.size);
            w.write_all(&header)?;
        }
        w.write_all(&self.buf[str_pos..])?;
        Ok(())
    }

    pub(crate) fn check_closed(&self) -> Result<()> {
        if !self.open.is_empty() {
            return Err(RlpError::hook(format!(
                "{} list(s) left open by an encode routine",
                self.open.len()
            )));
        }
        Ok(())
    }
}
