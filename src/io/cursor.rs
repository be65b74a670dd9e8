//! Bounds-checked cursor over a borrowed header prefix.
//!
//! Every decoder reads through [`ByteCursor`]. A read that would cross the end
//! of the buffer returns [`DecodeError::Truncated`] and leaves the position
//! untouched, so malformed offsets inside a header can never index out of
//! bounds.

use crate::error::DecodeError;

use super::endian::{read_u24_le, ByteOrder};

// =============================================================================
// ByteCursor
// =============================================================================

/// Immutable view over input bytes with a read position.
///
/// The cursor is `Copy`: decoders that need to look ahead can copy it, read,
/// and discard the copy.
#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Create a cursor positioned at `offset`.
    pub fn at(data: &'a [u8], offset: usize) -> Result<Self, DecodeError> {
        let mut cursor = Self::new(data);
        cursor.seek(offset)?;
        Ok(cursor)
    }

    /// Current read position.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes left after the current position.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Whether the cursor has consumed the whole buffer.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Move to an absolute offset. Seeking to exactly the end is allowed.
    pub fn seek(&mut self, offset: usize) -> Result<(), DecodeError> {
        if offset > self.data.len() {
            return Err(DecodeError::Truncated {
                offset,
                needed: 0,
                available: self.data.len(),
            });
        }
        self.pos = offset;
        Ok(())
    }

    /// Advance by `n` bytes.
    pub fn skip(&mut self, n: usize) -> Result<(), DecodeError> {
        self.peek_bytes(n)?;
        self.pos += n;
        Ok(())
    }

    fn truncated(&self, needed: usize) -> DecodeError {
        DecodeError::Truncated {
            offset: self.pos,
            needed,
            available: self.data.len(),
        }
    }

    // -------------------------------------------------------------------------
    // Binary reads
    // -------------------------------------------------------------------------

    /// Borrow the next `n` bytes without advancing.
    pub fn peek_bytes(&self, n: usize) -> Result<&'a [u8], DecodeError> {
        self.data[self.pos..]
            .get(..n)
            .ok_or_else(|| self.truncated(n))
    }

    /// Borrow the next `n` bytes and advance past them.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let bytes = self.peek_bytes(n)?;
        self.pos += n;
        Ok(bytes)
    }

    /// Look at the next byte, if any.
    #[inline]
    pub fn peek_u8(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self, order: ByteOrder) -> Result<u16, DecodeError> {
        Ok(order.read_u16(self.read_bytes(2)?))
    }

    pub fn read_u24_le(&mut self) -> Result<u32, DecodeError> {
        Ok(read_u24_le(self.read_bytes(3)?))
    }

    pub fn read_u32(&mut self, order: ByteOrder) -> Result<u32, DecodeError> {
        Ok(order.read_u32(self.read_bytes(4)?))
    }

    // -------------------------------------------------------------------------
    // Text reads
    // -------------------------------------------------------------------------

    /// Skip ASCII whitespace (space, tab, CR, LF, VT, FF).
    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek_u8() {
            if !is_space(b) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Skip whitespace and line comments introduced by `marker`.
    ///
    /// A comment runs to the end of its line; a comment cut off by the end of
    /// the buffer consumes the rest of it.
    pub fn skip_whitespace_and_comments(&mut self, marker: u8) {
        loop {
            self.skip_whitespace();
            if self.peek_u8() != Some(marker) {
                return;
            }
            match self.data[self.pos..].iter().position(|&b| b == b'\n') {
                Some(newline) => self.pos += newline + 1,
                None => self.pos = self.data.len(),
            }
        }
    }

    /// Read an unsigned decimal integer made of ASCII digits.
    ///
    /// At least one digit is required. Values that do not fit a `u32` are
    /// rejected rather than wrapped.
    pub fn read_decimal(&mut self) -> Result<u32, DecodeError> {
        let start = self.pos;
        let mut value: u32 = 0;

        while let Some(b @ b'0'..=b'9') = self.peek_u8() {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u32::from(b - b'0')))
                .ok_or(DecodeError::Malformed("decimal value overflows u32"))?;
            self.pos += 1;
        }

        if self.pos == start {
            if self.is_empty() {
                return Err(self.truncated(1));
            }
            return Err(DecodeError::Malformed("expected decimal digits"));
        }

        Ok(value)
    }

    /// Read a run of non-whitespace bytes.
    pub fn read_token(&mut self) -> Result<&'a [u8], DecodeError> {
        let rest = &self.data[self.pos..];
        let len = rest.iter().position(|&b| is_space(b)).unwrap_or(rest.len());
        if len == 0 {
            return Err(if rest.is_empty() {
                self.truncated(1)
            } else {
                DecodeError::Malformed("expected token")
            });
        }
        self.pos += len;
        Ok(&rest[..len])
    }

    /// Read up to the next LF, returning the line without its terminator
    /// (a trailing CR is dropped as well).
    ///
    /// Returns `None` once the buffer is exhausted. A final line without a
    /// newline is returned as-is.
    pub fn read_line(&mut self) -> Option<&'a [u8]> {
        if self.is_empty() {
            return None;
        }

        let rest = &self.data[self.pos..];
        let line = match rest.iter().position(|&b| b == b'\n') {
            Some(newline) => {
                self.pos += newline + 1;
                &rest[..newline]
            }
            None => {
                self.pos = self.data.len();
                rest
            }
        };

        Some(line.strip_suffix(b"\r").unwrap_or(line))
    }
}

#[inline]
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | 0x0B | 0x0C)
}

// =============================================================================
// Tests
// =============================================================================
