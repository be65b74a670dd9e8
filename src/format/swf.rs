//! Shockwave Flash frame size.
//!
//! The frame size is a RECT record starting at byte 8 of an uncompressed
//! (`FWS`) file: a 5-bit field width `nbits`, then `xmin`, `xmax`, `ymin`,
//! `ymax` as signed `nbits`-wide fields packed MSB-first. Units are twips
//! (1/20 pixel).
//!
//! A compressed (`CWS`) file keeps its 8-byte header in the clear and
//! zlib-compresses everything after it, so the RECT is the first thing in
//! the inflated stream.

use std::io::Read;

use flate2::read::ZlibDecoder;
use tracing::trace;

use crate::error::DecodeError;

use super::info::{FormatTag, ImageInfo};

/// Offset of the RECT record in an uncompressed file, and of the zlib
/// stream in a compressed one
const BODY_OFFSET: usize = 8;

/// Hard cap on inflated output for `CWS` files
pub const SWF_INFLATE_LIMIT: usize = 1024;

const TWIPS_PER_PIXEL: i32 = 20;

// =============================================================================
// Decoders
// =============================================================================

/// Decode an uncompressed `FWS` file.
pub fn decode(data: &[u8]) -> Result<ImageInfo, DecodeError> {
    let body = data.get(BODY_OFFSET..).ok_or(DecodeError::Truncated {
        offset: BODY_OFFSET,
        needed: 1,
        available: data.len(),
    })?;
    decode_rect(body)
}

/// Decode a zlib-compressed `CWS` file.
///
/// At most [`SWF_INFLATE_LIMIT`] bytes are inflated. The input is usually a
/// file prefix, so a stream that ends early is accepted as long as it
/// produced output.
pub fn decode_compressed(data: &[u8]) -> Result<ImageInfo, DecodeError> {
    let compressed = data.get(BODY_OFFSET..).unwrap_or_default();

    let mut inflated = Vec::with_capacity(SWF_INFLATE_LIMIT);
    let result = ZlibDecoder::new(compressed)
        .take(SWF_INFLATE_LIMIT as u64)
        .read_to_end(&mut inflated);

    if let Err(e) = result {
        if inflated.is_empty() {
            return Err(DecodeError::Inflate(e.to_string()));
        }
        trace!(error = %e, inflated = inflated.len(), "Compressed SWF stream cut short");
    }

    decode_rect(&inflated)
}

fn decode_rect(rect: &[u8]) -> Result<ImageInfo, DecodeError> {
    let mut bits = BitReader::new(rect);
    let nbits = bits.read_unsigned(5)?;

    let _xmin = bits.read_signed(nbits)?;
    let xmax = bits.read_signed(nbits)?;
    let _ymin = bits.read_signed(nbits)?;
    let ymax = bits.read_signed(nbits)?;

    if xmax <= 0 || ymax <= 0 {
        return Err(DecodeError::Malformed("SWF frame size is not positive"));
    }

    // Non-negative after the check above
    let width = (xmax / TWIPS_PER_PIXEL) as u32;
    let height = (ymax / TWIPS_PER_PIXEL) as u32;
    ImageInfo::new(FormatTag::Swf, width, height)
}

// =============================================================================
// BitReader
// =============================================================================

/// MSB-first bit reader over a byte slice.
struct BitReader<'a> {
    data: &'a [u8],
    bit_pos: usize,
}

impl<'a> BitReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, bit_pos: 0 }
    }

    /// Read `n` bits (at most 32) as an unsigned value.
    fn read_unsigned(&mut self, n: u32) -> Result<u32, DecodeError> {
        let end = self.bit_pos + n as usize;
        if end > self.data.len() * 8 {
            return Err(DecodeError::Truncated {
                offset: self.bit_pos / 8,
                needed: end.div_ceil(8) - self.bit_pos / 8,
                available: self.data.len(),
            });
        }

        let mut value: u64 = 0;
        for pos in self.bit_pos..end {
            let bit = (self.data[pos / 8] >> (7 - pos % 8)) & 1;
            value = (value << 1) | u64::from(bit);
        }
        self.bit_pos = end;
        Ok(value as u32)
    }

    /// Read `n` bits as a two's complement signed value.
    fn read_signed(&mut self, n: u32) -> Result<i32, DecodeError> {
        if n == 0 {
            return Ok(0);
        }
        let raw = self.read_unsigned(n)?;
        let shift = 32 - n;
        Ok(((raw << shift) as i32) >> shift)
    }
}

// =============================================================================
// Tests
// =============================================================================
