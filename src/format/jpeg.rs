//! JPEG marker scanner.
//!
//! A JPEG stream is a sequence of marker segments. Dimensions live in the
//! Start Of Frame segment, which can follow any number of APPn, DQT, DHT and
//! COM segments, so the scanner walks segment lengths until it reaches one.
//!
//! # Segment Layout
//!
//! ```text
//! FF <code> <length: u16 BE, includes itself> <payload: length - 2 bytes>
//! SOF payload: <precision: u8> <height: u16 BE> <width: u16 BE> ...
//! ```

use std::ops::RangeInclusive;

use crate::error::DecodeError;
use crate::io::{ByteCursor, ByteOrder};

use super::info::{FormatTag, ImageInfo};

// =============================================================================
// JPEG Markers
// =============================================================================

/// Start Of Image marker
pub const SOI: [u8; 2] = [0xFF, 0xD8];

/// Prefix byte of every marker
const MARKER_PREFIX: u8 = 0xFF;

/// Start Of Frame codes carrying dimensions: baseline, extended sequential,
/// progressive and lossless (SOF0..SOF3)
const SOF_CODES: RangeInclusive<u8> = 0xC0..=0xC3;

// =============================================================================
// Decoder
// =============================================================================

/// Scan segments from offset 2 until a Start Of Frame segment is found.
///
/// Every iteration consumes at least four bytes and every read is bounds
/// checked, so the scan ends on any input: either at a frame header or with
/// `Truncated` once a length points past the buffer.
pub fn decode(data: &[u8]) -> Result<ImageInfo, DecodeError> {
    let mut cursor = ByteCursor::at(data, SOI.len())?;

    loop {
        if cursor.read_u8()? != MARKER_PREFIX {
            return Err(DecodeError::Malformed("expected JPEG marker prefix 0xFF"));
        }

        // Any number of 0xFF fill bytes may precede the marker code
        let mut code = cursor.read_u8()?;
        while code == MARKER_PREFIX {
            code = cursor.read_u8()?;
        }

        let length = cursor.read_u16(ByteOrder::BigEndian)? as usize;

        if SOF_CODES.contains(&code) {
            let _precision = cursor.read_u8()?;
            let height = cursor.read_u16(ByteOrder::BigEndian)?;
            let width = cursor.read_u16(ByteOrder::BigEndian)?;
            return ImageInfo::new(FormatTag::Jpeg, u32::from(width), u32::from(height));
        }

        if length < 2 {
            return Err(DecodeError::Malformed("JPEG segment length below 2"));
        }
        cursor.skip(length - 2)?;
    }
}

// =============================================================================
// Tests
// =============================================================================
