//! TIFF header and first-IFD parsing.
//!
//! # TIFF Header Structure
//!
//! ```text
//! Bytes 0-1: Byte order (0x4949 = little-endian "II", 0x4D4D = big-endian "MM")
//! Bytes 2-3: Version (42 = 0x002A)
//! Bytes 4-7: Offset to first IFD
//! ```
//!
//! # IFD Structure
//!
//! ```text
//! u16 entry count, then per entry (12 bytes):
//!   Bytes 0-1:  Tag
//!   Bytes 2-3:  Field type
//!   Bytes 4-7:  Value count
//!   Bytes 8-11: Value, or offset to value
//! ```
//!
//! Only the first IFD is read. The walk stops as soon as both ImageWidth and
//! ImageLength have been seen.

use tracing::trace;

use crate::error::DecodeError;
use crate::format::info::{FormatTag, ImageInfo};
use crate::io::{ByteCursor, ByteOrder};

use super::tags::{FieldType, TiffTag};

// =============================================================================
// Constants
// =============================================================================

/// Magic bytes indicating little-endian byte order ("II" for Intel)
const BYTE_ORDER_LITTLE_ENDIAN: u16 = 0x4949;

/// Magic bytes indicating big-endian byte order ("MM" for Motorola)
const BYTE_ORDER_BIG_ENDIAN: u16 = 0x4D4D;

/// Version number for classic TIFF
const VERSION_TIFF: u16 = 42;

// =============================================================================
// TiffHeader
// =============================================================================

/// Parsed TIFF file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffHeader {
    /// Byte order for all multi-byte values in the file
    pub byte_order: ByteOrder,

    /// Offset to the first IFD
    pub first_ifd_offset: u32,
}

impl TiffHeader {
    /// Parse a classic TIFF header.
    ///
    /// # Errors
    /// - `Truncated` if fewer than 8 bytes are available
    /// - `Malformed` if the byte order mark or version is wrong
    pub fn parse(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut cursor = ByteCursor::new(bytes);

        // Read as LE: both marks are palindromes
        let magic = cursor.read_u16(ByteOrder::LittleEndian)?;
        let byte_order = match magic {
            BYTE_ORDER_LITTLE_ENDIAN => ByteOrder::LittleEndian,
            BYTE_ORDER_BIG_ENDIAN => ByteOrder::BigEndian,
            _ => return Err(DecodeError::Malformed("invalid TIFF byte order mark")),
        };

        if cursor.read_u16(byte_order)? != VERSION_TIFF {
            return Err(DecodeError::Malformed("unsupported TIFF version"));
        }

        let first_ifd_offset = cursor.read_u32(byte_order)?;

        Ok(TiffHeader {
            byte_order,
            first_ifd_offset,
        })
    }
}

// =============================================================================
// IfdEntry
// =============================================================================

/// A single 12-byte IFD entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IfdEntry {
    /// Tag ID
    pub tag_id: u16,

    /// Raw field type code
    pub field_type: u16,

    /// Value field, in file byte order
    pub value: [u8; 4],
}

impl IfdEntry {
    /// Read one entry at the cursor position.
    ///
    /// Only the first value can hold a dimension, so the value count is
    /// skipped.
    pub fn read(cursor: &mut ByteCursor<'_>, order: ByteOrder) -> Result<Self, DecodeError> {
        let tag_id = cursor.read_u16(order)?;
        let field_type = cursor.read_u16(order)?;
        cursor.skip(4)?;

        let mut value = [0u8; 4];
        value.copy_from_slice(cursor.read_bytes(4)?);

        Ok(IfdEntry {
            tag_id,
            field_type,
            value,
        })
    }

    /// The entry's dimension value, or `None` when its type cannot hold one.
    pub fn dimension(&self, order: ByteOrder) -> Result<Option<u32>, DecodeError> {
        match FieldType::from_u16(self.field_type) {
            Some(field_type) => field_type.read_value(&self.value, order).map(Some),
            None => Ok(None),
        }
    }
}

// =============================================================================
// Decoder
// =============================================================================

/// Read the first IFD of a TIFF file until both dimensions are known.
pub fn decode(data: &[u8]) -> Result<ImageInfo, DecodeError> {
    let header = TiffHeader::parse(data)?;
    let order = header.byte_order;

    let mut cursor = ByteCursor::at(data, header.first_ifd_offset as usize)?;
    let entry_count = cursor.read_u16(order)?;

    let mut width = None;
    let mut height = None;

    for _ in 0..entry_count {
        let entry = IfdEntry::read(&mut cursor, order)?;

        match TiffTag::from_u16(entry.tag_id) {
            Some(TiffTag::ImageWidth) => width = entry.dimension(order)?.or(width),
            Some(TiffTag::ImageLength) => height = entry.dimension(order)?.or(height),
            None => continue,
        }

        if width.is_some() && height.is_some() {
            break;
        }
    }

    trace!(entry_count, ?width, ?height, "Walked TIFF IFD");

    let width = width.ok_or(DecodeError::MissingDimension("TIFF ImageWidth"))?;
    let height = height.ok_or(DecodeError::MissingDimension("TIFF ImageLength"))?;
    ImageInfo::new(FormatTag::Tiff, width, height)
}

// =============================================================================
// Tests
// =============================================================================
