//! TIFF field types and the tags that carry image dimensions.

use crate::error::DecodeError;
use crate::io::ByteOrder;

// =============================================================================
// TIFF Field Types
// =============================================================================

/// Integer field types a dimension tag may be stored with.
///
/// The TIFF spec requires SHORT or LONG for ImageWidth and ImageLength, but
/// writers in the wild also use BYTE and the signed variants. Entries of any
/// other type are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum FieldType {
    /// Unsigned 8-bit integer
    Byte = 1,

    /// Unsigned 16-bit integer
    Short = 3,

    /// Unsigned 32-bit integer
    Long = 4,

    /// Signed 8-bit integer
    SByte = 6,

    /// Signed 16-bit integer
    SShort = 8,

    /// Signed 32-bit integer
    SLong = 9,
}

impl FieldType {
    /// Create a FieldType from its numeric value.
    ///
    /// Returns `None` for types that cannot hold a dimension (ASCII,
    /// RATIONAL, FLOAT, ...).
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(FieldType::Byte),
            3 => Some(FieldType::Short),
            4 => Some(FieldType::Long),
            6 => Some(FieldType::SByte),
            8 => Some(FieldType::SShort),
            9 => Some(FieldType::SLong),
            _ => None,
        }
    }

    /// Decode the first value stored inline in an entry's 4-byte value field.
    ///
    /// Values smaller than four bytes are left-justified, so they start at
    /// byte 0 of the field in either byte order.
    ///
    /// # Errors
    /// `Malformed` if a signed value is negative.
    pub fn read_value(self, field: &[u8; 4], order: ByteOrder) -> Result<u32, DecodeError> {
        let value = match self {
            FieldType::Byte => u32::from(field[0]),
            FieldType::Short => u32::from(order.read_u16(&field[..2])),
            FieldType::Long => order.read_u32(field),
            FieldType::SByte => non_negative(i32::from(field[0] as i8))?,
            FieldType::SShort => non_negative(i32::from(order.read_u16(&field[..2]) as i16))?,
            FieldType::SLong => non_negative(order.read_u32(field) as i32)?,
        };
        Ok(value)
    }
}

fn non_negative(value: i32) -> Result<u32, DecodeError> {
    u32::try_from(value).map_err(|_| DecodeError::Malformed("negative TIFF dimension"))
}

// =============================================================================
// TIFF Tags
// =============================================================================

/// Tags holding the image dimensions. Every other tag is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum TiffTag {
    /// Image width in pixels
    ImageWidth = 256,

    /// Image height (length) in pixels
    ImageLength = 257,
}

impl TiffTag {
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            256 => Some(TiffTag::ImageWidth),
            257 => Some(TiffTag::ImageLength),
            _ => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
