//! BMP file and DIB header decoding.
//!
//! ```text
//! 0..2    "BM"
//! 14..18  DIB header size
//! 18..    width, height
//! ```
//!
//! Windows headers (40 bytes and up) store width and height as signed 32-bit
//! little-endian values; a negative height marks a top-down bitmap. The OS/2
//! core header (12 bytes) stores them as unsigned 16-bit values.

use crate::error::DecodeError;
use crate::io::{ByteCursor, ByteOrder};

use super::info::{FormatTag, ImageInfo};

const DIB_HEADER_OFFSET: usize = 14;

/// Size of the OS/2 BITMAPCOREHEADER
const CORE_HEADER_SIZE: u32 = 12;

pub fn decode(data: &[u8]) -> Result<ImageInfo, DecodeError> {
    let mut cursor = ByteCursor::at(data, DIB_HEADER_OFFSET)?;
    let header_size = cursor.read_u32(ByteOrder::LittleEndian)?;

    let (width, height) = if header_size == CORE_HEADER_SIZE {
        let width = cursor.read_u16(ByteOrder::LittleEndian)?;
        let height = cursor.read_u16(ByteOrder::LittleEndian)?;
        (u32::from(width), u32::from(height))
    } else {
        let width = cursor.read_u32(ByteOrder::LittleEndian)? as i32;
        let height = cursor.read_u32(ByteOrder::LittleEndian)? as i32;
        if width < 0 {
            return Err(DecodeError::Malformed("negative BMP width"));
        }
        (width.unsigned_abs(), height.unsigned_abs())
    };

    ImageInfo::new(FormatTag::Bmp, width, height)
}
