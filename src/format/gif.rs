//! GIF logical screen descriptor.
//!
//! `GIF87a` / `GIF89a` is followed directly by the logical screen width and
//! height as little-endian u16 values at offsets 6 and 8.

use crate::error::DecodeError;
use crate::io::{ByteCursor, ByteOrder};

use super::info::{FormatTag, ImageInfo};

const SCREEN_DESCRIPTOR_OFFSET: usize = 6;

pub fn decode(data: &[u8]) -> Result<ImageInfo, DecodeError> {
    let mut cursor = ByteCursor::at(data, SCREEN_DESCRIPTOR_OFFSET)?;
    let width = cursor.read_u16(ByteOrder::LittleEndian)?;
    let height = cursor.read_u16(ByteOrder::LittleEndian)?;
    ImageInfo::new(FormatTag::Gif, u32::from(width), u32::from(height))
}
