//! ZSoft PCX header.
//!
//! The image window is stored as two corners, little-endian u16 each:
//! `xmin, ymin, xmax, ymax` at offsets 4, 6, 8 and 10. Corners are
//! inclusive, so width is `xmax - xmin + 1`.

use crate::error::DecodeError;
use crate::io::{ByteCursor, ByteOrder};

use super::info::{FormatTag, ImageInfo};

const WINDOW_OFFSET: usize = 4;

pub fn decode(data: &[u8]) -> Result<ImageInfo, DecodeError> {
    let mut cursor = ByteCursor::at(data, WINDOW_OFFSET)?;
    let xmin = cursor.read_u16(ByteOrder::LittleEndian)?;
    let ymin = cursor.read_u16(ByteOrder::LittleEndian)?;
    let xmax = cursor.read_u16(ByteOrder::LittleEndian)?;
    let ymax = cursor.read_u16(ByteOrder::LittleEndian)?;

    let width = span(xmin, xmax)?;
    let height = span(ymin, ymax)?;
    ImageInfo::new(FormatTag::Pcx, width, height)
}

fn span(min: u16, max: u16) -> Result<u32, DecodeError> {
    max.checked_sub(min)
        .map(|extent| u32::from(extent) + 1)
        .ok_or(DecodeError::Malformed("PCX window corners are inverted"))
}
