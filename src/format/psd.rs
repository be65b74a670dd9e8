//! Photoshop document header.
//!
//! `8BPS`, version (u16), six reserved bytes, channel count (u16), then
//! height and width as big-endian u32 at offsets 14 and 18. Height comes
//! first.

use crate::error::DecodeError;
use crate::io::{ByteCursor, ByteOrder};

use super::info::{FormatTag, ImageInfo};

const DIMENSIONS_OFFSET: usize = 14;

pub fn decode(data: &[u8]) -> Result<ImageInfo, DecodeError> {
    let mut cursor = ByteCursor::at(data, DIMENSIONS_OFFSET)?;
    let height = cursor.read_u32(ByteOrder::BigEndian)?;
    let width = cursor.read_u32(ByteOrder::BigEndian)?;
    ImageInfo::new(FormatTag::Psd, width, height)
}
