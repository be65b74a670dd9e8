//! PNG and MNG header decoding.
//!
//! Both formats open with an 8-byte signature followed by a header chunk
//! (`IHDR` for PNG, `MHDR` for MNG) whose first eight data bytes are the
//! big-endian width and height:
//!
//! ```text
//! 0..8    signature
//! 8..12   chunk length
//! 12..16  chunk type
//! 16..20  width
//! 20..24  height
//! ```

use crate::error::DecodeError;
use crate::io::{ByteCursor, ByteOrder};

use super::info::{FormatTag, ImageInfo};

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

pub const MNG_SIGNATURE: [u8; 8] = [0x8A, 0x4D, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

const HEADER_CHUNK_OFFSET: usize = 12;

pub fn decode(data: &[u8]) -> Result<ImageInfo, DecodeError> {
    decode_header_chunk(data, b"IHDR", FormatTag::Png)
}

pub fn decode_mng(data: &[u8]) -> Result<ImageInfo, DecodeError> {
    decode_header_chunk(data, b"MHDR", FormatTag::Mng)
}

fn decode_header_chunk(
    data: &[u8],
    chunk_type: &[u8; 4],
    format: FormatTag,
) -> Result<ImageInfo, DecodeError> {
    let mut cursor = ByteCursor::at(data, HEADER_CHUNK_OFFSET)?;

    if cursor.read_bytes(4)? != chunk_type {
        return Err(DecodeError::Malformed("first chunk is not the header chunk"));
    }

    let width = cursor.read_u32(ByteOrder::BigEndian)?;
    let height = cursor.read_u32(ByteOrder::BigEndian)?;
    ImageInfo::new(format, width, height)
}
