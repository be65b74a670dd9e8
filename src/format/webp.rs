//! WebP container decoding.
//!
//! A WebP file is a RIFF container whose first chunk selects one of three
//! encodings, each storing dimensions differently:
//!
//! | Chunk  | Offsets        | Layout                                         |
//! |--------|----------------|------------------------------------------------|
//! | `VP8 ` | 26, 28         | u16 LE each, low 14 bits, after `9D 01 2A`     |
//! | `VP8L` | 21..25         | u32 LE: 14 bits width-1, 14 bits height-1      |
//! | `VP8X` | 24, 27         | u24 LE each, stored as dimension-1             |

use crate::error::DecodeError;
use crate::io::{ByteCursor, ByteOrder};

use super::info::{FormatTag, ImageInfo};

const CHUNK_TYPE_OFFSET: usize = 12;

/// VP8 keyframe start code
const VP8_START_CODE: [u8; 3] = [0x9D, 0x01, 0x2A];
const VP8_START_CODE_OFFSET: usize = 23;

/// First byte of a VP8L bitstream
const VP8L_SIGNATURE: u8 = 0x2F;
const VP8L_SIGNATURE_OFFSET: usize = 20;

const VP8X_CANVAS_OFFSET: usize = 24;

const DIMENSION_14_MASK: u32 = 0x3FFF;

pub fn decode(data: &[u8]) -> Result<ImageInfo, DecodeError> {
    let mut cursor = ByteCursor::at(data, CHUNK_TYPE_OFFSET)?;
    let chunk = cursor.read_bytes(4)?;

    let (width, height) = if chunk == b"VP8 " {
        decode_lossy(data)?
    } else if chunk == b"VP8L" {
        decode_lossless(data)?
    } else if chunk == b"VP8X" {
        decode_extended(data)?
    } else {
        return Err(DecodeError::Malformed("unknown WebP chunk type"));
    };

    ImageInfo::new(FormatTag::Webp, width, height)
}

fn decode_lossy(data: &[u8]) -> Result<(u32, u32), DecodeError> {
    let mut cursor = ByteCursor::at(data, VP8_START_CODE_OFFSET)?;
    if cursor.read_bytes(3)? != VP8_START_CODE {
        return Err(DecodeError::Malformed("missing VP8 keyframe start code"));
    }

    // Top two bits of each field are the scaling factor
    let width = u32::from(cursor.read_u16(ByteOrder::LittleEndian)?) & DIMENSION_14_MASK;
    let height = u32::from(cursor.read_u16(ByteOrder::LittleEndian)?) & DIMENSION_14_MASK;
    Ok((width, height))
}

fn decode_lossless(data: &[u8]) -> Result<(u32, u32), DecodeError> {
    let mut cursor = ByteCursor::at(data, VP8L_SIGNATURE_OFFSET)?;
    if cursor.read_u8()? != VP8L_SIGNATURE {
        return Err(DecodeError::Malformed("missing VP8L signature byte"));
    }

    let bits = cursor.read_u32(ByteOrder::LittleEndian)?;
    let width = (bits & DIMENSION_14_MASK) + 1;
    let height = ((bits >> 14) & DIMENSION_14_MASK) + 1;
    Ok((width, height))
}

fn decode_extended(data: &[u8]) -> Result<(u32, u32), DecodeError> {
    let mut cursor = ByteCursor::at(data, VP8X_CANVAS_OFFSET)?;
    let width = cursor.read_u24_le()? + 1;
    let height = cursor.read_u24_le()? + 1;
    Ok((width, height))
}
