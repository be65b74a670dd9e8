//! Kodak Photo CD.
//!
//! Photo CD image packs have no stored dimensions in the prefix we read. The
//! base resolution is always 768x512; a single orientation bit in the image
//! pack header says whether it is landscape or portrait.

use crate::error::DecodeError;
use crate::io::ByteCursor;

use super::info::{FormatTag, ImageInfo};

/// Offset of the `PCD_IPI` signature
pub const PCD_SIGNATURE_OFFSET: usize = 0x800;

/// Smallest buffer that reaches past the orientation byte
pub const PCD_MIN_LEN: usize = 0xF01;

const ORIENTATION_OFFSET: usize = 0x0E02;

pub fn decode(data: &[u8]) -> Result<ImageInfo, DecodeError> {
    let mut cursor = ByteCursor::at(data, PCD_SIGNATURE_OFFSET)?;
    if cursor.read_bytes(3)? != b"PCD" {
        return Err(DecodeError::Malformed("missing PCD signature"));
    }

    cursor.seek(ORIENTATION_OFFSET)?;
    let orientation = cursor.read_u8()?;

    if orientation & 1 == 1 {
        ImageInfo::new(FormatTag::Pcd, 768, 512)
    } else {
        ImageInfo::new(FormatTag::Pcd, 512, 768)
    }
}
