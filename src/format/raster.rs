//! Fixed-offset big-endian raster headers: SGI image and Sun raster.
//!
//! SGI: `01 DA` magic, storage, bytes per channel, dimension count (u16),
//! then x size and y size as u16 at offsets 6 and 8.
//!
//! Sun raster: `59 A6 6A 95` magic, then width and height as u32 at
//! offsets 4 and 8.

use crate::error::DecodeError;
use crate::io::{ByteCursor, ByteOrder};

use super::info::{FormatTag, ImageInfo};

pub const SGI_MAGIC: [u8; 6] = [0x01, 0xDA, 0x5B, 0x01, 0x00, 0x5D];

pub const SUN_RASTER_MAGIC: [u8; 4] = [0x59, 0xA6, 0x6A, 0x95];

pub fn decode_sgi(data: &[u8]) -> Result<ImageInfo, DecodeError> {
    let mut cursor = ByteCursor::at(data, 6)?;
    let width = cursor.read_u16(ByteOrder::BigEndian)?;
    let height = cursor.read_u16(ByteOrder::BigEndian)?;
    ImageInfo::new(FormatTag::Rgb, u32::from(width), u32::from(height))
}

pub fn decode_sun(data: &[u8]) -> Result<ImageInfo, DecodeError> {
    let mut cursor = ByteCursor::at(data, SUN_RASTER_MAGIC.len())?;
    let width = cursor.read_u32(ByteOrder::BigEndian)?;
    let height = cursor.read_u32(ByteOrder::BigEndian)?;
    ImageInfo::new(FormatTag::Ras, width, height)
}
