//! Test utilities for integration tests.
//!
//! Fixture builders for every supported format. Formats the `image` crate can
//! encode are produced by it; the rest are assembled byte by byte from their
//! header layouts and padded to the minimum prefix length.

use std::io::{Cursor, Write};

use flate2::write::ZlibEncoder;
use flate2::Compression;
use image::codecs::jpeg::JpegEncoder;
use image::{GrayImage, ImageFormat, Luma, Rgb, RgbImage, Rgba, RgbaImage};

use imgprobe::MIN_PREFIX_LEN;

/// Pad `data` with zeros up to the minimum prefix length.
pub fn pad(mut data: Vec<u8>) -> Vec<u8> {
    if data.len() < MIN_PREFIX_LEN {
        data.resize(MIN_PREFIX_LEN, 0);
    }
    data
}

// =============================================================================
// Real Codec Fixtures
// =============================================================================

/// Create a test JPEG image with a simple gradient pattern.
pub fn create_test_jpeg(width: u32, height: u32, quality: u8) -> Vec<u8> {
    let img = GrayImage::from_fn(width, height, |x, y| {
        let val = ((x + y) % 256) as u8;
        Luma([val])
    });

    let mut buf = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    encoder.encode_image(&img).unwrap();
    buf
}

/// Create a test RGB JPEG image.
pub fn create_test_rgb_jpeg(width: u32, height: u32, quality: u8) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        let r = (x % 256) as u8;
        let g = (y % 256) as u8;
        let b = ((x + y) % 256) as u8;
        Rgb([r, g, b])
    });

    let mut buf = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    encoder.encode_image(&img).unwrap();
    buf
}

/// Encode an RGBA gradient with the `image` crate's encoder for `format`.
pub fn create_test_image(format: ImageFormat, width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x * y) % 256) as u8, 255])
    });

    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format).unwrap();
    buf.into_inner()
}

// =============================================================================
// Binary Header Fixtures
// =============================================================================

pub fn create_mng(width: u32, height: u32) -> Vec<u8> {
    let mut data = vec![0x8A, 0x4D, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    data.extend_from_slice(&28u32.to_be_bytes());
    data.extend_from_slice(b"MHDR");
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    pad(data)
}

fn riff_webp(chunk: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut data = b"RIFF".to_vec();
    data.extend_from_slice(&((payload.len() + 12) as u32).to_le_bytes());
    data.extend_from_slice(b"WEBP");
    data.extend_from_slice(chunk);
    data.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    data.extend_from_slice(payload);
    pad(data)
}

/// Lossy (`VP8 `) WebP keyframe header.
pub fn create_webp_lossy(width: u16, height: u16) -> Vec<u8> {
    let mut payload = vec![0x50, 0x2F, 0x01, 0x9D, 0x01, 0x2A];
    payload.extend_from_slice(&width.to_le_bytes());
    payload.extend_from_slice(&height.to_le_bytes());
    payload.resize(64, 0);
    riff_webp(b"VP8 ", &payload)
}

/// Lossless (`VP8L`) WebP header.
pub fn create_webp_lossless(width: u32, height: u32) -> Vec<u8> {
    let bits = (width - 1) | ((height - 1) << 14) | (1 << 28);
    let mut payload = vec![0x2F];
    payload.extend_from_slice(&bits.to_le_bytes());
    payload.resize(64, 0);
    riff_webp(b"VP8L", &payload)
}

/// Extended (`VP8X`) WebP canvas header.
pub fn create_webp_extended(width: u32, height: u32) -> Vec<u8> {
    let mut payload = vec![0x10, 0, 0, 0];
    payload.extend_from_slice(&(width - 1).to_le_bytes()[..3]);
    payload.extend_from_slice(&(height - 1).to_le_bytes()[..3]);
    riff_webp(b"VP8X", &payload)
}

/// Windows BMP with a BITMAPINFOHEADER. Negative height is top-down.
pub fn create_bmp(width: i32, height: i32) -> Vec<u8> {
    let mut data = b"BM".to_vec();
    data.extend_from_slice(&0u32.to_le_bytes());
    data.extend_from_slice(&0u32.to_le_bytes());
    data.extend_from_slice(&54u32.to_le_bytes());
    data.extend_from_slice(&40u32.to_le_bytes());
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes());
    data.extend_from_slice(&24u16.to_le_bytes());
    pad(data)
}

pub fn create_psd(width: u32, height: u32) -> Vec<u8> {
    let mut data = b"8BPS".to_vec();
    data.extend_from_slice(&1u16.to_be_bytes());
    data.extend_from_slice(&[0; 6]);
    data.extend_from_slice(&3u16.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&8u16.to_be_bytes());
    data.extend_from_slice(&3u16.to_be_bytes());
    pad(data)
}

/// Photo CD image pack; bit 0 of the orientation byte selects landscape.
pub fn create_pcd(landscape: bool) -> Vec<u8> {
    let mut data = vec![0xFF; 0x1000];
    data[0x800..0x807].copy_from_slice(b"PCD_IPI");
    data[0x0E02] = if landscape { 0x01 } else { 0x00 };
    data
}

pub fn create_sgi(width: u16, height: u16) -> Vec<u8> {
    let mut data = vec![0x01, 0xDA, 0x5B, 0x01, 0x00, 0x5D];
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&3u16.to_be_bytes());
    pad(data)
}

pub fn create_sun_raster(width: u32, height: u32) -> Vec<u8> {
    let mut data = vec![0x59, 0xA6, 0x6A, 0x95];
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&24u32.to_be_bytes());
    pad(data)
}

/// PCX header with an image window anchored at `(xmin, ymin)`.
pub fn create_pcx(xmin: u16, ymin: u16, width: u16, height: u16) -> Vec<u8> {
    let mut data = vec![0x0A, 0x05, 0x01, 0x08];
    for value in [xmin, ymin, xmin + width - 1, ymin + height - 1] {
        data.extend_from_slice(&value.to_le_bytes());
    }
    data.resize(128, 0);
    data
}

// -----------------------------------------------------------------------------
// SWF
// -----------------------------------------------------------------------------

/// Pack a SWF RECT (`nbits` header + four fields) MSB-first.
pub fn swf_rect(nbits: u32, xmin: i32, xmax: i32, ymin: i32, ymax: i32) -> Vec<u8> {
    let mut bits: Vec<bool> = (0..5).rev().map(|i| (nbits >> i) & 1 == 1).collect();
    for field in [xmin, xmax, ymin, ymax] {
        for i in (0..nbits).rev() {
            bits.push((field >> i) & 1 == 1);
        }
    }

    bits.chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |byte, (i, &bit)| byte | (u8::from(bit) << (7 - i)))
        })
        .collect()
}

/// Uncompressed SWF sized `width` x `height` pixels.
pub fn create_swf(width: i32, height: i32) -> Vec<u8> {
    let mut data = b"FWS\x0A".to_vec();
    data.extend_from_slice(&1000u32.to_le_bytes());
    data.extend(swf_rect(16, 0, width * 20, 0, height * 20));
    data.extend_from_slice(&[0x00, 0x18, 0x01, 0x00]);
    pad(data)
}

/// zlib-compressed SWF sized `width` x `height` pixels.
pub fn create_cws(width: i32, height: i32) -> Vec<u8> {
    let mut body = swf_rect(16, 0, width * 20, 0, height * 20);
    body.extend_from_slice(&[0x00, 0x18, 0x01, 0x00]);
    // Tag stream filler so the inflated body exceeds the inflate cap
    body.extend((0..4096u32).map(|i| (i % 251) as u8));

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&body).unwrap();
    let compressed = encoder.finish().unwrap();

    let mut data = b"CWS\x0A".to_vec();
    data.extend_from_slice(&((body.len() + 8) as u32).to_le_bytes());
    data.extend(compressed);
    pad(data)
}

// -----------------------------------------------------------------------------
// TIFF
// -----------------------------------------------------------------------------

#[derive(Clone, Copy)]
pub enum ByteOrderType {
    LittleEndian,
    BigEndian,
}

/// Builder for single-IFD test TIFF files.
pub struct TiffBuilder {
    byte_order: ByteOrderType,
    ifd_offset: u32,
    entries: Vec<(u16, u16, u32)>,
}

impl TiffBuilder {
    pub fn new() -> Self {
        Self {
            byte_order: ByteOrderType::LittleEndian,
            ifd_offset: 8,
            entries: Vec::new(),
        }
    }

    pub fn with_byte_order(mut self, order: ByteOrderType) -> Self {
        self.byte_order = order;
        self
    }

    /// Place the IFD at `offset` instead of directly after the header.
    pub fn with_ifd_offset(mut self, offset: u32) -> Self {
        self.ifd_offset = offset;
        self
    }

    /// Add an entry with a single inline value.
    pub fn add_entry(mut self, tag: u16, field_type: u16, value: u32) -> Self {
        self.entries.push((tag, field_type, value));
        self
    }

    /// Build the TIFF file data.
    pub fn build(self) -> Vec<u8> {
        let mut data = match self.byte_order {
            ByteOrderType::LittleEndian => b"II".to_vec(),
            ByteOrderType::BigEndian => b"MM".to_vec(),
        };
        self.write_u16(&mut data, 42);
        self.write_u32(&mut data, self.ifd_offset);
        data.resize(self.ifd_offset as usize, 0);

        self.write_u16(&mut data, self.entries.len() as u16);
        for &(tag, field_type, value) in &self.entries {
            self.write_u16(&mut data, tag);
            self.write_u16(&mut data, field_type);
            self.write_u32(&mut data, 1);
            match field_type {
                1 | 6 => data.extend_from_slice(&[value as u8, 0, 0, 0]),
                3 | 8 => {
                    self.write_u16(&mut data, value as u16);
                    data.extend_from_slice(&[0, 0]);
                }
                _ => self.write_u32(&mut data, value),
            }
        }
        self.write_u32(&mut data, 0); // next IFD

        pad(data)
    }

    fn write_u16(&self, data: &mut Vec<u8>, value: u16) {
        match self.byte_order {
            ByteOrderType::LittleEndian => data.extend(&value.to_le_bytes()),
            ByteOrderType::BigEndian => data.extend(&value.to_be_bytes()),
        }
    }

    fn write_u32(&self, data: &mut Vec<u8>, value: u32) {
        match self.byte_order {
            ByteOrderType::LittleEndian => data.extend(&value.to_le_bytes()),
            ByteOrderType::BigEndian => data.extend(&value.to_be_bytes()),
        }
    }
}

impl Default for TiffBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Typical baseline TIFF IFD: subfile type, dimensions, bits, compression,
/// photometric interpretation.
pub fn create_tiff(byte_order: ByteOrderType, width: u32, height: u32) -> Vec<u8> {
    TiffBuilder::new()
        .with_byte_order(byte_order)
        .add_entry(254, 4, 0)
        .add_entry(256, 3, width)
        .add_entry(257, 3, height)
        .add_entry(258, 3, 8)
        .add_entry(259, 3, 1)
        .add_entry(262, 3, 2)
        .build()
}

// =============================================================================
// Text Header Fixtures
// =============================================================================

pub fn create_pnm(magic: &str, width: u32, height: u32) -> Vec<u8> {
    let header = format!("{}\n# created by test\n{} {}\n255\n", magic, width, height);
    pad(header.into_bytes())
}

pub fn create_xv_thumbnail(width: u32, height: u32) -> Vec<u8> {
    let header = format!(
        "P7 332\n#XVVERSION:Version 2.28  Rev: 9/26/92\n#IMGINFO:{w}x{h} Color JPEG\n#END_OF_COMMENTS\n{w} {h} 255\n",
        w = width,
        h = height
    );
    pad(header.into_bytes())
}

pub fn create_pam(width: u32, height: u32) -> Vec<u8> {
    let header = format!(
        "P7\nWIDTH {}\nHEIGHT {}\nDEPTH 4\nMAXVAL 255\nTUPLTYPE RGB_ALPHA\nENDHDR\n",
        width, height
    );
    pad(header.into_bytes())
}

pub fn create_xbm(width: u32, height: u32) -> Vec<u8> {
    let text = format!(
        "#define image_width {}\n#define image_height {}\nstatic unsigned char image_bits[] = {{\n   0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00 }};\n",
        width, height
    );
    pad(text.into_bytes())
}

pub fn create_xpm(width: u32, height: u32) -> Vec<u8> {
    let text = format!(
        "/* XPM */\nstatic char * image_xpm[] = {{\n\"{} {} 2 1\",\n\"  c None\",\n\". c #FF0000\",\n",
        width, height
    );
    pad(text.into_bytes())
}

pub fn create_svg(width: &str, height: &str) -> Vec<u8> {
    let text = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n  <rect width=\"10\" height=\"10\"/>\n</svg>\n",
        width, height
    );
    pad(text.into_bytes())
}
