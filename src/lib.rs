//! # imgprobe
//!
//! Identify an image's format and pixel dimensions from the first bytes of
//! the file, without decoding any pixel data.
//!
//! ## Features
//!
//! - **Prefix-only**: about 1 KiB of input is enough for every supported format
//!   except Kodak Photo CD
//! - **Panic-free on hostile input**: every read is bounds checked and the
//!   compressed SWF inflate is capped
//! - **Pure core**: [`identify`] does no I/O and keeps no state
//!
//! ## Supported Formats
//!
//! JPEG, PNG, MNG, GIF, WebP (lossy, lossless, extended), BMP, PBM/PGM/PPM,
//! XV thumbnails and PAM, XBM, XPM, TIFF (both byte orders), PSD, Photo CD,
//! SWF (plain and compressed), SGI, Sun raster, PCX and SVG.
//!
//! ## Architecture
//!
//! - [`io`] - Bounds-checked byte cursor and file prefix reading
//! - [`mod@format`] - Signature table, dispatcher and per-format header decoders
//! - [`config`] - CLI configuration types
//! - [`error`] - Decoder and I/O error types
//!
//! ## Example
//!
//! ```rust
//! use imgprobe::{identify, FormatTag};
//!
//! let mut header = b"GIF89a".to_vec();
//! header.extend_from_slice(&[0x4D, 0x01, 0xC2, 0x00]);
//! header.resize(80, 0);
//!
//! let info = identify(&header);
//! assert_eq!(info.format(), FormatTag::Gif);
//! assert_eq!((info.width(), info.height()), (333, 194));
//!
//! // Too short to identify
//! assert!(identify(b"GIF89a").is_unknown());
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod io;

// Re-export commonly used types
pub use config::{Config, OutputFormat, DEFAULT_MAX_BYTES, MAX_PREFIX_BYTES};
pub use error::{DecodeError, IoError};
pub use format::{find_signature, identify, FormatTag, ImageInfo, Signature, MIN_PREFIX_LEN};
pub use io::{read_prefix, ByteCursor, ByteOrder};
