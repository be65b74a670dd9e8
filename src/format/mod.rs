//! Image format identification.
//!
//! [`identify`] matches a byte prefix against the signature table in
//! [`detect`] and runs the matching header decoder. Each decoder module reads
//! only the fixed header fields it needs:
//!
//! - **Fixed offsets**: BMP, GIF, PNG/MNG, PSD, SGI, Sun raster, PCX, PCD
//! - **Text headers**: PBM/PGM/PPM/PAM, XBM, XPM, SVG
//! - **Structured**: JPEG marker scan, WebP chunk variants, TIFF IFD walk,
//!   SWF bit-packed frame rectangle (optionally zlib-compressed)

pub mod detect;
pub mod tiff;

mod bmp;
mod gif;
mod info;
mod jpeg;
mod pcd;
mod pcx;
mod png;
mod pnm;
mod psd;
mod raster;
mod svg;
mod swf;
mod webp;
mod xbm;
mod xpm;

pub use detect::{
    find_signature, identify, DecodeFn, Pattern, Predicate, Signature, MIN_PREFIX_LEN, SIGNATURES,
};
pub use info::{FormatTag, ImageInfo};
pub use swf::SWF_INFLATE_LIMIT;
