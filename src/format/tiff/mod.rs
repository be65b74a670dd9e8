//! TIFF dimension lookup.
//!
//! - **Byte order**: TIFF files declare their endianness (II = little-endian,
//!   MM = big-endian) in the header. All multi-byte values, including the
//!   IFD entries, are read in that order.
//!
//! - **IFD (Image File Directory)**: a counted list of 12-byte tag entries.
//!   ImageWidth (256) and ImageLength (257) in the first IFD give the
//!   dimensions of the main image.

mod parser;
mod tags;

pub use parser::{decode, IfdEntry, TiffHeader};
pub use tags::{FieldType, TiffTag};
