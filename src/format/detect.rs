//! Signature table and dispatch.
//!
//! Detection is a two-step process:
//!
//! 1. Walk [`SIGNATURES`] in order and pick the first entry whose byte
//!    predicates all hold. Order is the tie-break between formats whose
//!    signatures could overlap.
//! 2. Run that entry's decoder once. Any decoder error, including a zero
//!    dimension, makes the whole call return [`ImageInfo::unknown`].
//!
//! No other signature is tried after a decoder fails.

use std::fmt;

use tracing::{debug, trace};

use crate::error::DecodeError;

use super::info::ImageInfo;
use super::{bmp, gif, jpeg, pcd, pcx, png, pnm, psd, raster, svg, swf, tiff, webp, xbm, xpm};

// =============================================================================
// Constants
// =============================================================================

/// Buffers shorter than this are never identified.
pub const MIN_PREFIX_LEN: usize = 80;

// =============================================================================
// Signature Predicates
// =============================================================================

/// What the bytes at a predicate's offset must look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Exactly these bytes
    Exact(&'static [u8]),
    /// A single byte from this set
    OneOf(&'static [u8]),
    /// A single byte within `lo..=hi`
    Range(u8, u8),
    /// Any single byte
    Any,
}

impl Pattern {
    /// Number of bytes the pattern covers.
    pub const fn len(&self) -> usize {
        match self {
            Pattern::Exact(bytes) => bytes.len(),
            Pattern::OneOf(_) | Pattern::Range(..) | Pattern::Any => 1,
        }
    }

    fn matches(&self, bytes: &[u8]) -> bool {
        match (self, bytes.first()) {
            (Pattern::Exact(expected), _) => bytes == *expected,
            (Pattern::OneOf(set), Some(b)) => set.contains(b),
            (Pattern::Range(lo, hi), Some(b)) => (*lo..=*hi).contains(b),
            (Pattern::Any, Some(_)) => true,
            (_, None) => false,
        }
    }
}

/// A pattern anchored at a byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predicate {
    pub offset: usize,
    pub pattern: Pattern,
}

impl Predicate {
    pub const fn at(offset: usize, pattern: Pattern) -> Self {
        Self { offset, pattern }
    }

    /// Check the predicate against `data`. Bytes past the end never match.
    pub fn matches(&self, data: &[u8]) -> bool {
        let end = self.offset + self.pattern.len();
        data.get(self.offset..end)
            .is_some_and(|bytes| self.pattern.matches(bytes))
    }
}

/// Header decoder invoked once a signature matches.
pub type DecodeFn = fn(&[u8]) -> Result<ImageInfo, DecodeError>;

/// One row of the dispatch table.
#[derive(Clone, Copy)]
pub struct Signature {
    /// Short label used in logs
    pub name: &'static str,
    /// All must hold for the row to match
    pub predicates: &'static [Predicate],
    /// Minimum buffer length for the row to be considered
    pub min_len: usize,
    pub decode: DecodeFn,
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("name", &self.name)
            .field("predicates", &self.predicates)
            .field("min_len", &self.min_len)
            .finish_non_exhaustive()
    }
}

impl Signature {
    pub fn matches(&self, data: &[u8]) -> bool {
        data.len() >= self.min_len && self.predicates.iter().all(|p| p.matches(data))
    }
}

const fn row(
    name: &'static str,
    predicates: &'static [Predicate],
    min_len: usize,
    decode: DecodeFn,
) -> Signature {
    Signature {
        name,
        predicates,
        min_len,
        decode,
    }
}

// =============================================================================
// Signature Table
// =============================================================================

use Pattern::{Any, Exact, OneOf, Range};

/// Struct-literal form of [`Predicate::at`] for the static table.
macro_rules! at {
    ($offset:expr, $pattern:expr) => {
        Predicate {
            offset: $offset,
            pattern: $pattern,
        }
    };
}

/// Every recognized signature, in match priority order.
pub static SIGNATURES: &[Signature] = &[
    row("jpeg", &[at!(0, Exact(&jpeg::SOI))], MIN_PREFIX_LEN, jpeg::decode),
    row("png", &[at!(0, Exact(&png::PNG_SIGNATURE))], MIN_PREFIX_LEN, png::decode),
    row("mng", &[at!(0, Exact(&png::MNG_SIGNATURE))], MIN_PREFIX_LEN, png::decode_mng),
    row(
        "gif",
        &[
            at!(0, Exact(b"GIF8")),
            at!(4, OneOf(b"7,9")),
            at!(5, Exact(b"a")),
        ],
        MIN_PREFIX_LEN,
        gif::decode,
    ),
    row(
        "webp",
        &[
            at!(0, Exact(b"RIFF")),
            at!(8, Exact(b"WEBP")),
            at!(12, Exact(b"VP8")),
            at!(15, OneOf(b" LX")),
        ],
        MIN_PREFIX_LEN,
        webp::decode,
    ),
    row("bmp", &[at!(0, Exact(b"BM"))], MIN_PREFIX_LEN, bmp::decode),
    row(
        "pnm",
        &[at!(0, Exact(b"P")), at!(1, Range(b'1', b'7'))],
        MIN_PREFIX_LEN,
        pnm::decode,
    ),
    row("xbm", &[at!(0, Exact(b"#define "))], MIN_PREFIX_LEN, xbm::decode),
    row("xpm", &[at!(0, Exact(b"/* XPM */"))], MIN_PREFIX_LEN, xpm::decode),
    row("tiff-be", &[at!(0, Exact(b"MM\0*"))], MIN_PREFIX_LEN, tiff::decode),
    row("tiff-le", &[at!(0, Exact(b"II*\0"))], MIN_PREFIX_LEN, tiff::decode),
    row("psd", &[at!(0, Exact(b"8BPS"))], MIN_PREFIX_LEN, psd::decode),
    row(
        "pcd",
        &[at!(pcd::PCD_SIGNATURE_OFFSET, Exact(b"PCD"))],
        pcd::PCD_MIN_LEN,
        pcd::decode,
    ),
    row("swf", &[at!(0, Exact(b"FWS"))], MIN_PREFIX_LEN, swf::decode),
    row("cws", &[at!(0, Exact(b"CWS"))], MIN_PREFIX_LEN, swf::decode_compressed),
    row("rgb", &[at!(0, Exact(&raster::SGI_MAGIC))], MIN_PREFIX_LEN, raster::decode_sgi),
    row(
        "ras",
        &[at!(0, Exact(&raster::SUN_RASTER_MAGIC))],
        MIN_PREFIX_LEN,
        raster::decode_sun,
    ),
    row(
        "pcx",
        &[
            at!(0, Exact(&[0x0A])),
            at!(1, Any),
            at!(2, Exact(&[0x01])),
        ],
        MIN_PREFIX_LEN,
        pcx::decode,
    ),
    row(
        "svg",
        &[at!(0, Exact(b"<svg")), at!(4, OneOf(b" \t"))],
        MIN_PREFIX_LEN,
        svg::decode,
    ),
];

// =============================================================================
// Dispatch
// =============================================================================

/// First signature in table order that matches `data`.
pub fn find_signature(data: &[u8]) -> Option<&'static Signature> {
    SIGNATURES.iter().find(|signature| signature.matches(data))
}

/// Identify the format and pixel dimensions of an image from a prefix of
/// its bytes.
///
/// Never fails and never reads outside `data`. Buffers shorter than
/// [`MIN_PREFIX_LEN`], buffers no signature matches, and buffers whose
/// decoder rejects the header all yield [`ImageInfo::unknown`].
///
/// # Arguments
/// * `data` - The first bytes of the file; about 1 KiB is enough for every
///   format except Photo CD, which needs 0xF01 bytes
pub fn identify(data: &[u8]) -> ImageInfo {
    if data.len() < MIN_PREFIX_LEN {
        trace!(len = data.len(), "Buffer shorter than minimum prefix");
        return ImageInfo::unknown();
    }

    let Some(signature) = find_signature(data) else {
        trace!(len = data.len(), "No signature matched");
        return ImageInfo::unknown();
    };

    trace!(signature = signature.name, "Signature matched");

    match (signature.decode)(data) {
        Ok(info) => info,
        Err(e) => {
            debug!(signature = signature.name, error = %e, "Header rejected");
            ImageInfo::unknown()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
