use std::path::PathBuf;

use thiserror::Error;

/// Reasons a header decoder can reject a buffer.
///
/// These never escape [`crate::identify`]; every variant collapses to
/// [`crate::FormatTag::Unknown`] there. They exist so decoders can use `?`
/// and so the rejection reason can be logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A read would run past the end of the supplied buffer
    #[error("Read past end of buffer: needed {needed} bytes at offset {offset}, buffer has {available}")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// Header structure does not match the format's layout
    #[error("Malformed header: {0}")]
    Malformed(&'static str),

    /// The header parsed but one of the dimensions is zero
    #[error("Zero dimension: {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    /// A required dimension field was never found
    #[error("Missing dimension: {0}")]
    MissingDimension(&'static str),

    /// The compressed body could not be inflated
    #[error("Inflate error: {0}")]
    Inflate(String),
}

/// Errors reading an input file for the command-line tool.
#[derive(Debug, Error)]
pub enum IoError {
    /// The file could not be opened
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file opened but reading it failed
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}
