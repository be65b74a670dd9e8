//! Command-line configuration for the `imgprobe` binary.
//!
//! Options can also be set through environment variables:
//!
//! - `IMGPROBE_MAX_BYTES` - Bytes to read from the start of the file (default: 1024)
//! - `IMGPROBE_OUTPUT` - Output format, `text` or `json` (default: text)
//!
//! # Example
//!
//! ```ignore
//! use clap::Parser;
//! use imgprobe::config::Config;
//!
//! let config = Config::parse();
//! config.validate()?;
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::format::MIN_PREFIX_LEN;

// =============================================================================
// Default Values
// =============================================================================

/// Default number of bytes read from the start of the file.
pub const DEFAULT_MAX_BYTES: usize = 1024;

/// Upper bound for `--max-bytes` (16 MiB).
pub const MAX_PREFIX_BYTES: usize = 16 * 1024 * 1024;

// =============================================================================
// CLI Arguments
// =============================================================================

/// Output format for the identification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `<format> <mime> <width> <height>` on one line
    #[default]
    Text,
    /// JSON object with format, mime, width and height
    Json,
}

/// imgprobe - Identify an image's format and dimensions from its header.
///
/// Reads only the first bytes of the file; the pixel data is never decoded.
#[derive(Parser, Debug, Clone)]
#[command(name = "imgprobe")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Image file to inspect.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of bytes to read from the start of the file.
    ///
    /// Kodak Photo CD images need at least 3841 bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_BYTES, env = "IMGPROBE_MAX_BYTES")]
    pub max_bytes: usize,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "IMGPROBE_OUTPUT")]
    pub output: OutputFormat,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_bytes < MIN_PREFIX_LEN || self.max_bytes > MAX_PREFIX_BYTES {
            return Err(format!(
                "max_bytes must be between {} and {} (16MB)",
                MIN_PREFIX_LEN, MAX_PREFIX_BYTES
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
