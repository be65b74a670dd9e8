//! X BitMap.
//!
//! XBM files are C source. The first line is the width `#define` and the
//! next non-blank line is the height `#define`:
//!
//! ```text
//! #define logo_width 50
//! #define logo_height 10
//! static unsigned char logo_bits[] = { ... };
//! ```

use crate::error::DecodeError;
use crate::io::ByteCursor;

use super::info::{FormatTag, ImageInfo};

const DEFINE: &[u8] = b"#define";

pub fn decode(data: &[u8]) -> Result<ImageInfo, DecodeError> {
    let mut lines = ByteCursor::new(data);

    let width = lines
        .read_line()
        .and_then(define_value)
        .ok_or(DecodeError::MissingDimension("XBM width #define"))?;
    let height = next_non_blank(&mut lines)
        .and_then(define_value)
        .ok_or(DecodeError::MissingDimension("XBM height #define"))?;

    ImageInfo::new(FormatTag::Xbm, width, height)
}

fn next_non_blank<'a>(lines: &mut ByteCursor<'a>) -> Option<&'a [u8]> {
    loop {
        let line = lines.read_line()?;
        if !line.iter().all(u8::is_ascii_whitespace) {
            return Some(line);
        }
    }
}

/// Value of a `#define NAME VALUE` line with a decimal value.
fn define_value(line: &[u8]) -> Option<u32> {
    let mut cursor = ByteCursor::new(line);
    if cursor.read_bytes(DEFINE.len()).ok()? != DEFINE {
        return None;
    }
    cursor.skip_whitespace();
    cursor.read_token().ok()?;
    cursor.skip_whitespace();
    let value = cursor.read_decimal().ok()?;
    cursor.skip_whitespace();
    cursor.is_empty().then_some(value)
}
