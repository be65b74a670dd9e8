//! X PixMap.
//!
//! XPM files are C source holding an array of strings. The first string is
//! the values line, `"<width> <height> <colors> <chars per pixel> ..."`:
//!
//! ```text
//! /* XPM */
//! static char * icon[] = {
//! "64 38 2 1",
//! ```

use crate::error::DecodeError;
use crate::io::ByteCursor;

use super::info::{FormatTag, ImageInfo};

const QUOTE: u8 = b'"';

pub fn decode(data: &[u8]) -> Result<ImageInfo, DecodeError> {
    let mut lines = ByteCursor::new(data);

    while let Some(line) = lines.read_line() {
        for group in line.split(|&b| b == QUOTE).skip(1).step_by(2) {
            if let Some((width, height)) = values_line(group)? {
                return ImageInfo::new(FormatTag::Xpm, width, height);
            }
        }
    }

    Err(DecodeError::MissingDimension("XPM values line"))
}

/// Width and height from a quoted group starting with at least three
/// whitespace-separated unsigned integers. A matching group whose numbers
/// overflow u32 fails the decode.
fn values_line(group: &[u8]) -> Result<Option<(u32, u32)>, DecodeError> {
    let mut cursor = ByteCursor::new(group);
    let mut tokens = [&group[..0]; 3];

    for token in &mut tokens {
        cursor.skip_whitespace();
        match cursor.read_token() {
            Ok(digits) if digits.iter().all(u8::is_ascii_digit) => *token = digits,
            _ => return Ok(None),
        }
    }

    let [width, height, colors] = tokens.map(|digits| {
        ByteCursor::new(digits)
            .read_decimal()
            .map_err(|_| DecodeError::Malformed("XPM value overflows u32"))
    });
    colors?;
    Ok(Some((width?, height?)))
}
