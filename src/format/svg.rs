//! SVG root element attributes.
//!
//! Width and height come from the first `width` and `height` attributes
//! found anywhere in the prefix that match
//!
//! ```text
//! <name> \s* = \s* ["'] \d* \.? \d+ [px]
//! ```
//!
//! Fractional lengths keep their integer part and any unit after the number
//! is ignored. Attributes without a numeric value are skipped.

use crate::error::DecodeError;
use crate::io::ByteCursor;

use super::info::{FormatTag, ImageInfo};

pub fn decode(data: &[u8]) -> Result<ImageInfo, DecodeError> {
    let width = find_length(data, b"width")?.ok_or(DecodeError::MissingDimension("SVG width"))?;
    let height =
        find_length(data, b"height")?.ok_or(DecodeError::MissingDimension("SVG height"))?;
    ImageInfo::new(FormatTag::Svg, width, height)
}

/// Integer part of the first `name="<number>"` attribute value.
fn find_length(data: &[u8], name: &[u8]) -> Result<Option<u32>, DecodeError> {
    for (start, window) in data.windows(name.len()).enumerate() {
        if window != name {
            continue;
        }
        if let Some(value) = length_at(data, start + name.len())? {
            return Ok(Some(value));
        }
    }
    Ok(None)
}

/// Match `\s*=\s*["']\d*\.?\d+` at `offset`.
///
/// Once the pattern matches, an integer part too large for u32 fails the
/// decode instead of moving on to a later attribute.
fn length_at(data: &[u8], offset: usize) -> Result<Option<u32>, DecodeError> {
    let Ok(mut cursor) = ByteCursor::at(data, offset) else {
        return Ok(None);
    };

    cursor.skip_whitespace();
    if cursor.read_u8().ok() != Some(b'=') {
        return Ok(None);
    }
    cursor.skip_whitespace();
    if !matches!(cursor.read_u8().ok(), Some(b'"' | b'\'')) {
        return Ok(None);
    }

    let has_integer = matches!(cursor.peek_u8(), Some(b'0'..=b'9'));
    if has_integer {
        let value = cursor
            .read_decimal()
            .map_err(|_| DecodeError::Malformed("SVG length overflows u32"))?;
        return Ok(Some(value));
    }

    // A fraction only counts when digits follow the point
    let has_fraction =
        cursor.read_u8().ok() == Some(b'.') && matches!(cursor.peek_u8(), Some(b'0'..=b'9'));
    Ok(has_fraction.then_some(0))
}
