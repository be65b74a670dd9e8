//! Netpbm family: PBM, PGM, PPM and the P7 variants.
//!
//! ```text
//! P<digit> (<ws> | # comment) <width> <ws> [# comment] <height> ...
//! ```
//!
//! `P7` is shared by two unrelated formats. XV thumbnails write `P7 332`
//! followed by the usual width/height pair; PAM writes keyword lines
//! (`WIDTH 64`, `HEIGHT 38`, ...) terminated by `ENDHDR`. Both report as
//! [`FormatTag::Xv`].

use crate::error::DecodeError;
use crate::io::ByteCursor;

use super::info::{FormatTag, ImageInfo};

const COMMENT: u8 = b'#';

/// Colour depth marker that XV writes after `P7`
const XV_THUMBNAIL_MARKER: &[u8] = b"332";

pub fn decode(data: &[u8]) -> Result<ImageInfo, DecodeError> {
    let mut cursor = ByteCursor::new(data);
    let magic = cursor.read_bytes(2)?;

    let format = match magic[1] {
        b'1' | b'4' => FormatTag::Pbm,
        b'2' | b'5' => FormatTag::Pgm,
        b'3' | b'6' => FormatTag::Ppm,
        b'7' => FormatTag::Xv,
        _ => return Err(DecodeError::Malformed("unsupported PNM magic")),
    };

    if !cursor.peek_u8().is_some_and(|b| b.is_ascii_whitespace() || b == COMMENT) {
        return Err(DecodeError::Malformed("PNM magic not followed by separator"));
    }

    let (width, height) = if format == FormatTag::Xv {
        read_arbitrary_map(&mut cursor)?
    } else {
        read_dimension_pair(&mut cursor)?
    };

    ImageInfo::new(format, width, height)
}

fn read_dimension_pair(cursor: &mut ByteCursor<'_>) -> Result<(u32, u32), DecodeError> {
    cursor.skip_whitespace_and_comments(COMMENT);
    let width = cursor.read_decimal()?;
    cursor.skip_whitespace_and_comments(COMMENT);
    let height = cursor.read_decimal()?;
    Ok((width, height))
}

fn read_arbitrary_map(cursor: &mut ByteCursor<'_>) -> Result<(u32, u32), DecodeError> {
    cursor.skip_whitespace_and_comments(COMMENT);

    let mut lookahead = *cursor;
    if lookahead.read_token()? == XV_THUMBNAIL_MARKER {
        *cursor = lookahead;
        return read_dimension_pair(cursor);
    }

    let mut width = None;
    let mut height = None;

    loop {
        cursor.skip_whitespace_and_comments(COMMENT);
        match cursor.read_token()? {
            b"ENDHDR" => break,
            b"WIDTH" => {
                cursor.skip_whitespace();
                width = Some(cursor.read_decimal()?);
            }
            b"HEIGHT" => {
                cursor.skip_whitespace();
                height = Some(cursor.read_decimal()?);
            }
            // DEPTH, MAXVAL, TUPLTYPE
            _ => {
                cursor.read_line();
            }
        }

        if let (Some(width), Some(height)) = (width, height) {
            return Ok((width, height));
        }
    }

    let width = width.ok_or(DecodeError::MissingDimension("PAM WIDTH"))?;
    let height = height.ok_or(DecodeError::MissingDimension("PAM HEIGHT"))?;
    Ok((width, height))
}
