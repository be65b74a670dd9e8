//! Format tags and the result record returned by [`identify`](super::identify).

use std::fmt;

use serde::Serialize;

use crate::error::DecodeError;

// =============================================================================
// FormatTag
// =============================================================================

/// Image formats the dispatcher can recognize, plus the `Unknown` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatTag {
    /// Not recognized, or recognized but the header did not yield valid dimensions
    Unknown,
    /// Windows / OS2 bitmap
    Bmp,
    /// Graphics Interchange Format (87a / 89a)
    Gif,
    /// JPEG / JFIF
    Jpeg,
    /// Multiple-image Network Graphics
    Mng,
    /// Portable bitmap (P1 / P4)
    Pbm,
    /// Kodak Photo CD
    Pcd,
    /// ZSoft PCX
    Pcx,
    /// Portable graymap (P2 / P5)
    Pgm,
    /// Portable Network Graphics
    Png,
    /// Portable pixmap (P3 / P6)
    Ppm,
    /// Adobe Photoshop document
    Psd,
    /// Sun raster
    Ras,
    /// SGI image
    Rgb,
    /// Scalable Vector Graphics
    Svg,
    /// Shockwave Flash (plain or zlib-compressed)
    Swf,
    /// Tagged Image File Format
    Tiff,
    /// WebP (lossy, lossless or extended)
    Webp,
    /// X BitMap
    Xbm,
    /// X PixMap
    Xpm,
    /// XV thumbnail / portable arbitrary map (P7)
    Xv,
}

impl FormatTag {
    /// Every recognizable format, excluding `Unknown`.
    pub const ALL: [FormatTag; 20] = [
        FormatTag::Bmp,
        FormatTag::Gif,
        FormatTag::Jpeg,
        FormatTag::Mng,
        FormatTag::Pbm,
        FormatTag::Pcd,
        FormatTag::Pcx,
        FormatTag::Pgm,
        FormatTag::Png,
        FormatTag::Ppm,
        FormatTag::Psd,
        FormatTag::Ras,
        FormatTag::Rgb,
        FormatTag::Svg,
        FormatTag::Swf,
        FormatTag::Tiff,
        FormatTag::Webp,
        FormatTag::Xbm,
        FormatTag::Xpm,
        FormatTag::Xv,
    ];

    /// Canonical lowercase short name.
    pub const fn name(&self) -> &'static str {
        match self {
            FormatTag::Unknown => "unknown",
            FormatTag::Bmp => "bmp",
            FormatTag::Gif => "gif",
            FormatTag::Jpeg => "jpeg",
            FormatTag::Mng => "mng",
            FormatTag::Pbm => "pbm",
            FormatTag::Pcd => "pcd",
            FormatTag::Pcx => "pcx",
            FormatTag::Pgm => "pgm",
            FormatTag::Png => "png",
            FormatTag::Ppm => "ppm",
            FormatTag::Psd => "psd",
            FormatTag::Ras => "ras",
            FormatTag::Rgb => "rgb",
            FormatTag::Svg => "svg",
            FormatTag::Swf => "swf",
            FormatTag::Tiff => "tiff",
            FormatTag::Webp => "webp",
            FormatTag::Xbm => "xbm",
            FormatTag::Xpm => "xpm",
            FormatTag::Xv => "xv",
        }
    }

    /// MIME type string.
    pub const fn mime(&self) -> &'static str {
        match self {
            FormatTag::Unknown => "application/octet-stream",
            FormatTag::Bmp => "image/bmp",
            FormatTag::Gif => "image/gif",
            FormatTag::Jpeg => "image/jpeg",
            FormatTag::Mng => "video/x-mng",
            FormatTag::Pbm => "image/x-portable-bitmap",
            FormatTag::Pcd => "image/x-photo-cd",
            FormatTag::Pcx => "image/x-pcx",
            FormatTag::Pgm => "image/x-portable-graymap",
            FormatTag::Png => "image/png",
            FormatTag::Ppm => "image/x-portable-pixmap",
            FormatTag::Psd => "image/vnd.adobe.photoshop",
            FormatTag::Ras => "image/x-sun-raster",
            FormatTag::Rgb => "image/x-rgb",
            FormatTag::Svg => "image/svg+xml",
            FormatTag::Swf => "application/x-shockwave-flash",
            FormatTag::Tiff => "image/tiff",
            FormatTag::Webp => "image/webp",
            FormatTag::Xbm => "image/x-xbitmap",
            FormatTag::Xpm => "image/x-xpixmap",
            FormatTag::Xv => "image/x-portable-arbitrarymap",
        }
    }

    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, FormatTag::Unknown)
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// ImageInfo
// =============================================================================

/// Format and pixel dimensions of an image.
///
/// A value tagged with a real format always has non-zero width and height;
/// [`ImageInfo::new`] is the only way to build one. Anything else is
/// [`ImageInfo::unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ImageInfo {
    format: FormatTag,
    width: u32,
    height: u32,
}

impl ImageInfo {
    /// Build a result for a recognized format.
    ///
    /// # Errors
    /// `ZeroDimension` if either dimension is zero. Passing
    /// `FormatTag::Unknown` is a decoder bug and is rejected as malformed.
    pub fn new(format: FormatTag, width: u32, height: u32) -> Result<Self, DecodeError> {
        if !format.is_known() {
            return Err(DecodeError::Malformed("decoder produced an unknown tag"));
        }
        if width == 0 || height == 0 {
            return Err(DecodeError::ZeroDimension { width, height });
        }
        Ok(Self {
            format,
            width,
            height,
        })
    }

    /// The "not recognized" result: `Unknown` with zero dimensions.
    pub const fn unknown() -> Self {
        Self {
            format: FormatTag::Unknown,
            width: 0,
            height: 0,
        }
    }

    #[inline]
    pub const fn format(&self) -> FormatTag {
        self.format
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub const fn is_unknown(&self) -> bool {
        !self.format.is_known()
    }
}

impl Default for ImageInfo {
    fn default() -> Self {
        Self::unknown()
    }
}

// =============================================================================
// Tests
// =============================================================================
