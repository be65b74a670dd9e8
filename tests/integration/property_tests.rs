//! Property tests for the dispatcher.
//!
//! Tests verify, over arbitrary input:
//! - Buffers shorter than the minimum prefix are always Unknown
//! - Buffers matching no signature are always Unknown
//! - Identification is deterministic
//! - A recognized result always carries non-zero dimensions
//! - Decoders never panic, even behind a valid signature

use proptest::prelude::*;

use imgprobe::{find_signature, identify, FormatTag, ImageInfo, MIN_PREFIX_LEN};

/// Leading bytes of every signature in the table.
const SIGNATURE_PREFIXES: &[&[u8]] = &[
    &[0xFF, 0xD8],
    &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R'],
    &[0x8A, 0x4D, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x1C, b'M', b'H', b'D', b'R'],
    b"GIF89a",
    b"RIFF\0\0\0\0WEBPVP8 ",
    b"RIFF\0\0\0\0WEBPVP8L",
    b"RIFF\0\0\0\0WEBPVP8X",
    b"BM",
    b"P6\n",
    b"P7 332\n",
    b"P7\nWIDTH ",
    b"#define ",
    b"/* XPM */\n\"",
    b"MM\0*",
    b"II*\0",
    b"8BPS",
    b"FWS",
    b"CWS",
    &[0x01, 0xDA, 0x5B, 0x01, 0x00, 0x5D],
    &[0x59, 0xA6, 0x6A, 0x95],
    &[0x0A, 0x05, 0x01],
    b"<svg width=\"",
];

fn signed_buffer() -> impl Strategy<Value = Vec<u8>> {
    (
        prop::sample::select(SIGNATURE_PREFIXES),
        prop::collection::vec(any::<u8>(), MIN_PREFIX_LEN..1024),
    )
        .prop_map(|(prefix, mut tail)| {
            let n = prefix.len().min(tail.len());
            tail[..n].copy_from_slice(&prefix[..n]);
            tail
        })
}

fn assert_well_formed(info: ImageInfo) {
    if info.is_unknown() {
        assert_eq!(info, ImageInfo::unknown());
    } else {
        assert!(info.width() > 0 && info.height() > 0);
        assert!(FormatTag::ALL.contains(&info.format()));
    }
}

proptest! {
    #[test]
    fn test_short_buffers_are_unknown(data in prop::collection::vec(any::<u8>(), 0..MIN_PREFIX_LEN)) {
        prop_assert_eq!(identify(&data), ImageInfo::unknown());
    }

    #[test]
    fn test_short_signed_buffers_are_unknown(data in signed_buffer(), len in 0..MIN_PREFIX_LEN) {
        prop_assert!(identify(&data[..len]).is_unknown());
    }

    #[test]
    fn test_unmatched_buffers_are_unknown(data in prop::collection::vec(any::<u8>(), MIN_PREFIX_LEN..2048)) {
        prop_assume!(find_signature(&data).is_none());
        prop_assert_eq!(identify(&data), ImageInfo::unknown());
    }

    #[test]
    fn test_identify_is_deterministic(data in prop::collection::vec(any::<u8>(), 0..2048)) {
        prop_assert_eq!(identify(&data), identify(&data));
    }

    #[test]
    fn test_arbitrary_bytes_never_panic(data in prop::collection::vec(any::<u8>(), 0..4096)) {
        assert_well_formed(identify(&data));
    }

    #[test]
    fn test_signed_garbage_never_panics(data in signed_buffer()) {
        let info = identify(&data);
        assert_well_formed(info);
        prop_assert_eq!(info, identify(&data));
    }
}
