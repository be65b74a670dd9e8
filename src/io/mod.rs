//! Byte access for header decoding.
//!
//! - [`ByteCursor`] is the bounds-checked view every decoder reads through.
//! - [`ByteOrder`] and the free endian helpers convert raw bytes to integers.
//! - [`read_prefix`] is the file side, used only by the command-line tool.

mod cursor;
mod endian;
mod prefix;

pub use cursor::ByteCursor;
pub use endian::{read_u16_be, read_u16_le, read_u24_le, read_u32_be, read_u32_le, ByteOrder};
pub use prefix::read_prefix;
