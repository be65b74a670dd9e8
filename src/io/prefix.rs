use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::error::IoError;

/// Read at most `max_bytes` from the start of a file.
///
/// Short files are returned whole. Interrupted reads are retried; any other
/// read failure is reported as [`IoError::Read`].
pub fn read_prefix(path: &Path, max_bytes: usize) -> Result<Vec<u8>, IoError> {
    let file = File::open(path).map_err(|source| IoError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut buf = vec![0u8; max_bytes];
    let mut filled = 0;
    let mut reader = file.take(max_bytes as u64);

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(IoError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    buf.truncate(filled);
    Ok(buf)
}
