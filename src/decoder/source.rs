//! Byte-source helpers
//!
//! Fixed-width reads over any `Read`. A short read is reported as the number
//! of bytes actually available instead of an `UnexpectedEof` error, so callers
//! can tell a truncated field apart from a failing source.

use std::io::{self, Read};

use crate::error::{HeaderField, Result, SpliceError};

/// Fill `buf` from `reader`, stopping early only at end of data.
///
/// Returns how many bytes were read.
pub(crate) fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Read an `N`-byte array, or `None` if the source ends first
pub(crate) fn read_array<R: Read, const N: usize>(reader: &mut R) -> io::Result<Option<[u8; N]>> {
    let mut buf = [0u8; N];
    let read = read_full(reader, &mut buf)?;
    Ok((read == N).then_some(buf))
}

/// Read exactly `len` bytes, or `None` if the source ends first.
///
/// Never allocates more than the source actually supplies.
pub(crate) fn read_bytes<R: Read>(reader: &mut R, len: usize) -> io::Result<Option<Vec<u8>>> {
    let mut buf = Vec::new();
    reader.by_ref().take(len as u64).read_to_end(&mut buf)?;
    Ok((buf.len() == len).then_some(buf))
}

/// Read one fixed-width header field
///
/// A short read becomes `TruncatedHeader` naming the field.
pub(crate) fn read_header_field<R: Read, const N: usize>(
    reader: &mut R,
    field: HeaderField,
) -> Result<[u8; N]> {
    debug_assert_eq!(field.width(), N);
    let mut buf = [0u8; N];
    let available = read_full(reader, &mut buf)?;
    if available < N {
        return Err(SpliceError::TruncatedHeader {
            field,
            expected: N,
            available,
        });
    }
    Ok(buf)
}

/// Decode a NUL-padded text field, dropping only the trailing NUL run
pub(crate) fn trim_nul_padding(bytes: &[u8]) -> String {
    let end = bytes
        .iter()
        .rposition(|b| *b != 0)
        .map_or(0, |last| last + 1);
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}
