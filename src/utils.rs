//! Stream read helpers shared by header parsing and the chunk loops.

use crate::error::NacryptError;
use std::io::{ErrorKind, Read};

/// Read exactly `N` bytes into a stack-allocated `[u8; N]`.
#[inline]
pub fn read_exact_span<R, const N: usize>(reader: &mut R) -> Result<[u8; N], NacryptError>
where
    R: Read,
{
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf).map_err(NacryptError::Io)?;
    Ok(buf)
}

/// Fill `buf` from `reader`, stopping early only at end of input.
///
/// Loops over short reads, so a return value smaller than `buf.len()` means the
/// stream is exhausted, the same contract `fread` gives a chunked codec.
#[inline]
pub fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize, NacryptError> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(NacryptError::Io(e)),
        }
    }
    Ok(filled)
}
