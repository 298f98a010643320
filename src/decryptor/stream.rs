//! Streaming open loop: sealed chunks in, verified plaintext out, with the
//! stream/file termination cross-check.

use std::io::{Read, Write};

use crate::consts::CHUNK_SIZE;
use crate::crypto::secretstream::{ChunkTag, OpenState, ABYTES};
use crate::error::NacryptError;
use crate::utils::read_up_to;

/// Open and verify sealed chunks until the FINAL chunk lands exactly at input
/// exhaustion.
///
/// Termination consistency, checked after every verified chunk:
///
/// - FINAL tag while input remains → [`NacryptError::PrematureFinalTag`]
///   (trailing bytes the stream did not account for)
/// - input exhausted on a CONTINUE tag, or exhausted on a chunk boundary with
///   no chunk at all → [`NacryptError::TruncatedStream`] (the file was cut
///   short)
///
/// Both are fatal and non-retriable. Chunks already written to `output` are
/// not retracted; the caller owns discarding partial output.
pub fn open_stream<R, W>(
    input: &mut R,
    output: &mut W,
    state: &mut OpenState,
) -> Result<(), NacryptError>
where
    R: Read,
    W: Write,
{
    let mut buf = vec![0u8; CHUNK_SIZE + ABYTES];
    loop {
        let rlen = read_up_to(input, &mut buf)?;
        if rlen == 0 {
            // Previous chunk said CONTINUE, but the file ended on the boundary.
            return Err(NacryptError::TruncatedStream);
        }
        let eof = rlen < buf.len();

        let (plaintext, tag) = state.pull(&buf[..rlen])?;

        if !eof && tag == ChunkTag::Final {
            return Err(NacryptError::PrematureFinalTag);
        }
        if eof && tag == ChunkTag::Continue {
            return Err(NacryptError::TruncatedStream);
        }

        output.write_all(&plaintext)?;
        if eof {
            return Ok(());
        }
    }
}
