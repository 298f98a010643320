//! Streaming seal loop: plaintext in, sealed chunks out.

use std::io::{Read, Write};
use zeroize::Zeroizing;

use crate::consts::CHUNK_SIZE;
use crate::crypto::secretstream::{ChunkTag, SealState};
use crate::error::NacryptError;
use crate::utils::read_up_to;

/// Split `input` into chunks of up to [`CHUNK_SIZE`] bytes and seal each one,
/// tagging the last FINAL.
///
/// Only a short read can end the loop, so an input that is an exact multiple
/// of the chunk size (including an empty input) gets a zero-length FINAL
/// chunk. One chunk buffer is held at a time and zeroed on release; the whole
/// file is never in memory.
pub fn seal_stream<R, W>(
    input: &mut R,
    output: &mut W,
    state: &mut SealState,
) -> Result<(), NacryptError>
where
    R: Read,
    W: Write,
{
    let mut buf = Zeroizing::new(vec![0u8; CHUNK_SIZE]);
    loop {
        let n = read_up_to(input, buf.as_mut_slice())?;
        let eof = n < CHUNK_SIZE;
        let tag = if eof { ChunkTag::Final } else { ChunkTag::Continue };
        let sealed = state.push(&buf[..n], tag)?;
        output.write_all(&sealed)?;
        if eof {
            return Ok(());
        }
    }
}
