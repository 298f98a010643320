//! Container-level decryption: key derivation, stream init, open loop.

use log::info;
use std::io::{ErrorKind, Read, Write};

use crate::crypto::kdf::derive_key;
use crate::crypto::secretstream::{OpenState, STREAM_HEADER_LEN};
use crate::decryptor::stream::open_stream;
use crate::error::NacryptError;
use crate::header::ContainerHeader;
use crate::secret::Password;
use crate::utils::read_exact_span;

/// Decrypt the chunk stream of a nacrypt container.
///
/// `header` carries the salt and cost parameters parsed from the preamble;
/// `input` must be positioned immediately after it. Verified plaintext is
/// written to `output` chunk by chunk; on a mid-stream failure the caller
/// must treat whatever was already written as untrusted and incomplete.
pub fn decrypt<R, W>(
    mut input: R,
    mut output: W,
    password: &Password,
    header: &ContainerHeader,
) -> Result<(), NacryptError>
where
    R: Read,
    W: Write,
{
    info!(
        "deriving key (opslimit {}, memlimit {})",
        header.opslimit, header.memlimit
    );
    let key = derive_key(password, &header.salt, header.opslimit, header.memlimit)?;
    info!("key derived");

    let stream_header: [u8; STREAM_HEADER_LEN] = match read_exact_span(&mut input) {
        Ok(buf) => buf,
        Err(NacryptError::Io(e)) if e.kind() == ErrorKind::UnexpectedEof => {
            return Err(NacryptError::CorruptStreamHeader)
        }
        Err(e) => return Err(e),
    };
    let mut state = OpenState::init(&key, &stream_header);

    open_stream(&mut input, &mut output, &mut state)
}
