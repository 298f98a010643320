//! Container-level encryption: header, key derivation, sealed chunk stream.

use log::info;
use std::io::{Read, Write};

use crate::consts::MAX_PASSWORD_LEN;
use crate::crypto::kdf::derive_key;
use crate::crypto::secretstream::SealState;
use crate::encryptor::stream::seal_stream;
use crate::error::NacryptError;
use crate::header::ContainerHeader;
use crate::secret::Password;

/// Encrypt `input` into a nacrypt container on `output`.
///
/// Writes the self-describing preamble (with `opslimit`/`memlimit` persisted
/// and a fresh random salt), derives the file key, then seals the plaintext
/// into chunks, the last tagged FINAL. An empty input still produces exactly
/// one empty FINAL chunk, so the format is self-terminating.
///
/// The derived key lives in a wiped-on-drop buffer and is released on every
/// exit path, success or error.
pub fn encrypt<R, W>(
    mut input: R,
    mut output: W,
    password: &Password,
    opslimit: u32,
    memlimit: u32,
) -> Result<(), NacryptError>
where
    R: Read,
    W: Write,
{
    if password.is_empty() {
        return Err(NacryptError::Crypto("empty password".into()));
    }
    if password.len() > MAX_PASSWORD_LEN {
        return Err(NacryptError::Crypto("password too long".into()));
    }

    let header = ContainerHeader::init(opslimit, memlimit)?;
    header.write(&mut output)?;

    info!("deriving key (opslimit {opslimit}, memlimit {memlimit})");
    let key = derive_key(password, &header.salt, opslimit, memlimit)?;
    info!("key derived");

    let (mut state, stream_header) = SealState::init(&key);
    output.write_all(&stream_header)?;

    seal_stream(&mut input, &mut output, &mut state)
}
