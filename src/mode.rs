//! # Mode resolution
//!
//! Decides whether an input stream should be encrypted or decrypted when the
//! caller did not force a mode, by sniffing the container preamble.
//!
//! The rewind in the encrypt fallback is mandatory: without it the sniffed
//! bytes would be silently dropped from the plaintext.

use log::debug;
use std::io::{Read, Seek, SeekFrom};

use crate::error::NacryptError;
use crate::header::ContainerHeader;

/// The caller-declared operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
    /// Sniff the input and decide.
    Unspecified,
}

/// The resolved operation. `Decrypt` carries the already-parsed header, so the
/// stream position sits at the first byte of chunk data.
#[derive(Debug)]
pub enum Operation {
    Encrypt,
    Decrypt(ContainerHeader),
}

/// Resolve `declared` against the content of `input`.
///
/// - `Encrypt`: no sniffing, the stream is untouched.
/// - `Decrypt`: the header must parse; every parse error is fatal and reported
///   distinctly (wrong file type vs. unsupported version/algorithm).
/// - `Unspecified`: a parse miss ([`NacryptError::NotNacryptFile`] or
///   [`NacryptError::InvalidCostParameters`]) rewinds the stream to its start
///   and resolves to `Encrypt`. `Unsupported*` errors propagate instead: a
///   file written by a newer nacrypt must not be silently re-encrypted.
pub fn resolve<R: Read + Seek>(input: &mut R, declared: Mode) -> Result<Operation, NacryptError> {
    match declared {
        Mode::Encrypt => Ok(Operation::Encrypt),
        Mode::Decrypt => {
            let header = ContainerHeader::parse(input)?;
            debug!(
                "found nacrypt header: opslimit {}, memlimit {}",
                header.opslimit, header.memlimit
            );
            Ok(Operation::Decrypt(header))
        }
        Mode::Unspecified => match ContainerHeader::parse(input) {
            Ok(header) => {
                debug!(
                    "found nacrypt header: opslimit {}, memlimit {}; resolving to decrypt",
                    header.opslimit, header.memlimit
                );
                Ok(Operation::Decrypt(header))
            }
            Err(NacryptError::NotNacryptFile) | Err(NacryptError::InvalidCostParameters) => {
                debug!("no valid nacrypt header; resolving to encrypt");
                input.seek(SeekFrom::Start(0))?;
                Ok(Operation::Encrypt)
            }
            Err(e) => Err(e),
        },
    }
}
