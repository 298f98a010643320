//! # Container header
//!
//! The fixed-layout preamble that makes a nacrypt file self-describing:
//!
//! ```text
//! magic[4] | version[1] | kdf_algorithm[1] | enc_algorithm[1] | reserved[1]=0
//!   | opslimit[4, BE] | memlimit[4, BE] | salt[16]
//! ```
//!
//! Cost parameters are persisted in the file so it stays portable across
//! machines with different defaults. The header is constructed once per
//! operation ([`ContainerHeader::init`] for encrypt, [`ContainerHeader::parse`]
//! for decrypt), immutable thereafter, and written/read exactly once at the
//! start of the file.

use rand::rngs::OsRng;
use rand::RngCore;
use std::io::{ErrorKind, Read, Write};

use crate::consts::{
    ENC_ALGORITHM_XCHACHA20POLY1305, FIXED_HEADER_LEN, KDF_ALGORITHM_ARGON2ID, MEMLIMIT_MIN,
    NACRYPT_FORMAT_VERSION, NACRYPT_MAGIC, OPSLIMIT_MAX, SALT_LEN,
};
use crate::error::NacryptError;
use crate::utils::read_exact_span;

/// Parsed (or freshly initialized) container preamble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerHeader {
    pub version: u8,
    pub kdf_algorithm: u8,
    pub enc_algorithm: u8,
    /// Argon2id time cost.
    pub opslimit: u32,
    /// Argon2id memory cost in bytes.
    pub memlimit: u32,
    /// Per-file random salt; never reused across files.
    pub salt: [u8; SALT_LEN],
}

/// Cost parameters a correct encrypt operation can never have produced are
/// treated as "not a valid header", not as "decrypt with these costs".
fn validate_costs(opslimit: u32, memlimit: u32) -> Result<(), NacryptError> {
    if opslimit == 0 || opslimit > OPSLIMIT_MAX || memlimit < MEMLIMIT_MIN {
        return Err(NacryptError::InvalidCostParameters);
    }
    Ok(())
}

impl ContainerHeader {
    /// Build a header for a new encryption: current format version, the only
    /// valid algorithm identifiers, and a fresh random salt.
    pub fn init(opslimit: u32, memlimit: u32) -> Result<Self, NacryptError> {
        validate_costs(opslimit, memlimit)?;
        let mut salt = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);
        Ok(Self {
            version: NACRYPT_FORMAT_VERSION,
            kdf_algorithm: KDF_ALGORITHM_ARGON2ID,
            enc_algorithm: ENC_ALGORITHM_XCHACHA20POLY1305,
            opslimit,
            memlimit,
            salt,
        })
    }

    /// Parse the full preamble from `reader`.
    ///
    /// Returns either a fully valid header or an error, never a half-filled
    /// one. Error classes:
    ///
    /// - [`NacryptError::NotNacryptFile`]: wrong magic, nonzero reserved
    ///   byte, or too few bytes for the preamble at all
    /// - [`NacryptError::UnsupportedVersion`] /
    ///   [`NacryptError::UnsupportedKdfAlgorithm`] /
    ///   [`NacryptError::UnsupportedEncAlgorithm`]: a valid, just
    ///   unimplemented, instance of the format; callers should report these
    ///   distinctly from "wrong file type"
    /// - [`NacryptError::InvalidCostParameters`]: zero or sub-minimum costs,
    ///   rejected here so callers fail before prompting for a password
    pub fn parse<R: Read>(reader: &mut R) -> Result<Self, NacryptError> {
        let fixed: [u8; FIXED_HEADER_LEN] = read_preamble_span(reader)?;

        if fixed[..4] != NACRYPT_MAGIC {
            return Err(NacryptError::NotNacryptFile);
        }
        let version = fixed[4];
        if version != NACRYPT_FORMAT_VERSION {
            return Err(NacryptError::UnsupportedVersion(version));
        }
        let kdf_algorithm = fixed[5];
        if kdf_algorithm != KDF_ALGORITHM_ARGON2ID {
            return Err(NacryptError::UnsupportedKdfAlgorithm(kdf_algorithm));
        }
        let enc_algorithm = fixed[6];
        if enc_algorithm != ENC_ALGORITHM_XCHACHA20POLY1305 {
            return Err(NacryptError::UnsupportedEncAlgorithm(enc_algorithm));
        }
        if fixed[7] != 0 {
            return Err(NacryptError::NotNacryptFile);
        }

        // Stored in network order
        let opslimit = u32::from_be_bytes(read_preamble_span::<_, 4>(reader)?);
        let memlimit = u32::from_be_bytes(read_preamble_span::<_, 4>(reader)?);
        validate_costs(opslimit, memlimit)?;

        let salt: [u8; SALT_LEN] = read_preamble_span(reader)?;

        Ok(Self {
            version,
            kdf_algorithm,
            enc_algorithm,
            opslimit,
            memlimit,
            salt,
        })
    }

    /// Serialize the preamble. Short writes surface as [`NacryptError::Io`].
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<(), NacryptError> {
        let mut fixed = [0u8; FIXED_HEADER_LEN];
        fixed[..4].copy_from_slice(&NACRYPT_MAGIC);
        fixed[4] = self.version;
        fixed[5] = self.kdf_algorithm;
        fixed[6] = self.enc_algorithm;
        fixed[7] = 0;
        writer.write_all(&fixed)?;
        writer.write_all(&self.opslimit.to_be_bytes())?;
        writer.write_all(&self.memlimit.to_be_bytes())?;
        writer.write_all(&self.salt)?;
        Ok(())
    }
}

/// [`read_exact_span`], but an EOF inside the preamble means "not this format"
/// rather than a raw I/O error.
fn read_preamble_span<R: Read, const N: usize>(reader: &mut R) -> Result<[u8; N], NacryptError> {
    match read_exact_span::<_, N>(reader) {
        Ok(buf) => Ok(buf),
        Err(NacryptError::Io(e)) if e.kind() == ErrorKind::UnexpectedEof => {
            Err(NacryptError::NotNacryptFile)
        }
        Err(e) => Err(e),
    }
}
