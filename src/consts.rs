//! # Constants
//!
//! Protocol constants for the nacrypt container format: magic bytes, the current
//! format version, algorithm identifiers, field lengths and KDF cost bounds.

/// The 4-byte magic sentinel at the start of every nacrypt file.
pub const NACRYPT_MAGIC: [u8; 4] = [0x4E, 0x41, 0x1F, 0xF0];

/// The latest (and only) supported container format version.
///
/// Unknown versions are rejected with [`NacryptError::UnsupportedVersion`]
/// rather than guessed at.
///
/// [`NacryptError::UnsupportedVersion`]: crate::error::NacryptError::UnsupportedVersion
pub const NACRYPT_FORMAT_VERSION: u8 = 1;

/// KDF algorithm identifier: Argon2id v1.3.
pub const KDF_ALGORITHM_ARGON2ID: u8 = 0;

/// Encryption algorithm identifier: XChaCha20-Poly1305 chunked stream.
pub const ENC_ALGORITHM_XCHACHA20POLY1305: u8 = 0;

/// Fixed part of the preamble: magic + version + kdf + enc + reserved.
pub const FIXED_HEADER_LEN: usize = 8;

/// Length of the per-file random salt fed to the KDF.
pub const SALT_LEN: usize = 16;

/// Length of the derived symmetric key.
pub const KEY_LEN: usize = 32;

/// Plaintext bytes sealed per chunk.
///
/// A tuning constant, not a correctness parameter: every chunk carries its own
/// implicit length, so nothing on disk records this value.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Maximum accepted password length in bytes.
pub const MAX_PASSWORD_LEN: usize = 512;

/// Default Argon2id opslimit (time cost) for encryption.
pub const OPSLIMIT_DEFAULT: u32 = 3;

/// Default Argon2id memlimit for encryption, in bytes (64 MiB).
pub const MEMLIMIT_DEFAULT: u32 = 64 * 1024 * 1024;

/// Largest opslimit the format accepts.
///
/// Far above any sane cost, low enough that a hostile header cannot pin the
/// CPU for hours before the first authentication check.
pub const OPSLIMIT_MAX: u32 = 1024;

/// Smallest memlimit the format accepts, in bytes.
///
/// Argon2 requires `m_cost >= 8` KiB; anything below this can never have been
/// written by a correct encrypt operation.
pub const MEMLIMIT_MIN: u32 = 8 * 1024;
