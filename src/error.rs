//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T, NacryptError>`](NacryptError).
//!
//! Every variant is unrecoverable for the current operation: wrong passwords and
//! corruption do not change on retry, and resource exhaustion is never silently
//! retried against secret material. No message ever contains the password or key.

use thiserror::Error;

/// The error type for all nacrypt operations.
#[derive(Error, Debug)]
pub enum NacryptError {
    /// I/O error on the underlying input or output stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input does not start with a valid nacrypt preamble.
    ///
    /// Covers a wrong magic, a nonzero reserved byte, and inputs too short to
    /// hold the preamble at all. Distinct from the `Unsupported*` variants,
    /// which indicate a valid-but-unimplemented instance of the format.
    #[error("not a nacrypt file")]
    NotNacryptFile,

    /// The file is a nacrypt container of a format version this build does not
    /// implement. The contained value is the version byte found on disk.
    #[error("unsupported format version: {0}")]
    UnsupportedVersion(u8),

    /// Recognized container, unknown KDF algorithm identifier.
    #[error("unsupported KDF algorithm: {0}")]
    UnsupportedKdfAlgorithm(u8),

    /// Recognized container, unknown encryption algorithm identifier.
    #[error("unsupported encryption algorithm: {0}")]
    UnsupportedEncAlgorithm(u8),

    /// Cost parameters that can never have been produced by a correct encrypt
    /// operation (zero, or below the Argon2 minimum).
    #[error("invalid KDF cost parameters")]
    InvalidCostParameters,

    /// Argon2id derivation failed, typically out of memory at the requested
    /// memlimit. Never degraded to a cheaper derivation.
    #[error("key derivation failed (out of memory at the requested memlimit?)")]
    KeyDerivation,

    /// A chunk failed its authentication check.
    ///
    /// A wrong password and bit-level corruption are indistinguishable here by
    /// design; conflating them avoids a password-correctness oracle.
    #[error("incorrect password or corrupted chunk")]
    Authentication,

    /// The stream-initialization segment was missing or short.
    #[error("incomplete stream header (corrupt file?)")]
    CorruptStreamHeader,

    /// A chunk tagged FINAL was verified while input bytes remained.
    #[error("end of stream reached before end of file")]
    PrematureFinalTag,

    /// Input was exhausted before a chunk tagged FINAL was verified.
    #[error("end of file reached before end of stream")]
    TruncatedStream,

    /// Internal cryptographic failure (e.g. chunk counter exhaustion).
    #[error("crypto error: {0}")]
    Crypto(String),
}
