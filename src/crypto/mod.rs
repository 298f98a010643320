//! Low-level crypto primitives: password KDF and the chunked AEAD stream.

pub mod kdf;
pub mod secretstream;
