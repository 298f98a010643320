//! # nacrypt
//!
//! Password-based file encryption: Argon2id key derivation plus a chunked
//! XChaCha20-Poly1305 authenticated stream in a self-describing container.
//!
//! The high-level flow mirrors the CLI: [`mode::resolve`] sniffs the input,
//! [`encrypt`] writes a container, [`decrypt`] verifies and unpacks one.
//! Truncation, corruption, trailing garbage and a wrong password are all
//! detected; a wrong password and a corrupted chunk are deliberately reported
//! as the same error.

pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod header;
pub mod mode;
pub mod secret;
pub mod utils;

// High-level API, what most users import
pub use decryptor::decrypt;
pub use encryptor::encrypt;
pub use error::NacryptError;
pub use header::ContainerHeader;
pub use mode::{resolve, Mode, Operation};
pub use secret::{Key, Password};

// Low-level KDF, public at the root for custom flows that manage their own
// container framing
pub use crypto::kdf::derive_key;
