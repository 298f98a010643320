//! High-level decryption facade.
//!
//! Core API: `decrypt(input, output, &password, &header)?` with the header
//! already parsed (by [`crate::mode::resolve`] or
//! [`crate::header::ContainerHeader::parse`]), so the input sits at the first
//! byte after the salt.

pub(crate) mod decrypt;
pub(crate) mod stream;

pub use decrypt::decrypt;
pub use stream::open_stream;
