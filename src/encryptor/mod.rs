//! High-level encryption facade.
//!
//! Core API: `encrypt(input, output, &password, opslimit, memlimit)?` writes a
//! complete nacrypt container: preamble, stream-initialization segment, then
//! the sealed chunk stream.

pub(crate) mod encrypt;
pub(crate) mod stream;

pub use encrypt::encrypt;
pub use stream::seal_stream;
