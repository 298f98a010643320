//! # Chunked authenticated-encryption stream
//!
//! The construction behind the codec: each chunk is sealed with
//! XChaCha20-Poly1305 under `nonce = prefix[16] ‖ counter[8, BE]`, where the
//! prefix is a fresh random value written once at the start of the stream (the
//! stream-initialization segment) and the counter increments per chunk. A
//! one-byte tag (CONTINUE/FINAL) rides inside the AEAD envelope, so the last
//! chunk is unambiguously and unforgeably marked.
//!
//! Sealed chunk layout: `AEAD(tag ‖ plaintext)` = `plaintext_len + ABYTES`
//! bytes. The counter-in-nonce binds chunk order: reordered, duplicated or
//! dropped chunks fail authentication on open.
//!
//! State is strictly sequential (chunk N's position is an input to chunk N+1)
//! and a state is unusable after any error or after the FINAL chunk.

use chacha20poly1305::aead::Aead;
use chacha20poly1305::{KeyInit, XChaCha20Poly1305, XNonce};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::error::NacryptError;
use crate::secret::Key;

/// Length of the stream-initialization segment (the random nonce prefix).
pub const STREAM_HEADER_LEN: usize = 16;

/// Authentication overhead per sealed chunk: tag byte + Poly1305 tag.
pub const ABYTES: usize = 1 + 16;

const TAG_CONTINUE: u8 = 0x00;
const TAG_FINAL: u8 = 0x01;

/// Per-chunk marker carried inside the sealed envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkTag {
    /// More chunks follow.
    Continue,
    /// This is the last chunk of the stream.
    Final,
}

impl ChunkTag {
    fn to_byte(self) -> u8 {
        match self {
            ChunkTag::Continue => TAG_CONTINUE,
            ChunkTag::Final => TAG_FINAL,
        }
    }

    fn from_byte(byte: u8) -> Result<Self, NacryptError> {
        match byte {
            TAG_CONTINUE => Ok(ChunkTag::Continue),
            TAG_FINAL => Ok(ChunkTag::Final),
            // Authenticated but meaningless: only a broken writer produces this.
            other => Err(NacryptError::Crypto(format!("invalid chunk tag {other:#04x}"))),
        }
    }
}

fn nonce_for(prefix: &[u8; STREAM_HEADER_LEN], counter: u64) -> XNonce {
    let mut nonce = [0u8; 24];
    nonce[..STREAM_HEADER_LEN].copy_from_slice(prefix);
    nonce[STREAM_HEADER_LEN..].copy_from_slice(&counter.to_be_bytes());
    XNonce::from(nonce)
}

/// Sealing (encrypt-side) stream state.
pub struct SealState {
    cipher: XChaCha20Poly1305,
    prefix: [u8; STREAM_HEADER_LEN],
    counter: u64,
}

impl SealState {
    /// Initialize a fresh stream from `key`. The returned segment must be
    /// written to the output before any chunk; [`OpenState::init`] needs it to
    /// resynchronize.
    pub fn init(key: &Key) -> (Self, [u8; STREAM_HEADER_LEN]) {
        let mut prefix = [0u8; STREAM_HEADER_LEN];
        OsRng.fill_bytes(&mut prefix);
        let state = Self {
            cipher: XChaCha20Poly1305::new(key.expose_secret().into()),
            prefix,
            counter: 0,
        };
        (state, prefix)
    }

    /// Seal one chunk, advancing the stream state.
    pub fn push(&mut self, plaintext: &[u8], tag: ChunkTag) -> Result<Vec<u8>, NacryptError> {
        let nonce = nonce_for(&self.prefix, self.counter);
        self.counter = self
            .counter
            .checked_add(1)
            .ok_or_else(|| NacryptError::Crypto("chunk counter exhausted".into()))?;

        let mut framed = Zeroizing::new(Vec::with_capacity(1 + plaintext.len()));
        framed.push(tag.to_byte());
        framed.extend_from_slice(plaintext);

        self.cipher
            .encrypt(&nonce, framed.as_slice())
            .map_err(|_| NacryptError::Crypto("chunk seal failed".into()))
    }
}

/// Opening (decrypt-side) stream state.
pub struct OpenState {
    cipher: XChaCha20Poly1305,
    prefix: [u8; STREAM_HEADER_LEN],
    counter: u64,
}

impl OpenState {
    /// Resynchronize from the stream-initialization segment read off the file.
    pub fn init(key: &Key, stream_header: &[u8; STREAM_HEADER_LEN]) -> Self {
        Self {
            cipher: XChaCha20Poly1305::new(key.expose_secret().into()),
            prefix: *stream_header,
            counter: 0,
        }
    }

    /// Verify and open one sealed chunk, returning its plaintext and tag.
    ///
    /// Fails with [`NacryptError::Authentication`] on any verification
    /// failure; a wrong key and a corrupted chunk are indistinguishable here.
    pub fn pull(&mut self, sealed: &[u8]) -> Result<(Zeroizing<Vec<u8>>, ChunkTag), NacryptError> {
        if sealed.len() < ABYTES {
            return Err(NacryptError::Authentication);
        }

        let nonce = nonce_for(&self.prefix, self.counter);
        self.counter = self
            .counter
            .checked_add(1)
            .ok_or_else(|| NacryptError::Crypto("chunk counter exhausted".into()))?;

        let mut framed = Zeroizing::new(
            self.cipher
                .decrypt(&nonce, sealed)
                .map_err(|_| NacryptError::Authentication)?,
        );

        let tag = ChunkTag::from_byte(framed[0])?;
        framed.drain(..1);
        Ok((framed, tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::KEY_LEN;

    fn key(byte: u8) -> Key {
        Key::new([byte; KEY_LEN])
    }

    #[test]
    fn seal_open_roundtrip_preserves_tags() {
        let key = key(0x42);
        let (mut seal, header) = SealState::init(&key);
        let c1 = seal.push(b"first chunk", ChunkTag::Continue).unwrap();
        let c2 = seal.push(b"", ChunkTag::Final).unwrap();
        assert_eq!(c1.len(), b"first chunk".len() + ABYTES);
        assert_eq!(c2.len(), ABYTES);

        let mut open = OpenState::init(&key, &header);
        let (p1, t1) = open.pull(&c1).unwrap();
        assert_eq!(p1.as_slice(), b"first chunk");
        assert_eq!(t1, ChunkTag::Continue);
        let (p2, t2) = open.pull(&c2).unwrap();
        assert!(p2.is_empty());
        assert_eq!(t2, ChunkTag::Final);
    }

    #[test]
    fn wrong_key_fails_authentication() {
        let (mut seal, header) = SealState::init(&key(0x42));
        let sealed = seal.push(b"secret", ChunkTag::Final).unwrap();

        let mut open = OpenState::init(&key(0x43), &header);
        assert!(matches!(
            open.pull(&sealed).unwrap_err(),
            NacryptError::Authentication
        ));
    }

    #[test]
    fn reordered_chunks_fail_authentication() {
        let key = key(0x42);
        let (mut seal, header) = SealState::init(&key);
        let c1 = seal.push(b"one", ChunkTag::Continue).unwrap();
        let c2 = seal.push(b"two", ChunkTag::Final).unwrap();

        let mut open = OpenState::init(&key, &header);
        assert!(matches!(
            open.pull(&c2).unwrap_err(),
            NacryptError::Authentication
        ));
        // State is tainted after the failure; a fresh one still accepts order.
        let mut open = OpenState::init(&key, &header);
        open.pull(&c1).unwrap();
        open.pull(&c2).unwrap();
    }

    #[test]
    fn duplicated_chunk_fails_authentication() {
        let key = key(0x42);
        let (mut seal, header) = SealState::init(&key);
        let c1 = seal.push(b"one", ChunkTag::Continue).unwrap();

        let mut open = OpenState::init(&key, &header);
        open.pull(&c1).unwrap();
        assert!(matches!(
            open.pull(&c1).unwrap_err(),
            NacryptError::Authentication
        ));
    }

    #[test]
    fn every_flipped_bit_in_a_chunk_is_detected() {
        let key = key(0x42);
        let (mut seal, header) = SealState::init(&key);
        let sealed = seal.push(b"x", ChunkTag::Final).unwrap();

        for byte in 0..sealed.len() {
            for bit in 0..8 {
                let mut tampered = sealed.clone();
                tampered[byte] ^= 1 << bit;
                let mut open = OpenState::init(&key, &header);
                assert!(
                    matches!(open.pull(&tampered).unwrap_err(), NacryptError::Authentication),
                    "flip at byte {byte} bit {bit} not detected"
                );
            }
        }
    }

    #[test]
    fn undersized_chunk_fails_authentication() {
        let key = key(0x42);
        let (_, header) = SealState::init(&key);
        let mut open = OpenState::init(&key, &header);
        assert!(matches!(
            open.pull(&[0u8; ABYTES - 1]).unwrap_err(),
            NacryptError::Authentication
        ));
    }
}
