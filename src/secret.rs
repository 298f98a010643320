//! # Secret wrappers
//!
//! Owned containers for the two secrets this crate handles: the user's password
//! and the derived symmetric key. Both wipe their contents on drop, require an
//! explicit `expose_secret()` to read, and implement neither `Clone` nor a
//! content-leaking `Debug`.

use secrecy::{ExposeSecret, SecretBox, SecretString};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::consts::KEY_LEN;

/// A user-supplied password, held for its entire lifetime in wiped-on-drop
/// memory. Never logged, never written to persistent storage.
pub struct Password(SecretString);

impl Password {
    pub fn new(raw: String) -> Self {
        Self(SecretString::from(raw))
    }

    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }

    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.expose_secret().len()
    }

    /// Constant-time equality against a confirmation entry.
    ///
    /// Unequal lengths return `false` without a byte comparison; the length of
    /// a password is not treated as secret here, matching the fixed-size
    /// compare the prompt layer performs on entry.
    pub fn ct_eq(&self, other: &Password) -> bool {
        let a = self.0.expose_secret().as_bytes();
        let b = other.0.expose_secret().as_bytes();
        a.len() == b.len() && bool::from(a.ct_eq(b))
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(REDACTED)")
    }
}

/// The derived symmetric key: the sole secret besides the password.
///
/// Produced once per file by the KDF, consumed by the stream codec, wiped when
/// dropped on any exit path.
pub struct Key(SecretBox<[u8; KEY_LEN]>);

impl Key {
    /// Wrap freshly derived key material. The caller's copy on the stack is
    /// zeroed before this returns.
    pub fn new(mut bytes: [u8; KEY_LEN]) -> Self {
        let boxed = SecretBox::new(Box::new(bytes));
        bytes.zeroize();
        Self(boxed)
    }

    pub fn expose_secret(&self) -> &[u8; KEY_LEN] {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Key(REDACTED)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ct_eq_matches_identical_passwords() {
        let a = Password::new("correct-horse".to_string());
        let b = Password::new("correct-horse".to_string());
        assert!(a.ct_eq(&b));
    }

    #[test]
    fn ct_eq_rejects_single_byte_difference() {
        let a = Password::new("correct-horse".to_string());
        let b = Password::new("correct-horsf".to_string());
        assert!(!a.ct_eq(&b));
    }

    #[test]
    fn ct_eq_rejects_length_mismatch() {
        let a = Password::new("correct-horse".to_string());
        let b = Password::new("correct-hors".to_string());
        assert!(!a.ct_eq(&b));
    }

    #[test]
    fn debug_never_prints_contents() {
        let pw = Password::new("hunter2".to_string());
        let key = Key::new([0x42; KEY_LEN]);
        assert!(!format!("{pw:?}").contains("hunter2"));
        assert!(!format!("{key:?}").contains("42"));
    }
}
