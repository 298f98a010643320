//! End-to-end mode sniffing: unspecified mode must encrypt arbitrary files
//! from byte 0 and decrypt containers in place.

mod common;

use common::{encrypt_vec, password, TEST_MEMLIMIT, TEST_OPSLIMIT};
use nacrypt::{decrypt, encrypt, resolve, Mode, NacryptError, Operation};
use std::io::Cursor;

/// Drive the whole pipeline the way the CLI does, with `Mode::Unspecified`.
fn run_unspecified(file: &[u8], pw: &str) -> Result<(Vec<u8>, bool), NacryptError> {
    let mut input = Cursor::new(file.to_vec());
    let mut output = Vec::new();
    match resolve(&mut input, Mode::Unspecified)? {
        Operation::Encrypt => {
            encrypt(
                &mut input,
                &mut output,
                &password(pw),
                TEST_OPSLIMIT,
                TEST_MEMLIMIT,
            )?;
            Ok((output, true))
        }
        Operation::Decrypt(header) => {
            decrypt(&mut input, &mut output, &password(pw), &header)?;
            Ok((output, false))
        }
    }
}

#[test]
fn arbitrary_file_is_encrypted_from_byte_zero() {
    // The first bytes must survive the sniff-and-rewind.
    let original = b"NAxx almost looks like a header, but is not".to_vec();
    let (sealed, encrypted) = run_unspecified(&original, "pw").unwrap();
    assert!(encrypted);

    let (recovered, encrypted) = run_unspecified(&sealed, "pw").unwrap();
    assert!(!encrypted);
    assert_eq!(recovered, original);
}

#[test]
fn container_is_decrypted_when_unspecified() {
    let sealed = encrypt_vec(b"round and round", "pw");
    let (recovered, encrypted) = run_unspecified(&sealed, "pw").unwrap();
    assert!(!encrypted);
    assert_eq!(recovered, b"round and round");
}

#[test]
fn empty_file_is_encrypted_not_misparsed() {
    let (sealed, encrypted) = run_unspecified(b"", "pw").unwrap();
    assert!(encrypted);
    let (recovered, _) = run_unspecified(&sealed, "pw").unwrap();
    assert_eq!(recovered, b"");
}

#[test]
fn double_encryption_roundtrips_layer_by_layer() {
    // An already-encrypted file under forced encrypt mode nests cleanly.
    let original = b"inner payload".to_vec();
    let inner = encrypt_vec(&original, "pw");

    let mut input = Cursor::new(inner.clone());
    let mut outer = Vec::new();
    let op = resolve(&mut input, Mode::Encrypt).unwrap();
    assert!(matches!(op, Operation::Encrypt));
    encrypt(
        &mut input,
        &mut outer,
        &password("pw"),
        TEST_OPSLIMIT,
        TEST_MEMLIMIT,
    )
    .unwrap();

    let (middle, encrypted) = run_unspecified(&outer, "pw").unwrap();
    assert!(!encrypted);
    assert_eq!(middle, inner);
    let (recovered, _) = run_unspecified(&middle, "pw").unwrap();
    assert_eq!(recovered, original);
}
