//! Shared helpers for the integration suites.
//!
//! KDF costs are pinned to the format minimum so the suites spend their time
//! on the codec, not on Argon2.

#![allow(dead_code)]

use std::io::Cursor;

use nacrypt::consts::MEMLIMIT_MIN;
use nacrypt::{decrypt, encrypt, resolve, Mode, NacryptError, Operation, Password};

pub const TEST_OPSLIMIT: u32 = 1;
pub const TEST_MEMLIMIT: u32 = MEMLIMIT_MIN;

/// Preamble length: fixed header + cost fields + salt.
pub const PREAMBLE_LEN: usize = 8 + 8 + 16;

pub fn password(s: &str) -> Password {
    Password::new(s.to_string())
}

pub fn encrypt_vec(plaintext: &[u8], pw: &str) -> Vec<u8> {
    let mut sealed = Vec::new();
    encrypt(
        Cursor::new(plaintext),
        &mut sealed,
        &password(pw),
        TEST_OPSLIMIT,
        TEST_MEMLIMIT,
    )
    .unwrap();
    sealed
}

/// Full decrypt pipeline: parse the header the way the CLI does, then stream.
pub fn decrypt_vec(container: &[u8], pw: &str) -> Result<Vec<u8>, NacryptError> {
    let mut input = Cursor::new(container);
    let header = match resolve(&mut input, Mode::Decrypt)? {
        Operation::Decrypt(header) => header,
        Operation::Encrypt => unreachable!("declared decrypt never resolves to encrypt"),
    };
    let mut plaintext = Vec::new();
    decrypt(&mut input, &mut plaintext, &password(pw), &header)?;
    Ok(plaintext)
}
