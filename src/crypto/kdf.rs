//! # Key derivation
//!
//! Argon2id v1.3 from password + salt + cost parameters, straight into a
//! wiped-on-drop [`Key`]. Deterministic: the same (password, salt, opslimit,
//! memlimit) tuple always rederives the identical key.

use argon2::{Algorithm, Argon2, Params, Version};

use crate::consts::{KEY_LEN, SALT_LEN};
use crate::error::NacryptError;
use crate::secret::{Key, Password};

/// Single-lane derivation, matching the on-disk cost model: opslimit and
/// memlimit are the only tunables the format records.
const KDF_LANES: u32 = 1;

/// Derive the file key.
///
/// `memlimit` is in bytes (as stored in the header) and maps to Argon2's
/// `m_cost` in KiB. Parameters the backend rejects surface as
/// [`NacryptError::InvalidCostParameters`]; a failed derivation (typically out
/// of memory at the requested memlimit) as [`NacryptError::KeyDerivation`],
/// never a silent fallback to a cheaper derivation.
pub fn derive_key(
    password: &Password,
    salt: &[u8; SALT_LEN],
    opslimit: u32,
    memlimit: u32,
) -> Result<Key, NacryptError> {
    let params = Params::new(memlimit / 1024, opslimit, KDF_LANES, Some(KEY_LEN))
        .map_err(|_| NacryptError::InvalidCostParameters)?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut out = [0u8; KEY_LEN];
    argon2
        .hash_password_into(password.expose_secret().as_bytes(), salt, &mut out)
        .map_err(|_| NacryptError::KeyDerivation)?;

    Ok(Key::new(out))
}
