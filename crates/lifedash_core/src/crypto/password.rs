//! Salted scrypt password hashing with constant-time verification.
//!
//! # Responsibility
//! - Derive a storable hash from a plaintext password.
//! - Check a presented password against a stored hash.
//!
//! # Invariants
//! - Stored format is `<salt-hex>:<derived-key-hex>`; plaintext is never stored.
//! - Every hash uses a fresh 128-bit salt from the OS RNG.
//! - The hex text of the salt (not its decoded bytes) is the KDF salt input,
//!   matching hashes written by the earlier web backend.
//! - Verification never panics and never reports why a check failed.
//! - Password and key material are never logged.

use rand::rngs::OsRng;
use rand::RngCore;
use std::error::Error;
use std::fmt::{Display, Formatter};
use subtle::ConstantTimeEq;

/// scrypt cost parameter as log2(N); N = 16384.
pub const SCRYPT_LOG_N: u8 = 14;
/// scrypt block size.
pub const SCRYPT_R: u32 = 8;
/// scrypt parallelism.
pub const SCRYPT_P: u32 = 1;
/// Derived key length in bytes.
pub const DERIVED_KEY_LEN: usize = 64;
/// Random salt length in bytes (hex-encoded to 32 chars).
pub const SALT_LEN: usize = 16;

const SEPARATOR: char = ':';

/// Failures while producing a password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// Hashing an empty password is refused.
    EmptyPassword,
    /// The KDF rejected its parameters or output buffer.
    KeyDerivation(String),
}

impl Display for CredentialError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::KeyDerivation(message) => write!(f, "key derivation failed: {message}"),
        }
    }
}

impl Error for CredentialError {}

/// Hashes `password` with a fresh random salt.
///
/// Two calls with the same password return different strings.
///
/// # Errors
/// - [`CredentialError::EmptyPassword`] for an empty password.
/// - [`CredentialError::KeyDerivation`] when scrypt fails.
pub fn hash_password(password: &str) -> Result<String, CredentialError> {
    if password.is_empty() {
        return Err(CredentialError::EmptyPassword);
    }

    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    let salt_hex = hex::encode(salt);

    let derived = derive_key(password, &salt_hex)?;
    Ok(format!("{salt_hex}{SEPARATOR}{}", hex::encode(derived)))
}

/// Returns whether `password` matches `stored_hash`.
///
/// Malformed hashes (missing or extra separator, empty or non-hex halves,
/// wrong key length) are a plain `false`.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Some((salt_hex, key_hex)) = split_stored_hash(stored_hash) else {
        return false;
    };
    let Ok(expected) = hex::decode(key_hex) else {
        return false;
    };

    match derive_key(password, salt_hex) {
        // Slice ct_eq yields false on length mismatch instead of panicking.
        Ok(actual) => actual.as_slice().ct_eq(expected.as_slice()).into(),
        Err(_) => false,
    }
}

fn split_stored_hash(stored_hash: &str) -> Option<(&str, &str)> {
    let (salt_hex, key_hex) = stored_hash.split_once(SEPARATOR)?;
    if salt_hex.is_empty() || key_hex.is_empty() || key_hex.contains(SEPARATOR) {
        return None;
    }
    if !is_hex(salt_hex) || !is_hex(key_hex) {
        return None;
    }
    Some((salt_hex, key_hex))
}

fn is_hex(value: &str) -> bool {
    value.len() % 2 == 0 && value.bytes().all(|byte| byte.is_ascii_hexdigit())
}

fn derive_key(password: &str, salt: &str) -> Result<[u8; DERIVED_KEY_LEN], CredentialError> {
    let params = scrypt::Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, DERIVED_KEY_LEN)
        .map_err(|err| CredentialError::KeyDerivation(err.to_string()))?;
    let mut output = [0u8; DERIVED_KEY_LEN];
    scrypt::scrypt(password.as_bytes(), salt.as_bytes(), &params, &mut output)
        .map_err(|err| CredentialError::KeyDerivation(err.to_string()))?;
    Ok(output)
}
