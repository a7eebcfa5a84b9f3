//! Session key selection and derivation.
//!
//! The demo supports two key paths: a fixed key (the default, matching the
//! reference peer) and a key derived from the content of an arbitrary file
//! via a rolling hash. Both produce the plain string key that
//! `parley-crypto` consumes; no key exchange beyond cleartext issuance
//! exists in this protocol.

use std::path::PathBuf;

use crate::error::ServerError;

/// Fallback session key, compatible with the reference peer.
pub const DEFAULT_KEY: &str = "1234567890";

/// Where the session key comes from.
#[derive(Debug, Clone)]
pub enum KeySource {
    /// A fixed key string supplied via configuration.
    Fixed(String),

    /// Derive the key from the bytes of a file (e.g. a captured image).
    File(PathBuf),
}

impl Default for KeySource {
    fn default() -> Self {
        Self::Fixed(DEFAULT_KEY.to_string())
    }
}

impl KeySource {
    /// Resolve the session key.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] for an empty fixed key and
    /// [`ServerError::KeyDerivation`] if the key file cannot be read.
    pub fn resolve(&self) -> Result<String, ServerError> {
        match self {
            Self::Fixed(key) if key.is_empty() => {
                Err(ServerError::Config("session key must not be empty".to_string()))
            },
            Self::Fixed(key) => Ok(key.clone()),
            Self::File(path) => {
                let bytes = std::fs::read(path).map_err(|e| {
                    ServerError::KeyDerivation(format!("{}: {e}", path.display()))
                })?;
                Ok(derive_digits(&bytes))
            },
        }
    }
}

/// Reduce arbitrary file content to a ten-digit decimal key.
///
/// DJB2-style rolling hash (`hash = hash * 33 + byte`, seeded with 5381),
/// truncated to its last ten decimal digits and zero-padded. The hash is
/// not cryptographic; it only needs to be deterministic per file.
fn derive_digits(bytes: &[u8]) -> String {
    let mut hash: u64 = 5381;
    for &byte in bytes {
        hash = hash.wrapping_mul(33).wrapping_add(u64::from(byte));
    }
    format!("{:010}", hash % 10_000_000_000)
}
