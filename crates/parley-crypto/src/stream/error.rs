//! Cipher error types.

use thiserror::Error;

/// Errors from the cipher engine.
///
/// The engine performs only in-memory computation, so the empty-key
/// precondition is the only failure mode. Every other input, including an
/// empty data buffer, produces deterministic output.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// The key was empty. The key schedule consumes key bytes cyclically
    /// (`key[i % key.len()]`), so a zero-length key has no defined schedule.
    #[error("invalid key: key must not be empty")]
    InvalidKey,
}
