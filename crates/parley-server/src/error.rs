//! Server error types.

use parley_crypto::CipherError;
use parley_proto::ProtocolError;
use thiserror::Error;

/// Errors that can occur in the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport/network error
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// Protocol error
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Cipher error
    #[error("cipher error: {0}")]
    Cipher(#[from] CipherError),

    /// Session key derivation failed
    #[error("key derivation error: {0}")]
    KeyDerivation(String),
}
