//! Client error types.

use parley_crypto::CipherError;
use parley_proto::ProtocolError;
use thiserror::Error;

/// Errors from client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport/network error
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// Protocol error
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Cipher error
    #[error("cipher error: {0}")]
    Cipher(#[from] CipherError),

    /// The handshake did not produce a usable session key.
    #[error("handshake failed: {reason}")]
    Handshake {
        /// Description of the handshake failure.
        reason: String,
    },

    /// The server sent a frame the client did not expect.
    #[error("unexpected frame: opcode {opcode:#06x}")]
    UnexpectedFrame {
        /// Opcode found in the frame header.
        opcode: u16,
    },
}
