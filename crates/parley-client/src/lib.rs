//! Parley demo client.
//!
//! [`Session`] wraps one TCP connection to a Parley server: it completes the
//! key-issuance handshake on connect and then exposes encrypt-and-send /
//! receive-and-decrypt operations. The interactive console loop lives in the
//! binary; this library is testable against any peer that speaks
//! `parley-proto`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;

use parley_crypto::transform;
use parley_proto::{
    Frame, FrameHeader, Opcode,
    payloads::session::{Goodbye, KeyIssue},
    wire,
};
use tokio::net::TcpStream;

pub use error::ClientError;

/// An established session with a Parley server.
///
/// Holds the connection and the session key issued by the server. Every
/// message is transformed with a fresh keystream, so send and receive order
/// is free - the cipher carries no state between messages.
pub struct Session {
    stream: TcpStream,
    key: String,
}

impl Session {
    /// Connect to a server and complete the key-issuance handshake.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails, the server closes before
    /// issuing a key, the first frame is not a `KeyIssue`, or the issued key
    /// is empty.
    pub async fn connect(addr: &str) -> Result<Self, ClientError> {
        let mut stream = TcpStream::connect(addr).await?;

        let Some(frame) = wire::read_frame(&mut stream).await? else {
            return Err(ClientError::Handshake {
                reason: "server closed before issuing a key".to_string(),
            });
        };

        let issue = KeyIssue::from_frame(&frame)?;
        if issue.key.is_empty() {
            return Err(ClientError::Handshake {
                reason: "server issued an empty key".to_string(),
            });
        }

        tracing::debug!("Session key received ({} bytes)", issue.key.len());

        Ok(Self { stream, key: issue.key })
    }

    /// The session key issued by the server.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Encrypt `plaintext` and send it as a `Message` frame.
    ///
    /// Returns the ciphertext that went over the wire.
    ///
    /// # Errors
    ///
    /// Returns an error on cipher, framing (oversized message), or I/O
    /// failure.
    pub async fn send(&mut self, plaintext: &[u8]) -> Result<Vec<u8>, ClientError> {
        let ciphertext = transform(self.key.as_bytes(), plaintext)?;

        let frame = Frame::new(FrameHeader::new(Opcode::Message), ciphertext.clone());
        wire::write_frame(&mut self.stream, &frame).await?;

        Ok(ciphertext)
    }

    /// Receive the next `Message` frame and decrypt it.
    ///
    /// Returns `Ok(None)` if the server disconnected, otherwise the
    /// `(ciphertext, plaintext)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnexpectedFrame`] for any non-`Message` frame.
    pub async fn recv(&mut self) -> Result<Option<(Vec<u8>, Vec<u8>)>, ClientError> {
        let Some(frame) = wire::read_frame(&mut self.stream).await? else {
            return Ok(None);
        };

        if frame.header.opcode_enum() != Some(Opcode::Message) {
            return Err(ClientError::UnexpectedFrame { opcode: frame.header.opcode_raw() });
        }

        let ciphertext = frame.payload.to_vec();
        let plaintext = transform(self.key.as_bytes(), &ciphertext)?;

        Ok(Some((ciphertext, plaintext)))
    }

    /// Send a `Goodbye` frame and consume the session.
    ///
    /// # Errors
    ///
    /// Returns an error on framing or I/O failure.
    pub async fn goodbye(mut self, reason: &str) -> Result<(), ClientError> {
        let goodbye = Goodbye { reason: reason.to_string() };
        wire::write_frame(&mut self.stream, &goodbye.to_frame()?).await?;
        Ok(())
    }
}
