//! Parley demo server.
//!
//! This crate provides the server side of the Parley demo protocol using:
//! - Tokio for async TCP transport
//! - `parley-proto` for length-delimited framing
//! - `parley-crypto` for the session stream cipher
//!
//! ## Architecture
//!
//! ```text
//! parley-server
//!   ├─ Server       (accept loop, one session at a time)
//!   ├─ KeySource    (fixed key or file-derived rolling hash)
//!   └─ History      (bounded record of recent messages)
//! ```
//!
//! A session is: issue the key, then decrypt each incoming message, record
//! it, and echo it back re-encrypted. The session ends on `Goodbye`, EOF, or
//! a protocol violation; the accept loop then waits for the next client.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod history;
mod keysource;

use parley_crypto::transform;
use parley_proto::{
    Frame, FrameHeader, Opcode,
    payloads::session::{Goodbye, KeyIssue},
    wire,
};
use tokio::net::{TcpListener, TcpStream};

pub use error::ServerError;
pub use history::{History, MessageRecord};
pub use keysource::{DEFAULT_KEY, KeySource};

/// Server configuration for the runtime.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (e.g., "127.0.0.1:8080")
    pub bind_address: String,
    /// Where the session key comes from
    pub key_source: KeySource,
    /// How many recent messages to keep per session
    pub history_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            key_source: KeySource::default(),
            history_limit: History::DEFAULT_CAPACITY,
        }
    }
}

/// Parley demo server.
///
/// Accepts one client at a time: the session runs to completion before the
/// next connection is accepted, mirroring the single-threaded reference
/// peer. Session failures are logged and never take down the accept loop.
pub struct Server {
    listener: TcpListener,
    key_source: KeySource,
    history_limit: usize,
}

impl Server {
    /// Create and bind a new server.
    ///
    /// # Errors
    ///
    /// Returns an error if binding to the address fails.
    pub async fn bind(config: ServerConfig) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(&config.bind_address).await?;
        Ok(Self {
            listener,
            key_source: config.key_source,
            history_limit: config.history_limit,
        })
    }

    /// Get the local address the server is bound to.
    pub fn local_addr(&self) -> Result<std::net::SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Run the server, accepting connections and processing sessions.
    ///
    /// This method runs until the task is cancelled or accepting fails.
    pub async fn run(self) -> Result<(), ServerError> {
        loop {
            tracing::info!("Waiting for a connection");

            let (stream, peer) = self.listener.accept().await?;
            tracing::info!("Connection established with {}", peer);

            // Key derivation failure falls back to the fixed default so a
            // bad key file cannot lock clients out of the demo.
            let key = match self.key_source.resolve() {
                Ok(key) => key,
                Err(e) => {
                    tracing::warn!("Key derivation failed ({}), using fallback key", e);
                    DEFAULT_KEY.to_string()
                },
            };

            let mut history = History::new(self.history_limit);
            match handle_session(stream, &key, &mut history).await {
                Ok(()) => {
                    tracing::debug!("Session ended, {} messages recorded", history.len());
                },
                Err(e) => {
                    tracing::error!("Session error: {}", e);
                },
            }
        }
    }
}

/// Run one client session to completion.
///
/// Issues the session key, then serves the encrypted echo loop until the
/// client disconnects, says goodbye, or violates the protocol.
async fn handle_session(
    mut stream: TcpStream,
    key: &str,
    history: &mut History,
) -> Result<(), ServerError> {
    let issue = KeyIssue { key: key.to_string() };
    wire::write_frame(&mut stream, &issue.to_frame()?).await?;
    tracing::debug!("Issued session key ({} bytes)", key.len());

    loop {
        let Some(frame) = wire::read_frame(&mut stream).await? else {
            tracing::info!("Client disconnected");
            return Ok(());
        };

        match frame.header.opcode_enum() {
            Some(Opcode::Message) => {
                let ciphertext = frame.payload.to_vec();
                let plaintext = transform(key.as_bytes(), &ciphertext)?;

                tracing::info!(
                    encrypted = %hex::encode(&ciphertext),
                    decrypted = %String::from_utf8_lossy(&plaintext),
                    "Received message from client"
                );

                history.push(MessageRecord::new(ciphertext, plaintext.clone()));

                // Echo the decrypted message back, re-encrypted with a
                // fresh keystream.
                let echo = transform(key.as_bytes(), &plaintext)?;
                let reply = Frame::new(FrameHeader::new(Opcode::Message), echo);
                wire::write_frame(&mut stream, &reply).await?;
            },

            Some(Opcode::Goodbye) => {
                let goodbye = Goodbye::from_frame(&frame)?;
                tracing::info!("Client said goodbye: {}", goodbye.reason);
                return Ok(());
            },

            Some(Opcode::KeyIssue) => {
                tracing::warn!("Client sent KeyIssue, closing session");
                return Ok(());
            },

            None => {
                tracing::warn!("Unknown opcode {:#06x}, closing session", frame.header.opcode_raw());
                return Ok(());
            },
        }
    }
}
