//! Parley wire protocol.
//!
//! The Parley demo exchanges length-delimited frames over a byte stream:
//!
//! ```text
//! [FrameHeader: 12 bytes, Big Endian] + [payload: variable bytes]
//! ```
//!
//! A session is one key issuance followed by encrypted messages:
//!
//! ```text
//! server ──KeyIssue──▶ client      (CBOR payload, cleartext key)
//! client ──Message───▶ server      (raw ciphertext payload)
//! server ──Message───▶ client      (encrypted echo)
//! client ──Goodbye───▶ server      (CBOR payload, optional)
//! ```
//!
//! This crate is transport-agnostic apart from the [`wire`] helpers, which
//! only require `AsyncRead`/`AsyncWrite`. Encryption lives in
//! `parley-crypto`; frames here carry ciphertext as opaque bytes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod errors;
pub mod frame;
pub mod header;
pub mod opcodes;
pub mod payloads;
pub mod wire;

pub use errors::{ProtocolError, Result};
pub use frame::Frame;
pub use header::FrameHeader;
pub use opcodes::Opcode;
