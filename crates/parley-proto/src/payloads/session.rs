//! Session management payload types.
//!
//! These payloads handle the session lifecycle: key issuance at connect time
//! and graceful disconnect.

use serde::{Deserialize, Serialize};

use crate::{
    Frame, FrameHeader, Opcode,
    errors::{ProtocolError, Result},
};

/// Encode a payload struct into a frame with the given opcode.
fn encode_payload<T: Serialize>(opcode: Opcode, payload: &T) -> Result<Frame> {
    let mut bytes = Vec::new();
    ciborium::into_writer(payload, &mut bytes)
        .map_err(|e| ProtocolError::CborEncode(e.to_string()))?;
    Ok(Frame::new(FrameHeader::new(opcode), bytes))
}

/// Decode a payload struct from a frame, verifying the opcode first.
fn decode_payload<T: for<'de> Deserialize<'de>>(expected: Opcode, frame: &Frame) -> Result<T> {
    let actual = frame.header.opcode_raw();
    if actual != expected.to_u16() {
        return Err(ProtocolError::UnexpectedOpcode { expected: expected.to_u16(), actual });
    }
    ciborium::from_reader(frame.payload.as_ref())
        .map_err(|e| ProtocolError::CborDecode(e.to_string()))
}

/// Symmetric session key issued by the server
///
/// The first frame of every session, sent server to client before any
/// encrypted exchange. The key travels in cleartext - key distribution is
/// deliberately naive in this demo protocol.
///
/// # Security
///
/// - **Debug Redaction**: The `Debug` impl redacts `key` to prevent
///   accidental logging of the session secret. Always use custom `Debug`
///   implementations for types containing secrets.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyIssue {
    /// The symmetric session key (non-empty)
    pub key: String,
}

impl KeyIssue {
    /// Encode into a [`Opcode::KeyIssue`] frame.
    pub fn to_frame(&self) -> Result<Frame> {
        encode_payload(Opcode::KeyIssue, self)
    }

    /// Decode from a frame.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::UnexpectedOpcode`] if the frame is not a
    /// `KeyIssue`, or a CBOR error if the payload is malformed.
    pub fn from_frame(frame: &Frame) -> Result<Self> {
        decode_payload(Opcode::KeyIssue, frame)
    }
}

impl std::fmt::Debug for KeyIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyIssue")
            .field("key", &format!("<redacted {} bytes>", self.key.len()))
            .finish()
    }
}

/// Graceful disconnect
///
/// Sent by the client to terminate a session cleanly. After sending or
/// receiving `Goodbye`, both parties should close the connection. A plain
/// TCP close is treated the same way; this frame only adds a reason for the
/// server log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goodbye {
    /// Reason for disconnect (for logging/debugging)
    pub reason: String,
}

impl Goodbye {
    /// Encode into a [`Opcode::Goodbye`] frame.
    pub fn to_frame(&self) -> Result<Frame> {
        encode_payload(Opcode::Goodbye, self)
    }

    /// Decode from a frame.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::UnexpectedOpcode`] if the frame is not a
    /// `Goodbye`, or a CBOR error if the payload is malformed.
    pub fn from_frame(frame: &Frame) -> Result<Self> {
        decode_payload(Opcode::Goodbye, frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_issue_round_trip() {
        let issue = KeyIssue { key: "1234567890".to_string() };
        let frame = issue.to_frame().expect("should encode");

        assert_eq!(frame.header.opcode_enum(), Some(Opcode::KeyIssue));

        let parsed = KeyIssue::from_frame(&frame).expect("should decode");
        assert_eq!(parsed, issue);
    }

    #[test]
    fn goodbye_round_trip() {
        let goodbye = Goodbye { reason: "client exit".to_string() };
        let frame = goodbye.to_frame().expect("should encode");

        let parsed = Goodbye::from_frame(&frame).expect("should decode");
        assert_eq!(parsed.reason, "client exit");
    }

    #[test]
    fn wrong_opcode_is_rejected() {
        let goodbye = Goodbye { reason: "client exit".to_string() };
        let frame = goodbye.to_frame().expect("should encode");

        let result = KeyIssue::from_frame(&frame);
        assert!(matches!(
            result,
            Err(ProtocolError::UnexpectedOpcode { expected: 0x0001, actual: 0x0002 })
        ));
    }

    #[test]
    fn malformed_cbor_is_rejected() {
        let frame = Frame::new(FrameHeader::new(Opcode::KeyIssue), vec![0xffu8; 4]);
        assert!(matches!(KeyIssue::from_frame(&frame), Err(ProtocolError::CborDecode(_))));
    }

    #[test]
    fn debug_redacts_key() {
        let issue = KeyIssue { key: "1234567890".to_string() };
        let rendered = format!("{issue:?}");
        assert!(!rendered.contains("1234567890"));
        assert!(rendered.contains("redacted"));
    }
}
