//! Operation codes for Parley protocol frames.
//!
//! Opcodes identify the type of operation being performed in a frame. They
//! follow the range convention of larger framed protocols so the session
//! handshake and application traffic stay distinguishable at a glance:
//!
//! - `0x0000-0x00FF`: Session Management (key issuance, disconnect)
//! - `0x2000-0x2FFF`: Application Messages (encrypted user content)

use serde_repr::{Deserialize_repr, Serialize_repr};

/// Frame operation codes
///
/// Each opcode represents a distinct protocol operation. The opcode
/// determines how the frame payload should be interpreted.
///
/// # Representation
///
/// Opcodes are serialized as Big Endian `u16` values in the frame header.
/// The `#[repr(u16)]` ensures stable numeric values for wire compatibility.
///
/// Unknown values decode to `None` via [`from_u16`](Self::from_u16) rather
/// than panicking; callers reject such frames with
/// [`ProtocolError::InvalidOpcode`](crate::ProtocolError::InvalidOpcode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u16)]
pub enum Opcode {
    // Session Management (0x0000-0x00FF)
    /// Server issues the symmetric session key to the client
    KeyIssue = 0x0001,
    /// Graceful disconnect
    Goodbye = 0x0002,

    // Application Messages (0x2000-0x2FFF)
    /// Encrypted application message (payload is raw ciphertext)
    Message = 0x2000,
}

impl Opcode {
    /// Convert to the wire representation.
    #[must_use]
    pub fn to_u16(self) -> u16 {
        self as u16
    }

    /// Parse from the wire representation.
    ///
    /// Returns `None` for unknown values.
    #[must_use]
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x0001 => Some(Self::KeyIssue),
            0x0002 => Some(Self::Goodbye),
            0x2000 => Some(Self::Message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_all_opcodes() {
        for opcode in [Opcode::KeyIssue, Opcode::Goodbye, Opcode::Message] {
            assert_eq!(Opcode::from_u16(opcode.to_u16()), Some(opcode));
        }
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert_eq!(Opcode::from_u16(0x0000), None);
        assert_eq!(Opcode::from_u16(0x1234), None);
        assert_eq!(Opcode::from_u16(0xffff), None);
    }
}
