//! Frame type combining header and payload.
//!
//! A `Frame` is the transport-layer packet consisting of:
//! - 12-byte raw binary header (Big Endian)
//! - Variable-length raw bytes (ciphertext or CBOR, depending on opcode)
//!
//! This is a pure data holder (header + bytes). For the high-level session
//! payloads, see [`payloads`](crate::payloads).

use bytes::{BufMut, Bytes};

use crate::{
    FrameHeader,
    errors::{ProtocolError, Result},
};

/// Complete protocol frame (transport layer)
///
/// Layout on the wire:
/// `[FrameHeader: 12 bytes, raw binary] + [payload: variable bytes]`
///
/// This type holds raw payload bytes so frames can be routed on the opcode
/// without interpreting the payload. `Message` payloads stay ciphertext
/// here; decryption is the caller's business.
///
/// # Invariants
///
/// - **Size Consistency**: `payload.len()` MUST match
///   `header.payload_size()`. Enforced by [`Frame::new`] and verified by
///   [`Frame::decode`].
///
/// - **Size Limit**: `payload.len()` MUST NOT exceed
///   [`FrameHeader::MAX_PAYLOAD_SIZE`] (1 KiB). Violations are rejected
///   during encoding and header parsing.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Frame header (12 bytes)
    pub header: FrameHeader,

    /// Raw payload bytes
    pub payload: Bytes,
}

impl Frame {
    /// Create a new frame with automatic `payload_size` calculation
    ///
    /// The header's `payload_size` field is set to match the actual payload
    /// length, so a constructed frame can never desynchronize header and
    /// payload. Oversized payloads are rejected later by [`Frame::encode`];
    /// deferring the check keeps construction infallible for tests.
    #[must_use]
    pub fn new(mut header: FrameHeader, payload: impl Into<Bytes>) -> Self {
        let payload = payload.into();

        #[allow(clippy::cast_possible_truncation)]
        {
            header.payload_size = (payload.len() as u32).to_be_bytes();
        }

        Self { header, payload }
    }

    /// Encode frame into buffer
    ///
    /// Writes: `[header (12 bytes)] + [payload (variable)]`
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::PayloadTooLarge`] if the payload exceeds
    /// [`FrameHeader::MAX_PAYLOAD_SIZE`]. This is the enforcement point for
    /// the size cap on the sending side.
    pub fn encode(&self, dst: &mut impl BufMut) -> Result<()> {
        if self.payload.len() > FrameHeader::MAX_PAYLOAD_SIZE as usize {
            return Err(ProtocolError::PayloadTooLarge {
                size: self.payload.len(),
                max: FrameHeader::MAX_PAYLOAD_SIZE as usize,
            });
        }

        dst.put_slice(&self.header.to_bytes());
        dst.put_slice(&self.payload);

        Ok(())
    }

    /// Decode frame from wire format
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Header parsing fails (invalid magic, version, or size limit)
    /// - Payload is truncated (fewer bytes than the header claims)
    ///
    /// All validation happens before allocating for the payload, and only
    /// exactly `payload_size` bytes are read; trailing data is ignored.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let header = FrameHeader::from_bytes(bytes)?;

        let payload_size = header.payload_size() as usize;
        let total_size = FrameHeader::SIZE + payload_size;

        if bytes.len() < total_size {
            return Err(ProtocolError::FrameTruncated {
                expected: payload_size,
                actual: bytes.len().saturating_sub(FrameHeader::SIZE),
            });
        }

        let payload = Bytes::copy_from_slice(&bytes[FrameHeader::SIZE..total_size]);

        Ok(Self { header: *header, payload })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::Opcode;

    #[test]
    fn frame_with_payload() {
        let payload_bytes = vec![1, 2, 3, 4];
        let frame = Frame::new(FrameHeader::new(Opcode::Message), payload_bytes.clone());

        // payload_size is set automatically
        assert_eq!(frame.header.payload_size(), payload_bytes.len() as u32);

        let mut wire = Vec::new();
        frame.encode(&mut wire).expect("should encode");

        let parsed = Frame::decode(&wire).expect("should decode");
        assert_eq!(parsed.header.opcode_enum(), Some(Opcode::Message));
        assert_eq!(frame.payload, parsed.payload);
    }

    #[test]
    fn empty_payload_round_trips() {
        let frame = Frame::new(FrameHeader::new(Opcode::Goodbye), Vec::new());

        let mut wire = Vec::new();
        frame.encode(&mut wire).expect("should encode");
        assert_eq!(wire.len(), FrameHeader::SIZE);

        let parsed = Frame::decode(&wire).expect("should decode");
        assert!(parsed.payload.is_empty());
    }

    #[test]
    fn reject_truncated_frame() {
        let frame = Frame::new(FrameHeader::new(Opcode::Message), vec![0u8; 100]);

        let mut wire = Vec::new();
        frame.encode(&mut wire).expect("should encode");

        // Drop the tail of the payload
        let result = Frame::decode(&wire[..FrameHeader::SIZE + 10]);
        assert!(matches!(
            result,
            Err(ProtocolError::FrameTruncated { expected: 100, actual: 10 })
        ));
    }

    #[test]
    fn reject_oversized_payload_on_encode() {
        let oversized = vec![0u8; FrameHeader::MAX_PAYLOAD_SIZE as usize + 1];
        let frame = Frame::new(FrameHeader::new(Opcode::Message), oversized);

        let mut wire = Vec::new();
        assert!(matches!(frame.encode(&mut wire), Err(ProtocolError::PayloadTooLarge { .. })));
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let frame = Frame::new(FrameHeader::new(Opcode::Message), vec![9u8; 3]);

        let mut wire = Vec::new();
        frame.encode(&mut wire).expect("should encode");
        wire.extend_from_slice(b"trailing junk");

        let parsed = Frame::decode(&wire).expect("should decode");
        assert_eq!(parsed.payload.as_ref(), &[9u8, 9, 9]);
    }

    proptest! {
        #[test]
        fn frame_round_trip(
            payload in proptest::collection::vec(any::<u8>(), 0..=FrameHeader::MAX_PAYLOAD_SIZE as usize),
        ) {
            let frame = Frame::new(FrameHeader::new(Opcode::Message), payload);

            let mut wire = Vec::new();
            frame.encode(&mut wire).expect("should encode");

            let parsed = Frame::decode(&wire).expect("should decode");
            prop_assert_eq!(frame.payload, parsed.payload);
        }
    }
}
