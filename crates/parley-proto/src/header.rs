//! Frame header implementation with zero-copy parsing.
//!
//! The `FrameHeader` is a fixed 12-byte structure serialized as raw binary
//! (Big Endian). Receivers read the header first, learn the payload size,
//! and then read exactly that many payload bytes.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::{
    Opcode,
    errors::{ProtocolError, Result},
};

/// Fixed 12-byte frame header (Big Endian network byte order)
///
/// All multi-byte integers are stored in Big Endian format to match network
/// byte order. Fields are stored as raw byte arrays to avoid alignment
/// issues with `#[repr(C, packed)]`.
///
/// # Security
///
/// - **Zero-Copy Safety**: The `#[repr(C, packed)]` layout with `zerocopy`
///   traits ensures this struct can be safely cast from untrusted network
///   bytes. All 12-byte patterns are valid (no invalid bit patterns), so the
///   cast itself cannot cause undefined behavior; semantic validation (magic,
///   version, size limit) happens in [`from_bytes`](Self::from_bytes).
///
/// - **Size Limit**: `payload_size` is validated against
///   [`MAX_PAYLOAD_SIZE`](Self::MAX_PAYLOAD_SIZE) during parsing, bounding
///   the allocation a malicious header can request.
#[repr(C, packed)]
#[derive(Clone, Copy, FromBytes, IntoBytes, KnownLayout, Immutable)]
pub struct FrameHeader {
    // Protocol identification (6 bytes: 0-5)
    magic: [u8; 4], // 0x50524C59 ("PRLY" in ASCII)
    version: u8,    // 0x01
    reserved: u8,   // must be zero, room for future flags

    // Operation and payload metadata (6 bytes: 6-11)
    opcode: [u8; 2],                  // u16 operation code
    pub(crate) payload_size: [u8; 4], // u32 payload length
}

impl FrameHeader {
    /// Size of the serialized header (12 bytes)
    pub const SIZE: usize = 12;

    /// Magic number: "PRLY" in ASCII (0x50524C59)
    pub const MAGIC: u32 = 0x5052_4C59;

    /// Current protocol version
    pub const VERSION: u8 = 0x01;

    /// Maximum payload size (1 KiB, the peer's fixed receive buffer)
    pub const MAX_PAYLOAD_SIZE: u32 = 1024;

    /// Create a new header with the specified opcode and zero payload size.
    ///
    /// [`Frame::new`](crate::Frame::new) fills in the payload size.
    #[must_use]
    pub fn new(opcode: Opcode) -> Self {
        Self {
            magic: Self::MAGIC.to_be_bytes(),
            version: Self::VERSION,
            reserved: 0,
            opcode: opcode.to_u16().to_be_bytes(),
            payload_size: [0u8; 4],
        }
    }

    /// Parse a header from network bytes (zero-copy, safe)
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if:
    /// - Buffer is too short (< 12 bytes)
    /// - Magic number is invalid
    /// - Protocol version is unsupported
    /// - Payload size exceeds [`MAX_PAYLOAD_SIZE`](Self::MAX_PAYLOAD_SIZE)
    pub fn from_bytes(bytes: &[u8]) -> Result<&Self> {
        let header = Self::ref_from_prefix(bytes)
            .map_err(|_| ProtocolError::FrameTooShort { expected: Self::SIZE, actual: bytes.len() })?
            .0;

        if u32::from_be_bytes(header.magic) != Self::MAGIC {
            return Err(ProtocolError::InvalidMagic);
        }

        if header.version != Self::VERSION {
            return Err(ProtocolError::UnsupportedVersion(header.version));
        }

        let payload_size = u32::from_be_bytes(header.payload_size);
        if payload_size > Self::MAX_PAYLOAD_SIZE {
            return Err(ProtocolError::PayloadTooLarge {
                size: payload_size as usize,
                max: Self::MAX_PAYLOAD_SIZE as usize,
            });
        }

        Ok(header)
    }

    /// Serialize the header to its 12-byte wire form.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out.copy_from_slice(self.as_bytes());
        out
    }

    /// Raw opcode value from the wire.
    #[must_use]
    pub fn opcode_raw(&self) -> u16 {
        u16::from_be_bytes(self.opcode)
    }

    /// Opcode as the typed enum, or `None` if unknown.
    #[must_use]
    pub fn opcode_enum(&self) -> Option<Opcode> {
        Opcode::from_u16(self.opcode_raw())
    }

    /// Payload length claimed by this header.
    #[must_use]
    pub fn payload_size(&self) -> u32 {
        u32::from_be_bytes(self.payload_size)
    }
}

impl std::fmt::Debug for FrameHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameHeader")
            .field("version", &self.version)
            .field("opcode", &self.opcode_raw())
            .field("payload_size", &self.payload_size())
            .finish()
    }
}
