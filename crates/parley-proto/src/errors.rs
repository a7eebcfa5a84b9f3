//! Error types for the Parley protocol.
//!
//! All errors are structured, testable, and provide actionable information.

use thiserror::Error;

/// Protocol-level errors that can occur during frame parsing and validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    // Frame parsing errors
    /// Frame is shorter than the minimum header size
    #[error("frame too short: expected at least {expected} bytes, got {actual}")]
    FrameTooShort {
        /// Expected minimum size in bytes
        expected: usize,
        /// Actual size received
        actual: usize,
    },

    /// Invalid magic number in frame header
    #[error("invalid magic number: expected 0x50524C59 (\"PRLY\")")]
    InvalidMagic,

    /// Unsupported protocol version
    #[error("unsupported protocol version: {0}")]
    UnsupportedVersion(u8),

    /// Payload exceeds maximum allowed size
    #[error("payload too large: {size} bytes exceeds maximum {max}")]
    PayloadTooLarge {
        /// Actual payload size
        size: usize,
        /// Maximum allowed size
        max: usize,
    },

    /// Frame is truncated (header claims more data than available)
    #[error("frame truncated: header claims {expected} payload bytes, but only {actual} available")]
    FrameTruncated {
        /// Expected payload size from header
        expected: usize,
        /// Actual bytes available
        actual: usize,
    },

    // Validation errors
    /// Invalid or unknown opcode
    #[error("invalid opcode: {0:#06x}")]
    InvalidOpcode(u16),

    /// Frame carried a different opcode than the decoder expected
    #[error("unexpected opcode: expected {expected:#06x}, got {actual:#06x}")]
    UnexpectedOpcode {
        /// Opcode the decoder expected
        expected: u16,
        /// Opcode found in the frame header
        actual: u16,
    },

    // CBOR errors (wrapped for testability)
    /// Failed to encode a payload as CBOR
    #[error("failed to encode CBOR: {0}")]
    CborEncode(String),

    /// Failed to decode a CBOR payload
    #[error("failed to decode CBOR: {0}")]
    CborDecode(String),

    // Transport errors
    /// I/O failure while reading or writing a frame
    #[error("io error: {0}")]
    Io(String),
}

/// Convenient Result type alias for protocol operations
pub type Result<T> = std::result::Result<T, ProtocolError>;
