//! High-level payload types carried inside frames.
//!
//! Session payloads are CBOR-encoded structs; `Message` frames carry raw
//! ciphertext and have no payload struct here.

pub mod session;

pub use session::{Goodbye, KeyIssue};
