//! Parley Cipher Engine
//!
//! This crate provides the symmetric stream cipher used by the Parley demo
//! protocol.
//!
//! # Design
//!
//! All functions in this crate are pure - they have no side effects and
//! produce deterministic outputs given the same inputs. Each [`transform`]
//! call schedules a fresh permutation table from the key and discards it
//! afterwards, so no state persists between calls and independent calls are
//! safe from concurrent contexts, enabling:
//!
//! - Deterministic testing with hard-coded fixtures
//! - One entry point for both directions (XOR is self-inverse)
//! - No coupling to transport or framing concerns
//!
//! # Security
//!
//! This is NOT a secure cipher. The algorithm is a legacy stream cipher with
//! well-known statistical weaknesses, implemented here for byte-exact
//! behavioral compatibility with the wire peers, not for confidentiality
//! against a real adversary. Do not use it outside the demo protocol.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod stream;

pub use stream::{CipherError, Keystream, PermutationTable, transform};
