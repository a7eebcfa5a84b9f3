//! Stream cipher: key schedule, keystream generation, and the transform API.
//!
//! The cipher is split the way the algorithm is: [`PermutationTable`] owns
//! the key schedule (KSA), [`Keystream`] owns pseudo-random generation
//! (PRGA), and [`transform`] orchestrates the two.
//!
//! ```text
//! key bytes
//!     │
//!     ▼ PermutationTable::schedule (KSA)
//! PermutationTable
//!     │
//!     ▼ Keystream::new (move)
//! Keystream
//!     │
//!     ▼ Keystream::apply (PRGA + XOR, consumes self)
//! transformed bytes
//! ```
//!
//! Ownership enforces the single-use table invariant: the table moves into
//! the keystream and the keystream moves into `apply`, so a scheduled table
//! can never be replayed across two buffers.

pub mod error;
pub mod keystream;
pub mod schedule;

pub use error::CipherError;
pub use keystream::Keystream;
pub use schedule::PermutationTable;

/// Transform `data` under `key`, for both encryption and decryption.
///
/// A fresh permutation table is scheduled from `key` on every call, so the
/// same call decrypts what it encrypted:
/// `transform(key, transform(key, data)) == data`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if `key` is empty. All other inputs,
/// including an empty `data` buffer, are valid.
pub fn transform(key: &[u8], data: &[u8]) -> Result<Vec<u8>, CipherError> {
    let table = PermutationTable::schedule(key)?;
    Ok(Keystream::new(table).apply(data))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn demo_key_fixture() {
        // Reference run of the demo pair: key "1234567890", message "hello".
        let ciphertext = transform(b"1234567890", b"hello").expect("non-empty key");
        assert_eq!(ciphertext, hex::decode("a249996d37").expect("valid hex"));

        let plaintext = transform(b"1234567890", &ciphertext).expect("non-empty key");
        assert_eq!(plaintext, b"hello");
    }

    #[test]
    fn published_test_vectors() {
        let cases = [
            ("Key", "Plaintext", "bbf316e8d940af0ad3"),
            ("Wiki", "pedia", "1021bf0420"),
            ("Secret", "Attack at dawn", "45a01f645fc35b383552544b9bf5"),
        ];

        for (key, plaintext, expected) in cases {
            let ciphertext = transform(key.as_bytes(), plaintext.as_bytes()).expect("valid key");
            assert_eq!(hex::encode(ciphertext), expected, "key {key:?}");
        }
    }

    #[test]
    fn empty_key_is_rejected() {
        assert_eq!(transform(b"", b"hello"), Err(CipherError::InvalidKey));
        assert_eq!(transform(b"", b""), Err(CipherError::InvalidKey));
    }

    #[test]
    fn empty_data_yields_empty_output() {
        let out = transform(b"k", b"").expect("non-empty key");
        assert!(out.is_empty());
    }

    #[test]
    fn distinct_keys_diverge() {
        let a = transform(b"1234567890", b"hello").expect("non-empty key");
        let b = transform(b"0987654321", b"hello").expect("non-empty key");
        assert_ne!(a, b);
    }

    proptest! {
        #[test]
        fn round_trip(
            key in proptest::collection::vec(any::<u8>(), 1..64),
            data in proptest::collection::vec(any::<u8>(), 0..1024),
        ) {
            let ciphertext = transform(&key, &data).expect("non-empty key");
            let plaintext = transform(&key, &ciphertext).expect("non-empty key");
            prop_assert_eq!(plaintext, data);
        }

        #[test]
        fn deterministic(
            key in proptest::collection::vec(any::<u8>(), 1..64),
            data in proptest::collection::vec(any::<u8>(), 0..1024),
        ) {
            let first = transform(&key, &data).expect("non-empty key");
            let second = transform(&key, &data).expect("non-empty key");
            prop_assert_eq!(first, second);
        }

        #[test]
        fn length_preserved(
            key in proptest::collection::vec(any::<u8>(), 1..64),
            data in proptest::collection::vec(any::<u8>(), 0..1024),
        ) {
            let out = transform(&key, &data).expect("non-empty key");
            prop_assert_eq!(out.len(), data.len());
        }
    }
}
