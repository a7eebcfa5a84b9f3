//! Fuzz the cipher round-trip property.
//!
//! For every non-empty key and any data, transforming twice must return the
//! original bytes and both passes must preserve length.

#![no_main]

use libfuzzer_sys::fuzz_target;
use parley_crypto::transform;

fuzz_target!(|input: (Vec<u8>, Vec<u8>)| {
    let (key, data) = input;

    if key.is_empty() {
        assert!(transform(&key, &data).is_err());
        return;
    }

    let ciphertext = transform(&key, &data).expect("non-empty key");
    assert_eq!(ciphertext.len(), data.len());

    let plaintext = transform(&key, &ciphertext).expect("non-empty key");
    assert_eq!(plaintext, data);
});
