//! Key schedule: derives the permutation table from a key.

use crate::stream::error::CipherError;

/// A key-scrambled permutation of the byte values `0..=255`.
///
/// The table starts as the identity permutation and is scrambled by 256
/// key-dependent swaps. Swapping preserves the permutation property, so the
/// table contains every byte value exactly once at all times - immediately
/// after scheduling and after every swap the keystream performs later.
///
/// A table is scheduled fresh for each transform and is consumed by
/// [`Keystream::new`](crate::stream::Keystream::new). It is deliberately not
/// `Clone`: reusing one schedule across two buffers would break the
/// keystream's statistical independence.
#[derive(Debug, PartialEq, Eq)]
pub struct PermutationTable {
    s: [u8; 256],
}

impl PermutationTable {
    /// Schedule a table from `key`.
    ///
    /// Key bytes are consumed cyclically: for each `i` in `0..256`,
    /// `j = (j + S[i] + key[i % key.len()]) mod 256` and `S[i]`/`S[j]` are
    /// swapped. Deterministic - no randomness, no side effects.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if `key` is empty.
    pub fn schedule(key: &[u8]) -> Result<Self, CipherError> {
        if key.is_empty() {
            return Err(CipherError::InvalidKey);
        }

        let mut s = [0u8; 256];
        for (i, slot) in s.iter_mut().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            {
                *slot = i as u8;
            }
        }

        let mut j: u8 = 0;
        for i in 0..256 {
            j = j.wrapping_add(s[i]).wrapping_add(key[i % key.len()]);
            s.swap(i, usize::from(j));
        }

        Ok(Self { s })
    }

    /// Consume the table, yielding the raw 256-byte state.
    pub(crate) fn into_inner(self) -> [u8; 256] {
        self.s
    }
}
