//! Keystream generation: pseudo-random bytes XORed against the data.

use crate::stream::schedule::PermutationTable;

/// Pseudo-random byte generator over a scheduled permutation table.
///
/// Holds the table plus the two running cursors `i` and `j`. Generation is
/// inherently sequential: every output byte depends on the swaps left behind
/// by all previous bytes, so there is no intra-call parallelism to exploit.
///
/// [`apply`](Self::apply) takes `self` by value - the mutated table is
/// discarded with the keystream, making cross-call reuse unrepresentable.
#[derive(Debug)]
pub struct Keystream {
    s: [u8; 256],
    i: u8,
    j: u8,
}

impl Keystream {
    /// Build a keystream from a freshly scheduled table, cursors reset to 0.
    pub fn new(table: PermutationTable) -> Self {
        Self { s: table.into_inner(), i: 0, j: 0 }
    }

    /// XOR the keystream into `data`, returning the transformed bytes.
    ///
    /// Output length equals input length; an empty input yields an empty
    /// output without advancing the generator.
    pub fn apply(mut self, data: &[u8]) -> Vec<u8> {
        let mut result = Vec::with_capacity(data.len());

        for &byte in data {
            self.i = self.i.wrapping_add(1);
            self.j = self.j.wrapping_add(self.s[usize::from(self.i)]);
            self.s.swap(usize::from(self.i), usize::from(self.j));

            let idx = self.s[usize::from(self.i)].wrapping_add(self.s[usize::from(self.j)]);
            let keystream_byte = self.s[usize::from(idx)];
            result.push(byte ^ keystream_byte);
        }

        result
    }
}
