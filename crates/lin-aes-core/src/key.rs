//! Key types for AES-128.

use crate::block::State;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

/// Expanded round keys, one state per round (0..=10).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys<E = u8>(pub [State<E>; 11]);

impl<E> RoundKeys<E> {
    /// Returns the round key at the requested index (0..=10).
    ///
    /// # Panics
    ///
    /// Panics if `round > ROUNDS`.
    #[inline]
    pub fn get(&self, round: usize) -> &State<E> {
        &self.0[round]
    }
}
