//! Values the round functions can operate on.

use crate::field;

/// A value closed under the operations AES-without-SubBytes needs: addition
/// and multiplication by a known field constant.
///
/// Concrete bytes implement it directly. Anything else that supports these
/// two operations (for instance an affine expression in unknown key bytes)
/// can be pushed through the exact same round code.
pub trait Element: Copy {
    /// Lifts a concrete field element.
    fn from_byte(byte: u8) -> Self;

    /// Field addition.
    fn xor(self, rhs: Self) -> Self;

    /// Multiplication by a concrete field constant.
    fn scale(self, factor: u8) -> Self;

    /// Multiplication by `x`.
    #[inline]
    fn xtime(self) -> Self {
        self.scale(0x02)
    }
}

impl Element for u8 {
    #[inline]
    fn from_byte(byte: u8) -> Self {
        byte
    }

    #[inline]
    fn xor(self, rhs: Self) -> Self {
        self ^ rhs
    }

    #[inline]
    fn scale(self, factor: u8) -> Self {
        field::mul(self, factor)
    }

    #[inline]
    fn xtime(self) -> Self {
        field::xtime(self)
    }
}
