//! Affine expressions in the 16 key bytes over GF(2^8).

use lin_aes_core::field;
use lin_aes_core::Element;

/// Number of key unknowns.
pub const UNKNOWNS: usize = 16;

/// Value `Σ coeffs[j] · k_j ⊕ constant`, where `k_j` is key byte `j`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AffineExpr {
    /// Coefficient of each key byte.
    pub coeffs: [u8; UNKNOWNS],
    /// Additive constant.
    pub constant: u8,
}

impl AffineExpr {
    /// Constructs an expression from components.
    pub const fn new(coeffs: [u8; UNKNOWNS], constant: u8) -> Self {
        Self { coeffs, constant }
    }

    /// The expression `k_j`.
    pub fn unknown(j: usize) -> Self {
        let mut coeffs = [0u8; UNKNOWNS];
        coeffs[j] = 1;
        Self::new(coeffs, 0)
    }

    /// A constant with no key dependence.
    pub const fn constant(value: u8) -> Self {
        Self::new([0u8; UNKNOWNS], value)
    }

    #[cfg(test)]
    pub(crate) fn is_constant(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }

    /// Substitutes concrete key bytes.
    pub fn evaluate(&self, key: &[u8; UNKNOWNS]) -> u8 {
        self.coeffs
            .iter()
            .zip(key.iter())
            .fold(self.constant, |acc, (&c, &k)| acc ^ field::mul(c, k))
    }
}

impl Element for AffineExpr {
    fn from_byte(byte: u8) -> Self {
        Self::constant(byte)
    }

    fn xor(self, rhs: Self) -> Self {
        let coeffs = core::array::from_fn(|j| self.coeffs[j] ^ rhs.coeffs[j]);
        Self::new(coeffs, self.constant ^ rhs.constant)
    }

    fn scale(self, factor: u8) -> Self {
        let coeffs = self.coeffs.map(|c| field::mul(c, factor));
        Self::new(coeffs, field::mul(self.constant, factor))
    }
}
