//! The affine system `ciphertext = A · key ⊕ B` for a fixed plaintext.

use lin_aes_core::{Block, State};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::affine::AffineExpr;
use crate::matrix::{Matrix16, DIM};
use crate::symbolic::symbolic_encrypt;

/// Coefficient matrix and constant vector extracted from a symbolic ciphertext.
///
/// Depends only on the chosen plaintext, never on the secret key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffineSystem {
    /// Plaintext the system was derived for.
    pub plaintext: Block,
    /// `a.get(row, j)` is the coefficient of key byte `j` in ciphertext byte `row`.
    pub a: Matrix16,
    /// Ciphertext of `plaintext` under the all-zero key.
    pub b: Block,
}

impl AffineSystem {
    /// Encrypts `plaintext` symbolically and extracts the system.
    pub fn derive(plaintext: &Block) -> Self {
        let system = extract_affine_system(plaintext, &symbolic_encrypt(plaintext));
        debug!(
            plaintext = %hex::encode(plaintext),
            b = %hex::encode(system.b),
            "derived affine system"
        );
        system
    }

    /// Predicts the ciphertext for `key` as `A · key ⊕ B`.
    pub fn predict(&self, key: &[u8; DIM]) -> Block {
        let mut out = self.a.apply(key);
        lin_aes_core::xor_in_place(&mut out, &self.b);
        out
    }

    /// Serializes the system with `bincode`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Deserializes a system with `bincode`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

/// Splits each output expression of the symbolic encryption of `plaintext`
/// into a matrix row and a constant.
pub fn extract_affine_system(plaintext: &Block, ciphertext: &State<AffineExpr>) -> AffineSystem {
    let rows = ciphertext.map(|expr| expr.coeffs);
    let b = ciphertext.map(|expr| expr.constant);
    AffineSystem {
        plaintext: *plaintext,
        a: Matrix16::from_rows(rows),
        b,
    }
}
