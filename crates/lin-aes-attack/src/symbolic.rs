//! Encryption with the key replaced by 16 unknowns.

use lin_aes_core::{encrypt_state, expand_key_words, Block, Element, State};

use crate::affine::AffineExpr;

/// The key as unknowns: byte `j` becomes `k_j`.
pub fn symbolic_key() -> State<AffineExpr> {
    core::array::from_fn(AffineExpr::unknown)
}

/// Encrypts a concrete `plaintext` under the symbolic key.
///
/// Runs the same key schedule and round sequence as
/// [`lin_aes_core::encrypt_block`]; each output byte comes back as an affine
/// expression in the key bytes.
pub fn symbolic_encrypt(plaintext: &Block) -> State<AffineExpr> {
    let round_keys = expand_key_words(&symbolic_key());
    let mut state = plaintext.map(AffineExpr::from_byte);
    encrypt_state(&mut state, &round_keys);
    state
}
