//! AES-128 with the SubBytes layer removed.
//!
//! Dropping the S-box leaves ShiftRows, MixColumns and AddRoundKey, all of
//! which are affine over GF(2^8). The key schedule loses SubWord as well, so
//! every ciphertext byte is an affine function of the key bytes. This crate
//! provides:
//! - GF(2^8) arithmetic under the AES polynomial `x^8 + x^4 + x^3 + x + 1`.
//! - Round transformations generic over an [`Element`], so the same round
//!   sequence can be evaluated on bytes or on symbolic affine expressions.
//! - Key schedule, single-block encryption and decryption.
//!
//! The cipher is deliberately broken; it exists to be attacked.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod element;
pub mod field;
mod key;
pub mod round;

pub use crate::block::{xor_in_place, Block, State};
pub use crate::cipher::{
    decrypt, decrypt_block, encrypt, encrypt_block, encrypt_state, expand_key, expand_key_words,
    ROUNDS,
};
pub use crate::element::Element;
pub use crate::key::{Aes128Key, RoundKeys};
