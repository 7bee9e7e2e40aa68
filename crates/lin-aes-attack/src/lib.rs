//! Key recovery for AES-128 without SubBytes.
//!
//! With the S-box gone, encryption of a fixed plaintext is an affine map of the
//! key over GF(2^8): `E_k(P) = A · k ⊕ B`. This crate runs the cipher on
//! symbolic key bytes to extract `A` and `B`, then inverts `A` and recovers the
//! key from a single ciphertext of the chosen plaintext.
//!
//! ```
//! use lin_aes_attack::{oracle, KeyRecovery};
//! use lin_aes_core::Aes128Key;
//!
//! let secret = Aes128Key::from(*b"sixteen byte key");
//! let attack = KeyRecovery::new();
//! let ciphertext = oracle(&secret, attack.config());
//! assert_eq!(attack.recover(&ciphertext).unwrap(), secret);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod affine;
mod error;
mod matrix;
mod recovery;
mod symbolic;
mod system;

pub use affine::{AffineExpr, UNKNOWNS};
pub use error::{AttackError, Result};
pub use matrix::{Matrix16, DIM};
pub use recovery::{oracle, recover_key, verify_key, AttackConfig, KeyRecovery};
pub use symbolic::{symbolic_encrypt, symbolic_key};
pub use system::{extract_affine_system, AffineSystem};
