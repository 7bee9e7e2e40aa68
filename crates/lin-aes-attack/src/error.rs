//! Failure modes of key recovery.

use thiserror::Error;

/// Errors surfaced by the attack.
///
/// Neither variant is expected for a correctly derived system; both indicate a
/// defect in the arithmetic, the round sequence, or the extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttackError {
    /// Gaussian elimination found a column with no usable pivot.
    #[error("coefficient matrix is singular; the affine system cannot be solved")]
    SingularMatrix,
    /// The recovered key does not reproduce the known plaintext/ciphertext pair.
    #[error("recovered key {key} fails verification: expected {expected}, got {actual}")]
    VerificationFailed {
        /// Recovered key, hex.
        key: String,
        /// Block the key should have produced, hex.
        expected: String,
        /// Block it actually produced, hex.
        actual: String,
    },
}

/// Result alias for the attack.
pub type Result<T> = core::result::Result<T, AttackError>;
