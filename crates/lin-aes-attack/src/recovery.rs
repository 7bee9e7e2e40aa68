//! Key recovery from one chosen-plaintext/ciphertext pair.

use lin_aes_core::{decrypt, encrypt, xor_in_place, Aes128Key, Block};
use tracing::{debug, error, info};

use crate::error::{AttackError, Result};
use crate::system::AffineSystem;

/// Configuration for the attack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttackConfig {
    /// Plaintext submitted to the oracle. Any value works; it only shifts `B`.
    pub chosen_plaintext: Block,
}

/// Encrypts the chosen plaintext under the secret key.
///
/// This is the only step that touches the real key; it stands in for
/// whatever encryption capability the attacker observes.
pub fn oracle(key: &Aes128Key, config: &AttackConfig) -> Block {
    encrypt(key, &config.chosen_plaintext)
}

/// Recovers the key from the ciphertext of `system.plaintext`.
///
/// Solves `ciphertext = A · key ⊕ B`, then checks the solution against the
/// known pair. A key that does not reproduce the pair is never returned.
pub fn recover_key(ciphertext: &Block, system: &AffineSystem) -> Result<Aes128Key> {
    let key = solve(ciphertext, system)?;
    verify_key(&key, &system.plaintext, ciphertext)?;
    info!(key = %hex::encode(key.0), "recovered key");
    Ok(key)
}

/// `key = A⁻¹ · (ciphertext ⊕ B)`, unchecked.
fn solve(ciphertext: &Block, system: &AffineSystem) -> Result<Aes128Key> {
    let a_inv = system.a.invert().ok_or(AttackError::SingularMatrix)?;
    debug!("inverted coefficient matrix");

    let mut rhs = *ciphertext;
    xor_in_place(&mut rhs, &system.b);
    Ok(Aes128Key::from(a_inv.apply(&rhs)))
}

/// Checks that `key` maps `plaintext` to `ciphertext` in both directions.
pub fn verify_key(key: &Aes128Key, plaintext: &Block, ciphertext: &Block) -> Result<()> {
    let encrypted = encrypt(key, plaintext);
    if encrypted != *ciphertext {
        return Err(verification_failure(key, ciphertext, &encrypted));
    }
    let decrypted = decrypt(key, ciphertext);
    if decrypted != *plaintext {
        return Err(verification_failure(key, plaintext, &decrypted));
    }
    Ok(())
}

fn verification_failure(key: &Aes128Key, expected: &Block, actual: &Block) -> AttackError {
    let err = AttackError::VerificationFailed {
        key: hex::encode(key.0),
        expected: hex::encode(expected),
        actual: hex::encode(actual),
    };
    error!(%err, "key verification failed");
    err
}

/// Key-recovery attack with its derived affine system.
///
/// The system is derived once at construction and can be reused against any
/// number of keys.
#[derive(Clone, Debug)]
pub struct KeyRecovery {
    config: AttackConfig,
    system: AffineSystem,
}

impl KeyRecovery {
    /// Creates an attack against the all-zero chosen plaintext.
    pub fn new() -> Self {
        Self::with_config(AttackConfig::default())
    }

    /// Creates an attack with explicit configuration.
    pub fn with_config(config: AttackConfig) -> Self {
        let system = AffineSystem::derive(&config.chosen_plaintext);
        Self { config, system }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AttackConfig {
        &self.config
    }

    /// Returns the derived affine system.
    pub fn system(&self) -> &AffineSystem {
        &self.system
    }

    /// Recovers the key from the oracle's ciphertext of the chosen plaintext
    /// and verifies it against that pair.
    pub fn recover(&self, ciphertext: &Block) -> Result<Aes128Key> {
        recover_key(ciphertext, &self.system)
    }
}

impl Default for KeyRecovery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix16;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn random_key(rng: &mut impl RngCore) -> Aes128Key {
        let mut key = [0u8; 16];
        rng.fill_bytes(&mut key);
        Aes128Key::from(key)
    }

    #[test]
    fn recovers_random_keys() {
        let attack = KeyRecovery::new();
        let mut rng = ChaCha20Rng::from_seed([60u8; 32]);
        for _ in 0..32 {
            let key = random_key(&mut rng);
            let ciphertext = oracle(&key, attack.config());
            assert_eq!(attack.recover(&ciphertext), Ok(key));
        }
    }

    #[test]
    fn works_with_nonzero_chosen_plaintext() {
        let config = AttackConfig {
            chosen_plaintext: *b"any plaintext ok",
        };
        let attack = KeyRecovery::with_config(config);
        let mut rng = ChaCha20Rng::from_seed([61u8; 32]);
        let key = random_key(&mut rng);
        let ciphertext = oracle(&key, &config);
        assert_eq!(attack.recover(&ciphertext), Ok(key));
    }

    #[test]
    fn singular_system_is_reported() {
        let system = AffineSystem {
            plaintext: [0u8; 16],
            a: Matrix16::zero(),
            b: [0u8; 16],
        };
        assert_eq!(
            recover_key(&[0u8; 16], &system),
            Err(AttackError::SingularMatrix)
        );
    }

    #[test]
    fn wrong_key_fails_verification() {
        let key = Aes128Key::from([7u8; 16]);
        let plaintext = [0u8; 16];
        let ciphertext = encrypt(&key, &plaintext);
        let wrong = Aes128Key::from([8u8; 16]);
        let err = verify_key(&wrong, &plaintext, &ciphertext).unwrap_err();
        assert!(matches!(err, AttackError::VerificationFailed { .. }));
        assert!(verify_key(&key, &plaintext, &ciphertext).is_ok());
    }

    #[test]
    fn tampered_constant_vector_is_rejected() {
        let mut rng = ChaCha20Rng::from_seed([62u8; 32]);
        let key = random_key(&mut rng);
        let attack = KeyRecovery::new();
        let ciphertext = oracle(&key, attack.config());

        let mut system = *attack.system();
        system.b[5] ^= 0x80;
        let unchecked = solve(&ciphertext, &system).expect("still invertible");
        assert_ne!(unchecked, key);

        let err = recover_key(&ciphertext, &system).unwrap_err();
        assert!(matches!(err, AttackError::VerificationFailed { .. }));
    }
}
