//! Encrypts a message under a random key, then recovers the key from one
//! chosen-plaintext ciphertext and decrypts the message with it.
//!
//! Run with `RUST_LOG=debug` to see the attack steps.

use lin_aes_attack::{oracle, KeyRecovery};
use lin_aes_core::{decrypt, encrypt, Aes128Key};
use rand::RngCore;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), lin_aes_attack::AttackError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut key_bytes = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut key_bytes);
    let secret = Aes128Key::from(key_bytes);
    let message = *b"crypto{good_job}";
    let encrypted = encrypt(&secret, &message);

    let attack = KeyRecovery::new();
    let recovered = attack.recover(&oracle(&secret, attack.config()))?;
    let decrypted = decrypt(&recovered, &encrypted);

    println!("recovered key: {}", hex::encode(recovered.0));
    println!("message: {}", String::from_utf8_lossy(&decrypted));
    assert_eq!(decrypted, message);
    Ok(())
}
