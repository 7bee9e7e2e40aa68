//! AES-128 key schedule and block encryption/decryption without SubBytes.

use crate::block::{Block, State};
use crate::element::Element;
use crate::key::{Aes128Key, RoundKeys};
use crate::round::{add_round_key, inv_mix_columns, inv_shift_rows, mix_columns, shift_rows};

/// Number of rounds for a 128-bit key.
pub const ROUNDS: usize = 10;

const RCON: [u8; ROUNDS] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

type Word<E> = [E; 4];

fn rot_word<E: Copy>(word: Word<E>) -> Word<E> {
    let [a, b, c, d] = word;
    [b, c, d, a]
}

fn xor_word<E: Element>(lhs: Word<E>, rhs: Word<E>) -> Word<E> {
    core::array::from_fn(|i| lhs[i].xor(rhs[i]))
}

/// Expands 16 key elements into 11 round keys.
///
/// Standard AES-128 recurrence except that SubWord is skipped: every fourth
/// word is `w[i-4] ^ RotWord(w[i-1]) ^ Rcon`, the rest are `w[i-4] ^ w[i-1]`.
pub fn expand_key_words<E: Element>(key: &State<E>) -> RoundKeys<E> {
    let zero = E::from_byte(0);
    let mut w = [[zero; 4]; 4 * (ROUNDS + 1)];
    for (i, word) in w.iter_mut().take(4).enumerate() {
        *word = core::array::from_fn(|j| key[4 * i + j]);
    }

    for i in 4..w.len() {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = rot_word(temp);
            temp[0] = temp[0].xor(E::from_byte(RCON[i / 4 - 1]));
        }
        w[i] = xor_word(w[i - 4], temp);
    }

    let mut round_keys = [[zero; 16]; ROUNDS + 1];
    for (round, round_key) in round_keys.iter_mut().enumerate() {
        for (word_idx, word) in w[4 * round..4 * round + 4].iter().enumerate() {
            round_key[4 * word_idx..4 * word_idx + 4].copy_from_slice(word);
        }
    }

    RoundKeys(round_keys)
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    expand_key_words(&key.0)
}

/// Runs the full encryption round sequence on `state` in place.
///
/// The final round omits MixColumns, as in AES.
pub fn encrypt_state<E: Element>(state: &mut State<E>, round_keys: &RoundKeys<E>) {
    add_round_key(state, round_keys.get(0));

    for round in 1..ROUNDS {
        shift_rows(state);
        mix_columns(state);
        add_round_key(state, round_keys.get(round));
    }

    shift_rows(state);
    add_round_key(state, round_keys.get(ROUNDS));
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;
    encrypt_state(&mut state, round_keys);
    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(ROUNDS));
    for round in (1..ROUNDS).rev() {
        inv_shift_rows(&mut state);
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(0));

    state
}

/// Expands `key` and encrypts one block.
pub fn encrypt(key: &Aes128Key, block: &Block) -> Block {
    encrypt_block(block, &expand_key(key))
}

/// Expands `key` and decrypts one block.
pub fn decrypt(key: &Aes128Key, block: &Block) -> Block {
    decrypt_block(block, &expand_key(key))
}
