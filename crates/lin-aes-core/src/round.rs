//! AES round transformations, minus SubBytes.
//!
//! Every function here is generic over [`Element`] so it can run on concrete
//! bytes or on affine expressions.

use crate::block::{index, State};
use crate::element::Element;

/// Source position of each output byte under ShiftRows (row `r` rotates left by `r`).
const SHIFT_ROWS: [usize; 16] = [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11];

/// Source position of each output byte under the inverse of ShiftRows.
const INV_SHIFT_ROWS: [usize; 16] = [0, 13, 10, 7, 4, 1, 14, 11, 8, 5, 2, 15, 12, 9, 6, 3];

#[inline]
fn permute<E: Copy>(state: &mut State<E>, sources: &[usize; 16]) {
    let previous = *state;
    for (slot, &src) in state.iter_mut().zip(sources.iter()) {
        *slot = previous[src];
    }
}

/// Performs ShiftRows in place.
#[inline]
pub fn shift_rows<E: Copy>(state: &mut State<E>) {
    permute(state, &SHIFT_ROWS);
}

/// Performs the inverse of ShiftRows in place.
#[inline]
pub fn inv_shift_rows<E: Copy>(state: &mut State<E>) {
    permute(state, &INV_SHIFT_ROWS);
}

/// Multiplies one column by the circulant matrix `[2 3 1 1]`.
///
/// Uses the `t = a0 ^ a1 ^ a2 ^ a3` form from *The Design of Rijndael* §4.1.2:
/// `b_i = a_i ^ t ^ 2·(a_i ^ a_{i+1})`.
pub fn mix_column<E: Element>(column: [E; 4]) -> [E; 4] {
    let [a0, a1, a2, a3] = column;
    let t = a0.xor(a1).xor(a2).xor(a3);
    [
        a0.xor(t).xor(a0.xor(a1).xtime()),
        a1.xor(t).xor(a1.xor(a2).xtime()),
        a2.xor(t).xor(a2.xor(a3).xtime()),
        a3.xor(t).xor(a3.xor(a0).xtime()),
    ]
}

/// Undoes [`mix_column`].
///
/// The inverse matrix `[14 11 13 9]` factors as `[2 3 1 1] · [5 0 4 0]`, so the
/// column is first multiplied by `[5 0 4 0]` (two doublings and XORs) and then
/// mixed forward.
pub fn inv_mix_column<E: Element>(column: [E; 4]) -> [E; 4] {
    let [a0, a1, a2, a3] = column;
    let u = a0.xor(a2).xtime().xtime();
    let v = a1.xor(a3).xtime().xtime();
    mix_column([a0.xor(u), a1.xor(v), a2.xor(u), a3.xor(v)])
}

fn map_columns<E: Element>(state: &mut State<E>, f: fn([E; 4]) -> [E; 4]) {
    for col in 0..4 {
        let column = core::array::from_fn(|row| state[index(row, col)]);
        for (row, value) in f(column).into_iter().enumerate() {
            state[index(row, col)] = value;
        }
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns<E: Element>(state: &mut State<E>) {
    map_columns(state, mix_column);
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns<E: Element>(state: &mut State<E>) {
    map_columns(state, inv_mix_column);
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key<E: Element>(state: &mut State<E>, round_key: &State<E>) {
    for (s, k) in state.iter_mut().zip(round_key.iter()) {
        *s = s.xor(*k);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::mul;
    use rand::RngCore;

    const INV_MIX: [[u8; 4]; 4] = [
        [0x0e, 0x0b, 0x0d, 0x09],
        [0x09, 0x0e, 0x0b, 0x0d],
        [0x0d, 0x09, 0x0e, 0x0b],
        [0x0b, 0x0d, 0x09, 0x0e],
    ];

    fn random_state() -> [u8; 16] {
        let mut state = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut state);
        state
    }

    #[test]
    fn shift_rows_rotates_each_row_left_by_its_index() {
        let mut state: [u8; 16] = core::array::from_fn(|i| i as u8);
        shift_rows(&mut state);
        for row in 0..4 {
            for col in 0..4 {
                let expected = index(row, (col + row) % 4) as u8;
                assert_eq!(state[index(row, col)], expected);
            }
        }
    }

    #[test]
    fn shift_rows_inverse_pair_is_identity() {
        for _ in 0..100 {
            let original = random_state();
            let mut state = original;
            shift_rows(&mut state);
            inv_shift_rows(&mut state);
            assert_eq!(state, original);
            inv_shift_rows(&mut state);
            shift_rows(&mut state);
            assert_eq!(state, original);
        }
    }

    #[test]
    fn mix_column_matches_fips_example() {
        // Column 0 of round 1 in FIPS-197 appendix B.
        assert_eq!(mix_column([0xd4u8, 0xbf, 0x5d, 0x30]), [0x04, 0x66, 0x81, 0xe5]);
    }

    #[test]
    fn inv_mix_column_matches_direct_inverse_matrix() {
        let mut rng = rand::thread_rng();
        for _ in 0..256 {
            let mut column = [0u8; 4];
            rng.fill_bytes(&mut column);
            let expected: [u8; 4] = core::array::from_fn(|row| {
                INV_MIX[row]
                    .iter()
                    .zip(column.iter())
                    .fold(0u8, |acc, (&m, &c)| acc ^ mul(m, c))
            });
            assert_eq!(inv_mix_column(column), expected);
        }
    }

    #[test]
    fn mix_columns_inverse_pair_is_identity() {
        for _ in 0..100 {
            let original = random_state();
            let mut state = original;
            mix_columns(&mut state);
            inv_mix_columns(&mut state);
            assert_eq!(state, original);
            inv_mix_columns(&mut state);
            mix_columns(&mut state);
            assert_eq!(state, original);
        }
    }

    #[test]
    fn add_round_key_is_self_inverse() {
        let original = random_state();
        let key = random_state();
        let mut state = original;
        add_round_key(&mut state, &key);
        add_round_key(&mut state, &key);
        assert_eq!(state, original);
    }
}
