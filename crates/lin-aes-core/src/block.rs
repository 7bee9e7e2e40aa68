//! Block and state representation helpers.

/// A 4×4 state of field elements, stored column-major (`4 * column + row`).
pub type State<E> = [E; 16];

/// AES block of 16 bytes.
pub type Block = State<u8>;

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Position of `(row, column)` inside a column-major state.
#[inline]
pub(crate) const fn index(row: usize, column: usize) -> usize {
    4 * column + row
}
