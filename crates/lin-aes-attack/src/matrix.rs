//! 16×16 matrices over GF(2^8).

use lin_aes_core::field::{inv, mul};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Matrix dimension.
pub const DIM: usize = 16;

/// 16×16 matrix over GF(2^8), stored row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix16 {
    rows: [[u8; DIM]; DIM],
}

impl Matrix16 {
    /// Returns the zero matrix.
    pub fn zero() -> Self {
        Self {
            rows: [[0u8; DIM]; DIM],
        }
    }

    /// Returns the identity matrix.
    pub fn identity() -> Self {
        let mut rows = [[0u8; DIM]; DIM];
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] = 1;
        }
        Self { rows }
    }

    /// Wraps explicit rows.
    pub const fn from_rows(rows: [[u8; DIM]; DIM]) -> Self {
        Self { rows }
    }

    /// Generates a uniformly random matrix (not necessarily invertible).
    fn random<R: RngCore>(rng: &mut R) -> Self {
        let mut rows = [[0u8; DIM]; DIM];
        for row in rows.iter_mut() {
            rng.fill_bytes(row);
        }
        Self { rows }
    }

    /// Generates a uniformly random invertible matrix, retrying until one is found.
    pub fn random_invertible<R: RngCore>(rng: &mut R) -> Self {
        loop {
            let candidate = Self::random(rng);
            if candidate.is_invertible() {
                return candidate;
            }
        }
    }

    /// Returns the entry at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.rows[row][col]
    }

    /// Computes `self · vector`.
    pub fn apply(&self, vector: &[u8; DIM]) -> [u8; DIM] {
        core::array::from_fn(|i| dot(&self.rows[i], vector))
    }

    /// Multiplies two matrices (`self * rhs`).
    pub fn mul(&self, rhs: &Self) -> Self {
        let mut result = Self::zero();
        for (out_row, row) in result.rows.iter_mut().zip(self.rows.iter()) {
            for (k, &coeff) in row.iter().enumerate() {
                if coeff == 0 {
                    continue;
                }
                for (out, &r) in out_row.iter_mut().zip(rhs.rows[k].iter()) {
                    *out ^= mul(coeff, r);
                }
            }
        }
        result
    }

    /// Attempts to invert the matrix via Gauss–Jordan elimination.
    ///
    /// Returns `None` when some column has no non-zero pivot at or below the
    /// diagonal, i.e. the matrix is singular.
    pub fn invert(&self) -> Option<Self> {
        let mut left = self.rows;
        let mut right = Self::identity().rows;

        for col in 0..DIM {
            let pivot = (col..DIM).find(|&row| left[row][col] != 0)?;
            if pivot != col {
                left.swap(pivot, col);
                right.swap(pivot, col);
            }

            let scale = inv(left[col][col]);
            scale_row(&mut left[col], scale);
            scale_row(&mut right[col], scale);

            let (pivot_left, pivot_right) = (left[col], right[col]);
            for row in 0..DIM {
                let factor = left[row][col];
                if row == col || factor == 0 {
                    continue;
                }
                add_scaled_row(&mut left[row], &pivot_left, factor);
                add_scaled_row(&mut right[row], &pivot_right, factor);
            }
        }

        Some(Self { rows: right })
    }

    /// Returns true if the matrix is invertible.
    pub fn is_invertible(&self) -> bool {
        self.invert().is_some()
    }
}

fn dot(row: &[u8; DIM], vector: &[u8; DIM]) -> u8 {
    row.iter()
        .zip(vector.iter())
        .fold(0u8, |acc, (&a, &b)| acc ^ mul(a, b))
}

fn scale_row(row: &mut [u8; DIM], factor: u8) {
    for entry in row.iter_mut() {
        *entry = mul(*entry, factor);
    }
}

/// `row ^= factor · pivot`
fn add_scaled_row(row: &mut [u8; DIM], pivot: &[u8; DIM], factor: u8) {
    for (entry, &p) in row.iter_mut().zip(pivot.iter()) {
        *entry ^= mul(factor, p);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn identity_is_neutral() {
        let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
        let m = Matrix16::random(&mut rng);
        assert_eq!(m.mul(&Matrix16::identity()), m);
        assert_eq!(Matrix16::identity().mul(&m), m);
        assert_eq!(Matrix16::identity().invert(), Some(Matrix16::identity()));
    }

    #[test]
    fn inversion_roundtrip() {
        let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
        for _ in 0..16 {
            let m = Matrix16::random_invertible(&mut rng);
            let inv = m.invert().expect("invertible");
            assert_eq!(m.mul(&inv), Matrix16::identity());
            assert_eq!(inv.mul(&m), Matrix16::identity());
            assert_eq!(inv.invert(), Some(m));
        }
    }

    #[test]
    fn apply_inverse_recovers_input() {
        let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
        for _ in 0..16 {
            let m = Matrix16::random_invertible(&mut rng);
            let inv = m.invert().unwrap();
            let mut input = [0u8; DIM];
            rng.fill_bytes(&mut input);
            assert_eq!(inv.apply(&m.apply(&input)), input);
        }
    }

    #[test]
    fn apply_matches_mul_on_columns() {
        let mut rng = ChaCha20Rng::from_seed([4u8; 32]);
        let a = Matrix16::random(&mut rng);
        let b = Matrix16::random(&mut rng);
        let product = a.mul(&b);
        for col in 0..DIM {
            let column: [u8; DIM] = core::array::from_fn(|row| b.get(row, col));
            let expected = a.apply(&column);
            for row in 0..DIM {
                assert_eq!(product.get(row, col), expected[row]);
            }
        }
    }

    #[test]
    fn singular_matrices_are_rejected() {
        assert_eq!(Matrix16::zero().invert(), None);

        let mut rng = ChaCha20Rng::from_seed([5u8; 32]);
        let mut rows = Matrix16::random_invertible(&mut rng).rows;
        // row 7 := 0x53 · row 2, linearly dependent
        rows[7] = rows[2].map(|x| mul(x, 0x53));
        let singular = Matrix16::from_rows(rows);
        assert!(!singular.is_invertible());
    }

    #[test]
    fn pivot_search_swaps_rows() {
        // Anti-diagonal permutation has a zero in every leading position.
        let mut rows = [[0u8; DIM]; DIM];
        for (i, row) in rows.iter_mut().enumerate() {
            row[DIM - 1 - i] = 0x02;
        }
        let m = Matrix16::from_rows(rows);
        let inv = m.invert().expect("permutation matrices are invertible");
        assert_eq!(m.mul(&inv), Matrix16::identity());
        assert_eq!(inv.get(0, DIM - 1), lin_aes_core::field::inv(0x02));
    }
}
