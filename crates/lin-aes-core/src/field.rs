//! GF(2^8) arithmetic modulo `x^8 + x^4 + x^3 + x + 1` (0x11B).
//!
//! Elements are bytes whose bits are polynomial coefficients. Addition is XOR.

/// Low byte of the reduction polynomial, XOR-ed in when `x^8` overflows.
pub const REDUCTION: u8 = 0x1b;

/// Multiplicative inverses; `INVERSE[0]` is 0 by convention.
static INVERSE: [u8; 256] = build_inverse_table();

/// Multiplies by `x`, reducing when the top bit shifts out.
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Field product of `a` and `b` by double-and-reduce.
#[inline]
pub const fn mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut i = 0;
    while i < 8 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
        i += 1;
    }
    product
}

/// Multiplicative inverse of `a`. Returns 0 for 0.
#[inline]
pub fn inv(a: u8) -> u8 {
    INVERSE[a as usize]
}

const fn build_inverse_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut a = 1usize;
    while a < 256 {
        // a^254 = a^-1 in a field of 256 elements
        let mut result = 1u8;
        let mut base = a as u8;
        let mut exp = 254u32;
        while exp != 0 {
            if exp & 1 != 0 {
                result = mul(result, base);
            }
            base = mul(base, base);
            exp >>= 1;
        }
        table[a] = result;
        a += 1;
    }
    table
}
