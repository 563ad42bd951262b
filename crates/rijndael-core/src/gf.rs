//! GF(2^8) arithmetic modulo x^8 + x^4 + x^3 + x + 1 (0x11B).
//!
//! All operations are branchless so that their timing does not depend on the
//! operands; they are `const` so the substitution tables can be built at
//! compile time from them.

/// Low byte of the reduction polynomial.
const REDUCTION: u8 = 0x1b;

/// Multiplies `byte` by `x` (i.e. 2).
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    // 0xff when the top bit is set, 0x00 otherwise.
    let mask = (byte >> 7).wrapping_neg();
    (byte << 1) ^ (mask & REDUCTION)
}

/// Full field multiplication via shift-and-add over the bits of `b`.
#[inline]
pub const fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut bit = 0;
    while bit < 8 {
        product ^= a & (b & 1).wrapping_neg();
        a = xtime(a);
        b >>= 1;
        bit += 1;
    }
    product
}

/// Multiplicative inverse, computed as `x^254`. Maps 0 to 0.
pub const fn inv(x: u8) -> u8 {
    // x^254 = x^2 · x^4 · x^8 · x^16 · x^32 · x^64 · x^128
    let mut square = gmul(x, x);
    let mut acc = square;
    let mut step = 0;
    while step < 6 {
        square = gmul(square, square);
        acc = gmul(acc, square);
        step += 1;
    }
    acc
}
