//! Rijndael substitution boxes.
//!
//! The tables are the standard AES S-boxes; they do not depend on the block
//! width. The cipher itself goes through [`sub_byte`] and [`inv_sub_byte`],
//! which compute the same mapping arithmetically so that no memory access is
//! indexed by secret data.

use crate::gf;

/// Forward affine transform applied after field inversion.
#[inline]
const fn affine(b: u8) -> u8 {
    0x63 ^ b ^ b.rotate_left(1) ^ b.rotate_left(2) ^ b.rotate_left(3) ^ b.rotate_left(4)
}

/// Inverse of [`affine`].
#[inline]
const fn inv_affine(b: u8) -> u8 {
    let y = b ^ 0x63;
    y.rotate_left(1) ^ y.rotate_left(3) ^ y.rotate_left(6)
}

/// Forward S-box value for `x`, computed in constant time.
#[inline]
pub const fn sub_byte(x: u8) -> u8 {
    affine(gf::inv(x))
}

/// Inverse S-box value for `x`, computed in constant time.
#[inline]
pub const fn inv_sub_byte(x: u8) -> u8 {
    gf::inv(inv_affine(x))
}

const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = sub_byte(i as u8);
        i += 1;
    }
    table
}

const fn build_inv_sbox(forward: &[u8; 256]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[forward[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Forward substitution table.
pub const SBOX: [u8; 256] = build_sbox();

/// Inverse substitution table; `INV_SBOX[SBOX[x]] == x`.
pub const INV_SBOX: [u8; 256] = build_inv_sbox(&SBOX);
