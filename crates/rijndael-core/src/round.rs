//! Rijndael round transformations over the 4×8 state.

use crate::block::{xor_in_place, Block, BLOCK_SIZE};
use crate::gf::{gmul, xtime};
use crate::sbox::{inv_sub_byte, sub_byte};

/// Number of state columns (`Nb`).
const COLUMNS: usize = BLOCK_SIZE / 4;

/// Left-rotation, in columns, for rows 0..4 of an 8-column state.
const SHIFTS: [usize; 4] = [0, 1, 3, 4];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sub_byte(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sub_byte(*byte);
    }
}

/// Performs ShiftRows in place.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let src = *state;
    for (row, shift) in SHIFTS.iter().enumerate() {
        for col in 0..COLUMNS {
            state[col * 4 + row] = src[((col + shift) % COLUMNS) * 4 + row];
        }
    }
}

/// Performs the inverse of ShiftRows in place.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    let src = *state;
    for (row, shift) in SHIFTS.iter().enumerate() {
        for col in 0..COLUMNS {
            state[((col + shift) % COLUMNS) * 4 + row] = src[col * 4 + row];
        }
    }
}

fn mix_single_column(col: &mut [u8]) {
    let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
    col[0] = xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3;
    col[1] = a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3;
    col[2] = a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3);
    col[3] = (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3);
}

fn inv_mix_single_column(col: &mut [u8]) {
    let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
    col[0] = gmul(a0, 0x0e) ^ gmul(a1, 0x0b) ^ gmul(a2, 0x0d) ^ gmul(a3, 0x09);
    col[1] = gmul(a0, 0x09) ^ gmul(a1, 0x0e) ^ gmul(a2, 0x0b) ^ gmul(a3, 0x0d);
    col[2] = gmul(a0, 0x0d) ^ gmul(a1, 0x09) ^ gmul(a2, 0x0e) ^ gmul(a3, 0x0b);
    col[3] = gmul(a0, 0x0b) ^ gmul(a1, 0x0d) ^ gmul(a2, 0x09) ^ gmul(a3, 0x0e);
}

/// MixColumns over all eight columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for column in state.chunks_exact_mut(4) {
        mix_single_column(column);
    }
}

/// Inverse MixColumns over all eight columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for column in state.chunks_exact_mut(4) {
        inv_mix_single_column(column);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_block() -> Block {
        core::array::from_fn(|i| i as u8)
    }

    #[test]
    fn shift_rows_uses_eight_column_offsets() {
        let mut state = counting_block();
        shift_rows(&mut state);
        for col in 0..COLUMNS {
            // Row 0 stays put; rows 1..3 pull from 1, 3 and 4 columns to the right.
            assert_eq!(state[col * 4], (col * 4) as u8);
            assert_eq!(state[col * 4 + 1], (((col + 1) % 8) * 4 + 1) as u8);
            assert_eq!(state[col * 4 + 2], (((col + 3) % 8) * 4 + 2) as u8);
            assert_eq!(state[col * 4 + 3], (((col + 4) % 8) * 4 + 3) as u8);
        }
    }

    #[test]
    fn inv_shift_rows_undoes_shift_rows() {
        let original = counting_block();
        let mut state = original;
        shift_rows(&mut state);
        assert_ne!(state, original);
        inv_shift_rows(&mut state);
        assert_eq!(state, original);
    }

    #[test]
    fn mix_column_matches_known_vector() {
        // Classic MixColumns test column: db 13 53 45 -> 8e 4d a1 bc.
        let mut col = [0xdb, 0x13, 0x53, 0x45];
        mix_single_column(&mut col);
        assert_eq!(col, [0x8e, 0x4d, 0xa1, 0xbc]);
        inv_mix_single_column(&mut col);
        assert_eq!(col, [0xdb, 0x13, 0x53, 0x45]);
    }

    #[test]
    fn inv_mix_columns_undoes_mix_columns() {
        let original: Block = core::array::from_fn(|i| (i as u8).wrapping_mul(37) ^ 0x5a);
        let mut state = original;
        mix_columns(&mut state);
        assert_ne!(state, original);
        inv_mix_columns(&mut state);
        assert_eq!(state, original);
    }

    #[test]
    fn inv_sub_bytes_undoes_sub_bytes() {
        let original = counting_block();
        let mut state = original;
        sub_bytes(&mut state);
        assert_eq!(state[0], 0x63);
        inv_sub_bytes(&mut state);
        assert_eq!(state, original);
    }

    #[test]
    fn mix_columns_does_not_commute_with_add_round_key() {
        let key: Block = core::array::from_fn(|i| 0x80 | i as u8);
        let mut a = counting_block();
        add_round_key(&mut a, &key);
        inv_mix_columns(&mut a);

        let mut b = counting_block();
        inv_mix_columns(&mut b);
        add_round_key(&mut b, &key);

        assert_ne!(a, b);
    }
}
