//! Block representation helpers.

use crate::error::{Error, Result};

/// Size of a Rijndael-256 block in bytes.
pub const BLOCK_SIZE: usize = 32;

/// Rijndael-256 block of 32 bytes, laid out column-major (byte `i` is row
/// `i % 4`, column `i / 4`).
pub type Block = [u8; BLOCK_SIZE];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Copies `src` into a fresh block, filling the remainder with zeros.
///
/// Fails when `src` is longer than a block; excess input is never truncated.
pub fn zero_extend(src: &[u8]) -> Result<Block> {
    if src.len() > BLOCK_SIZE {
        return Err(Error::InvalidLength {
            context: "plaintext",
            expected: BLOCK_SIZE,
            actual: src.len(),
        });
    }
    let mut block = [0u8; BLOCK_SIZE];
    block[..src.len()].copy_from_slice(src);
    Ok(block)
}

/// Strips trailing zero bytes left behind by [`zero_extend`].
///
/// Lossy for plaintexts that genuinely end in `0x00`.
pub fn trim_zero_padding(block: &[u8]) -> &[u8] {
    let end = block
        .iter()
        .rposition(|&b| b != 0)
        .map_or(0, |idx| idx + 1);
    &block[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_extend_pads_short_input() {
        let block = zero_extend(b"123").unwrap();
        assert_eq!(&block[..3], b"123");
        assert!(block[3..].iter().all(|&b| b == 0));
    }

    #[test]
    fn zero_extend_accepts_full_block_and_empty_input() {
        let full = [0xa5u8; BLOCK_SIZE];
        assert_eq!(zero_extend(&full).unwrap(), full);
        assert_eq!(zero_extend(&[]).unwrap(), [0u8; BLOCK_SIZE]);
    }

    #[test]
    fn zero_extend_rejects_oversized_input() {
        let err = zero_extend(&[1u8; 33]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLength {
                context: "plaintext",
                expected: BLOCK_SIZE,
                actual: 33
            }
        );
    }

    #[test]
    fn trim_zero_padding_strips_only_trailing_zeros() {
        assert_eq!(trim_zero_padding(b"\x00ab\x00c\x00\x00"), b"\x00ab\x00c");
        assert_eq!(trim_zero_padding(&[0u8; 4]), b"");
        assert_eq!(trim_zero_padding(b"abc"), b"abc");
    }

    #[test]
    fn xor_in_place_is_an_involution() {
        let mut block = [0x3cu8; BLOCK_SIZE];
        let mask: Block = core::array::from_fn(|i| i as u8);
        xor_in_place(&mut block, &mask);
        assert_eq!(block[1], 0x3d);
        xor_in_place(&mut block, &mask);
        assert_eq!(block, [0x3cu8; BLOCK_SIZE]);
    }
}
