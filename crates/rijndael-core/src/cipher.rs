//! Rijndael-256 cipher facade and single-block encryption/decryption.

use core::fmt;

use zeroize::ZeroizeOnDrop;

use crate::block::{zero_extend, Block, BLOCK_SIZE};
use crate::error::{Error, Result};
use crate::key::{KeySize, RoundKeys, ROUNDS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::schedule::expand_key;

/// Rijndael with a 32-byte block and a 16, 24 or 32-byte key.
///
/// The round keys are derived once in [`Rijndael256::new`] and never change,
/// so a single instance can be shared between threads; every call works on
/// its own stack copy of the block.
#[derive(Clone, ZeroizeOnDrop)]
pub struct Rijndael256 {
    #[zeroize(skip)]
    key_size: KeySize,
    round_keys: RoundKeys,
}

impl Rijndael256 {
    /// Builds a cipher from raw key bytes.
    ///
    /// Fails with [`Error::InvalidKeySize`] unless `key` is 16, 24 or 32 bytes
    /// long; no schedule is derived in that case.
    pub fn new(key: &[u8]) -> Result<Self> {
        let key_size = KeySize::from_len(key.len())?;
        Ok(Self {
            key_size,
            round_keys: expand_key(key, key_size),
        })
    }

    /// Size of the key this cipher was built with.
    pub fn key_size(&self) -> KeySize {
        self.key_size
    }

    /// Encrypts `src` into `dst`.
    ///
    /// `dst` must be exactly 32 bytes. `src` may be shorter, in which case it
    /// is zero-extended to a full block; inputs longer than one block are
    /// rejected rather than truncated.
    pub fn encrypt(&self, dst: &mut [u8], src: &[u8]) -> Result<()> {
        check_len("ciphertext output", dst.len())?;
        let mut block = zero_extend(src)?;
        self.encrypt_block(&mut block);
        dst.copy_from_slice(&block);
        Ok(())
    }

    /// Decrypts the 32-byte block `src` into the 32-byte buffer `dst`.
    ///
    /// Trailing zero padding added at encryption time is left in place; see
    /// [`crate::trim_zero_padding`].
    pub fn decrypt(&self, dst: &mut [u8], src: &[u8]) -> Result<()> {
        check_len("plaintext output", dst.len())?;
        check_len("ciphertext input", src.len())?;
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(src);
        self.decrypt_block(&mut block);
        dst.copy_from_slice(&block);
        Ok(())
    }

    /// Encrypts a single block in place.
    pub fn encrypt_block(&self, state: &mut Block) {
        let rks = &self.round_keys;

        add_round_key(state, rks.get(0));

        for round in 1..ROUNDS {
            sub_bytes(state);
            shift_rows(state);
            mix_columns(state);
            add_round_key(state, rks.get(round));
        }

        sub_bytes(state);
        shift_rows(state);
        add_round_key(state, rks.get(ROUNDS));
    }

    /// Decrypts a single block in place.
    pub fn decrypt_block(&self, state: &mut Block) {
        let rks = &self.round_keys;

        add_round_key(state, rks.get(ROUNDS));
        inv_shift_rows(state);
        inv_sub_bytes(state);

        for round in (1..ROUNDS).rev() {
            add_round_key(state, rks.get(round));
            inv_mix_columns(state);
            inv_shift_rows(state);
            inv_sub_bytes(state);
        }

        add_round_key(state, rks.get(0));
    }
}

impl fmt::Debug for Rijndael256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rijndael256")
            .field("key_size", &self.key_size)
            .finish_non_exhaustive()
    }
}

fn check_len(context: &'static str, actual: usize) -> Result<()> {
    if actual == BLOCK_SIZE {
        Ok(())
    } else {
        Err(Error::InvalidLength {
            context,
            expected: BLOCK_SIZE,
            actual,
        })
    }
}
