//! Key expansion for a 256-bit block and a 128/192/256-bit key.

use core::convert::TryInto;

use zeroize::Zeroize;

use crate::block::BLOCK_SIZE;
use crate::gf::xtime;
use crate::key::{KeySize, RoundKeys, ROUNDS};
use crate::sbox::sub_byte;

/// Block width in 32-bit words (`Nb`).
const BLOCK_WORDS: usize = BLOCK_SIZE / 4;

/// Total schedule length in words, `Nb * (Nr + 1)`.
const SCHEDULE_WORDS: usize = BLOCK_WORDS * (ROUNDS + 1);

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sub_byte))
}

/// Whether word `i` of the schedule gets the extra mid-key `SubWord`.
///
/// mcrypt applies it to 192-bit keys as well as 256-bit ones.
fn needs_mid_sub(size: KeySize, i: usize) -> bool {
    match size {
        KeySize::Bits128 => false,
        KeySize::Bits192 | KeySize::Bits256 => i % size.words() == 4,
    }
}

/// Expands `key` into 15 round keys. `key.len()` must equal `size.bytes()`.
pub(crate) fn expand_key(key: &[u8], size: KeySize) -> RoundKeys {
    debug_assert_eq!(key.len(), size.bytes());
    let nk = size.words();

    let mut w = [0u32; SCHEDULE_WORDS];
    for (slot, chunk) in w.iter_mut().zip(key.chunks_exact(4)) {
        let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
        *slot = u32::from_be_bytes(bytes);
    }

    let mut rcon = 1u8;
    for i in nk..SCHEDULE_WORDS {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(rcon) << 24);
            rcon = xtime(rcon);
        } else if needs_mid_sub(size, i) {
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    let mut round_keys = [[0u8; BLOCK_SIZE]; ROUNDS + 1];
    for (round, round_key) in round_keys.iter_mut().enumerate() {
        let words = &w[round * BLOCK_WORDS..(round + 1) * BLOCK_WORDS];
        for (column, word) in round_key.chunks_exact_mut(4).zip(words) {
            column.copy_from_slice(&word.to_be_bytes());
        }
    }
    w.zeroize();

    RoundKeys(round_keys)
}
