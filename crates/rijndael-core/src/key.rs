//! Key sizes and expanded round keys for Rijndael-256.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::Block;
use crate::error::{Error, Result};

/// Number of rounds. The 8-word block dominates every supported key width,
/// so `Nr = max(Nb, Nk) + 6 = 14` regardless of key size.
pub const ROUNDS: usize = 14;

/// Supported key sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 16-byte key, `Nk = 4`.
    Bits128,
    /// 24-byte key, `Nk = 6`.
    Bits192,
    /// 32-byte key, `Nk = 8`.
    Bits256,
}

impl KeySize {
    /// Classifies a raw key length, rejecting anything but 16/24/32 bytes.
    pub fn from_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(Self::Bits128),
            24 => Ok(Self::Bits192),
            32 => Ok(Self::Bits256),
            other => Err(Error::InvalidKeySize(other)),
        }
    }

    /// Key length in bytes.
    pub const fn bytes(self) -> usize {
        self.words() * 4
    }

    /// Key length in 32-bit words (`Nk`).
    pub const fn words(self) -> usize {
        match self {
            Self::Bits128 => 4,
            Self::Bits192 => 6,
            Self::Bits256 => 8,
        }
    }

    /// Key length in bits.
    pub const fn bits(self) -> usize {
        self.bytes() * 8
    }
}

/// Expanded round keys: one 32-byte block per round plus the initial whitening key.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys(pub(crate) [Block; ROUNDS + 1]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=14).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_supported_lengths() {
        assert_eq!(KeySize::from_len(16), Ok(KeySize::Bits128));
        assert_eq!(KeySize::from_len(24), Ok(KeySize::Bits192));
        assert_eq!(KeySize::from_len(32), Ok(KeySize::Bits256));
    }

    #[test]
    fn rejects_every_other_length() {
        for len in (0..=64).filter(|l| ![16, 24, 32].contains(l)) {
            assert_eq!(KeySize::from_len(len), Err(Error::InvalidKeySize(len)));
        }
    }

    #[test]
    fn dimensions_are_consistent() {
        for (size, words) in [
            (KeySize::Bits128, 4),
            (KeySize::Bits192, 6),
            (KeySize::Bits256, 8),
        ] {
            assert_eq!(size.words(), words);
            assert_eq!(size.bytes(), words * 4);
            assert_eq!(size.bits(), words * 32);
        }
    }
}
