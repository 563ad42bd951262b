//! Rijndael with a 256-bit block, as used by mcrypt's `rijndael-256`.
//!
//! This is the original Rijndael parameterisation with `Nb = 8`, not the
//! 128-bit-block AES. Keys may be 16, 24 or 32 bytes; every key size runs 14
//! rounds. The crate provides:
//! - GF(2^8) arithmetic and the Rijndael S-boxes.
//! - The generalized key schedule for a 256-bit block.
//! - Single-block encryption and decryption with mcrypt's zero-extension of
//!   short plaintext.
//!
//! Substitution and field arithmetic are computed without secret-indexed
//! table lookups or data-dependent branches. No mode of operation, padding
//! scheme or authentication is provided; callers chain blocks themselves.
//!
//! ```
//! use base64::{engine::general_purpose::STANDARD, Engine as _};
//! use rijndael_core::{trim_zero_padding, Rijndael256};
//!
//! let cipher = Rijndael256::new(b"1234567890123456")?;
//!
//! let mut encrypted = [0u8; 32];
//! cipher.encrypt(&mut encrypted, b"123")?;
//! assert_eq!(
//!     STANDARD.encode(encrypted),
//!     "Pd0dwZIwEvgxedRZNxBopvDWg1xbLrAwoh7RA/i1MW0="
//! );
//!
//! let mut decrypted = [0u8; 32];
//! cipher.decrypt(&mut decrypted, &encrypted)?;
//! assert_eq!(trim_zero_padding(&decrypted), b"123");
//! # Ok::<(), rijndael_core::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
pub mod gf;
mod key;
mod round;
mod sbox;
mod schedule;

pub use crate::block::{trim_zero_padding, xor_in_place, zero_extend, Block, BLOCK_SIZE};
pub use crate::cipher::Rijndael256;
pub use crate::error::{Error, Result};
pub use crate::key::{KeySize, ROUNDS};
pub use crate::sbox::{inv_sub_byte, sub_byte, INV_SBOX, SBOX};
