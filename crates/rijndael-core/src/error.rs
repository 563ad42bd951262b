//! Error type shared by the cipher facade.

use thiserror::Error;

/// Errors raised while building the cipher or validating caller buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Key length is not 16, 24 or 32 bytes.
    #[error("invalid key size: {0} bytes (expected 16, 24 or 32)")]
    InvalidKeySize(usize),

    /// A caller-supplied buffer does not fit the 32-byte block contract.
    #[error("invalid length for {context}: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Which buffer was rejected.
        context: &'static str,
        /// Required length (upper bound for plaintext input).
        expected: usize,
        /// Length the caller supplied.
        actual: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
