//! Error type for the length-checked entry points.

use thiserror::Error;

/// Errors reported before any cipher transformation runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A buffer did not have the length AES-128 requires.
    #[error("invalid length for {context}: expected {expected}, got {got}")]
    InvalidLength {
        /// Which input was rejected.
        context: &'static str,
        /// Required length in bytes.
        expected: usize,
        /// Length actually supplied.
        got: usize,
    },
}

/// Result alias for this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Copies `bytes` into a 16-byte array, rejecting any other length.
pub(crate) fn fixed16(context: &'static str, bytes: &[u8]) -> Result<[u8; 16]> {
    bytes.try_into().map_err(|_| Error::InvalidLength {
        context,
        expected: 16,
        got: bytes.len(),
    })
}
