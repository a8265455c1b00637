//! Key types for AES-128.

use crate::block::{transpose, State, BLOCK_SIZE};
use crate::error::{fixed16, Error};

/// Number of rounds for a 128-bit key.
pub const ROUNDS: usize = 10;

/// Length of the expanded key: one 16-byte round key per round plus the
/// initial whitening key.
pub const EXPANDED_KEY_SIZE: usize = BLOCK_SIZE * (ROUNDS + 1);

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        fixed16("key", value).map(Self)
    }
}

/// Expanded AES-128 key: 11 round keys stored back to back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpandedKey(pub(crate) [[u8; BLOCK_SIZE]; ROUNDS + 1]);

impl ExpandedKey {
    /// Returns all 176 bytes of the schedule.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_flattened()
    }

    /// Copies the schedule out as one 176-byte array.
    pub fn to_bytes(&self) -> [u8; EXPANDED_KEY_SIZE] {
        let mut out = [0u8; EXPANDED_KEY_SIZE];
        out.copy_from_slice(self.as_bytes());
        out
    }

    /// Returns the round key at the requested index (0..=10) as stored.
    ///
    /// # Panics
    ///
    /// Panics if `round > 10`.
    #[inline]
    pub fn round_key(&self, round: usize) -> &[u8; BLOCK_SIZE] {
        &self.0[round]
    }

    /// Returns the round key transposed into state layout, ready for
    /// `add_round_key`.
    #[inline]
    pub fn round_key_state(&self, round: usize) -> State {
        transpose(self.round_key(round))
    }

    /// Iterates over the 11 stored round keys in order.
    pub fn round_keys(&self) -> impl Iterator<Item = &[u8; BLOCK_SIZE]> + '_ {
        self.0.iter()
    }
}

impl AsRef<[u8]> for ExpandedKey {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
