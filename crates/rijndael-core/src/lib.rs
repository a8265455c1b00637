//! Single-block AES-128 (Rijndael with a 128-bit key and 10 rounds).
//!
//! This crate follows FIPS-197 restricted to Nk = 4, Nr = 10 and provides:
//! - The AES-128 key schedule.
//! - Single-block encryption and decryption, by key or with a cached schedule.
//! - The individual round transformations and GF(2^8) multiplication.
//!
//! Blocks are addressed as `block[row * 4 + col]`. Inputs of the wrong length
//! are rejected by the `try_*` entry points before any work is done.
//!
//! The implementation uses table lookups and is not constant-time; it should
//! not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf;
mod key;
pub mod round;
mod sbox;

pub use crate::block::{from_state, to_state, transpose, Block, State, BLOCK_SIZE};
pub use crate::cipher::{
    decrypt_block, encrypt_block, encrypt_block_traced, expand_key, key_schedule_core,
    try_decrypt_block, try_encrypt_block, Aes128, RoundTrace,
};
pub use crate::error::{Error, Result};
pub use crate::gf::{gf_mul, xtime};
pub use crate::key::{Aes128Key, ExpandedKey, EXPANDED_KEY_SIZE, ROUNDS};
pub use crate::sbox::{inv_sbox, rcon, sbox, INV_SBOX, RCON, SBOX};
