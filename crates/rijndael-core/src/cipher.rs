//! AES-128 key schedule and block encryption/decryption.

use crate::block::{from_state, to_state, Block, State, BLOCK_SIZE};
use crate::error::{fixed16, Result};
use crate::key::{Aes128Key, ExpandedKey, EXPANDED_KEY_SIZE, ROUNDS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::{rcon, sbox};

/// Transforms the word that opens each new round key: rotate left by one
/// byte, substitute every byte, then XOR the round constant into byte 0.
pub fn key_schedule_core(word: &mut [u8; 4], iteration: usize) {
    word.rotate_left(1);
    for byte in word.iter_mut() {
        *byte = sbox(*byte);
    }
    word[0] ^= rcon(iteration);
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> ExpandedKey {
    let mut bytes = [0u8; EXPANDED_KEY_SIZE];
    bytes[..BLOCK_SIZE].copy_from_slice(&key.0);

    let mut rcon_iteration = 1;
    let mut produced = BLOCK_SIZE;
    while produced < EXPANDED_KEY_SIZE {
        let mut temp = [0u8; 4];
        temp.copy_from_slice(&bytes[produced - 4..produced]);
        if produced % BLOCK_SIZE == 0 {
            key_schedule_core(&mut temp, rcon_iteration);
            rcon_iteration += 1;
        }
        for t in temp {
            bytes[produced] = bytes[produced - BLOCK_SIZE] ^ t;
            produced += 1;
        }
    }

    let mut round_keys = [[0u8; BLOCK_SIZE]; ROUNDS + 1];
    for (round_key, chunk) in round_keys.iter_mut().zip(bytes.chunks_exact(BLOCK_SIZE)) {
        round_key.copy_from_slice(chunk);
    }
    ExpandedKey(round_keys)
}

/// State and round key observed at the start of one encryption round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundTrace {
    /// Round number, 1 through 10.
    pub round: usize,
    /// State entering the round, in caller layout.
    pub start: Block,
    /// Round key added at the end of the round, as stored in the schedule.
    pub round_key: Block,
}

/// AES-128 with its key schedule computed once.
#[derive(Clone, Debug)]
pub struct Aes128 {
    round_keys: [State; ROUNDS + 1],
    expanded: ExpandedKey,
}

impl Aes128 {
    /// Expands `key` and prepares the round keys in state layout.
    pub fn new(key: &Aes128Key) -> Self {
        let expanded = expand_key(key);
        let round_keys = core::array::from_fn(|round| expanded.round_key_state(round));
        Self {
            round_keys,
            expanded,
        }
    }

    /// The schedule this cipher was built from.
    pub fn expanded_key(&self) -> &ExpandedKey {
        &self.expanded
    }

    /// Encrypts a single 16-byte block.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        self.encrypt_observed(block, |_, _| {})
    }

    /// Decrypts a single 16-byte block.
    pub fn decrypt_block(&self, block: &Block) -> Block {
        let mut state = to_state(block);

        add_round_key(&mut state, &self.round_keys[ROUNDS]);
        for round in (1..ROUNDS).rev() {
            inv_shift_rows(&mut state);
            inv_sub_bytes(&mut state);
            add_round_key(&mut state, &self.round_keys[round]);
            inv_mix_columns(&mut state);
        }
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, &self.round_keys[0]);

        from_state(&state)
    }

    /// Encrypts a block and records the state entering each round.
    pub fn encrypt_block_traced(&self, block: &Block) -> (Block, Vec<RoundTrace>) {
        let mut trace = Vec::with_capacity(ROUNDS);
        let output = self.encrypt_observed(block, |round, state| {
            trace.push(RoundTrace {
                round,
                start: from_state(state),
                round_key: *self.expanded.round_key(round),
            });
        });
        (output, trace)
    }

    fn encrypt_observed(&self, block: &Block, mut observe: impl FnMut(usize, &State)) -> Block {
        let mut state = to_state(block);

        add_round_key(&mut state, &self.round_keys[0]);

        for round in 1..ROUNDS {
            observe(round, &state);
            sub_bytes(&mut state);
            shift_rows(&mut state);
            mix_columns(&mut state);
            add_round_key(&mut state, &self.round_keys[round]);
        }

        observe(ROUNDS, &state);
        sub_bytes(&mut state);
        shift_rows(&mut state);
        add_round_key(&mut state, &self.round_keys[ROUNDS]);

        from_state(&state)
    }
}

/// Encrypts a single 16-byte block under `key`.
pub fn encrypt_block(plaintext: &Block, key: &Aes128Key) -> Block {
    Aes128::new(key).encrypt_block(plaintext)
}

/// Decrypts a single 16-byte block under `key`.
pub fn decrypt_block(ciphertext: &Block, key: &Aes128Key) -> Block {
    Aes128::new(key).decrypt_block(ciphertext)
}

/// Encrypts a block and returns the per-round trace alongside the output.
pub fn encrypt_block_traced(plaintext: &Block, key: &Aes128Key) -> (Block, Vec<RoundTrace>) {
    Aes128::new(key).encrypt_block_traced(plaintext)
}

/// Length-checked [`encrypt_block`] for callers holding byte slices.
pub fn try_encrypt_block(plaintext: &[u8], key: &[u8]) -> Result<Block> {
    let block = fixed16("plaintext", plaintext)?;
    let key = Aes128Key::try_from(key)?;
    Ok(encrypt_block(&block, &key))
}

/// Length-checked [`decrypt_block`] for callers holding byte slices.
pub fn try_decrypt_block(ciphertext: &[u8], key: &[u8]) -> Result<Block> {
    let block = fixed16("ciphertext", ciphertext)?;
    let key = Aes128Key::try_from(key)?;
    Ok(decrypt_block(&block, &key))
}
