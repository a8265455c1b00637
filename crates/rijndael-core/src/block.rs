//! Block representation helpers.
//!
//! Callers address a block as a 4x4 matrix with `block[row * 4 + col]`. The
//! round transformations work on the transpose of that matrix, so the bytes
//! of one caller row land in one column of the cipher state and each ShiftRows
//! row is four contiguous bytes (`state[4 * r..4 * r + 4]`).

/// Block and key size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes, in caller layout.
pub type Block = [u8; BLOCK_SIZE];

/// Cipher state of 16 bytes, in the layout the round transformations expect.
pub type State = [u8; BLOCK_SIZE];

/// Transposes a 4x4 byte matrix.
///
/// Byte `(i * 4) + j` of the input lands at `i + (j * 4)` of the output. The
/// operation is its own inverse, so it converts in both directions.
#[inline]
pub fn transpose(block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let mut out = [0u8; BLOCK_SIZE];
    for i in 0..4 {
        for j in 0..4 {
            out[i + (j * 4)] = block[(i * 4) + j];
        }
    }
    out
}

/// Converts a caller block into the cipher state.
#[inline]
pub fn to_state(block: &Block) -> State {
    transpose(block)
}

/// Converts the cipher state back into caller layout.
#[inline]
pub fn from_state(state: &State) -> Block {
    transpose(state)
}

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut [u8; BLOCK_SIZE], rhs: &[u8; BLOCK_SIZE]) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
