//! AES round transformations.
//!
//! Every function mutates a [`State`] in place. Row `r` of the state is
//! `state[4 * r..4 * r + 4]`; column `c` is `state[c]`, `state[c + 4]`,
//! `state[c + 8]`, `state[c + 12]`.

use crate::block::{xor_in_place, State};
use crate::gf::gf_mul;
use crate::sbox::{inv_sbox, sbox};

/// MixColumns coefficients.
const MIX: [[u8; 4]; 4] = [[2, 3, 1, 1], [1, 2, 3, 1], [1, 1, 2, 3], [3, 1, 1, 2]];

/// InvMixColumns coefficients.
const INV_MIX: [[u8; 4]; 4] = [
    [14, 11, 13, 9],
    [9, 14, 11, 13],
    [13, 9, 14, 11],
    [11, 13, 9, 14],
];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

fn row_mut(state: &mut State, row: usize) -> &mut [u8] {
    &mut state[row * 4..row * 4 + 4]
}

/// Performs ShiftRows in place: row `r` rotates left by `r`.
#[inline]
pub fn shift_rows(state: &mut State) {
    for row in 1..4 {
        row_mut(state, row).rotate_left(row);
    }
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r`.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    for row in 1..4 {
        row_mut(state, row).rotate_right(row);
    }
}

fn multiply_column(matrix: &[[u8; 4]; 4], col: &mut [u8; 4]) {
    let input = *col;
    for (out, coefficients) in col.iter_mut().zip(matrix.iter()) {
        *out = coefficients
            .iter()
            .zip(input.iter())
            .fold(0, |acc, (&k, &a)| acc ^ gf_mul(a, k));
    }
}

/// Multiplies one column by the MixColumns matrix.
#[inline]
pub fn mix_column(col: &mut [u8; 4]) {
    multiply_column(&MIX, col);
}

/// Multiplies one column by the InvMixColumns matrix.
#[inline]
pub fn inv_mix_column(col: &mut [u8; 4]) {
    multiply_column(&INV_MIX, col);
}

fn for_each_column(state: &mut State, f: impl Fn(&mut [u8; 4])) {
    for col in 0..4 {
        let mut column = [state[col], state[col + 4], state[col + 8], state[col + 12]];
        f(&mut column);
        state[col] = column[0];
        state[col + 4] = column[1];
        state[col + 8] = column[2];
        state[col + 12] = column[3];
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    for_each_column(state, mix_column);
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    for_each_column(state, inv_mix_column);
}

/// Adds (XORs) a round key into the state. Applying it twice is a no-op.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &State) {
    xor_in_place(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn shift_rows_layout() {
        let identity: State = core::array::from_fn(|i| i as u8);
        let mut state = identity;
        shift_rows(&mut state);
        assert_eq!(
            state,
            [0, 1, 2, 3, 5, 6, 7, 4, 10, 11, 8, 9, 15, 12, 13, 14]
        );
        inv_shift_rows(&mut state);
        assert_eq!(state, identity);
    }

    #[test]
    fn mix_column_known_vectors() {
        let cases = [
            ([0xdb, 0x13, 0x53, 0x45], [0x8e, 0x4d, 0xa1, 0xbc]),
            ([0xf2, 0x0a, 0x22, 0x5c], [0x9f, 0xdc, 0x58, 0x9d]),
            ([0x01, 0x01, 0x01, 0x01], [0x01, 0x01, 0x01, 0x01]),
            ([0xc6, 0xc6, 0xc6, 0xc6], [0xc6, 0xc6, 0xc6, 0xc6]),
            ([0xd4, 0xd4, 0xd4, 0xd5], [0xd5, 0xd5, 0xd7, 0xd6]),
            ([0x2d, 0x26, 0x31, 0x4c], [0x4d, 0x7e, 0xbd, 0xf8]),
        ];
        for (input, expected) in cases {
            let mut col = input;
            mix_column(&mut col);
            assert_eq!(col, expected);
            inv_mix_column(&mut col);
            assert_eq!(col, input);
        }
    }

    #[test]
    fn mix_columns_reads_strided_columns() {
        let mut state = [0u8; 16];
        state[0] = 0xdb;
        state[4] = 0x13;
        state[8] = 0x53;
        state[12] = 0x45;
        mix_columns(&mut state);
        let mut expected = [0u8; 16];
        expected[0] = 0x8e;
        expected[4] = 0x4d;
        expected[8] = 0xa1;
        expected[12] = 0xbc;
        assert_eq!(state, expected);
    }

    #[test]
    fn inverses_round_trip_random_states() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for _ in 0..100 {
            let mut state = [0u8; 16];
            rng.fill_bytes(&mut state);
            let original = state;

            sub_bytes(&mut state);
            inv_sub_bytes(&mut state);
            assert_eq!(state, original);

            shift_rows(&mut state);
            inv_shift_rows(&mut state);
            assert_eq!(state, original);

            mix_columns(&mut state);
            inv_mix_columns(&mut state);
            assert_eq!(state, original);

            let mut key = [0u8; 16];
            rng.fill_bytes(&mut key);
            add_round_key(&mut state, &key);
            add_round_key(&mut state, &key);
            assert_eq!(state, original);
        }
    }
}
