//! Property-based tests for the AES-128 block cipher.

use proptest::prelude::*;
use rijndael_core::round::{inv_mix_column, inv_shift_rows, mix_column, shift_rows};
use rijndael_core::{
    decrypt_block, encrypt_block, expand_key, gf_mul, try_encrypt_block, Aes128, Aes128Key,
    Error,
};

proptest! {
    #[test]
    fn aes128_roundtrip(key in any::<[u8; 16]>(), block in any::<[u8; 16]>()) {
        let key = Aes128Key::from(key);
        let ciphertext = encrypt_block(&block, &key);
        prop_assert_eq!(decrypt_block(&ciphertext, &key), block);
    }

    #[test]
    fn cached_cipher_matches_one_shot(key in any::<[u8; 16]>(), block in any::<[u8; 16]>()) {
        let key = Aes128Key::from(key);
        let cipher = Aes128::new(&key);
        prop_assert_eq!(cipher.encrypt_block(&block), encrypt_block(&block, &key));
    }

    #[test]
    fn key_schedule_is_deterministic(key in any::<[u8; 16]>()) {
        let key = Aes128Key::from(key);
        prop_assert_eq!(expand_key(&key).to_bytes(), expand_key(&key).to_bytes());
    }

    #[test]
    fn first_round_key_is_the_key(key in any::<[u8; 16]>()) {
        let expanded = expand_key(&Aes128Key::from(key));
        prop_assert_eq!(expanded.as_bytes().len(), 176);
        prop_assert_eq!(&expanded.as_bytes()[..16], &key[..]);
    }

    #[test]
    fn mix_column_inverse(column in any::<[u8; 4]>()) {
        let mut col = column;
        mix_column(&mut col);
        inv_mix_column(&mut col);
        prop_assert_eq!(col, column);
    }

    #[test]
    fn shift_rows_inverse(state in any::<[u8; 16]>()) {
        let mut s = state;
        shift_rows(&mut s);
        inv_shift_rows(&mut s);
        prop_assert_eq!(s, state);
    }

    #[test]
    fn gf_mul_distributes_over_xor(a in any::<u8>(), b in any::<u8>(), c in any::<u8>()) {
        prop_assert_eq!(gf_mul(a, b ^ c), gf_mul(a, b) ^ gf_mul(a, c));
    }

    #[test]
    fn wrong_lengths_are_rejected(len in 0usize..64) {
        prop_assume!(len != 16);
        let buf = vec![0u8; len];
        let block_err = try_encrypt_block(&buf, &[0u8; 16]).unwrap_err();
        let is_block_length = matches!(
            block_err,
            Error::InvalidLength { context: "plaintext", expected: 16, got } if got == len
        );
        prop_assert!(is_block_length);
        prop_assert!(try_encrypt_block(&[0u8; 16], &buf).is_err());
    }
}
