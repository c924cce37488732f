//! AES-256-CBC encryption of the serialised collection record.
//!
//! **Inherited weaknesses.** The partner gateway expects a fixed all-zero IV and
//! zero-byte padding, so this module must produce exactly that:
//!
//! - The zero IV makes encryption deterministic. Identical records produce
//!   identical ciphertext, which leaks equality across requests.
//! - Zero-byte padding is unauthenticated and cannot be reversed unambiguously
//!   when the plaintext itself ends in `0x00`.
//!
//! Do not reuse this scheme for anything that does not need to interoperate with
//! that endpoint. A new deployment should use a random IV with PKCS#7 padding,
//! or an AEAD.

use aes::Aes256;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use cbc::cipher::{block_padding::NoPadding, BlockEncryptMut, KeyIvInit};
use common::SubmitError;
use thiserror::Error;

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// AES block size in bytes.
pub const BLOCK_LEN: usize = 16;

/// Fixed initialisation vector expected by the gateway.
const ZERO_IV: [u8; BLOCK_LEN] = [0u8; BLOCK_LEN];

type Aes256CbcEnc = cbc::Encryptor<Aes256>;

/// Errors produced by the cipher layer.
#[derive(Debug, Error)]
pub enum CipherError {
    /// The key is the wrong length (must be [`KEY_LEN`] bytes).
    #[error("invalid key length: expected {KEY_LEN} bytes, got {0}")]
    InvalidKeyLength(usize),

    /// The block cipher rejected its inputs.
    #[error("cipher construction failed: {0}")]
    Construction(&'static str),
}

impl From<CipherError> for SubmitError {
    fn from(e: CipherError) -> Self {
        match e {
            CipherError::InvalidKeyLength(actual) => SubmitError::InvalidKeyLength {
                expected: KEY_LEN,
                actual,
            },
            CipherError::Construction(reason) => SubmitError::CipherConstruction(reason.into()),
        }
    }
}

/// Encrypt `plaintext` with AES-256-CBC under `key` and return standard base64.
///
/// The plaintext is always zero-padded: a block-aligned input gains one full
/// block of zeros, an empty input becomes a single zero block.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKeyLength`] if `key` is not [`KEY_LEN`] bytes.
/// Returns [`CipherError::Construction`] if the cipher cannot be initialised or
/// the padded buffer is rejected (unreachable with a valid key).
pub fn encrypt_payload(plaintext: &[u8], key: &[u8]) -> Result<String, CipherError> {
    let encryptor = build_encryptor(key)?;

    let mut buffer = zero_pad(plaintext);
    let len = buffer.len();
    let ciphertext = encryptor
        .encrypt_padded_mut::<NoPadding>(&mut buffer, len)
        .map_err(|_| CipherError::Construction("padded buffer is not block aligned"))?;

    Ok(STANDARD.encode(ciphertext))
}

/// Append `16 - (len % 16)` zero bytes.
fn zero_pad(plaintext: &[u8]) -> Vec<u8> {
    let pad = BLOCK_LEN - (plaintext.len() % BLOCK_LEN);
    let mut buffer = Vec::with_capacity(plaintext.len() + pad);
    buffer.extend_from_slice(plaintext);
    buffer.resize(plaintext.len() + pad, 0);
    buffer
}

fn build_encryptor(key: &[u8]) -> Result<Aes256CbcEnc, CipherError> {
    if key.len() != KEY_LEN {
        return Err(CipherError::InvalidKeyLength(key.len()));
    }
    Aes256CbcEnc::new_from_slices(key, &ZERO_IV)
        .map_err(|_| CipherError::Construction("aes-256-cbc rejected key or iv"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use cbc::cipher::BlockDecryptMut;

    const KEY: &[u8; KEY_LEN] = b"0123456789abcdef0123456789abcdef";

    fn decrypt(encoded: &str, key: &[u8]) -> Vec<u8> {
        let mut buffer = STANDARD.decode(encoded).unwrap();
        let decryptor = cbc::Decryptor::<Aes256>::new_from_slices(key, &ZERO_IV).unwrap();
        decryptor
            .decrypt_padded_mut::<NoPadding>(&mut buffer)
            .unwrap()
            .to_vec()
    }

    #[test]
    fn deterministic_for_same_input() {
        let plaintext = br#"{"ProspectNo":"PR123","TotalAmount":1500.5}"#;
        let a = encrypt_payload(plaintext, KEY).unwrap();
        let b = encrypt_payload(plaintext, KEY).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_keys_give_different_ciphertext() {
        let other = [0x42u8; KEY_LEN];
        let a = encrypt_payload(b"same plaintext", KEY).unwrap();
        let b = encrypt_payload(b"same plaintext", &other).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn block_aligned_input_gains_full_zero_block() {
        let plaintext = [b'a'; 32];
        let encoded = encrypt_payload(&plaintext, KEY).unwrap();
        let decrypted = decrypt(&encoded, KEY);
        assert_eq!(decrypted.len(), 48);
        assert_eq!(&decrypted[..32], &plaintext[..]);
        assert!(decrypted[32..].iter().all(|&b| b == 0));
    }

    #[test]
    fn partial_block_is_zero_filled() {
        let plaintext = b"hello, gateway";
        let encoded = encrypt_payload(plaintext, KEY).unwrap();
        let decrypted = decrypt(&encoded, KEY);
        assert_eq!(decrypted.len(), BLOCK_LEN);
        assert_eq!(&decrypted[..plaintext.len()], plaintext);
        assert_eq!(&decrypted[plaintext.len()..], &[0u8, 0]);
    }

    #[test]
    fn empty_input_is_one_block() {
        let encoded = encrypt_payload(b"", KEY).unwrap();
        assert_eq!(STANDARD.decode(&encoded).unwrap().len(), BLOCK_LEN);
        assert_eq!(decrypt(&encoded, KEY), vec![0u8; BLOCK_LEN]);
    }

    #[test]
    fn first_block_matches_ecb_vector_under_zero_iv() {
        // NIST SP 800-38A F.1.5 (ECB-AES256, block 1). With a zero IV the first
        // CBC block is the plain ECB encryption of the first plaintext block.
        let key: [u8; KEY_LEN] = [
            0x60, 0x3d, 0xeb, 0x10, 0x15, 0xca, 0x71, 0xbe, 0x2b, 0x73, 0xae, 0xf0, 0x85, 0x7d,
            0x77, 0x81, 0x1f, 0x35, 0x2c, 0x07, 0x3b, 0x61, 0x08, 0xd7, 0x2d, 0x98, 0x10, 0xa3,
            0x09, 0x14, 0xdf, 0xf4,
        ];
        let plaintext: [u8; BLOCK_LEN] = [
            0x6b, 0xc1, 0xbe, 0xe2, 0x2e, 0x40, 0x9f, 0x96, 0xe9, 0x3d, 0x7e, 0x11, 0x73, 0x93,
            0x17, 0x2a,
        ];
        let expected: [u8; BLOCK_LEN] = [
            0xf3, 0xee, 0xd1, 0xbd, 0xb5, 0xd2, 0xa0, 0x3c, 0x06, 0x4b, 0x5a, 0x7e, 0x3d, 0xb1,
            0x81, 0xf8,
        ];
        let encoded = encrypt_payload(&plaintext, &key).unwrap();
        let raw = STANDARD.decode(encoded).unwrap();
        assert_eq!(raw.len(), 2 * BLOCK_LEN);
        assert_eq!(&raw[..BLOCK_LEN], &expected);
    }

    #[test]
    fn invalid_key_length_rejected() {
        let short_key = [0u8; 16];
        let err = encrypt_payload(b"x", &short_key).unwrap_err();
        assert!(matches!(err, CipherError::InvalidKeyLength(16)));
    }

    #[test]
    fn overlong_key_rejected() {
        let long_key = [0u8; KEY_LEN + 1];
        let err = encrypt_payload(b"x", &long_key).unwrap_err();
        assert!(matches!(err, CipherError::InvalidKeyLength(33)));
    }

    #[test]
    fn cipher_error_maps_to_submit_error() {
        let e: SubmitError = CipherError::InvalidKeyLength(16).into();
        assert!(matches!(
            e,
            SubmitError::InvalidKeyLength {
                expected: KEY_LEN,
                actual: 16
            }
        ));
        let e: SubmitError = CipherError::Construction("boom").into();
        assert_eq!(e.code(), "cipher_construction");
    }
}
