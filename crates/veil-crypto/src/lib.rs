//! # Password Envelope
//! PBKDF2-HMAC-SHA256 key derivation feeding Fernet tokens
//! (AES-128-CBC + HMAC-SHA256), compatible with tokens written by other
//! Fernet implementations.
//!
//! Token layout before base64 (URL-safe alphabet, padded):
//!
//! ```text
//! [1 byte ] version 0x80
//! [8 bytes] timestamp, seconds since epoch (big-endian)
//! [16 bytes] IV
//! [N bytes] AES-128-CBC ciphertext, PKCS#7 padded
//! [32 bytes] HMAC-SHA256 over everything above
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use aes::Aes128;
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use byteorder::{BigEndian, ByteOrder};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use zeroize::Zeroizing;

pub mod error;

pub use crate::error::EnvelopeError;

pub const SALT_LEN: usize = 16;
pub const KEY_LEN: usize = 32;
pub const PBKDF2_ROUNDS: u32 = 100_000;

const VERSION: u8 = 0x80;
const TIMESTAMP_LEN: usize = 8;
const IV_LEN: usize = 16;
const BLOCK_LEN: usize = 16;
const TAG_LEN: usize = 32;
const HEADER_LEN: usize = 1 + TIMESTAMP_LEN + IV_LEN;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;
type HmacSha256 = Hmac<Sha256>;

pub type Result<T> = std::result::Result<T, EnvelopeError>;
pub type Key = Zeroizing<[u8; KEY_LEN]>;

/// fresh salt from the OS random source, never reuse it for a second encryption
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    salt
}

/// PBKDF2-HMAC-SHA256 with 100 000 rounds, 32 bytes of output
pub fn derive_key(password: &str, salt: &[u8]) -> Key {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ROUNDS, &mut *key);
    key
}

/// encrypt `plaintext` into a Fernet token, a random IV makes every call unique
pub fn encrypt(key: &Key, plaintext: &[u8]) -> Result<Vec<u8>> {
    let mut iv = Zeroizing::new([0u8; IV_LEN]);
    OsRng.fill_bytes(&mut *iv);
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();

    seal(key, plaintext, &iv, now)
}

/// decrypt a Fernet token, any failure is reported as [`EnvelopeError::AuthenticationFailure`]
pub fn decrypt(key: &Key, token: &[u8]) -> Result<Vec<u8>> {
    let raw = URL_SAFE
        .decode(token)
        .map_err(|_| EnvelopeError::AuthenticationFailure)?;
    if raw.len() < HEADER_LEN + BLOCK_LEN + TAG_LEN || raw[0] != VERSION {
        return Err(EnvelopeError::AuthenticationFailure);
    }

    let (signed, tag) = raw.split_at(raw.len() - TAG_LEN);
    let (signing_key, encryption_key) = key.split_at(KEY_LEN / 2);
    let mut mac =
        HmacSha256::new_from_slice(signing_key).map_err(|_| EnvelopeError::InvalidKeyLength)?;
    mac.update(signed);
    mac.verify_slice(tag)
        .map_err(|_| EnvelopeError::AuthenticationFailure)?;

    let iv = &signed[1 + TIMESTAMP_LEN..HEADER_LEN];
    let ciphertext = &signed[HEADER_LEN..];
    Aes128CbcDec::new_from_slices(encryption_key, iv)
        .map_err(|_| EnvelopeError::InvalidKeyLength)?
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| EnvelopeError::AuthenticationFailure)
}

/// length in bytes of the token [`encrypt`] produces for `plaintext_len` bytes
pub fn sealed_len(plaintext_len: usize) -> usize {
    let padded = (plaintext_len / BLOCK_LEN + 1) * BLOCK_LEN;
    let raw = HEADER_LEN + padded + TAG_LEN;

    raw.div_ceil(3) * 4
}

fn seal(key: &Key, plaintext: &[u8], iv: &[u8; IV_LEN], timestamp: u64) -> Result<Vec<u8>> {
    let (signing_key, encryption_key) = key.split_at(KEY_LEN / 2);
    let ciphertext = Aes128CbcEnc::new_from_slices(encryption_key, iv)
        .map_err(|_| EnvelopeError::InvalidKeyLength)?
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut raw = vec![0u8; HEADER_LEN];
    raw[0] = VERSION;
    BigEndian::write_u64(&mut raw[1..1 + TIMESTAMP_LEN], timestamp);
    raw[1 + TIMESTAMP_LEN..].copy_from_slice(iv);
    raw.extend_from_slice(&ciphertext);

    let mut mac =
        HmacSha256::new_from_slice(signing_key).map_err(|_| EnvelopeError::InvalidKeyLength)?;
    mac.update(&raw);
    raw.extend_from_slice(&mac.finalize().into_bytes());

    Ok(URL_SAFE.encode(raw).into_bytes())
}
