//! AES-256-GCM sealing of note content into self-describing base64 blobs.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;
use zeroize::Zeroizing;

use super::key::{derive_key, SALT_LENGTH};

/// Prefix sealed in front of every note to confirm a successful decryption.
pub const ENCRYPTION_MARKER: &str = "AL_ENCRYPTED_NOTE";

/// Nonce size for AES-GCM (96 bits).
const NONCE_LENGTH: usize = 12;

/// Errors surfaced by [`encrypt`] and [`decrypt`].
///
/// Decryption failures are deliberately collapsed into one variant so a wrong
/// password and a damaged blob look the same to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Wrong password, malformed blob, or tampered data
    #[error("incorrect password or corrupted data")]
    DecryptionFailed,

    /// Random number generation or sealing failed
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),
}

/// Why a blob was rejected. Only used for diagnostics; callers always see
/// [`CipherError::DecryptionFailed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    MalformedCiphertext,
    AuthenticationFailed,
    MarkerMismatch,
}

impl Rejection {
    fn as_str(self) -> &'static str {
        match self {
            Rejection::MalformedCiphertext => "malformed ciphertext",
            Rejection::AuthenticationFailed => "authentication failed",
            Rejection::MarkerMismatch => "marker mismatch",
        }
    }
}

impl From<Rejection> for CipherError {
    fn from(rejection: Rejection) -> Self {
        tracing::debug!(reason = rejection.as_str(), "note blob rejected");
        CipherError::DecryptionFailed
    }
}

/// Encrypt `plaintext` under `password`.
///
/// Every call draws a fresh salt and nonce, so encrypting the same note twice
/// yields different blobs.
///
/// # Examples
///
/// ```
/// use al_core::crypto::{decrypt, encrypt};
///
/// let blob = encrypt("server root: hunter2", "correct horse").unwrap();
/// assert_eq!(decrypt(&blob, "correct horse").unwrap(), "server root: hunter2");
/// assert!(decrypt(&blob, "wrong").is_err());
/// ```
pub fn encrypt(plaintext: &str, password: &str) -> Result<String, CipherError> {
    let mut data = Zeroizing::new(Vec::with_capacity(
        ENCRYPTION_MARKER.len() + 1 + plaintext.len(),
    ));
    data.extend_from_slice(ENCRYPTION_MARKER.as_bytes());
    data.push(b'\n');
    data.extend_from_slice(plaintext.as_bytes());

    seal(&data, password)
}

/// Decrypt a blob produced by [`encrypt`].
///
/// # Errors
///
/// Returns [`CipherError::DecryptionFailed`] if the blob is not valid base64,
/// is too short to hold a salt and nonce, fails authentication, or does not
/// start with the marker.
pub fn decrypt(blob: &str, password: &str) -> Result<String, CipherError> {
    let opened = open(blob, password)?;

    let prefix_len = ENCRYPTION_MARKER.len() + 1;
    let has_marker = opened.len() >= prefix_len
        && opened.starts_with(ENCRYPTION_MARKER.as_bytes())
        && opened[ENCRYPTION_MARKER.len()] == b'\n';
    if !has_marker {
        return Err(Rejection::MarkerMismatch.into());
    }

    String::from_utf8(opened[prefix_len..].to_vec())
        .map_err(|_| Rejection::MalformedCiphertext.into())
}

fn seal(data: &[u8], password: &str) -> Result<String, CipherError> {
    let mut salt = [0u8; SALT_LENGTH];
    getrandom::getrandom(&mut salt)
        .map_err(|e| CipherError::EncryptionFailed(format!("salt generation: {}", e)))?;
    let mut nonce = [0u8; NONCE_LENGTH];
    getrandom::getrandom(&mut nonce)
        .map_err(|e| CipherError::EncryptionFailed(format!("nonce generation: {}", e)))?;

    let key = derive_key(password, &salt);
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), data)
        .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

    let mut combined = Vec::with_capacity(SALT_LENGTH + NONCE_LENGTH + ciphertext.len());
    combined.extend_from_slice(&salt);
    combined.extend_from_slice(&nonce);
    combined.extend_from_slice(&ciphertext);

    Ok(STANDARD.encode(combined))
}

fn open(blob: &str, password: &str) -> Result<Zeroizing<Vec<u8>>, Rejection> {
    let data = STANDARD
        .decode(blob.trim())
        .map_err(|_| Rejection::MalformedCiphertext)?;

    if data.len() < SALT_LENGTH {
        return Err(Rejection::MalformedCiphertext);
    }
    let (salt, rest) = data.split_at(SALT_LENGTH);

    let key = derive_key(password, salt);

    if rest.len() < NONCE_LENGTH {
        return Err(Rejection::MalformedCiphertext);
    }
    let (nonce, ciphertext) = rest.split_at(NONCE_LENGTH);

    let cipher =
        Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| Rejection::MalformedCiphertext)?;
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map(Zeroizing::new)
        .map_err(|_| Rejection::AuthenticationFailed)
}
