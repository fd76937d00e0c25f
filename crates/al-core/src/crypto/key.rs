//! Key derivation using PBKDF2-HMAC-SHA256.

use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

/// PBKDF2 iteration count baked into the blob format.
pub const PBKDF2_ITERATIONS: u32 = 4096;

/// Length of the per-blob salt in bytes.
pub const SALT_LENGTH: usize = 32;

/// Length of derived key in bytes (32 bytes = 256 bits for AES-256).
pub const KEY_LENGTH: usize = 32;

/// A cryptographic key derived from a password.
///
/// Key material is zeroized from memory when dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate encryption operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive an encryption key from a password and salt.
///
/// Same password + salt always produces the same key; the salt is stored in
/// the blob next to the ciphertext. Empty passwords are accepted because
/// blobs written by earlier releases may have used one.
///
/// # Examples
///
/// ```
/// use al_core::crypto::derive_key;
///
/// let key = derive_key("my-password", &[7u8; 32]);
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
pub fn derive_key(password: &str, salt: &[u8]) -> DerivedKey {
    let mut key = [0u8; KEY_LENGTH];
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key);
    DerivedKey { key }
}
