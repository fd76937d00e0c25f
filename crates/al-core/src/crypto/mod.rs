//! Password-based encryption for notes.
//!
//! ## Blob format
//!
//! ```text
//! base64( salt (32) | nonce (12) | AES-256-GCM ciphertext + tag (16) )
//! ```
//!
//! - Key: PBKDF2-HMAC-SHA256, 4096 iterations, 32 bytes, per-blob random salt
//! - Plaintext is prefixed with `AL_ENCRYPTED_NOTE\n` before sealing
//! - No associated data
//!
//! The layout is fixed so that notes written by earlier releases remain
//! readable. The marker prefix only exists for that compatibility; the GCM
//! tag is what authenticates the data.
//!
//! ## Threat Model
//!
//! We defend against:
//! - Reading encrypted notes from a copied `.al_local` folder without the password
//! - Tampering with stored blobs (detected, never silently accepted)
//!
//! We do NOT defend against:
//! - Compromised OS / keylogger
//! - Offline guessing of weak passwords (the KDF cost is fixed by the format)

pub mod cipher;
pub mod key;

pub use cipher::{decrypt, encrypt, CipherError, ENCRYPTION_MARKER};
pub use key::{derive_key, DerivedKey, KEY_LENGTH, PBKDF2_ITERATIONS, SALT_LENGTH};
