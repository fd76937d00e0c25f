//! Decrypting notes with password retry.

use std::fmt;

use zeroize::Zeroizing;

use al_core::crypto::decrypt;
use al_core::store::Note;

use crate::constants::MAX_PASSWORD_ATTEMPTS;
use crate::errors::CliError;
use crate::helpers::PasswordSource;

/// A note body in clear text, plus the password that opened it.
pub struct Unlocked {
    pub content: Zeroizing<String>,
    pub password: Option<Zeroizing<String>>,
}

impl fmt::Debug for Unlocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unlocked")
            .field("content", &"[REDACTED]")
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Return the readable content of `note`, asking for its password if it is
/// encrypted.
///
/// Interactive sources get three attempts; a fixed source (environment
/// variable) gets one.
pub fn unlock_note(passwords: &dyn PasswordSource, note: &Note) -> anyhow::Result<Unlocked> {
    if !note.encrypted {
        return Ok(Unlocked {
            content: Zeroizing::new(note.content.clone()),
            password: None,
        });
    }

    let max_attempts = if passwords.allows_retry() {
        MAX_PASSWORD_ATTEMPTS
    } else {
        1
    };
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        let password = passwords.read(&format!("Password for '{}'", note.name))?;
        match decrypt(&note.content, &password) {
            Ok(content) => {
                return Ok(Unlocked {
                    content: Zeroizing::new(content),
                    password: Some(password),
                })
            }
            Err(err) => {
                tracing::debug!(note = %note.name, attempt = attempts, "decryption failed");
                let remaining = max_attempts.saturating_sub(attempts);
                if remaining == 0 {
                    if max_attempts == 1 {
                        return Err(CliError::auth_failed(format!("Note '{}': {}", note.name, err)).into());
                    }
                    return Err(CliError::auth_failed_with_hint(
                        "Too many failed password attempts.",
                        "Encrypted notes cannot be recovered without their password",
                    )
                    .into());
                }
                eprintln!(
                    "Incorrect password. {} attempt{} remaining.",
                    remaining,
                    if remaining == 1 { "" } else { "s" }
                );
            }
        }
    }
}
