//! On-disk state for Al.
//!
//! Two layers, both plain pretty-printed JSON:
//!
//! - **Global**: `~/.al_global/projects` (name -> project) and
//!   `~/.al_global/config`, owned by [`GlobalStore`].
//! - **Per project**: `<project>/.al_local/notes/*.json` and
//!   `<project>/.al_local/links/*.json`, owned by [`NoteStore`] and
//!   [`LinkStore`] obtained from a [`ProjectDir`].
//!
//! Nothing is cached between invocations: stores load on demand and every
//! mutation is saved explicitly through an atomic write.

pub mod config;
pub mod links;
pub mod notes;
pub mod project;
pub mod registry;

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AlError, Result};
use crate::fs::write_atomic;

pub use config::Config;
pub use links::{Link, LinkStore};
pub use notes::{Note, NoteStore};
pub use project::ProjectDir;
pub use registry::{GlobalStore, Project};

/// Permission bits for note and link files.
pub(crate) const PRIVATE_FILE_MODE: u32 = 0o600;

/// Permission bits for the global registry and config.
pub(crate) const SHARED_FILE_MODE: u32 = 0o644;

const JSON_EXTENSION: &str = "json";

/// Strip the optional leading `#` users put in front of names.
///
/// # Examples
///
/// ```
/// use al_core::store::strip_hash;
///
/// assert_eq!(strip_hash("#wiki"), "wiki");
/// assert_eq!(strip_hash("wiki"), "wiki");
/// ```
pub fn strip_hash(identifier: &str) -> &str {
    identifier.strip_prefix('#').unwrap_or(identifier)
}

/// Validate a note or link name, which doubles as its file name.
pub fn validate_name(kind: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AlError::InvalidInput(format!("{} name cannot be empty", kind)));
    }
    if name.contains('/') || name.contains('\\') || name.starts_with('.') {
        return Err(AlError::InvalidInput(format!(
            "{} name '{}' must not contain path separators or start with '.'",
            kind, name
        )));
    }
    Ok(())
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read(path)
        .map_err(|e| AlError::Storage(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_json::from_slice(&contents)
        .map_err(|e| AlError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Load every `*.json` file in `dir`. A missing directory reads as empty;
/// files that fail to parse are skipped with a warning.
pub(crate) fn read_json_dir<T: DeserializeOwned>(dir: &Path, kind: &str) -> Result<Vec<T>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(AlError::Storage(format!(
                "Failed to read {}: {}",
                dir.display(),
                e
            )))
        }
    };

    let mut items = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(JSON_EXTENSION) {
            continue;
        }
        match read_json::<T>(&path) {
            Ok(item) => items.push(item),
            Err(e) => tracing::warn!(kind, path = %path.display(), error = %e, "skipping unreadable file"),
        }
    }
    Ok(items)
}

pub(crate) fn json_file(dir: &Path, name: &str) -> std::path::PathBuf {
    dir.join(format!("{}.{}", name, JSON_EXTENSION))
}

pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T, mode: u32) -> Result<()> {
    let contents = serde_json::to_vec_pretty(value)?;
    write_atomic(path, &contents, Some(mode))
        .map_err(|e| AlError::Storage(format!("Failed to write {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_hash_only_once() {
        assert_eq!(strip_hash("##x"), "#x");
        assert_eq!(strip_hash(""), "");
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Note", "deploy-steps").is_ok());
        assert!(validate_name("Note", "").is_err());
        assert!(validate_name("Note", "   ").is_err());
        assert!(validate_name("Note", "../escape").is_err());
        assert!(validate_name("Link", "a\\b").is_err());
        assert!(validate_name("Link", ".hidden").is_err());
    }
}
