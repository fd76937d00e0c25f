//! Notes stored as one JSON file per note under `.al_local/notes`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{json_file, read_json, read_json_dir, validate_name, write_json, PRIVATE_FILE_MODE};
use crate::error::{AlError, Result};

/// A project note. When `encrypted` is set, `content` holds a cipher blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub name: String,
    pub content: String,
    #[serde(default)]
    pub encrypted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(name: impl Into<String>, content: impl Into<String>, encrypted: bool) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            content: content.into(),
            encrypted,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the body and bump `updated_at`.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.updated_at = Utc::now();
    }

    /// Single-line preview of at most `max_chars` characters.
    ///
    /// Encrypted notes never expose their blob and render as `(encrypted)`.
    pub fn preview(&self, max_chars: usize) -> String {
        if self.encrypted {
            return "(encrypted)".to_string();
        }
        let flattened = self.content.replace(['\r', '\n'], " ");
        if flattened.chars().count() <= max_chars {
            return flattened;
        }
        let mut truncated: String = flattened.chars().take(max_chars).collect();
        truncated.push_str("...");
        truncated
    }
}

/// Read/write access to one project's notes directory.
#[derive(Debug, Clone)]
pub struct NoteStore {
    dir: PathBuf,
}

impl NoteStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> PathBuf {
        json_file(&self.dir, name)
    }

    /// All readable notes, sorted by name. Files that fail to parse are
    /// skipped with a warning.
    pub fn list(&self) -> Result<Vec<Note>> {
        let mut notes: Vec<Note> = read_json_dir(&self.dir, "note")?;
        notes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(notes)
    }

    pub fn names(&self) -> Result<Vec<String>> {
        Ok(self.list()?.into_iter().map(|n| n.name).collect())
    }

    /// Load a note by exact file name, falling back to a case-insensitive
    /// match on note names.
    pub fn get(&self, name: &str) -> Result<Option<Note>> {
        validate_name("Note", name)?;

        let path = self.path_for(name);
        if path.is_file() {
            return read_json(&path).map(Some);
        }

        let wanted = name.to_lowercase();
        Ok(self
            .list()?
            .into_iter()
            .find(|note| note.name.to_lowercase() == wanted))
    }

    /// Write a new note.
    ///
    /// # Errors
    ///
    /// Returns `AlError::AlreadyExists` if a note with that name exists.
    pub fn insert(&self, note: &Note) -> Result<()> {
        validate_name("Note", &note.name)?;
        if self.get(&note.name)?.is_some() {
            return Err(AlError::AlreadyExists(format!(
                "Note '{}' already exists",
                note.name
            )));
        }
        self.write(note)
    }

    /// Overwrite an existing note.
    pub fn update(&self, note: &Note) -> Result<()> {
        validate_name("Note", &note.name)?;
        if !self.path_for(&note.name).is_file() {
            return Err(AlError::NotFound(format!("Note '{}'", note.name)));
        }
        self.write(note)
    }

    /// Delete a note, resolving `name` the same way [`get`](Self::get) does.
    pub fn remove(&self, name: &str) -> Result<Note> {
        let note = self
            .get(name)?
            .ok_or_else(|| AlError::NotFound(format!("Note '{}'", name)))?;
        let path = self.path_for(&note.name);
        std::fs::remove_file(&path)
            .map_err(|e| AlError::Storage(format!("Failed to delete {}: {}", path.display(), e)))?;
        tracing::debug!(note = %note.name, "note removed");
        Ok(note)
    }

    fn write(&self, note: &Note) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        write_json(&self.path_for(&note.name), note, PRIVATE_FILE_MODE)?;
        tracing::debug!(note = %note.name, encrypted = note.encrypted, "note saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store() -> (tempfile::TempDir, NoteStore) {
        let dir = tempdir().unwrap();
        let store = NoteStore::new(dir.path().join("notes"));
        (dir, store)
    }

    #[test]
    fn test_list_missing_dir_is_empty() {
        let (_dir, store) = store();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_insert_get_and_duplicate() {
        let (_dir, store) = store();
        store.insert(&Note::new("deploy", "run make", false)).unwrap();

        let note = store.get("deploy").unwrap().unwrap();
        assert_eq!(note.content, "run make");

        let err = store.insert(&Note::new("deploy", "again", false)).unwrap_err();
        assert!(matches!(err, AlError::AlreadyExists(_)));
    }

    #[test]
    fn test_get_falls_back_to_case_insensitive() {
        let (_dir, store) = store();
        store.insert(&Note::new("Deploy", "x", false)).unwrap();
        assert_eq!(store.get("deploy").unwrap().unwrap().name, "Deploy");
        assert!(store.get("deplo").unwrap().is_none());
    }

    #[test]
    fn test_list_sorted_and_skips_garbage() {
        let (_dir, store) = store();
        store.insert(&Note::new("zeta", "z", false)).unwrap();
        store.insert(&Note::new("alpha", "a", false)).unwrap();
        std::fs::write(store.dir().join("broken.json"), "{ not json").unwrap();
        std::fs::write(store.dir().join("readme.txt"), "ignored").unwrap();

        assert_eq!(store.names().unwrap(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_update_bumps_timestamp() {
        let (_dir, store) = store();
        let mut note = Note::new("todo", "one", false);
        store.insert(&note).unwrap();

        note.set_content("two");
        store.update(&note).unwrap();

        let loaded = store.get("todo").unwrap().unwrap();
        assert_eq!(loaded.content, "two");
        assert!(loaded.updated_at >= loaded.created_at);
    }

    #[test]
    fn test_update_missing_fails() {
        let (_dir, store) = store();
        let err = store.update(&Note::new("ghost", "", false)).unwrap_err();
        assert!(matches!(err, AlError::NotFound(_)));
    }

    #[test]
    fn test_remove() {
        let (_dir, store) = store();
        store.insert(&Note::new("tmp", "x", false)).unwrap();
        assert_eq!(store.remove("TMP").unwrap().name, "tmp");
        assert!(store.get("tmp").unwrap().is_none());
        assert!(store.remove("tmp").is_err());
    }

    #[test]
    fn test_rejects_path_like_names() {
        let (_dir, store) = store();
        assert!(store.insert(&Note::new("../x", "", false)).is_err());
        assert!(store.get("a/b").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_note_files_are_private() {
        use std::os::unix::fs::PermissionsExt;

        let (_dir, store) = store();
        store.insert(&Note::new("secret", "x", false)).unwrap();
        let mode = std::fs::metadata(store.dir().join("secret.json"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_reads_go_style_timestamps() {
        let json = r#"{
  "name": "old",
  "content": "hello",
  "encrypted": false,
  "created_at": "2024-03-01T10:15:30.123456789+01:00",
  "updated_at": "2024-03-02T08:00:00Z"
}"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.created_at.to_rfc3339(), "2024-03-01T09:15:30.123456789+00:00");
    }

    #[test]
    fn test_preview() {
        let note = Note::new("n", "line one\nline two", false);
        assert_eq!(note.preview(60), "line one line two");
        assert_eq!(note.preview(4), "line...");

        let unicode = Note::new("n", "日本語テキスト", false);
        assert_eq!(unicode.preview(3), "日本語...");

        let sealed = Note::new("n", "QUJD", true);
        assert_eq!(sealed.preview(60), "(encrypted)");
    }
}
