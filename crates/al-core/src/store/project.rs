//! Per-project `.al_local` layout.

use std::path::{Path, PathBuf};

use super::links::LinkStore;
use super::notes::NoteStore;
use crate::error::{AlError, Result};

/// Hidden directory created inside every registered project.
pub const LOCAL_DIR_NAME: &str = ".al_local";

const NOTES_DIR_NAME: &str = "notes";
const LINKS_DIR_NAME: &str = "links";

/// A project root and the paths of its local state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDir {
    root: PathBuf,
}

impl ProjectDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn local_dir(&self) -> PathBuf {
        self.root.join(LOCAL_DIR_NAME)
    }

    pub fn notes_dir(&self) -> PathBuf {
        self.local_dir().join(NOTES_DIR_NAME)
    }

    pub fn links_dir(&self) -> PathBuf {
        self.local_dir().join(LINKS_DIR_NAME)
    }

    /// True once `al init` (or [`ensure_layout`](Self::ensure_layout)) ran here.
    pub fn is_initialized(&self) -> bool {
        self.local_dir().is_dir()
    }

    /// Create `.al_local/notes` and `.al_local/links`.
    pub fn ensure_layout(&self) -> Result<()> {
        for dir in [self.notes_dir(), self.links_dir()] {
            std::fs::create_dir_all(&dir).map_err(|e| {
                AlError::Storage(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }
        tracing::debug!(root = %self.root.display(), "local layout ready");
        Ok(())
    }

    pub fn notes(&self) -> NoteStore {
        NoteStore::new(self.notes_dir())
    }

    pub fn links(&self) -> LinkStore {
        LinkStore::new(self.links_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_layout_paths() {
        let project = ProjectDir::new("/work/acme");
        assert_eq!(project.local_dir(), PathBuf::from("/work/acme/.al_local"));
        assert_eq!(
            project.notes_dir(),
            PathBuf::from("/work/acme/.al_local/notes")
        );
        assert_eq!(
            project.links_dir(),
            PathBuf::from("/work/acme/.al_local/links")
        );
    }

    #[test]
    fn test_ensure_layout_is_idempotent() {
        let dir = tempdir().unwrap();
        let project = ProjectDir::new(dir.path());
        assert!(!project.is_initialized());

        project.ensure_layout().unwrap();
        project.ensure_layout().unwrap();

        assert!(project.is_initialized());
        assert!(project.notes_dir().is_dir());
        assert!(project.links_dir().is_dir());
    }
}
