//! Global project registry (`~/.al_global`).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::config::Config;
use super::{read_json, write_json, SHARED_FILE_MODE};
use crate::error::{AlError, Result};

/// Directory under `$HOME` holding the registry and config.
pub const GLOBAL_DIR_NAME: &str = ".al_global";

/// Registry file name inside the global directory.
pub const PROJECTS_FILE: &str = "projects";

/// Config file name inside the global directory.
pub const CONFIG_FILE: &str = "config";

/// Environment variable overriding the global directory location.
pub const GLOBAL_DIR_ENV: &str = "AL_GLOBAL_DIR";

/// A registered project directory and the shortcuts that reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub path: PathBuf,
    #[serde(default)]
    pub shortcuts: Vec<String>,
}

impl Project {
    pub fn new(path: impl Into<PathBuf>, shortcuts: Vec<String>) -> Self {
        Self {
            path: path.into(),
            shortcuts,
        }
    }

    /// Case-insensitive shortcut membership.
    pub fn has_shortcut(&self, shortcut: &str) -> bool {
        self.shortcuts
            .iter()
            .any(|s| s.to_lowercase() == shortcut.to_lowercase())
    }
}

/// The project registry plus user config, loaded from one global directory.
///
/// Loaded on demand and saved explicitly; handlers receive it by reference
/// instead of reaching for files themselves.
#[derive(Debug, Clone)]
pub struct GlobalStore {
    dir: PathBuf,
    projects: BTreeMap<String, Project>,
    config: Config,
}

impl GlobalStore {
    /// Resolve the global directory: `$AL_GLOBAL_DIR`, else `$HOME/.al_global`.
    pub fn default_dir() -> Result<PathBuf> {
        if let Ok(value) = std::env::var(GLOBAL_DIR_ENV) {
            if !value.trim().is_empty() {
                return Ok(PathBuf::from(value));
            }
        }
        Ok(home_dir()?.join(GLOBAL_DIR_NAME))
    }

    /// Load the registry and config from `dir`.
    ///
    /// Missing files are not an error: they read as an empty registry and
    /// the default config.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();

        let projects_path = dir.join(PROJECTS_FILE);
        let projects = if projects_path.exists() {
            read_json::<Option<BTreeMap<String, Project>>>(&projects_path)?.unwrap_or_default()
        } else {
            BTreeMap::new()
        };

        let config_path = dir.join(CONFIG_FILE);
        let config = if config_path.exists() {
            read_json::<Config>(&config_path)?
        } else {
            Config::default()
        };

        tracing::debug!(dir = %dir.display(), projects = projects.len(), "loaded global store");
        Ok(Self {
            dir,
            projects,
            config,
        })
    }

    /// Create `dir` and default files when absent, then load it.
    pub fn ensure(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            AlError::Storage(format!(
                "Failed to create global directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        let store = Self::open(&dir)?;
        if !dir.join(PROJECTS_FILE).exists() {
            store.save()?;
        }
        if !dir.join(CONFIG_FILE).exists() {
            store.save_config()?;
        }
        Ok(store)
    }

    /// Persist the project registry.
    pub fn save(&self) -> Result<()> {
        write_json(&self.dir.join(PROJECTS_FILE), &self.projects, SHARED_FILE_MODE)?;
        tracing::debug!(projects = self.projects.len(), "saved project registry");
        Ok(())
    }

    /// Persist the config.
    pub fn save_config(&self) -> Result<()> {
        write_json(&self.dir.join(CONFIG_FILE), &self.config, SHARED_FILE_MODE)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn projects(&self) -> &BTreeMap<String, Project> {
        &self.projects
    }

    /// Find a project by any of its shortcuts, ignoring case.
    pub fn find_by_shortcut(&self, shortcut: &str) -> Option<(&str, &Project)> {
        self.projects
            .iter()
            .find(|(_, project)| project.has_shortcut(shortcut))
            .map(|(name, project)| (name.as_str(), project))
    }

    /// Find the project registered at exactly `path`.
    pub fn find_by_path(&self, path: &Path) -> Option<(&str, &Project)> {
        self.projects
            .iter()
            .find(|(_, project)| project.path == path)
            .map(|(name, project)| (name.as_str(), project))
    }

    /// Project names followed by every shortcut, for suggestions.
    pub fn candidates(&self) -> Vec<String> {
        let mut out = Vec::new();
        for (name, project) in &self.projects {
            out.push(name.clone());
            out.extend(project.shortcuts.iter().cloned());
        }
        out
    }

    /// Add a project to the registry (call [`save`](Self::save) afterwards).
    ///
    /// Shortcuts repeated within `project` are collapsed, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `AlError::AlreadyExists` if the path, the name, or any
    /// shortcut is already registered.
    pub fn register(&mut self, name: &str, mut project: Project) -> Result<()> {
        if let Some((existing, _)) = self.find_by_path(&project.path) {
            return Err(AlError::AlreadyExists(format!(
                "This directory is already initialized as project '{}'",
                existing
            )));
        }
        if self.projects.contains_key(name) {
            return Err(AlError::AlreadyExists(format!(
                "Project '{}' already exists",
                name
            )));
        }

        project.shortcuts = dedupe_ignore_case(project.shortcuts);
        self.ensure_shortcuts_free(&project.shortcuts)?;

        tracing::debug!(name, path = %project.path.display(), "registering project");
        self.projects.insert(name.to_string(), project);
        Ok(())
    }

    fn ensure_shortcuts_free(&self, shortcuts: &[String]) -> Result<()> {
        for shortcut in shortcuts {
            if let Some((owner, _)) = self.find_by_shortcut(shortcut) {
                return Err(AlError::AlreadyExists(format!(
                    "Shortcut '{}' is already used by project '{}'",
                    shortcut, owner
                )));
            }
        }
        Ok(())
    }
}

fn dedupe_ignore_case(items: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::new();
    for item in items {
        let lowered = item.to_lowercase();
        if !seen.contains(&lowered) {
            seen.push(lowered);
            out.push(item);
        }
    }
    out
}

fn home_dir() -> Result<PathBuf> {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map(PathBuf::from)
        .map_err(|_| AlError::Other("HOME is not set; cannot resolve the global directory".into()))
}
