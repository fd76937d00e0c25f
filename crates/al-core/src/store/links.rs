//! Bookmarked links under `.al_local/links`, reachable by name or keyword.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use super::{json_file, read_json, read_json_dir, validate_name, write_json, PRIVATE_FILE_MODE};
use crate::error::{AlError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub name: String,
    pub url: String,
    /// Older files store `null` here when a link had no keywords.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub keywords: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Link {
    pub fn new(name: impl Into<String>, url: impl Into<String>, keywords: Vec<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            keywords,
        }
    }

    /// Append keywords the link does not already carry. Returns how many
    /// were added.
    pub fn add_keywords(&mut self, keywords: &[String]) -> usize {
        let before = self.keywords.len();
        for keyword in keywords {
            if !self.keywords.contains(keyword) {
                self.keywords.push(keyword.clone());
            }
        }
        self.keywords.len() - before
    }

    /// Replace the keyword list. An empty slice clears it.
    pub fn reset_keywords(&mut self, keywords: &[String]) {
        self.keywords = keywords.to_vec();
    }

    /// True when `identifier` equals the name or a keyword, ignoring case.
    pub fn matches(&self, identifier: &str) -> bool {
        let wanted = identifier.to_lowercase();
        self.name.to_lowercase() == wanted
            || self.keywords.iter().any(|k| k.to_lowercase() == wanted)
    }
}

/// Read/write access to one project's links directory.
#[derive(Debug, Clone)]
pub struct LinkStore {
    dir: PathBuf,
}

impl LinkStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> PathBuf {
        json_file(&self.dir, name)
    }

    /// All readable links, sorted by name.
    pub fn list(&self) -> Result<Vec<Link>> {
        let mut links: Vec<Link> = read_json_dir(&self.dir, "link")?;
        links.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(links)
    }

    /// Load a link by exact name.
    pub fn get(&self, name: &str) -> Result<Option<Link>> {
        validate_name("Link", name)?;
        let path = self.path_for(name);
        if !path.is_file() {
            return Ok(None);
        }
        read_json(&path).map(Some)
    }

    /// Resolve a name or keyword. Names win over keywords, so a link named
    /// `docs` is found before another link that merely has `docs` as a
    /// keyword.
    pub fn find(&self, identifier: &str) -> Result<Option<Link>> {
        let wanted = identifier.to_lowercase();
        let links = self.list()?;

        if let Some(link) = links.iter().find(|l| l.name.to_lowercase() == wanted) {
            return Ok(Some(link.clone()));
        }
        Ok(links.into_iter().find(|l| l.matches(identifier)))
    }

    /// Names followed by keywords of every link, for suggestions.
    pub fn identifiers(&self) -> Result<Vec<String>> {
        let mut out = Vec::new();
        for link in self.list()? {
            out.push(link.name);
            out.extend(link.keywords);
        }
        Ok(out)
    }

    /// Write a new link.
    ///
    /// # Errors
    ///
    /// Returns `AlError::AlreadyExists` if a link with that name exists,
    /// ignoring case, since lookups by name ignore case too.
    pub fn insert(&self, link: &Link) -> Result<()> {
        validate_name("Link", &link.name)?;
        if self.path_for(&link.name).is_file() {
            return Err(AlError::AlreadyExists(format!(
                "Link '{}' already exists",
                link.name
            )));
        }
        let wanted = link.name.to_lowercase();
        if let Some(existing) = self
            .list()?
            .into_iter()
            .find(|l| l.name.to_lowercase() == wanted)
        {
            return Err(AlError::AlreadyExists(format!(
                "Link '{}' already exists",
                existing.name
            )));
        }
        self.write(link)
    }

    pub fn update(&self, link: &Link) -> Result<()> {
        validate_name("Link", &link.name)?;
        if !self.path_for(&link.name).is_file() {
            return Err(AlError::NotFound(format!("Link '{}'", link.name)));
        }
        self.write(link)
    }

    pub fn remove(&self, name: &str) -> Result<()> {
        validate_name("Link", name)?;
        let path = self.path_for(name);
        if !path.is_file() {
            return Err(AlError::NotFound(format!("Link '{}'", name)));
        }
        std::fs::remove_file(&path)
            .map_err(|e| AlError::Storage(format!("Failed to delete {}: {}", path.display(), e)))?;
        tracing::debug!(link = name, "link removed");
        Ok(())
    }

    fn write(&self, link: &Link) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        write_json(&self.path_for(&link.name), link, PRIVATE_FILE_MODE)?;
        tracing::debug!(link = %link.name, "link saved");
        Ok(())
    }
}
