//! Configuration Store for the shared annotation document.
//!
//! One JSON file holds the whole document. A missing file is the normal
//! empty state, not an error; every save replaces the file wholesale.
//!
//! # Storage Format
//!
//! The file is a flat JSON object mapping column names to their
//! annotation records, default name `shared_config.json`. Saves write a
//! sibling temp file and rename it over the target, so a crashed save
//! leaves either the old or the new content, never a mixture.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use annot_model::ConfigDocument;

/// Default file name for the shared document.
pub const DEFAULT_STORE_FILE: &str = "shared_config.json";

/// File-backed store for a [`ConfigDocument`].
#[derive(Debug, Clone)]
pub struct ConfigStore {
    /// Path of the persisted document.
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store using [`DEFAULT_STORE_FILE`] in the current directory.
    pub fn default_location() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }

    /// Path of the persisted document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if a document has been persisted.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the persisted document.
    ///
    /// Returns `Ok(None)` when no document exists yet. Read and parse
    /// failures are errors carrying the file path.
    pub fn load(&self) -> Result<Option<ConfigDocument>> {
        if !self.path.exists() {
            debug!("no configuration at {}", self.path.display());
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read configuration from {}", self.path.display()))?;
        let document: ConfigDocument = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse configuration from {}", self.path.display()))?;
        debug!(
            columns = document.len(),
            "loaded configuration from {}",
            self.path.display()
        );
        Ok(Some(document))
    }

    /// Save the full document, replacing any prior content.
    ///
    /// Writes to a sibling temp file and renames it into place so the
    /// stored file is always either the old or the new document.
    pub fn save(&self, document: &ConfigDocument) -> Result<PathBuf> {
        let json = serde_json::to_string_pretty(document)
            .context("Failed to serialize configuration document")?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create store directory: {}", parent.display())
            })?;
        }
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, json)
            .with_context(|| format!("Failed to write configuration to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path).with_context(|| {
            format!("Failed to replace configuration at {}", self.path.display())
        })?;
        debug!(
            columns = document.len(),
            "saved configuration to {}",
            self.path.display()
        );
        Ok(self.path.clone())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_STORE_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_path_is_a_sibling() {
        let store = ConfigStore::new("/some/dir/shared_config.json");
        assert_eq!(
            store.tmp_path(),
            PathBuf::from("/some/dir/shared_config.json.tmp")
        );
    }
}
