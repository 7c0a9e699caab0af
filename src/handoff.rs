//! The selection handoff store.
//!
//! A small persistent key-value file shared between views: the home view
//! writes the selected model's identity here, and the per-model detail view
//! (a separate program surface) reads it back. Writes are synchronous and
//! last-write-wins; there is no transaction tying the write to navigation,
//! so an aborted navigation still leaves the new selection behind.
//!
//! Key ownership: this view owns `menu_id`, `name` and `source` and only
//! ever overwrites them together; `doc` is a display preference it reads
//! but never writes.

use crate::catalog::ModelDescriptor;
use crate::paths;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Key holding the selected model's id.
pub const MENU_ID_KEY: &str = "menu_id";
/// Key holding the selected model's display name.
pub const NAME_KEY: &str = "name";
/// Key holding the selected model's source reference.
pub const SOURCE_KEY: &str = "source";
/// Key holding the description display preference, read once on activation.
pub const DOC_KEY: &str = "doc";

/// The `(id, name, source)` triple written on selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRecord {
    /// Selected model's id, rendered as a string.
    pub id: String,
    /// Selected model's display name.
    pub name: String,
    /// Selected model's source reference.
    pub source: String,
}

/// Persistent key-value store backing the view-to-view handoff.
#[derive(Debug, Clone)]
pub struct HandoffStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl HandoffStore {
    /// Default location of the handoff file.
    #[must_use]
    pub fn default_path() -> PathBuf {
        paths::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("indra-tui")
            .join("handoff.json")
    }

    /// Open the store at the default location, starting empty if the file
    /// does not exist or cannot be parsed.
    #[must_use]
    pub fn open() -> Self {
        Self::open_at(Self::default_path())
    }

    /// Open the store backed by a specific file.
    #[must_use]
    pub fn open_at(path: PathBuf) -> Self {
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default();
        Self { path, entries }
    }

    /// The file backing this store.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Write a value and persist immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing file cannot be written.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        self.entries.insert(key.into(), value.into());
        self.save()
    }

    /// Record a model selection: writes exactly the `(id, name, source)`
    /// triple, unconditionally overwriting any previous selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing file cannot be written.
    pub fn write_selection(&mut self, model: &ModelDescriptor) -> Result<()> {
        self.entries
            .insert(MENU_ID_KEY.to_string(), model.id.to_string());
        self.entries.insert(NAME_KEY.to_string(), model.name.clone());
        self.entries
            .insert(SOURCE_KEY.to_string(), model.source.clone());
        self.save()?;
        debug!(id = %model.id, name = %model.name, "selection written to handoff store");
        Ok(())
    }

    /// The currently recorded selection, if a complete triple is present.
    #[must_use]
    pub fn selection(&self) -> Option<SelectionRecord> {
        Some(SelectionRecord {
            id: self.get(MENU_ID_KEY)?.to_string(),
            name: self.get(NAME_KEY)?.to_string(),
            source: self.get(SOURCE_KEY)?.to_string(),
        })
    }

    /// Remove every key and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing file cannot be written.
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.save()
    }

    /// Whether the store holds no keys at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create handoff directory {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(&self.entries)
            .context("Failed to serialize handoff store")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write handoff store to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, reason = "test assertions")]

    use super::*;
    use crate::catalog::ModelId;
    use tempfile::TempDir;

    fn sandpile() -> ModelDescriptor {
        ModelDescriptor {
            id: ModelId::Number(1),
            name: "Sandpile".to_string(),
            source: "sandpile.py".to_string(),
            doc: "desc1".to_string(),
        }
    }

    #[test]
    fn test_open_missing_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let store = HandoffStore::open_at(dir.path().join("handoff.json"));
        assert!(store.is_empty());
        assert!(store.selection().is_none());
    }

    #[test]
    fn test_open_corrupt_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("handoff.json");
        fs::write(&path, "not json").unwrap();
        let store = HandoffStore::open_at(path);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_get_roundtrip_across_opens() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("handoff.json");

        let mut store = HandoffStore::open_at(path.clone());
        store.set(DOC_KEY, "show").unwrap();

        let reopened = HandoffStore::open_at(path);
        assert_eq!(reopened.get(DOC_KEY), Some("show"));
    }

    #[test]
    fn test_write_selection_writes_exact_triple() {
        let dir = TempDir::new().unwrap();
        let mut store = HandoffStore::open_at(dir.path().join("handoff.json"));

        store.write_selection(&sandpile()).unwrap();

        assert_eq!(store.get(MENU_ID_KEY), Some("1"));
        assert_eq!(store.get(NAME_KEY), Some("Sandpile"));
        assert_eq!(store.get(SOURCE_KEY), Some("sandpile.py"));
        // The doc string is display-only and never part of the handoff.
        assert_eq!(store.get(DOC_KEY), None);
    }

    #[test]
    fn test_write_selection_overwrites_prior_values() {
        let dir = TempDir::new().unwrap();
        let mut store = HandoffStore::open_at(dir.path().join("handoff.json"));

        store.write_selection(&sandpile()).unwrap();
        let conway = ModelDescriptor {
            id: ModelId::Number(2),
            name: "Conway".to_string(),
            source: "life.py".to_string(),
            doc: "desc2".to_string(),
        };
        store.write_selection(&conway).unwrap();

        let selection = store.selection().unwrap();
        assert_eq!(selection.id, "2");
        assert_eq!(selection.name, "Conway");
        assert_eq!(selection.source, "life.py");
    }

    #[test]
    fn test_write_selection_preserves_unrelated_keys() {
        let dir = TempDir::new().unwrap();
        let mut store = HandoffStore::open_at(dir.path().join("handoff.json"));

        store.set(DOC_KEY, "hide").unwrap();
        store.write_selection(&sandpile()).unwrap();

        assert_eq!(store.get(DOC_KEY), Some("hide"));
    }

    #[test]
    fn test_selection_incomplete_triple_is_none() {
        let dir = TempDir::new().unwrap();
        let mut store = HandoffStore::open_at(dir.path().join("handoff.json"));
        store.set(MENU_ID_KEY, "1").unwrap();
        assert!(store.selection().is_none());
    }

    #[test]
    fn test_clear_removes_everything() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("handoff.json");
        let mut store = HandoffStore::open_at(path.clone());

        store.write_selection(&sandpile()).unwrap();
        store.clear().unwrap();

        assert!(store.is_empty());
        let reopened = HandoffStore::open_at(path);
        assert!(reopened.is_empty());
    }

    #[test]
    fn test_string_id_written_verbatim() {
        let dir = TempDir::new().unwrap();
        let mut store = HandoffStore::open_at(dir.path().join("handoff.json"));
        let model = ModelDescriptor {
            id: ModelId::Text("seg-9".to_string()),
            name: "Segregation".to_string(),
            source: "segregation.py".to_string(),
            doc: String::new(),
        };
        store.write_selection(&model).unwrap();
        assert_eq!(store.get(MENU_ID_KEY), Some("seg-9"));
    }
}
