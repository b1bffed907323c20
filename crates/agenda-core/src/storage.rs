//! Local scoped storage backed by a JSON file.
//!
//! Holds the last-seen week key and a cached copy of the task list used when
//! the document store cannot be reached.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    error::{AgendaError, Result},
    store::KeyValueStore,
};

/// Key holding the ISO week seen at the last startup.
pub const LAST_WEEK_KEY: &str = "lastWeekKey";

/// Key holding the JSON-encoded task list from the last successful load.
pub const CACHED_TASKS_KEY: &str = "tasks";

/// File-backed string key/value store.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    /// Creates a storage handle; the file is created on first write.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content =
            fs::read_to_string(&self.path).map_err(|e| AgendaError::file_system(&self.path, e))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| AgendaError::file_system(parent, e))?;
        }
        let content = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, content).map_err(|e| AgendaError::file_system(&self.path, e))
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());
        debug!("Storing local item '{key}' in {}", self.path.display());
        self.write_all(&items)
    }
}
