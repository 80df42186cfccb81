//! JSON-file backed key-value store.
//!
//! The whole store is one JSON object (`{"key": "value", ...}`) rewritten on
//! every `set`. The file is created lazily on the first write, and replaced
//! through a sibling temp file so a crash mid-write leaves the old snapshot.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StoreError};

pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`.
    ///
    /// A missing, empty or unparsable file is an empty store; the next `set`
    /// overwrites whatever was there. Only I/O failures are errors.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            parse_entries(&path, &content)
        } else {
            BTreeMap::new()
        };

        log::info!("STORE: Opened {} ({} keys)", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        let tmp = temp_path(&self.path);
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn parse_entries(path: &Path, content: &str) -> BTreeMap<String, String> {
    if content.trim().is_empty() {
        return BTreeMap::new();
    }
    match serde_json::from_str(content) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("STORE: {} is corrupt ({}), starting empty", path.display(), e);
            BTreeMap::new()
        }
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
