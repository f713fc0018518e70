use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    errors::ExpenseError,
    utils::paths::{ensure_dir, write_atomic},
};

use super::{KeyValueStorage, Result};

/// Keeps every key in a single pretty-printed JSON object on disk.
///
/// The file is read once when opened; each `set`/`remove` rewrites the whole
/// object through a temporary file so a crash never leaves a half-written map.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStorage {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.is_dir() {
            return Err(ExpenseError::Storage(format!(
                "`{}` is a directory",
                path.display()
            )));
        }
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        let entries = read_entries(&path)?;
        tracing::debug!(path = %path.display(), keys = entries.len(), "opened storage file");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        write_atomic(&self.path, &json)
    }
}

impl KeyValueStorage for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(err) = self.flush() {
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let Some(previous) = self.entries.remove(key) else {
            return Ok(());
        };
        if let Err(err) = self.flush() {
            self.entries.insert(key.to_string(), previous);
            return Err(err);
        }
        Ok(())
    }
}

/// Missing files start empty. A file that is not a JSON string map, including
/// one that is not UTF-8, is logged and ignored; the next write replaces it.
fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let data = fs::read(path)?;
    match serde_json::from_slice(&data) {
        Ok(entries) => Ok(entries),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "ignoring unreadable storage file"
            );
            Ok(BTreeMap::new())
        }
    }
}
