//! Native preference store backed by a single JSON file.
//!
//! Layout:
//! ~/.budgetdash/
//!   prefs.json           # flat string map, one key per preference
//!   budgetdash.log       # written by the logging module

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::platform::prefs::{Preferences, PrefsError};

const PREFS_FILE: &str = "prefs.json";

/// File-backed preference store. The map is loaded eagerly and every
/// mutation is written back, so concurrent page views keep the
/// last-write-wins behavior the browser store has.
pub struct FilePreferences {
    root: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Open (or start) the store under `root`.
    ///
    /// A missing or unreadable file starts an empty store; a present but
    /// corrupted file is an error so stored filters are not silently
    /// wiped.
    pub fn open(root: PathBuf) -> Result<Self, PrefsError> {
        let path = root.join(PREFS_FILE);
        let values = if path.exists() {
            let text = fs::read_to_string(&path).map_err(|e| PrefsError::Io(e.to_string()))?;
            serde_json::from_str(&text).map_err(|e| PrefsError::Serialize(e.to_string()))?
        } else {
            BTreeMap::new()
        };
        Ok(Self { root, values })
    }

    /// Default store location (~/.budgetdash/).
    pub fn default_root() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".budgetdash")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn persist(&self) -> Result<(), PrefsError> {
        fs::create_dir_all(&self.root).map_err(|e| PrefsError::Io(e.to_string()))?;
        let text = serde_json::to_string_pretty(&self.values)
            .map_err(|e| PrefsError::Serialize(e.to_string()))?;
        fs::write(self.root.join(PREFS_FILE), text).map_err(|e| PrefsError::Io(e.to_string()))
    }
}

impl Preferences for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            if let Err(e) = self.persist() {
                tracing::warn!(key, error = %e, "failed to persist preference removal");
            }
        }
    }
}
