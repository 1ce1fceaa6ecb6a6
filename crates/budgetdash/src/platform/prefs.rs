//! Preference store abstraction.
//!
//! The dashboard pages share a flat string key/value store (the browser's
//! LocalStorage in the original shell). Keys carry no schema; last write
//! wins.

use budgetdash_core::filters::FilterKeyMap;

/// Error types for preference store operations
#[derive(Debug)]
pub enum PrefsError {
    /// I/O error (file not found, permission denied, etc.)
    Io(String),
    /// Serialization error
    Serialize(String),
    /// Store not available (e.g. LocalStorage full or blocked)
    NotAvailable(String),
}

impl std::fmt::Display for PrefsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrefsError::Io(msg) => write!(f, "IO error: {}", msg),
            PrefsError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            PrefsError::NotAvailable(msg) => write!(f, "Store not available: {}", msg),
        }
    }
}

impl std::error::Error for PrefsError {}

/// Platform-independent preference store interface.
pub trait Preferences {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError>;

    /// Remove `key` if present. Removing an absent key is not an error.
    fn remove(&mut self, key: &str);
}

/// Mirror a manager id into every per-page filter slot in the map.
///
/// Writes exactly the mapped keys, nothing else. A failed write is
/// reported but does not stop the remaining slots from updating.
pub fn set_manager_filters<P: Preferences>(prefs: &mut P, map: &FilterKeyMap, mgr_id: &str) {
    for (area, key) in map.iter() {
        if let Err(e) = prefs.set(key, mgr_id) {
            tracing::warn!(?area, key, error = %e, "failed to store manager filter");
        }
    }
}
