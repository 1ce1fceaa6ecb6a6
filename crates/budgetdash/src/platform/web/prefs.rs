//! Web preference store backed by browser LocalStorage.

use gloo_storage::{LocalStorage, Storage as GlooStorage};

use crate::platform::prefs::{Preferences, PrefsError};

/// LocalStorage-backed preference store.
///
/// Values go through the raw store, not gloo's JSON codec: the page
/// scripts read these keys as plain strings and must not see quoting.
#[derive(Default)]
pub struct WebPreferences;

impl WebPreferences {
    pub fn new() -> Self {
        Self
    }
}

impl Preferences for WebPreferences {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|_| PrefsError::NotAvailable("LocalStorage rejected the write".to_string()))
    }

    fn remove(&mut self, key: &str) {
        let _ = LocalStorage::raw().remove_item(key);
    }
}
