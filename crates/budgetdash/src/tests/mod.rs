//! Tests for the dashboard shell
//!
//! Tests are organized by topic:
//! - `boot` - page-load orchestration and lookup application
//! - `gating` - admin-control disabling
//! - `prefs` - the file-backed preference store (native)

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};

use crate::platform::{LookupRequest, LookupResponse, ManagerLookup, Preferences, PrefsError};

mod boot;
mod gating;

/// In-memory preference store.
#[derive(Default)]
pub(crate) struct MemoryPrefs {
    values: BTreeMap<String, String>,
}

impl MemoryPrefs {
    pub(crate) fn with(entries: &[(&str, &str)]) -> Self {
        Self {
            values: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub(crate) fn keys(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }
}

impl Preferences for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// Scripted lookup double: records what was sent, replays queued
/// responses through `try_recv`.
#[derive(Default)]
pub(crate) struct ScriptedLookup {
    pub(crate) sent: RefCell<Vec<LookupRequest>>,
    pub(crate) responses: RefCell<VecDeque<LookupResponse>>,
}

impl ScriptedLookup {
    pub(crate) fn replying(response: LookupResponse) -> Self {
        let lookup = Self::default();
        lookup.responses.borrow_mut().push_back(response);
        lookup
    }

    pub(crate) fn sent_requests(&self) -> Vec<LookupRequest> {
        self.sent.borrow().clone()
    }
}

impl ManagerLookup for ScriptedLookup {
    fn send(&self, request: LookupRequest) -> bool {
        self.sent.borrow_mut().push(request);
        true
    }

    fn try_recv(&self) -> Option<LookupResponse> {
        self.responses.borrow_mut().pop_front()
    }

    fn shutdown(&self) {}
}
