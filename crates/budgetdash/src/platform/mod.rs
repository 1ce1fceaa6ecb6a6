//! Platform abstraction layer for native/web compatibility.
//!
//! This module provides traits that abstract platform-specific
//! functionality:
//! - [`Preferences`]: the per-page key/value preference store
//! - [`ManagerLookup`]: the background manager-id lookup
//!
//! Each trait has implementations for native (filesystem, background
//! thread + blocking HTTP) and web (LocalStorage, fetch).

mod lookup;
mod prefs;

#[cfg(feature = "native")]
pub mod native;

#[cfg(feature = "web")]
pub mod web;

pub use lookup::{LookupRequest, LookupResponse, ManagerIdResponse, ManagerLookup, manager_id_path};
pub use prefs::{Preferences, PrefsError, set_manager_filters};

// Re-export platform-specific implementations
#[cfg(feature = "native")]
pub use native::{FilePreferences, HttpLookupWorker};

#[cfg(feature = "web")]
pub use web::{WebLookup, WebPreferences};
