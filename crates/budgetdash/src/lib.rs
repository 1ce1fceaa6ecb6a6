//! Dashboard presentation layer for the Budget Coder app
//!
//! This crate runs the page-load sequence the dashboard shell needs:
//! resolve the viewer's role and username from session cookies, toggle the
//! login/logout links, mirror the manager id into the per-page filter
//! preferences, and disable admin-only controls for everyone else.
//!
//! The logic is platform-independent; the [`platform`] module supplies
//! native (filesystem + blocking HTTP) and web (LocalStorage + fetch)
//! implementations behind the same traits.

// ============================================================================
// Core modules
// ============================================================================

pub mod app;
pub mod boot;
pub mod platform;
pub mod ui;

#[cfg(feature = "native")]
pub mod logging;

// ============================================================================
// Platform entry points
// ============================================================================

#[cfg(feature = "web")]
pub mod web;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use app::App;
pub use boot::{PageBoot, apply_lookup_response, boot_page};
pub use platform::{
    LookupRequest, LookupResponse, ManagerLookup, Preferences, PrefsError, set_manager_filters,
};
pub use ui::{AdminControl, ControlKind, Disablement, gate_admin_controls};
