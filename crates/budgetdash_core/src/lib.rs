//! Presentation-layer core for the Budget Coder dashboard
//!
//! This crate holds the platform-independent pieces of the dashboard UI:
//! - Accounting-style number formatting for budget/actuals tables
//! - Cookie header parsing and identity/role resolution
//! - The manager filter key map shared by the dashboard pages
//!
//! Everything here is pure and wasm-safe; browser and filesystem glue
//! lives in the `budgetdash` crate.

// ============================================================================
// Core modules
// ============================================================================

pub mod cookies;
pub mod error;
pub mod filters;
pub mod format;
pub mod identity;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use cookies::CookieJar;
pub use error::IdentityError;
pub use filters::{FilterArea, FilterKeyMap, MANAGER_ID_KEY};
pub use format::{fmt_acct_num, fmt_acct_num_str, fmt_rj_column};
pub use identity::{Identity, Role};
