//! Tests for the presentation core
//!
//! Tests are organized by topic:
//! - `formatting` - accounting number and column markup formatting
//! - `session` - cookie parsing and identity/role resolution
