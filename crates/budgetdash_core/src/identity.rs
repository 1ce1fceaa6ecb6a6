//! Identity and role resolution from session cookies.
//!
//! The login flow stores three plain signals (`isAdmin`, `isMgr`,
//! `session`) and two base64-encoded ones (`user`, `uid`). This module
//! only reads them; issuing and validating cookies is the server's job.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::cookies::CookieJar;
use crate::error::IdentityError;

/// Cookie carrying the admin flag; `"1"` means true.
pub const ADMIN_COOKIE: &str = "isAdmin";
/// Cookie carrying the manager flag; `"1"` means true.
pub const MANAGER_COOKIE: &str = "isMgr";
/// Cookie carrying the base64-encoded username, quote-wrapped at rest.
pub const USER_COOKIE: &str = "user";
/// Cookie carrying the base64-encoded user id.
pub const USER_ID_COOKIE: &str = "uid";
/// Opaque session token cookie; presence only, never decoded here.
pub const SESSION_COOKIE: &str = "session";

/// True iff the admin cookie is exactly `"1"`.
pub fn is_admin(jar: &CookieJar) -> bool {
    jar.get(ADMIN_COOKIE) == Some("1")
}

/// True iff the manager cookie is exactly `"1"`.
pub fn is_manager(jar: &CookieJar) -> bool {
    jar.get(MANAGER_COOKIE) == Some("1")
}

/// True iff a session token cookie is present.
pub fn has_session(jar: &CookieJar) -> bool {
    jar.get(SESSION_COOKIE).is_some()
}

/// Username from the `user` cookie, or `None` when not logged in.
pub fn username(jar: &CookieJar) -> Result<Option<String>, IdentityError> {
    decode_cookie(jar, USER_COOKIE)
}

/// User id from the `uid` cookie.
pub fn user_id(jar: &CookieJar) -> Result<Option<String>, IdentityError> {
    decode_cookie(jar, USER_ID_COOKIE)
}

/// Decode a quote-wrapped, base64-encoded cookie value.
///
/// An empty plaintext is reported as absent, matching the login flow
/// which clears these cookies by writing empty values.
fn decode_cookie(jar: &CookieJar, cookie: &'static str) -> Result<Option<String>, IdentityError> {
    let Some(raw) = jar.get(cookie) else {
        return Ok(None);
    };
    // Strip the quotes the cookie store wraps around the payload.
    let stripped: String = raw.chars().filter(|&c| c != '"').collect();
    let bytes = STANDARD
        .decode(stripped.as_bytes())
        .map_err(|_| IdentityError::Base64 { cookie })?;
    let text = String::from_utf8(bytes).map_err(|_| IdentityError::Utf8 { cookie })?;
    if text.is_empty() {
        Ok(None)
    } else {
        Ok(Some(text))
    }
}

/// Viewer role for the current page view. Admin wins over manager wins
/// over plain user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Manager,
    User,
}

impl Role {
    /// Resolve the role from the session cookies.
    pub fn resolve(jar: &CookieJar) -> Role {
        if is_admin(jar) {
            Role::Admin
        } else if is_manager(jar) {
            Role::Manager
        } else {
            Role::User
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::User => "user",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who is viewing the page, computed once at page load and passed by
/// value from there on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub role: Role,
    pub username: Option<String>,
}

impl Identity {
    pub fn new(role: Role, username: Option<String>) -> Self {
        Self { role, username }
    }

    /// True when a username was resolved, i.e. the viewer is logged in.
    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }
}
