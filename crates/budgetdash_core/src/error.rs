use std::fmt;

/// Errors from decoding the base64-encoded identity cookies.
///
/// A malformed cookie is a recoverable condition: callers are expected to
/// log it and treat the viewer as anonymous rather than fail the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The cookie payload was not valid base64.
    Base64 { cookie: &'static str },
    /// The decoded payload was not valid UTF-8.
    Utf8 { cookie: &'static str },
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityError::Base64 { cookie } => {
                write!(f, "cookie {cookie:?} is not valid base64")
            }
            IdentityError::Utf8 { cookie } => {
                write!(f, "cookie {cookie:?} did not decode to UTF-8 text")
            }
        }
    }
}

impl std::error::Error for IdentityError {}
