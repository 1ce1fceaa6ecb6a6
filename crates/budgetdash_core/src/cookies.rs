//! Cookie header parsing.
//!
//! The dashboard never issues cookies; it only reads the session signals
//! an upstream login flow has already set. Parsing follows the browser
//! convention: entries split on `;`, names matched exactly, values
//! percent-decoded.

/// A parsed, read-only view of a `Cookie` header.
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    entries: Vec<(String, String)>,
}

impl CookieJar {
    /// Parse a raw cookie header string.
    ///
    /// Entries without an `=` are skipped. A value that fails percent
    /// decoding is kept raw rather than dropped.
    pub fn parse(header: &str) -> Self {
        let mut entries = Vec::new();
        for part in header.split(';') {
            let part = part.trim();
            let Some((name, value)) = part.split_once('=') else {
                continue;
            };
            let value = match urlencoding::decode(value) {
                Ok(decoded) => decoded.into_owned(),
                Err(_) => value.to_string(),
            };
            entries.push((name.to_string(), value));
        }
        Self { entries }
    }

    /// Look up the decoded value for `name`. First match wins when a
    /// header repeats a name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
