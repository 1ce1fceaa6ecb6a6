//! Web platform implementations (LocalStorage + fetch).

mod lookup;
mod prefs;

pub use lookup::WebLookup;
pub use prefs::WebPreferences;
