//! Native platform implementations (filesystem + background thread).

mod lookup;
mod prefs;

pub use lookup::HttpLookupWorker;
pub use prefs::FilePreferences;
