//! Application shell: owns the preference store, the lookup worker, and
//! the boot result, and drains lookup responses as they arrive.

use budgetdash_core::cookies::CookieJar;
use budgetdash_core::filters::FilterKeyMap;
use budgetdash_core::identity::Identity;

use crate::boot::{PageBoot, apply_lookup_response, boot_page};
use crate::platform::{ManagerLookup, Preferences};
use crate::ui::AdminControl;

pub struct App<P: Preferences, L: ManagerLookup> {
    prefs: P,
    lookup: L,
    filter_keys: FilterKeyMap,
    boot: Option<PageBoot>,
}

impl<P: Preferences, L: ManagerLookup> App<P, L> {
    pub fn new(prefs: P, lookup: L, filter_keys: FilterKeyMap) -> Self {
        Self {
            prefs,
            lookup,
            filter_keys,
            boot: None,
        }
    }

    /// Run the page-load sequence. Meant to run exactly once; booting
    /// again replaces the previous result.
    pub fn boot(&mut self, jar: &CookieJar, controls: &[AdminControl]) -> &PageBoot {
        let boot = boot_page(jar, &mut self.prefs, &self.lookup, controls);
        self.boot.insert(boot)
    }

    /// Drain and apply any completed lookup responses. Returns the number
    /// applied (usually 0 or 1).
    pub fn poll_lookup(&mut self) -> usize {
        let mut applied = 0;
        while let Some(response) = self.lookup.try_recv() {
            apply_lookup_response(response, &mut self.prefs, &self.filter_keys);
            applied += 1;
        }
        applied
    }

    /// Boot result, if [`App::boot`] has run.
    pub fn page(&self) -> Option<&PageBoot> {
        self.boot.as_ref()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.boot.as_ref().map(|b| &b.identity)
    }

    pub fn prefs(&self) -> &P {
        &self.prefs
    }

    pub fn shutdown(&self) {
        self.lookup.shutdown();
    }
}
