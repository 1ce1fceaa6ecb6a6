//! Manager filter storage keys.
//!
//! Each dashboard page keeps its own "filter by manager" preference under
//! its own storage key, but they all mirror the same manager id. The map
//! is configurable so a page can be re-keyed or dropped without touching
//! the boot sequence.

use serde::{Deserialize, Serialize};

/// Dedicated slot for the resolved manager id itself.
pub const MANAGER_ID_KEY: &str = "manager_id";

/// The dashboard pages that carry a manager filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterArea {
    Accounts,
    Actuals,
    Assign,
    Budgets,
    Home,
}

impl FilterArea {
    pub const ALL: [FilterArea; 5] = [
        FilterArea::Accounts,
        FilterArea::Actuals,
        FilterArea::Assign,
        FilterArea::Budgets,
        FilterArea::Home,
    ];

    /// Historical storage key for this page's manager filter. The naming
    /// is inconsistent (dotted vs. camelCase) because the pages predate
    /// the shared map; the keys are load-bearing and must not change.
    pub fn default_key(&self) -> &'static str {
        match self {
            FilterArea::Accounts => "accounts.filter.manager",
            FilterArea::Actuals => "actuals.filterManager",
            FilterArea::Assign => "assign.filter.manager",
            FilterArea::Budgets => "budgets.filterManager",
            FilterArea::Home => "home.filterManager",
        }
    }
}

/// Ordered mapping from dashboard page to its manager filter storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterKeyMap {
    entries: Vec<(FilterArea, String)>,
}

impl Default for FilterKeyMap {
    fn default() -> Self {
        Self {
            entries: FilterArea::ALL
                .iter()
                .map(|area| (*area, area.default_key().to_string()))
                .collect(),
        }
    }
}

impl FilterKeyMap {
    pub fn new(entries: Vec<(FilterArea, String)>) -> Self {
        Self { entries }
    }

    /// Storage key for one page, if it is in the map.
    pub fn key(&self, area: FilterArea) -> Option<&str> {
        self.entries
            .iter()
            .find(|(a, _)| *a == area)
            .map(|(_, k)| k.as_str())
    }

    /// All storage keys, in map order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, k)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterArea, &str)> {
        self.entries.iter().map(|(a, k)| (*a, k.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
