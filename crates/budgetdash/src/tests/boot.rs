//! Page boot tests

use budgetdash_core::cookies::CookieJar;
use budgetdash_core::filters::{FilterKeyMap, MANAGER_ID_KEY};
use budgetdash_core::identity::Role;

use crate::app::App;
use crate::boot::{ADMIN_TITLE, MANAGER_TITLE, USER_TITLE, apply_lookup_response, boot_page};
use crate::platform::{LookupRequest, LookupResponse, Preferences};
use crate::tests::{MemoryPrefs, ScriptedLookup};
use crate::ui::{AdminControl, ControlKind};

// base64("alice")
const MANAGER_COOKIES: &str = "isMgr=1; user=\"YWxpY2U=\"";

fn filter_keys() -> Vec<&'static str> {
    vec![
        "accounts.filter.manager",
        "actuals.filterManager",
        "assign.filter.manager",
        "budgets.filterManager",
        "home.filterManager",
    ]
}

#[test]
fn titles_follow_role() {
    let lookup = ScriptedLookup::default();
    let mut prefs = MemoryPrefs::default();

    let admin = boot_page(&CookieJar::parse("isAdmin=1"), &mut prefs, &lookup, &[]);
    assert_eq!(admin.title, ADMIN_TITLE);
    assert_eq!(admin.identity.role, Role::Admin);

    let manager = boot_page(&CookieJar::parse(MANAGER_COOKIES), &mut prefs, &lookup, &[]);
    assert_eq!(manager.title, MANAGER_TITLE);

    let user = boot_page(&CookieJar::parse(""), &mut prefs, &lookup, &[]);
    assert_eq!(user.title, USER_TITLE);
    assert_eq!(user.identity.role, Role::User);
}

#[test]
fn login_logout_links_invert_on_username() {
    let lookup = ScriptedLookup::default();
    let mut prefs = MemoryPrefs::default();

    let logged_in = boot_page(&CookieJar::parse(MANAGER_COOKIES), &mut prefs, &lookup, &[]);
    assert!(logged_in.logout_visible);
    assert!(!logged_in.login_visible);

    let anonymous = boot_page(&CookieJar::parse("isMgr=1"), &mut prefs, &lookup, &[]);
    assert!(anonymous.login_visible);
    assert!(!anonymous.logout_visible);
}

#[test]
fn manager_boot_fires_lookup_and_leaves_storage_alone() {
    let lookup = ScriptedLookup::default();
    let mut prefs = MemoryPrefs::with(&[(MANAGER_ID_KEY, "old-42")]);

    let boot = boot_page(&CookieJar::parse(MANAGER_COOKIES), &mut prefs, &lookup, &[]);

    assert!(boot.lookup_sent);
    assert_eq!(
        lookup.sent_requests(),
        vec![LookupRequest::ManagerId {
            username: "alice".to_string()
        }]
    );
    // Nothing changes until a response is applied.
    assert_eq!(prefs.get(MANAGER_ID_KEY).as_deref(), Some("old-42"));
}

#[test]
fn non_manager_boot_clears_manager_id_unconditionally() {
    let lookup = ScriptedLookup::default();

    for cookies in ["isAdmin=1", "", "isMgr=0"] {
        let mut prefs = MemoryPrefs::with(&[(MANAGER_ID_KEY, "42")]);
        let boot = boot_page(&CookieJar::parse(cookies), &mut prefs, &lookup, &[]);
        assert!(!boot.lookup_sent, "cookies: {cookies}");
        assert_eq!(prefs.get(MANAGER_ID_KEY), None, "cookies: {cookies}");
    }
    assert!(lookup.sent_requests().is_empty());
}

#[test]
fn manager_without_username_skips_the_lookup() {
    let lookup = ScriptedLookup::default();
    let mut prefs = MemoryPrefs::with(&[(MANAGER_ID_KEY, "42")]);

    let boot = boot_page(&CookieJar::parse("isMgr=1"), &mut prefs, &lookup, &[]);

    assert!(!boot.lookup_sent);
    assert!(lookup.sent_requests().is_empty());
    // Still a manager: the slot is not cleared.
    assert_eq!(prefs.get(MANAGER_ID_KEY).as_deref(), Some("42"));
}

#[test]
fn malformed_user_cookie_demotes_to_anonymous() {
    let lookup = ScriptedLookup::default();
    let mut prefs = MemoryPrefs::default();

    let boot = boot_page(
        &CookieJar::parse("isMgr=1; user=!!!notbase64!!!"),
        &mut prefs,
        &lookup,
        &[],
    );

    assert_eq!(boot.identity.role, Role::Manager);
    assert_eq!(boot.identity.username, None);
    assert!(boot.login_visible);
    assert!(!boot.lookup_sent);
}

#[test]
fn successful_lookup_updates_all_filter_slots() {
    let mut prefs = MemoryPrefs::default();

    apply_lookup_response(
        LookupResponse::ManagerId {
            manager_id: Some("42".to_string()),
        },
        &mut prefs,
        &FilterKeyMap::default(),
    );

    assert_eq!(prefs.get(MANAGER_ID_KEY).as_deref(), Some("42"));
    for key in filter_keys() {
        assert_eq!(prefs.get(key).as_deref(), Some("42"), "key: {key}");
    }
    // Exactly the six slots, nothing else.
    assert_eq!(prefs.keys().len(), 6);
}

#[test]
fn empty_or_failed_lookup_leaves_storage_untouched() {
    let before = [("home.filterManager", "7"), (MANAGER_ID_KEY, "7")];

    let mut prefs = MemoryPrefs::with(&before);
    apply_lookup_response(
        LookupResponse::ManagerId { manager_id: None },
        &mut prefs,
        &FilterKeyMap::default(),
    );
    assert_eq!(prefs.get(MANAGER_ID_KEY).as_deref(), Some("7"));
    assert_eq!(prefs.get("home.filterManager").as_deref(), Some("7"));

    let mut prefs = MemoryPrefs::with(&before);
    apply_lookup_response(
        LookupResponse::Failed("connection refused".to_string()),
        &mut prefs,
        &FilterKeyMap::default(),
    );
    assert_eq!(prefs.get(MANAGER_ID_KEY).as_deref(), Some("7"));
    assert_eq!(prefs.keys().len(), 2);
}

#[test]
fn gating_is_computed_during_boot_for_non_admins() {
    let lookup = ScriptedLookup::default();
    let mut prefs = MemoryPrefs::default();
    let controls = [
        AdminControl::new("delete-btn", ControlKind::Form),
        AdminControl::new("manage-link", ControlKind::Link),
    ];

    let manager = boot_page(
        &CookieJar::parse(MANAGER_COOKIES),
        &mut prefs,
        &lookup,
        &controls,
    );
    assert_eq!(manager.disablements.len(), 2);

    let admin = boot_page(&CookieJar::parse("isAdmin=1"), &mut prefs, &lookup, &controls);
    assert!(admin.disablements.is_empty());
}

#[test]
fn app_polls_and_applies_lookup_responses() {
    let lookup = ScriptedLookup::replying(LookupResponse::ManagerId {
        manager_id: Some("42".to_string()),
    });
    let mut app = App::new(MemoryPrefs::default(), lookup, FilterKeyMap::default());

    app.boot(&CookieJar::parse(MANAGER_COOKIES), &[]);
    assert_eq!(app.prefs().get(MANAGER_ID_KEY), None);

    assert_eq!(app.poll_lookup(), 1);
    assert_eq!(app.prefs().get(MANAGER_ID_KEY).as_deref(), Some("42"));
    assert_eq!(app.poll_lookup(), 0);

    let identity = app.identity().expect("booted");
    assert_eq!(identity.username.as_deref(), Some("alice"));
}
