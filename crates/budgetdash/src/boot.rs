//! Page-load orchestration.
//!
//! One linear sequence per page view: resolve role and username, pick the
//! title, toggle the login/logout links, kick off (or clear) the manager
//! id, and lock down admin-only controls. Role and username resolve
//! first; the lookup and the gating depend on them.

use budgetdash_core::cookies::CookieJar;
use budgetdash_core::filters::{FilterKeyMap, MANAGER_ID_KEY};
use budgetdash_core::identity::{self, Identity, Role};

use crate::platform::{
    LookupRequest, LookupResponse, ManagerLookup, Preferences, set_manager_filters,
};
use crate::ui::{AdminControl, Disablement, gate_admin_controls};

pub const ADMIN_TITLE: &str = "Admin Dashboard - Task Manager";
pub const MANAGER_TITLE: &str = "Manager Dashboard - Task Manager";
pub const USER_TITLE: &str = "User Dashboard - Task Manager";

/// Everything the page shell needs after boot, as a plain value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBoot {
    pub identity: Identity,
    /// Text for the `base-title` heading.
    pub title: &'static str,
    pub login_visible: bool,
    pub logout_visible: bool,
    /// True when a manager-id lookup was dispatched.
    pub lookup_sent: bool,
    /// Lockdowns for the `admin-control` elements, in element order.
    pub disablements: Vec<Disablement>,
}

/// Title text for a role.
pub fn title_for(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_TITLE,
        Role::Manager => MANAGER_TITLE,
        Role::User => USER_TITLE,
    }
}

/// Run the page-load sequence once.
///
/// Managers get a fire-and-forget manager-id lookup for their username;
/// everyone else has the `manager_id` slot removed unconditionally. A
/// malformed user cookie demotes the viewer to anonymous with a warning
/// instead of failing the page.
pub fn boot_page<P, L>(
    jar: &CookieJar,
    prefs: &mut P,
    lookup: &L,
    controls: &[AdminControl],
) -> PageBoot
where
    P: Preferences,
    L: ManagerLookup,
{
    let role = Role::resolve(jar);
    let username = match identity::username(jar) {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!(error = %e, "malformed user cookie, treating viewer as anonymous");
            None
        }
    };
    let identity = Identity::new(role, username);
    tracing::info!(role = %identity.role, logged_in = identity.is_logged_in(), "page boot");

    let logout_visible = identity.is_logged_in();
    let login_visible = !logout_visible;

    let mut lookup_sent = false;
    if identity.role == Role::Manager {
        match &identity.username {
            Some(username) => {
                lookup_sent = lookup.send(LookupRequest::ManagerId {
                    username: username.clone(),
                });
                if !lookup_sent {
                    tracing::error!("lookup worker rejected the manager-id request");
                }
            }
            None => {
                // A manager flag without a username has nothing to look
                // up; leave stored filters as they are.
                tracing::warn!("manager role without a username, skipping manager-id lookup");
            }
        }
    } else {
        prefs.remove(MANAGER_ID_KEY);
    }

    let disablements = gate_admin_controls(identity.role, controls);

    PageBoot {
        title: title_for(identity.role),
        identity,
        login_visible,
        logout_visible,
        lookup_sent,
        disablements,
    }
}

/// Apply a completed lookup to the preference store.
///
/// A resolved id lands in the dedicated `manager_id` slot and in every
/// per-page filter key. A failure is logged and the store is left
/// untouched — no retry, no user-visible error.
pub fn apply_lookup_response<P: Preferences>(
    response: LookupResponse,
    prefs: &mut P,
    filter_keys: &FilterKeyMap,
) {
    match response {
        LookupResponse::ManagerId {
            manager_id: Some(id),
        } => {
            if let Err(e) = prefs.set(MANAGER_ID_KEY, &id) {
                tracing::warn!(error = %e, "failed to store manager id");
            }
            set_manager_filters(prefs, filter_keys, &id);
            tracing::info!(manager_id = %id, "manager filters updated");
        }
        LookupResponse::ManagerId { manager_id: None } => {
            tracing::debug!("no manager record for this user");
        }
        LookupResponse::Failed(reason) => {
            tracing::error!(%reason, "manager id lookup failed");
        }
    }
}
