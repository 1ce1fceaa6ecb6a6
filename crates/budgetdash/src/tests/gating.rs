//! Admin-control gating tests

use budgetdash_core::identity::Role;

use crate::ui::{AdminControl, ControlKind, DIM_CLASS, gate_admin_controls};

fn sample_controls() -> Vec<AdminControl> {
    vec![
        AdminControl::new("bulk-assign", ControlKind::Form),
        AdminControl::new("admin-page-link", ControlKind::Link),
    ]
}

#[test]
fn admins_keep_every_control_enabled() {
    assert!(gate_admin_controls(Role::Admin, &sample_controls()).is_empty());
}

#[test]
fn non_admins_get_one_lockdown_per_control() {
    for role in [Role::Manager, Role::User] {
        let lockdowns = gate_admin_controls(role, &sample_controls());
        assert_eq!(lockdowns.len(), 2, "role: {role}");
        for lockdown in &lockdowns {
            assert_eq!(lockdown.dim_class, DIM_CLASS);
            assert!(lockdown.suppress_pointer_events);
        }
    }
}

#[test]
fn aria_disabled_only_for_elements_without_a_native_disabled_state() {
    let lockdowns = gate_admin_controls(Role::User, &sample_controls());
    assert_eq!(lockdowns[0].control_id, "bulk-assign");
    assert!(!lockdowns[0].aria_disabled);
    assert_eq!(lockdowns[1].control_id, "admin-page-link");
    assert!(lockdowns[1].aria_disabled);
}

#[test]
fn no_controls_means_no_lockdowns() {
    assert!(gate_admin_controls(Role::User, &[]).is_empty());
}
