//! Admin-control gating.
//!
//! Elements carrying the `admin-control` marker class are disabled for
//! anyone who is not an admin. Form controls have a native disabled
//! state; links do not and get an `aria-disabled` attribute instead. Both
//! kinds are dimmed and stop receiving pointer events.

use budgetdash_core::identity::Role;

/// CSS class that dims a disabled control.
pub const DIM_CLASS: &str = "disabled";
/// Marker class the templates put on admin-only elements.
pub const ADMIN_CONTROL_CLASS: &str = "admin-control";

/// Whether an element has a native disabled state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// select/input/button: `disabled` is a real property
    Form,
    /// anchors and other non-form elements
    Link,
}

/// One element flagged as admin-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminControl {
    /// Element id (or a positional label when the element has none);
    /// informational, gating is positional.
    pub id: String,
    pub kind: ControlKind,
}

impl AdminControl {
    pub fn new(id: impl Into<String>, kind: ControlKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }
}

/// The visual/functional lockdown applied to one control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disablement {
    pub control_id: String,
    /// Class added to dim the element.
    pub dim_class: &'static str,
    /// `pointer-events: none` so clicks never land.
    pub suppress_pointer_events: bool,
    /// Set only for elements without a native disabled state.
    pub aria_disabled: bool,
}

/// Compute the lockdowns for the viewer's role: none for admins, one per
/// flagged control for everyone else.
pub fn gate_admin_controls(role: Role, controls: &[AdminControl]) -> Vec<Disablement> {
    if role == Role::Admin {
        return Vec::new();
    }
    controls
        .iter()
        .map(|control| Disablement {
            control_id: control.id.clone(),
            dim_class: DIM_CLASS,
            suppress_pointer_events: true,
            aria_disabled: control.kind == ControlKind::Link,
        })
        .collect()
}
