//! Web entry point.
//!
//! Runs the page-load sequence against the live document: cookies come
//! from `document.cookie`, preferences live in LocalStorage, and the boot
//! result is applied to the `base-title` heading, the login/logout links,
//! and every `admin-control` element.

use budgetdash_core::cookies::CookieJar;
use budgetdash_core::filters::FilterKeyMap;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlDocument, HtmlElement};

use crate::boot::{PageBoot, boot_page};
use crate::platform::web::{WebLookup, WebPreferences};
use crate::ui::{ADMIN_CONTROL_CLASS, AdminControl, ControlKind};

/// Tags whose elements carry a native `disabled` property.
const FORM_TAGS: [&str; 5] = ["input", "select", "button", "textarea", "option"];

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let header = document
        .dyn_ref::<HtmlDocument>()
        .and_then(|d| d.cookie().ok())
        .unwrap_or_default();
    let jar = CookieJar::parse(&header);

    let mut prefs = WebPreferences::new();
    // Same-origin API; the lookup applies its own response when it lands.
    let lookup = WebLookup::new(String::new(), FilterKeyMap::default());

    let elements = admin_control_elements(&document);
    let controls = classify_controls(&elements);

    let boot = boot_page(&jar, &mut prefs, &lookup, &controls);
    apply_boot(&document, &boot, &elements);
    Ok(())
}

/// Live `admin-control` elements, in document order.
fn admin_control_elements(document: &Document) -> Vec<Element> {
    let collection = document.get_elements_by_class_name(ADMIN_CONTROL_CLASS);
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}

fn classify_controls(elements: &[Element]) -> Vec<AdminControl> {
    elements
        .iter()
        .enumerate()
        .map(|(i, el)| {
            let tag = el.tag_name().to_lowercase();
            let kind = if FORM_TAGS.contains(&tag.as_str()) {
                ControlKind::Form
            } else {
                ControlKind::Link
            };
            let id = if el.id().is_empty() {
                format!("{ADMIN_CONTROL_CLASS}[{i}]")
            } else {
                el.id()
            };
            AdminControl::new(id, kind)
        })
        .collect()
}

/// Write the boot result into the page.
fn apply_boot(document: &Document, boot: &PageBoot, elements: &[Element]) {
    set_text(document, "base-title", boot.title);
    set_display(document, "login-link", boot.login_visible);
    set_display(document, "logout-link", boot.logout_visible);

    // Disablements are positional over the same element list the
    // controls were classified from.
    for (element, lockdown) in elements.iter().zip(&boot.disablements) {
        if let Err(e) = element.class_list().add_1(lockdown.dim_class) {
            tracing::warn!(?e, "failed to add dim class");
        }
        if lockdown.aria_disabled {
            let _ = element.set_attribute("aria-disabled", "true");
        }
        if lockdown.suppress_pointer_events {
            if let Some(html) = element.dyn_ref::<HtmlElement>() {
                let _ = html.style().set_property("pointer-events", "none");
            }
        }
    }
}

fn set_text(document: &Document, id: &str, text: &str) {
    match document.get_element_by_id(id) {
        Some(el) => {
            if let Some(html) = el.dyn_ref::<HtmlElement>() {
                html.set_inner_text(text);
            }
        }
        None => tracing::warn!(id, "expected element missing from page"),
    }
}

fn set_display(document: &Document, id: &str, visible: bool) {
    let display = if visible { "block" } else { "none" };
    match document.get_element_by_id(id) {
        Some(el) => {
            if let Some(html) = el.dyn_ref::<HtmlElement>() {
                let _ = html.style().set_property("display", display);
            }
        }
        None => tracing::warn!(id, "expected element missing from page"),
    }
}
