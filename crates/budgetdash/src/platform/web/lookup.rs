//! Web lookup implementation using browser fetch.
//!
//! The browser has no background thread to poll, so this implementation
//! applies the response to LocalStorage itself when the spawned future
//! completes. `try_recv` consequently always returns `None`.

use budgetdash_core::filters::FilterKeyMap;
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;

use crate::boot::apply_lookup_response;
use crate::platform::lookup::{
    LookupRequest, LookupResponse, ManagerIdResponse, ManagerLookup, manager_id_path,
};
use crate::platform::web::WebPreferences;

/// Fetch-based lookup. `api_base` is usually empty (same origin).
pub struct WebLookup {
    api_base: String,
    filter_keys: FilterKeyMap,
}

impl WebLookup {
    pub fn new(api_base: String, filter_keys: FilterKeyMap) -> Self {
        Self {
            api_base,
            filter_keys,
        }
    }
}

async fn fetch_manager_id(api_base: &str, username: &str) -> LookupResponse {
    let url = format!("{}{}", api_base.trim_end_matches('/'), manager_id_path(username));
    let result = Request::post(&url)
        .header("Content-Type", "application/json")
        .send()
        .await;

    let response = match result {
        Ok(r) => r,
        Err(e) => return LookupResponse::Failed(e.to_string()),
    };
    if !response.ok() {
        return LookupResponse::Failed(format!("HTTP {}", response.status()));
    }
    match response.json::<ManagerIdResponse>().await {
        Ok(body) => LookupResponse::ManagerId {
            manager_id: body.manager_id,
        },
        Err(e) => LookupResponse::Failed(e.to_string()),
    }
}

impl ManagerLookup for WebLookup {
    fn send(&self, request: LookupRequest) -> bool {
        let LookupRequest::ManagerId { username } = request else {
            return true;
        };
        let api_base = self.api_base.clone();
        let filter_keys = self.filter_keys.clone();
        spawn_local(async move {
            let response = fetch_manager_id(&api_base, &username).await;
            apply_lookup_response(response, &mut WebPreferences::new(), &filter_keys);
        });
        true
    }

    fn try_recv(&self) -> Option<LookupResponse> {
        None
    }

    fn shutdown(&self) {}
}
