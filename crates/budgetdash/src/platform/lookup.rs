//! Manager-id lookup abstraction.
//!
//! The lookup is fire-and-forget: the page boot sends one request and
//! keeps going; whenever the response arrives it is applied to the
//! preference store. There is no retry, no timeout beyond the HTTP
//! client's own, and no cancellation.

use serde::Deserialize;

/// Request sent to the lookup worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    /// Resolve the manager id for a username
    ManagerId { username: String },
    /// Graceful shutdown
    Shutdown,
}

/// Response from the lookup worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResponse {
    /// The server answered; `None` means the user has no manager record.
    ManagerId { manager_id: Option<String> },
    /// The request failed (network, HTTP status, or bad payload).
    Failed(String),
}

/// JSON body of the manager-id endpoint.
#[derive(Debug, Deserialize)]
pub struct ManagerIdResponse {
    #[serde(default)]
    pub manager_id: Option<String>,
}

/// Path of the manager-id endpoint, relative to the API base.
pub fn manager_id_path(username: &str) -> String {
    format!("/api/managers/get_manager_id/{username}")
}

/// Platform-independent lookup interface.
///
/// `send` must not block. On native the work runs on a background thread
/// and responses are drained with `try_recv`; the web implementation
/// applies responses itself when its spawned future completes, so its
/// `try_recv` always returns `None`.
pub trait ManagerLookup {
    /// Queue a lookup request. Returns true if the request was accepted.
    fn send(&self, request: LookupRequest) -> bool;

    /// Try to receive a response (non-blocking).
    fn try_recv(&self) -> Option<LookupResponse>;

    /// Shut down the worker.
    fn shutdown(&self);
}
