//! Native lookup worker: background thread + blocking HTTP client.

use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::platform::lookup::{
    LookupRequest, LookupResponse, ManagerIdResponse, ManagerLookup, manager_id_path,
};

/// Lookup worker that performs manager-id requests on a background thread
/// so the page boot never blocks on the network.
pub struct HttpLookupWorker {
    request_tx: Sender<LookupRequest>,
    response_rx: Receiver<LookupResponse>,
    thread: Option<JoinHandle<()>>,
}

impl HttpLookupWorker {
    /// Create a worker talking to the API at `api_base`
    /// (e.g. `http://localhost:8000`).
    pub fn new(api_base: String) -> Self {
        let (request_tx, request_rx) = channel::<LookupRequest>();
        let (response_tx, response_rx) = channel::<LookupResponse>();

        let thread = thread::spawn(move || {
            let client = Client::new();
            for request in request_rx {
                match request {
                    LookupRequest::Shutdown => break,
                    LookupRequest::ManagerId { username } => {
                        let response = fetch_manager_id(&client, &api_base, &username);
                        if response_tx.send(response).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Self {
            request_tx,
            response_rx,
            thread: Some(thread),
        }
    }
}

/// One POST to the manager-id endpoint, empty JSON body.
fn fetch_manager_id(client: &Client, api_base: &str, username: &str) -> LookupResponse {
    let url = format!("{}{}", api_base.trim_end_matches('/'), manager_id_path(username));
    let result = client
        .post(&url)
        .header(CONTENT_TYPE, "application/json")
        .send();

    let response = match result {
        Ok(r) => r,
        Err(e) => return LookupResponse::Failed(e.to_string()),
    };
    if !response.status().is_success() {
        return LookupResponse::Failed(format!("HTTP {}", response.status()));
    }
    match response.json::<ManagerIdResponse>() {
        Ok(body) => LookupResponse::ManagerId {
            manager_id: body.manager_id,
        },
        Err(e) => LookupResponse::Failed(e.to_string()),
    }
}

impl ManagerLookup for HttpLookupWorker {
    fn send(&self, request: LookupRequest) -> bool {
        self.request_tx.send(request).is_ok()
    }

    fn try_recv(&self) -> Option<LookupResponse> {
        self.response_rx.try_recv().ok()
    }

    fn shutdown(&self) {
        let _ = self.request_tx.send(LookupRequest::Shutdown);
    }
}

impl Drop for HttpLookupWorker {
    fn drop(&mut self) {
        self.shutdown();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
