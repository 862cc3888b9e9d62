//! Scripted transport for tests

use crate::transport::{HttpResponse, Transport, TransportError};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays queued responses in order and records every requested URL
#[derive(Debug, Default)]
pub(crate) struct FakeTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 response with a JSON body
    pub(crate) fn ok(self, body: serde_json::Value) -> Self {
        self.respond(200, "OK", &body.to_string())
    }

    /// Queue a response with an arbitrary status and raw body
    pub(crate) fn respond(self, status: u16, status_text: &str, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        }));
        self
    }

    /// Queue a transport failure
    pub(crate) fn fail(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError::Connection(message.to_string())));
        self
    }

    /// URLs requested so far, in order
    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for FakeTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Connection(format!("unexpected request: {}", url))))
    }
}
