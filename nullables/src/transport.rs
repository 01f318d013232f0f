//! Nullable transport: records requests without sending them.

use std::collections::VecDeque;
use std::sync::Mutex;

use zum_types::{HttpRequest, Transport, TransportError};

/// A test transport that records requests instead of sending them.
///
/// Responses are served from a queue; once it is empty every call returns
/// an empty body. Thread-safe so a client using it stays `Sync`.
pub struct NullTransport {
    /// All requests "sent" through this transport.
    requests: Mutex<Vec<HttpRequest>>,
    /// Outcomes to return, in order.
    responses: Mutex<VecDeque<Result<Vec<u8>, TransportError>>>,
}

impl NullTransport {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
        }
    }

    /// Queue a successful response body.
    pub fn enqueue_body(&self, body: impl Into<Vec<u8>>) {
        self.responses.lock().unwrap().push_back(Ok(body.into()));
    }

    /// Queue a transport failure.
    pub fn enqueue_error(&self, error: TransportError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Get all recorded requests (for assertions).
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Clear all state.
    pub fn reset(&self) {
        self.requests.lock().unwrap().clear();
        self.responses.lock().unwrap().clear();
    }
}

impl Default for NullTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for NullTransport {
    fn execute(&self, request: &HttpRequest) -> Result<Vec<u8>, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
