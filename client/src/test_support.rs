//! Shared test doubles for the transport and session seams.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::app::History;
use crate::net::api::ApiClient;
use crate::net::transport::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use crate::state::session::{MemoryTokenStore, Session};

// =========================================================================
// MockTransport
// =========================================================================

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push_raw(status, &body.to_string());
    }

    pub(crate) fn push_raw(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
    }

    pub(crate) fn push_network_error(&self) {
        self.push_error(TransportError::Request("connection refused".to_owned()));
    }

    pub(crate) fn push_error(&self, error: TransportError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("no mock response queued".to_owned())))
    }
}

// =========================================================================
// Harness
// =========================================================================

/// An API client wired to a mock transport, an in-memory slot and a history.
pub(crate) struct Harness {
    pub transport: Arc<MockTransport>,
    pub session: Session,
    pub history: History,
    pub api: ApiClient,
}

impl Harness {
    pub(crate) fn signed_out() -> Self {
        Self::with_session(Session::in_memory())
    }

    pub(crate) fn signed_in(token: &str) -> Self {
        Self::with_session(Session::new(Arc::new(MemoryTokenStore::with_token(token))))
    }

    fn with_session(session: Session) -> Self {
        let transport = MockTransport::new();
        let history = History::default();
        let api = ApiClient::new(transport.clone(), session.clone(), Arc::new(history.clone()));
        Self { transport, session, history, api }
    }
}
