//! Test doubles shared by the unit test modules.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::http::{HttpRequest, HttpResponse, Transport, TransportError};

/// Transport double that records every request and replays scripted
/// responses in order.
pub(crate) struct FakeTransport {
    requests: RefCell<Vec<HttpRequest>>,
    responses: RefCell<Vec<Result<HttpResponse, TransportError>>>,
}

impl FakeTransport {
    pub(crate) fn returning(status: u16, body: &str) -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            responses: RefCell::new(vec![Ok(HttpResponse {
                status,
                body: body.to_string(),
            })]),
        }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            responses: RefCell::new(vec![Err(TransportError(message.to_string()))]),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request sent")
    }
}

impl Transport for &FakeTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        self.responses.borrow_mut().remove(0)
    }
}

/// Configuration with both the API URL and token present.
pub(crate) fn configured() -> HashMap<String, String> {
    let mut config = HashMap::new();
    config.insert(
        "cachet.api_url".to_string(),
        "https://status.example.com".to_string(),
    );
    config.insert("cachet.api_token".to_string(), "secret".to_string());
    config
}
