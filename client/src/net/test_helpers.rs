//! Recording transport for exercising the gateway without a network.

use std::cell::RefCell;

use super::api::{AuthError, AuthGateway};
use super::transport::{HttpResponse, Transport};

pub const TEST_BASE_URL: &str = "https://api.test";

/// Replies with a canned response and records every request it receives.
pub struct FakeTransport {
    reply: Result<HttpResponse, AuthError>,
    requests: RefCell<Vec<(String, serde_json::Value)>>,
}

impl FakeTransport {
    pub fn replying(status: u16, body: serde_json::Value) -> Self {
        Self::with_reply(Ok(HttpResponse::new(status, body.to_string())))
    }

    pub fn replying_raw(status: u16, body: &str) -> Self {
        Self::with_reply(Ok(HttpResponse::new(status, body)))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_reply(Err(AuthError::Transport(message.to_owned())))
    }

    fn with_reply(reply: Result<HttpResponse, AuthError>) -> Self {
        Self { reply, requests: RefCell::new(Vec::new()) }
    }

    pub fn requests(&self) -> Vec<(String, serde_json::Value)> {
        self.requests.borrow().clone()
    }
}

impl Transport for FakeTransport {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpResponse, AuthError> {
        self.requests.borrow_mut().push((url.to_owned(), body.clone()));
        self.reply.clone()
    }
}

pub fn gateway(transport: FakeTransport) -> AuthGateway<FakeTransport> {
    AuthGateway::new(TEST_BASE_URL, transport)
}
