//! Outbound HTTP seam for the auth gateway.
//!
//! Client-side (csr): real requests via `gloo-net`.
//! Native builds: a stub that reports the call as unavailable, so the
//! gateway logic compiles and is tested without a browser.

#![allow(clippy::unused_async)]

use super::api::AuthError;

/// Status and raw body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON `POST` and waits for one response. No retry, no timeout.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns [`AuthError::Transport`] when the request cannot be sent or
    /// the response body cannot be read.
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpResponse, AuthError>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpResponse, AuthError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(url)
                .json(body)
                .map_err(|e| AuthError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| AuthError::Transport(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, body);
            Err(AuthError::Transport("not available outside the browser".to_owned()))
        }
    }
}
