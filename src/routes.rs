//! Router assembly for the static host.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client is a single-page app: every path that is not a real file is
//! answered with `index.html` so the client router can resolve it, including
//! its own not-found page. A host allow-list keeps the server from answering
//! for arbitrary `Host` headers.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::net::IpAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;

/// Hostnames admitted in addition to localhost and IP literals.
#[derive(Clone, Debug, Default)]
pub struct AllowedHosts(Arc<[String]>);

impl AllowedHosts {
    pub fn new(hosts: Vec<String>) -> Self {
        Self(hosts.into())
    }

    /// `hostname` is the `Host` header without port, already lowercased.
    pub fn permits(&self, hostname: &str) -> bool {
        if self.0.is_empty() || is_local(hostname) {
            return true;
        }
        self.0.iter().any(|allowed| match allowed.strip_prefix('.') {
            Some(domain) => hostname == domain || hostname.ends_with(allowed.as_str()),
            None => hostname == allowed,
        })
    }
}

fn is_local(hostname: &str) -> bool {
    hostname == "localhost" || hostname.ends_with(".localhost") || hostname.parse::<IpAddr>().is_ok()
}

/// Lowercased hostname from a `Host` header value, port and IPv6 brackets removed.
fn hostname(raw: &str) -> String {
    let raw = raw.trim();
    let name = match raw.strip_prefix('[') {
        Some(rest) => rest.split(']').next().unwrap_or(rest),
        None => raw.split(':').next().unwrap_or(raw),
    };
    name.to_ascii_lowercase()
}

fn blocked_message(hostname: &str) -> String {
    format!("Blocked request. This host (\"{hostname}\") is not allowed.")
}

async fn check_host(State(allowed): State<AllowedHosts>, request: Request, next: Next) -> Response {
    let name = request
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(hostname)
        .unwrap_or_default();
    if allowed.permits(&name) {
        return next.run(request).await;
    }
    tracing::warn!(host = %name, "blocked request for host outside allow-list");
    (StatusCode::FORBIDDEN, blocked_message(&name)).into_response()
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Static client bundle with SPA fallback, health check, and host filtering.
pub fn app(config: &HostConfig) -> Router {
    let index = config.static_dir.join("index.html");
    let client = ServeDir::new(&config.static_dir).fallback(ServeFile::new(index));
    let allowed = AllowedHosts::new(config.allowed_hosts.clone());

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(client)
        .layer(middleware::from_fn_with_state(allowed, check_host))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
