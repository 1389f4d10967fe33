use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::http::{header, HeaderMap, Method, Response};
use tracing::debug;

use crate::errors::GatewayError;

/// Hop-by-hop headers (RFC 7230 section 6.1) belong to a single
/// connection and must not be relayed to the other leg.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

fn is_hop_by_hop(name: &str) -> bool {
    HOP_BY_HOP.iter().any(|h| name.eq_ignore_ascii_case(h))
}

/// Outbound HTTP leg of the gateway: one pooled client for the process,
/// built at startup.
#[derive(Clone)]
pub struct Forwarder {
    client: reqwest::Client,
}

impl Forwarder {
    /// Connection pooling and keep-alive only; no request timeout is set.
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .tcp_keepalive(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()?;
        Ok(Self { client })
    }

    /// Issue the downstream request with the inbound method, headers and
    /// body, then rebuild the backend's reply for the caller: status and
    /// body byte-for-byte, headers minus the hop-by-hop set. Whatever the
    /// backend answers, success or error, is relayed as-is.
    pub async fn forward(
        &self,
        method: Method,
        target_url: &str,
        headers: &HeaderMap,
        body: Bytes,
    ) -> Result<Response<Body>, GatewayError> {
        let mut outbound = self.client.request(method, target_url);

        // Host is recomputed by the client for the new authority
        for (name, value) in headers.iter() {
            if name == &header::HOST || is_hop_by_hop(name.as_str()) {
                continue;
            }
            outbound = outbound.header(name, value);
        }
        if !body.is_empty() {
            outbound = outbound.body(body);
        }

        let upstream = outbound
            .send()
            .await
            .map_err(|e| GatewayError::Upstream(e.to_string()))?;

        let status = upstream.status();
        let mut response = Response::builder().status(status);
        for (name, value) in upstream.headers().iter() {
            if is_hop_by_hop(name.as_str()) {
                continue;
            }
            response = response.header(name, value);
        }

        let body_bytes = upstream
            .bytes()
            .await
            .map_err(|e| GatewayError::Upstream(e.to_string()))?;
        debug!(status = status.as_u16(), bytes = body_bytes.len(), "relaying upstream response");

        response
            .body(Body::from(body_bytes))
            .map_err(|e| GatewayError::Internal(format!("failed to build response: {}", e)))
    }
}
