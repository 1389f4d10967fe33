use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::{debug, warn, Level};

use common::types::Health;

use crate::errors::GatewayError;
use crate::forward::Forwarder;
use crate::table::RouteTable;

/// Shared gateway state: the injected dispatch table and the outbound
/// client. The gateway keeps no per-request state.
#[derive(Clone)]
pub struct GatewayState {
    pub table: RouteTable,
    pub forwarder: Forwarder,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the gateway router: a local health probe plus a catch-all
/// dispatcher covering every method and path.
pub fn gateway_router(state: GatewayState) -> Router {
    Router::new()
        .route("/health", get(health))
        .fallback(dispatch)
        .with_state(state)
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
}

async fn dispatch(State(state): State<GatewayState>, req: Request) -> Response {
    match relay(state, req).await {
        Ok(response) => response,
        Err(err) => {
            warn!(status = err.status().as_u16(), error = %err, "dispatch failed");
            err.into_response()
        }
    }
}

/// Resolve the first path segment against the table and relay the request
/// to the matching backend; the path remainder and query string pass
/// through unchanged. Unknown selectors answer locally; no outbound
/// request is made.
async fn relay(state: GatewayState, req: Request) -> Result<Response, GatewayError> {
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);

    let (selector, rest) = split_path(&path);
    if selector.is_empty() {
        return Err(GatewayError::UnknownService(path.clone()));
    }
    let Some(base) = state.table.resolve(selector) else {
        return Err(GatewayError::UnknownService(selector.to_string()));
    };
    let target = RouteTable::downstream_url(base, rest, query.as_deref());

    let method = req.method().clone();
    let headers = req.headers().clone();
    let body = to_bytes(req.into_body(), usize::MAX)
        .await
        .map_err(|e| GatewayError::BadRequest(format!("failed to read request body: {}", e)))?;

    debug!(%method, selector, target = %target, "forwarding");
    state.forwarder.forward(method, &target, &headers, body).await
}

/// First path segment and the remainder after it: `/products/42` splits
/// into `("products", "42")`, `/products` into `("products", "")`.
fn split_path(path: &str) -> (&str, &str) {
    let trimmed = path.trim_start_matches('/');
    match trimmed.split_once('/') {
        Some((selector, rest)) => (selector, rest),
        None => (trimmed, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_selector_from_remainder() {
        assert_eq!(split_path("/products/42"), ("products", "42"));
        assert_eq!(split_path("/products"), ("products", ""));
        assert_eq!(split_path("/orders/9/items"), ("orders", "9/items"));
        assert_eq!(split_path("/"), ("", ""));
    }
}
