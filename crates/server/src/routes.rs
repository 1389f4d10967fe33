use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use common::types::Health;
use models::Record;
use service::ResourceStore;

use crate::handlers;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full router for one record service: a health probe plus the
/// five CRUD routes over the injected store.
pub fn service_router<T: Record>(store: ResourceStore<T>) -> Router {
    let collection = format!("/{}", T::RESOURCE);
    let item = format!("/{}/:id", T::RESOURCE);

    Router::new()
        .route("/health", get(health))
        .route(
            &collection,
            get(handlers::list_records::<T>).post(handlers::create_record::<T>),
        )
        .route(
            &item,
            get(handlers::get_record::<T>)
                .put(handlers::update_record::<T>)
                .delete(handlers::delete_record::<T>),
        )
        .with_state(store)
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
