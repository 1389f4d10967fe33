//! CRUD handlers, generic over the record type. Every record service is
//! the same five routes over a different payload shape, so the handlers
//! are written once against the [`Record`] trait and instantiated per
//! service by the router.

use std::collections::HashMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use models::Record;
use service::ResourceStore;
use tracing::{info, warn};

use crate::errors::ApiError;

/// GET /{resource}: snapshot of the whole collection, keyed by id.
pub async fn list_records<T: Record>(
    State(store): State<ResourceStore<T>>,
) -> Json<HashMap<String, T>> {
    Json(store.list().await)
}

/// GET /{resource}/{id}
pub async fn get_record<T: Record>(
    State(store): State<ResourceStore<T>>,
    Path(id): Path<String>,
) -> Result<Json<T>, ApiError> {
    match store.get(&id).await {
        Some(record) => Ok(Json(record)),
        None => {
            warn!(method = "GET", status = 404, kind = T::KIND, %id, "record not found");
            Err(ApiError::not_found(T::KIND))
        }
    }
}

/// POST /{resource}: decode, validate, store under the record's own id.
/// Replies 201 with the stored representation.
pub async fn create_record<T: Record>(
    State(store): State<ResourceStore<T>>,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<(StatusCode, Json<T>), ApiError> {
    let Json(record) = payload.map_err(|rejection| {
        warn!(method = "POST", status = 400, kind = T::KIND, error = %rejection, "undecodable payload");
        ApiError::invalid_payload()
    })?;
    let stored = store.create(record).await.map_err(|err| {
        warn!(method = "POST", status = 400, kind = T::KIND, error = %err, "create rejected");
        ApiError::from(err)
    })?;
    info!(method = "POST", status = 201, kind = T::KIND, id = %stored.id(), "record created");
    Ok((StatusCode::CREATED, Json(stored)))
}

/// PUT /{resource}/{id}: full replacement of an existing record. The id
/// in the path wins over whatever the body carries.
pub async fn update_record<T: Record>(
    State(store): State<ResourceStore<T>>,
    Path(id): Path<String>,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<Json<T>, ApiError> {
    let Json(record) = payload.map_err(|rejection| {
        warn!(method = "PUT", status = 400, kind = T::KIND, %id, error = %rejection, "undecodable payload");
        ApiError::invalid_payload()
    })?;
    match store.update(&id, record).await {
        Ok(updated) => {
            info!(method = "PUT", status = 200, kind = T::KIND, %id, "record replaced");
            Ok(Json(updated))
        }
        Err(err) => {
            let api = ApiError::from(err);
            warn!(method = "PUT", kind = T::KIND, %id, status = api.status().as_u16(), error = %api, "update rejected");
            Err(api)
        }
    }
}

/// DELETE /{resource}/{id}: 204 on removal, 404 when nothing was there.
pub async fn delete_record<T: Record>(
    State(store): State<ResourceStore<T>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if store.delete(&id).await {
        info!(method = "DELETE", status = 204, kind = T::KIND, %id, "record deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        warn!(method = "DELETE", status = 404, kind = T::KIND, %id, "record not found");
        Err(ApiError::not_found(T::KIND))
    }
}
