//! Handlers for the trailer resource.
//!
//! Each handler marshals one HTTP request into a single service call and the
//! outcome back to a response; no business logic lives here. Any service
//! failure surfaces as HTTP 400 via [`crate::error::AppError`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use trailers_core::trailer::{NewTrailer, UpdateTrailer};
use trailers_core::types::DbId;

use crate::error::AppResult;
use crate::extract::Json;
use crate::state::AppState;

/// Query parameters accepted by the list operation.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Opaque filter expression, handed to the service unparsed.
    pub filters: Option<String>,
}

/// GET /api/v1/trailers
///
/// List all trailers, optionally narrowed by the `filters` query parameter.
pub async fn list_trailers(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let trailers = state.service.list(params.filters.as_deref()).await?;

    Ok(Json(trailers))
}

/// GET /api/v1/trailers/{id}
///
/// Fetch one trailer by id.
pub async fn get_trailer(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let trailer = state.service.get(id).await?;

    Ok(Json(trailer))
}

/// POST /api/v1/trailers
///
/// Create a trailer. The response carries the record with its assigned id.
pub async fn create_trailer(
    State(state): State<AppState>,
    Json(input): Json<NewTrailer>,
) -> AppResult<impl IntoResponse> {
    let trailer = state.service.create(input).await?;

    tracing::info!(trailer_id = trailer.id, "Trailer created");

    Ok(Json(trailer))
}

/// PUT /api/v1/trailers
///
/// Update an existing trailer; the target id travels in the payload.
/// Responds 200 with an empty body on success.
pub async fn update_trailer(
    State(state): State<AppState>,
    Json(input): Json<UpdateTrailer>,
) -> AppResult<impl IntoResponse> {
    let trailer_id = input.id;
    state.service.update(input).await?;

    tracing::info!(trailer_id, "Trailer updated");

    Ok(StatusCode::OK)
}

/// DELETE /api/v1/trailers/{id}
///
/// Delete a trailer by id. Responds 200 with an empty body on success.
pub async fn delete_trailer(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.service.delete(id).await?;

    tracing::info!(trailer_id = id, "Trailer deleted");

    Ok(StatusCode::OK)
}
