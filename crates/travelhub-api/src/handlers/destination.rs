//! Public catalog handlers and review submission.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use crate::dto::request::{DestinationQuery, ReviewRequest};
use crate::dto::response::{DestinationResponse, MetaResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, JsonBody, parse_destination_id};
use crate::state::AppState;

/// GET /api/destinations
pub async fn list_destinations(
    State(state): State<AppState>,
    Query(query): Query<DestinationQuery>,
) -> ApiResult<Json<Vec<DestinationResponse>>> {
    let filter = query.into_filter()?;
    let destinations = state.catalog.query(filter).await?;
    Ok(Json(destinations.into_iter().map(Into::into).collect()))
}

/// GET /api/destinations/meta
pub async fn destination_meta(State(state): State<AppState>) -> ApiResult<Json<MetaResponse>> {
    let meta = state.catalog.meta().await?;
    Ok(Json(meta.into()))
}

/// GET /api/destinations/{id}
pub async fn get_destination(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DestinationResponse>> {
    let id = parse_destination_id(&id)?;
    let destination = state.catalog.get(id).await?;
    Ok(Json(destination.into()))
}

/// POST /api/destinations/{id}/review
pub async fn submit_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<ReviewRequest>,
) -> ApiResult<(StatusCode, Json<DestinationResponse>)> {
    let id = parse_destination_id(&id)?;
    // A missing rating fails the range check.
    let submission = state
        .reviews
        .submit(auth.context(), id, req.rating.unwrap_or(0), req.comment)
        .await?;
    Ok((StatusCode::CREATED, Json(submission.destination.into())))
}
