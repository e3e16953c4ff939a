//! Admin handlers for catalog maintenance and booking oversight.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use crate::dto::request::{DestinationRequest, StatusRequest};
use crate::dto::response::{BookingResponse, DestinationResponse, MessageResponse};
use crate::error::{ApiResult, validation_error};
use crate::extractors::{AuthUser, JsonBody, parse_booking_id, parse_destination_id};
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/admin/destinations
pub async fn list_destinations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<DestinationResponse>>> {
    require_admin(&auth)?;
    let destinations = state.catalog.list_all(auth.context()).await?;
    Ok(Json(destinations.into_iter().map(Into::into).collect()))
}

/// POST /api/admin/destinations
pub async fn create_destination(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(req): JsonBody<DestinationRequest>,
) -> ApiResult<(StatusCode, Json<DestinationResponse>)> {
    require_admin(&auth)?;
    let created = state
        .catalog
        .create(auth.context(), req.into_input())
        .await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// PUT /api/admin/destinations/{id}
pub async fn update_destination(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<DestinationRequest>,
) -> ApiResult<Json<DestinationResponse>> {
    require_admin(&auth)?;
    let id = parse_destination_id(&id)?;
    let updated = state
        .catalog
        .update(auth.context(), id, req.into_input())
        .await?;
    Ok(Json(updated.into()))
}

/// DELETE /api/admin/destinations/{id}
pub async fn delete_destination(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    require_admin(&auth)?;
    let id = parse_destination_id(&id)?;
    state.catalog.delete(auth.context(), id).await?;
    Ok(Json(MessageResponse {
        message: "Destination removed".to_string(),
    }))
}

/// GET /api/admin/bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<BookingResponse>>> {
    require_admin(&auth)?;
    let bookings = state.bookings.list_all(auth.context()).await?;
    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}

/// PUT /api/admin/bookings/{id}/status
pub async fn update_booking_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<StatusRequest>,
) -> ApiResult<Json<BookingResponse>> {
    require_admin(&auth)?;
    let id = parse_booking_id(&id)?;
    req.validate().map_err(validation_error)?;
    let details = state
        .bookings
        .update_status(auth.context(), id, &req.status)
        .await?;
    Ok(Json(details.into()))
}
