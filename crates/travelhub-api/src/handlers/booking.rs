//! Booking handlers for travellers. Admins may call these too.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use crate::dto::request::{CreateBookingRequest, PaymentRequest, StatusRequest};
use crate::dto::response::BookingResponse;
use crate::error::{ApiResult, validation_error};
use crate::extractors::{AuthUser, JsonBody, parse_booking_id, parse_user_id};
use crate::state::AppState;

/// POST /api/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(req): JsonBody<CreateBookingRequest>,
) -> ApiResult<(StatusCode, Json<BookingResponse>)> {
    req.validate().map_err(validation_error)?;
    let input = req.into_input()?;
    let details = state.bookings.create(auth.context(), input).await?;
    Ok((StatusCode::CREATED, Json(details.into())))
}

/// GET /api/bookings/{id}
pub async fn get_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<BookingResponse>> {
    let id = parse_booking_id(&id)?;
    let details = state.bookings.get(auth.context(), id).await?;
    Ok(Json(details.into()))
}

/// PUT /api/bookings/{id}/cancel
pub async fn cancel_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<BookingResponse>> {
    let id = parse_booking_id(&id)?;
    let details = state.bookings.cancel(auth.context(), id).await?;
    Ok(Json(details.into()))
}

/// PUT /api/bookings/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<StatusRequest>,
) -> ApiResult<Json<BookingResponse>> {
    let id = parse_booking_id(&id)?;
    req.validate().map_err(validation_error)?;
    let details = state
        .bookings
        .update_status(auth.context(), id, &req.status)
        .await?;
    Ok(Json(details.into()))
}

/// PUT /api/bookings/{id}/payment
pub async fn update_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<PaymentRequest>,
) -> ApiResult<Json<BookingResponse>> {
    let id = parse_booking_id(&id)?;
    let details = state
        .bookings
        .update_payment(auth.context(), id, req.into())
        .await?;
    Ok(Json(details.into()))
}

/// GET /api/bookings/user/{id}
pub async fn list_user_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<BookingResponse>>> {
    let user_id = parse_user_id(&user_id)?;
    let bookings = state.bookings.list_for_user(auth.context(), user_id).await?;
    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}
