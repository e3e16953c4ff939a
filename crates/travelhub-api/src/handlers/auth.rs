//! Auth handlers: register, login, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use travelhub_service::account::Registration;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{AuthResponse, UserResponse};
use crate::error::{ApiResult, validation_error};
use crate::extractors::{AuthUser, JsonBody};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    req.validate().map_err(validation_error)?;
    let session = state
        .accounts
        .register(Registration {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse::new(session.user, session.token)),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    req.validate().map_err(validation_error)?;
    let session = state.accounts.login(&req.email, &req.password).await?;
    Ok(Json(AuthResponse::new(session.user, session.token)))
}

/// GET /api/auth/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<UserResponse>> {
    let user = state.accounts.me(auth.context()).await?;
    Ok(Json(user.into()))
}
