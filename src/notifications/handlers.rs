// src/notifications/handlers.rs

use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::types::DeviceTokenRequest;
use crate::api::error::{ApiError, ApiResult, IntoApiError};
use crate::api::identity::Identity;
use crate::state::AppState;

/// Register a push token for the caller's device. Re-registering an
/// already-known token is a no-op.
pub async fn register_device_handler(
    State(state): State<Arc<AppState>>,
    Identity(user): Identity,
    Json(payload): Json<DeviceTokenRequest>,
) -> ApiResult<StatusCode> {
    if payload.token.trim().is_empty() {
        return Err(ApiError::bad_request("Token is required"));
    }

    let existing = state
        .device_tokens
        .find_by_token(&payload.token)
        .await
        .into_api_error("Failed to look up device token")?;

    if existing.is_none() {
        state
            .device_tokens
            .insert(
                &user.id,
                &payload.token,
                payload.platform.as_deref().unwrap_or("ios"),
            )
            .await
            .into_api_error("Failed to register device token")?;
    }

    Ok(StatusCode::OK)
}

pub async fn unregister_device_handler(
    State(state): State<Arc<AppState>>,
    Identity(_user): Identity,
    Json(payload): Json<DeviceTokenRequest>,
) -> ApiResult<StatusCode> {
    state
        .device_tokens
        .delete_by_token(&payload.token)
        .await
        .into_api_error("Failed to unregister device token")?;
    Ok(StatusCode::OK)
}
