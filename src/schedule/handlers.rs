// src/schedule/handlers.rs

use axum::{Json, extract::State};
use serde::Deserialize;
use std::sync::Arc;

use super::types::ScheduleResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::identity::Identity;
use crate::households::Role;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    pub text: String,
}

/// Interpret free text into chores, events, medications and groceries.
/// Guardians only. Interpreter failures come back as a message in the 200
/// response, never as an HTTP error.
pub async fn process_schedule_handler(
    State(state): State<Arc<AppState>>,
    Identity(user): Identity,
    Json(payload): Json<ScheduleRequest>,
) -> ApiResult<Json<ScheduleResponse>> {
    if user.role != Role::Guardian {
        return Err(ApiError::forbidden("Guardian role required"));
    }
    if payload.text.trim().is_empty() {
        return Err(ApiError::bad_request("Input text is required"));
    }

    let response = state
        .schedule
        .process_schedule_text(&payload.text, &user)
        .await;

    Ok(Json(response))
}
