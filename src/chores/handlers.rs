// src/chores/handlers.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::collections::HashMap;
use std::sync::Arc;

use super::types::{Chore, CreateChoreRequest, NewChore};
use crate::api::error::{ApiResult, IntoApiError, IntoApiErrorOption};
use crate::api::identity::Identity;
use crate::state::AppState;

pub async fn list_chores_handler(
    State(state): State<Arc<AppState>>,
    Identity(user): Identity,
) -> ApiResult<Json<Vec<Chore>>> {
    let chores = state
        .chores
        .list(&user.household_id)
        .await
        .into_api_error("Failed to list chores")?;
    Ok(Json(chores))
}

pub async fn list_pending_chores_handler(
    State(state): State<Arc<AppState>>,
    Identity(user): Identity,
) -> ApiResult<Json<Vec<Chore>>> {
    let chores = state
        .chores
        .list_by_completed(&user.household_id, false)
        .await
        .into_api_error("Failed to list pending chores")?;
    Ok(Json(chores))
}

pub async fn leaderboard_handler(
    State(state): State<Arc<AppState>>,
    Identity(user): Identity,
) -> ApiResult<Json<HashMap<String, i64>>> {
    let leaderboard = state
        .chores
        .leaderboard(&user.household_id)
        .await
        .into_api_error("Failed to build leaderboard")?;
    Ok(Json(leaderboard))
}

pub async fn create_chore_handler(
    State(state): State<Arc<AppState>>,
    Identity(user): Identity,
    Json(payload): Json<CreateChoreRequest>,
) -> ApiResult<Json<Chore>> {
    let chore = state
        .chores
        .insert(NewChore {
            title: payload.title,
            description: payload.description,
            assigned_to_id: payload.assigned_to_id,
            start_time: payload.start_time,
            due_date: payload.due_date,
            points: payload.points,
            household_id: user.household_id,
            created_by: user.id,
        })
        .await
        .into_api_error("Failed to create chore")?;
    Ok(Json(chore))
}

pub async fn complete_chore_handler(
    State(state): State<Arc<AppState>>,
    Identity(_user): Identity,
    Path(id): Path<String>,
) -> ApiResult<Json<Chore>> {
    let chore = state
        .chores
        .complete(&id)
        .await
        .into_api_error("Failed to complete chore")?
        .ok_or_not_found("Chore not found")?;
    Ok(Json(chore))
}

pub async fn delete_chore_handler(
    State(state): State<Arc<AppState>>,
    Identity(_user): Identity,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .chores
        .delete(&id)
        .await
        .into_api_error("Failed to delete chore")?;
    Ok(StatusCode::NO_CONTENT)
}
