// src/households/handlers.rs

use axum::{Json, extract::State};
use std::sync::Arc;

use super::types::{RegisterRequest, Role, UpdateProfileRequest, User};
use crate::api::error::{ApiError, ApiResult, IntoApiError, IntoApiErrorOption};
use crate::api::identity::Identity;
use crate::state::AppState;

/// Create a user, either joining an existing household by invite code or
/// founding a new one.
pub async fn register_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<Json<User>> {
    if payload.email.trim().is_empty() || payload.name.trim().is_empty() {
        return Err(ApiError::bad_request("Email and name are required"));
    }

    let existing = state
        .households
        .find_user_by_email(&payload.email)
        .await
        .into_api_error("Failed to look up user")?;
    if existing.is_some() {
        return Err(ApiError::bad_request("Email already registered"));
    }

    let household_id = match payload.invite_code.as_deref().filter(|c| !c.is_empty()) {
        Some(code) => {
            let household = state
                .households
                .find_by_invite_code(code)
                .await
                .into_api_error("Failed to look up invite code")?
                .ok_or_bad_request("Invalid invite code")?;
            household.id
        }
        None => {
            let name = payload
                .household_name
                .clone()
                .unwrap_or_else(|| format!("{}'s Family", payload.name));
            let household = state
                .households
                .create_household(&name)
                .await
                .into_api_error("Failed to create household")?;
            household.id
        }
    };

    let user = state
        .households
        .create_user(
            &payload.email,
            &payload.name,
            payload.role.unwrap_or(Role::Member),
            &household_id,
        )
        .await
        .into_api_error("Failed to create user")?;

    Ok(Json(user))
}

pub async fn get_me_handler(Identity(user): Identity) -> Json<User> {
    Json(user)
}

pub async fn update_me_handler(
    State(state): State<Arc<AppState>>,
    Identity(user): Identity,
    Json(payload): Json<UpdateProfileRequest>,
) -> ApiResult<Json<User>> {
    let updated = state
        .households
        .update_profile(&user.id, payload.name.as_deref(), payload.avatar.as_deref())
        .await
        .into_api_error("Failed to update profile")?
        .ok_or_not_found("User not found")?;

    Ok(Json(updated))
}

pub async fn get_members_handler(
    State(state): State<Arc<AppState>>,
    Identity(user): Identity,
) -> ApiResult<Json<Vec<User>>> {
    let members = state
        .households
        .list_members(&user.household_id)
        .await
        .into_api_error("Failed to list household members")?;

    Ok(Json(members))
}

pub async fn get_invite_code_handler(
    State(state): State<Arc<AppState>>,
    Identity(user): Identity,
) -> ApiResult<Json<String>> {
    let household = state
        .households
        .get_household(&user.household_id)
        .await
        .into_api_error("Failed to load household")?
        .ok_or_not_found("Household not found")?;

    Ok(Json(household.invite_code))
}
