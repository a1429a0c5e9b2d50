// src/groceries/handlers.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::types::{CreateGroceryRequest, GroceryItem, NewGroceryItem};
use crate::api::error::{ApiResult, IntoApiError, IntoApiErrorOption};
use crate::api::identity::Identity;
use crate::state::AppState;

pub async fn list_groceries_handler(
    State(state): State<Arc<AppState>>,
    Identity(user): Identity,
) -> ApiResult<Json<Vec<GroceryItem>>> {
    let items = state
        .groceries
        .list(&user.household_id)
        .await
        .into_api_error("Failed to list groceries")?;
    Ok(Json(items))
}

pub async fn list_pending_groceries_handler(
    State(state): State<Arc<AppState>>,
    Identity(user): Identity,
) -> ApiResult<Json<Vec<GroceryItem>>> {
    let items = state
        .groceries
        .list_by_checked(&user.household_id, false)
        .await
        .into_api_error("Failed to list pending groceries")?;
    Ok(Json(items))
}

pub async fn add_grocery_handler(
    State(state): State<Arc<AppState>>,
    Identity(user): Identity,
    Json(payload): Json<CreateGroceryRequest>,
) -> ApiResult<Json<GroceryItem>> {
    let item = state
        .groceries
        .insert(NewGroceryItem {
            name: payload.name,
            category: payload.category,
            needed_by_date: payload.needed_by_date,
            added_by_id: user.id,
            household_id: user.household_id,
        })
        .await
        .into_api_error("Failed to add grocery item")?;
    Ok(Json(item))
}

pub async fn toggle_grocery_handler(
    State(state): State<Arc<AppState>>,
    Identity(_user): Identity,
    Path(id): Path<String>,
) -> ApiResult<Json<GroceryItem>> {
    let item = state
        .groceries
        .toggle(&id)
        .await
        .into_api_error("Failed to toggle grocery item")?
        .ok_or_not_found("Item not found")?;
    Ok(Json(item))
}

pub async fn delete_grocery_handler(
    State(state): State<Arc<AppState>>,
    Identity(_user): Identity,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .groceries
        .delete(&id)
        .await
        .into_api_error("Failed to delete grocery item")?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn clear_checked_handler(
    State(state): State<Arc<AppState>>,
    Identity(user): Identity,
) -> ApiResult<StatusCode> {
    state
        .groceries
        .clear_checked(&user.household_id)
        .await
        .into_api_error("Failed to clear checked items")?;
    Ok(StatusCode::NO_CONTENT)
}
