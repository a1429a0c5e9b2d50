// src/calendar/handlers.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::sync::Arc;

use super::types::{CalendarEvent, CreateEventRequest, NewEvent};
use crate::api::error::{ApiResult, IntoApiError, IntoApiErrorOption};
use crate::api::identity::Identity;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EventRangeQuery {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

pub async fn list_events_handler(
    State(state): State<Arc<AppState>>,
    Identity(user): Identity,
    Query(range): Query<EventRangeQuery>,
) -> ApiResult<Json<Vec<CalendarEvent>>> {
    let events = match (range.start, range.end) {
        (Some(start), Some(end)) => state
            .events
            .list_range(&user.household_id, start, end)
            .await
            .into_api_error("Failed to list events")?,
        _ => state
            .events
            .list(&user.household_id)
            .await
            .into_api_error("Failed to list events")?,
    };
    Ok(Json(events))
}

pub async fn create_event_handler(
    State(state): State<Arc<AppState>>,
    Identity(user): Identity,
    Json(payload): Json<CreateEventRequest>,
) -> ApiResult<Json<CalendarEvent>> {
    let event = state
        .events
        .insert(NewEvent {
            title: payload.title,
            description: payload.description,
            start_time: payload.start_time,
            end_time: payload.end_time,
            event_type: payload.event_type,
            participant_ids: payload.participant_ids,
            household_id: user.household_id,
            created_by: user.id,
        })
        .await
        .into_api_error("Failed to create event")?;
    Ok(Json(event))
}

pub async fn update_event_handler(
    State(state): State<Arc<AppState>>,
    Identity(user): Identity,
    Path(id): Path<String>,
    Json(payload): Json<CreateEventRequest>,
) -> ApiResult<Json<CalendarEvent>> {
    let event = state
        .events
        .update(
            &id,
            NewEvent {
                title: payload.title,
                description: payload.description,
                start_time: payload.start_time,
                end_time: payload.end_time,
                event_type: payload.event_type,
                participant_ids: payload.participant_ids,
                household_id: user.household_id,
                created_by: user.id,
            },
        )
        .await
        .into_api_error("Failed to update event")?
        .ok_or_not_found("Event not found")?;
    Ok(Json(event))
}

pub async fn delete_event_handler(
    State(state): State<Arc<AppState>>,
    Identity(_user): Identity,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .events
        .delete(&id)
        .await
        .into_api_error("Failed to delete event")?;
    Ok(StatusCode::NO_CONTENT)
}
