// src/medications/handlers.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::types::{
    CreateMedicationRequest, LogMedicationRequest, Medication, MedicationLog, NewMedication,
};
use crate::api::error::{ApiResult, IntoApiError, IntoApiErrorOption};
use crate::api::identity::Identity;
use crate::state::AppState;

pub async fn list_medications_handler(
    State(state): State<Arc<AppState>>,
    Identity(user): Identity,
) -> ApiResult<Json<Vec<Medication>>> {
    let medications = state
        .medications
        .list(&user.household_id)
        .await
        .into_api_error("Failed to list medications")?;
    Ok(Json(medications))
}

pub async fn create_medication_handler(
    State(state): State<Arc<AppState>>,
    Identity(user): Identity,
    Json(payload): Json<CreateMedicationRequest>,
) -> ApiResult<Json<Medication>> {
    let medication = state
        .medications
        .insert(NewMedication {
            name: payload.name,
            dosage: payload.dosage,
            instructions: payload.instructions,
            morning: payload.morning,
            afternoon: payload.afternoon,
            evening: payload.evening,
            inventory: payload.inventory,
            assigned_to_id: payload.assigned_to_id,
            household_id: user.household_id,
        })
        .await
        .into_api_error("Failed to create medication")?;
    Ok(Json(medication))
}

pub async fn log_medication_handler(
    State(state): State<Arc<AppState>>,
    Identity(user): Identity,
    Json(payload): Json<LogMedicationRequest>,
) -> ApiResult<Json<MedicationLog>> {
    let medication = state
        .medications
        .get(&payload.medication_id)
        .await
        .into_api_error("Failed to load medication")?
        .ok_or_not_found("Medication not found")?;

    let log = state
        .medications
        .log_dose(
            &medication,
            &user.id,
            payload.status,
            payload.scheduled_time,
            payload.taken_time,
            payload.notes,
        )
        .await
        .into_api_error("Failed to log medication")?;
    Ok(Json(log))
}

pub async fn list_medication_logs_handler(
    State(state): State<Arc<AppState>>,
    Identity(_user): Identity,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<MedicationLog>>> {
    let logs = state
        .medications
        .list_logs(&id)
        .await
        .into_api_error("Failed to list medication logs")?;
    Ok(Json(logs))
}

pub async fn update_inventory_handler(
    State(state): State<Arc<AppState>>,
    Identity(_user): Identity,
    Path(id): Path<String>,
    Json(quantity): Json<i64>,
) -> ApiResult<Json<Medication>> {
    let medication = state
        .medications
        .set_inventory(&id, quantity)
        .await
        .into_api_error("Failed to update inventory")?
        .ok_or_not_found("Medication not found")?;
    Ok(Json(medication))
}

pub async fn delete_medication_handler(
    State(state): State<Arc<AppState>>,
    Identity(_user): Identity,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .medications
        .delete(&id)
        .await
        .into_api_error("Failed to delete medication")?;
    Ok(StatusCode::NO_CONTENT)
}
