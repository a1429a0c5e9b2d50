// src/medications/types.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub instructions: Option<String>,
    pub morning: bool,
    pub afternoon: bool,
    pub evening: bool,
    pub inventory: i64,
    pub assigned_to_id: Option<String>,
    pub household_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MedicationLog {
    pub id: String,
    pub medication_id: String,
    pub user_id: String,
    pub status: LogStatus,
    pub scheduled_time: NaiveDateTime,
    pub taken_time: NaiveDateTime,
    pub notes: Option<String>,
    pub household_id: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "TEXT", rename_all = "UPPERCASE")]
pub enum LogStatus {
    Taken,
    Skipped,
    Missed,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMedicationRequest {
    pub name: String,
    pub dosage: String,
    pub instructions: Option<String>,
    #[serde(default)]
    pub morning: bool,
    #[serde(default)]
    pub afternoon: bool,
    #[serde(default)]
    pub evening: bool,
    pub inventory: i64,
    pub assigned_to_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogMedicationRequest {
    pub medication_id: String,
    pub status: LogStatus,
    pub scheduled_time: NaiveDateTime,
    pub taken_time: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewMedication {
    pub name: String,
    pub dosage: String,
    pub instructions: Option<String>,
    pub morning: bool,
    pub afternoon: bool,
    pub evening: bool,
    pub inventory: i64,
    pub assigned_to_id: Option<String>,
    pub household_id: String,
}
