// src/chores/types.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Chore {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub assigned_to_id: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub due_date: NaiveDateTime,
    pub points: i64,
    pub completed: bool,
    pub completed_at: Option<NaiveDateTime>,
    pub household_id: String,
    pub created_by: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChoreRequest {
    pub title: String,
    pub description: Option<String>,
    pub assigned_to_id: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub due_date: NaiveDateTime,
    pub points: i64,
}

/// Fields the schedule interpreter and the create endpoint both need when
/// inserting a chore.
#[derive(Debug, Clone)]
pub struct NewChore {
    pub title: String,
    pub description: Option<String>,
    pub assigned_to_id: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub due_date: NaiveDateTime,
    pub points: i64,
    pub household_id: String,
    pub created_by: String,
}
