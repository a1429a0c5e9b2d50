// src/calendar/store.rs

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::types::{CalendarEvent, EventType, NewEvent};

/// Row shape with the participant list still JSON-encoded.
#[derive(sqlx::FromRow)]
struct EventRow {
    id: String,
    title: String,
    description: Option<String>,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    event_type: EventType,
    participant_ids: String,
    household_id: String,
    created_by: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl EventRow {
    fn into_event(self) -> CalendarEvent {
        CalendarEvent {
            id: self.id,
            title: self.title,
            description: self.description,
            start_time: self.start_time,
            end_time: self.end_time,
            event_type: self.event_type,
            participant_ids: serde_json::from_str(&self.participant_ids).unwrap_or_default(),
            household_id: self.household_id,
            created_by: self.created_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct EventStore {
    pool: SqlitePool,
}

impl EventStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, new: NewEvent) -> Result<CalendarEvent> {
        let now = Local::now().naive_local();
        let event = CalendarEvent {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            description: new.description,
            start_time: new.start_time,
            end_time: new.end_time,
            event_type: new.event_type,
            participant_ids: new.participant_ids,
            household_id: new.household_id,
            created_by: new.created_by,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO calendar_events (
                id, title, description, start_time, end_time, event_type,
                participant_ids, household_id, created_by, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.start_time)
        .bind(event.end_time)
        .bind(event.event_type)
        .bind(serde_json::to_string(&event.participant_ids)?)
        .bind(&event.household_id)
        .bind(&event.created_by)
        .bind(event.created_at)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(event)
    }

    pub async fn list(&self, household_id: &str) -> Result<Vec<CalendarEvent>> {
        let rows = sqlx::query_as::<_, EventRow>(
            "SELECT * FROM calendar_events WHERE household_id = ? ORDER BY start_time",
        )
        .bind(household_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(EventRow::into_event).collect())
    }

    pub async fn list_range(
        &self,
        household_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<CalendarEvent>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT * FROM calendar_events
            WHERE household_id = ? AND start_time BETWEEN ? AND ?
            ORDER BY start_time
            "#,
        )
        .bind(household_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(EventRow::into_event).collect())
    }

    pub async fn get(&self, id: &str) -> Result<Option<CalendarEvent>> {
        let row = sqlx::query_as::<_, EventRow>("SELECT * FROM calendar_events WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(EventRow::into_event))
    }

    /// Full-record update; returns the refreshed event.
    pub async fn update(&self, id: &str, new: NewEvent) -> Result<Option<CalendarEvent>> {
        let now = Local::now().naive_local();
        sqlx::query(
            r#"
            UPDATE calendar_events
            SET title = ?, description = ?, start_time = ?, end_time = ?,
                event_type = ?, participant_ids = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.start_time)
        .bind(new.end_time)
        .bind(new.event_type)
        .bind(serde_json::to_string(&new.participant_ids)?)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.get(id).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        sqlx::query("DELETE FROM calendar_events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
