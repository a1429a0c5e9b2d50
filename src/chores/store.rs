// src/chores/store.rs

use anyhow::Result;
use chrono::Local;
use sqlx::SqlitePool;
use std::collections::HashMap;
use uuid::Uuid;

use super::types::{Chore, NewChore};

#[derive(Clone)]
pub struct ChoreStore {
    pool: SqlitePool,
}

impl ChoreStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, new: NewChore) -> Result<Chore> {
        let now = Local::now().naive_local();
        let chore = Chore {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            description: new.description,
            assigned_to_id: new.assigned_to_id,
            start_time: new.start_time,
            due_date: new.due_date,
            points: new.points,
            completed: false,
            completed_at: None,
            household_id: new.household_id,
            created_by: new.created_by,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO chores (
                id, title, description, assigned_to_id, start_time, due_date,
                points, completed, completed_at, household_id, created_by,
                created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&chore.id)
        .bind(&chore.title)
        .bind(&chore.description)
        .bind(&chore.assigned_to_id)
        .bind(chore.start_time)
        .bind(chore.due_date)
        .bind(chore.points)
        .bind(chore.completed)
        .bind(chore.completed_at)
        .bind(&chore.household_id)
        .bind(&chore.created_by)
        .bind(chore.created_at)
        .bind(chore.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(chore)
    }

    pub async fn list(&self, household_id: &str) -> Result<Vec<Chore>> {
        let chores = sqlx::query_as::<_, Chore>(
            "SELECT * FROM chores WHERE household_id = ? ORDER BY due_date",
        )
        .bind(household_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(chores)
    }

    pub async fn list_by_completed(
        &self,
        household_id: &str,
        completed: bool,
    ) -> Result<Vec<Chore>> {
        let chores = sqlx::query_as::<_, Chore>(
            "SELECT * FROM chores WHERE household_id = ? AND completed = ? ORDER BY due_date",
        )
        .bind(household_id)
        .bind(completed)
        .fetch_all(&self.pool)
        .await?;
        Ok(chores)
    }

    /// Mark a chore completed, stamping completion time.
    pub async fn complete(&self, id: &str) -> Result<Option<Chore>> {
        let now = Local::now().naive_local();
        sqlx::query(
            r#"
            UPDATE chores
            SET completed = 1, completed_at = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(now)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        let chore = sqlx::query_as::<_, Chore>("SELECT * FROM chores WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(chore)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        sqlx::query("DELETE FROM chores WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Points earned per assignee, over completed chores only.
    pub async fn leaderboard(&self, household_id: &str) -> Result<HashMap<String, i64>> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT assigned_to_id, SUM(points)
            FROM chores
            WHERE household_id = ? AND completed = 1 AND assigned_to_id IS NOT NULL
            GROUP BY assigned_to_id
            "#,
        )
        .bind(household_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().collect())
    }
}
