// src/medications/store.rs

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::types::{LogStatus, Medication, MedicationLog, NewMedication};

#[derive(Clone)]
pub struct MedicationStore {
    pool: SqlitePool,
}

impl MedicationStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, new: NewMedication) -> Result<Medication> {
        let now = Local::now().naive_local();
        let medication = Medication {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            dosage: new.dosage,
            instructions: new.instructions,
            morning: new.morning,
            afternoon: new.afternoon,
            evening: new.evening,
            inventory: new.inventory,
            assigned_to_id: new.assigned_to_id,
            household_id: new.household_id,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO medications (
                id, name, dosage, instructions, morning, afternoon, evening,
                inventory, assigned_to_id, household_id, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&medication.id)
        .bind(&medication.name)
        .bind(&medication.dosage)
        .bind(&medication.instructions)
        .bind(medication.morning)
        .bind(medication.afternoon)
        .bind(medication.evening)
        .bind(medication.inventory)
        .bind(&medication.assigned_to_id)
        .bind(&medication.household_id)
        .bind(medication.created_at)
        .bind(medication.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(medication)
    }

    pub async fn list(&self, household_id: &str) -> Result<Vec<Medication>> {
        let medications = sqlx::query_as::<_, Medication>(
            "SELECT * FROM medications WHERE household_id = ? ORDER BY name",
        )
        .bind(household_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(medications)
    }

    pub async fn get(&self, id: &str) -> Result<Option<Medication>> {
        let medication = sqlx::query_as::<_, Medication>("SELECT * FROM medications WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(medication)
    }

    pub async fn set_inventory(&self, id: &str, quantity: i64) -> Result<Option<Medication>> {
        let now = Local::now().naive_local();
        sqlx::query("UPDATE medications SET inventory = ?, updated_at = ? WHERE id = ?")
            .bind(quantity)
            .bind(now)
            .bind(id)
            .execute(&self.pool)
            .await?;
        self.get(id).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        sqlx::query("DELETE FROM medications WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Record a dose. A TAKEN dose consumes one unit of inventory when any
    /// remains; inventory never goes negative.
    pub async fn log_dose(
        &self,
        medication: &Medication,
        user_id: &str,
        status: LogStatus,
        scheduled_time: NaiveDateTime,
        taken_time: Option<NaiveDateTime>,
        notes: Option<String>,
    ) -> Result<MedicationLog> {
        let now = Local::now().naive_local();

        if status == LogStatus::Taken && medication.inventory > 0 {
            sqlx::query(
                "UPDATE medications SET inventory = inventory - 1, updated_at = ? WHERE id = ?",
            )
            .bind(now)
            .bind(&medication.id)
            .execute(&self.pool)
            .await?;
        }

        let log = MedicationLog {
            id: Uuid::new_v4().to_string(),
            medication_id: medication.id.clone(),
            user_id: user_id.to_string(),
            status,
            scheduled_time,
            taken_time: taken_time.unwrap_or(now),
            notes,
            household_id: medication.household_id.clone(),
            created_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO medication_logs (
                id, medication_id, user_id, status, scheduled_time, taken_time,
                notes, household_id, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&log.id)
        .bind(&log.medication_id)
        .bind(&log.user_id)
        .bind(log.status)
        .bind(log.scheduled_time)
        .bind(log.taken_time)
        .bind(&log.notes)
        .bind(&log.household_id)
        .bind(log.created_at)
        .execute(&self.pool)
        .await?;

        Ok(log)
    }

    pub async fn list_logs(&self, medication_id: &str) -> Result<Vec<MedicationLog>> {
        let logs = sqlx::query_as::<_, MedicationLog>(
            "SELECT * FROM medication_logs WHERE medication_id = ? ORDER BY created_at DESC",
        )
        .bind(medication_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(logs)
    }
}
