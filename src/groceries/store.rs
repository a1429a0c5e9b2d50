// src/groceries/store.rs

use anyhow::Result;
use chrono::Local;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::types::{GroceryItem, NewGroceryItem};

#[derive(Clone)]
pub struct GroceryStore {
    pool: SqlitePool,
}

impl GroceryStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, new: NewGroceryItem) -> Result<GroceryItem> {
        let now = Local::now().naive_local();
        let item = GroceryItem {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            category: new.category,
            needed_by_date: new.needed_by_date,
            checked: false,
            added_by_id: new.added_by_id,
            household_id: new.household_id,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO grocery_items (
                id, name, category, needed_by_date, checked, added_by_id,
                household_id, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&item.id)
        .bind(&item.name)
        .bind(item.category)
        .bind(item.needed_by_date)
        .bind(item.checked)
        .bind(&item.added_by_id)
        .bind(&item.household_id)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(item)
    }

    pub async fn list(&self, household_id: &str) -> Result<Vec<GroceryItem>> {
        let items = sqlx::query_as::<_, GroceryItem>(
            "SELECT * FROM grocery_items WHERE household_id = ? ORDER BY needed_by_date",
        )
        .bind(household_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    pub async fn list_by_checked(
        &self,
        household_id: &str,
        checked: bool,
    ) -> Result<Vec<GroceryItem>> {
        let items = sqlx::query_as::<_, GroceryItem>(
            "SELECT * FROM grocery_items WHERE household_id = ? AND checked = ? ORDER BY needed_by_date",
        )
        .bind(household_id)
        .bind(checked)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    /// Flip the checked flag; returns the refreshed item.
    pub async fn toggle(&self, id: &str) -> Result<Option<GroceryItem>> {
        let now = Local::now().naive_local();
        sqlx::query("UPDATE grocery_items SET checked = NOT checked, updated_at = ? WHERE id = ?")
            .bind(now)
            .bind(id)
            .execute(&self.pool)
            .await?;

        let item = sqlx::query_as::<_, GroceryItem>("SELECT * FROM grocery_items WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(item)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        sqlx::query("DELETE FROM grocery_items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Remove every checked item for the household; returns how many went.
    pub async fn clear_checked(&self, household_id: &str) -> Result<u64> {
        let result =
            sqlx::query("DELETE FROM grocery_items WHERE household_id = ? AND checked = 1")
                .bind(household_id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected())
    }
}
