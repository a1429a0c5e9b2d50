// src/notifications/store.rs

use anyhow::Result;
use chrono::Local;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::types::DeviceToken;

#[derive(Clone)]
pub struct DeviceTokenStore {
    pool: SqlitePool,
}

impl DeviceTokenStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_token(&self, token: &str) -> Result<Option<DeviceToken>> {
        let device = sqlx::query_as::<_, DeviceToken>("SELECT * FROM device_tokens WHERE token = ?")
            .bind(token)
            .fetch_optional(&self.pool)
            .await?;
        Ok(device)
    }

    pub async fn insert(&self, user_id: &str, token: &str, platform: &str) -> Result<DeviceToken> {
        let now = Local::now().naive_local();
        let device = DeviceToken {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            token: token.to_string(),
            platform: platform.to_string(),
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO device_tokens (id, user_id, token, platform, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&device.id)
        .bind(&device.user_id)
        .bind(&device.token)
        .bind(&device.platform)
        .bind(device.created_at)
        .bind(device.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(device)
    }

    pub async fn delete_by_token(&self, token: &str) -> Result<()> {
        sqlx::query("DELETE FROM device_tokens WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
