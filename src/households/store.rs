// src/households/store.rs

use anyhow::Result;
use chrono::Local;
use rand::{Rng, distr::Alphanumeric};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::types::{Household, Role, User};

/// Household and user records.
#[derive(Clone)]
pub struct HouseholdStore {
    pool: SqlitePool,
}

impl HouseholdStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 8-char uppercase alphanumeric invite code.
    fn generate_invite_code() -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(8)
            .map(char::from)
            .collect::<String>()
            .to_uppercase()
    }

    pub async fn create_household(&self, name: &str) -> Result<Household> {
        let now = Local::now().naive_local();
        let household = Household {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            invite_code: Self::generate_invite_code(),
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO households (id, name, invite_code, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&household.id)
        .bind(&household.name)
        .bind(&household.invite_code)
        .bind(household.created_at)
        .bind(household.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(household)
    }

    pub async fn get_household(&self, id: &str) -> Result<Option<Household>> {
        let household = sqlx::query_as::<_, Household>("SELECT * FROM households WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(household)
    }

    pub async fn find_by_invite_code(&self, code: &str) -> Result<Option<Household>> {
        let household =
            sqlx::query_as::<_, Household>("SELECT * FROM households WHERE invite_code = ?")
                .bind(code)
                .fetch_optional(&self.pool)
                .await?;
        Ok(household)
    }

    pub async fn create_user(
        &self,
        email: &str,
        name: &str,
        role: Role,
        household_id: &str,
    ) -> Result<User> {
        let now = Local::now().naive_local();
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.to_string(),
            avatar: None,
            role,
            household_id: household_id.to_string(),
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO users (id, email, name, avatar, role, household_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.avatar)
        .bind(user.role)
        .bind(&user.household_id)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn get_user(&self, id: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn list_members(&self, household_id: &str) -> Result<Vec<User>> {
        let members =
            sqlx::query_as::<_, User>("SELECT * FROM users WHERE household_id = ? ORDER BY name")
                .bind(household_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(members)
    }

    /// Update name and/or avatar; untouched fields keep their value.
    pub async fn update_profile(
        &self,
        user_id: &str,
        name: Option<&str>,
        avatar: Option<&str>,
    ) -> Result<Option<User>> {
        let now = Local::now().naive_local();
        sqlx::query(
            r#"
            UPDATE users
            SET name = COALESCE(?, name),
                avatar = COALESCE(?, avatar),
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(name)
        .bind(avatar)
        .bind(now)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        self.get_user(user_id).await
    }
}
