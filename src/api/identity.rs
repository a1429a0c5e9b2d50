// src/api/identity.rs
// Resolves the authenticated caller for household-scoped handlers.
//
// Token issuance/validation lives in front of this service; by the time a
// request reaches us the caller is identified by the `X-User-Id` header,
// which we resolve against the user store.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::sync::Arc;
use tracing::error;

use crate::api::error::ApiError;
use crate::households::User;
use crate::state::AppState;

pub const USER_ID_HEADER: &str = "x-user-id";

/// The caller's user record, loaded per request.
pub struct Identity(pub User);

impl FromRequestParts<Arc<AppState>> for Identity {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApiError::unauthorized("Authentication required"))?;

        let user = state
            .households
            .get_user(user_id)
            .await
            .map_err(|e| {
                error!("Failed to load user {}: {:?}", user_id, e);
                ApiError::internal("Failed to load user")
            })?
            .ok_or_else(|| ApiError::not_found("User not found"))?;

        Ok(Identity(user))
    }
}
