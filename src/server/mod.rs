// src/server/mod.rs

//! Router assembly: every household endpoint plus the AI schedule endpoint.

use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::calendar::handlers as calendar;
use crate::chores::handlers as chores;
use crate::groceries::handlers as groceries;
use crate::households::handlers as households;
use crate::medications::handlers as medications;
use crate::notifications::handlers as notifications;
use crate::schedule::handlers as schedule;
use crate::state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Users & households
        .route("/api/users/register", post(households::register_handler))
        .route(
            "/api/users/me",
            get(households::get_me_handler).patch(households::update_me_handler),
        )
        .route("/api/users/household", get(households::get_members_handler))
        .route(
            "/api/users/household/invite-code",
            get(households::get_invite_code_handler),
        )
        // Chores
        .route(
            "/api/chores",
            get(chores::list_chores_handler).post(chores::create_chore_handler),
        )
        .route("/api/chores/pending", get(chores::list_pending_chores_handler))
        .route("/api/chores/leaderboard", get(chores::leaderboard_handler))
        .route(
            "/api/chores/{id}/complete",
            patch(chores::complete_chore_handler),
        )
        .route("/api/chores/{id}", delete(chores::delete_chore_handler))
        // Calendar
        .route(
            "/api/events",
            get(calendar::list_events_handler).post(calendar::create_event_handler),
        )
        .route(
            "/api/events/{id}",
            put(calendar::update_event_handler).delete(calendar::delete_event_handler),
        )
        // Medications
        .route(
            "/api/medications",
            get(medications::list_medications_handler).post(medications::create_medication_handler),
        )
        .route(
            "/api/medications/log",
            post(medications::log_medication_handler),
        )
        .route(
            "/api/medications/{id}/logs",
            get(medications::list_medication_logs_handler),
        )
        .route(
            "/api/medications/{id}/inventory",
            patch(medications::update_inventory_handler),
        )
        .route(
            "/api/medications/{id}",
            delete(medications::delete_medication_handler),
        )
        // Groceries
        .route(
            "/api/groceries",
            get(groceries::list_groceries_handler).post(groceries::add_grocery_handler),
        )
        .route(
            "/api/groceries/pending",
            get(groceries::list_pending_groceries_handler),
        )
        .route(
            "/api/groceries/clear-checked",
            delete(groceries::clear_checked_handler),
        )
        .route(
            "/api/groceries/{id}/toggle",
            patch(groceries::toggle_grocery_handler),
        )
        .route("/api/groceries/{id}", delete(groceries::delete_grocery_handler))
        // Notifications
        .route(
            "/api/notifications/register",
            post(notifications::register_device_handler),
        )
        .route(
            "/api/notifications/unregister",
            delete(notifications::unregister_device_handler),
        )
        // AI schedule assistant
        .route("/api/ai/schedule", post(schedule::process_schedule_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
