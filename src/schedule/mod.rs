// src/schedule/mod.rs

//! The schedule-text interpreter: free text in, household records out.
//!
//! Pipeline: build prompt → call the chat API → parse the reply → classify
//! and persist each item. Every failure kind is contained here and mapped
//! to a canned user-facing message; callers always get a `ScheduleResponse`.

pub mod client;
pub mod handlers;
pub mod materializer;
pub mod parser;
pub mod prompt;
pub mod types;

use chrono::Local;
use tracing::{error, info};

use crate::calendar::EventStore;
use crate::chores::ChoreStore;
use crate::groceries::GroceryStore;
use crate::households::User;
use crate::medications::MedicationStore;

use client::ChatClient;
use materializer::Materializer;
use parser::parse_items;
use prompt::build_system_prompt;
pub use types::{ItemSummary, ScheduleDefaults, ScheduleError, ScheduleResponse};

pub const MSG_NOT_CONFIGURED: &str =
    "AI feature requires an OpenAI API key. Please configure OPENAI_API_KEY in your environment.";
pub const MSG_NO_RESPONSE: &str = "Could not get a response from AI. Please try again.";
pub const MSG_NO_ITEMS: &str = "I couldn't identify any tasks, events, medications, or grocery items in your message. Please try being more specific.";
pub const MSG_NOTHING_SAVED: &str =
    "I understood your message but couldn't save any items. Please try again.";
pub const MSG_SUCCESS: &str = "Successfully processed your schedule!";
pub const MSG_UNINTELLIGIBLE: &str =
    "Sorry, I couldn't understand that. Please try again with clearer details.";

pub struct ScheduleService {
    /// None when no API key is configured; the feature is disabled.
    client: Option<ChatClient>,
    materializer: Materializer,
    defaults: ScheduleDefaults,
}

impl ScheduleService {
    pub fn new(
        api_key: Option<String>,
        api_base: String,
        chores: ChoreStore,
        events: EventStore,
        medications: MedicationStore,
        groceries: GroceryStore,
        defaults: ScheduleDefaults,
    ) -> Self {
        let client = api_key.map(|key| ChatClient::new(key, api_base));
        let materializer =
            Materializer::new(chores, events, medications, groceries, defaults.clone());
        Self {
            client,
            materializer,
            defaults,
        }
    }

    /// Interpret free text as schedule items for the caller's household.
    ///
    /// Never fails: every error kind collapses into a canned message on the
    /// response, with the detail logged here.
    pub async fn process_schedule_text(&self, text: &str, user: &User) -> ScheduleResponse {
        match self.run(text, user).await {
            Ok(response) => response,
            Err(e) => {
                let message = match &e {
                    ScheduleError::NotConfigured => MSG_NOT_CONFIGURED,
                    ScheduleError::Upstream { .. }
                    | ScheduleError::Transport(_)
                    | ScheduleError::EmptyCompletion => MSG_NO_RESPONSE,
                    ScheduleError::Internal(_) => MSG_UNINTELLIGIBLE,
                };
                error!("Error processing schedule text: {:?}", e);
                ScheduleResponse::empty(message)
            }
        }
    }

    async fn run(&self, text: &str, user: &User) -> Result<ScheduleResponse, ScheduleError> {
        // No credential means no network call at all.
        let client = self.client.as_ref().ok_or(ScheduleError::NotConfigured)?;

        let now = Local::now().naive_local();
        let system_prompt = build_system_prompt(now.date());
        let reply = client.complete(&system_prompt, text, &self.defaults).await?;

        let raw_items = parse_items(&reply);
        if raw_items.is_empty() {
            return Ok(ScheduleResponse::empty(MSG_NO_ITEMS));
        }

        let outcome = self
            .materializer
            .materialize_batch(&raw_items, user, now)
            .await;

        if outcome.items.is_empty() {
            return Ok(ScheduleResponse::empty(MSG_NOTHING_SAVED));
        }

        info!(
            "Schedule text produced {} chores, {} events, {} medications, {} groceries",
            outcome.chores_created,
            outcome.events_created,
            outcome.medications_created,
            outcome.groceries_created
        );

        Ok(ScheduleResponse {
            message: MSG_SUCCESS.to_string(),
            items: outcome.items,
            chores_created: outcome.chores_created,
            events_created: outcome.events_created,
            medications_created: outcome.medications_created,
            groceries_created: outcome.groceries_created,
        })
    }
}
