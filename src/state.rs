// src/state.rs

use sqlx::SqlitePool;

use crate::calendar::EventStore;
use crate::chores::ChoreStore;
use crate::groceries::GroceryStore;
use crate::households::HouseholdStore;
use crate::medications::MedicationStore;
use crate::notifications::DeviceTokenStore;
use crate::schedule::{ScheduleDefaults, ScheduleService};

/// Shared application state: one store per record kind plus the schedule
/// interpreter. Handlers receive it as `State<Arc<AppState>>`.
pub struct AppState {
    pub households: HouseholdStore,
    pub chores: ChoreStore,
    pub events: EventStore,
    pub medications: MedicationStore,
    pub groceries: GroceryStore,
    pub device_tokens: DeviceTokenStore,
    pub schedule: ScheduleService,
}

impl AppState {
    pub fn new(pool: SqlitePool, api_key: Option<String>, api_base: String) -> Self {
        let chores = ChoreStore::new(pool.clone());
        let events = EventStore::new(pool.clone());
        let medications = MedicationStore::new(pool.clone());
        let groceries = GroceryStore::new(pool.clone());

        let schedule = ScheduleService::new(
            api_key,
            api_base,
            chores.clone(),
            events.clone(),
            medications.clone(),
            groceries.clone(),
            ScheduleDefaults::default(),
        );

        Self {
            households: HouseholdStore::new(pool.clone()),
            chores,
            events,
            medications,
            groceries,
            device_tokens: DeviceTokenStore::new(pool),
            schedule,
        }
    }
}
