// src/schedule/materializer.rs

//! Turns classified items into persisted household records.
//!
//! One pass, in array order. A bad item is skipped and logged; the batch
//! always runs to the end. There is no transaction around the batch: items
//! saved before a failure stay saved.

use chrono::{Duration, NaiveDateTime};
use tracing::{error, warn};

use super::types::{ItemSummary, ParsedItem, RawItem, ScheduleDefaults, Skip};
use crate::calendar::{EventStore, EventType, NewEvent};
use crate::chores::{ChoreStore, NewChore};
use crate::groceries::{GroceryCategory, GroceryStore, NewGroceryItem};
use crate::households::User;
use crate::medications::{MedicationStore, NewMedication};

/// What one batch produced: echoes for saved items and per-kind counters.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub items: Vec<ItemSummary>,
    pub chores_created: u32,
    pub events_created: u32,
    pub medications_created: u32,
    pub groceries_created: u32,
}

#[derive(Clone)]
pub struct Materializer {
    chores: ChoreStore,
    events: EventStore,
    medications: MedicationStore,
    groceries: GroceryStore,
    defaults: ScheduleDefaults,
}

/// ISO local date-time, strict format first, then chrono's more permissive
/// parser (fractional seconds, space separator).
fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| value.parse::<NaiveDateTime>())
        .map_err(|_| warn!("Could not parse datetime: {}", value))
        .ok()
}

impl Materializer {
    pub fn new(
        chores: ChoreStore,
        events: EventStore,
        medications: MedicationStore,
        groceries: GroceryStore,
        defaults: ScheduleDefaults,
    ) -> Self {
        Self {
            chores,
            events,
            medications,
            groceries,
            defaults,
        }
    }

    /// Materialize every item that survives validation. `now` anchors all
    /// relative defaults so outcomes are reproducible in tests.
    pub async fn materialize_batch(
        &self,
        raw_items: &[RawItem],
        user: &User,
        now: NaiveDateTime,
    ) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        for raw in raw_items {
            let item = match ParsedItem::classify(raw) {
                Ok(item) => item,
                Err(Skip::MissingType) => {
                    warn!("Skipping item with missing type: {:?}", raw);
                    continue;
                }
                Err(Skip::MissingTitle) => {
                    warn!("Skipping item with missing title: {:?}", raw);
                    continue;
                }
                Err(Skip::UnknownType(t)) => {
                    warn!("Unknown item type: {}", t);
                    continue;
                }
            };

            let common = item.common();
            let mut summary = ItemSummary {
                item_type: common.raw_type.clone(),
                title: common.title.clone(),
                description: common.description.clone(),
                date_time: common.date_time.clone(),
                points: None,
            };

            let saved = match item {
                ParsedItem::Chore { ref common, points } => {
                    let points = points.unwrap_or(self.defaults.chore_points);
                    let due_date = common
                        .date_time
                        .as_deref()
                        .and_then(parse_date_time)
                        .unwrap_or(now + Duration::days(self.defaults.chore_due_days));

                    summary.points = Some(points);
                    self.chores
                        .insert(NewChore {
                            title: common.title.clone(),
                            description: common.description.clone(),
                            assigned_to_id: None,
                            start_time: None,
                            due_date,
                            points,
                            household_id: user.household_id.clone(),
                            created_by: user.id.clone(),
                        })
                        .await
                        .map(|_| outcome.chores_created += 1)
                }
                ParsedItem::Event {
                    ref common,
                    ref end_date_time,
                } => {
                    let start_time = common
                        .date_time
                        .as_deref()
                        .and_then(parse_date_time)
                        .unwrap_or_else(|| {
                            (now.date() + Duration::days(1))
                                .and_hms_opt(self.defaults.event_start_hour, 0, 0)
                                .expect("valid fallback hour")
                        });
                    let end_time = end_date_time
                        .as_deref()
                        .and_then(parse_date_time)
                        .unwrap_or(start_time + Duration::hours(self.defaults.event_duration_hours));

                    self.events
                        .insert(NewEvent {
                            title: common.title.clone(),
                            description: common.description.clone(),
                            start_time,
                            end_time,
                            event_type: EventType::Other,
                            participant_ids: Vec::new(),
                            household_id: user.household_id.clone(),
                            created_by: user.id.clone(),
                        })
                        .await
                        .map(|_| outcome.events_created += 1)
                }
                ParsedItem::Medication {
                    ref common,
                    ref dosage,
                    ref times,
                } => {
                    // Inventory is always the configured constant; a
                    // model-supplied value is ignored.
                    self.medications
                        .insert(NewMedication {
                            name: common.title.clone(),
                            dosage: dosage
                                .clone()
                                .unwrap_or_else(|| self.defaults.medication_dosage.clone()),
                            instructions: common.description.clone(),
                            morning: times.iter().any(|t| t == "morning"),
                            afternoon: times.iter().any(|t| t == "afternoon"),
                            evening: times.iter().any(|t| t == "evening"),
                            inventory: self.defaults.medication_inventory,
                            assigned_to_id: None,
                            household_id: user.household_id.clone(),
                        })
                        .await
                        .map(|_| outcome.medications_created += 1)
                }
                ParsedItem::Grocery {
                    ref common,
                    ref category,
                } => {
                    let category = category
                        .as_deref()
                        .map(GroceryCategory::parse_loose)
                        .unwrap_or(GroceryCategory::Other);

                    self.groceries
                        .insert(NewGroceryItem {
                            name: common.title.clone(),
                            category,
                            needed_by_date: now.date()
                                + Duration::days(self.defaults.grocery_needed_by_days),
                            added_by_id: user.id.clone(),
                            household_id: user.household_id.clone(),
                        })
                        .await
                        .map(|_| outcome.groceries_created += 1)
                }
            };

            match saved {
                Ok(()) => outcome.items.push(summary),
                Err(e) => {
                    error!("Error saving item {:?}: {:?}", raw, e);
                }
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_iso_parse() {
        let parsed = parse_date_time("2025-03-10T09:00:00").unwrap();
        assert_eq!(parsed.to_string(), "2025-03-10 09:00:00");
    }

    #[test]
    fn permissive_fallback_accepts_fractional_seconds() {
        assert!(parse_date_time("2025-03-10T09:00:00.500").is_some());
    }

    #[test]
    fn unparsable_datetime_is_none() {
        assert!(parse_date_time("next Tuesday-ish").is_none());
        assert!(parse_date_time("2025-03-10").is_none());
    }
}
