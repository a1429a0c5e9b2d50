// src/schedule/types.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Raw model output item, still untyped: field name → JSON value.
pub type RawItem = Map<String, Value>;

/// Named constants for everything the interpreter fills in when the model
/// leaves a field out. Tests override these instead of chasing literals.
#[derive(Debug, Clone)]
pub struct ScheduleDefaults {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub chore_points: i64,
    pub chore_due_days: i64,
    pub event_start_hour: u32,
    pub event_duration_hours: i64,
    pub medication_dosage: String,
    pub medication_inventory: i64,
    pub grocery_needed_by_days: i64,
}

impl Default for ScheduleDefaults {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.3,
            max_tokens: 2000,
            chore_points: 10,
            chore_due_days: 1,
            event_start_hour: 10,
            event_duration_hours: 1,
            medication_dosage: "As prescribed".to_string(),
            medication_inventory: 30,
            grocery_needed_by_days: 7,
        }
    }
}

/// Fields shared by every item kind, captured before dispatch.
#[derive(Debug, Clone)]
pub struct ItemFields {
    /// The type string exactly as the model wrote it; echoed back verbatim.
    pub raw_type: String,
    pub title: String,
    pub description: Option<String>,
    pub date_time: Option<String>,
}

/// A raw item classified into one of the four record kinds, with its
/// kind-specific loose fields pulled out. Validation happens here, once,
/// instead of at every field access downstream.
#[derive(Debug, Clone)]
pub enum ParsedItem {
    Chore {
        common: ItemFields,
        points: Option<i64>,
    },
    Event {
        common: ItemFields,
        end_date_time: Option<String>,
    },
    Medication {
        common: ItemFields,
        dosage: Option<String>,
        times: Vec<String>,
    },
    Grocery {
        common: ItemFields,
        category: Option<String>,
    },
}

/// Why an item was dropped from the batch. Skips are logged, never surfaced.
#[derive(Debug, PartialEq, Eq)]
pub enum Skip {
    MissingType,
    MissingTitle,
    UnknownType(String),
}

fn string_field(raw: &RawItem, key: &str) -> Option<String> {
    raw.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .filter(|s| !s.trim().is_empty())
}

/// The Java original casts `points` through `Number`, so both `15` and
/// `15.0` count as numeric.
fn numeric_field(raw: &RawItem, key: &str) -> Option<i64> {
    let value = raw.get(key)?;
    value.as_i64().or_else(|| value.as_f64().map(|f| f as i64))
}

fn string_list_field(raw: &RawItem, key: &str) -> Vec<String> {
    raw.get(key)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

impl ParsedItem {
    /// Classify one raw item. `type` and `title` must be present and
    /// non-blank; the type tag is matched case-insensitively.
    pub fn classify(raw: &RawItem) -> Result<Self, Skip> {
        let raw_type = string_field(raw, "type").ok_or(Skip::MissingType)?;
        let title = string_field(raw, "title").ok_or(Skip::MissingTitle)?;

        let common = ItemFields {
            title,
            description: string_field(raw, "description"),
            date_time: string_field(raw, "dateTime"),
            raw_type: raw_type.clone(),
        };

        match raw_type.to_lowercase().as_str() {
            "chore" => Ok(Self::Chore {
                common,
                points: numeric_field(raw, "points"),
            }),
            "event" => Ok(Self::Event {
                common,
                end_date_time: string_field(raw, "endDateTime"),
            }),
            "medication" => Ok(Self::Medication {
                common,
                dosage: string_field(raw, "dosage"),
                times: string_list_field(raw, "times"),
            }),
            "grocery" => Ok(Self::Grocery {
                common,
                category: string_field(raw, "category"),
            }),
            _ => Err(Skip::UnknownType(raw_type)),
        }
    }

    pub fn common(&self) -> &ItemFields {
        match self {
            Self::Chore { common, .. }
            | Self::Event { common, .. }
            | Self::Medication { common, .. }
            | Self::Grocery { common, .. } => common,
        }
    }
}

/// One echoed item in the response, mirroring what the model extracted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    #[serde(rename = "type")]
    pub item_type: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
}

/// The user-facing outcome of one interpreter run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub message: String,
    pub items: Vec<ItemSummary>,
    pub chores_created: u32,
    pub events_created: u32,
    pub medications_created: u32,
    pub groceries_created: u32,
}

impl ScheduleResponse {
    /// An outcome that carries a message and nothing else.
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            items: Vec::new(),
            chores_created: 0,
            events_created: 0,
            medications_created: 0,
            groceries_created: 0,
        }
    }
}

/// Internal failure kinds. None of these ever escape the interpreter; the
/// top level maps each to a canned user-facing message.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("no API key configured")]
    NotConfigured,

    #[error("chat API error {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("chat API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("chat API returned no completion")]
    EmptyCompletion,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawItem {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn classify_requires_type_and_title() {
        let missing_type = raw(json!({"title": "Dishes"}));
        assert_eq!(
            ParsedItem::classify(&missing_type).unwrap_err(),
            Skip::MissingType
        );

        let blank_title = raw(json!({"type": "chore", "title": "   "}));
        assert_eq!(
            ParsedItem::classify(&blank_title).unwrap_err(),
            Skip::MissingTitle
        );
    }

    #[test]
    fn classify_is_case_insensitive_on_type() {
        let item = raw(json!({"type": "ChOrE", "title": "Dishes", "points": 12}));
        match ParsedItem::classify(&item).unwrap() {
            ParsedItem::Chore { common, points } => {
                assert_eq!(common.raw_type, "ChOrE");
                assert_eq!(points, Some(12));
            }
            other => panic!("expected chore, got {:?}", other),
        }
    }

    #[test]
    fn classify_rejects_unknown_type() {
        let item = raw(json!({"type": "reminder", "title": "Call school"}));
        assert_eq!(
            ParsedItem::classify(&item).unwrap_err(),
            Skip::UnknownType("reminder".to_string())
        );
    }

    #[test]
    fn numeric_points_accept_floats_and_reject_strings() {
        let float_points = raw(json!({"type": "chore", "title": "Mow", "points": 15.0}));
        match ParsedItem::classify(&float_points).unwrap() {
            ParsedItem::Chore { points, .. } => assert_eq!(points, Some(15)),
            other => panic!("expected chore, got {:?}", other),
        }

        let string_points = raw(json!({"type": "chore", "title": "Mow", "points": "high"}));
        match ParsedItem::classify(&string_points).unwrap() {
            ParsedItem::Chore { points, .. } => assert_eq!(points, None),
            other => panic!("expected chore, got {:?}", other),
        }
    }

    #[test]
    fn medication_times_tolerate_junk_entries() {
        let item = raw(json!({
            "type": "medication",
            "title": "Amoxicillin",
            "times": ["morning", 3, null, "evening"]
        }));
        match ParsedItem::classify(&item).unwrap() {
            ParsedItem::Medication { times, .. } => {
                assert_eq!(times, vec!["morning".to_string(), "evening".to_string()]);
            }
            other => panic!("expected medication, got {:?}", other),
        }
    }
}
