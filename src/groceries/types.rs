// src/groceries/types.rs

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    pub id: String,
    pub name: String,
    pub category: GroceryCategory,
    pub needed_by_date: NaiveDate,
    pub checked: bool,
    pub added_by_id: String,
    pub household_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "TEXT", rename_all = "UPPERCASE")]
pub enum GroceryCategory {
    Produce,
    Dairy,
    Meat,
    Pantry,
    Other,
}

impl GroceryCategory {
    /// Case-insensitive parse; anything unrecognized resolves to `Other`.
    pub fn parse_loose(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "PRODUCE" => Self::Produce,
            "DAIRY" => Self::Dairy,
            "MEAT" => Self::Meat,
            "PANTRY" => Self::Pantry,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroceryRequest {
    pub name: String,
    pub category: GroceryCategory,
    pub needed_by_date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct NewGroceryItem {
    pub name: String,
    pub category: GroceryCategory,
    pub needed_by_date: NaiveDate,
    pub added_by_id: String,
    pub household_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_category_parse() {
        assert_eq!(GroceryCategory::parse_loose("meat"), GroceryCategory::Meat);
        assert_eq!(GroceryCategory::parse_loose("MEAT"), GroceryCategory::Meat);
        assert_eq!(GroceryCategory::parse_loose(" Dairy "), GroceryCategory::Dairy);
        assert_eq!(GroceryCategory::parse_loose("snacks"), GroceryCategory::Other);
        assert_eq!(GroceryCategory::parse_loose(""), GroceryCategory::Other);
    }
}
