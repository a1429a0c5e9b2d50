// src/schedule/prompt.rs

//! System prompt for the schedule interpreter. Pure function of the date.

use chrono::NaiveDate;

/// Instruction prompt describing the four record kinds and their JSON field
/// vocabulary. Relative dates in the user's text are resolved against the
/// supplied date.
pub fn build_system_prompt(today: NaiveDate) -> String {
    format!(
        r#"You are a helpful family schedule assistant. Parse the user's free-form text and extract:
- Chores (tasks with due dates, assign points 5-20 based on difficulty)
- Calendar events (appointments, activities, family events)
- Medication reminders (medicine names, times to take them)
- Grocery items (things to buy, food items, household supplies)

Return a JSON array of items. Each item should have:
{{
    "type": "chore" | "event" | "medication" | "grocery",
    "title": "title of the item",
    "description": "optional description",
    "dateTime": "ISO datetime string (YYYY-MM-DDTHH:mm:ss) or null",
    "endDateTime": "for events only, ISO string or null",
    "points": number (for chores only, 5-20),
    "dosage": "for medications only",
    "times": ["morning", "afternoon", "evening"] (for medications),
    "category": "PRODUCE" | "DAIRY" | "MEAT" | "PANTRY" | "OTHER" (for groceries)
}}

If dates are relative like "tomorrow" or "next Monday", calculate from today's date.
Today is: {today}

Return ONLY valid JSON array, no markdown or explanation."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_the_supplied_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let prompt = build_system_prompt(date);
        assert!(prompt.contains("Today is: 2025-03-10"));
    }

    #[test]
    fn prompt_is_deterministic() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(build_system_prompt(date), build_system_prompt(date));
    }

    #[test]
    fn prompt_names_all_four_kinds() {
        let prompt = build_system_prompt(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        for kind in ["chore", "event", "medication", "grocery"] {
            assert!(prompt.contains(kind), "missing kind: {kind}");
        }
    }
}
