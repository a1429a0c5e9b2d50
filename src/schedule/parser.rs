// src/schedule/parser.rs

//! Defensive parsing of the model's reply.
//!
//! Malformed output degrades to "no items found" rather than an error; the
//! interpreter must never fail a request because the model rambled.

use tracing::error;

use super::types::RawItem;

/// Strip an optional leading ```json / ``` fence and trailing ``` fence.
/// Prefix/suffix trim only; anything fancier is the model's problem.
fn strip_code_fences(text: &str) -> &str {
    let mut cleaned = text.trim();
    if let Some(rest) = cleaned.strip_prefix("```json") {
        cleaned = rest;
    } else if let Some(rest) = cleaned.strip_prefix("```") {
        cleaned = rest;
    }
    if let Some(rest) = cleaned.strip_suffix("```") {
        cleaned = rest;
    }
    cleaned.trim()
}

/// Parse the model's reply as a JSON array of loosely-typed objects.
/// Any parse failure yields an empty vec.
pub fn parse_items(response: &str) -> Vec<RawItem> {
    if response.trim().is_empty() {
        return Vec::new();
    }

    let cleaned = strip_code_fences(response);
    match serde_json::from_str::<Vec<RawItem>>(cleaned) {
        Ok(items) => items,
        Err(e) => {
            error!("Failed to parse AI response: {} — {}", e, response);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARRAY: &str = r#"[{"type": "chore", "title": "Dishes"}]"#;

    #[test]
    fn parses_bare_array() {
        let items = parse_items(ARRAY);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["title"], "Dishes");
    }

    #[test]
    fn fenced_output_parses_identically() {
        let fenced = format!("```json\n{}\n```", ARRAY);
        assert_eq!(parse_items(&fenced), parse_items(ARRAY));

        let plain_fence = format!("```\n{}\n```", ARRAY);
        assert_eq!(parse_items(&plain_fence), parse_items(ARRAY));
    }

    #[test]
    fn garbage_yields_empty() {
        assert!(parse_items("I'm sorry, I can't help with that.").is_empty());
        assert!(parse_items("{\"type\": \"chore\"}").is_empty()); // object, not array
        assert!(parse_items("").is_empty());
        assert!(parse_items("   ").is_empty());
    }

    #[test]
    fn array_of_non_objects_yields_empty() {
        assert!(parse_items("[1, 2, 3]").is_empty());
    }

    #[test]
    fn empty_array_is_fine() {
        assert!(parse_items("[]").is_empty());
    }
}
