//! Lenient parsing of model output into a `SummaryResult`
//!
//! Models are asked for strict JSON but routinely wrap it in markdown
//! fences or drift from the schema. This parser strips fences, coerces
//! field shapes, and degrades to a best-effort result instead of failing.

use serde_json::Value;
use tracing::warn;

use crate::summarize::types::{KeyPoint, SummaryResult};

/// How much raw output to preserve when the JSON cannot be parsed.
const FALLBACK_SUMMARY_CHARS: usize = 500;

const FALLBACK_TITLE: &str = "Summary partially generated";
const FALLBACK_KEY_POINT: &str =
    "Could not parse the summary output. Inspect the raw model response.";
const UNKNOWN_TITLE: &str = "Unknown title";

/// Convert raw model output into a `SummaryResult`. Never fails: malformed
/// output yields a degraded result carrying the first part of the raw text.
pub fn parse_summary_response(raw: &str, chunk_count: usize) -> SummaryResult {
    let body = strip_code_fences(raw.trim());

    let data: Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(err) => {
            warn!("Summary output is not valid JSON, using fallback: {err}");
            return fallback_result(raw, chunk_count);
        }
    };

    let Some(object) = data.as_object() else {
        warn!("Summary output is valid JSON but not an object, using fallback");
        return fallback_result(raw, chunk_count);
    };

    let key_points = object
        .get("key_points")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(coerce_key_point).collect())
        .unwrap_or_default();

    let topics = object
        .get("topics")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    SummaryResult {
        title: object
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_TITLE)
            .to_string(),
        summary: object
            .get("summary")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        key_points,
        topics,
        chunk_count,
    }
}

/// Recover the JSON body from a fenced code block: drop the opening fence
/// line and any later line that is itself a fence marker.
fn strip_code_fences(text: &str) -> String {
    if !text.starts_with("```") {
        return text.to_string();
    }

    text.lines()
        .skip(1)
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn fallback_result(raw: &str, chunk_count: usize) -> SummaryResult {
    SummaryResult {
        title: FALLBACK_TITLE.to_string(),
        summary: raw.chars().take(FALLBACK_SUMMARY_CHARS).collect(),
        key_points: vec![KeyPoint::new(FALLBACK_KEY_POINT, None)],
        topics: Vec::new(),
        chunk_count,
    }
}

/// Key-point entries drift between a bare string, a well-formed object,
/// and stranger shapes; resolve each explicitly here rather than failing
/// the whole response.
fn coerce_key_point(value: &Value) -> KeyPoint {
    match value {
        Value::String(text) => KeyPoint::new(text.clone(), None),
        Value::Object(map) => {
            let text = map
                .get("text")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let start_seconds = map.get("start_seconds").and_then(coerce_seconds);
            KeyPoint::new(text, start_seconds)
        }
        other => KeyPoint::new(other.to_string(), None),
    }
}

/// Accept integer, float, or numeric-string seconds; anything negative or
/// unparseable becomes `None`.
fn coerce_seconds(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                u32::try_from(i).ok()
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f as u32)
            }
        }
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_output() {
        let raw = r#"{
            "title": "Rust in practice",
            "summary": "A tour of ownership and borrowing.",
            "key_points": [
                { "text": "Ownership moves values", "start_seconds": 12 },
                { "text": "Borrowing avoids copies", "start_seconds": null }
            ],
            "topics": ["rust", "ownership"]
        }"#;

        let result = parse_summary_response(raw, 1);

        assert_eq!(result.title, "Rust in practice");
        assert_eq!(result.summary, "A tour of ownership and borrowing.");
        assert_eq!(result.key_points.len(), 2);
        assert_eq!(result.key_points[0].start_seconds, Some(12));
        assert_eq!(result.key_points[1].start_seconds, None);
        assert_eq!(result.topics, vec!["rust", "ownership"]);
        assert_eq!(result.chunk_count, 1);
    }

    #[test]
    fn strips_markdown_fences() {
        let raw = "```json\n{\"title\": \"Fenced\", \"summary\": \"s\"}\n```";

        let result = parse_summary_response(raw, 3);

        assert_eq!(result.title, "Fenced");
        assert_eq!(result.chunk_count, 3);
    }

    #[test]
    fn non_json_input_yields_degraded_result() {
        let raw = "Sorry, I could not produce JSON this time.";

        let result = parse_summary_response(raw, 2);

        assert_eq!(result.title, FALLBACK_TITLE);
        assert_eq!(result.summary, raw);
        assert_eq!(result.key_points.len(), 1);
        assert!(result.topics.is_empty());
        assert_eq!(result.chunk_count, 2);
    }

    #[test]
    fn fallback_summary_is_truncated_to_500_chars() {
        let raw = "x".repeat(2000);

        let result = parse_summary_response(&raw, 1);

        assert_eq!(result.summary.chars().count(), 500);
    }

    #[test]
    fn json_array_is_treated_as_malformed() {
        let result = parse_summary_response("[1, 2, 3]", 1);
        assert_eq!(result.title, FALLBACK_TITLE);
    }

    #[test]
    fn key_points_tolerate_mixed_shapes() {
        let raw = r#"{"key_points": ["a", {"text": "b", "start_seconds": "12"}]}"#;

        let result = parse_summary_response(raw, 1);

        assert_eq!(result.key_points[0], KeyPoint::new("a", None));
        assert_eq!(result.key_points[1], KeyPoint::new("b", Some(12)));
    }

    #[test]
    fn unexpected_key_point_shapes_are_stringified() {
        let raw = r#"{"key_points": [42, true]}"#;

        let result = parse_summary_response(raw, 1);

        assert_eq!(result.key_points[0].text, "42");
        assert_eq!(result.key_points[1].text, "true");
        assert_eq!(result.key_points[0].start_seconds, None);
    }

    #[test]
    fn seconds_coercion_rejects_garbage() {
        assert_eq!(coerce_seconds(&serde_json::json!(-5)), None);
        assert_eq!(coerce_seconds(&serde_json::json!("not a number")), None);
        assert_eq!(coerce_seconds(&serde_json::json!(12.7)), Some(12));
        assert_eq!(coerce_seconds(&serde_json::json!("34")), Some(34));
        assert_eq!(coerce_seconds(&serde_json::json!(null)), None);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let result = parse_summary_response("{}", 1);

        assert_eq!(result.title, UNKNOWN_TITLE);
        assert!(result.summary.is_empty());
        assert!(result.key_points.is_empty());
        assert!(result.topics.is_empty());
    }
}
