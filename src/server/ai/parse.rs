//! Validation of model replies.
//!
//! Replies are expected to be bare JSON. Markdown code fences are stripped first since models
//! add them despite being told not to.

use dioxus_logger::tracing;
use serde_json::Value;

use crate::server::{
    ai::{DayPlan, Itinerary},
    error::ai::AiError,
};

/// Remove a surrounding ```` ``` ```` or ```` ```json ```` fence, if any.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the language tag on the opening fence line
    let rest = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };

    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn parse_json(text: &str) -> Result<Value, AiError> {
    serde_json::from_str(strip_code_fences(text)).map_err(|e| AiError::MalformedReply(e.to_string()))
}

/// Day numbers may come back as numbers or numeric strings.
fn day_number(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn day_plan(value: &Value) -> Result<DayPlan, AiError> {
    let day = value
        .get("day")
        .and_then(day_number)
        .ok_or(AiError::MissingField("day"))?;
    // A blank summary would overwrite a stored day with nothing
    let summary = value
        .get("summary")
        .and_then(Value::as_str)
        .filter(|summary| !summary.trim().is_empty())
        .ok_or(AiError::MissingField("summary"))?;

    Ok(DayPlan {
        day,
        summary: summary.to_string(),
    })
}

/// Parse a full itinerary reply of the form `{"days": [{"day": n, "summary": "..."}]}`.
///
/// A day count different from `expected_days` is logged and tolerated.
///
/// # Returns
/// - `Ok(Itinerary)` - Reply is well formed
/// - `Err(AiError::MalformedReply)` - Reply is not JSON, the caller may retry
/// - `Err(AiError::MissingField)` - JSON lacks `days` or an entry lacks `day`/`summary`, or has a
///   blank `summary`
pub fn parse_itinerary(text: &str, expected_days: i32) -> Result<Itinerary, AiError> {
    let value = parse_json(text)?;

    let entries = value
        .get("days")
        .and_then(Value::as_array)
        .ok_or(AiError::MissingField("days"))?;

    let days = entries.iter().map(day_plan).collect::<Result<Vec<_>, _>>()?;

    if days.len() != expected_days as usize {
        tracing::warn!(
            "Expected {} itinerary days, model returned {}",
            expected_days,
            days.len()
        );
    }

    Ok(Itinerary { days })
}

/// Parse a single day reply of the form `{"day": n, "summary": "..."}`.
///
/// A mismatched day number is corrected to `requested_day` with a warning.
pub fn parse_day(text: &str, requested_day: i32) -> Result<DayPlan, AiError> {
    let value = parse_json(text)?;
    let mut plan = day_plan(&value)?;

    if plan.day != requested_day {
        tracing::warn!(
            "Expected day {}, model returned day {}; correcting",
            requested_day,
            plan.day
        );
        plan.day = requested_day;
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod strip_code_fences {
        use super::*;

        #[test]
        fn leaves_bare_json() {
            assert_eq!(strip_code_fences("  {\"a\": 1}\n"), "{\"a\": 1}");
        }

        #[test]
        fn strips_tagged_fence() {
            assert_eq!(strip_code_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        }

        #[test]
        fn strips_plain_fence() {
            assert_eq!(strip_code_fences("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
        }
    }

    mod parse_itinerary {
        use super::*;

        #[test]
        fn parses_days() {
            let text = r#"{"days": [{"day": 1, "summary": "Old town"}, {"day": 2, "summary": "Coast"}]}"#;

            let itinerary = parse_itinerary(text, 2).unwrap();

            assert_eq!(
                itinerary.days,
                vec![
                    DayPlan {
                        day: 1,
                        summary: "Old town".to_string()
                    },
                    DayPlan {
                        day: 2,
                        summary: "Coast".to_string()
                    },
                ]
            );
        }

        /// Expect a short itinerary to be returned as is
        #[test]
        fn tolerates_count_mismatch() {
            let text = r#"{"days": [{"day": 1, "summary": "Only one"}]}"#;

            let itinerary = parse_itinerary(text, 3).unwrap();

            assert_eq!(itinerary.days.len(), 1);
        }

        #[test]
        fn parses_fenced_reply() {
            let text = "```json\n{\"days\": [{\"day\": \"1\", \"summary\": \"Fenced\"}]}\n```";

            let itinerary = parse_itinerary(text, 1).unwrap();

            assert_eq!(itinerary.days[0].day, 1);
            assert_eq!(itinerary.days[0].summary, "Fenced");
        }

        #[test]
        fn fails_for_invalid_json() {
            let result = parse_itinerary("Here is your trip!", 1);

            assert!(matches!(result, Err(AiError::MalformedReply(_))));
        }

        #[test]
        fn fails_without_days() {
            let result = parse_itinerary(r#"{"itinerary": []}"#, 1);

            assert!(matches!(result, Err(AiError::MissingField("days"))));
        }

        #[test]
        fn fails_for_entry_without_summary() {
            let result = parse_itinerary(r#"{"days": [{"day": 1}]}"#, 1);

            assert!(matches!(result, Err(AiError::MissingField("summary"))));
        }

        #[test]
        fn fails_for_entry_with_blank_summary() {
            let text = r#"{"days": [{"day": 1, "summary": "Harbour"}, {"day": 2, "summary": "  "}]}"#;

            let result = parse_itinerary(text, 2);

            assert!(matches!(result, Err(AiError::MissingField("summary"))));
        }
    }

    mod parse_day {
        use super::*;

        #[test]
        fn parses_day() {
            let plan = parse_day(r#"{"day": 2, "summary": "Markets"}"#, 2).unwrap();

            assert_eq!(plan.day, 2);
            assert_eq!(plan.summary, "Markets");
        }

        /// Expect the requested day number to win over the reply's
        #[test]
        fn corrects_mismatched_day() {
            let plan = parse_day(r#"{"day": 5, "summary": "Beach"}"#, 2).unwrap();

            assert_eq!(plan.day, 2);
            assert_eq!(plan.summary, "Beach");
        }

        #[test]
        fn fails_without_day() {
            let result = parse_day(r#"{"summary": "Beach"}"#, 2);

            assert!(matches!(result, Err(AiError::MissingField("day"))));
        }

        #[test]
        fn fails_for_empty_summary() {
            let result = parse_day(r#"{"day": 2, "summary": ""}"#, 2);

            assert!(matches!(result, Err(AiError::MissingField("summary"))));
        }
    }
}
