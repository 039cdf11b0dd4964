use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static YEARS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+\.?\d*)\s*(?:years?|yrs?)").expect("years pattern is valid")
});

/// Largest "<n> years" figure found in `text`, ignoring unparsable numbers.
fn max_years_in(text: &str) -> Option<f64> {
    YEARS_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<f64>().ok())
        .reduce(f64::max)
}

fn duration_text(entry: &Value) -> Option<String> {
    match entry.get("duration")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Maximum claimed years of experience across the raw text and every
/// experience entry's `duration`. Zero when nothing is found.
pub fn extract_years(entries: &[Value], raw_text: &str) -> f64 {
    let from_entries = entries
        .iter()
        .filter_map(duration_text)
        .filter_map(|d| max_years_in(&d));

    max_years_in(raw_text)
        .into_iter()
        .chain(from_entries)
        .fold(0.0, f64::max)
}

/// Scores claimed experience against the required minimum.
pub fn score_experience(entries: &[Value], raw_text: &str, required_years: Option<u32>) -> f64 {
    let required = match required_years {
        Some(years) if years > 0 => f64::from(years),
        _ => return 100.0,
    };

    let years = extract_years(entries, raw_text);

    if years >= required {
        100.0
    } else if years >= required * 0.7 {
        80.0
    } else if years >= required * 0.5 {
        60.0
    } else if years > 0.0 {
        40.0
    } else {
        10.0
    }
}
