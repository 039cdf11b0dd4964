use serde_json::Value;

/// Credential phrases and their rank, checked in order. Longer phrases that
/// share a prefix with shorter aliases must come first.
const EDUCATION_HIERARCHY: &[(&str, u8)] = &[
    ("phd", 5),
    ("doctorate", 5),
    ("master", 4),
    ("m.sc", 4),
    ("m.tech", 4),
    ("mba", 4),
    ("m.e", 4),
    ("bachelor", 3),
    ("b.sc", 3),
    ("b.tech", 3),
    ("b.e", 3),
    ("b.a", 3),
    ("diploma", 2),
    ("certificate", 1),
];

/// Rank of the first hierarchy phrase found in `text`, or 0.
fn first_level(text: &str) -> u8 {
    EDUCATION_HIERARCHY
        .iter()
        .find(|(phrase, _)| text.contains(phrase))
        .map(|(_, level)| *level)
        .unwrap_or(0)
}

/// Highest rank of any hierarchy phrase found in `text`, or 0.
fn highest_level(text: &str) -> u8 {
    EDUCATION_HIERARCHY
        .iter()
        .filter(|(phrase, _)| text.contains(phrase))
        .map(|(_, level)| *level)
        .max()
        .unwrap_or(0)
}

/// Scores the résumé's highest credential against the required level.
///
/// Unknown or absent requirements score 100. Otherwise: meeting the level
/// scores 100, one level short 60, anything lower 30.
pub fn score_education(entries: &[Value], required_level: Option<&str>) -> f64 {
    let required = match required_level {
        Some(level) => first_level(&level.to_lowercase()),
        None => 0,
    };
    if required == 0 {
        return 100.0;
    }

    let resume_text = entries
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let resume_level = highest_level(&resume_text);

    if resume_level >= required {
        100.0
    } else if resume_level + 1 == required {
        60.0
    } else {
        30.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_requirement_scores_full() {
        assert_eq!(score_education(&[], None), 100.0);
    }

    #[test]
    fn test_unrecognized_requirement_scores_full() {
        assert_eq!(score_education(&[], Some("Any graduate")), 100.0);
    }

    #[test]
    fn test_masters_required_with_no_education() {
        assert_eq!(score_education(&[], Some("Master's")), 30.0);
    }

    #[test]
    fn test_meets_requirement() {
        let entries = vec![json!({"degree": "Bachelor of Technology", "institution": "NIT"})];
        assert_eq!(score_education(&entries, Some("Bachelor's")), 100.0);
    }

    #[test]
    fn test_one_level_short() {
        let entries = vec![json!({"degree": "Bachelor of Science"})];
        assert_eq!(score_education(&entries, Some("Master's degree")), 60.0);
    }

    #[test]
    fn test_highest_entry_wins() {
        let entries = vec![
            json!({"degree": "Diploma in Electronics"}),
            json!({"degree": "PhD, Computer Science"}),
        ];
        assert_eq!(score_education(&entries, Some("Doctorate")), 100.0);
    }

    #[test]
    fn test_first_match_in_requirement_wins() {
        // "phd" is listed before "master", so a combined phrase ranks as a doctorate
        assert_eq!(first_level("master's or phd"), 5);
        assert_eq!(first_level("mba preferred"), 4);
    }
}
