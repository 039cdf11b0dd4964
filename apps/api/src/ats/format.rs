use crate::models::resume::ResumeData;

const MIN_SKILLS: usize = 3;
const SHORT_CONTENT_CHARS: usize = 500;
const MIN_TEXT_CHARS: usize = 200;
const MAX_TEXT_CHARS: usize = 5000;
const SECTION_MARKERS: &[&str] = &["education", "experience", "skill"];

#[derive(Debug, Clone, PartialEq)]
pub struct FormatScore {
    pub score: f64,
    pub issues: Vec<String>,
}

/// Structural completeness of a parsed résumé. Starts at 100 and deducts a
/// fixed penalty per deficiency, never going below zero.
pub fn score_format(resume: &ResumeData) -> FormatScore {
    let text_len = resume.raw_text.chars().count();
    let lowered = resume.raw_text.to_lowercase();

    let checks: [(bool, f64, &str); 8] = [
        (!resume.has_name(), 10.0, "Missing name"),
        (!resume.has_email(), 15.0, "Missing email address"),
        (!resume.has_phone(), 10.0, "Missing phone number"),
        (
            resume.skills.len() < MIN_SKILLS,
            10.0,
            "Insufficient skills listed (less than 3)",
        ),
        (
            resume.education.is_empty(),
            15.0,
            "Missing education information",
        ),
        (
            resume.experience.is_empty() && text_len < SHORT_CONTENT_CHARS,
            10.0,
            "Limited experience or content",
        ),
        (
            text_len < MIN_TEXT_CHARS,
            15.0,
            "Resume too short (less than 200 characters)",
        ),
        (
            text_len > MAX_TEXT_CHARS,
            5.0,
            "Resume very long (may need trimming)",
        ),
    ];

    let mut score = 100.0;
    let mut issues = Vec::new();

    for (failed, penalty, issue) in checks {
        if failed {
            score -= penalty;
            issues.push(issue.to_string());
        }
    }

    if !SECTION_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        score -= 10.0;
        issues.push("Missing standard resume sections".to_string());
    }

    FormatScore {
        score: f64::max(score, 0.0),
        issues,
    }
}
