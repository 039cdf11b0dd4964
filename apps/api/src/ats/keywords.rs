//! Keyword overlap between résumé text, the recruiter's explicit keyword list
//! and words pulled from the job description.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum number of distinct keywords taken from a job description.
pub const MAX_DESCRIPTION_KEYWORDS: usize = 20;

const EXPLICIT_SHARE: f64 = 0.6;
const DESCRIPTION_SHARE: f64 = 0.4;
const EMPTY_SOURCE_SCORE: f64 = 50.0;

/// Lower-case alphabetic words of five or more letters.
static DESCRIPTION_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-z]{5,}\b").expect("description word pattern is valid"));

const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "but", "with", "from", "this", "that", "will", "would", "should", "could",
    "must", "have", "has", "been", "were", "was", "they", "their", "them", "these", "those",
];

#[derive(Debug, Clone, PartialEq)]
pub struct KeywordScore {
    pub score: f64,
    /// Explicit keywords found in the résumé, in their original casing.
    pub matched: Vec<String>,
}

/// Distinct candidate keywords from a job description, in first-occurrence
/// order, capped at [`MAX_DESCRIPTION_KEYWORDS`].
pub fn description_keywords(job_description: &str) -> Vec<String> {
    let lowered = job_description.to_lowercase();
    let mut keywords: Vec<String> = Vec::new();

    for word in DESCRIPTION_WORD.find_iter(&lowered).map(|m| m.as_str()) {
        if keywords.len() == MAX_DESCRIPTION_KEYWORDS {
            break;
        }
        if STOP_WORDS.contains(&word) || keywords.iter().any(|k| k == word) {
            continue;
        }
        keywords.push(word.to_string());
    }

    keywords
}

pub fn score_keywords(
    resume_text: &str,
    keywords: &[String],
    job_description: Option<&str>,
) -> KeywordScore {
    let text = resume_text.to_lowercase();

    let explicit: Vec<&String> = keywords.iter().filter(|k| !k.trim().is_empty()).collect();
    let matched: Vec<String> = explicit
        .iter()
        .filter(|k| text.contains(&k.to_lowercase()))
        .map(|k| k.to_string())
        .collect();

    let explicit_score = fraction_found(matched.len(), explicit.len());

    let description_score = job_description.map(|jd| {
        let derived = description_keywords(jd);
        let hits = derived.iter().filter(|k| text.contains(k.as_str())).count();
        fraction_found(hits, derived.len())
    });

    let score = match (explicit.is_empty(), description_score) {
        (false, Some(derived)) => explicit_score * EXPLICIT_SHARE + derived * DESCRIPTION_SHARE,
        (false, None) => explicit_score,
        (true, Some(derived)) => derived,
        (true, None) => 100.0,
    };

    KeywordScore { score, matched }
}

fn fraction_found(hits: usize, total: usize) -> f64 {
    if total == 0 {
        EMPTY_SOURCE_SCORE
    } else {
        hits as f64 / total as f64 * 100.0
    }
}
