//! Skill matching: fuzzy comparison of résumé skills against required and
//! preferred skill lists.

use crate::ats::similarity::ratio;

/// Share of the skill sub-score carried by required skills when both lists exist.
const REQUIRED_SHARE: f64 = 0.7;
const PREFERRED_SHARE: f64 = 0.3;
/// Preferred skills on their own are capped at half credit.
const PREFERRED_ONLY_FACTOR: f64 = 0.5;
/// Sub-score used for an empty list when the other list is present.
const EMPTY_LIST_SCORE: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillScore {
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Scores résumé skills against the requirement's skill lists.
///
/// A required or preferred skill matches a résumé skill when their similarity
/// ratio reaches `threshold` or either one contains the other.
pub fn score_skills(
    resume_skills: &[String],
    required_skills: &[String],
    preferred_skills: &[String],
    threshold: f64,
) -> SkillScore {
    let resume = normalize(resume_skills);
    let required = normalize(required_skills);
    let preferred = normalize(preferred_skills);

    if required.is_empty() && preferred.is_empty() {
        return SkillScore {
            score: 100.0,
            matched: vec![],
            missing: vec![],
        };
    }

    let mut matched = Vec::new();
    let mut missing = Vec::new();

    let mut required_hits = 0;
    for skill in &required {
        let label = title_case(skill);
        if has_match(skill, &resume, threshold) {
            required_hits += 1;
            push_unique(&mut matched, label);
        } else {
            push_unique(&mut missing, label);
        }
    }

    let mut preferred_hits = 0;
    for skill in &preferred {
        if has_match(skill, &resume, threshold) {
            preferred_hits += 1;
            push_unique(&mut matched, title_case(skill));
        }
    }

    let required_score = percentage(required_hits, required.len());
    let preferred_score = percentage(preferred_hits, preferred.len());

    let score = match (required.is_empty(), preferred.is_empty()) {
        (false, false) => required_score * REQUIRED_SHARE + preferred_score * PREFERRED_SHARE,
        (false, true) => required_score,
        (true, false) => preferred_score * PREFERRED_ONLY_FACTOR,
        (true, true) => 100.0,
    };

    SkillScore {
        score,
        matched,
        missing,
    }
}

/// Lower-cases and trims tokens, dropping blanks. Repeated entries are kept so
/// each one counts towards the hit ratio.
fn normalize(skills: &[String]) -> Vec<String> {
    skills
        .iter()
        .map(|skill| skill.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

fn has_match(skill: &str, resume_skills: &[String], threshold: f64) -> bool {
    resume_skills.iter().any(|candidate| {
        candidate.contains(skill)
            || skill.contains(candidate.as_str())
            || ratio(skill, candidate) >= threshold
    })
}

fn percentage(hits: usize, total: usize) -> f64 {
    if total == 0 {
        EMPTY_LIST_SCORE
    } else {
        hits as f64 / total as f64 * 100.0
    }
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest,
/// so "node.js" becomes "Node.Js" and "c++" becomes "C++".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 0.7;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_three_of_four_required_skills() {
        let result = score_skills(
            &strings(&["python", "fastapi", "sql"]),
            &strings(&["Python", "FastAPI", "SQL", "Git"]),
            &[],
            THRESHOLD,
        );
        assert!((result.score - 75.0).abs() < f64::EPSILON);
        assert_eq!(result.matched, strings(&["Python", "Fastapi", "Sql"]));
        assert_eq!(result.missing, strings(&["Git"]));
    }

    #[test]
    fn test_no_requirements_scores_full() {
        let result = score_skills(&strings(&["rust"]), &[], &[], THRESHOLD);
        assert_eq!(result.score, 100.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_substring_match_counts() {
        let result = score_skills(
            &strings(&["postgresql"]),
            &strings(&["postgres"]),
            &[],
            THRESHOLD,
        );
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_fuzzy_match_above_threshold() {
        let result = score_skills(
            &strings(&["reactjs"]),
            &strings(&["React.js"]),
            &[],
            THRESHOLD,
        );
        assert_eq!(result.matched, strings(&["React.Js"]));
    }

    #[test]
    fn test_dissimilar_skill_is_missing() {
        let result = score_skills(&strings(&["java"]), &strings(&["Kotlin"]), &[], THRESHOLD);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.missing, strings(&["Kotlin"]));
    }

    #[test]
    fn test_required_and_preferred_combination() {
        // required 1/2 = 50, preferred 1/1 = 100 → 0.7*50 + 0.3*100 = 65
        let result = score_skills(
            &strings(&["rust", "docker"]),
            &strings(&["Rust", "Haskell"]),
            &strings(&["Docker"]),
            THRESHOLD,
        );
        assert!((result.score - 65.0).abs() < 1e-9);
        assert_eq!(result.matched, strings(&["Rust", "Docker"]));
        assert_eq!(result.missing, strings(&["Haskell"]));
    }

    #[test]
    fn test_preferred_only_is_halved() {
        let result = score_skills(
            &strings(&["docker"]),
            &[],
            &strings(&["Docker"]),
            THRESHOLD,
        );
        assert_eq!(result.score, 50.0);
    }

    #[test]
    fn test_preferred_duplicate_of_required_not_double_counted() {
        let result = score_skills(
            &strings(&["rust"]),
            &strings(&["Rust"]),
            &strings(&["rust"]),
            THRESHOLD,
        );
        assert_eq!(result.matched, strings(&["Rust"]));
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_repeated_required_skill_counts_each_entry() {
        // 2 of 3 entries hit; the labels are still listed once
        let result = score_skills(
            &strings(&["python"]),
            &strings(&["Python", "python", "Go"]),
            &[],
            THRESHOLD,
        );
        assert!((result.score - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.matched, strings(&["Python"]));
        assert_eq!(result.missing, strings(&["Go"]));
    }

    #[test]
    fn test_blank_resume_tokens_do_not_match_everything() {
        let result = score_skills(&strings(&["", "  "]), &strings(&["Go"]), &[], THRESHOLD);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_adding_exact_required_skill_never_decreases_score() {
        let required = strings(&["Rust", "Kafka", "Terraform"]);
        let mut resume = strings(&["rust"]);
        let before = score_skills(&resume, &required, &[], THRESHOLD).score;
        resume.push("Kafka".to_string());
        let after = score_skills(&resume, &required, &[], THRESHOLD).score;
        assert!(after >= before);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("c++"), "C++");
        assert_eq!(title_case("ci/cd"), "Ci/Cd");
    }
}
