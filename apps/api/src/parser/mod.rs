//! Résumé text parser: heuristic extraction of contact details, skills and
//! section entries from plain résumé text into `ResumeData`.
//!
//! Binary formats (PDF, DOCX) are converted to text upstream.

pub mod catalog;

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{json, Value};

use crate::ats::skills::title_case;
use crate::models::resume::ResumeData;
use crate::parser::catalog::{catalog_skills, contains_term};

const NAME_SCAN_LINES: usize = 10;
const EDUCATION_DETAIL_CHARS: usize = 200;
const EXPERIENCE_DETAIL_CHARS: usize = 300;
const PROJECT_TITLE_CHARS: usize = 100;
const MAX_PROJECTS: usize = 5;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid parser pattern {pattern}: {e}"))
}

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"));

static PHONE_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        compile(r"\+?1?[-.\s]?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}"),
        compile(r"\+?\d{10,12}"),
        compile(r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}"),
    ]
});

static NAME_INVALID_CHAR: LazyLock<Regex> = LazyLock::new(|| compile(r"[^\w\s\-]"));

static SKILLS_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)(?:technical skills?|skills?|proficiency):\s*([^\n]+(?:\n[^\n]+){0,10})")
});
static EDUCATION_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)(?:education|academic|qualification):\s*([^\n]+(?:\n[^\n]+){0,15})")
});
static EXPERIENCE_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)(?:experience|work history|employment|career):\s*([^\n]+(?:\n[^\n]+){0,30})",
    )
});
static CERTIFICATION_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)(?:certifications?|certified|certificates?):\s*([^\n]+(?:\n[^\n]+){0,5})")
});
static PROJECT_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)(?:projects?|portfolio):\s*([^\n]+(?:\n[^\n]+){0,10})")
});

static LIST_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| compile(r"[,;|\n]"));
static CERT_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| compile(r"[,;\n]"));
static DEGREE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(bachelor|master|phd|doctorate|b\.?tech|m\.?tech|b\.?s\.?c|m\.?s\.?c|b\.?e|m\.?e)\b",
    )
});
static INSTITUTION: LazyLock<Regex> =
    LazyLock::new(|| compile(r"[A-Z][a-zA-Z &]+(?:University|College|Institute|School)"));
static JOB_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)software engineer|developer|intern|analyst|manager|engineer|designer|consultant|specialist",
    )
});
static DURATION: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\d{1,2}[+\s]*(?:years?|months?|yrs?)"));
static BULLET_PREFIX: LazyLock<Regex> = LazyLock::new(|| compile(r"^(?:\d+\.|[-•*])\s*"));

/// Parses plain résumé text. Never fails; fields that cannot be found are left empty.
pub fn parse_resume_text(text: &str) -> ResumeData {
    ResumeData {
        name: extract_name(text),
        email: EMAIL.find(text).map(|m| m.as_str().to_string()),
        phone: extract_phone(text),
        skills: extract_skills(text),
        education: extract_education(text),
        experience: extract_experience(text),
        certifications: extract_certifications(text),
        projects: extract_projects(text),
        raw_text: text.to_string(),
    }
}

fn extract_name(text: &str) -> Option<String> {
    text.lines()
        .take(NAME_SCAN_LINES)
        .map(str::trim)
        .filter(|line| {
            let lowered = line.to_lowercase();
            !line.contains('@') && !lowered.contains("phone") && !lowered.contains("http")
        })
        .find(|line| {
            let words = line.split_whitespace().count();
            (2..=4).contains(&words) && !NAME_INVALID_CHAR.is_match(line)
        })
        .map(str::to_string)
}

fn extract_phone(text: &str) -> Option<String> {
    PHONE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(text))
        .map(|m| m.as_str().trim().to_string())
}

fn section<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn clean_item(item: &str) -> &str {
    item.trim()
        .trim_matches(|c: char| c == '-' || c == '•' || c == '*')
        .trim()
}

fn prefix(text: &str, chars: usize) -> String {
    text.chars().take(chars).collect()
}

fn extract_skills(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut skills: Vec<String> = catalog_skills()
        .filter(|skill| contains_term(&lowered, skill))
        .map(str::to_string)
        .collect();

    if let Some(listed) = section(&SKILLS_SECTION, text) {
        skills.extend(
            LIST_SEPARATOR
                .split(listed)
                .map(clean_item)
                .filter(|item| item.chars().count() > 1)
                .map(str::to_string),
        );
    }

    let mut seen: Vec<String> = Vec::with_capacity(skills.len());
    skills.retain(|skill| {
        let key = skill.to_lowercase();
        if seen.contains(&key) {
            false
        } else {
            seen.push(key);
            true
        }
    });
    skills
}

fn extract_education(text: &str) -> Vec<Value> {
    let Some(block) = section(&EDUCATION_SECTION, text) else {
        return vec![];
    };
    let institutions: Vec<&str> = INSTITUTION
        .find_iter(block)
        .map(|m| m.as_str().trim())
        .collect();
    let details = prefix(block, EDUCATION_DETAIL_CHARS);

    DEGREE
        .find_iter(block)
        .enumerate()
        .map(|(i, degree)| {
            json!({
                "degree": title_case(degree.as_str()),
                "institution": institutions.get(i),
                "details": details,
            })
        })
        .collect()
}

fn extract_experience(text: &str) -> Vec<Value> {
    let Some(block) = section(&EXPERIENCE_SECTION, text) else {
        return vec![];
    };
    let durations: Vec<&str> = DURATION.find_iter(block).map(|m| m.as_str()).collect();
    let details = prefix(block, EXPERIENCE_DETAIL_CHARS);

    JOB_TITLE
        .find_iter(block)
        .enumerate()
        .map(|(i, title)| {
            json!({
                "title": title.as_str(),
                "duration": durations.get(i),
                "details": details,
            })
        })
        .collect()
}

fn extract_certifications(text: &str) -> Vec<String> {
    section(&CERTIFICATION_SECTION, text)
        .map(|block| {
            CERT_SEPARATOR
                .split(block)
                .map(clean_item)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn extract_projects(text: &str) -> Vec<Value> {
    let Some(block) = section(&PROJECT_SECTION, text) else {
        return vec![];
    };

    block
        .lines()
        .map(|line| BULLET_PREFIX.replace(line.trim(), "").trim().to_string())
        .filter(|line| line.chars().count() > 10)
        .take(MAX_PROJECTS)
        .map(|line| {
            json!({
                "title": prefix(&line, PROJECT_TITLE_CHARS),
                "description": line,
            })
        })
        .collect()
}
