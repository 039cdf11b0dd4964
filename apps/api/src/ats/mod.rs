//! ATS scoring engine: turns a parsed résumé and a job requirement into a
//! weighted fitness score, a pass/fail decision and a diagnostic breakdown.
//!
//! Every call is pure and synchronous. `AppState` holds an `Arc<dyn AtsScorer>`
//! so handlers never depend on the concrete engine.

pub mod education;
pub mod experience;
pub mod format;
pub mod handlers;
pub mod keywords;
pub mod similarity;
pub mod skills;
pub mod weights;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ats::weights::{round2, ScoringWeights, SubScores};
use crate::models::requirement::JobRequirement;
use crate::models::resume::ResumeData;

/// Default similarity ratio at which two skill names are considered the same.
pub const DEFAULT_SKILL_SIMILARITY_THRESHOLD: f64 = 0.7;

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

/// Result of one scoring call. Scores are percentages rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub ats_score: f64,
    pub passed: bool,
    pub skill_match_score: f64,
    pub education_score: f64,
    pub experience_score: f64,
    pub keyword_match_score: f64,
    pub format_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub matched_keywords: Vec<String>,
    pub format_issues: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores a résumé against a requirement. Implementations must be total:
/// missing data lowers the score, it never produces an error.
pub trait AtsScorer: Send + Sync {
    fn score(&self, resume: &ResumeData, requirement: &JobRequirement) -> ScoringResult;
}

// ────────────────────────────────────────────────────────────────────────────
// AtsEngine lexical multi-factor scorer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct AtsEngine {
    skill_similarity_threshold: f64,
}

impl Default for AtsEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SKILL_SIMILARITY_THRESHOLD)
    }
}

impl AtsEngine {
    pub fn new(skill_similarity_threshold: f64) -> Self {
        Self {
            skill_similarity_threshold,
        }
    }
}

impl AtsScorer for AtsEngine {
    fn score(&self, resume: &ResumeData, requirement: &JobRequirement) -> ScoringResult {
        let skill = skills::score_skills(
            &resume.skills,
            &requirement.required_skills,
            &requirement.preferred_skills,
            self.skill_similarity_threshold,
        );
        let education =
            education::score_education(&resume.education, requirement.education_level());
        let experience = experience::score_experience(
            &resume.experience,
            &resume.raw_text,
            requirement.years_of_experience(),
        );
        let keyword = keywords::score_keywords(
            &resume.raw_text,
            &requirement.keywords,
            requirement.job_description(),
        );
        let format = format::score_format(resume);

        let sub_scores = SubScores {
            skill: skill.score,
            education,
            experience,
            keyword: keyword.score,
            format: format.score,
        };
        let weights = ScoringWeights::for_requirement(requirement);
        let ats_score = round2(weights.combine(&sub_scores));
        let passed = ats_score >= requirement.minimum_ats_score;

        debug!(
            job_title = %requirement.job_title,
            skill = sub_scores.skill,
            education = sub_scores.education,
            experience = sub_scores.experience,
            keyword = sub_scores.keyword,
            format = sub_scores.format,
            weight_total = weights.total(),
            "Computed ATS sub-scores"
        );
        info!(
            job_title = %requirement.job_title,
            ats_score,
            minimum = requirement.minimum_ats_score,
            passed,
            "Scored resume"
        );

        ScoringResult {
            ats_score,
            passed,
            skill_match_score: round2(sub_scores.skill),
            education_score: round2(sub_scores.education),
            experience_score: round2(sub_scores.experience),
            keyword_match_score: round2(sub_scores.keyword),
            format_score: round2(sub_scores.format),
            matched_skills: skill.matched,
            missing_skills: skill.missing,
            matched_keywords: keyword.matched,
            format_issues: format.issues,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
