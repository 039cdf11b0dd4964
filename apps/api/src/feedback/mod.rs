//! Rejection feedback: explains a failing score and suggests improvements.
//!
//! Operates only on the engine's output plus the inputs it scored; candidates
//! who pass receive no feedback.

use serde::{Deserialize, Serialize};

use crate::ats::ScoringResult;
use crate::models::requirement::JobRequirement;
use crate::models::resume::ResumeData;

const SKILL_REASON_BELOW: f64 = 70.0;
const EDUCATION_REASON_BELOW: f64 = 60.0;
const EXPERIENCE_REASON_BELOW: f64 = 60.0;
const KEYWORD_REASON_BELOW: f64 = 60.0;
const FORMAT_REASON_BELOW: f64 = 80.0;
const FORMAT_ADVICE_BELOW: f64 = 90.0;
const SKILL_STRENGTH_FROM: f64 = 50.0;
const SIGNIFICANT_GAP: f64 = 20.0;
const MINOR_GAP: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectionFeedback {
    pub ats_score: f64,
    pub minimum_required_score: f64,
    pub rejection_reasons: Vec<String>,
    pub missing_critical_skills: Vec<String>,
    pub resume_strengths: Vec<String>,
    pub resume_weaknesses: Vec<String>,
    pub improvement_recommendations: Vec<String>,
    pub format_issues: Vec<String>,
    pub mistake_highlights: Vec<String>,
}

fn or_fallback(items: Vec<String>, fallback: &[&str]) -> Vec<String> {
    if items.is_empty() {
        fallback.iter().map(|s| s.to_string()).collect()
    } else {
        items
    }
}

fn first_n(items: &[String], n: usize) -> String {
    items.iter().take(n).cloned().collect::<Vec<_>>().join(", ")
}

/// Builds feedback for a failed result. Returns `None` when the candidate passed.
pub fn generate_feedback(
    result: &ScoringResult,
    resume: &ResumeData,
    requirement: &JobRequirement,
) -> Option<RejectionFeedback> {
    if result.passed {
        return None;
    }

    let mut reasons = Vec::new();
    let mut recommendations = Vec::new();
    let mut highlights = Vec::new();

    if result.skill_match_score < SKILL_REASON_BELOW {
        reasons.push(format!(
            "Insufficient skill match ({:.1}%). Missing {} required skills.",
            result.skill_match_score,
            result.missing_skills.len()
        ));
        if !result.missing_skills.is_empty() {
            recommendations.push(format!(
                "Add these required skills to your resume: {}",
                first_n(&result.missing_skills, 5)
            ));
            highlights.push(format!(
                "Critical missing skills: {}",
                result.missing_skills.join(", ")
            ));
        }
    }

    if result.education_score < EDUCATION_REASON_BELOW {
        let required = requirement.education_level();
        reasons.push(format!(
            "Education requirement not fully met ({:.1}%). Required: {}",
            result.education_score,
            required.unwrap_or("Not specified")
        ));
        if let Some(level) = required {
            recommendations.push(format!(
                "Consider highlighting your educational qualifications more prominently, \
                 especially if you have {level} or equivalent"
            ));
        }
    }

    if result.experience_score < EXPERIENCE_REASON_BELOW {
        let required = requirement.years_of_experience();
        reasons.push(format!(
            "Insufficient experience ({:.1}%). Required: {} years",
            result.experience_score,
            required.map_or_else(|| "Not specified".to_string(), |y| y.to_string())
        ));
        if let Some(years) = required {
            recommendations.push(format!(
                "Include more detailed experience descriptions. Highlight relevant projects, \
                 internships, or work experience that demonstrates {years}+ years of relevant work"
            ));
        }
        highlights.push("Experience section needs more detail or better formatting".to_string());
    }

    if result.keyword_match_score < KEYWORD_REASON_BELOW {
        reasons.push(format!(
            "Low keyword relevance ({:.1}%). \
             Resume may not align well with job description keywords.",
            result.keyword_match_score
        ));
        recommendations.push(
            "Review the job description and incorporate relevant keywords naturally into your \
             resume. Focus on technical terms and domain-specific vocabulary used in the job \
             posting."
                .to_string(),
        );
    }

    if result.format_score < FORMAT_REASON_BELOW {
        reasons.push(format!(
            "Resume format needs improvement ({:.1}%).",
            result.format_score
        ));
        for issue in result.format_issues.iter().take(3) {
            highlights.push(issue.clone());
            if issue.contains("Missing") {
                recommendations.push(format!("Ensure your resume includes: {issue}"));
            }
        }
    }

    let mut strengths = Vec::new();
    if result.skill_match_score >= SKILL_STRENGTH_FROM {
        strengths.push(format!(
            "Good skill alignment: {} matching skills found",
            result.matched_skills.len()
        ));
    }
    if !result.matched_skills.is_empty() {
        strengths.push(format!(
            "Strong technical skills: {}",
            first_n(&result.matched_skills, 5)
        ));
    }
    if resume.experience.len() >= 2 {
        strengths.push("Good experience history with multiple positions".to_string());
    }
    if !resume.certifications.is_empty() {
        strengths.push("Has professional certifications".to_string());
    }
    if !resume.projects.is_empty() {
        strengths.push("Has project portfolio".to_string());
    }

    let mut weaknesses = Vec::new();
    if !resume.has_email() {
        weaknesses.push("Missing contact email".to_string());
    }
    if resume.skills.len() < 5 {
        weaknesses.push("Limited skills listed - expand your skills section".to_string());
    }
    if resume.experience.is_empty() && resume.projects.is_empty() {
        weaknesses.push("No work experience or projects highlighted".to_string());
    }

    let score_gap = requirement.minimum_ats_score - result.ats_score;
    if score_gap > SIGNIFICANT_GAP {
        recommendations.push(
            "Significant improvement needed. Consider: 1) Adding more relevant work experience, \
             2) Highlighting required skills more prominently, \
             3) Getting feedback from industry professionals"
                .to_string(),
        );
    } else if score_gap > MINOR_GAP {
        recommendations.push(
            "Minor improvements could help. Focus on: 1) Enhancing skill descriptions, \
             2) Better keyword optimization, 3) Improving resume format and structure"
                .to_string(),
        );
    }

    if result.skill_match_score < result.ats_score {
        recommendations.push(
            "Priority: Add missing required skills. If you have these skills but haven't listed \
             them, make sure to include them in your skills section and mention them in your \
             experience descriptions."
                .to_string(),
        );
    }

    if result.format_score < FORMAT_ADVICE_BELOW {
        recommendations.push(
            "Improve resume formatting: Ensure all sections are clearly labeled, use consistent \
             formatting, and make sure contact information is easily visible."
                .to_string(),
        );
    }

    let threshold_reason = format!(
        "ATS score ({:.1}%) below minimum threshold ({:.1}%)",
        result.ats_score, requirement.minimum_ats_score
    );
    let gap_highlight = format!(
        "ATS score {:.1}% is {:.1}% below required threshold",
        result.ats_score, score_gap
    );

    Some(RejectionFeedback {
        ats_score: result.ats_score,
        minimum_required_score: requirement.minimum_ats_score,
        rejection_reasons: or_fallback(reasons, &[threshold_reason.as_str()]),
        missing_critical_skills: result.missing_skills.iter().take(3).cloned().collect(),
        resume_strengths: or_fallback(strengths, &["Resume has basic structure in place"]),
        resume_weaknesses: or_fallback(
            weaknesses,
            &["Overall resume needs enhancement to meet job requirements"],
        ),
        improvement_recommendations: or_fallback(
            recommendations,
            &[
                "Review job requirements carefully and tailor your resume to match them better",
                "Ensure all required skills are mentioned in your resume",
                "Add more detail to experience and education sections",
            ],
        ),
        format_issues: result.format_issues.clone(),
        mistake_highlights: or_fallback(highlights, &[gap_highlight.as_str()]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result(passed: bool) -> ScoringResult {
        ScoringResult {
            ats_score: 42.5,
            passed,
            skill_match_score: 50.0,
            education_score: 30.0,
            experience_score: 40.0,
            keyword_match_score: 55.0,
            format_score: 65.0,
            matched_skills: vec!["Python".into(), "Sql".into()],
            missing_skills: vec!["Docker".into(), "Kafka".into(), "Go".into(), "Rust".into()],
            matched_keywords: vec![],
            format_issues: vec![
                "Missing phone number".into(),
                "Insufficient skills listed (less than 3)".into(),
            ],
        }
    }

    fn requirement() -> JobRequirement {
        JobRequirement {
            job_title: "Platform Engineer".to_string(),
            required_skills: vec!["Python".into()],
            preferred_skills: vec![],
            education_level: Some("Master's".into()),
            years_of_experience: Some(3),
            job_description: None,
            keywords: vec![],
            minimum_ats_score: 70.0,
        }
    }

    #[test]
    fn test_passing_result_has_no_feedback() {
        assert!(generate_feedback(&result(true), &ResumeData::default(), &requirement()).is_none());
    }

    #[test]
    fn test_reasons_cover_every_weak_dimension() {
        let feedback =
            generate_feedback(&result(false), &ResumeData::default(), &requirement()).unwrap();
        assert_eq!(feedback.rejection_reasons.len(), 5);
        assert!(feedback.rejection_reasons[0].contains("50.0%"));
        assert!(feedback.rejection_reasons[0].contains("Missing 4 required skills"));
        assert!(feedback.rejection_reasons[1].contains("Master's"));
        assert!(feedback.rejection_reasons[2].contains("Required: 3 years"));
        assert_eq!(feedback.missing_critical_skills, vec!["Docker", "Kafka", "Go"]);
        assert_eq!(feedback.minimum_required_score, 70.0);
    }

    #[test]
    fn test_recommendations_and_highlights() {
        let feedback =
            generate_feedback(&result(false), &ResumeData::default(), &requirement()).unwrap();
        assert!(feedback.improvement_recommendations[0].ends_with("Docker, Kafka, Go, Rust"));
        assert!(feedback
            .improvement_recommendations
            .iter()
            .any(|r| r == "Ensure your resume includes: Missing phone number"));
        // gap is 27.5 → significant
        assert!(feedback
            .improvement_recommendations
            .iter()
            .any(|r| r.starts_with("Significant improvement needed")));
        assert!(feedback
            .mistake_highlights
            .contains(&"Insufficient skills listed (less than 3)".to_string()));
        assert_eq!(feedback.format_issues.len(), 2);
    }

    #[test]
    fn test_strengths_and_weaknesses_from_resume() {
        let resume = ResumeData {
            email: Some("dev@example.com".into()),
            skills: vec!["a".into(), "b".into(), "c".into(), "d".into(), "e".into()],
            experience: vec![json!({"title": "Intern"}), json!({"title": "Analyst"})],
            certifications: vec!["CKA".into()],
            projects: vec![json!({"title": "Chat app"})],
            ..Default::default()
        };
        let feedback = generate_feedback(&result(false), &resume, &requirement()).unwrap();
        assert_eq!(
            feedback.resume_strengths,
            vec![
                "Good skill alignment: 2 matching skills found",
                "Strong technical skills: Python, Sql",
                "Good experience history with multiple positions",
                "Has professional certifications",
                "Has project portfolio",
            ]
        );
        assert_eq!(
            feedback.resume_weaknesses,
            vec!["Overall resume needs enhancement to meet job requirements"]
        );
    }

    #[test]
    fn test_fallbacks_when_no_dimension_is_weak() {
        let strong = ScoringResult {
            ats_score: 82.0,
            passed: false,
            skill_match_score: 90.0,
            education_score: 100.0,
            experience_score: 100.0,
            keyword_match_score: 80.0,
            format_score: 95.0,
            matched_skills: vec![],
            missing_skills: vec![],
            matched_keywords: vec![],
            format_issues: vec![],
        };
        let mut req = requirement();
        req.minimum_ats_score = 85.0;
        let feedback = generate_feedback(&strong, &ResumeData::default(), &req).unwrap();
        assert_eq!(
            feedback.rejection_reasons,
            vec!["ATS score (82.0%) below minimum threshold (85.0%)"]
        );
        assert_eq!(
            feedback.mistake_highlights,
            vec!["ATS score 82.0% is 3.0% below required threshold"]
        );
        assert_eq!(feedback.improvement_recommendations.len(), 3);
        assert_eq!(
            feedback.resume_strengths,
            vec!["Good skill alignment: 0 matching skills found"]
        );
    }
}
