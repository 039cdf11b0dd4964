use serde::{Deserialize, Serialize};

pub const DEFAULT_MINIMUM_ATS_SCORE: f64 = 50.0;

fn default_minimum_ats_score() -> f64 {
    DEFAULT_MINIMUM_ATS_SCORE
}

/// Structured job requirement posted by a recruiter.
///
/// `required_skills` has no serde default: a payload without it is malformed
/// and rejected by the `Json` extractor before scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequirement {
    pub job_title: String,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub education_level: Option<String>,
    #[serde(default)]
    pub years_of_experience: Option<u32>,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default = "default_minimum_ats_score")]
    pub minimum_ats_score: f64,
}

impl JobRequirement {
    /// Education level with blank strings treated as unset.
    pub fn education_level(&self) -> Option<&str> {
        self.education_level
            .as_deref()
            .filter(|level| !level.trim().is_empty())
    }

    /// Years of experience with zero treated as unset.
    pub fn years_of_experience(&self) -> Option<u32> {
        self.years_of_experience.filter(|years| *years > 0)
    }

    pub fn job_description(&self) -> Option<&str> {
        self.job_description
            .as_deref()
            .filter(|jd| !jd.trim().is_empty())
    }

    pub fn has_skill_requirements(&self) -> bool {
        !self.required_skills.is_empty() || !self.preferred_skills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_payload_uses_defaults() {
        let json = r#"{"job_title": "Backend Intern", "required_skills": ["Rust"]}"#;
        let req: JobRequirement = serde_json::from_str(json).unwrap();
        assert_eq!(req.minimum_ats_score, DEFAULT_MINIMUM_ATS_SCORE);
        assert!(req.preferred_skills.is_empty());
        assert!(req.keywords.is_empty());
        assert!(req.education_level().is_none());
        assert!(req.years_of_experience().is_none());
    }

    #[test]
    fn test_missing_required_skills_is_rejected() {
        let json = r#"{"job_title": "Backend Intern"}"#;
        assert!(serde_json::from_str::<JobRequirement>(json).is_err());
    }

    #[test]
    fn test_blank_and_zero_fields_are_unset() {
        let json = r#"{
            "job_title": "Analyst",
            "required_skills": [],
            "education_level": "   ",
            "years_of_experience": 0,
            "job_description": ""
        }"#;
        let req: JobRequirement = serde_json::from_str(json).unwrap();
        assert!(req.education_level().is_none());
        assert!(req.years_of_experience().is_none());
        assert!(req.job_description().is_none());
        assert!(!req.has_skill_requirements());
    }
}
