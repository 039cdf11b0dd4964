use crate::errors::AppError;
use crate::models::requirement::JobRequirement;

/// Rejects requirements the scoring engine should never see.
pub fn validate_requirement(requirement: &JobRequirement) -> Result<(), AppError> {
    if requirement.job_title.trim().is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }

    let minimum = requirement.minimum_ats_score;
    if !minimum.is_finite() || !(0.0..=100.0).contains(&minimum) {
        return Err(AppError::Validation(format!(
            "minimum_ats_score must be between 0 and 100, got {minimum}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requirement(title: &str, minimum: f64) -> JobRequirement {
        JobRequirement {
            job_title: title.to_string(),
            required_skills: vec!["SQL".to_string()],
            preferred_skills: vec![],
            education_level: None,
            years_of_experience: None,
            job_description: None,
            keywords: vec![],
            minimum_ats_score: minimum,
        }
    }

    #[test]
    fn test_valid_requirement_passes() {
        assert!(validate_requirement(&requirement("Data Analyst", 60.0)).is_ok());
        assert!(validate_requirement(&requirement("Data Analyst", 0.0)).is_ok());
        assert!(validate_requirement(&requirement("Data Analyst", 100.0)).is_ok());
    }

    #[test]
    fn test_blank_title_rejected() {
        let err = validate_requirement(&requirement("   ", 50.0)).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("job_title")));
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        assert!(validate_requirement(&requirement("Analyst", 100.5)).is_err());
        assert!(validate_requirement(&requirement("Analyst", -1.0)).is_err());
        assert!(validate_requirement(&requirement("Analyst", f64::NAN)).is_err());
    }
}
