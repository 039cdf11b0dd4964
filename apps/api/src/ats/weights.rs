use crate::models::requirement::JobRequirement;

/// Per-dimension weights applied to the five sub-scores.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringWeights {
    pub skill: f64,
    pub keyword: f64,
    pub experience: f64,
    pub education: f64,
    pub format: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 0.40,
            keyword: 0.25,
            experience: 0.20,
            education: 0.10,
            format: 0.05,
        }
    }
}

/// The five sub-scores, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub skill: f64,
    pub education: f64,
    pub experience: f64,
    pub keyword: f64,
    pub format: f64,
}

impl ScoringWeights {
    /// Base weights shifted away from dimensions the requirement leaves unspecified.
    ///
    /// The three adjustments are applied in sequence and are not renormalized,
    /// so when more than one fires the weights can sum to less than 1.0.
    pub fn for_requirement(requirement: &JobRequirement) -> Self {
        let mut weights = Self::default();

        if !requirement.has_skill_requirements() {
            weights.skill = 0.20;
            weights.keyword += 0.10;
            weights.experience += 0.10;
        }

        if requirement.years_of_experience().is_none() {
            weights.experience = 0.10;
            weights.skill += 0.05;
            weights.keyword += 0.05;
        }

        if requirement.education_level().is_none() {
            weights.education = 0.05;
            weights.skill += 0.025;
            weights.keyword += 0.025;
        }

        weights
    }

    pub fn total(&self) -> f64 {
        self.skill + self.keyword + self.experience + self.education + self.format
    }

    /// Weighted sum of the sub-scores.
    pub fn combine(&self, scores: &SubScores) -> f64 {
        scores.skill * self.skill
            + scores.keyword * self.keyword
            + scores.experience * self.experience
            + scores.education * self.education
            + scores.format * self.format
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
