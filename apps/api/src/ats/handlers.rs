//! Axum route handlers for the ATS API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;
use tracing::{info, warn};
use uuid::Uuid;

use crate::ats::{AtsScorer, ScoringResult};
use crate::errors::{AppError, AppJson};
use crate::feedback::{generate_feedback, RejectionFeedback};
use crate::models::requirement::JobRequirement;
use crate::models::resume::ResumeData;
use crate::parser::parse_resume_text;
use crate::state::AppState;
use crate::validation::validate_requirement;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// A requirement plus one résumé source. A structured `resume` takes
/// precedence over `resume_text` when both are supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRequest {
    pub job_requirement: JobRequirement,
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub resume: Option<ResumeData>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BatchItem {
    Scored(ScoringResult),
    Failed { error: String },
}

#[derive(Debug, Serialize)]
pub struct BatchScoreResponse {
    pub results: Vec<BatchItem>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    pub candidate_id: Uuid,
    pub ats_result: ScoringResult,
    pub feedback: Option<RejectionFeedback>,
    pub message: String,
    pub evaluated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ParseResumeRequest {
    pub resume_text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Shared pipeline
// ────────────────────────────────────────────────────────────────────────────

fn resolve_resume(request: ScoreRequest) -> Result<(ResumeData, JobRequirement), AppError> {
    validate_requirement(&request.job_requirement)?;

    let resume = match (request.resume, request.resume_text) {
        (Some(resume), _) => resume,
        (None, Some(text)) if !text.trim().is_empty() => parse_resume_text(&text),
        _ => {
            return Err(AppError::Validation(
                "Either resume or resume_text must be provided".to_string(),
            ))
        }
    };

    Ok((resume, request.job_requirement))
}

fn score_request(
    scorer: &dyn AtsScorer,
    request: ScoreRequest,
) -> Result<(ScoringResult, ResumeData, JobRequirement), AppError> {
    let (resume, requirement) = resolve_resume(request)?;
    let result = scorer.score(&resume, &requirement);
    Ok((result, resume, requirement))
}

fn evaluation_message(result: &ScoringResult, requirement: &JobRequirement) -> String {
    if result.passed {
        format!(
            "Candidate PASSED! ATS Score: {:.2}% (Minimum Required: {:.1}%). Matched {} skills.",
            result.ats_score,
            requirement.minimum_ats_score,
            result.matched_skills.len()
        )
    } else {
        format!(
            "Candidate rejected. ATS Score: {:.2}% (Minimum Required: {:.1}%).",
            result.ats_score, requirement.minimum_ats_score
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/score
///
/// Scores one résumé against a job requirement.
pub async fn handle_score(
    State(state): State<AppState>,
    AppJson(request): AppJson<ScoreRequest>,
) -> Result<Json<ScoringResult>, AppError> {
    let (result, _, _) = score_request(state.scorer.as_ref(), request)?;
    Ok(Json(result))
}

/// POST /api/v1/ats/batch-score
///
/// Scores independent requests on blocking worker threads. A failing item is
/// reported in place and does not abort the rest of the batch.
pub async fn handle_batch_score(
    State(state): State<AppState>,
    AppJson(requests): AppJson<Vec<ScoreRequest>>,
) -> Result<Json<BatchScoreResponse>, AppError> {
    if requests.len() > state.config.max_batch_size {
        return Err(AppError::Validation(format!(
            "Batch of {} exceeds the maximum of {} requests",
            requests.len(),
            state.config.max_batch_size
        )));
    }

    let total = requests.len();
    let mut tasks = JoinSet::new();
    for (index, request) in requests.into_iter().enumerate() {
        let scorer = state.scorer.clone();
        tasks.spawn_blocking(move || {
            let outcome = score_request(scorer.as_ref(), request).map(|(result, _, _)| result);
            (index, outcome)
        });
    }

    let mut slots: Vec<Option<BatchItem>> = (0..total).map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        let (index, outcome) = joined.map_err(|e| AppError::Internal(e.into()))?;
        let item = match outcome {
            Ok(result) => BatchItem::Scored(result),
            Err(e) => {
                warn!(index, "Batch item failed: {e}");
                BatchItem::Failed {
                    error: e.to_string(),
                }
            }
        };
        slots[index] = Some(item);
    }

    let results: Vec<BatchItem> = slots.into_iter().flatten().collect();
    info!(total, "Batch scoring complete");

    Ok(Json(BatchScoreResponse { results, total }))
}

/// POST /api/v1/evaluate
///
/// Scores a candidate and attaches rejection feedback when they fall below
/// the requirement's minimum score.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    AppJson(request): AppJson<ScoreRequest>,
) -> Result<Json<EvaluationResponse>, AppError> {
    let candidate_id = Uuid::new_v4();
    let (result, resume, requirement) = score_request(state.scorer.as_ref(), request)?;

    let feedback = generate_feedback(&result, &resume, &requirement);
    let message = match &feedback {
        Some(feedback) => format!(
            "{} Feedback provided with {} rejection reasons and {} recommendations.",
            evaluation_message(&result, &requirement),
            feedback.rejection_reasons.len(),
            feedback.improvement_recommendations.len()
        ),
        None => evaluation_message(&result, &requirement),
    };

    info!(%candidate_id, passed = result.passed, "Candidate evaluated");

    Ok(Json(EvaluationResponse {
        candidate_id,
        ats_result: result,
        feedback,
        message,
        evaluated_at: Utc::now(),
    }))
}

/// POST /api/v1/resumes/parse
///
/// Returns the structured résumé extracted from plain text, for previewing
/// what the scorer will see.
pub async fn handle_parse_resume(
    AppJson(request): AppJson<ParseResumeRequest>,
) -> Result<Json<ResumeData>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    Ok(Json(parse_resume_text(&request.resume_text)))
}
