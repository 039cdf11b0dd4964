pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ats::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // ATS API
        .route("/api/v1/ats/score", post(handlers::handle_score))
        .route("/api/v1/ats/batch-score", post(handlers::handle_batch_score))
        .route("/api/v1/evaluate", post(handlers::handle_evaluate))
        // Résumé parsing preview
        .route("/api/v1/resumes/parse", post(handlers::handle_parse_resume))
        .with_state(state)
}
