pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ats::handlers as ats;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // ATS scanner
        .route("/api/v1/ats/profiles", get(ats::handle_list_profiles))
        .route("/api/v1/ats/profiles/:id", get(ats::handle_get_profile))
        .route("/api/v1/ats/validate", post(ats::handle_validate))
        .route("/api/v1/ats/scan", post(ats::handle_scan))
        // Resume editor
        .route("/api/v1/templates", get(resume::handle_list_templates))
        .route("/api/v1/templates/:id", get(resume::handle_get_template))
        .route("/api/v1/resumes/update", post(resume::handle_update))
        .route("/api/v1/resumes/score", post(resume::handle_score))
        .with_state(state)
}
