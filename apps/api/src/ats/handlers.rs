use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ats::catalog::Catalog;
use crate::ats::profiles::JobProfile;
use crate::ats::scorer::{ScoreReport, ScoringMode};
use crate::ats::validity::{validate_resume_content, ValidationResult};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ValidateRequest {
    pub text: String,
    pub threshold: Option<f64>,
}

#[derive(Deserialize)]
pub struct ScanRequest {
    pub text: String,
    pub profile_id: String,
    pub mode: Option<ScoringMode>,
    #[serde(default)]
    pub skip_validation: bool,
}

#[derive(Serialize)]
pub struct ScanResponse {
    pub validation: Option<ValidationResult>,
    pub report: ScoreReport,
}

/// GET /api/v1/ats/profiles
pub async fn handle_list_profiles(State(state): State<AppState>) -> Json<Vec<JobProfile>> {
    Json(state.catalog.profiles.list().to_vec())
}

/// GET /api/v1/ats/profiles/:id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobProfile>, AppError> {
    Ok(Json(resolve_profile(&state.catalog, &id)?.clone()))
}

/// POST /api/v1/ats/validate
pub async fn handle_validate(
    State(state): State<AppState>,
    Json(req): Json<ValidateRequest>,
) -> Json<ValidationResult> {
    let threshold = req.threshold.unwrap_or(state.config.validity_threshold);
    Json(validate_resume_content(&req.text, threshold))
}

/// POST /api/v1/ats/scan
/// Rejects non-resume text with 422 before any scoring happens.
pub async fn handle_scan(
    State(state): State<AppState>,
    Json(req): Json<ScanRequest>,
) -> Result<Json<ScanResponse>, AppError> {
    resolve_profile(&state.catalog, &req.profile_id)?;

    let validation = if req.skip_validation {
        None
    } else {
        let result = validate_resume_content(&req.text, state.config.validity_threshold);
        if !result.is_valid {
            warn!(
                "Rejected scan for profile '{}': confidence {:.1}",
                req.profile_id, result.confidence
            );
            return Err(AppError::UnprocessableEntity(
                serde_json::to_string(&result).unwrap_or_default(),
            ));
        }
        Some(result)
    };

    let report = score_text(state.catalog.clone(), req.text, req.profile_id, req.mode).await?;
    Ok(Json(ScanResponse { validation, report }))
}

/// Looks up a profile, treating an empty id as a missing selection.
pub fn resolve_profile<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a JobProfile, AppError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::Validation(
            "profile_id is required: select a job profile before scanning".to_string(),
        ));
    }
    catalog
        .profiles
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Profile '{id}' not found")))
}

/// Runs the scorer off the async runtime. `mode` overrides the configured one.
pub async fn score_text(
    catalog: Arc<Catalog>,
    text: String,
    profile_id: String,
    mode: Option<ScoringMode>,
) -> Result<ScoreReport, AppError> {
    let report = tokio::task::spawn_blocking(move || {
        let profile = resolve_profile(&catalog, &profile_id)?;
        let scorer = catalog.scorer();
        let mode = mode.unwrap_or(scorer.config().mode);
        Ok::<_, AppError>(scorer.analyze_with_mode(&text, profile, mode))
    })
    .await
    .context("Scoring task failed")??;
    Ok(report)
}
