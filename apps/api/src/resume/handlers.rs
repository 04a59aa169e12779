use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::ats::handlers::{resolve_profile, score_text};
use crate::ats::scorer::{ScoreReport, ScoringMode};
use crate::errors::AppError;
use crate::resume::models::ResumeData;
use crate::resume::templates::{template, template_ids};
use crate::resume::update::ResumeUpdate;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UpdateRequest {
    pub resume: ResumeData,
    pub update: ResumeUpdate,
}

#[derive(Deserialize)]
pub struct ScoreResumeRequest {
    pub resume: ResumeData,
    pub profile_id: String,
    pub mode: Option<ScoringMode>,
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<&'static str>> {
    Json(template_ids())
}

/// GET /api/v1/templates/:id
pub async fn handle_get_template(Path(id): Path<String>) -> Result<Json<ResumeData>, AppError> {
    template(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Template '{id}' not found")))
}

/// POST /api/v1/resumes/update
pub async fn handle_update(Json(req): Json<UpdateRequest>) -> Result<Json<ResumeData>, AppError> {
    let mut resume = req.resume;
    debug!("Applying resume update: {:?}", req.update);
    resume.apply(req.update)?;
    Ok(Json(resume))
}

/// POST /api/v1/resumes/score
/// Scores the editor's own data; no validity pre-check.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(req): Json<ScoreResumeRequest>,
) -> Result<Json<ScoreReport>, AppError> {
    resolve_profile(&state.catalog, &req.profile_id)?;
    let text = req.resume.to_plain_text();
    let report = score_text(state.catalog.clone(), text, req.profile_id, req.mode).await?;
    Ok(Json(report))
}
