//! Axum route handlers for the Matching API.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::ranking::{rank_applicants, rank_jobs_paced, ApplicantMatch};
use crate::matching::scorer::{MatchResult, MatchTier};
use crate::models::{CandidateProfile, JobPosting};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub candidate_id: Uuid,
    pub job_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub match_result: MatchResult,
    pub tier: MatchTier,
    pub scorer_backend: String,
}

/// Either a stored candidate or an inline profile, never both.
#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub candidate_id: Option<Uuid>,
    pub candidate: Option<CandidateProfile>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub run_id: Uuid,
    pub candidate_id: Uuid,
    pub jobs_scored: usize,
    pub recommendations: Vec<MatchResult>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApplicantsResponse {
    pub job_id: Uuid,
    pub applicants: Vec<ApplicantMatch>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/matches/score
///
/// Scores one stored job against one stored candidate (one-click apply preview).
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let candidate = load_candidate(&state, request.candidate_id).await?;
    let job = load_job(&state, request.job_id).await?;

    let match_result = state.scorer.score(&candidate, &job);

    Ok(Json(ScoreResponse {
        tier: match_result.tier(),
        match_result,
        scorer_backend: state.scorer.backend().to_string(),
    }))
}

/// POST /api/v1/matches/rank
///
/// Ranks every listed job for the candidate and returns the top recommendations.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    let candidate = match (request.candidate_id, request.candidate) {
        (Some(id), None) => load_candidate(&state, id).await?,
        (None, Some(inline)) => inline,
        (Some(_), Some(_)) => {
            return Err(AppError::Validation(
                "provide either candidate_id or candidate, not both".to_string(),
            ))
        }
        (None, None) => {
            return Err(AppError::Validation(
                "candidate_id or candidate is required".to_string(),
            ))
        }
    };

    let jobs: Vec<JobPosting> = state.jobs.list_jobs().await?;
    let run_id = Uuid::new_v4();
    info!(
        "Ranking run {run_id}: candidate {} against {} jobs",
        candidate.id,
        jobs.len()
    );

    let recommendations = rank_jobs_paced(
        state.scorer.as_ref(),
        &candidate,
        &jobs,
        &state.config.ranking,
        state.config.pacing,
        |progress| {
            debug!(
                %run_id,
                processed = progress.processed,
                total = progress.total,
                percent = progress.percent,
                "ranking progress"
            )
        },
    )
    .await;

    Ok(Json(RankResponse {
        run_id,
        candidate_id: candidate.id,
        jobs_scored: jobs.len(),
        recommendations,
        generated_at: Utc::now(),
    }))
}

/// GET /api/v1/jobs/:id/applicants
///
/// Ranks all known candidates for one job (employer review).
pub async fn handle_applicants(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<ApplicantsResponse>, AppError> {
    let job = load_job(&state, job_id).await?;
    let candidates = state.candidates.list_candidates().await?;

    let applicants = rank_applicants(
        state.scorer.as_ref(),
        &job,
        &candidates,
        &state.config.ranking,
    );

    Ok(Json(ApplicantsResponse { job_id, applicants }))
}

async fn load_candidate(state: &AppState, id: Uuid) -> Result<CandidateProfile, AppError> {
    state
        .candidates
        .get_candidate(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))
}

async fn load_job(state: &AppState, id: Uuid) -> Result<JobPosting, AppError> {
    state
        .jobs
        .get_job(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}
