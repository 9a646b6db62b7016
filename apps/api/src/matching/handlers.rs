//! Axum route handlers for the Match API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::ranking::{
    annotate_jobs, rank_candidates, AnnotatedJob, RankOptions, RankedCandidate,
};
use crate::matching::scorer::MatchResult;
use crate::models::candidate::{CandidateProfile, CandidateProfileInput};
use crate::models::job::{JobPosting, JobPostingInput};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub candidate: CandidateProfileInput,
    pub job: JobPostingInput,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub job: JobPostingInput,
    pub candidates: Vec<CandidateProfileInput>,
    pub min_score: Option<u32>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub job_id: Uuid,
    pub total_candidates: usize,
    pub results: Vec<RankedCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct AnnotateRequest {
    pub candidate: CandidateProfileInput,
    pub jobs: Vec<JobPostingInput>,
}

#[derive(Debug, Serialize)]
pub struct AnnotateResponse {
    pub candidate_id: Uuid,
    pub results: Vec<AnnotatedJob>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match/score
///
/// Scores a single candidate against a single job.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<MatchResult>, AppError> {
    let candidate = CandidateProfile::try_from(request.candidate)?;
    let job = JobPosting::try_from(request.job)?;

    Ok(Json(state.scorer.score(&candidate, &job)))
}

/// POST /api/v1/match/rank
///
/// Ranks applicants for a job, best first, dropping those under `min_score`.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    check_batch_size(
        "candidates",
        request.candidates.len(),
        state.config.max_batch,
    )?;

    let min_score = request.min_score.unwrap_or(state.config.default_min_score);
    if min_score > 100 {
        return Err(AppError::Validation(format!(
            "min_score must be between 0 and 100 (got {min_score})"
        )));
    }

    let job = JobPosting::try_from(request.job)?;
    let candidates = request
        .candidates
        .into_iter()
        .enumerate()
        .map(|(i, c)| CandidateProfile::try_from(c).map_err(|e| at_index("candidates", i, e)))
        .collect::<Result<Vec<_>, _>>()?;

    let options = RankOptions {
        min_score,
        limit: request.limit,
    };
    let results = rank_candidates(&state.scorer, &job, &candidates, &options);

    tracing::debug!(
        job_id = %job.id,
        total = candidates.len(),
        kept = results.len(),
        min_score,
        "Ranked candidates"
    );

    Ok(Json(RankResponse {
        job_id: job.id,
        total_candidates: candidates.len(),
        results,
    }))
}

/// POST /api/v1/match/annotate
///
/// Annotates a job listing with match results for one candidate.
pub async fn handle_annotate(
    State(state): State<AppState>,
    Json(request): Json<AnnotateRequest>,
) -> Result<Json<AnnotateResponse>, AppError> {
    check_batch_size("jobs", request.jobs.len(), state.config.max_batch)?;

    let candidate = CandidateProfile::try_from(request.candidate)?;
    let jobs = request
        .jobs
        .into_iter()
        .enumerate()
        .map(|(i, j)| JobPosting::try_from(j).map_err(|e| at_index("jobs", i, e)))
        .collect::<Result<Vec<_>, _>>()?;

    let results = annotate_jobs(&state.scorer, &candidate, &jobs);

    tracing::debug!(candidate_id = %candidate.id, jobs = jobs.len(), "Annotated jobs");

    Ok(Json(AnnotateResponse {
        candidate_id: candidate.id,
        results,
    }))
}

fn check_batch_size(field: &str, len: usize, max: usize) -> Result<(), AppError> {
    if len > max {
        return Err(AppError::Validation(format!(
            "{field} accepts at most {max} entries (got {len})"
        )));
    }
    Ok(())
}

/// Prefixes a batch element's validation message with its position.
fn at_index(field: &str, index: usize, err: AppError) -> AppError {
    let AppError::Validation(msg) = err;
    AppError::Validation(format!("{field}[{index}]: {msg}"))
}
