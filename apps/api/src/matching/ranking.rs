//! Batch helpers over `MatchScorer`: rank candidates for one job, annotate
//! job listings for one candidate. Each pair is scored independently.

use serde::Serialize;
use uuid::Uuid;

use crate::matching::scorer::{MatchResult, MatchScorer};
use crate::models::availability::Availability;
use crate::models::candidate::CandidateProfile;
use crate::models::job::JobPosting;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankOptions {
    /// Candidates scoring below this are dropped.
    pub min_score: u32,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    pub candidate_id: Uuid,
    pub availability: Option<Availability>,
    pub result: MatchResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedJob {
    pub job_id: Uuid,
    pub title: String,
    pub result: MatchResult,
}

/// Scores every candidate against `job`, filters by `min_score` and sorts by
/// score descending. Ties keep their input order.
pub fn rank_candidates(
    scorer: &MatchScorer,
    job: &JobPosting,
    candidates: &[CandidateProfile],
    options: &RankOptions,
) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = candidates
        .iter()
        .map(|candidate| RankedCandidate {
            candidate_id: candidate.id,
            availability: candidate.availability.clone(),
            result: scorer.score(candidate, job),
        })
        .filter(|r| r.result.score >= options.min_score)
        .collect();

    ranked.sort_by(|a, b| b.result.score.cmp(&a.result.score));

    if let Some(limit) = options.limit {
        ranked.truncate(limit);
    }
    ranked
}

/// Pairs every job with its match result for `candidate`, in input order.
pub fn annotate_jobs(
    scorer: &MatchScorer,
    candidate: &CandidateProfile,
    jobs: &[JobPosting],
) -> Vec<AnnotatedJob> {
    jobs.iter()
        .map(|job| AnnotatedJob {
            job_id: job.id,
            title: job.title.clone(),
            result: scorer.score(candidate, job),
        })
        .collect()
}
