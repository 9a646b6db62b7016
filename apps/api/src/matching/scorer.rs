//! Match Scorer — deterministic candidate/job compatibility score.
//!
//! Pure function of (CandidateProfile, JobPosting): no I/O, no shared mutable
//! state. Results are recomputed on every request and never persisted.
//!
//! Algorithm:
//! 1. skills: share of job-required skills present in the candidate's skills
//!    (case-insensitive), rounded to an integer percentage; 0 when the job
//!    lists no skills
//! 2. experience: step function on years (absent → 50, ≥5 → 100, ≥3 → 75,
//!    ≥1 → 50, 0 → 25)
//! 3. education: 100 when education details are present, else 50
//! 4. location: delegated to the configured `LocationMatcher`
//! 5. overall = round(Σ category × weight), weights from `DEFAULT_WEIGHTS`

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::matching::location::{LocationMatcher, SubstringLocationMatcher};
use crate::matching::weights::{MatchWeights, DEFAULT_WEIGHTS};
use crate::models::candidate::CandidateProfile;
use crate::models::job::JobPosting;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// One job-required skill tagged with whether the candidate has it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillMatch {
    pub skill: String,
    pub matched: bool,
}

/// The four category sub-scores feeding the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchBreakdown {
    pub skills_match: u32,     // 0 – 100
    pub experience_match: u32, // 25 | 50 | 75 | 100
    pub education_match: u32,  // 50 | 100
    pub location_match: bool,
}

/// Full match result returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub score: u32, // 0 – 100
    pub breakdown: MatchBreakdown,
    /// Follows the job's required-skill order.
    pub matched_skills: Vec<SkillMatch>,
}

// ────────────────────────────────────────────────────────────────────────────
// Scorer
// ────────────────────────────────────────────────────────────────────────────

/// Stateless scorer. Cheap to clone; carried in `AppState`.
#[derive(Clone)]
pub struct MatchScorer {
    location_matcher: Arc<dyn LocationMatcher>,
    weights: MatchWeights,
}

impl MatchScorer {
    pub fn new(location_matcher: Arc<dyn LocationMatcher>) -> Self {
        debug_assert!((DEFAULT_WEIGHTS.sum() - 1.0).abs() < 1e-9);
        Self {
            location_matcher,
            weights: DEFAULT_WEIGHTS,
        }
    }

    pub fn location_backend(&self) -> &'static str {
        self.location_matcher.backend()
    }

    pub fn score(&self, candidate: &CandidateProfile, job: &JobPosting) -> MatchResult {
        let (skills_match, matched_skills) =
            compute_skills_match(&candidate.skills, &job.required_skills);

        let breakdown = MatchBreakdown {
            skills_match,
            experience_match: compute_experience_match(candidate.years_of_experience),
            education_match: compute_education_match(candidate.education_details.as_deref()),
            location_match: self
                .location_matcher
                .matches(candidate.location.as_deref(), job.location.as_deref()),
        };

        MatchResult {
            score: compute_overall_score(&breakdown, &self.weights),
            breakdown,
            matched_skills,
        }
    }
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new(Arc::new(SubstringLocationMatcher))
    }
}

impl fmt::Debug for MatchScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchScorer")
            .field("location_matcher", &self.location_matcher.backend())
            .field("weights", &self.weights)
            .finish()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Category scores
// ────────────────────────────────────────────────────────────────────────────

/// Returns the skills percentage and the per-skill list in the job's order.
pub fn compute_skills_match(
    candidate_skills: &[String],
    required_skills: &[String],
) -> (u32, Vec<SkillMatch>) {
    if required_skills.is_empty() {
        return (0, Vec::new());
    }

    let candidate_set: HashSet<String> =
        candidate_skills.iter().map(|s| s.to_lowercase()).collect();

    let matched_skills: Vec<SkillMatch> = required_skills
        .iter()
        .map(|skill| SkillMatch {
            skill: skill.clone(),
            matched: candidate_set.contains(&skill.to_lowercase()),
        })
        .collect();

    let matched_count = matched_skills.iter().filter(|m| m.matched).count();
    let percentage = (matched_count as f64 / required_skills.len() as f64) * 100.0;

    (round_half_up(percentage), matched_skills)
}

pub fn compute_experience_match(years_of_experience: Option<u32>) -> u32 {
    match years_of_experience {
        None => 50,
        Some(y) if y >= 5 => 100,
        Some(y) if y >= 3 => 75,
        Some(y) if y >= 1 => 50,
        Some(_) => 25,
    }
}

pub fn compute_education_match(education_details: Option<&str>) -> u32 {
    match education_details {
        Some(details) if !details.is_empty() => 100,
        _ => 50,
    }
}

/// Weighted sum of the breakdown, rounded once at the end.
/// Term order is fixed so float results stay reproducible.
pub fn compute_overall_score(breakdown: &MatchBreakdown, weights: &MatchWeights) -> u32 {
    let location = if breakdown.location_match { 100.0 } else { 0.0 };

    let weighted = breakdown.skills_match as f64 * weights.skills
        + breakdown.experience_match as f64 * weights.experience
        + breakdown.education_match as f64 * weights.education
        + location * weights.location;

    round_half_up(weighted).min(100)
}

/// Inputs are never negative, so `f64::round` (half away from zero) is half-up here.
fn round_half_up(value: f64) -> u32 {
    value.max(0.0).round() as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
