//! Location compatibility strategies.
//!
//! Default: `SubstringLocationMatcher`, a coarse text heuristic (no geocoding).
//! `MatchScorer` holds an `Arc<dyn LocationMatcher>` so another backend can be
//! swapped in at startup without touching handlers.

/// Decides whether a candidate's location satisfies a job's location.
pub trait LocationMatcher: Send + Sync {
    /// Short backend label, surfaced on `/health`.
    fn backend(&self) -> &'static str;

    fn matches(&self, candidate_location: Option<&str>, job_location: Option<&str>) -> bool;
}

/// Case-insensitive, one-directional containment check.
///
/// Matches when either side is unspecified, when the candidate location
/// contains the job location, or when the candidate location mentions "remote".
/// A candidate in "San Francisco, CA Remote" therefore matches a job in "CA",
/// but a candidate in "CA" does not match a job in "San Francisco, CA".
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringLocationMatcher;

const REMOTE_MARKER: &str = "remote";

impl LocationMatcher for SubstringLocationMatcher {
    fn backend(&self) -> &'static str {
        "substring"
    }

    fn matches(&self, candidate_location: Option<&str>, job_location: Option<&str>) -> bool {
        let job = match job_location {
            Some(j) if !j.is_empty() => j,
            _ => return true,
        };
        let candidate = match candidate_location {
            Some(c) if !c.is_empty() => c,
            _ => return true,
        };

        let candidate = candidate.to_lowercase();
        candidate.contains(&job.to_lowercase()) || candidate.contains(REMOTE_MARKER)
    }
}
