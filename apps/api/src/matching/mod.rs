// Candidate/job match scoring.
// Pure computation only; handlers validate input and call into the scorer.

pub mod handlers;
pub mod location;
pub mod ranking;
pub mod scorer;
pub mod weights;
