use crate::config::Config;
use crate::matching::scorer::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Config,
    /// Stateless scorer. Location strategy is chosen at startup.
    pub scorer: MatchScorer,
}
