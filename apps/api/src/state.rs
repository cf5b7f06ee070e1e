use std::sync::Arc;

use crate::config::Config;
use crate::matching::scorer::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable match scorer. Default: WeightedMatchScorer.
    pub scorer: Arc<dyn MatchScorer>,
}

#[cfg(test)]
pub fn test_state() -> AppState {
    use crate::matching::scorer::WeightedMatchScorer;

    AppState {
        config: Config::default(),
        scorer: Arc::new(WeightedMatchScorer::default()),
    }
}
