use std::sync::Arc;

use crate::config::Config;
use crate::matching::scorer::MatchScorer;
use crate::providers::{CandidateProfileProvider, JobListingProvider};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable match scorer. Default: WeightedMatchScorer.
    pub scorer: Arc<dyn MatchScorer>,
    pub candidates: Arc<dyn CandidateProfileProvider>,
    pub jobs: Arc<dyn JobListingProvider>,
}

#[cfg(test)]
pub fn test_state() -> AppState {
    use std::time::Duration;

    use crate::matching::ranking::RankingOptions;
    use crate::matching::scorer::WeightedMatchScorer;
    use crate::providers::fixtures::FixtureStore;

    let store = Arc::new(FixtureStore::load(None).expect("embedded seed must load"));
    AppState {
        config: Config {
            port: 0,
            rust_log: "debug".to_string(),
            fixtures_path: None,
            ranking: RankingOptions::default(),
            pacing: Duration::ZERO,
        },
        scorer: Arc::new(WeightedMatchScorer::default()),
        candidates: store.clone(),
        jobs: store,
    }
}
