//! Shared application state.

use ecolens_core::{EcoLensConfig, PIPELINE_VERSION};
use ecolens_nlp::{Annotator, SentimentScorer};
use ecolens_store::ReviewStore;

/// Shared state accessible from all route handlers. The annotator is built
/// once here so the scorer's lexicon setup is amortized across requests.
pub struct AppState {
    pub config: EcoLensConfig,
    pub store: ReviewStore,
    pub annotator: Annotator,
}

impl AppState {
    pub fn new(config: EcoLensConfig, store: ReviewStore) -> Self {
        let scorer = SentimentScorer::new(config.sentiment_model.clone());
        let annotator = Annotator::new(scorer, PIPELINE_VERSION);
        Self {
            config,
            store,
            annotator,
        }
    }
}
