//! Stats and service info routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/stats", get(get_stats))
}

/// GET /api/stats — storage statistics and pipeline identity.
async fn get_stats(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let store_stats = state.store.get_stats().unwrap_or_else(|_| {
        ecolens_store::StoreStats {
            total_reviews: 0,
            total_signals: 0,
            db_path: String::new(),
            db_size_mb: 0.0,
        }
    });

    Json(serde_json::json!({
        "reviews": store_stats.total_reviews,
        "signals": store_stats.total_signals,
        "dbSizeMb": store_stats.db_size_mb,
        "pipelineVersion": ecolens_core::PIPELINE_VERSION,
        "sentimentModel": state.config.sentiment_model,
    }))
}
