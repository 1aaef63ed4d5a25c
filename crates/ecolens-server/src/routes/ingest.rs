//! Review ingestion route.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use tracing::{error, info};

use crate::state::AppState;
use ecolens_core::RawReview;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/ingest/reviews", post(ingest_reviews))
}

/// POST /api/ingest/reviews — annotate and persist a batch of raw reviews.
///
/// Missing `created_at` defaults to now and missing `source` to an empty
/// map before annotation. Persistence is one transaction: the response
/// reports either the full batch size or an error with nothing written.
async fn ingest_reviews(
    State(state): State<Arc<AppState>>,
    Json(items): Json<Vec<RawReview>>,
) -> impl IntoResponse {
    let now = Utc::now();
    let raws: Vec<RawReview> = items
        .into_iter()
        .map(|mut raw| {
            raw.created_at.get_or_insert(now);
            raw.source.get_or_insert_with(Default::default);
            raw
        })
        .collect();

    let annotated = state.annotator.annotate_batch(raws);

    match state.store.insert_reviews(&annotated) {
        Ok(inserted) => {
            info!(inserted, "ingested review batch");
            (
                StatusCode::OK,
                Json(serde_json::json!({ "inserted": inserted })),
            )
        }
        Err(e) => {
            error!("review batch insert failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string(), "inserted": 0 })),
            )
        }
    }
}
