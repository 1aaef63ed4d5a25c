//! Analytics routes over persisted annotated reviews.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::state::AppState;
use ecolens_store::OverviewFilter;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analytics/sentiment-overview", get(sentiment_overview))
        .route("/analytics/sdg12-signals", get(sdg12_signals))
        .route("/analytics/trends", get(trends))
}

fn clamp_days(days: Option<u32>, default: u32) -> u32 {
    days.unwrap_or(default).clamp(1, 365)
}

#[derive(Deserialize)]
struct OverviewQuery {
    product_id: Option<String>,
    brand: Option<String>,
    category: Option<String>,
    days: Option<u32>,
}

/// GET /api/analytics/sentiment-overview — average sentiment and count
/// over a trailing window, optionally filtered by product/brand/category.
async fn sentiment_overview(
    State(state): State<Arc<AppState>>,
    Query(q): Query<OverviewQuery>,
) -> impl IntoResponse {
    let filter = OverviewFilter {
        product_id: q.product_id,
        brand: q.brand,
        category: q.category,
        days: clamp_days(q.days, 90),
    };

    match state.store.sentiment_overview(&filter) {
        Ok(overview) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "avg_sentiment": overview.avg_sentiment,
                "count": overview.count,
            })),
        ),
        Err(e) => internal_error(e),
    }
}

#[derive(Deserialize)]
struct SignalsQuery {
    label: Option<String>,
    days: Option<u32>,
}

/// GET /api/analytics/sdg12-signals — signal label frequencies, descending.
async fn sdg12_signals(
    State(state): State<Arc<AppState>>,
    Query(q): Query<SignalsQuery>,
) -> impl IntoResponse {
    let days = clamp_days(q.days, 90);
    match state.store.signal_counts(days, q.label.as_deref()) {
        Ok(signals) => (
            StatusCode::OK,
            Json(serde_json::json!({ "signals": signals })),
        ),
        Err(e) => internal_error(e),
    }
}

#[derive(Deserialize)]
struct TrendsQuery {
    days: Option<u32>,
}

/// GET /api/analytics/trends — daily average-sentiment/count buckets.
async fn trends(
    State(state): State<Arc<AppState>>,
    Query(q): Query<TrendsQuery>,
) -> impl IntoResponse {
    let days = clamp_days(q.days, 30);
    match state.store.daily_trends(days) {
        Ok(buckets) => (StatusCode::OK, Json(serde_json::json!({ "days": buckets }))),
        Err(e) => internal_error(e),
    }
}

fn internal_error(e: ecolens_core::Error) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": e.to_string() })),
    )
}
