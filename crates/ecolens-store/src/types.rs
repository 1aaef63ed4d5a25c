//! Query parameter and result types for the analytics read path.

use serde::{Deserialize, Serialize};

/// Filters for the sentiment overview aggregation.
#[derive(Debug, Clone, Default)]
pub struct OverviewFilter {
    pub product_id: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    /// Trailing window size in days.
    pub days: u32,
}

/// Average sentiment and review count over a window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentOverview {
    /// None when no reviews matched.
    pub avg_sentiment: Option<f64>,
    pub count: i64,
}

/// Frequency of one signal label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalCount {
    pub label: String,
    pub count: i64,
}

/// One daily time bucket of the sentiment trend series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTrend {
    /// Bucket key, "YYYY-MM-DD" (UTC).
    pub day: String,
    pub avg_sentiment: f64,
    pub count: i64,
}

/// Store-level statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreStats {
    pub total_reviews: i64,
    pub total_signals: i64,
    pub db_path: String,
    pub db_size_mb: f64,
}
