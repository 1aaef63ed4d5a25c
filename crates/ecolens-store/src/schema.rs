//! Database schema SQL.
//!
//! `reviews` denormalizes the fields the analytics queries filter on
//! (brand, category, platform, sentiment, language) and keeps the full
//! annotated record as JSON. `review_signals` is one row per SDG12 tag so
//! labels can be grouped and counted directly.

pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS reviews (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    product_id TEXT NOT NULL,
    brand TEXT,
    category TEXT,
    platform TEXT,
    text TEXT NOT NULL,
    rating REAL,
    language TEXT NOT NULL,
    sentiment_score REAL NOT NULL,
    sentiment_label TEXT NOT NULL,
    dedupe_hash TEXT NOT NULL,
    created_at INTEGER NOT NULL,
    doc_json TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS review_signals (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    review_id INTEGER NOT NULL REFERENCES reviews(id) ON DELETE CASCADE,
    label TEXT NOT NULL,
    score REAL NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_reviews_product_created ON reviews(product_id, created_at DESC);
CREATE INDEX IF NOT EXISTS idx_reviews_sentiment_created ON reviews(sentiment_label, created_at DESC);
CREATE INDEX IF NOT EXISTS idx_reviews_platform ON reviews(platform);
CREATE INDEX IF NOT EXISTS idx_reviews_dedupe ON reviews(dedupe_hash);
CREATE INDEX IF NOT EXISTS idx_signals_label ON review_signals(label);
CREATE INDEX IF NOT EXISTS idx_signals_review ON review_signals(review_id);
"#;
