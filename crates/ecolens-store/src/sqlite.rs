//! SQLite-backed review store.
//!
//! Writes are transactional: a batch of annotated reviews lands entirely or
//! not at all, matching the all-or-nothing ingestion contract. The
//! aggregation queries mirror the analytics read path (overview, signal
//! frequency, daily trends).

use std::path::{Path, PathBuf};

use chrono::{Duration, Utc};
use parking_lot::Mutex;
use rusqlite::{params, params_from_iter, Connection, ToSql};
use tracing::info;

use crate::schema::SCHEMA_SQL;
use crate::types::*;
use ecolens_core::{AnnotatedReview, Error, OpenMap, Result};

pub struct ReviewStore {
    conn: Mutex<Connection>,
    db_path: PathBuf,
}

impl ReviewStore {
    /// Open or create the store. `db_dir` is the directory; the file will
    /// be `db_dir/ecolens.db`.
    pub fn open(db_dir: impl AsRef<Path>) -> Result<Self> {
        let db_dir = db_dir.as_ref();
        std::fs::create_dir_all(db_dir).map_err(|e| Error::Storage(e.to_string()))?;
        let db_path = db_dir.join("ecolens.db");

        let conn = Connection::open(&db_path).map_err(|e| Error::Database(e.to_string()))?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA foreign_keys = ON;
             PRAGMA synchronous = NORMAL;",
        )
        .map_err(|e| Error::Database(e.to_string()))?;
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| Error::Database(format!("Schema init failed: {}", e)))?;

        let store = Self {
            conn: Mutex::new(conn),
            db_path,
        };

        let count = store.count_reviews()?;
        info!(
            "ReviewStore initialized: {} reviews, path={}",
            count,
            store.db_path.display()
        );

        Ok(store)
    }

    /// Bulk-insert a batch of annotated reviews in one transaction.
    /// Returns the number inserted; on error nothing is persisted.
    pub fn insert_reviews(&self, reviews: &[AnnotatedReview]) -> Result<usize> {
        if reviews.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn.lock();
        let tx = conn
            .transaction()
            .map_err(|e| Error::Database(e.to_string()))?;

        for review in reviews {
            let doc_json = serde_json::to_string(review)?;
            let dedupe_hash = review
                .meta
                .get("dedupe_hash")
                .and_then(|v| v.as_str())
                .unwrap_or_default();

            let review_id = tx
                .prepare_cached(
                    "INSERT INTO reviews
                     (product_id, brand, category, platform, text, rating, language,
                      sentiment_score, sentiment_label, dedupe_hash, created_at, doc_json)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                )
                .map_err(|e| Error::Database(e.to_string()))?
                .insert(params![
                    review.product_id,
                    map_str(review.product_ref.as_ref(), "brand"),
                    map_str(review.product_ref.as_ref(), "category"),
                    map_str(Some(&review.source), "platform"),
                    review.text,
                    review.rating,
                    review.nlp.language,
                    review.nlp.sentiment.score,
                    review.nlp.sentiment.label.as_str(),
                    dedupe_hash,
                    review.created_at.timestamp_millis(),
                    doc_json,
                ])
                .map_err(|e| Error::Database(e.to_string()))?;

            for tag in &review.nlp.sdg12_signals {
                tx.prepare_cached(
                    "INSERT INTO review_signals (review_id, label, score) VALUES (?1, ?2, ?3)",
                )
                .map_err(|e| Error::Database(e.to_string()))?
                .execute(params![review_id, tag.label, tag.score])
                .map_err(|e| Error::Database(e.to_string()))?;
            }
        }

        tx.commit().map_err(|e| Error::Database(e.to_string()))?;
        Ok(reviews.len())
    }

    /// Average sentiment and review count over a trailing window, with
    /// optional product/brand/category filters.
    pub fn sentiment_overview(&self, filter: &OverviewFilter) -> Result<SentimentOverview> {
        let mut sql = String::from(
            "SELECT AVG(sentiment_score), COUNT(*) FROM reviews WHERE created_at >= ?",
        );
        let mut params: Vec<Box<dyn ToSql>> = vec![Box::new(cutoff_ms(filter.days))];

        if let Some(product_id) = &filter.product_id {
            sql.push_str(" AND product_id = ?");
            params.push(Box::new(product_id.clone()));
        }
        if let Some(brand) = &filter.brand {
            sql.push_str(" AND brand = ?");
            params.push(Box::new(brand.clone()));
        }
        if let Some(category) = &filter.category {
            sql.push_str(" AND category = ?");
            params.push(Box::new(category.clone()));
        }

        let conn = self.conn.lock();
        let (avg_sentiment, count) = conn
            .prepare(&sql)
            .map_err(|e| Error::Database(e.to_string()))?
            .query_row(params_from_iter(params), |row| {
                Ok((row.get::<_, Option<f64>>(0)?, row.get::<_, i64>(1)?))
            })
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(SentimentOverview {
            avg_sentiment,
            count,
        })
    }

    /// Signal label frequencies over a trailing window, most frequent
    /// first. An optional label narrows the result to that one signal.
    pub fn signal_counts(&self, days: u32, label: Option<&str>) -> Result<Vec<SignalCount>> {
        let mut sql = String::from(
            "SELECT s.label, COUNT(*) AS n
             FROM review_signals s
             JOIN reviews r ON r.id = s.review_id
             WHERE r.created_at >= ?",
        );
        let mut params: Vec<Box<dyn ToSql>> = vec![Box::new(cutoff_ms(days))];

        if let Some(label) = label {
            sql.push_str(" AND s.label = ?");
            params.push(Box::new(label.to_string()));
        }
        sql.push_str(" GROUP BY s.label ORDER BY n DESC");

        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| Error::Database(e.to_string()))?;
        let rows = stmt
            .query_map(params_from_iter(params), |row| {
                Ok(SignalCount {
                    label: row.get(0)?,
                    count: row.get(1)?,
                })
            })
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(rows.filter_map(|r| r.ok()).collect())
    }

    /// Daily average-sentiment/count series over a trailing window,
    /// ascending by day.
    pub fn daily_trends(&self, days: u32) -> Result<Vec<DailyTrend>> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare_cached(
                "SELECT strftime('%Y-%m-%d', created_at / 1000, 'unixepoch') AS day,
                        AVG(sentiment_score), COUNT(*)
                 FROM reviews WHERE created_at >= ?1
                 GROUP BY day ORDER BY day ASC",
            )
            .map_err(|e| Error::Database(e.to_string()))?;
        let rows = stmt
            .query_map(params![cutoff_ms(days)], |row| {
                Ok(DailyTrend {
                    day: row.get(0)?,
                    avg_sentiment: row.get(1)?,
                    count: row.get(2)?,
                })
            })
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(rows.filter_map(|r| r.ok()).collect())
    }

    /// Count total reviews.
    pub fn count_reviews(&self) -> Result<i64> {
        let conn = self.conn.lock();
        conn.query_row("SELECT COUNT(*) FROM reviews", [], |row| row.get(0))
            .map_err(|e| Error::Database(e.to_string()))
    }

    pub fn get_stats(&self) -> Result<StoreStats> {
        let total_reviews = self.count_reviews()?;
        let total_signals: i64 = {
            let conn = self.conn.lock();
            conn.query_row("SELECT COUNT(*) FROM review_signals", [], |row| row.get(0))
                .map_err(|e| Error::Database(e.to_string()))?
        };
        let db_size_mb = std::fs::metadata(&self.db_path)
            .map(|m| m.len() as f64 / (1024.0 * 1024.0))
            .unwrap_or(0.0);

        Ok(StoreStats {
            total_reviews,
            total_signals,
            db_path: self.db_path.display().to_string(),
            db_size_mb,
        })
    }
}

fn map_str(map: Option<&OpenMap>, key: &str) -> Option<String> {
    map.and_then(|m| m.get(key))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

fn cutoff_ms(days: u32) -> i64 {
    (Utc::now() - Duration::days(i64::from(days))).timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecolens_nlp::{Annotator, SentimentScorer};
    use serde_json::Value;

    fn annotator() -> Annotator {
        Annotator::new(SentimentScorer::new("lexicon"), "0.1.0")
    }

    fn review(
        product_id: &str,
        text: &str,
        brand: Option<&str>,
        days_ago: i64,
    ) -> AnnotatedReview {
        let mut product_ref = OpenMap::new();
        if let Some(b) = brand {
            product_ref.insert("brand".to_string(), Value::String(b.to_string()));
            product_ref.insert("category".to_string(), Value::String("kitchen".to_string()));
        }
        let raw = ecolens_core::RawReview {
            product_id: product_id.to_string(),
            product_ref: brand.map(|_| product_ref),
            source: None,
            text: text.to_string(),
            rating: Some(4.0),
            created_at: Some(Utc::now() - Duration::days(days_ago)),
            meta: None,
        };
        annotator().annotate(raw)
    }

    fn open_store() -> (tempfile::TempDir, ReviewStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ReviewStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_insert_and_count() {
        let (_dir, store) = open_store();
        let inserted = store
            .insert_reviews(&[
                review("p1", "Great sturdy blender", Some("Acme"), 1),
                review("p2", "It broke, terrible", Some("Blendo"), 2),
            ])
            .unwrap();
        assert_eq!(inserted, 2);
        assert_eq!(store.count_reviews().unwrap(), 2);
    }

    #[test]
    fn test_empty_batch_inserts_nothing() {
        let (_dir, store) = open_store();
        assert_eq!(store.insert_reviews(&[]).unwrap(), 0);
        assert_eq!(store.count_reviews().unwrap(), 0);
    }

    #[test]
    fn test_sentiment_overview_filters() {
        let (_dir, store) = open_store();
        store
            .insert_reviews(&[
                review("p1", "Great sturdy blender", Some("Acme"), 1),
                review("p1", "Horrible, it broke", Some("Acme"), 2),
                review("p2", "Great toaster", Some("Blendo"), 3),
            ])
            .unwrap();

        let all = store
            .sentiment_overview(&OverviewFilter {
                days: 90,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(all.count, 3);
        assert!(all.avg_sentiment.is_some());

        let acme = store
            .sentiment_overview(&OverviewFilter {
                brand: Some("Acme".to_string()),
                days: 90,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(acme.count, 2);

        let none = store
            .sentiment_overview(&OverviewFilter {
                product_id: Some("missing".to_string()),
                days: 90,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(none.count, 0);
        assert!(none.avg_sentiment.is_none());
    }

    #[test]
    fn test_window_excludes_old_reviews() {
        let (_dir, store) = open_store();
        store
            .insert_reviews(&[
                review("p1", "recent and great", None, 1),
                review("p1", "ancient review", None, 200),
            ])
            .unwrap();

        let overview = store
            .sentiment_overview(&OverviewFilter {
                days: 30,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(overview.count, 1);
    }

    #[test]
    fn test_signal_counts_descending() {
        let (_dir, store) = open_store();
        store
            .insert_reviews(&[
                review("p1", "too much packaging and plastic", None, 1),
                review("p2", "the packaging again", None, 1),
                review("p3", "it broke", None, 1),
            ])
            .unwrap();

        let counts = store.signal_counts(90, None).unwrap();
        assert_eq!(counts[0].label, "packaging_waste");
        assert_eq!(counts[0].count, 2);
        assert!(counts.iter().any(|c| c.label == "durability" && c.count == 1));

        let only = store.signal_counts(90, Some("durability")).unwrap();
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].label, "durability");
    }

    #[test]
    fn test_daily_trends_buckets() {
        let (_dir, store) = open_store();
        let ann = annotator();
        let now = Utc::now();
        let yesterday = now - Duration::days(1);
        let mut reviews = Vec::new();
        for (ts, text) in [
            (now, "love it"),
            (now, "it broke"),
            (yesterday, "great product"),
        ] {
            reviews.push(ann.annotate(ecolens_core::RawReview {
                product_id: "p1".to_string(),
                product_ref: None,
                source: None,
                text: text.to_string(),
                rating: None,
                created_at: Some(ts),
                meta: None,
            }));
        }
        store.insert_reviews(&reviews).unwrap();

        let trends = store.daily_trends(30).unwrap();
        assert_eq!(trends.len(), 2);
        // Ascending by day; today has two reviews.
        assert!(trends[0].day < trends[1].day);
        assert_eq!(trends[1].count, 2);
    }

    #[test]
    fn test_doc_json_round_trips() {
        let (_dir, store) = open_store();
        let original = review("p1", "Great sturdy blender", Some("Acme"), 1);
        store.insert_reviews(std::slice::from_ref(&original)).unwrap();

        let conn = store.conn.lock();
        let doc_json: String = conn
            .query_row("SELECT doc_json FROM reviews WHERE product_id = 'p1'", [], |r| {
                r.get(0)
            })
            .unwrap();
        drop(conn);

        let restored: AnnotatedReview = serde_json::from_str(&doc_json).unwrap();
        assert_eq!(restored.product_id, original.product_id);
        assert_eq!(restored.meta["dedupe_hash"], original.meta["dedupe_hash"]);
        assert_eq!(
            restored.nlp.sentiment.label.as_str(),
            original.nlp.sentiment.label.as_str()
        );
    }
}
