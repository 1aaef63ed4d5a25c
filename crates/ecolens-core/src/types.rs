//! Review records as received from ingestion and as persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Open string-keyed mapping used for `meta`, `product_ref`, and `source`.
/// Callers may attach arbitrary extra keys; they are carried through intact.
pub type OpenMap = serde_json::Map<String, Value>;

/// A review as supplied by the ingestion collaborator. Text may be empty;
/// `product_id` and `text` are required, everything else is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawReview {
    pub product_id: String,
    /// Structured product reference (conventional keys: brand, category, sku).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_ref: Option<OpenMap>,
    /// Provenance (conventional keys: platform, author).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<OpenMap>,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<OpenMap>,
}

/// A review after annotation. Immutable once produced; `text` holds the
/// normalized form and `meta` carries `pipeline_version` and `dedupe_hash`
/// alongside any caller-supplied keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedReview {
    pub product_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_ref: Option<OpenMap>,
    #[serde(default)]
    pub source: OpenMap,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub nlp: NlpAnnotations,
    pub meta: OpenMap,
}

/// The `nlp` annotation block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NlpAnnotations {
    /// Lowercase language code, or "unknown" when detection failed or the
    /// text was empty.
    pub language: String,
    pub sentiment: Sentiment,
    pub sdg12_signals: Vec<SignalTag>,
    /// Reserved for aspect-level sentiment; always empty in this version.
    pub aspects: Vec<Value>,
}

/// Lexicon-based polarity result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentiment {
    /// Compound score in [-1.0, 1.0].
    pub score: f64,
    pub label: SentimentLabel,
    /// Scoring model identifier (e.g. "lexicon").
    pub model: String,
    /// Ruleset version, for interpreting historical annotations.
    pub version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One matched SDG12 taxonomy label on a review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalTag {
    /// Taxonomy key, e.g. "packaging_waste".
    pub label: String,
    /// In [0.0, 1.0], rounded to 3 decimals.
    pub score: f64,
    /// Matching method; always "keywords" in this version.
    pub method: String,
    /// Trigger phrases found in the text, in taxonomy order.
    pub keywords_matched: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_label_serde_lowercase() {
        let json = serde_json::to_string(&SentimentLabel::Positive).unwrap();
        assert_eq!(json, "\"positive\"");
        let back: SentimentLabel = serde_json::from_str("\"neutral\"").unwrap();
        assert_eq!(back, SentimentLabel::Neutral);
    }

    #[test]
    fn test_raw_review_minimal_fields() {
        let raw: RawReview =
            serde_json::from_str(r#"{"product_id": "p1", "text": "Solid."}"#).unwrap();
        assert_eq!(raw.product_id, "p1");
        assert!(raw.rating.is_none());
        assert!(raw.meta.is_none());
    }

    #[test]
    fn test_raw_review_open_mappings_survive() {
        let raw: RawReview = serde_json::from_str(
            r#"{
                "product_id": "p1",
                "text": "ok",
                "product_ref": {"brand": "Acme", "custom_tier": 3},
                "meta": {"campaign": "spring"}
            }"#,
        )
        .unwrap();
        let product_ref = raw.product_ref.unwrap();
        assert_eq!(product_ref["brand"], "Acme");
        assert_eq!(product_ref["custom_tier"], 3);
        assert_eq!(raw.meta.unwrap()["campaign"], "spring");
    }
}
