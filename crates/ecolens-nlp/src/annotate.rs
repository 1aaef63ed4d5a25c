//! Annotation orchestrator: one raw review in, one annotated review out.

use chrono::Utc;
use serde_json::Value;
use tracing::debug;

use ecolens_core::{AnnotatedReview, NlpAnnotations, RawReview};

use crate::fingerprint::fingerprint;
use crate::language::{detect_language, UNKNOWN_LANGUAGE};
use crate::normalize::normalize;
use crate::sentiment::SentimentScorer;
use crate::signals::tag_signals;

/// Composes the pipeline stages into a single pure transformation.
///
/// Holds the one-time-initialized sentiment scorer and the process-wide
/// pipeline version; safe to share across concurrent callers.
#[derive(Debug, Clone)]
pub struct Annotator {
    scorer: SentimentScorer,
    pipeline_version: String,
}

impl Annotator {
    pub fn new(scorer: SentimentScorer, pipeline_version: impl Into<String>) -> Self {
        Self {
            scorer,
            pipeline_version: pipeline_version.into(),
        }
    }

    /// Annotate one review. Infallible: every stage is a total function,
    /// and language detection failure maps to the "unknown" sentinel.
    ///
    /// The input is consumed and never mutated in place; computed meta keys
    /// (`pipeline_version`, `dedupe_hash`) win over caller-supplied ones.
    pub fn annotate(&self, raw: RawReview) -> AnnotatedReview {
        let text = normalize(&raw.text);
        let language = if text.is_empty() {
            UNKNOWN_LANGUAGE.to_string()
        } else {
            detect_language(&text)
        };
        let sentiment = self.scorer.score(&text);
        let sdg12_signals = tag_signals(&text);

        debug!(
            product_id = %raw.product_id,
            %language,
            sentiment = sentiment.score,
            signals = sdg12_signals.len(),
            "annotated review"
        );

        let mut meta = raw.meta.unwrap_or_default();
        meta.insert(
            "pipeline_version".to_string(),
            Value::String(self.pipeline_version.clone()),
        );
        // Hash the final fields: normalized text, post-default rating.
        meta.insert(
            "dedupe_hash".to_string(),
            Value::String(fingerprint(&raw.product_id, &text, raw.rating)),
        );

        AnnotatedReview {
            product_id: raw.product_id,
            product_ref: raw.product_ref,
            source: raw.source.unwrap_or_default(),
            text,
            rating: raw.rating,
            created_at: raw.created_at.unwrap_or_else(Utc::now),
            nlp: NlpAnnotations {
                language,
                sentiment,
                sdg12_signals,
                aspects: Vec::new(),
            },
            meta,
        }
    }

    /// Annotate a batch independently, preserving input order.
    pub fn annotate_batch(&self, raws: Vec<RawReview>) -> Vec<AnnotatedReview> {
        raws.into_iter().map(|raw| self.annotate(raw)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ecolens_core::SentimentLabel;

    fn annotator() -> Annotator {
        Annotator::new(SentimentScorer::new("lexicon"), "0.1.0")
    }

    fn raw(product_id: &str, text: &str) -> RawReview {
        RawReview {
            product_id: product_id.to_string(),
            product_ref: None,
            source: None,
            text: text.to_string(),
            rating: None,
            created_at: None,
            meta: None,
        }
    }

    #[test]
    fn test_empty_text_review() {
        let out = annotator().annotate(raw("p1", ""));
        assert_eq!(out.text, "");
        assert_eq!(out.nlp.language, "unknown");
        assert_eq!(out.nlp.sentiment.score, 0.0);
        assert_eq!(out.nlp.sentiment.label, SentimentLabel::Neutral);
        assert!(out.nlp.sdg12_signals.is_empty());
        assert!(out.nlp.aspects.is_empty());
    }

    #[test]
    fn test_negative_review_with_signals() {
        let out = annotator().annotate(raw(
            "p1",
            "The packaging was excessive and it broke after a week, terrible!",
        ));
        assert_eq!(out.nlp.sentiment.label, SentimentLabel::Negative);
        let labels: Vec<&str> = out
            .nlp
            .sdg12_signals
            .iter()
            .map(|t| t.label.as_str())
            .collect();
        assert!(labels.contains(&"packaging_waste"));
        assert!(labels.contains(&"durability"));
    }

    #[test]
    fn test_positive_review_with_signals() {
        let out = annotator().annotate(raw(
            "p2",
            "Fully recyclable and sustainably sourced, love it!",
        ));
        assert_eq!(out.nlp.sentiment.label, SentimentLabel::Positive);
        let labels: Vec<&str> = out
            .nlp
            .sdg12_signals
            .iter()
            .map(|t| t.label.as_str())
            .collect();
        assert!(labels.contains(&"recyclability"));
        assert!(labels.contains(&"materials_sourcing"));
    }

    #[test]
    fn test_text_is_normalized_and_hash_uses_it() {
        let out = annotator().annotate(raw("p1", "  spaced\t\tout   review  "));
        assert_eq!(out.text, "spaced out review");
        assert_eq!(
            out.meta["dedupe_hash"].as_str().unwrap(),
            fingerprint("p1", "spaced out review", None)
        );
    }

    #[test]
    fn test_dedupe_hash_ignores_timestamp_and_source() {
        let ann = annotator();
        let mut a = raw("p1", "A durable kettle");
        a.rating = Some(5.0);
        a.created_at = Some(chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

        let mut b = raw("p1", "A  durable   kettle");
        b.rating = Some(5.0);
        b.created_at = Some(chrono::Utc.with_ymd_and_hms(2025, 6, 30, 12, 0, 0).unwrap());
        let mut source = ecolens_core::OpenMap::new();
        source.insert("platform".to_string(), Value::String("shopfront".to_string()));
        b.source = Some(source);

        let out_a = ann.annotate(a);
        let out_b = ann.annotate(b);
        assert_eq!(out_a.meta["dedupe_hash"], out_b.meta["dedupe_hash"]);
    }

    #[test]
    fn test_meta_merge_keeps_caller_keys_computed_wins() {
        let mut r = raw("p1", "fine");
        let mut meta = ecolens_core::OpenMap::new();
        meta.insert("campaign".to_string(), Value::String("spring".to_string()));
        meta.insert(
            "pipeline_version".to_string(),
            Value::String("spoofed".to_string()),
        );
        r.meta = Some(meta);

        let out = annotator().annotate(r);
        assert_eq!(out.meta["campaign"], "spring");
        assert_eq!(out.meta["pipeline_version"], "0.1.0");
        assert!(out.meta.contains_key("dedupe_hash"));
    }

    #[test]
    fn test_batch_preserves_order() {
        let out = annotator().annotate_batch(vec![
            raw("p1", "first"),
            raw("p2", "second"),
            raw("p3", "third"),
        ]);
        let ids: Vec<&str> = out.iter().map(|r| r.product_id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_created_at_and_source_carried_forward() {
        let mut r = raw("p1", "ok");
        let ts = chrono::Utc.with_ymd_and_hms(2024, 3, 5, 8, 30, 0).unwrap();
        r.created_at = Some(ts);
        let out = annotator().annotate(r);
        assert_eq!(out.created_at, ts);
        assert!(out.source.is_empty());
    }
}
