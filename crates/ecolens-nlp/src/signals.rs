//! Multi-label signal tagging against the SDG12 taxonomy.

use ecolens_core::SignalTag;

use crate::taxonomy::SDG12_TAXONOMY;

/// Tag score saturates at 1.0 once matched phrases total this many bytes.
const SCORE_DIVISOR: f64 = 30.0;

/// Match every taxonomy label's trigger phrases against `text`
/// (case-insensitive substring containment — deliberately not
/// word-boundary-aware). A label yields a tag iff at least one phrase
/// matches; labels are evaluated once each, in taxonomy order.
pub fn tag_signals(text: &str) -> Vec<SignalTag> {
    let text_lc = text.to_lowercase();
    let mut tags = Vec::new();

    for (label, phrases) in SDG12_TAXONOMY {
        let matched: Vec<String> = phrases
            .iter()
            .filter(|p| text_lc.contains(*p))
            .map(|p| p.to_string())
            .collect();
        if matched.is_empty() {
            continue;
        }

        let total_len: usize = matched.iter().map(|m| m.len()).sum();
        let score = (total_len as f64 / SCORE_DIVISOR).min(1.0);
        tags.push(SignalTag {
            label: label.to_string(),
            score: round3(score),
            method: "keywords".to_string(),
            keywords_matched: matched,
        });
    }

    tags
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}
