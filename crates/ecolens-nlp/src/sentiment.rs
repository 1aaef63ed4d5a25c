//! Lexicon/rule-based sentiment scoring.
//!
//! A compact VADER-style scorer tuned for product-review vocabulary:
//! static valence lexicon, negation flipping, booster words, exclamation
//! emphasis, and alpha normalization of the raw sum into [-1, 1].

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use ecolens_core::{Sentiment, SentimentLabel};

/// Ruleset revision stamped into every result.
pub const LEXICON_VERSION: &str = "0.1.0";

/// Labels become positive/negative once the compound score crosses ±0.05
/// (inclusive on the boundary nearest zero).
const POSITIVE_THRESHOLD: f64 = 0.05;
const NEGATIVE_THRESHOLD: f64 = -0.05;

/// VADER constants: negation dampening, booster increment, exclamation
/// emphasis, and the alpha used to normalize the raw valence sum.
const NEGATION_SCALAR: f64 = -0.74;
const BOOSTER_INCREMENT: f64 = 0.293;
const BOOSTER_GAP_DAMPING: f64 = 0.95;
const EXCLAMATION_EMPHASIS: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Word valences on the VADER -4..+4 scale, review-domain vocabulary.
static LEXICON: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let entries: &[(&str, f64)] = &[
        // Positive
        ("amazing", 2.8),
        ("awesome", 3.1),
        ("beautiful", 2.9),
        ("best", 3.2),
        ("better", 1.9),
        ("comfortable", 1.5),
        ("delighted", 2.6),
        ("durable", 1.8),
        ("easy", 1.4),
        ("excellent", 2.7),
        ("fantastic", 2.6),
        ("flawless", 2.5),
        ("good", 1.9),
        ("great", 3.1),
        ("happy", 2.7),
        ("impressed", 2.2),
        ("impressive", 2.3),
        ("like", 1.5),
        ("love", 3.2),
        ("loved", 2.9),
        ("nice", 1.8),
        ("perfect", 2.7),
        ("pleased", 1.8),
        ("recommend", 1.5),
        ("recommended", 1.5),
        ("reliable", 1.9),
        ("satisfied", 1.9),
        ("solid", 1.5),
        ("sturdy", 1.8),
        ("wonderful", 2.7),
        ("wonderfully", 2.7),
        ("worth", 1.7),
        // Negative
        ("annoying", -1.9),
        ("awful", -2.0),
        ("bad", -2.5),
        ("broke", -1.6),
        ("broken", -2.0),
        ("cheap", -0.6),
        ("crap", -2.4),
        ("defective", -2.1),
        ("difficult", -1.5),
        ("disappointed", -2.0),
        ("disappointing", -2.2),
        ("excessive", -1.2),
        ("fail", -2.0),
        ("failed", -1.9),
        ("faulty", -1.9),
        ("flimsy", -1.7),
        ("frustrating", -2.1),
        ("garbage", -2.2),
        ("hate", -2.7),
        ("horrible", -2.5),
        ("junk", -2.0),
        ("overpriced", -1.9),
        ("poor", -2.3),
        ("scam", -2.6),
        ("slow", -1.2),
        ("terrible", -2.1),
        ("trash", -2.2),
        ("uncomfortable", -1.4),
        ("useless", -1.8),
        ("waste", -1.8),
        ("worst", -3.1),
        ("wrong", -1.6),
    ];
    entries.iter().copied().collect()
});

/// Tokens that flip the valence of a following lexicon word.
static NEGATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "not", "no", "never", "cannot", "cant", "dont", "didnt", "doesnt", "isnt", "wasnt",
        "wont", "wouldnt", "couldnt", "shouldnt", "hardly", "barely", "neither", "nor",
        "nothing", "without",
    ]
    .into_iter()
    .collect()
});

/// Intensity modifiers: positive entries amplify, negative ones dampen.
static BOOSTERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("absolutely", BOOSTER_INCREMENT),
        ("completely", BOOSTER_INCREMENT),
        ("extremely", BOOSTER_INCREMENT),
        ("incredibly", BOOSTER_INCREMENT),
        ("really", BOOSTER_INCREMENT),
        ("so", BOOSTER_INCREMENT),
        ("totally", BOOSTER_INCREMENT),
        ("truly", BOOSTER_INCREMENT),
        ("very", BOOSTER_INCREMENT),
        ("kinda", -BOOSTER_INCREMENT),
        ("slightly", -BOOSTER_INCREMENT),
        ("somewhat", -BOOSTER_INCREMENT),
    ]
    .into_iter()
    .collect()
});

/// How many preceding tokens are scanned for a negator.
const NEGATION_WINDOW: usize = 3;

/// Lexicon sentiment scorer. Construct once at process start and share;
/// the tables are read-only, so concurrent use is safe.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    model: String,
}

impl SentimentScorer {
    pub fn new(model: impl Into<String>) -> Self {
        Self { model: model.into() }
    }

    /// Score `text`, yielding a compound polarity in [-1.0, 1.0] and its
    /// threshold-derived label. Empty or valence-free text scores 0.0.
    pub fn score(&self, text: &str) -> Sentiment {
        let compound = compound_score(text);
        Sentiment {
            score: compound,
            label: label_for(compound),
            model: self.model.clone(),
            version: LEXICON_VERSION.to_string(),
        }
    }
}

/// Map a compound score to its three-way label.
pub fn label_for(compound: f64) -> SentimentLabel {
    if compound >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if compound <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

fn compound_score(text: &str) -> f64 {
    // Drop apostrophes so contractions line up with the negator table
    // ("don't" -> "dont"), then split on everything non-alphanumeric.
    let lower = text.to_lowercase().replace('\'', "");
    let tokens: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    let mut sum = 0.0;
    let mut hits = 0usize;

    for (i, &token) in tokens.iter().enumerate() {
        let Some(&valence) = LEXICON.get(token) else {
            continue;
        };
        hits += 1;

        let mut v = valence;

        // Booster directly before, or one token back at reduced weight.
        if i >= 1 {
            if let Some(&b) = BOOSTERS.get(tokens[i - 1]) {
                v += b * v.signum();
            } else if i >= 2 {
                if let Some(&b) = BOOSTERS.get(tokens[i - 2]) {
                    v += b * BOOSTER_GAP_DAMPING * v.signum();
                }
            }
        }

        // Negator anywhere in the preceding window flips the contribution.
        let window_start = i.saturating_sub(NEGATION_WINDOW);
        if tokens[window_start..i].iter().any(|t| NEGATORS.contains(*t)) {
            v *= NEGATION_SCALAR;
        }

        sum += v;
    }

    if hits == 0 {
        return 0.0;
    }

    // Exclamation marks add emphasis in the direction of the raw sum.
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    if sum > 0.0 {
        sum += exclamations as f64 * EXCLAMATION_EMPHASIS;
    } else if sum < 0.0 {
        sum -= exclamations as f64 * EXCLAMATION_EMPHASIS;
    }

    let normalized = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();
    round4(normalized.clamp(-1.0, 1.0))
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}
