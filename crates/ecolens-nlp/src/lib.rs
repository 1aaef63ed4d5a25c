//! EcoLens NLP — the review annotation pipeline.
//!
//! Normalization, language detection, lexicon sentiment scoring, SDG12
//! signal tagging, and dedupe fingerprinting, composed by [`Annotator`].
//! Every function here is total: annotation cannot fail, only storage can.

pub mod annotate;
pub mod fingerprint;
pub mod language;
pub mod normalize;
pub mod sentiment;
pub mod signals;
pub mod taxonomy;

pub use annotate::Annotator;
pub use fingerprint::fingerprint;
pub use language::detect_language;
pub use normalize::normalize;
pub use sentiment::SentimentScorer;
pub use signals::tag_signals;
pub use taxonomy::SDG12_TAXONOMY;
