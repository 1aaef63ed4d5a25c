//! EcoLens Core — shared review types, configuration, errors.

pub mod config;
pub mod error;
pub mod types;

pub use config::{EcoLensConfig, PIPELINE_VERSION};
pub use error::{Error, Result};
pub use types::{
    AnnotatedReview, NlpAnnotations, OpenMap, RawReview, Sentiment, SentimentLabel, SignalTag,
};
