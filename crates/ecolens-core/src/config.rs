//! Process configuration, resolved once at startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Version of the annotation logic. Stamped into every annotated review as
/// `meta.pipeline_version` so records stay attributable when rules change.
pub const PIPELINE_VERSION: &str = "0.1.0";

/// Top-level EcoLens configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcoLensConfig {
    /// HTTP server port.
    pub port: u16,
    /// Directory holding the SQLite database.
    pub db_dir: PathBuf,
    /// Sentiment model selector (`SENTIMENT_MODEL`, default "lexicon").
    pub sentiment_model: String,
}

impl EcoLensConfig {
    /// Create configuration from environment and defaults.
    /// Creates the database directory if needed.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3008);

        let sentiment_model =
            std::env::var("SENTIMENT_MODEL").unwrap_or_else(|_| "lexicon".to_string());

        let db_dir = data_dir.as_ref().join("db");
        std::fs::create_dir_all(&db_dir)?;

        Ok(Self {
            port,
            db_dir,
            sentiment_model,
        })
    }
}
