//! Application settings
//!
//! Layered loading: defaults, then an optional TOML file, then environment
//! variables with the `TRANSCRIPT_INSIGHTS_` prefix.

use crate::constants::themes;
use crate::ConfigError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Engine tuning
    #[serde(default)]
    pub analyzer: AnalyzerSettings,

    /// Path to a taxonomy YAML file; built-in taxonomy when unset
    #[serde(default)]
    pub taxonomy_path: Option<String>,

    /// Path to a known-names YAML file (companies, locations)
    #[serde(default)]
    pub known_names_path: Option<String>,

    /// Path to a GloVe-style word-vector file for semantic theme detection
    #[serde(default)]
    pub word_vectors_path: Option<String>,
}

/// Engine tuning knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerSettings {
    /// Similarity threshold for semantic theme detection
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    /// How many document-wide keywords to report
    #[serde(default = "default_top_keywords")]
    pub top_keywords: usize,

    /// How many keywords to extract per conversation unit
    #[serde(default = "default_unit_keywords")]
    pub unit_keywords: usize,
}

fn default_similarity_threshold() -> f64 {
    themes::SIMILARITY_THRESHOLD
}

fn default_top_keywords() -> usize {
    themes::TOP_KEYWORDS
}

fn default_unit_keywords() -> usize {
    themes::UNIT_TOP_KEYWORDS
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            top_keywords: default_top_keywords(),
            unit_keywords: default_unit_keywords(),
        }
    }
}

/// Load settings from an optional TOML file plus environment overrides.
///
/// Priority: env vars > settings file > defaults.
pub fn load_settings(path: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    if let Some(path) = path {
        if !Path::new(path).exists() {
            return Err(ConfigError::FileNotFound(
                path.to_string(),
                "no such file".to_string(),
            ));
        }
        builder = builder.add_source(File::with_name(path));
    }

    let config = builder
        .add_source(Environment::with_prefix("TRANSCRIPT_INSIGHTS").separator("__"))
        .build()?;

    let settings: Settings = config.try_deserialize()?;

    if settings.analyzer.similarity_threshold <= 0.0
        || settings.analyzer.similarity_threshold > 1.0
    {
        return Err(ConfigError::InvalidValue {
            field: "analyzer.similarity_threshold".to_string(),
            message: "must be in (0, 1]".to_string(),
        });
    }

    Ok(settings)
}
