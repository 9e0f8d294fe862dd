//! Configuration for the transcript analytics engine
//!
//! Supports loading configuration from:
//! - YAML files (taxonomy, known-name lists)
//! - TOML settings files with `TRANSCRIPT_INSIGHTS_` env overrides
//!
//! The theme taxonomy is deliberately an *ordered* structure: theme
//! attribution is first-match-wins, so iteration order is part of the
//! classification contract.

pub mod constants;
pub mod settings;
pub mod taxonomy;

pub use settings::{load_settings, AnalyzerSettings, Settings};
pub use taxonomy::{KnownNames, ThemeEntry, ThemeTaxonomy};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0} ({1})")]
    FileNotFound(String, String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
