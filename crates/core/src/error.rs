//! Error types for the analytics engine
//!
//! Oracle failures are fatal for the document being processed: callers get
//! either a complete, internally consistent report or a single error, never
//! a partial metric set.

use thiserror::Error;

/// Result type used throughout the engine crates
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors surfaced by the analytics engine
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The sentiment oracle failed for a message
    #[error("sentiment scoring failed: {message}")]
    Sentiment { message: String },

    /// The vector-similarity oracle failed for a term pair
    #[error("similarity lookup failed: {message}")]
    Similarity { message: String },

    /// A resource file (word vectors) could not be read
    #[error("failed to read {path}: {details}")]
    Resource { path: String, details: String },
}

impl AnalysisError {
    /// Category label for logging and metrics
    pub fn category(&self) -> &'static str {
        match self {
            AnalysisError::Sentiment { .. } => "sentiment",
            AnalysisError::Similarity { .. } => "similarity",
            AnalysisError::Resource { .. } => "resource",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category() {
        let err = AnalysisError::Sentiment {
            message: "oracle offline".to_string(),
        };
        assert_eq!(err.category(), "sentiment");
        assert!(err.to_string().contains("oracle offline"));
    }
}
