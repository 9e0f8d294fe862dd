//! Oracle traits for pluggable backends
//!
//! The engine performs no I/O of its own: sentiment scoring and vector
//! similarity are injected behind these traits so documents can be processed
//! concurrently against one shared, read-only backend, and tests can run
//! against deterministic stubs.

use crate::error::Result;

/// Scores the polarity of a single message.
pub trait SentimentScorer: Send + Sync {
    /// Polarity in [-1, 1]; negative values mean negative sentiment.
    ///
    /// Errors are fatal for the document being processed. The engine never
    /// substitutes a default score, since 0 would silently present as
    /// neutral sentiment.
    fn score(&self, message: &str) -> Result<f64>;
}

/// Compares two short strings by semantic similarity.
pub trait SimilarityModel: Send + Sync {
    /// Similarity in [0, 1], or `None` when either term has no usable
    /// vector representation (the term is skipped, never fatal).
    fn similarity(&self, a: &str, b: &str) -> Result<Option<f64>>;

    /// Whether a term has a usable vector. Lets callers skip a taxonomy
    /// keyword once instead of probing it against every token.
    fn has_vector(&self, term: &str) -> bool {
        self.similarity(term, term)
            .map(|s| s.is_some())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(f64);

    impl SimilarityModel for Constant {
        fn similarity(&self, a: &str, _b: &str) -> Result<Option<f64>> {
            if a == "unknown" {
                return Ok(None);
            }
            Ok(Some(self.0))
        }
    }

    #[test]
    fn test_has_vector_default() {
        let model = Constant(0.9);
        assert!(model.has_vector("price"));
        assert!(!model.has_vector("unknown"));
    }
}
