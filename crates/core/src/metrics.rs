//! Document-level metrics

use serde::{Deserialize, Serialize};

/// Whether a document reads as an agent/customer conversation or as a plain
/// business document. Decided once per document, before segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DocumentMode {
    /// At least one `Agent:` line plus a distinct non-agent speaker
    Conversational,
    /// Everything else
    #[default]
    Normal,
}

impl std::fmt::Display for DocumentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentMode::Conversational => write!(f, "Conversational Document"),
            DocumentMode::Normal => write!(f, "Normal Document"),
        }
    }
}

/// Aggregate metrics for one document. Read-only after computation.
///
/// Rates are percentages in [0, 100], rounded to 2 decimals; the sentiment
/// average is a mean polarity in [-1, 1], rounded to 3 decimals. Every rate
/// is 0 when `total_conversations` is 0.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DocumentMetrics {
    pub word_count: usize,
    pub line_count: usize,
    pub total_conversations: usize,
    pub email_conversion_rate: f64,
    pub phone_conversion_rate: f64,
    pub follow_up_rate: f64,
    pub readiness_rate: f64,
    pub trust_rate: f64,
    pub lead_success_rate: f64,
    pub average_sentiment_score: f64,
    pub mode: DocumentMode,
}

/// Round to 2 decimal places (rate contract)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 3 decimal places (sentiment contract)
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_labels() {
        assert_eq!(
            DocumentMode::Conversational.to_string(),
            "Conversational Document"
        );
        assert_eq!(DocumentMode::Normal.to_string(), "Normal Document");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round2(33.333333), 33.33);
        assert_eq!(round2(66.666666), 66.67);
        assert_eq!(round3(0.1234567), 0.123);
        assert_eq!(round3(-0.5555), -0.556);
    }

    #[test]
    fn test_default_metrics_are_zero() {
        let metrics = DocumentMetrics::default();
        assert_eq!(metrics.total_conversations, 0);
        assert_eq!(metrics.lead_success_rate, 0.0);
        assert_eq!(metrics.average_sentiment_score, 0.0);
        assert_eq!(metrics.mode, DocumentMode::Normal);
    }
}
