//! Document-level metric aggregation

use transcript_insights_core::{
    round2, round3, ConversationRecord, DocumentMetrics, DocumentMode,
};

/// Fold finalized conversation records into document-level rate metrics.
///
/// Rates are percentages of total conversations rounded to two decimals;
/// the average sentiment keeps three. A document with no conversations
/// reports zero for every derived metric rather than dividing by zero.
pub fn aggregate_metrics(
    records: &[ConversationRecord],
    word_count: usize,
    line_count: usize,
    mode: DocumentMode,
) -> DocumentMetrics {
    let total = records.len();
    let mut metrics = DocumentMetrics {
        word_count,
        line_count,
        total_conversations: total,
        mode,
        ..DocumentMetrics::default()
    };

    if total == 0 {
        return metrics;
    }

    let rate = |count: usize| round2(100.0 * count as f64 / total as f64);

    metrics.lead_success_rate = rate(
        records.iter().filter(|r| r.lead_capture_success).count(),
    );
    metrics.email_conversion_rate = rate(records.iter().filter(|r| r.email_captured).count());
    metrics.phone_conversion_rate = rate(records.iter().filter(|r| r.phone_captured).count());
    metrics.follow_up_rate = rate(records.iter().filter(|r| r.follow_up).count());
    metrics.readiness_rate = rate(records.iter().filter(|r| r.customer_readiness).count());
    metrics.trust_rate = rate(records.iter().filter(|r| r.trust_concerns).count());

    let sentiment_sum: f64 = records.iter().map(|r| r.sentiment_score).sum();
    metrics.average_sentiment_score = round3(sentiment_sum / total as f64);

    metrics
}
