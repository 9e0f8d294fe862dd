//! Conversation segmentation
//!
//! Groups consecutive lines into conversation units keyed by contiguous runs
//! of the same non-agent speaker. Agent lines never open a unit: before the
//! first user speaker they are discarded entirely, afterwards they attach to
//! the currently open unit. Speaker identity alone decides unit boundaries;
//! any number of interleaved agent turns stays inside the open unit.
//!
//! Agent and user messages share one text buffer that exists only to seed
//! keyword extraction. When a new speaker closes a unit, the buffer (which
//! at that point already includes the message that triggered the change) is
//! mined for its top keywords and then reset.

use crate::parser::parse_line;
use crate::signals;
use transcript_insights_core::{ConversationRecord, Result, SentimentScorer};
use transcript_insights_text::KeywordExtractor;

/// Segmentation output: finalized records plus the categorized keywords
/// mined from closed unit buffers, in extraction order.
#[derive(Debug, Clone, Default)]
pub struct SegmentedDocument {
    pub records: Vec<ConversationRecord>,
    pub keywords: Vec<String>,
}

/// Conversation segmenter with per-line signal extraction
pub struct Segmenter<'a> {
    scorer: &'a dyn SentimentScorer,
    keywords: &'a KeywordExtractor,
    unit_keywords: usize,
}

impl<'a> Segmenter<'a> {
    pub fn new(
        scorer: &'a dyn SentimentScorer,
        keywords: &'a KeywordExtractor,
        unit_keywords: usize,
    ) -> Self {
        Self {
            scorer,
            keywords,
            unit_keywords,
        }
    }

    /// Segment a document's lines and extract signals per conversation.
    ///
    /// Returned records are finalized: the lead-capture invariant holds and
    /// sentiment is the per-message mean. An oracle failure aborts the whole
    /// document, leaving no partial output.
    pub fn segment(&self, lines: &[&str]) -> Result<SegmentedDocument> {
        let mut records: Vec<ConversationRecord> = Vec::new();
        let mut keywords: Vec<String> = Vec::new();
        let mut buffer = String::new();
        let mut current_speaker: Option<String> = None;

        for raw in lines {
            let Some(line) = parse_line(raw) else { continue };

            if !buffer.is_empty() {
                buffer.push(' ');
            }
            buffer.push_str(&line.message);

            if line.is_agent() {
                // Agent chatter before any user turn is discarded
                let Some(record) = records.last_mut() else {
                    continue;
                };
                if signals::contains_follow_up(&line.message) {
                    record.follow_up = true;
                }
                record.add_sentiment(self.scorer.score(&line.message)?);
            } else {
                if current_speaker.as_deref() != Some(line.speaker.as_str()) {
                    current_speaker = Some(line.speaker.clone());
                    let id = records.len();
                    records.push(ConversationRecord::new(id, &line.speaker));

                    // The buffer collected so far belongs to the previous
                    // unit and seeds its keyword set; this includes the
                    // message that just triggered the speaker change.
                    self.extract_unit_keywords(&buffer, &mut keywords);
                    buffer.clear();
                }

                if let Some(record) = records.last_mut() {
                    if signals::contains_email(&line.message) {
                        record.email_captured = true;
                    }
                    if signals::contains_phone(&line.message) {
                        record.phone_captured = true;
                    }
                    if signals::contains_readiness(&line.message) {
                        record.customer_readiness = true;
                    }
                    if signals::contains_trust_concern(&line.message) {
                        record.trust_concerns = true;
                    }
                    record.add_sentiment(self.scorer.score(&line.message)?);
                }
            }
        }

        for record in &mut records {
            record.finalize();
        }

        tracing::debug!(
            conversations = records.len(),
            keywords = keywords.len(),
            "segmented document"
        );

        Ok(SegmentedDocument { records, keywords })
    }

    fn extract_unit_keywords(&self, buffer: &str, into: &mut Vec<String>) {
        for (keyword, _) in self.keywords.top_keywords(buffer, self.unit_keywords) {
            into.push(self.keywords.categorize(&keyword));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use transcript_insights_core::AnalysisError;

    /// Neutral scorer for structure-only tests
    struct Neutral;

    impl SentimentScorer for Neutral {
        fn score(&self, _message: &str) -> Result<f64> {
            Ok(0.0)
        }
    }

    /// Scorer that fails on a marker word
    struct Failing;

    impl SentimentScorer for Failing {
        fn score(&self, message: &str) -> Result<f64> {
            if message.contains("poison") {
                return Err(AnalysisError::Sentiment {
                    message: "oracle offline".to_string(),
                });
            }
            Ok(0.5)
        }
    }

    fn segment(lines: &[&str]) -> SegmentedDocument {
        let extractor = KeywordExtractor::default();
        let segmenter = Segmenter::new(&Neutral, &extractor, 5);
        segmenter.segment(lines).unwrap()
    }

    #[test]
    fn test_agent_lines_do_not_start_units() {
        let doc = segment(&["Sam: hi", "Agent: hello", "Sam: how are you", "Jo: hey"]);
        assert_eq!(doc.records.len(), 2);
        assert_eq!(doc.records[0].user, "Sam");
        assert_eq!(doc.records[1].user, "Jo");
    }

    #[test]
    fn test_pre_conversation_agent_chatter_discarded() {
        let doc = segment(&["Agent: welcome", "Agent: anyone?", "Sam: hi"]);
        assert_eq!(doc.records.len(), 1);
        // the two agent lines contributed no messages to any record
        assert_eq!(doc.records[0].message_count, 1);
    }

    #[test]
    fn test_interleaved_agent_messages_counted() {
        let doc = segment(&["Sam: hi", "Agent: hello", "Sam: bye"]);
        assert_eq!(doc.records.len(), 1);
        assert_eq!(doc.records[0].message_count, 3);
    }

    #[test]
    fn test_same_speaker_returning_makes_new_unit() {
        let doc = segment(&["Sam: hi", "Jo: hey", "Sam: me again"]);
        assert_eq!(doc.records.len(), 3);
        assert_eq!(doc.records[2].user, "Sam");
        assert_eq!(doc.records[2].id, 2);
    }

    #[test]
    fn test_contact_capture() {
        let doc = segment(&[
            "Sam: my email is sam@example.com",
            "Agent: thanks, what's your number?",
            "Sam: 555-123-4567",
        ]);
        let record = &doc.records[0];
        assert!(record.email_captured);
        assert!(record.phone_captured);
        assert!(record.lead_capture_success);
    }

    #[test]
    fn test_lead_capture_requires_contact() {
        let doc = segment(&["Sam: just looking around"]);
        assert!(!doc.records[0].lead_capture_success);
    }

    #[test]
    fn test_follow_up_only_from_agent_lines() {
        let doc = segment(&["Sam: can we schedule a demo?", "Jo: hello"]);
        assert!(!doc.records[0].follow_up);

        let doc = segment(&["Sam: hi", "Agent: let me schedule a demo"]);
        assert!(doc.records[0].follow_up);
    }

    #[test]
    fn test_readiness_and_trust_only_from_user_lines() {
        let doc = segment(&["Sam: hi", "Agent: ready to buy? is this a scam?"]);
        assert!(!doc.records[0].customer_readiness);
        assert!(!doc.records[0].trust_concerns);

        let doc = segment(&["Sam: I'm ready to buy but is it legit?"]);
        assert!(doc.records[0].customer_readiness);
        assert!(doc.records[0].trust_concerns);
    }

    #[test]
    fn test_signals_never_reset() {
        let doc = segment(&[
            "Sam: I'm interested",
            "Agent: great",
            "Sam: the weather is nice",
        ]);
        assert!(doc.records[0].customer_readiness);
    }

    #[test]
    fn test_keywords_include_turn_trigger_line() {
        // Jo's greeting closes Sam's unit; the buffer mined for that unit
        // includes Jo's own triggering message.
        let doc = segment(&[
            "Sam: pricing pricing pricing",
            "Jo: greetings everyone",
        ]);
        assert!(doc.keywords.contains(&"pricing".to_string()));
        assert!(doc.keywords.contains(&"greetings".to_string()));
    }

    #[test]
    fn test_trailing_unit_buffer_not_mined() {
        // Jo's greeting is mined when it closes Sam's unit, but everything Jo
        // says afterwards sits in a buffer no later speaker change flushes.
        let doc = segment(&[
            "Sam: hello world",
            "Jo: greetings",
            "Jo: quarterly forecast numbers",
        ]);
        assert!(doc.keywords.contains(&"greetings".to_string()));
        assert!(!doc.keywords.contains(&"quarterly".to_string()));
        assert!(!doc.keywords.contains(&"forecast".to_string()));
    }

    #[test]
    fn test_sentiment_accumulates_and_averages() {
        let extractor = KeywordExtractor::default();
        let segmenter = Segmenter::new(&Failing, &extractor, 5);
        let doc = segmenter
            .segment(&["Sam: hi", "Agent: hello", "Sam: bye"])
            .unwrap();
        // three messages at 0.5 each, averaged
        assert_eq!(doc.records[0].sentiment_score, 0.5);
        assert_eq!(doc.records[0].message_count, 3);
    }

    #[test]
    fn test_oracle_failure_is_fatal() {
        let extractor = KeywordExtractor::default();
        let segmenter = Segmenter::new(&Failing, &extractor, 5);
        let result = segmenter.segment(&["Sam: hi", "Sam: poison pill"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_document() {
        let doc = segment(&[]);
        assert!(doc.records.is_empty());
        assert!(doc.keywords.is_empty());
    }

    #[test]
    fn test_malformed_lines_ignored() {
        let doc = segment(&["", "   ", "no colon here", "Sam: hi"]);
        assert_eq!(doc.records.len(), 1);
        assert_eq!(doc.records[0].message_count, 1);
    }
}
