//! Per-conversation record types

use serde::{Deserialize, Serialize};

/// One contiguous speaker turn for a non-agent participant, including any
/// interleaved agent replies.
///
/// Boolean signals are OR-ed in while lines are processed and never reset.
/// `lead_capture_success` and the averaged sentiment are only established by
/// [`ConversationRecord::finalize`] once the whole document has been read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationRecord {
    /// Monotonically increasing id, starting at 0 per document
    pub id: usize,
    /// Speaker name this turn is attributed to
    pub user: String,
    /// An email address appeared in one of the user's messages
    pub email_captured: bool,
    /// A phone number (>= 7 digits) appeared in one of the user's messages
    pub phone_captured: bool,
    /// Derived: email or phone captured
    pub lead_capture_success: bool,
    /// The agent proposed a follow-up during this turn
    pub follow_up: bool,
    /// The user signalled buying readiness
    pub customer_readiness: bool,
    /// The user raised trust or safety concerns
    pub trust_concerns: bool,
    /// Accumulated polarity sum until finalize, then the per-message mean
    pub sentiment_score: f64,
    /// Number of scored messages, agent and user alike
    pub message_count: usize,
}

impl ConversationRecord {
    /// Create a fresh record with all signals off
    pub fn new(id: usize, user: impl Into<String>) -> Self {
        Self {
            id,
            user: user.into(),
            email_captured: false,
            phone_captured: false,
            lead_capture_success: false,
            follow_up: false,
            customer_readiness: false,
            trust_concerns: false,
            sentiment_score: 0.0,
            message_count: 0,
        }
    }

    /// Add one message's polarity to the running sum
    pub fn add_sentiment(&mut self, polarity: f64) {
        self.sentiment_score += polarity;
        self.message_count += 1;
    }

    /// Establish derived fields: the lead-capture invariant and the averaged
    /// sentiment (3 decimals, guarded against an empty turn).
    pub fn finalize(&mut self) {
        self.lead_capture_success = self.email_captured || self.phone_captured;
        if self.message_count > 0 {
            self.sentiment_score =
                crate::metrics::round3(self.sentiment_score / self.message_count as f64);
        }
    }
}
