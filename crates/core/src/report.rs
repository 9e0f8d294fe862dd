//! Full analysis output handed to downstream renderers

use crate::metrics::DocumentMetrics;
use crate::record::ConversationRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sparse theme tally: only themes with count > 0 are present.
pub type ThemeCounts = BTreeMap<String, usize>;

/// Everything the engine produces for one document.
///
/// Either the whole report is produced or the document fails as a unit;
/// no partially populated report is ever returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentReport {
    /// Aggregate rates and counts
    pub metrics: DocumentMetrics,
    /// Top keywords with their cross-conversation frequency, most frequent
    /// first. Empty for non-conversational documents.
    pub top_keywords: Vec<(String, usize)>,
    /// Sparse theme tally
    pub theme_counts: ThemeCounts,
    /// Per-turn records, in document order. Optional detail for reporting.
    pub records: Vec<ConversationRecord>,
}
