//! Core types for transcript analytics
//!
//! This crate provides the foundational types used across all other crates:
//! - Conversation records and document-level metrics
//! - The document mode enum (conversational vs. normal)
//! - Error types
//! - Oracle traits for pluggable sentiment and similarity backends

pub mod error;
pub mod metrics;
pub mod record;
pub mod report;
pub mod traits;

pub use error::{AnalysisError, Result};
pub use metrics::{round2, round3, DocumentMetrics, DocumentMode};
pub use record::ConversationRecord;
pub use report::{DocumentReport, ThemeCounts};
pub use traits::{SentimentScorer, SimilarityModel};
