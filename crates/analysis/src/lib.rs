//! Conversation segmentation and signal extraction engine
//!
//! Pipeline: raw text → speaker-line parsing → mode detection → (for
//! conversational documents) segmentation into per-speaker-turn units with
//! per-line signal extraction → metrics aggregation, with keyword output
//! feeding theme classification. Non-conversational documents skip
//! segmentation and are themed semantically instead.
//!
//! The engine is synchronous and owns no I/O; sentiment and similarity
//! oracles are injected via the core traits.

pub mod aggregate;
pub mod analyzer;
pub mod parser;
pub mod segmenter;
pub mod signals;
pub mod themes;

pub use aggregate::aggregate_metrics;
pub use analyzer::{AnalyzerOptions, DocumentAnalyzer};
pub use parser::{detect_mode, parse_line, SpeakerLine};
pub use segmenter::{SegmentedDocument, Segmenter};
pub use themes::{ClassifierInput, LexicalThemes, SemanticThemes, ThemeStrategy};
