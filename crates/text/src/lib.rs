//! Text processing for transcript analytics
//!
//! Tokenization with stopword filtering, frequency-based keyword extraction,
//! and the default oracle implementations: a lexicon-backed sentiment scorer
//! and an in-memory word-vector similarity model. Both oracles satisfy the
//! core traits so callers can swap in external backends.

pub mod keywords;
pub mod sentiment;
pub mod tokenize;
pub mod vectors;

pub use keywords::{KeywordExtractor, KeywordStats};
pub use sentiment::LexiconSentiment;
pub use tokenize::{content_tokens, is_stopword, tokenize};
pub use vectors::WordVectors;
