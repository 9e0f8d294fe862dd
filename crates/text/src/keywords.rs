//! Frequency-based keyword extraction
//!
//! Ranks content tokens by how often they occur, with ties broken
//! alphabetically so results are stable across runs. Known company and
//! location names are collapsed into category labels before tallying, which
//! keeps one-off brand mentions from crowding the theme analysis.

use crate::tokenize::content_tokens;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use transcript_insights_config::constants::parsing;
use transcript_insights_config::KnownNames;

/// Keyword extraction over free text
#[derive(Debug, Clone, Default)]
pub struct KeywordExtractor {
    known_names: KnownNames,
}

/// Summary statistics for one extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordStats {
    /// Ranked `(keyword, frequency)` pairs, most frequent first
    pub top_keywords: Vec<(String, usize)>,
    /// Distinct keywords returned
    pub total_keywords: usize,
    /// Keywords returned per word of input, 0 for empty input
    pub keyword_density: f64,
}

impl KeywordExtractor {
    pub fn new(known_names: KnownNames) -> Self {
        Self { known_names }
    }

    /// Top `n` keywords by frequency, most frequent first. Ties resolve
    /// alphabetically.
    pub fn top_keywords(&self, text: &str, n: usize) -> Vec<(String, usize)> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in content_tokens(text, parsing::MIN_KEYWORD_LEN - 1) {
            *counts.entry(token).or_default() += 1;
        }

        let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(n);
        ranked
    }

    /// Collapse a keyword into its category label when it names a known
    /// company or location; otherwise pass it through unchanged.
    pub fn categorize(&self, keyword: &str) -> String {
        if self.known_names.is_company(keyword) {
            "company name".to_string()
        } else if self.known_names.is_location(keyword) {
            "location".to_string()
        } else {
            keyword.to_string()
        }
    }

    /// Extraction plus summary statistics
    pub fn analyze(&self, text: &str, n: usize) -> KeywordStats {
        let top_keywords = self.top_keywords(text, n);
        let word_count = text.split_whitespace().count();
        let keyword_density = if word_count > 0 {
            top_keywords.len() as f64 / word_count as f64
        } else {
            0.0
        };

        KeywordStats {
            total_keywords: top_keywords.len(),
            keyword_density,
            top_keywords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_keywords_ranked_by_frequency() {
        let extractor = KeywordExtractor::default();
        let keywords =
            extractor.top_keywords("price price price support support question", 2);
        assert_eq!(
            keywords,
            vec![("price".to_string(), 3), ("support".to_string(), 2)]
        );
    }

    #[test]
    fn test_stopwords_and_short_tokens_dropped() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.top_keywords("the ox is on it, pricing matters", 10);
        let words: Vec<&str> = keywords.iter().map(|(k, _)| k.as_str()).collect();
        assert!(words.contains(&"pricing"));
        assert!(!words.contains(&"the"));
        assert!(!words.contains(&"ox"));
    }

    #[test]
    fn test_ties_break_alphabetically() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.top_keywords("zebra apple zebra apple", 2);
        assert_eq!(keywords[0].0, "apple");
        assert_eq!(keywords[1].0, "zebra");
    }

    #[test]
    fn test_categorize() {
        let extractor = KeywordExtractor::new(KnownNames {
            companies: vec!["acme".to_string()],
            locations: vec!["london".to_string()],
        });
        assert_eq!(extractor.categorize("Acme"), "company name");
        assert_eq!(extractor.categorize("london"), "location");
        assert_eq!(extractor.categorize("pricing"), "pricing");
    }

    #[test]
    fn test_density_empty_input() {
        let extractor = KeywordExtractor::default();
        let stats = extractor.analyze("", 10);
        assert_eq!(stats.keyword_density, 0.0);
        assert!(stats.top_keywords.is_empty());
    }
}
