//! Theme classification strategies
//!
//! Two interchangeable ways to turn document text into per-theme hit counts.
//! Conversational documents use [`LexicalThemes`], which matches already
//! extracted keywords against the taxonomy verbatim. Normal documents use
//! [`SemanticThemes`], which compares every taxonomy keyword to the document's
//! tokens through a similarity model so near-synonyms still register.

use std::collections::HashSet;
use transcript_insights_config::ThemeTaxonomy;
use transcript_insights_core::{Result, SimilarityModel, ThemeCounts};
use transcript_insights_text::{is_stopword, tokenize};

/// Shared input for both strategies. Lexical classification consumes the
/// ranked keywords, semantic classification consumes the raw text.
#[derive(Debug, Clone, Copy)]
pub struct ClassifierInput<'a> {
    pub text: &'a str,
    pub top_keywords: &'a [(String, usize)],
}

/// A theme classification strategy. Implementations are pure with respect to
/// their input: same input, same counts.
pub trait ThemeStrategy {
    fn theme_counts(&self, input: &ClassifierInput<'_>) -> Result<ThemeCounts>;
}

/// Exact keyword-to-taxonomy matching, weighted by keyword frequency.
pub struct LexicalThemes<'a> {
    taxonomy: &'a ThemeTaxonomy,
}

impl<'a> LexicalThemes<'a> {
    pub fn new(taxonomy: &'a ThemeTaxonomy) -> Self {
        Self { taxonomy }
    }
}

impl ThemeStrategy for LexicalThemes<'_> {
    fn theme_counts(&self, input: &ClassifierInput<'_>) -> Result<ThemeCounts> {
        let mut counts = ThemeCounts::new();
        for (keyword, frequency) in input.top_keywords {
            if let Some(theme) = self.taxonomy.theme_for(keyword) {
                *counts.entry(theme.to_string()).or_default() += frequency;
            }
        }
        Ok(counts)
    }
}

/// Vector-similarity matching of taxonomy keywords against document tokens.
///
/// Each taxonomy keyword scores at most one hit per document, on the first
/// token whose similarity clears the threshold. Keywords and tokens without
/// a vector are skipped; a failing similarity model aborts classification.
pub struct SemanticThemes<'a> {
    taxonomy: &'a ThemeTaxonomy,
    model: &'a dyn SimilarityModel,
    threshold: f64,
}

impl<'a> SemanticThemes<'a> {
    pub fn new(taxonomy: &'a ThemeTaxonomy, model: &'a dyn SimilarityModel, threshold: f64) -> Self {
        Self {
            taxonomy,
            model,
            threshold,
        }
    }

    fn document_tokens(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        tokenize(text)
            .into_iter()
            .filter(|token| !is_stopword(token))
            .filter(|token| seen.insert(token.clone()))
            .filter(|token| self.model.has_vector(token))
            .collect()
    }
}

impl ThemeStrategy for SemanticThemes<'_> {
    fn theme_counts(&self, input: &ClassifierInput<'_>) -> Result<ThemeCounts> {
        let tokens = self.document_tokens(input.text);
        let mut counts = ThemeCounts::new();

        for entry in &self.taxonomy.themes {
            for keyword in &entry.keywords {
                if !self.model.has_vector(keyword) {
                    continue;
                }
                for token in &tokens {
                    match self.model.similarity(keyword, token)? {
                        Some(score) if score > self.threshold => {
                            *counts.entry(entry.name.clone()).or_default() += 1;
                            break;
                        }
                        _ => {}
                    }
                }
            }
        }

        tracing::debug!(
            tokens = tokens.len(),
            themes = counts.len(),
            "semantic theme pass complete"
        );
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use transcript_insights_config::ThemeEntry;
    use transcript_insights_core::AnalysisError;

    fn taxonomy() -> ThemeTaxonomy {
        ThemeTaxonomy {
            themes: vec![
                ThemeEntry {
                    name: "Lead Capture".to_string(),
                    keywords: vec!["email".to_string(), "contact".to_string()],
                },
                ThemeEntry {
                    name: "Sales Inquiry".to_string(),
                    keywords: vec!["price".to_string()],
                },
            ],
        }
    }

    /// Similarity model that only matches identical words.
    struct Identity;

    impl SimilarityModel for Identity {
        fn similarity(&self, a: &str, b: &str) -> Result<Option<f64>> {
            Ok(Some(if a == b { 1.0 } else { 0.0 }))
        }
    }

    /// Model with no vectors at all.
    struct Vectorless;

    impl SimilarityModel for Vectorless {
        fn similarity(&self, _a: &str, _b: &str) -> Result<Option<f64>> {
            Ok(None)
        }
    }

    /// Model that fails outright.
    struct Broken;

    impl SimilarityModel for Broken {
        fn similarity(&self, _a: &str, _b: &str) -> Result<Option<f64>> {
            Err(AnalysisError::Similarity {
                message: "model offline".to_string(),
            })
        }

        fn has_vector(&self, _term: &str) -> bool {
            true
        }
    }

    #[test]
    fn test_lexical_counts_weighted_by_frequency() {
        let taxonomy = taxonomy();
        let strategy = LexicalThemes::new(&taxonomy);
        let keywords = vec![
            ("email".to_string(), 3),
            ("price".to_string(), 2),
            ("banana".to_string(), 9),
        ];
        let counts = strategy
            .theme_counts(&ClassifierInput {
                text: "",
                top_keywords: &keywords,
            })
            .unwrap();
        assert_eq!(counts.get("Lead Capture"), Some(&3));
        assert_eq!(counts.get("Sales Inquiry"), Some(&2));
        assert!(!counts.contains_key("banana"));
    }

    #[test]
    fn test_lexical_unmatched_themes_absent() {
        let taxonomy = taxonomy();
        let strategy = LexicalThemes::new(&taxonomy);
        let counts = strategy
            .theme_counts(&ClassifierInput {
                text: "",
                top_keywords: &[],
            })
            .unwrap();
        assert!(counts.is_empty());
    }

    #[test]
    fn test_semantic_one_hit_per_keyword() {
        let taxonomy = taxonomy();
        let strategy = SemanticThemes::new(&taxonomy, &Identity, 0.75);
        let counts = strategy
            .theme_counts(&ClassifierInput {
                // "email" appears twice but the keyword scores once
                text: "please send an email, another email, and the price",
                top_keywords: &[],
            })
            .unwrap();
        assert_eq!(counts.get("Lead Capture"), Some(&1));
        assert_eq!(counts.get("Sales Inquiry"), Some(&1));
    }

    #[test]
    fn test_semantic_below_threshold_ignored() {
        let taxonomy = taxonomy();
        let strategy = SemanticThemes::new(&taxonomy, &Identity, 0.75);
        let counts = strategy
            .theme_counts(&ClassifierInput {
                text: "nothing relevant here",
                top_keywords: &[],
            })
            .unwrap();
        assert!(counts.is_empty());
    }

    #[test]
    fn test_semantic_vectorless_model_yields_empty_counts() {
        let taxonomy = taxonomy();
        let strategy = SemanticThemes::new(&taxonomy, &Vectorless, 0.75);
        let counts = strategy
            .theme_counts(&ClassifierInput {
                text: "email price contact",
                top_keywords: &[],
            })
            .unwrap();
        assert!(counts.is_empty());
    }

    #[test]
    fn test_semantic_model_failure_is_fatal() {
        let taxonomy = taxonomy();
        let strategy = SemanticThemes::new(&taxonomy, &Broken, 0.75);
        let result = strategy.theme_counts(&ClassifierInput {
            text: "email",
            top_keywords: &[],
        });
        assert!(result.is_err());
    }
}
