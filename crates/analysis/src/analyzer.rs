//! Document analysis pipeline
//!
//! One entry point, [`DocumentAnalyzer::analyze`], which classifies a document
//! and runs the mode-appropriate pipeline:
//!
//! - Conversational: segment into per-speaker units, extract signals and
//!   sentiment per unit, aggregate rate metrics, rank the mined keywords and
//!   classify them lexically against the taxonomy.
//! - Normal: zeroed conversation metrics, no keywords, semantic theme
//!   detection over the raw text.

use crate::aggregate::aggregate_metrics;
use crate::parser::detect_mode;
use crate::segmenter::Segmenter;
use crate::themes::{ClassifierInput, LexicalThemes, SemanticThemes, ThemeStrategy};
use std::collections::HashMap;
use transcript_insights_config::settings::AnalyzerSettings;
use transcript_insights_config::{constants::themes, ThemeTaxonomy};
use transcript_insights_core::{
    DocumentMetrics, DocumentMode, DocumentReport, Result, SentimentScorer, SimilarityModel,
};
use transcript_insights_text::KeywordExtractor;

/// Pipeline tuning knobs
#[derive(Debug, Clone, Copy)]
pub struct AnalyzerOptions {
    /// Document-wide keywords to report
    pub top_keywords: usize,
    /// Keywords mined per conversation unit
    pub unit_keywords: usize,
    /// Semantic theme similarity threshold
    pub similarity_threshold: f64,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            top_keywords: themes::TOP_KEYWORDS,
            unit_keywords: themes::UNIT_TOP_KEYWORDS,
            similarity_threshold: themes::SIMILARITY_THRESHOLD,
        }
    }
}

impl From<&AnalyzerSettings> for AnalyzerOptions {
    fn from(settings: &AnalyzerSettings) -> Self {
        Self {
            top_keywords: settings.top_keywords,
            unit_keywords: settings.unit_keywords,
            similarity_threshold: settings.similarity_threshold,
        }
    }
}

/// Analyzes documents against shared, read-only backends. The analyzer holds
/// no per-document state, so one instance can process any number of documents
/// (concurrently, given the oracle traits are `Send + Sync`).
pub struct DocumentAnalyzer<'a> {
    taxonomy: &'a ThemeTaxonomy,
    sentiment: &'a dyn SentimentScorer,
    similarity: &'a dyn SimilarityModel,
    keywords: KeywordExtractor,
    options: AnalyzerOptions,
}

impl<'a> DocumentAnalyzer<'a> {
    pub fn new(
        taxonomy: &'a ThemeTaxonomy,
        sentiment: &'a dyn SentimentScorer,
        similarity: &'a dyn SimilarityModel,
    ) -> Self {
        Self {
            taxonomy,
            sentiment,
            similarity,
            keywords: KeywordExtractor::default(),
            options: AnalyzerOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AnalyzerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_keyword_extractor(mut self, keywords: KeywordExtractor) -> Self {
        self.keywords = keywords;
        self
    }

    /// Analyze one document and produce its full report.
    pub fn analyze(&self, text: &str) -> Result<DocumentReport> {
        let lines: Vec<&str> = text.lines().collect();
        let word_count = text.split_whitespace().count();
        let mode = detect_mode(&lines);

        tracing::info!(
            words = word_count,
            lines = lines.len(),
            %mode,
            "analyzing document"
        );

        let report = match mode {
            DocumentMode::Conversational => self.analyze_conversational(text, &lines, word_count)?,
            DocumentMode::Normal => self.analyze_normal(text, &lines, word_count)?,
        };

        tracing::info!(
            conversations = report.metrics.total_conversations,
            themes = report.theme_counts.len(),
            "analysis complete"
        );
        Ok(report)
    }

    fn analyze_conversational(
        &self,
        text: &str,
        lines: &[&str],
        word_count: usize,
    ) -> Result<DocumentReport> {
        let segmenter = Segmenter::new(self.sentiment, &self.keywords, self.options.unit_keywords);
        let segmented = segmenter.segment(lines)?;

        let metrics = aggregate_metrics(
            &segmented.records,
            word_count,
            lines.len(),
            DocumentMode::Conversational,
        );
        let top_keywords = rank_keywords(&segmented.keywords, self.options.top_keywords);

        let theme_counts = LexicalThemes::new(self.taxonomy).theme_counts(&ClassifierInput {
            text,
            top_keywords: &top_keywords,
        })?;

        Ok(DocumentReport {
            metrics,
            top_keywords,
            theme_counts,
            records: segmented.records,
        })
    }

    fn analyze_normal(
        &self,
        text: &str,
        lines: &[&str],
        word_count: usize,
    ) -> Result<DocumentReport> {
        let metrics = DocumentMetrics {
            word_count,
            line_count: lines.len(),
            mode: DocumentMode::Normal,
            ..DocumentMetrics::default()
        };

        let theme_counts =
            SemanticThemes::new(self.taxonomy, self.similarity, self.options.similarity_threshold)
                .theme_counts(&ClassifierInput {
                    text,
                    top_keywords: &[],
                })?;

        Ok(DocumentReport {
            metrics,
            top_keywords: Vec::new(),
            theme_counts,
            records: Vec::new(),
        })
    }
}

/// Tally mined keywords and keep the `n` most frequent, ties alphabetical.
fn rank_keywords(keywords: &[String], n: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for keyword in keywords {
        *counts.entry(keyword.as_str()).or_default() += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(k, c)| (k.to_string(), c))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked
}
