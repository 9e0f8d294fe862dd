//! Transcript analysis command line
//!
//! Reads one or more documents, classifies each as conversational or normal,
//! and prints a JSON report per document to stdout.
//!
//! Configuration priority: env vars > settings file > defaults. The settings
//! file path comes from `TRANSCRIPT_INSIGHTS_CONFIG`.

use anyhow::{bail, Context};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use transcript_insights_analysis::{AnalyzerOptions, DocumentAnalyzer};
use transcript_insights_config::{load_settings, KnownNames, Settings, ThemeTaxonomy};
use transcript_insights_text::{KeywordExtractor, LexiconSentiment, WordVectors};

fn main() -> anyhow::Result<()> {
    let config_path = std::env::var("TRANSCRIPT_INSIGHTS_CONFIG").ok();
    let settings = match load_settings(config_path.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized, use eprintln for early logging
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };

    init_tracing();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = config_path.as_deref().unwrap_or("default"),
        "starting transcript analysis"
    );

    let inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        bail!("usage: transcript-insights <document>...");
    }

    let taxonomy = match &settings.taxonomy_path {
        Some(path) => {
            ThemeTaxonomy::load(path).with_context(|| format!("loading taxonomy from {path}"))?
        }
        None => ThemeTaxonomy::default(),
    };
    tracing::info!(themes = taxonomy.themes.len(), "taxonomy loaded");

    let known_names = match &settings.known_names_path {
        Some(path) => {
            KnownNames::load(path).with_context(|| format!("loading known names from {path}"))?
        }
        None => KnownNames::default(),
    };

    let vectors = match &settings.word_vectors_path {
        Some(path) => {
            let vectors = WordVectors::load(path)
                .with_context(|| format!("loading word vectors from {path}"))?;
            tracing::info!(
                terms = vectors.len(),
                dimension = vectors.dimension(),
                "word vectors loaded"
            );
            vectors
        }
        None => {
            tracing::warn!(
                "no word vectors configured; normal documents will report no themes"
            );
            WordVectors::default()
        }
    };

    let sentiment = LexiconSentiment::new();
    let analyzer = DocumentAnalyzer::new(&taxonomy, &sentiment, &vectors)
        .with_options(AnalyzerOptions::from(&settings.analyzer))
        .with_keyword_extractor(KeywordExtractor::new(known_names));

    for input in &inputs {
        let text = std::fs::read_to_string(input).with_context(|| format!("reading {input}"))?;
        let report = analyzer
            .analyze(&text)
            .with_context(|| format!("analyzing {input}"))?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "transcript_insights=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
