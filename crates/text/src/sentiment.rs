//! Lexicon-based sentiment scoring
//!
//! Default [`SentimentScorer`] so the engine runs without an external
//! oracle. Polarity cues are matched per token, a preceding negator flips
//! the cue, and the score is the mean cue polarity, giving a value in
//! [-1, 1]. Messages without any cue are neutral (0).

use crate::tokenize::tokenize;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use transcript_insights_core::{Result, SentimentScorer};

static POLARITY: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let mut map = HashMap::new();

    let positive = [
        ("amazing", 1.0),
        ("awesome", 1.0),
        ("excellent", 1.0),
        ("fantastic", 1.0),
        ("love", 0.9),
        ("perfect", 0.9),
        ("wonderful", 0.9),
        ("great", 0.8),
        ("happy", 0.8),
        ("helpful", 0.7),
        ("interested", 0.6),
        ("good", 0.6),
        ("thanks", 0.5),
        ("thank", 0.5),
        ("nice", 0.5),
        ("sure", 0.3),
        ("yes", 0.3),
        ("ok", 0.2),
        ("okay", 0.2),
    ];
    let negative = [
        ("terrible", -1.0),
        ("horrible", -1.0),
        ("awful", -1.0),
        ("scam", -0.9),
        ("fraud", -0.9),
        ("hate", -0.9),
        ("worst", -0.9),
        ("useless", -0.8),
        ("angry", -0.8),
        ("frustrated", -0.8),
        ("bad", -0.7),
        ("disappointed", -0.7),
        ("problem", -0.4),
        ("issue", -0.4),
        ("slow", -0.4),
        ("expensive", -0.3),
        ("no", -0.2),
    ];

    for (word, score) in positive.into_iter().chain(negative) {
        map.insert(word, score);
    }
    map
});

static NEGATORS: &[&str] = &["not", "never", "no", "don't", "doesn't", "isn't", "wasn't"];

/// Sentiment scorer backed by a static polarity lexicon
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconSentiment;

impl LexiconSentiment {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentScorer for LexiconSentiment {
    fn score(&self, message: &str) -> Result<f64> {
        let tokens = tokenize(message);
        let mut sum = 0.0;
        let mut hits = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(&polarity) = POLARITY.get(token.as_str()) else {
                continue;
            };
            let negated = i > 0 && NEGATORS.contains(&tokens[i - 1].as_str());
            sum += if negated { -polarity } else { polarity };
            hits += 1;
        }

        if hits == 0 {
            return Ok(0.0);
        }
        Ok((sum / hits as f64).clamp(-1.0, 1.0))
    }
}
