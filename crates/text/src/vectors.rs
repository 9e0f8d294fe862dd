//! In-memory word-vector similarity
//!
//! Default [`SimilarityModel`]: a word → embedding table with cosine
//! similarity, loadable from a GloVe-style text file (`word v1 v2 ...` per
//! line). Lookups are case-insensitive; words without a vector yield `None`
//! so theme detection can skip them. Read-only after construction, hence
//! safe to share across concurrently processed documents.

use std::collections::HashMap;
use std::path::Path;
use transcript_insights_core::{AnalysisError, Result, SimilarityModel};

/// Word embedding table with cosine similarity
#[derive(Debug, Clone, Default)]
pub struct WordVectors {
    vectors: HashMap<String, Vec<f32>>,
    dimension: usize,
}

impl WordVectors {
    /// Build from an in-memory table. Vectors with a dimension different
    /// from the first entry are rejected.
    pub fn new(entries: HashMap<String, Vec<f32>>) -> Result<Self> {
        let dimension = entries.values().next().map(|v| v.len()).unwrap_or(0);
        for (word, vector) in &entries {
            if vector.len() != dimension {
                return Err(AnalysisError::Similarity {
                    message: format!(
                        "vector for '{}' has dimension {}, expected {}",
                        word,
                        vector.len(),
                        dimension
                    ),
                });
            }
        }
        let vectors = entries
            .into_iter()
            .map(|(word, vector)| (word.to_lowercase(), vector))
            .collect();
        Ok(Self { vectors, dimension })
    }

    /// Load from a GloVe-style whitespace-separated file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| AnalysisError::Resource {
                path: path.as_ref().display().to_string(),
                details: e.to_string(),
            })?;

        let mut entries = HashMap::new();
        for (line_no, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut parts = line.split_whitespace();
            let Some(word) = parts.next() else { continue };
            let vector: std::result::Result<Vec<f32>, _> =
                parts.map(|p| p.parse::<f32>()).collect();
            let vector = vector.map_err(|e| AnalysisError::Resource {
                path: path.as_ref().display().to_string(),
                details: format!("line {}: {}", line_no + 1, e),
            })?;
            entries.insert(word.to_string(), vector);
        }

        tracing::debug!(words = entries.len(), "loaded word vectors");
        Self::new(entries)
    }

    /// Number of known words
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Embedding dimension (0 when empty)
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    fn get(&self, term: &str) -> Option<&Vec<f32>> {
        self.vectors.get(&term.to_lowercase())
    }
}

fn cosine(a: &[f32], b: &[f32]) -> f64 {
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b) {
        dot += (*x as f64) * (*y as f64);
        norm_a += (*x as f64).powi(2);
        norm_b += (*y as f64).powi(2);
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

impl SimilarityModel for WordVectors {
    fn similarity(&self, a: &str, b: &str) -> Result<Option<f64>> {
        let (Some(va), Some(vb)) = (self.get(a), self.get(b)) else {
            return Ok(None);
        };
        // cosine can be slightly negative; the oracle contract is [0, 1]
        Ok(Some(cosine(va, vb).max(0.0)))
    }

    fn has_vector(&self, term: &str) -> bool {
        self.get(term).is_some()
    }
}
