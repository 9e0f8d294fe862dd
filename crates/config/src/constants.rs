//! Centralized constants for the analytics engine
//!
//! Single source of truth for the numeric knobs used across the engine
//! crates, instead of hardcoding them at each call site.

/// Theme classification thresholds
pub mod themes {
    /// Minimum cosine similarity for a taxonomy keyword to count as present
    /// in a non-conversational document
    pub const SIMILARITY_THRESHOLD: f64 = 0.75;

    /// How many document-wide keywords feed the lexical theme tally
    pub const TOP_KEYWORDS: usize = 10;

    /// How many keywords are extracted per conversation unit
    pub const UNIT_TOP_KEYWORDS: usize = 5;
}

/// Signal detection thresholds
pub mod signals {
    /// Minimum digit count for a loose phone-pattern match to count as a
    /// phone number (rejects short numeric tokens like room numbers)
    pub const MIN_PHONE_DIGITS: usize = 7;
}

/// Line parsing limits
pub mod parsing {
    /// Maximum speaker-label length for the generic `label:` heuristic
    pub const MAX_SPEAKER_LABEL: usize = 40;

    /// Tokens at or below this length are dropped during keyword extraction
    pub const MIN_KEYWORD_LEN: usize = 3;
}
