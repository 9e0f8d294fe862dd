//! Speaker-line parsing and document mode detection

use once_cell::sync::Lazy;
use regex::Regex;
use transcript_insights_config::constants::parsing::MAX_SPEAKER_LABEL;
use transcript_insights_core::DocumentMode;

/// A parsed `speaker: message` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerLine {
    pub speaker: String,
    pub message: String,
}

impl SpeakerLine {
    /// The reserved agent speaker label, matched exactly after trimming
    pub fn is_agent(&self) -> bool {
        self.speaker == "Agent"
    }
}

/// Raw-prefix agent marker; leading whitespace disqualifies a line on
/// purpose, matching the document-level heuristic
static AGENT_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Agent:").unwrap());

/// Generic `label:` speaker heuristic: a short colon-free prefix
static SPEAKER_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^[^:\n]{{1,{MAX_SPEAKER_LABEL}}}:")).unwrap()
});

/// Split a line on its first `:` into speaker and message, both trimmed.
///
/// Lines that are blank after trimming or contain no `:` are expected input
/// noise: they yield `None` and are skipped silently, not counted or logged
/// as errors.
pub fn parse_line(line: &str) -> Option<SpeakerLine> {
    if line.trim().is_empty() {
        return None;
    }
    let (speaker, message) = line.split_once(':')?;
    Some(SpeakerLine {
        speaker: speaker.trim().to_string(),
        message: message.trim().to_string(),
    })
}

/// Document-level mode decision, computed once before segmentation.
///
/// `Conversational` requires at least one `Agent:` line AND at least one
/// other line with a generic speaker label that is not agent-prefixed. A
/// document of only agent lines is `Normal`.
pub fn detect_mode(lines: &[&str]) -> DocumentMode {
    let has_agent = lines.iter().any(|line| AGENT_PREFIX.is_match(line));
    let has_other_speaker = lines
        .iter()
        .any(|line| SPEAKER_PREFIX.is_match(line) && !AGENT_PREFIX.is_match(line));

    if has_agent && has_other_speaker {
        DocumentMode::Conversational
    } else {
        DocumentMode::Normal
    }
}
