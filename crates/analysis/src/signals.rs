//! Behavioral signal matchers
//!
//! Pattern tables for the per-line signal checks: contact capture (email,
//! phone), agent follow-up proposals, buying readiness, and trust concerns.
//! Patterns compile once into statics; all keyword sets match whole words,
//! case-insensitively.

use once_cell::sync::Lazy;
use regex::Regex;
use transcript_insights_config::constants::signals::MIN_PHONE_DIGITS;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

/// Deliberately permissive: optional country code, separators, parentheses.
/// A match only counts as a phone number after the digit-count check.
static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?(?:\(?\d{2,4}\)?[-.\s]?)?\d{3}[-.\s]?\d{3,4}[-.\s]?\d{0,4}")
        .unwrap()
});

static FOLLOW_UP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(follow up|schedule|demo|call|reach out|appointment|book)\b").unwrap()
});

static READINESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(buy|purchase|ready|interested|go ahead|sign me up|subscribe|order|start|proceed)\b",
    )
    .unwrap()
});

static TRUST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(scam|fake|trust|secure|safety|safe|legit|fraud|privacy|data leak|security)\b",
    )
    .unwrap()
});

/// Message contains an email address
pub fn contains_email(message: &str) -> bool {
    EMAIL.is_match(message)
}

/// Message contains a phone number: the loose pattern must match AND the
/// match must carry at least [`MIN_PHONE_DIGITS`] digits once separators are
/// stripped, so short numeric tokens like "room 42" do not qualify.
pub fn contains_phone(message: &str) -> bool {
    PHONE.find_iter(message).any(|m| {
        m.as_str().chars().filter(|c| c.is_ascii_digit()).count() >= MIN_PHONE_DIGITS
    })
}

/// Agent proposed a follow-up (checked on agent messages only)
pub fn contains_follow_up(message: &str) -> bool {
    FOLLOW_UP.is_match(message)
}

/// User signalled buying readiness (checked on user messages only)
pub fn contains_readiness(message: &str) -> bool {
    READINESS.is_match(message)
}

/// User raised trust or safety concerns (checked on user messages only)
pub fn contains_trust_concern(message: &str) -> bool {
    TRUST.is_match(message)
}
