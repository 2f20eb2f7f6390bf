use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{DomainError, DomainResult};

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a raga name to search.";
pub const INVALID_QUERY_MESSAGE: &str = "Please enter letters and spaces only (A-Z).";
pub const BLOCKED_QUERY_MESSAGE: &str =
    "This is a sacred site for ragas. Please avoid inappropriate content and search for a raga name.";

static QUERY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("query pattern is valid"));

/// Whole-word, case-insensitive profanity filter shared by search, chat and
/// feedback input.
static BLOCKED_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(abuse|abusive|asshole|bastard|bitch|bloody|bullshit|crap|damn|dick|fuck|fucking|idiot|jerk|moron|nonsense|obscene|pervert|porn|pornographic|racist|sex|sexual|shit|stupid|suck|trash|ugly|violence|violent|vulgar|whore)\b",
    )
    .expect("blocked word pattern is valid")
});

/// Returns true when `text` contains a blocked word
pub fn contains_blocked_word(text: &str) -> bool {
    BLOCKED_WORDS.is_match(text)
}

/// Validates a raw search query and returns its trimmed form.
///
/// Rules, checked in order:
/// 1. Not empty after trimming
/// 2. Letters and whitespace only
/// 3. No blocked words
pub fn validate_query(raw: &str) -> DomainResult<&str> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(DomainError::Validation(EMPTY_QUERY_MESSAGE.to_string()));
    }

    if !QUERY_PATTERN.is_match(trimmed) {
        return Err(DomainError::Validation(INVALID_QUERY_MESSAGE.to_string()));
    }

    if contains_blocked_word(trimmed) {
        return Err(DomainError::Validation(BLOCKED_QUERY_MESSAGE.to_string()));
    }

    Ok(trimmed)
}
