// src/domain/chat.rs
//
// RagaBot prompt screening.
//
// Prompts are sanitized and screened locally before anything is sent to the
// chatbot backend. Some prompts get a canned local reply instead.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::query::contains_blocked_word;
use crate::domain::{DomainError, DomainResult};

pub const MAX_PROMPT_CHARS: usize = 600;

pub const EMPTY_PROMPT_MESSAGE: &str = "Please enter a message.";
pub const INJECTION_REPLY: &str =
    "I didn't understand what you said. Please ask a raga-related question.";
pub const BLOCKED_REPLY: &str =
    "This is a sacred site for ragas. Please avoid inappropriate content and ask a raga-related question.";

static CONTROL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x00-\x1F\x7F]+").expect("control char pattern is valid"));

static HTML_TAGS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("html tag pattern is valid"));

static INJECTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(select|insert|update|delete|drop|alter|truncate)\b")
        .expect("injection pattern is valid")
});

/// A sanitized prompt, at most `MAX_PROMPT_CHARS` characters long
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPrompt(String);

/// What to do with a prompt after screening
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatScreening {
    /// Safe to send to the backend
    Send(ChatPrompt),

    /// Answer locally with this text; nothing is sent
    LocalReply(&'static str),
}

impl ChatPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Sanitize and screen raw user input.
    ///
    /// Errors are input problems the user has to fix (empty, too long).
    /// Refusals are not errors: they come back as `LocalReply`.
    pub fn screen(raw: &str) -> DomainResult<ChatScreening> {
        let cleaned = sanitize(raw);

        if cleaned.is_empty() {
            return Err(DomainError::Validation(EMPTY_PROMPT_MESSAGE.to_string()));
        }

        if cleaned.chars().count() > MAX_PROMPT_CHARS {
            return Err(DomainError::Validation(format!(
                "Message too long. Max {} characters.",
                MAX_PROMPT_CHARS
            )));
        }

        if INJECTION_PATTERN.is_match(&cleaned) {
            return Ok(ChatScreening::LocalReply(INJECTION_REPLY));
        }

        if contains_blocked_word(&cleaned) {
            return Ok(ChatScreening::LocalReply(BLOCKED_REPLY));
        }

        Ok(ChatScreening::Send(ChatPrompt(cleaned)))
    }
}

/// Strip control characters and HTML tags, then trim
pub fn sanitize(raw: &str) -> String {
    let without_control = CONTROL_CHARS.replace_all(raw, "");
    let without_tags = HTML_TAGS.replace_all(&without_control, "");
    without_tags.trim().to_string()
}
