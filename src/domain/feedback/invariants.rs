use once_cell::sync::Lazy;
use regex::Regex;

use super::entity::{FeedbackForm, SignupForm};
use crate::domain::query::contains_blocked_word;
use crate::domain::{DomainError, DomainResult};

const MAX_EMAIL_CHARS: usize = 254;
const MAX_PHONE_CHARS: usize = 15;
const NAME_CHARS: std::ops::RangeInclusive<usize> = 2..=50;
const FEEDBACK_CHARS: std::ops::RangeInclusive<usize> = 10..=1000;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s\-']+$").expect("name pattern is valid"));

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Validates a feedback form. Rules are checked in the order the form
/// shows them, and only the first failure is reported.
pub fn validate_feedback(form: &FeedbackForm) -> DomainResult<()> {
    if form.email.is_empty() || form.feedback.is_empty() {
        return Err(invalid("Please provide an email and your feedback."));
    }

    if form.email.chars().count() > MAX_EMAIL_CHARS || !EMAIL_PATTERN.is_match(&form.email) {
        return Err(invalid("Please enter a valid email address (max 254 chars)."));
    }

    if !form.first_name.is_empty() && !is_valid_name(&form.first_name) {
        return Err(invalid(
            "First name must be 2-50 letters, spaces, hyphens, or apostrophes.",
        ));
    }

    if !form.last_name.is_empty() && !is_valid_name(&form.last_name) {
        return Err(invalid(
            "Last name must be 2-50 letters, spaces, hyphens, or apostrophes.",
        ));
    }

    if form.phone_number.chars().count() > MAX_PHONE_CHARS {
        return Err(invalid("Phone number must be 15 characters or fewer."));
    }

    if !FEEDBACK_CHARS.contains(&form.feedback.chars().count()) {
        return Err(invalid("Feedback must be between 10 and 1000 characters."));
    }

    if contains_blocked_word(&form.feedback) {
        return Err(invalid(
            "This is a sacred site for ragas. Please avoid inappropriate content.",
        ));
    }

    Ok(())
}

/// Login name, email and password are required
pub fn validate_signup(form: &SignupForm) -> DomainResult<()> {
    if form.login_name.is_empty() || form.email.is_empty() || form.password.is_empty() {
        return Err(invalid("Login name, email, and password are required."));
    }
    Ok(())
}

fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name) && NAME_CHARS.contains(&name.chars().count())
}

fn invalid(message: &str) -> DomainError {
    DomainError::Validation(message.to_string())
}
